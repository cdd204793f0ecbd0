use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identity of the caller of an operation
///
/// Supplied by the environment (a verified token subject) and recorded as
/// a team's owner at creation. Two identities are the same caller exactly
/// when they compare equal; no textual encoding is involved.
///
/// # Example
/// ```
/// use rosterkeep_api::domain::caller::CallerId;
/// use uuid::Uuid;
///
/// let id = Uuid::new_v4();
/// assert_eq!(CallerId::new(id), CallerId::from(id));
/// assert_ne!(CallerId::new(id), CallerId::new(Uuid::new_v4()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallerId(Uuid);

impl CallerId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for CallerId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for CallerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_bare_uuid() {
        let id = Uuid::new_v4();
        let value = serde_json::to_value(CallerId::new(id)).unwrap();

        assert_eq!(value, serde_json::Value::String(id.to_string()));
    }

    #[test]
    fn display_matches_uuid() {
        let id = Uuid::new_v4();
        assert_eq!(CallerId::new(id).to_string(), id.to_string());
    }
}

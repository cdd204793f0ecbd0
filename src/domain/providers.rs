// Environment primitives consumed by the service layer
// Implementations live in infrastructure::providers

use chrono::{DateTime, Utc};

/// Source of the current time
///
/// Successive calls must never go backwards.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Source of fresh, unique record identifiers
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

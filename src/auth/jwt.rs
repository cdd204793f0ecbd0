// JWT token creation and verification
// Tokens carry the caller identity in `sub` and expire after 8 hours

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::caller::CallerId;

/// JWT claims structure
///
/// # Fields
/// * `sub` - Subject (caller identity)
/// * `exp` - Expiry time (seconds since epoch)
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Caller identity (subject)
    pub sub: Uuid,
    /// Expiry timestamp (seconds since epoch)
    pub exp: usize,
}

impl Claims {
    /// The identity the token was issued to
    pub fn caller(&self) -> CallerId {
        CallerId::new(self.sub)
    }
}

/// Creates a JWT token for a caller
///
/// Tokens are issued by whatever identity provider fronts the service;
/// this helper exists for that provider and for tests.
///
/// # Token Properties
/// - Expires after 8 hours
/// - Signed with HS256 algorithm
/// - Contains the caller id in 'sub' claim
///
/// # Example
/// ```
/// use rosterkeep_api::auth::jwt::{create_token, verify_token};
/// use rosterkeep_api::domain::caller::CallerId;
/// use uuid::Uuid;
///
/// let caller = CallerId::new(Uuid::new_v4());
/// let token = create_token(caller, "your-secret-key").expect("valid token");
///
/// let claims = verify_token(&token, "your-secret-key").expect("valid token");
/// assert_eq!(claims.caller(), caller);
/// ```
pub fn create_token(caller: CallerId, secret: &str) -> Result<String, String> {
    let expiry = Utc::now() + Duration::hours(8);
    let claims = Claims {
        sub: caller.as_uuid(),
        exp: expiry.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(|e| e.to_string())
}

/// Verifies and decodes a JWT token
///
/// # Returns
/// * `Ok(Claims)` - The decoded claims if token is valid
/// * `Err(String)` - If token is invalid or expired
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, String> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "test-secret-key-for-unit-tests";

    #[test]
    fn create_and_verify_token() {
        let caller = CallerId::new(Uuid::new_v4());
        let token = create_token(caller, TEST_SECRET).expect("valid token");

        let claims = verify_token(&token, TEST_SECRET).expect("valid verification");
        assert_eq!(claims.caller(), caller);
    }

    #[test]
    fn wrong_secret_fails() {
        let token = create_token(CallerId::new(Uuid::new_v4()), TEST_SECRET).expect("valid token");

        let result = verify_token(&token, "wrong-secret");
        assert!(result.is_err());
    }

    #[test]
    fn invalid_token_fails() {
        let result = verify_token("invalid.token.string", TEST_SECRET);
        assert!(result.is_err());
    }

    #[test]
    fn token_expiry_set() {
        let token = create_token(CallerId::new(Uuid::new_v4()), TEST_SECRET).expect("valid token");

        let claims = verify_token(&token, TEST_SECRET).expect("valid verification");
        let expiry_time = claims.exp as i64;
        let now = Utc::now().timestamp();
        let in_8_hours = (Utc::now() + Duration::hours(8)).timestamp();

        assert!(expiry_time > now);
        assert!(expiry_time <= in_8_hours + 10); // 10 second buffer
    }
}

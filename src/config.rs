//! Service configuration loaded from the environment.
//!
//! A `.env` file in the working directory is honoured. Recognised
//! variables:
//!
//! | Variable | Default |
//! |---|---|
//! | `BIND_ADDR` | `0.0.0.0:3000` |
//! | `JWT_SECRET` | `dev-secret-key` |
//! | `STORE_MAX_RECORD_BYTES` | unbounded |
//! | `STORE_MAX_TOTAL_BYTES` | unbounded |

use std::net::SocketAddr;

use thiserror::Error;

use crate::infrastructure::repositories::StoreLimits;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_JWT_SECRET: &str = "dev-secret-key";

/// Errors raised while reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Runtime configuration for the service
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP listener binds to
    pub bind_addr: SocketAddr,
    /// HS256 secret used to verify bearer tokens
    pub jwt_secret: String,
    /// Size limits for the team store
    pub store_limits: StoreLimits,
}

impl AppConfig {
    /// Loads `.env` (if present) and reads the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                name: "BIND_ADDR",
                value: bind_addr.clone(),
            })?;

        let jwt_secret = lookup("JWT_SECRET").unwrap_or_else(|| {
            tracing::warn!("JWT_SECRET not set, using default");
            DEFAULT_JWT_SECRET.to_string()
        });

        let store_limits = StoreLimits {
            max_record_bytes: parse_bytes(&lookup, "STORE_MAX_RECORD_BYTES")?,
            max_total_bytes: parse_bytes(&lookup, "STORE_MAX_TOTAL_BYTES")?,
        };

        Ok(Self {
            bind_addr,
            jwt_secret,
            store_limits,
        })
    }
}

fn parse_bytes<F>(lookup: &F, name: &'static str) -> Result<Option<usize>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|value| {
            value
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidValue { name, value })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:3000".parse().unwrap());
        assert_eq!(config.jwt_secret, DEFAULT_JWT_SECRET);
        assert_eq!(config.store_limits, StoreLimits::default());
    }

    #[test]
    fn reads_all_variables() {
        let config = AppConfig::from_lookup(lookup(&[
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("JWT_SECRET", "s3cret"),
            ("STORE_MAX_RECORD_BYTES", "4096"),
            ("STORE_MAX_TOTAL_BYTES", " 1048576 "),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.jwt_secret, "s3cret");
        assert_eq!(config.store_limits.max_record_bytes, Some(4096));
        assert_eq!(config.store_limits.max_total_bytes, Some(1_048_576));
    }

    #[test]
    fn rejects_malformed_values() {
        let bad_addr = AppConfig::from_lookup(lookup(&[("BIND_ADDR", "nowhere")]));
        let bad_limit = AppConfig::from_lookup(lookup(&[("STORE_MAX_TOTAL_BYTES", "lots")]));

        assert!(matches!(
            bad_addr,
            Err(ConfigError::InvalidValue { name: "BIND_ADDR", .. })
        ));
        assert!(matches!(
            bad_limit,
            Err(ConfigError::InvalidValue {
                name: "STORE_MAX_TOTAL_BYTES",
                ..
            })
        ));
    }
}

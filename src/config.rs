//! Runtime configuration for the session core.
//!
//! Values come either from the builder methods on [`AuthConfig`] or from the
//! environment via [`AuthConfig::from_env`]:
//!
//! | Variable                | Required | Meaning                                      |
//! |-------------------------|----------|----------------------------------------------|
//! | `AUTH_SIGNING_KEY`      | yes      | Process-wide secret for the web layer (CSRF) |
//! | `AUTH_BYTES_PER_TOKEN`  | no       | Random bytes per session token (min 32)      |
//! | `AUTH_SESSION_TTL_SECS` | no       | Session lifetime; unset means no expiry      |

use std::env;
use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use time::Duration;

use crate::error::{Error, Result};

/// Lower bound on random bytes per session token.
///
/// Configured values below this are raised to it.
pub const MIN_BYTES_PER_TOKEN: usize = 32;

/// Environment variable holding the signing secret.
pub const SIGNING_KEY_VAR: &str = "AUTH_SIGNING_KEY";
/// Environment variable overriding [`MIN_BYTES_PER_TOKEN`].
pub const BYTES_PER_TOKEN_VAR: &str = "AUTH_BYTES_PER_TOKEN";
/// Environment variable with the session lifetime in seconds.
pub const SESSION_TTL_VAR: &str = "AUTH_SESSION_TTL_SECS";

/// Settings shared by [`SessionManager`](crate::SessionManager) and the
/// surrounding web layer.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    bytes_per_token: usize,
    session_ttl: Option<Duration>,
    signing_key: Option<Arc<SecretString>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            bytes_per_token: MIN_BYTES_PER_TOKEN,
            session_ttl: None,
            signing_key: None,
        }
    }
}

impl AuthConfig {
    /// Builds a configuration from the `AUTH_*` environment variables.
    ///
    /// Fails with [`Error::Config`] if the signing key is missing or empty,
    /// or if a numeric variable does not parse.
    pub fn from_env() -> Result<Self> {
        let signing_key = match env::var(SIGNING_KEY_VAR) {
            Ok(key) if !key.trim().is_empty() => SecretString::from(key),
            _ => {
                return Err(Error::Config(format!(
                    "{SIGNING_KEY_VAR} must be set to a non-empty value"
                )))
            }
        };

        let mut config = Self::default().with_signing_key(signing_key);

        if let Some(raw) = read_var(BYTES_PER_TOKEN_VAR) {
            let bytes = raw.parse::<usize>().map_err(|e| {
                Error::Config(format!("{BYTES_PER_TOKEN_VAR}={raw:?} is not a byte count: {e}"))
            })?;
            config = config.with_bytes_per_token(bytes);
        }

        if let Some(raw) = read_var(SESSION_TTL_VAR) {
            let secs = raw.parse::<i64>().map_err(|e| {
                Error::Config(format!("{SESSION_TTL_VAR}={raw:?} is not a number of seconds: {e}"))
            })?;
            config = config.with_session_ttl(Duration::seconds(secs))?;
        }

        Ok(config)
    }

    /// Sets how many random bytes back each session token.
    ///
    /// Values below [`MIN_BYTES_PER_TOKEN`] are silently raised to it.
    pub fn with_bytes_per_token(mut self, bytes: usize) -> Self {
        self.bytes_per_token = bytes.max(MIN_BYTES_PER_TOKEN);
        self
    }

    /// Makes sessions expire `ttl` after they were last issued.
    ///
    /// Fails with [`Error::Config`] unless `ttl` is positive; a zero or
    /// negative lifetime would expire every session as it is issued.
    pub fn with_session_ttl(mut self, ttl: Duration) -> Result<Self> {
        if !ttl.is_positive() {
            return Err(Error::Config(format!(
                "session lifetime must be positive, got {ttl}"
            )));
        }
        self.session_ttl = Some(ttl);
        Ok(self)
    }

    /// Sets the process-wide signing secret handed to the web layer.
    pub fn with_signing_key(mut self, key: impl Into<SecretString>) -> Self {
        self.signing_key = Some(Arc::new(key.into()));
        self
    }

    /// Random bytes behind each issued token, never below the floor.
    pub fn bytes_per_token(&self) -> usize {
        self.bytes_per_token
    }

    /// Session lifetime; `None` means sessions never expire.
    pub fn session_ttl(&self) -> Option<Duration> {
        self.session_ttl
    }

    /// Raw signing key bytes, if one was configured.
    pub fn signing_key(&self) -> Option<&[u8]> {
        self.signing_key
            .as_ref()
            .map(|key| key.expose_secret().as_bytes())
    }
}

fn read_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

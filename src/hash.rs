//! The two hashing strategies used by the core, chosen by purpose.
//!
//! * [`PasswordHasher`]: salted Argon2id with a fixed work factor. Digests are
//!   PHC strings and can only be verified, never looked up.
//! * [`token_digest`]: unsalted SHA-256. Deterministic, so the digest of a
//!   session token doubles as its lookup key. The token's own entropy is what
//!   makes this safe.
//!
//! The two are not interchangeable.

use argon2::password_hash::{self, PasswordHash, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};
use crate::secure_random;

/// Salt length in bytes for new password digests.
const SALT_LEN: usize = 16;

/// Argon2id password hashing with parameters fixed at construction.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher {
    /// Creates a hasher with the Argon2 default cost (19 MiB, 2 passes, 1 lane).
    pub fn new() -> Self {
        Self {
            params: Params::default(),
        }
    }

    /// Creates a hasher with explicit Argon2 cost parameters.
    ///
    /// Only new digests use these parameters; verification always uses the
    /// ones embedded in the stored digest.
    pub fn with_params(params: Params) -> Self {
        Self { params }
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hashes `password` with a fresh random salt.
    ///
    /// The returned PHC string embeds the algorithm, cost and salt, e.g.
    /// `$argon2id$v=19$m=19456,t=2,p=1$...`.
    pub fn hash_password(&self, password: &str) -> Result<String> {
        let salt_bytes =
            secure_random::random_bytes(SALT_LEN).map_err(|e| Error::Hashing(e.to_string()))?;
        let salt =
            SaltString::encode_b64(&salt_bytes).map_err(|e| Error::Hashing(e.to_string()))?;

        let digest = argon2::PasswordHasher::hash_password(&self.argon2(), password.as_bytes(), &salt)
            .map_err(|e| Error::Hashing(e.to_string()))?;

        Ok(digest.to_string())
    }

    /// Checks `candidate` against a stored PHC digest.
    ///
    /// Returns `Ok(false)` on a plain mismatch and [`Error::Verification`] when
    /// the digest itself is malformed or uses unsupported parameters.
    pub fn verify_password(&self, candidate: &str, digest: &str) -> Result<bool> {
        let parsed = PasswordHash::new(digest).map_err(|e| Error::Verification(e.to_string()))?;

        match self.argon2().verify_password(candidate.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(Error::Verification(e.to_string())),
        }
    }
}

/// Deterministic digest of a raw session token, as stored in `sessions.token_hash`.
///
/// SHA-256 encoded as URL-safe base64 without padding; always 43 characters.
pub fn token_digest(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    URL_SAFE_NO_PAD.encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_hasher() -> PasswordHasher {
        PasswordHasher::with_params(Params::new(Params::MIN_M_COST, 1, 1, None).unwrap())
    }

    #[test]
    fn password_round_trip() {
        let hasher = fast_hasher();
        for password in ["correcthorse", "", "pässwörd ✓", "with spaces and $ signs"] {
            let digest = hasher.hash_password(password).unwrap();
            assert!(digest.starts_with("$argon2id$"));
            assert!(hasher.verify_password(password, &digest).unwrap());
        }
    }

    #[test]
    fn wrong_password_is_false_not_error() {
        let hasher = fast_hasher();
        let digest = hasher.hash_password("correcthorse").unwrap();
        assert!(!hasher.verify_password("batterystaple", &digest).unwrap());
        assert!(!hasher.verify_password("Correcthorse", &digest).unwrap());
    }

    #[test]
    fn same_password_gets_distinct_salts() {
        let hasher = fast_hasher();
        let first = hasher.hash_password("correcthorse").unwrap();
        let second = hasher.hash_password("correcthorse").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify_password("correcthorse", &first).unwrap());
        assert!(hasher.verify_password("correcthorse", &second).unwrap());
    }

    #[test]
    fn verification_uses_embedded_parameters() {
        let digest = fast_hasher().hash_password("correcthorse").unwrap();
        // A hasher configured with other costs still verifies the old digest.
        assert!(PasswordHasher::new()
            .verify_password("correcthorse", &digest)
            .unwrap());
    }

    #[test]
    fn default_cost_is_embedded() {
        let digest = PasswordHasher::new().hash_password("pw").unwrap();
        assert!(digest.contains("m=19456,t=2,p=1"));
    }

    #[test]
    fn malformed_digest_is_a_verification_error() {
        let hasher = fast_hasher();
        for digest in [
            "",
            "plaintext",
            "$argon2id$v=19$m=lots,t=2,p=1$c2FsdHNhbHQ$aGFzaA",
        ] {
            assert!(matches!(
                hasher.verify_password("pw", digest),
                Err(Error::Verification(_))
            ));
        }
    }

    #[test]
    fn token_digest_is_deterministic_and_fixed_length() {
        let a = token_digest("some-token");
        assert_eq!(a, token_digest("some-token"));
        assert_eq!(a.len(), 43);
        assert_ne!(a, token_digest("some-tokem"));
        assert_eq!(token_digest("").len(), 43);
    }

    #[test]
    fn token_digest_known_vector() {
        // SHA-256("abc")
        assert_eq!(
            token_digest("abc"),
            "ungWv48Bz-pBQUDeXa4iI7ADYaOWF3qctBD_YfIAFa0"
        );
    }
}

//! Cryptographically secure random bytes and strings.
//!
//! Everything here draws from the operating system generator ([`OsRng`]).
//! A failing source is reported as [`EntropyError`]; there is no fallback to
//! a weaker generator.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

/// The secure random source could not supply the requested bytes.
#[derive(Debug, thiserror::Error)]
#[error("failed to read {requested} random bytes: {reason}")]
pub struct EntropyError {
    requested: usize,
    reason: String,
}

impl EntropyError {
    pub(crate) fn new(requested: usize, reason: impl Into<String>) -> Self {
        Self {
            requested,
            reason: reason.into(),
        }
    }
}

/// Returns `n` bytes from the operating system CSPRNG.
pub fn random_bytes(n: usize) -> Result<Vec<u8>, EntropyError> {
    fill_from(&mut OsRng, n)
}

/// Returns `n` random bytes encoded as URL-safe base64 without padding.
///
/// The output length is always `ceil(4 * n / 3)`.
pub fn random_string(n: usize) -> Result<String, EntropyError> {
    random_bytes(n).map(|bytes| URL_SAFE_NO_PAD.encode(bytes))
}

fn fill_from<R>(rng: &mut R, n: usize) -> Result<Vec<u8>, EntropyError>
where
    R: RngCore + CryptoRng,
{
    let mut bytes = vec![0u8; n];
    rng.try_fill_bytes(&mut bytes)
        .map_err(|e| EntropyError::new(n, e.to_string()))?;
    Ok(bytes)
}

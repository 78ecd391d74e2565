//! Cryptographically secure random bytes for initialization vectors

use rand::rngs::OsRng;
use rand::TryRngCore;
use zeroize::Zeroizing;

use crate::error::{ErrorCategory, ErrorKind, ObfusboxError, Result};

/// Generate an IV of `len` bytes from the operating system's CSPRNG.
///
/// Uses the fallible entropy API: if the OS cannot supply the requested
/// bytes the error is surfaced, never a buffer of predictable bytes.
pub fn generate_iv(len: usize) -> Result<Zeroizing<Vec<u8>>> {
    let mut iv = Zeroizing::new(vec![0u8; len]);
    OsRng.try_fill_bytes(iv.as_mut_slice()).map_err(|e| {
        ObfusboxError::new(
            ErrorCategory::Setup,
            ErrorKind::Entropy,
            format!("secure random source failed: {e}"),
        )
    })?;
    Ok(iv)
}

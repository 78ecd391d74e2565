//! Password-based key derivation using PBKDF2-HMAC-SHA1
//!
//! Two pieces: deriving a fixed-length key from a password and a public
//! salt, and calibrating an iteration count so that one derivation costs a
//! target amount of wall-clock time. The delay is the anti-brute-force
//! defense: the salt is public, so an attacker who obtains a derived key
//! must pay the full per-guess cost to search the password space.

use std::time::{Duration, Instant};

use hmac::Hmac;
use pbkdf2::pbkdf2;
use sha1::Sha1;
use zeroize::Zeroizing;

use crate::error::{ErrorCategory, ErrorKind, ObfusboxError, Result};

/// PRF used for derivation and calibration.
type HmacSha1 = Hmac<Sha1>;

/// Length in bytes of the raw PBKDF2 output (the SHA-1 digest length).
pub const DIGEST_LEN: usize = 20;

/// Iteration count of the calibration probe. Also the smallest count
/// calibration will ever return.
const PROBE_ITERATIONS: u32 = 10_000;

/// Conservative count used when the probe cannot produce a usable timing.
const FALLBACK_ITERATIONS: u32 = 200_000;

/// Derive a key of `key_len` bytes from a password and public salt.
///
/// PBKDF2-HMAC-SHA1 produces a 20-byte digest; the key is its first
/// `key_len` bytes. Requesting more than the digest provides is an error,
/// never silent expansion.
pub fn derive_key(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    key_len: usize,
) -> Result<Zeroizing<Vec<u8>>> {
    if iterations == 0 {
        return Err(ObfusboxError::new(
            ErrorCategory::Setup,
            ErrorKind::Derivation,
            "PBKDF2 iterations must be at least 1",
        ));
    }
    if key_len > DIGEST_LEN {
        return Err(ObfusboxError::new(
            ErrorCategory::Setup,
            ErrorKind::Derivation,
            format!("requested key length {key_len} exceeds the {DIGEST_LEN}-byte digest"),
        ));
    }

    let mut digest = Zeroizing::new([0u8; DIGEST_LEN]);
    pbkdf2::<HmacSha1>(password, salt, iterations, digest.as_mut_slice()).map_err(|e| {
        ObfusboxError::new(
            ErrorCategory::Setup,
            ErrorKind::Derivation,
            format!("PBKDF2 derivation failed: {e}"),
        )
    })?;

    Ok(Zeroizing::new(digest[..key_len].to_vec()))
}

/// Choose an iteration count such that one derivation takes approximately
/// `target_delay` of wall-clock time on this machine.
///
/// Runs a single probe derivation over synthetic input of the given lengths
/// and scales the probe count linearly to the target. The result is
/// monotonic in the target for a given probe measurement and is never below
/// the probe count. If the probe cannot run or the clock reports zero
/// elapsed time, the fixed conservative fallback is returned instead.
pub fn calibrate_iterations(
    password_len: usize,
    salt_len: usize,
    digest_len: usize,
    target_delay: Duration,
) -> u32 {
    let password = vec![0x70u8; password_len];
    let salt = vec![0x73u8; salt_len];
    let mut probe_out = vec![0u8; digest_len.max(1)];

    let started = Instant::now();
    if pbkdf2::<HmacSha1>(&password, &salt, PROBE_ITERATIONS, &mut probe_out).is_err() {
        return FALLBACK_ITERATIONS;
    }
    let elapsed = started.elapsed();
    if elapsed.is_zero() {
        return FALLBACK_ITERATIONS;
    }

    let scaled =
        (PROBE_ITERATIONS as u128).saturating_mul(target_delay.as_nanos()) / elapsed.as_nanos();
    scaled.clamp(PROBE_ITERATIONS as u128, u32::MAX as u128) as u32
}

//! Password-keyed obfuscation sessions
//!
//! An [`Obfuscator`] owns one derived key and one IV for its whole
//! lifetime. The IV is drawn once at construction and reused for every
//! message, so a session encrypts the same plaintext to the same
//! ciphertext, while two sessions built from the same password and salt
//! diverge. The IV does not travel with the ciphertext: only the session
//! that produced a ciphertext can decrypt it.

use std::time::Duration;

use zeroize::Zeroizing;

use crate::blockcrypt::{self, Direction};
use crate::error::{ErrorCategory, ErrorKind, ObfusboxError, Result};
use crate::kdf;
use crate::rng;
use crate::suite::CipherSuite;

/// Target wall-clock cost of one key derivation under calibrated
/// construction.
const KDF_TARGET_DELAY: Duration = Duration::from_millis(1000);

/// A ready-to-use obfuscation session.
#[derive(Debug)]
pub struct Obfuscator {
    suite: CipherSuite,
    key: Zeroizing<Vec<u8>>,
    iv: Zeroizing<Vec<u8>>,
}

impl Obfuscator {
    /// Build a session from a password and a public salt, calibrating the
    /// key derivation to roughly one second of wall-clock time on this
    /// machine.
    ///
    /// Fails with kind [`ErrorKind::Derivation`] or [`ErrorKind::Entropy`]
    /// (category [`ErrorCategory::Setup`]) if no key or IV can be produced;
    /// no instance exists in that case.
    pub fn new(password: &str, salt: &str, suite: CipherSuite) -> Result<Self> {
        let iterations = kdf::calibrate_iterations(
            password.len(),
            salt.len(),
            kdf::DIGEST_LEN,
            KDF_TARGET_DELAY,
        );
        Self::with_iterations(password, salt, iterations, suite)
    }

    /// Build a session with an explicit iteration count instead of
    /// calibrating one.
    ///
    /// Callers that need a known derivation cost (or tests that cannot
    /// afford the calibrated delay per construction) use this directly;
    /// [`Obfuscator::new`] delegates here after calibrating.
    pub fn with_iterations(
        password: &str,
        salt: &str,
        iterations: u32,
        suite: CipherSuite,
    ) -> Result<Self> {
        let key = kdf::derive_key(
            password.as_bytes(),
            salt.as_bytes(),
            iterations,
            suite.key_len(),
        )?;
        let iv = rng::generate_iv(suite.block_len())?;
        Ok(Self { suite, key, iv })
    }

    /// Encrypt a string, returning the padded ciphertext bytes.
    pub fn encrypt(&self, plaintext: &str) -> Result<Vec<u8>> {
        blockcrypt::transform(
            self.suite,
            Direction::Encrypt,
            &self.key,
            &self.iv,
            plaintext.as_bytes(),
        )
    }

    /// Decrypt ciphertext produced by this session back into a string.
    ///
    /// Fails with kind [`ErrorKind::Cipher`] on corrupted or foreign
    /// ciphertext and [`ErrorKind::Encoding`] if the decrypted bytes are
    /// not valid UTF-8. Both leave the session usable (category
    /// [`ErrorCategory::Message`]).
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<String> {
        let plaintext = blockcrypt::transform(
            self.suite,
            Direction::Decrypt,
            &self.key,
            &self.iv,
            ciphertext,
        )?;
        String::from_utf8(plaintext).map_err(|e| {
            ObfusboxError::with_source(
                ErrorCategory::Message,
                ErrorKind::Encoding,
                "decrypted bytes are not valid UTF-8",
                e,
            )
        })
    }
}

//! Obfusbox - password-based string obfuscation using PBKDF2 and padded
//! CBC block ciphers
//!
//! A password and a public salt are stretched into a cipher key
//! (PBKDF2-HMAC-SHA1 with a wall-clock-calibrated iteration count), paired
//! with a random IV, and used to reversibly obfuscate short strings with
//! AES-128 or DES in CBC mode. There is no authentication tag: this is
//! obfuscation of in-memory strings, not tamper-proof storage.

#![forbid(unsafe_code)]

pub mod blockcrypt;
pub mod error;
pub mod kdf;
pub mod obfuscator;
pub mod rng;
pub mod suite;

pub use error::{ErrorCategory, ErrorKind, ObfusboxError, Result};
pub use obfuscator::Obfuscator;
pub use suite::CipherSuite;

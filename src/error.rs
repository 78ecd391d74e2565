use std::error::Error as StdError;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorCategory {
    /// Construction of an obfuscator failed. No usable instance exists and
    /// retrying will not change the outcome; the caller cannot proceed
    /// without a key and IV.
    Setup,

    /// A single encrypt or decrypt call failed. The instance itself remains
    /// usable; only this message could not be processed.
    Message,
}

/// Condition flags for consumers that want to branch on error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The PBKDF2 primitive reported failure while deriving the key.
    Derivation,
    /// The secure random source could not supply the requested IV bytes.
    Entropy,
    /// The block cipher rejected its inputs. On decrypt this includes
    /// invalid padding from corrupted or tampered-with ciphertext.
    Cipher,
    /// Decrypted bytes were not valid UTF-8.
    Encoding,
}

#[derive(Debug, Error)]
#[error("{msg}")]
pub struct ObfusboxError {
    /// Broad error category, always provided.
    pub category: ErrorCategory,
    /// Specific condition tag. Every failure source in this crate maps to
    /// exactly one kind.
    pub kind: ErrorKind,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
    msg: String,
}

impl ObfusboxError {
    /// Creates a new error with a category, kind, and display message.
    pub fn new(category: ErrorCategory, kind: ErrorKind, msg: impl Into<String>) -> Self {
        Self {
            category,
            kind,
            source: None,
            msg: msg.into(),
        }
    }

    /// Creates a new error that retains the originating source error.
    pub fn with_source(
        category: ErrorCategory,
        kind: ErrorKind,
        msg: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self {
            category,
            kind,
            source: Some(Box::new(source)),
            msg: msg.into(),
        }
    }

    /// The user-facing message carried by the error.
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// Returns the preserved source error if present.
    pub fn source_error(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, ObfusboxError>;

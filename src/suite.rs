//! Supported cipher suites and their fixed parameters
//!
//! A suite tag is the only thing callers pick; the block and key sizes it
//! implies flow to the key derivation, IV generation, and cipher layers.
//! The concrete cipher behind each tag is resolved in `blockcrypt`; adding
//! a suite means adding a variant here and an arm to the dispatch there,
//! nothing else.

/// A supported block cipher family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherSuite {
    /// AES with a 128-bit key in CBC mode.
    Aes128,
    /// Single DES in CBC mode. Kept for compatibility with data produced by
    /// the DES profile; its 56-bit key is far too small for new secrets.
    Des,
}

impl CipherSuite {
    /// Cipher block size in bytes. Also the IV length.
    pub fn block_len(self) -> usize {
        match self {
            CipherSuite::Aes128 => 16,
            CipherSuite::Des => 8,
        }
    }

    /// Key length in bytes the cipher expects.
    pub fn key_len(self) -> usize {
        match self {
            CipherSuite::Aes128 => 16,
            CipherSuite::Des => 8,
        }
    }
}

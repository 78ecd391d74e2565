//! Padded block-cipher transforms over the supported suites
//!
//! CBC mode with PKCS#7 padding in both directions. This is plain
//! unauthenticated encryption: the only corruption signal on decrypt is
//! invalid padding, which is reported as an error, never a panic.

use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};

use crate::error::{ErrorCategory, ErrorKind, ObfusboxError, Result};
use crate::suite::CipherSuite;

type Aes128CbcEnc = cbc::Encryptor<aes::Aes128>;
type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;
type DesCbcEnc = cbc::Encryptor<des::Des>;
type DesCbcDec = cbc::Decryptor<des::Des>;

/// Which way to run the cipher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// Run the suite's cipher over `input` with the given key and IV.
///
/// Encrypting pads the input to a whole number of blocks and returns
/// exactly the bytes the cipher produced; decrypting strips the padding and
/// returns the original plaintext. This match is the single place a suite
/// tag is resolved to a concrete cipher.
pub fn transform(
    suite: CipherSuite,
    direction: Direction,
    key: &[u8],
    iv: &[u8],
    input: &[u8],
) -> Result<Vec<u8>> {
    match (suite, direction) {
        (CipherSuite::Aes128, Direction::Encrypt) => encrypt_padded::<Aes128CbcEnc>(key, iv, input),
        (CipherSuite::Aes128, Direction::Decrypt) => decrypt_padded::<Aes128CbcDec>(key, iv, input),
        (CipherSuite::Des, Direction::Encrypt) => encrypt_padded::<DesCbcEnc>(key, iv, input),
        (CipherSuite::Des, Direction::Decrypt) => decrypt_padded::<DesCbcDec>(key, iv, input),
    }
}

fn encrypt_padded<C>(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>>
where
    C: BlockEncryptMut + KeyIvInit,
{
    let cipher = C::new_from_slices(key, iv).map_err(|e| {
        ObfusboxError::new(
            ErrorCategory::Message,
            ErrorKind::Cipher,
            format!("cipher rejected key or IV length: {e}"),
        )
    })?;
    Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

fn decrypt_padded<C>(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>>
where
    C: BlockDecryptMut + KeyIvInit,
{
    let cipher = C::new_from_slices(key, iv).map_err(|e| {
        ObfusboxError::new(
            ErrorCategory::Message,
            ErrorKind::Cipher,
            format!("cipher rejected key or IV length: {e}"),
        )
    })?;
    cipher
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| {
            ObfusboxError::new(
                ErrorCategory::Message,
                ErrorKind::Cipher,
                "corrupt ciphertext, tampered-with data, or mismatched key and IV",
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aes_roundtrip(input: &[u8]) -> (Vec<u8>, Vec<u8>) {
        let key = [0x11u8; 16];
        let iv = [0x22u8; 16];
        let ct = transform(CipherSuite::Aes128, Direction::Encrypt, &key, &iv, input).unwrap();
        let pt = transform(CipherSuite::Aes128, Direction::Decrypt, &key, &iv, &ct).unwrap();
        (ct, pt)
    }

    #[test]
    fn test_aes128_cbc_known_first_block() {
        // First ciphertext block of NIST SP 800-38A, CBC-AES128.Encrypt.
        let key = hex::decode("2b7e151628aed2a6abf7158809cf4f3c").unwrap();
        let iv = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
        let plaintext = hex::decode("6bc1bee22e409f96e93d7e117393172a").unwrap();

        let ct = transform(
            CipherSuite::Aes128,
            Direction::Encrypt,
            &key,
            &iv,
            &plaintext,
        )
        .unwrap();

        // One data block plus one full padding block.
        assert_eq!(ct.len(), 32);
        assert_eq!(
            ct[..16],
            hex::decode("7649abac8119b246cee98e9b12e9197d").unwrap()[..]
        );
    }

    #[test]
    fn test_aes_roundtrip() {
        let (ct, pt) = aes_roundtrip(b"attack at dawn");
        assert_eq!(ct.len(), 16);
        assert_eq!(pt, b"attack at dawn");
    }

    #[test]
    fn test_des_roundtrip() {
        let key = [0x01u8; 8];
        let iv = [0x02u8; 8];
        let ct = transform(CipherSuite::Des, Direction::Encrypt, &key, &iv, b"Mrigank").unwrap();
        assert_eq!(ct.len(), 8);
        let pt = transform(CipherSuite::Des, Direction::Decrypt, &key, &iv, &ct).unwrap();
        assert_eq!(pt, b"Mrigank");
    }

    #[test]
    fn test_empty_input_encrypts_to_one_padding_block() {
        let (ct, pt) = aes_roundtrip(b"");
        assert_eq!(ct.len(), 16);
        assert_eq!(pt, b"");
    }

    #[test]
    fn test_output_is_trimmed_to_produced_bytes() {
        // 17 bytes pads to two AES blocks, not the worst-case allocation.
        let (ct, _) = aes_roundtrip(&[0x41u8; 17]);
        assert_eq!(ct.len(), 32);
    }

    #[test]
    fn test_wrong_key_length_rejected() {
        let err = transform(
            CipherSuite::Aes128,
            Direction::Encrypt,
            &[0u8; 7],
            &[0u8; 16],
            b"x",
        )
        .expect_err("expected key length rejection");
        assert_eq!(err.kind, ErrorKind::Cipher);
        assert_eq!(err.category, ErrorCategory::Message);
    }

    #[test]
    fn test_wrong_iv_length_rejected() {
        let err = transform(
            CipherSuite::Des,
            Direction::Encrypt,
            &[0u8; 8],
            &[0u8; 16],
            b"x",
        )
        .expect_err("expected IV length rejection");
        assert_eq!(err.kind, ErrorKind::Cipher);
    }

    #[test]
    fn test_partial_block_ciphertext_rejected() {
        let key = [0x11u8; 16];
        let iv = [0x22u8; 16];
        let err = transform(
            CipherSuite::Aes128,
            Direction::Decrypt,
            &key,
            &iv,
            &[0u8; 15],
        )
        .expect_err("expected partial block rejection");
        assert_eq!(err.kind, ErrorKind::Cipher);
    }

    #[test]
    fn test_tampered_padding_block_rejected() {
        // A block-aligned plaintext ends in a full padding block. Flipping a
        // byte in the preceding ciphertext block flips the same byte of the
        // decrypted padding block, which PKCS#7 is guaranteed to reject.
        let (mut ct, _) = aes_roundtrip(&[0x41u8; 16]);
        assert_eq!(ct.len(), 32);
        let idx = ct.len() - 32;
        ct[idx] ^= 0x01;

        let key = [0x11u8; 16];
        let iv = [0x22u8; 16];
        let err = transform(CipherSuite::Aes128, Direction::Decrypt, &key, &iv, &ct)
            .expect_err("expected padding rejection");
        assert_eq!(err.kind, ErrorKind::Cipher);
    }
}

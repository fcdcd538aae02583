//! RSA field encryption over hex-encoded key material.
//!
//! Mirrors the wire format of the surrounding platform: DER keys and
//! ciphertext both travel as hex text, plaintext as UTF-8.

use crate::error::{CryptoError, CryptoResult};
use ::rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use ::rsa::{Pkcs1v15Encrypt, RsaPrivateKey, RsaPublicKey};

/// Encrypts a plaintext field value with a hex-encoded SPKI public key.
///
/// Returns the ciphertext as lowercase hex.
pub fn encrypt(public_key_hex: &str, plaintext: &str) -> CryptoResult<String> {
    let der = decode_hex(public_key_hex)?;
    let key = RsaPublicKey::from_public_key_der(&der)
        .map_err(|e| CryptoError::InvalidKey(format!("public key: {e}")))?;

    let sealed = key
        .encrypt(&mut rand::thread_rng(), Pkcs1v15Encrypt, plaintext.as_bytes())
        .map_err(|e| CryptoError::CipherFailure(format!("rsa encrypt: {e}")))?;

    Ok(hex::encode(sealed))
}

/// Decrypts hex ciphertext with a hex-encoded PKCS#8 private key.
pub fn decrypt(private_key_hex: &str, ciphertext_hex: &str) -> CryptoResult<String> {
    let der = decode_hex(private_key_hex)?;
    let key = RsaPrivateKey::from_pkcs8_der(&der)
        .map_err(|e| CryptoError::InvalidKey(format!("private key: {e}")))?;

    let sealed = decode_hex(ciphertext_hex)?;
    let plain = key
        .decrypt(Pkcs1v15Encrypt, &sealed)
        .map_err(|e| CryptoError::CipherFailure(format!("rsa decrypt: {e}")))?;

    String::from_utf8(plain)
        .map_err(|_| CryptoError::CipherFailure("decrypted bytes are not valid UTF-8".into()))
}

/// Hex-to-bytes with the adapter's error taxonomy. Odd-length and non-hex
/// input are both `MalformedInput`; the offending bytes are not echoed back.
pub fn decode_hex(value: &str) -> CryptoResult<Vec<u8>> {
    hex::decode(value).map_err(|_| CryptoError::MalformedInput("invalid hex string".into()))
}

//! AES-128-CBC with a fixed shared key/IV pair.
//!
//! The legacy deployment ships one 16-byte key known at process start and
//! reuses it as the IV. That weakness is inherited, not endorsed: the pair
//! is confined to this type so a rotation only touches its construction
//! site. Output is url-safe base64 without padding, matching the stored
//! format of existing rows.

use crate::error::{CryptoError, CryptoResult};
use aes::Aes128;
use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use zeroize::{Zeroize, ZeroizeOnDrop};

type Aes128CbcEnc = cbc::Encryptor<Aes128>;
type Aes128CbcDec = cbc::Decryptor<Aes128>;

/// Shared-key AES-128-CBC cipher.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedKeyCipher {
    key: [u8; 16],
    iv: [u8; 16],
}

impl SharedKeyCipher {
    pub fn new(key: [u8; 16], iv: [u8; 16]) -> Self {
        Self { key, iv }
    }

    /// Legacy construction: the IV is the key itself.
    pub fn from_key(key: [u8; 16]) -> Self {
        Self { key, iv: key }
    }

    /// Encrypts a UTF-8 value, returning url-safe base64 without padding.
    pub fn encrypt(&self, plaintext: &str) -> String {
        let sealed = Aes128CbcEnc::new((&self.key).into(), (&self.iv).into())
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());
        URL_SAFE_NO_PAD.encode(sealed)
    }

    /// Decrypts a value produced by [`SharedKeyCipher::encrypt`].
    pub fn decrypt(&self, encoded: &str) -> CryptoResult<String> {
        if encoded.is_empty() {
            return Err(CryptoError::MalformedInput("empty ciphertext".into()));
        }

        let sealed = URL_SAFE_NO_PAD
            .decode(encoded)
            .map_err(|_| CryptoError::MalformedInput("invalid base64 ciphertext".into()))?;

        let plain = Aes128CbcDec::new((&self.key).into(), (&self.iv).into())
            .decrypt_padded_vec_mut::<Pkcs7>(&sealed)
            .map_err(|_| CryptoError::CipherFailure("aes decrypt: bad padding".into()))?;

        String::from_utf8(plain)
            .map_err(|_| CryptoError::CipherFailure("decrypted bytes are not valid UTF-8".into()))
    }
}

//! Resolved key material.

use fieldshield_types::KeyScope;
use std::fmt;
use zeroize::Zeroizing;

/// Hex-encoded PKCS#8 private key.
///
/// Never logged, never serialized; the backing buffer is zeroized on drop
/// and the only way to read it is the explicit [`PrivateKeyHex::expose`].
pub struct PrivateKeyHex(Zeroizing<String>);

impl PrivateKeyHex {
    pub fn new(hex: String) -> Self {
        Self(Zeroizing::new(hex))
    }

    /// Hands out the raw hex for a decrypt operation.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PrivateKeyHex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKeyHex(<redacted>)")
    }
}

/// RSA key pair resolved for one scope.
///
/// The public half is safe to cache and log; the private half lives behind
/// [`PrivateKeyHex`].
#[derive(Debug)]
pub struct KeyMaterial {
    pub scope: KeyScope,
    pub public_key_hex: String,
    private_key: PrivateKeyHex,
}

impl KeyMaterial {
    pub fn new(scope: KeyScope, public_key_hex: String, private_key_hex: String) -> Self {
        Self {
            scope,
            public_key_hex,
            private_key: PrivateKeyHex::new(private_key_hex),
        }
    }

    pub fn private_key(&self) -> &PrivateKeyHex {
        &self.private_key
    }
}

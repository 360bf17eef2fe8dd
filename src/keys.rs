//! Secret key material for signing and encrypting cookies.

use std::fmt;

use rand::RngCore as _;
use rand::rngs::OsRng;

/// An opaque secret key.
///
/// Keys of any length are accepted; a short key weakens the MAC but that is
/// caller policy, not a codec error. `Debug` output is redacted so key
/// material never reaches logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Key(Vec<u8>);

impl Key {
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Generates a random 64-byte key from the operating system RNG.
    #[must_use]
    pub fn generate() -> Self {
        let mut bytes = [0u8; 64];
        OsRng.fill_bytes(&mut bytes);
        Self(bytes.to_vec())
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Key([REDACTED])")
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Self(s.into_bytes())
    }
}

impl From<&[u8]> for Key {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<Vec<u8>> for Key {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

/// The signing key plus an optional encryption key.
#[derive(Debug, Clone)]
pub struct KeySet {
    pub(crate) signing: Key,
    pub(crate) encryption: Option<Key>,
}

impl KeySet {
    /// A key set that signs but does not encrypt.
    ///
    /// The payload stays readable in the cookie; it is still tamper-proof.
    #[must_use]
    pub fn signed(signing: impl Into<Key>) -> Self {
        Self {
            signing: signing.into(),
            encryption: None,
        }
    }

    /// A key set that signs and encrypts.
    ///
    /// The encryption key must be 16, 24, or 32 bytes when it is used; an
    /// invalid length fails at encode/decode time, not here.
    #[must_use]
    pub fn private(signing: impl Into<Key>, encryption: impl Into<Key>) -> Self {
        Self {
            signing: signing.into(),
            encryption: Some(encryption.into()),
        }
    }
}

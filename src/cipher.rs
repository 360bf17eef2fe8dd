//! Optional symmetric encryption of the serialized payload.
//!
//! Active only when an encryption key is configured; without one the payload
//! passes through untouched. Encryption is AES-GCM with a fresh random
//! 96-bit nonce per call, prepended to the ciphertext so decryption can
//! recover it. Two encryptions of identical bytes are expected to differ.

use aes_gcm::aead::consts::U12;
use aes_gcm::aead::{Aead, AeadCore, KeyInit};
use aes_gcm::aes::Aes192;
use aes_gcm::{Aes128Gcm, Aes256Gcm, AesGcm, Nonce};
use rand::RngCore as _;
use rand::rngs::OsRng;

use crate::error::{CodecError, Result};
use crate::keys::Key;

type Aes192Gcm = AesGcm<Aes192, U12>;

const NONCE_LEN: usize = 12;
const TAG_LEN: usize = 16;

/// Encrypts the payload under a 16, 24, or 32 byte key.
///
/// Any other key length fails here rather than at key construction.
pub(crate) fn encrypt(payload: &[u8], key: &Key) -> Result<Vec<u8>> {
    let mut nonce = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce);

    let ciphertext = match key.len() {
        16 => seal::<Aes128Gcm>(&nonce, payload, key),
        24 => seal::<Aes192Gcm>(&nonce, payload, key),
        32 => seal::<Aes256Gcm>(&nonce, payload, key),
        _ => Err(CodecError::Encrypt(
            "encryption key must be 16, 24, or 32 bytes",
        )),
    }?;

    let mut out = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    out.extend_from_slice(&nonce);
    out.extend_from_slice(&ciphertext);
    Ok(out)
}

/// Decrypts a nonce-prefixed ciphertext.
///
/// A bad key length, a truncated ciphertext, or a tag mismatch all fail with
/// [`CodecError::Decrypt`]; none of them yield an empty payload.
pub(crate) fn decrypt(data: &[u8], key: &Key) -> Result<Vec<u8>> {
    if data.len() < NONCE_LEN + TAG_LEN {
        return Err(CodecError::Decrypt);
    }
    let (nonce, ciphertext) = data.split_at(NONCE_LEN);

    match key.len() {
        16 => open::<Aes128Gcm>(nonce, ciphertext, key),
        24 => open::<Aes192Gcm>(nonce, ciphertext, key),
        32 => open::<Aes256Gcm>(nonce, ciphertext, key),
        _ => Err(CodecError::Decrypt),
    }
}

fn seal<C>(nonce: &[u8; NONCE_LEN], payload: &[u8], key: &Key) -> Result<Vec<u8>>
where
    C: Aead + KeyInit + AeadCore<NonceSize = U12>,
{
    let cipher =
        C::new_from_slice(key.as_bytes()).map_err(|_| CodecError::Encrypt("invalid key length"))?;
    cipher
        .encrypt(Nonce::from_slice(nonce), payload)
        .map_err(|_| CodecError::Encrypt("AES-GCM encryption failed"))
}

fn open<C>(nonce: &[u8], ciphertext: &[u8], key: &Key) -> Result<Vec<u8>>
where
    C: Aead + KeyInit + AeadCore<NonceSize = U12>,
{
    let cipher = C::new_from_slice(key.as_bytes()).map_err(|_| CodecError::Decrypt)?;
    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| CodecError::Decrypt)
}

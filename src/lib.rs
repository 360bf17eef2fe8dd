//! Signed and optionally encrypted session cookies.
//!
//! This crate implements the codec that turns a flat map of session values
//! into the exact string a `Set-Cookie` header would carry, and back again:
//! serialize, optionally encrypt, authenticate, and frame URL-safely.
//!
//! The wire format is three base64url segments joined by `|`:
//! timestamp, payload, MAC.
//!
//! # Security
//! Every cookie is authenticated with HMAC-SHA256 over the cookie name, the
//! issue timestamp, and the payload; decoding verifies the MAC before
//! anything else touches the payload. Encryption (AES-GCM) is an explicit
//! opt-in via [`KeySet::private`]; without it the payload is readable in the
//! cookie but still tamper-proof.
//!
//! Signing keys of any length are accepted. A short key weakens the MAC;
//! choosing a strong key is the caller's responsibility.

mod batch;
mod cipher;
mod codec;
mod config;
mod error;
mod frame;
mod keys;
mod mac;
mod values;

pub use cookie::SameSite;

pub use crate::batch::BatchEncoder;
pub use crate::codec::SecureCookieCodec;
pub use crate::config::CookieConfig;
pub use crate::error::{CodecError, Result};
pub use crate::keys::{Key, KeySet};
pub use crate::values::{SessionValues, Value};

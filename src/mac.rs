//! Keyed authentication of cookie contents.
//!
//! The MAC covers the cookie name, the issue timestamp, and the payload, in
//! that order. The order is a wire contract: changing it would break every
//! previously issued cookie.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::keys::Key;

type HmacSha256 = Hmac<Sha256>;

pub(crate) const MAC_LEN: usize = 32;

/// Signs `name`, `timestamp`, and `payload` with HMAC-SHA256.
///
/// The timestamp enters the digest as eight big-endian bytes, so the fields
/// need no separators to be unambiguous.
pub(crate) fn sign(name: &str, timestamp: i64, payload: &[u8], key: &Key) -> [u8; MAC_LEN] {
    mac_for(name, timestamp, payload, key).finalize().into_bytes().into()
}

/// Verifies a MAC in constant time.
pub(crate) fn verify(name: &str, timestamp: i64, payload: &[u8], tag: &[u8], key: &Key) -> bool {
    mac_for(name, timestamp, payload, key).verify_slice(tag).is_ok()
}

fn mac_for(name: &str, timestamp: i64, payload: &[u8], key: &Key) -> HmacSha256 {
    // SAFETY: HmacSha256::new_from_slice only fails if the key is invalid,
    // but HMAC-SHA256 accepts keys of any length, so this cannot fail.
    #[allow(clippy::expect_used)]
    let mut mac = HmacSha256::new_from_slice(key.as_bytes()).expect("HMAC accepts keys of any size");
    mac.update(name.as_bytes());
    mac.update(&timestamp.to_be_bytes());
    mac.update(payload);
    mac
}

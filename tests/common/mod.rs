#![allow(dead_code)]

// Shared helpers for integration tests.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use cookie_seal::SessionValues;

pub fn sample_values() -> SessionValues {
    let mut values = SessionValues::new();
    values.insert("name", "admin");
    values
}

/// Splits an encoded cookie into its three base64url segments.
pub fn segments(cookie: &str) -> Vec<String> {
    cookie.split('|').map(str::to_owned).collect()
}

/// Flips one byte inside the given segment and reassembles the cookie.
///
/// The result is still valid base64url, so it reaches the MAC check instead
/// of failing as malformed.
pub fn flip_byte_in_segment(cookie: &str, segment_index: usize, byte_index: usize) -> String {
    let mut segments = segments(cookie);
    let mut bytes = URL_SAFE_NO_PAD
        .decode(&segments[segment_index])
        .expect("segment decodes successfully");
    bytes[byte_index] ^= 0x01;
    segments[segment_index] = URL_SAFE_NO_PAD.encode(bytes);
    segments.join("|")
}

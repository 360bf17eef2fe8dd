//! URL-safe framing of the cookie wire format.
//!
//! Layout: `base64url(timestamp) | base64url(payload) | base64url(mac)`,
//! where the timestamp is eight big-endian bytes of Unix seconds and the
//! base64 alphabet is URL-safe without padding. The separator and alphabet
//! are a wire contract; every character in the result is legal in a cookie
//! value.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};

use crate::error::{CodecError, Result};

const SEPARATOR: char = '|';

pub(crate) fn frame(timestamp: i64, payload: &[u8], mac: &[u8]) -> String {
    format!(
        "{}{SEPARATOR}{}{SEPARATOR}{}",
        URL_SAFE_NO_PAD.encode(timestamp.to_be_bytes()),
        URL_SAFE_NO_PAD.encode(payload),
        URL_SAFE_NO_PAD.encode(mac),
    )
}

/// Splits a cookie value back into timestamp, payload, and MAC.
///
/// Structural problems (segment count, base64, timestamp width or range)
/// are all rejected here, before any cryptographic check runs.
pub(crate) fn unframe(value: &str) -> Result<(i64, Vec<u8>, Vec<u8>)> {
    let mut segments = value.split(SEPARATOR);
    let (Some(ts), Some(payload), Some(mac), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(CodecError::Malformed("expected three segments"));
    };

    let ts = URL_SAFE_NO_PAD
        .decode(ts)
        .map_err(|_| CodecError::Malformed("timestamp segment is not valid base64url"))?;
    let ts: [u8; 8] = ts
        .try_into()
        .map_err(|_| CodecError::Malformed("timestamp segment has the wrong width"))?;
    let timestamp = i64::from_be_bytes(ts);
    if timestamp < 0 {
        return Err(CodecError::Malformed("timestamp is out of range"));
    }

    let payload = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| CodecError::Malformed("payload segment is not valid base64url"))?;
    let mac = URL_SAFE_NO_PAD
        .decode(mac)
        .map_err(|_| CodecError::Malformed("mac segment is not valid base64url"))?;

    Ok((timestamp, payload, mac))
}

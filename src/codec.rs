//! The encode/decode facade over serialization, encryption, authentication,
//! and framing.

use time::{Duration, OffsetDateTime};

use crate::error::{CodecError, Result};
use crate::keys::{Key, KeySet};
use crate::values::SessionValues;
use crate::{cipher, frame, mac, values};

/// A stateless codec turning session values into authenticated cookie
/// values and back.
///
/// Every call is an independent, pure computation over its inputs; a codec
/// can be shared freely across threads, and many codecs with different keys
/// can run in parallel.
#[derive(Debug, Clone)]
pub struct SecureCookieCodec {
    keys: KeySet,
    max_age: Option<Duration>,
}

impl SecureCookieCodec {
    /// A codec over an existing key set.
    #[must_use]
    pub fn new(keys: KeySet) -> Self {
        Self {
            keys,
            max_age: None,
        }
    }

    /// A codec that signs the payload but leaves it readable.
    #[must_use]
    pub fn signed(key: impl Into<Key>) -> Self {
        Self::new(KeySet::signed(key))
    }

    /// A codec that signs and encrypts the payload.
    #[must_use]
    pub fn private(signing: impl Into<Key>, encryption: impl Into<Key>) -> Self {
        Self::new(KeySet::private(signing, encryption))
    }

    /// Rejects cookies older than `max_age` at decode time.
    ///
    /// Default: no expiry.
    #[must_use]
    pub fn with_max_age(mut self, max_age: Duration) -> Self {
        self.max_age = Some(max_age);
        self
    }

    /// Encodes session values into a cookie value, stamped with the current
    /// time.
    pub fn encode(&self, name: &str, values: &SessionValues) -> Result<String> {
        self.encode_at(name, values, OffsetDateTime::now_utc().unix_timestamp())
    }

    /// Encodes with an explicit issue timestamp.
    ///
    /// This is primarily useful for testing and debugging.
    pub fn encode_at(&self, name: &str, values: &SessionValues, timestamp: i64) -> Result<String> {
        let mut payload = values::serialize(values)?;
        if let Some(key) = &self.keys.encryption {
            payload = cipher::encrypt(&payload, key)?;
        }
        let tag = mac::sign(name, timestamp, &payload, &self.keys.signing);
        Ok(frame::frame(timestamp, &payload, &tag))
    }

    /// Decodes and verifies a cookie value back into session values.
    pub fn decode(&self, name: &str, value: &str) -> Result<SessionValues> {
        self.decode_at(name, value, OffsetDateTime::now_utc().unix_timestamp())
    }

    /// Decodes against an explicit current time.
    ///
    /// This is primarily useful for testing and debugging.
    pub fn decode_at(&self, name: &str, value: &str, now: i64) -> Result<SessionValues> {
        let (timestamp, payload, tag) = frame::unframe(value)?;

        // Integrity first: nothing past this point touches unauthenticated
        // data.
        if !mac::verify(name, timestamp, &payload, &tag, &self.keys.signing) {
            tracing::warn!(name, "cookie authentication failed");
            return Err(CodecError::Authentication);
        }

        if let Some(max_age) = self.max_age
            && now - timestamp > max_age.whole_seconds()
        {
            return Err(CodecError::Expired);
        }

        let payload = match &self.keys.encryption {
            Some(key) => cipher::decrypt(&payload, key)?,
            None => payload,
        };

        values::deserialize(&payload)
    }
}

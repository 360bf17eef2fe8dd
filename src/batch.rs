//! Batch encoding of one cookie per candidate key.
//!
//! Given a stream of candidate signing keys, one per line, the batch encoder
//! produces the `Set-Cookie` value each key would have issued for the same
//! session, one output line per key and in input order.

use std::io::{self, BufRead, Write};

use crate::codec::SecureCookieCodec;
use crate::config::CookieConfig;
use crate::keys::Key;
use crate::values::SessionValues;

/// Drives [`SecureCookieCodec::encode`] over a stream of candidate keys.
#[derive(Debug, Clone)]
pub struct BatchEncoder {
    name: String,
    values: SessionValues,
    config: CookieConfig,
    encryption: Option<Key>,
}

impl BatchEncoder {
    #[must_use]
    pub fn new(name: impl Into<String>, values: SessionValues) -> Self {
        Self {
            name: name.into(),
            values,
            config: CookieConfig::default(),
            encryption: None,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: CookieConfig) -> Self {
        self.config = config;
        self
    }

    /// Encrypts every payload under a fixed key while the signing key varies
    /// per line.
    #[must_use]
    pub fn with_encryption_key(mut self, key: impl Into<Key>) -> Self {
        self.encryption = Some(key.into());
        self
    }

    /// Encodes one cookie per key line and writes one output line per key.
    ///
    /// Each line is treated as an opaque signing key (UTF-8 bytes, trailing
    /// newline stripped). A key whose encode fails produces an empty line
    /// and the batch continues; only I/O errors abort it.
    ///
    /// Returns the number of keys processed.
    pub fn run<R: BufRead, W: Write>(&self, keys: R, mut out: W) -> io::Result<usize> {
        let mut processed = 0;
        for line in keys.lines() {
            let key = line?;
            let codec = match &self.encryption {
                Some(enc) => SecureCookieCodec::private(key.as_str(), enc.clone()),
                None => SecureCookieCodec::signed(key.as_str()),
            };

            match codec.encode(&self.name, &self.values) {
                Ok(value) => writeln!(out, "{}", self.config.set_cookie(&self.name, &value))?,
                Err(err) => {
                    tracing::warn!(err = %err, "cookie encode failed for candidate key");
                    writeln!(out)?;
                }
            }
            processed += 1;
        }
        out.flush()?;
        Ok(processed)
    }
}

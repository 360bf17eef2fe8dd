use thiserror::Error;

/// Errors raised while encoding or decoding a cookie.
///
/// Every failure cause gets its own variant so callers can tell a wrong key
/// apart from corrupt input without matching on message strings. All of them
/// are terminal for the call that raised them; none are retryable.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Session values could not be serialized into payload bytes.
    #[error("failed to serialize session values: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Payload bytes do not parse back into session values.
    #[error("failed to deserialize session payload: {0}")]
    Deserialize(#[source] serde_json::Error),

    /// The payload could not be encrypted.
    #[error("encryption failed: {0}")]
    Encrypt(&'static str),

    /// The ciphertext could not be decrypted under the configured key.
    #[error("decryption failed")]
    Decrypt,

    /// The cookie value is not a well-formed three-segment frame.
    #[error("malformed cookie: {0}")]
    Malformed(&'static str),

    /// The embedded timestamp is older than the configured max age.
    #[error("cookie has expired")]
    Expired,

    /// MAC verification failed: wrong key, tampered data, or wrong name.
    #[error("cookie authentication failed")]
    Authentication,
}

pub type Result<T> = std::result::Result<T, CodecError>;

mod common;

use cookie_seal::{CodecError, SecureCookieCodec, SessionValues, Value};

#[test]
fn signed_roundtrip_with_reference_scenario() {
    // The reference scenario: name="session-name", values={"name":"admin"},
    // authKey="short-key".
    let codec = SecureCookieCodec::signed("short-key");
    let cookie = codec
        .encode("session-name", &common::sample_values())
        .expect("encode succeeds");

    // Three base64url segments joined by the separator.
    let segments = common::segments(&cookie);
    assert_eq!(segments.len(), 3);
    for segment in &segments {
        assert!(
            segment
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
        );
    }

    let decoded = codec
        .decode("session-name", &cookie)
        .expect("decode succeeds");
    assert_eq!(decoded.get("name"), Some(&Value::String("admin".into())));

    let err = SecureCookieCodec::signed("other-key")
        .decode("session-name", &cookie)
        .expect_err("wrong key is rejected");
    assert!(matches!(err, CodecError::Authentication));
}

#[test]
fn private_roundtrip() {
    let codec = SecureCookieCodec::private("short-key", [3u8; 32].as_slice());
    let mut values = SessionValues::new();
    values.insert("name", "admin");
    values.insert("uid", 42i64);
    values.insert("staff", true);
    values.insert("score", 0.5f64);

    let cookie = codec
        .encode("session-name", &values)
        .expect("encode succeeds");
    let decoded = codec
        .decode("session-name", &cookie)
        .expect("decode succeeds");

    assert_eq!(decoded, values);
}

#[test]
fn roundtrip_under_each_encryption_key_length() {
    for len in [16usize, 24, 32] {
        let codec = SecureCookieCodec::private("short-key", vec![5u8; len]);
        let cookie = codec
            .encode("session-name", &common::sample_values())
            .expect("encode succeeds");
        let decoded = codec
            .decode("session-name", &cookie)
            .expect("decode succeeds");
        assert_eq!(decoded, common::sample_values());
    }
}

#[test]
fn empty_values_roundtrip() {
    let codec = SecureCookieCodec::signed("short-key");
    let cookie = codec
        .encode("session-name", &SessionValues::new())
        .expect("encode succeeds");
    let decoded = codec
        .decode("session-name", &cookie)
        .expect("decode succeeds");
    assert!(decoded.is_empty());
}

#[test]
fn encrypted_payloads_differ_per_encode() {
    // Same values, same key, same timestamp: the fresh nonce must still make
    // the payload segments differ.
    let codec = SecureCookieCodec::private("short-key", [3u8; 32].as_slice());
    let timestamp = 1_700_000_000;

    let a = codec
        .encode_at("session-name", &common::sample_values(), timestamp)
        .expect("encode succeeds");
    let b = codec
        .encode_at("session-name", &common::sample_values(), timestamp)
        .expect("encode succeeds");

    assert_ne!(common::segments(&a)[1], common::segments(&b)[1]);
}

#[test]
fn signed_payloads_are_deterministic_per_timestamp() {
    let codec = SecureCookieCodec::signed("short-key");
    let timestamp = 1_700_000_000;

    let a = codec
        .encode_at("session-name", &common::sample_values(), timestamp)
        .expect("encode succeeds");
    let b = codec
        .encode_at("session-name", &common::sample_values(), timestamp)
        .expect("encode succeeds");

    assert_eq!(a, b);
}

#[test]
fn decode_is_repeatable() {
    let codec = SecureCookieCodec::signed("short-key");
    let cookie = codec
        .encode("session-name", &common::sample_values())
        .expect("encode succeeds");

    for _ in 0..3 {
        let decoded = codec
            .decode("session-name", &cookie)
            .expect("decode succeeds");
        assert_eq!(decoded, common::sample_values());
    }
}

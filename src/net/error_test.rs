use super::*;

#[test]
fn status_error_carries_code_and_body() {
    let err = ApiError::Status {
        status: 401,
        body: "{\"message\":\"invalid token\"}".to_owned(),
    };
    let text = err.to_string();
    assert!(text.contains("401"));
    assert!(text.contains("invalid token"));
}

#[test]
fn network_error_keeps_cause() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.to_string(), "request failed: connection refused");
}

#[test]
fn encode_and_decode_errors_are_distinct() {
    let encode = ApiError::Encode("bad body".to_owned());
    let decode = ApiError::Decode("bad body".to_owned());
    assert_ne!(encode, decode);
    assert_eq!(encode.to_string(), "could not encode request body: bad body");
}

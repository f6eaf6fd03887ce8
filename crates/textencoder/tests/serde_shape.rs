#![expect(missing_docs)]

use textencoder::{EncodeIntoResult, EscapedStr, encode_into};

#[test]
fn result_serializes_as_read_written() {
    let mut dst = [0u8; 3];
    let result = encode_into(EscapedStr::from("a€"), &mut dst).unwrap();
    let json = serde_json::to_string(&result).unwrap();
    assert_eq!(json, r#"{"read":1,"written":1}"#);

    let back: EncodeIntoResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
}

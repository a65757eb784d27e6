use crate::UnicodeString;

#[test]
fn serializes_as_a_plain_string() {
    let s = UnicodeString::from_utf8("café".as_bytes()).unwrap();
    assert_eq!(serde_json::to_string(&s).unwrap(), "\"café\"");
}

#[test]
fn deserializes_and_round_trips() {
    let s: UnicodeString = serde_json::from_str("\"😀!\"").unwrap();
    assert_eq!(s.to_utf32(), [0x1F600, 0x21]);

    let json = serde_json::to_string(&s).unwrap();
    let back: UnicodeString = serde_json::from_str(&json).unwrap();
    assert_eq!(back, s);
}

#[test]
fn deserialization_applies_the_nul_convention() {
    let err = serde_json::from_str::<UnicodeString>("\"a\\u0000b\"").unwrap_err();
    assert!(err.to_string().contains("interior nul"));
}

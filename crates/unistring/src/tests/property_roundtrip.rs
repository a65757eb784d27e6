use quickcheck::{QuickCheck, TestResult};

use crate::UnicodeString;

fn iterations() -> u64 {
    if is_ci::cached() { 10_000 } else { 1_000 }
}

/// Property: any valid UTF-8 input round-trips through the canonical
/// representation byte for byte.
#[test]
fn utf8_round_trips_verbatim() {
    fn prop(text: String) -> TestResult {
        if text.contains('\0') {
            return TestResult::discard();
        }
        let s = UnicodeString::from_utf8(text.as_bytes()).unwrap();
        TestResult::from_bool(s.as_bytes() == text.as_bytes() && s.as_str() == text)
    }

    QuickCheck::new()
        .tests(iterations())
        .quickcheck(prop as fn(String) -> TestResult);
}

/// Property: any sequence of scalar values survives a UTF-32 round trip,
/// and the character count equals the sequence length.
#[test]
fn utf32_round_trips_scalars() {
    fn prop(chars: Vec<char>) -> TestResult {
        if chars.contains(&'\0') {
            return TestResult::discard();
        }
        let units: Vec<u32> = chars.iter().copied().map(u32::from).collect();
        let s = UnicodeString::from_utf32(&units).unwrap();
        TestResult::from_bool(s.to_utf32() == units && s.char_count() == units.len())
    }

    QuickCheck::new()
        .tests(iterations())
        .quickcheck(prop as fn(Vec<char>) -> TestResult);
}

/// Property: rendering to UTF-16 and decoding back preserves the exact
/// scalar sequence, surrogate pairs included.
#[test]
fn utf16_cross_round_trip_preserves_scalars() {
    fn prop(chars: Vec<char>) -> TestResult {
        if chars.contains(&'\0') {
            return TestResult::discard();
        }
        let units: Vec<u32> = chars.iter().copied().map(u32::from).collect();
        let s = UnicodeString::from_utf32(&units).unwrap();
        let back = UnicodeString::from_utf16(&s.to_utf16()).unwrap();
        TestResult::from_bool(back.to_utf32() == units && back == s)
    }

    QuickCheck::new()
        .tests(iterations())
        .quickcheck(prop as fn(Vec<char>) -> TestResult);
}

/// Property: counts agree with the standard library's view of the text.
#[test]
fn counts_match_std() {
    fn prop(text: String) -> TestResult {
        if text.contains('\0') {
            return TestResult::discard();
        }
        let s = UnicodeString::from_utf8(text.as_bytes()).unwrap();
        TestResult::from_bool(
            s.char_count() == text.chars().count()
                && s.len() == text.len()
                && s.to_utf16().len() == text.encode_utf16().count(),
        )
    }

    QuickCheck::new()
        .tests(iterations())
        .quickcheck(prop as fn(String) -> TestResult);
}

/// Property: arbitrary 16-bit input either fails construction or decodes
/// to text that re-encodes to exactly the accepted units.
#[test]
fn arbitrary_utf16_rejects_or_round_trips() {
    fn prop(units: Vec<u16>) -> bool {
        match UnicodeString::from_utf16(&units) {
            Ok(s) => {
                let body = match units.iter().position(|&u| u == 0) {
                    Some(pos) => &units[..pos],
                    None => &units[..],
                };
                s.to_utf16() == body
            }
            Err(_) => true,
        }
    }

    QuickCheck::new()
        .tests(iterations())
        .quickcheck(prop as fn(Vec<u16>) -> bool);
}

/// Property: arbitrary bytes never panic the UTF-8 decoder, and accepted
/// input is stored verbatim.
#[test]
fn arbitrary_bytes_reject_or_round_trip() {
    fn prop(bytes: Vec<u8>) -> bool {
        match UnicodeString::from_utf8(&bytes) {
            Ok(s) => {
                let body = match bytes.iter().position(|&b| b == 0) {
                    Some(pos) => &bytes[..pos],
                    None => &bytes[..],
                };
                s.as_bytes() == body
            }
            Err(err) => err.offset() < bytes.len(),
        }
    }

    QuickCheck::new()
        .tests(iterations())
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}

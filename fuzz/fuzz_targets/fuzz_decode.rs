#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use unistring::UnicodeString;

/// One fuzzed input: a claimed encoding plus a unit buffer at that width.
#[derive(Debug, Arbitrary)]
enum Input {
    Utf8(Vec<u8>),
    Utf16(Vec<u16>),
    Utf32(Vec<u32>),
}

fn check(input: Input) {
    match input {
        Input::Utf8(bytes) => {
            if let Ok(s) = UnicodeString::from_utf8(&bytes) {
                // Accepted bytes are canonical: they must round-trip
                // verbatim and re-decode through the other encodings.
                let body = match bytes.iter().position(|&b| b == 0) {
                    Some(pos) => &bytes[..pos],
                    None => &bytes[..],
                };
                assert_eq!(s.as_bytes(), body);
                assert_eq!(UnicodeString::from_utf16(&s.to_utf16()).unwrap(), s);
                assert_eq!(UnicodeString::from_utf32(&s.to_utf32()).unwrap(), s);
                assert_eq!(s.char_count(), s.to_utf32().len());
            }
        }
        Input::Utf16(units) => {
            if let Ok(s) = UnicodeString::from_utf16(&units) {
                assert_eq!(UnicodeString::from_utf8(s.as_bytes()).unwrap(), s);
                assert_eq!(UnicodeString::from_utf32(&s.to_utf32()).unwrap(), s);
            }
        }
        Input::Utf32(units) => {
            if let Ok(s) = UnicodeString::from_utf32(&units) {
                let body = match units.iter().position(|&u| u == 0) {
                    Some(pos) => &units[..pos],
                    None => &units[..],
                };
                assert_eq!(s.to_utf32(), body);
                assert_eq!(UnicodeString::from_utf16(&s.to_utf16()).unwrap(), s);
            }
        }
    }
}

fuzz_target!(|input: Input| check(input));

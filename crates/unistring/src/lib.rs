//! Immutable Unicode text with validated encoding conversions.
//!
//! [`UnicodeString`] holds one logical piece of text, normalized internally
//! to UTF-8. It is constructed from UTF-8 bytes, UTF-16 code units, or
//! UTF-32 scalar values, and re-renders itself in any of those encodings
//! (plus the platform wide-character encoding, behind the default-on `wide`
//! feature). Construction is the single failure surface: input is validated
//! up front, and every accessor afterwards is a total function.
//!
//! ```
//! use unistring::UnicodeString;
//!
//! let s = UnicodeString::from_utf16(&[0xD83D, 0xDE00, 0x0021, 0])?;
//! assert_eq!(s.as_str(), "😀!");
//! assert_eq!(s.to_utf32(), [0x1F600, 0x21]);
//! assert_eq!(s.char_count(), 2);
//! # Ok::<(), unistring::EncodingError>(())
//! ```
//!
//! There is no lossy fallback: malformed input is rejected with an
//! [`EncodingError`] naming the violation and the code-unit offset where it
//! was detected, never substituted or truncated.
//!
//! ```
//! use unistring::UnicodeString;
//!
//! // An overlong encoding of NUL, as produced by some legacy encoders.
//! let err = UnicodeString::from_utf8(&[0x61, 0xC0, 0x80]).unwrap_err();
//! assert_eq!(err.offset(), 1);
//! assert_eq!(err.to_string(), "overlong encoding of U+0000 at offset 1");
//! ```
//!
//! ### Scope
//!
//! This crate converts between Unicode transformation formats and nothing
//! else. Collation, normalization (NFC/NFD), case folding, and any other
//! locale-aware operation belong to a full internationalization library.

mod decode;
mod error;
mod string;

#[cfg(test)]
mod tests;

pub use error::{EncodingError, EncodingErrorKind};
pub use string::UnicodeString;

#[cfg(feature = "wide")]
pub use widestring::{WideChar, WideStr, WideString};

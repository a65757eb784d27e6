//! The [`UnicodeString`] value type.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;

#[cfg(feature = "wide")]
use std::sync::OnceLock;

#[cfg(feature = "wide")]
use widestring::{WideStr, WideString};

use crate::decode;
use crate::error::EncodingError;

/// An immutable piece of text, normalized to UTF-8.
///
/// The canonical representation is fixed at construction; every conversion
/// is a pure function of it, so two strings constructed from the same text
/// through different encodings are indistinguishable.
///
/// ```
/// use unistring::UnicodeString;
///
/// let s = UnicodeString::from_utf8("grüße".as_bytes())?;
/// assert_eq!(s.char_count(), 5);
/// assert_eq!(s.len(), 7);
/// assert_eq!(s, UnicodeString::from_utf16(&s.to_utf16())?);
/// # Ok::<(), unistring::EncodingError>(())
/// ```
///
/// All constructors accept one zero code unit in the final position and
/// exclude it, so buffers captured from NUL-terminated sources decode
/// without trimming. A zero unit anywhere earlier is rejected as
/// [`InteriorNul`](crate::EncodingErrorKind::InteriorNul).
#[derive(Clone)]
pub struct UnicodeString {
    encoded: String,
    #[cfg(feature = "wide")]
    wide: OnceLock<WideString>,
}

impl UnicodeString {
    /// Creates the empty string.
    #[must_use]
    pub fn new() -> Self {
        Self::from_validated(String::new())
    }

    /// Wraps text whose invariants (valid UTF-8, no NUL) are already
    /// established by the decoders or by `split_terminator`.
    fn from_validated(encoded: String) -> Self {
        Self {
            encoded,
            #[cfg(feature = "wide")]
            wide: OnceLock::new(),
        }
    }

    /// Decodes a UTF-8 byte sequence.
    ///
    /// The bytes become the canonical representation verbatim (minus an
    /// optional trailing NUL).
    ///
    /// # Errors
    ///
    /// Rejects overlong encodings, stray or missing continuation bytes,
    /// encoded surrogates, values above U+10FFFF, truncated sequences, and
    /// interior NUL bytes. The error names the violation and byte offset.
    pub fn from_utf8(bytes: &[u8]) -> Result<Self, EncodingError> {
        decode::split_terminator(bytes)
            .and_then(decode::utf8)
            .map(Self::from_validated)
    }

    /// Decodes a UTF-16 code-unit sequence, pairing surrogates.
    ///
    /// # Errors
    ///
    /// Rejects a high surrogate not immediately followed by a low
    /// surrogate, a low surrogate with no preceding high surrogate, and
    /// interior zero units. The error names the violation and unit offset.
    pub fn from_utf16(units: &[u16]) -> Result<Self, EncodingError> {
        decode::split_terminator(units)
            .and_then(decode::utf16)
            .map(Self::from_validated)
    }

    /// Decodes a UTF-32 sequence; every unit must be a Unicode scalar
    /// value.
    ///
    /// # Errors
    ///
    /// Rejects surrogate code points, values above U+10FFFF, and interior
    /// zero units. The error names the violation and unit offset.
    pub fn from_utf32(units: &[u32]) -> Result<Self, EncodingError> {
        decode::split_terminator(units)
            .and_then(decode::utf32)
            .map(Self::from_validated)
    }

    /// The canonical text as `&str`. O(1), no allocation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.encoded
    }

    /// The canonical UTF-8 bytes, terminator excluded. O(1), no
    /// allocation.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.encoded.as_bytes()
    }

    /// Renders the text as UTF-16 code units, using surrogate pairs for
    /// scalars at U+10000 and above. A fresh, unterminated sequence on
    /// every call.
    #[must_use]
    pub fn to_utf16(&self) -> Vec<u16> {
        self.encoded.encode_utf16().collect()
    }

    /// Renders the text as UTF-32, one unit per scalar value. A fresh,
    /// unterminated sequence on every call.
    #[must_use]
    pub fn to_utf32(&self) -> Vec<u32> {
        self.encoded.chars().map(u32::from).collect()
    }

    /// The text in the platform wide-character encoding: 16-bit units on
    /// Windows, 32-bit elsewhere.
    ///
    /// The rendering is computed on first use and cached for the lifetime
    /// of the string; later calls return the same buffer. The cache is
    /// published through a [`OnceLock`], so concurrent first calls agree.
    #[cfg(feature = "wide")]
    #[must_use]
    pub fn as_wide(&self) -> &WideStr {
        self.wide.get_or_init(|| WideString::from_str(&self.encoded))
    }

    /// Number of Unicode scalar values in the text. O(n) over the
    /// canonical bytes.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.encoded.chars().count()
    }

    /// Number of canonical UTF-8 bytes, terminator excluded. O(1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.encoded.len()
    }

    /// Whether the text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.encoded.is_empty()
    }

    /// Iterates over the scalar values of the text.
    pub fn chars(&self) -> core::str::Chars<'_> {
        self.encoded.chars()
    }

    /// Unwraps the canonical representation.
    #[must_use]
    pub fn into_string(self) -> String {
        self.encoded
    }
}

impl Default for UnicodeString {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UnicodeString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.encoded, f)
    }
}

impl fmt::Debug for UnicodeString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.encoded, f)
    }
}

// Comparisons and hashing look only at the canonical bytes; whether the
// wide cache happens to be populated is not observable.
impl PartialEq for UnicodeString {
    fn eq(&self, other: &Self) -> bool {
        self.encoded == other.encoded
    }
}

impl Eq for UnicodeString {}

impl PartialOrd for UnicodeString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UnicodeString {
    fn cmp(&self, other: &Self) -> Ordering {
        self.encoded.cmp(&other.encoded)
    }
}

impl Hash for UnicodeString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.encoded.hash(state);
    }
}

impl AsRef<str> for UnicodeString {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<[u8]> for UnicodeString {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<UnicodeString> for String {
    fn from(s: UnicodeString) -> Self {
        s.encoded
    }
}

impl TryFrom<&[u8]> for UnicodeString {
    type Error = EncodingError;

    fn try_from(bytes: &[u8]) -> Result<Self, EncodingError> {
        Self::from_utf8(bytes)
    }
}

impl TryFrom<String> for UnicodeString {
    type Error = EncodingError;

    /// Adopts an owned `String` without re-validating its UTF-8; only the
    /// NUL convention is checked.
    fn try_from(mut text: String) -> Result<Self, EncodingError> {
        let body_len = decode::split_terminator(text.as_bytes())?.len();
        text.truncate(body_len);
        Ok(Self::from_validated(text))
    }
}

impl TryFrom<&str> for UnicodeString {
    type Error = EncodingError;

    fn try_from(text: &str) -> Result<Self, EncodingError> {
        Self::try_from(text.to_owned())
    }
}

impl FromStr for UnicodeString {
    type Err = EncodingError;

    fn from_str(text: &str) -> Result<Self, EncodingError> {
        Self::try_from(text)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for UnicodeString {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for UnicodeString {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::try_from(text).map_err(serde::de::Error::custom)
    }
}

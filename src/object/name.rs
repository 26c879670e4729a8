//! PDF name objects.
//!
//! PDF Spec: ISO 32000-1:2008, Section 7.3.5 - Name Objects

use super::PdfObject;
use crate::error::{Error, Result};
use std::borrow::Borrow;
use std::io::{self, Write};

/// A PDF name, stored as its decoded text.
///
/// Ordering is by decoded text, which gives dictionaries a total key order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    /// Create a name from its decoded text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Create a name from caller input, rejecting text a PDF name cannot hold.
    ///
    /// A name may not be empty or contain the NUL character.
    pub fn checked(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.is_empty() {
            return Err(Error::InvalidArgument("name must not be empty".to_string()));
        }
        if text.contains('\0') {
            return Err(Error::InvalidArgument(format!("name {:?} contains NUL", text)));
        }
        Ok(Self(text))
    }

    /// The decoded text of this name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The escaped form, without the leading `/`.
    ///
    /// Regular characters are copied; delimiters, whitespace, non-printable
    /// bytes and `#` become `#` followed by two lowercase hex digits.
    pub fn encode(&self) -> String {
        let mut out = String::with_capacity(self.0.len());
        for byte in self.0.bytes() {
            if is_regular(byte) {
                out.push(byte as char);
            } else {
                out.push_str(&format!("#{:02x}", byte));
            }
        }
        out
    }

    /// Reverse [`Name::encode`]. A leading `/` is accepted and skipped.
    pub fn decode(escaped: &str) -> Result<Self> {
        let raw = escaped.strip_prefix('/').unwrap_or(escaped).as_bytes();
        let mut bytes = Vec::with_capacity(raw.len());
        let mut i = 0;
        while i < raw.len() {
            if raw[i] == b'#' {
                let hex = raw
                    .get(i + 1..i + 3)
                    .and_then(|h| std::str::from_utf8(h).ok())
                    .and_then(|h| u8::from_str_radix(h, 16).ok())
                    .ok_or_else(|| {
                        Error::InvalidArgument(format!("bad #xx escape in name {:?}", escaped))
                    })?;
                bytes.push(hex);
                i += 3;
            } else {
                bytes.push(raw[i]);
                i += 1;
            }
        }
        String::from_utf8(bytes)
            .map(Self)
            .map_err(|_| Error::InvalidArgument(format!("name {:?} is not UTF-8", escaped)))
    }
}

/// Bytes that may appear unescaped in a name.
fn is_regular(byte: u8) -> bool {
    matches!(byte, b'!'..=b'~')
        && !matches!(
            byte,
            b'#' | b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%'
        )
}

impl PdfObject for Name {
    fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(b"/")?;
        w.write_all(self.encode().as_bytes())
    }
}

impl Borrow<str> for Name {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Name {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Name {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "/{}", self.encode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(name: &str) -> String {
        String::from_utf8(Name::new(name).to_bytes()).unwrap()
    }

    #[test]
    fn test_plain_name() {
        assert_eq!(written("Type"), "/Type");
        assert_eq!(written("Helvetica-Bold"), "/Helvetica-Bold");
    }

    #[test]
    fn test_escapes_whitespace_and_delimiters() {
        assert_eq!(written("Name With Space"), "/Name#20With#20Space");
        assert_eq!(written("a/b"), "/a#2fb");
        assert_eq!(written("(x)"), "/#28x#29");
        assert_eq!(written("50%"), "/50#25");
    }

    #[test]
    fn test_escapes_hash() {
        assert_eq!(written("A#B"), "/A#23B");
    }

    #[test]
    fn test_escapes_non_ascii_as_utf8_bytes() {
        assert_eq!(written("é"), "/#c3#a9");
    }

    #[test]
    fn test_decode_reverses_encode() {
        for text in ["A#B", "a b\tc", "[{<>}]", "é/ü", "#23"] {
            let name = Name::new(text);
            assert_eq!(Name::decode(&name.to_string()).unwrap(), name);
        }
    }

    #[test]
    fn test_decode_rejects_truncated_escape() {
        assert!(Name::decode("/abc#2").is_err());
        assert!(Name::decode("/abc#zz").is_err());
    }

    #[test]
    fn test_checked_rejects_nul_and_empty() {
        assert!(Name::checked("F\0").is_err());
        assert!(Name::checked("").is_err());
        assert_eq!(Name::checked("F1").unwrap().as_str(), "F1");
    }

    #[test]
    fn test_ordering_by_decoded_text() {
        let mut names = vec![Name::new("Type"), Name::new("Count"), Name::new("A b")];
        names.sort();
        let sorted: Vec<&str> = names.iter().map(|n| n.as_str()).collect();
        assert_eq!(sorted, vec!["A b", "Count", "Type"]);
    }
}

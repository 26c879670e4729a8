//! Literal string objects.
//!
//! PDF Spec: ISO 32000-1:2008, Section 7.3.4.2 - Literal Strings

use super::PdfObject;
use crate::encoding::{PdfDocEncoding, TextEncoder, WinAnsiEncoding};
use std::io::{self, Write};

/// Single-byte table used when a string is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringEncoding {
    /// WinAnsiEncoding (the default for content and most dictionary values)
    WinAnsi,
    /// PDFDocEncoding (text strings outside content streams, e.g. Info values)
    PdfDoc,
}

/// A literal string, kept as text and encoded only when written.
///
/// Two strings are equal when their text and table agree, regardless of
/// how many bytes the escaped form takes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PdfString {
    text: String,
    encoding: StringEncoding,
}

impl PdfString {
    /// A WinAnsi-encoded string.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            encoding: StringEncoding::WinAnsi,
        }
    }

    /// A PDFDocEncoded string.
    pub fn doc_encoded(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            encoding: StringEncoding::PdfDoc,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn encoding(&self) -> StringEncoding {
        self.encoding
    }

    pub fn is_doc_encoded(&self) -> bool {
        self.encoding == StringEncoding::PdfDoc
    }

    /// The escaped bytes between the parentheses.
    pub fn encoded_bytes(&self) -> Vec<u8> {
        match self.encoding {
            StringEncoding::WinAnsi => WinAnsiEncoding.encode(&self.text),
            StringEncoding::PdfDoc => PdfDocEncoding.encode(&self.text),
        }
    }
}

impl PdfObject for PdfString {
    fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(b"(")?;
        w.write_all(&self.encoded_bytes())?;
        w.write_all(b")")
    }
}

impl std::fmt::Display for PdfString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

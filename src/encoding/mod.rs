//! Text encodings for literal strings.
//!
//! Every encoder first escapes the literal-string delimiters and control
//! characters, then maps the remaining characters to bytes:
//!
//! - [`WinAnsiEncoding`] and [`PdfDocEncoding`] share one table-driven
//!   algorithm: printable ASCII passes through, other characters go through
//!   the encoding's table, and characters with no entry are dropped.
//! - [`Utf16BeEncoding`] writes a byte-order mark followed by the UTF-16BE
//!   code units, escaping any unit byte that collides with a delimiter.
//!
//! PDF Spec: ISO 32000-1:2008, Section 7.3.4.2 and Annex D

mod pdf_doc;
mod utf16;
mod win_ansi;

pub use pdf_doc::PdfDocEncoding;
pub use utf16::Utf16BeEncoding;
pub use win_ansi::{win_ansi_code, WinAnsiEncoding};

/// Converts text into the bytes of a literal string body.
///
/// Implementations are stateless; `encode` is a pure function of its input.
pub trait TextEncoder: Send + Sync {
    /// Encoding name, as used in a font's `/Encoding` entry where one exists.
    fn name(&self) -> &'static str;

    /// Encode `text` into escaped bytes ready to sit between `(` and `)`.
    fn encode(&self, text: &str) -> Vec<u8>;
}

/// Escape sequence for a byte that cannot appear raw in a literal string.
pub(crate) fn escape_sequence(byte: u8) -> Option<&'static [u8]> {
    match byte {
        b'(' => Some(b"\\("),
        b')' => Some(b"\\)"),
        b'\\' => Some(b"\\\\"),
        b'\n' => Some(b"\\n"),
        b'\r' => Some(b"\\r"),
        b'\t' => Some(b"\\t"),
        0x08 => Some(b"\\b"),
        0x0C => Some(b"\\f"),
        _ => None,
    }
}

/// Shared algorithm of the single-byte encodings.
///
/// `lookup` covers characters outside printable ASCII.
pub(crate) fn encode_single_byte(
    encoding: &str,
    text: &str,
    lookup: impl Fn(char) -> Option<u8>,
) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    let mut dropped = 0usize;

    for ch in text.chars() {
        if ch.is_ascii() {
            if let Some(escaped) = escape_sequence(ch as u8) {
                out.extend_from_slice(escaped);
                continue;
            }
            if (' '..='~').contains(&ch) {
                out.push(ch as u8);
                continue;
            }
        }
        match lookup(ch) {
            Some(code) => out.push(code),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        log::warn!(
            "{}: dropped {} character(s) with no code in {:?}",
            encoding,
            dropped,
            text
        );
    }
    out
}

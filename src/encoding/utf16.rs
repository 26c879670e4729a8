//! UTF-16BE text with a byte-order mark.
//!
//! PDF Spec: ISO 32000-1:2008, Section 7.9.2.2 - Text String Type

use super::{escape_sequence, TextEncoder};

const BOM: [u8; 2] = [0xFE, 0xFF];

/// Wide encoding for arbitrary Unicode text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf16BeEncoding;

impl TextEncoder for Utf16BeEncoding {
    fn name(&self) -> &'static str {
        "UTF-16BE"
    }

    fn encode(&self, text: &str) -> Vec<u8> {
        let mut out = Vec::with_capacity(2 + text.len() * 2);
        out.extend_from_slice(&BOM);
        for unit in text.encode_utf16() {
            for byte in unit.to_be_bytes() {
                match escape_sequence(byte) {
                    Some(escaped) => out.extend_from_slice(escaped),
                    None => out.push(byte),
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bom_and_code_units() {
        assert_eq!(Utf16BeEncoding.encode("A"), vec![0xFE, 0xFF, 0x00, 0x41]);
        assert_eq!(Utf16BeEncoding.encode("漢"), vec![0xFE, 0xFF, 0x6F, 0x22]);
    }

    #[test]
    fn test_empty_text_is_bom_only() {
        assert_eq!(Utf16BeEncoding.encode(""), BOM.to_vec());
    }

    #[test]
    fn test_surrogate_pair() {
        // U+1F600 -> D83D DE00
        assert_eq!(
            Utf16BeEncoding.encode("😀"),
            vec![0xFE, 0xFF, 0xD8, 0x3D, 0xDE, 0x00]
        );
    }

    #[test]
    fn test_delimiter_bytes_escaped() {
        // '(' is 0x0028: the low byte must be escaped
        assert_eq!(
            Utf16BeEncoding.encode("("),
            vec![0xFE, 0xFF, 0x00, b'\\', b'(']
        );
        // U+0A29 has a high byte equal to '\n'
        assert_eq!(
            Utf16BeEncoding.encode("\u{0A29}"),
            vec![0xFE, 0xFF, b'\\', b'n', b'\\', b')']
        );
    }
}

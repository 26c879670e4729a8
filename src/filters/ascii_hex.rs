//! ASCIIHexDecode encoder.
//!
//! Encodes each byte as two uppercase hex digits and terminates the data
//! with the `>` end-of-data marker (e.g., "Hello" -> "48656C6C6F>").

use crate::error::Result;
use crate::filters::StreamFilter;

/// ASCIIHexDecode filter implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiHexFilter;

impl StreamFilter for AsciiHexFilter {
    fn name(&self) -> &'static str {
        "ASCIIHexDecode"
    }

    fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
        const HEX: &[u8; 16] = b"0123456789ABCDEF";
        let mut output = Vec::with_capacity(input.len() * 2 + 1);
        for &byte in input {
            output.push(HEX[(byte >> 4) as usize]);
            output.push(HEX[(byte & 0x0F) as usize]);
        }
        output.push(b'>');
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_hex_encode() {
        assert_eq!(AsciiHexFilter.encode(b"Hello").unwrap(), b"48656C6C6F>");
    }

    #[test]
    fn test_ascii_hex_binary() {
        assert_eq!(AsciiHexFilter.encode(&[0x00, 0xFF, 0x0A]).unwrap(), b"00FF0A>");
    }

    #[test]
    fn test_ascii_hex_empty() {
        assert_eq!(AsciiHexFilter.encode(b"").unwrap(), b">");
    }

    #[test]
    fn test_ascii_hex_name() {
        assert_eq!(AsciiHexFilter.name(), "ASCIIHexDecode");
        assert!(AsciiHexFilter.decode_params().is_none());
    }
}

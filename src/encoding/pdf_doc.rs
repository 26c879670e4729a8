//! PDFDocEncoding, used for text strings outside content streams.
//!
//! PDF Spec: ISO 32000-1:2008, Annex D.2 and D.3

use super::{encode_single_byte, TextEncoder};

/// The PDFDocEncoding single-byte table.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfDocEncoding;

impl TextEncoder for PdfDocEncoding {
    fn name(&self) -> &'static str {
        "PDFDocEncoding"
    }

    fn encode(&self, text: &str) -> Vec<u8> {
        encode_single_byte(self.name(), text, extended_code)
    }
}

fn extended_code(ch: char) -> Option<u8> {
    let code = match ch {
        // 0xAD is undefined in PDFDocEncoding
        '\u{AD}' => return None,
        '\u{A1}'..='\u{FF}' => ch as u32 as u8,
        '˘' => 0x18,
        'ˇ' => 0x19,
        'ˆ' => 0x1A,
        '˙' => 0x1B,
        '˝' => 0x1C,
        '˛' => 0x1D,
        '˚' => 0x1E,
        '˜' => 0x1F,
        '•' => 0x80,
        '†' => 0x81,
        '‡' => 0x82,
        '…' => 0x83,
        '—' => 0x84,
        '–' => 0x85,
        'ƒ' => 0x86,
        '⁄' => 0x87,
        '‹' => 0x88,
        '›' => 0x89,
        '−' => 0x8A,
        '‰' => 0x8B,
        '„' => 0x8C,
        '\u{201C}' => 0x8D,
        '\u{201D}' => 0x8E,
        '\u{2018}' => 0x8F,
        '\u{2019}' => 0x90,
        '‚' => 0x91,
        '™' => 0x92,
        'ﬁ' => 0x93,
        'ﬂ' => 0x94,
        'Ł' => 0x95,
        'Œ' => 0x96,
        'Š' => 0x97,
        'Ÿ' => 0x98,
        'Ž' => 0x99,
        'ı' => 0x9A,
        'ł' => 0x9B,
        'œ' => 0x9C,
        'š' => 0x9D,
        'ž' => 0x9E,
        '€' => 0xA0,
        _ => return None,
    };
    Some(code)
}

//! WinAnsiEncoding (Windows code page 1252).
//!
//! PDF Spec: ISO 32000-1:2008, Annex D.2

use super::{encode_single_byte, TextEncoder};

/// The WinAnsi single-byte table.
#[derive(Debug, Clone, Copy, Default)]
pub struct WinAnsiEncoding;

impl TextEncoder for WinAnsiEncoding {
    fn name(&self) -> &'static str {
        "WinAnsiEncoding"
    }

    fn encode(&self, text: &str) -> Vec<u8> {
        encode_single_byte(self.name(), text, extended_code)
    }
}

/// Character code of `ch` in WinAnsiEncoding, without any escaping.
///
/// Used to index font width tables.
pub fn win_ansi_code(ch: char) -> Option<u8> {
    if (' '..='~').contains(&ch) {
        Some(ch as u8)
    } else {
        extended_code(ch)
    }
}

/// Codes above 0x7F. Latin-1 maps to itself from 0xA0.
fn extended_code(ch: char) -> Option<u8> {
    let code = match ch {
        '\u{A0}'..='\u{FF}' => ch as u32 as u8,
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8A,
        '‹' => 0x8B,
        'Œ' => 0x8C,
        'Ž' => 0x8E,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9A,
        '›' => 0x9B,
        'œ' => 0x9C,
        'ž' => 0x9E,
        'Ÿ' => 0x9F,
        _ => return None,
    };
    Some(code)
}

//! Metrics compiled into the library.
//!
//! All 14 standard Type 1 fonts are embedded. Text fonts list their widths
//! in WinAnsiEncoding code order from 32 to 255; Symbol and ZapfDingbats use
//! their built-in encodings.

use lazy_static::lazy_static;
use std::collections::HashMap;

pub(crate) const HELVETICA_AFM: &str = include_str!("../../resources/afm/Helvetica.afm");
pub(crate) const COURIER_AFM: &str = include_str!("../../resources/afm/Courier.afm");
pub(crate) const TIMES_ROMAN_AFM: &str = include_str!("../../resources/afm/Times-Roman.afm");
pub(crate) const SYMBOL_AFM: &str = include_str!("../../resources/afm/Symbol.afm");

/// PostScript names of the standard fonts.
pub const STANDARD_FONT_NAMES: [&str; 14] = [
    "Courier",
    "Courier-Bold",
    "Courier-BoldOblique",
    "Courier-Oblique",
    "Helvetica",
    "Helvetica-Bold",
    "Helvetica-BoldOblique",
    "Helvetica-Oblique",
    "Symbol",
    "Times-Bold",
    "Times-BoldItalic",
    "Times-Italic",
    "Times-Roman",
    "ZapfDingbats",
];

lazy_static! {
    /// Embedded AFM text by PostScript font name.
    pub(crate) static ref EMBEDDED_METRICS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("Courier", COURIER_AFM);
        m.insert("Courier-Bold", include_str!("../../resources/afm/Courier-Bold.afm"));
        m.insert(
            "Courier-BoldOblique",
            include_str!("../../resources/afm/Courier-BoldOblique.afm"),
        );
        m.insert("Courier-Oblique", include_str!("../../resources/afm/Courier-Oblique.afm"));
        m.insert("Helvetica", HELVETICA_AFM);
        m.insert("Helvetica-Bold", include_str!("../../resources/afm/Helvetica-Bold.afm"));
        m.insert(
            "Helvetica-BoldOblique",
            include_str!("../../resources/afm/Helvetica-BoldOblique.afm"),
        );
        m.insert(
            "Helvetica-Oblique",
            include_str!("../../resources/afm/Helvetica-Oblique.afm"),
        );
        m.insert("Symbol", SYMBOL_AFM);
        m.insert("Times-Bold", include_str!("../../resources/afm/Times-Bold.afm"));
        m.insert(
            "Times-BoldItalic",
            include_str!("../../resources/afm/Times-BoldItalic.afm"),
        );
        m.insert("Times-Italic", include_str!("../../resources/afm/Times-Italic.afm"));
        m.insert("Times-Roman", TIMES_ROMAN_AFM);
        m.insert("ZapfDingbats", include_str!("../../resources/afm/ZapfDingbats.afm"));
        m
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::afm::FontMetrics;

    #[test]
    fn test_all_standard_fonts_embedded() {
        assert_eq!(EMBEDDED_METRICS.len(), STANDARD_FONT_NAMES.len());
        for name in STANDARD_FONT_NAMES {
            let metrics = FontMetrics::parse(EMBEDDED_METRICS[name]).unwrap();
            assert_eq!(metrics.font_name, name);
        }
        assert!(!EMBEDDED_METRICS.contains_key("Arial"));
    }

    #[test]
    fn test_text_fonts_cover_win_ansi_range() {
        for name in STANDARD_FONT_NAMES {
            let metrics = FontMetrics::parse(EMBEDDED_METRICS[name]).unwrap();
            if metrics.is_symbolic() {
                continue;
            }
            assert_eq!(metrics.first_char(), Some(32), "{}", name);
            assert_eq!(metrics.last_char(), Some(255), "{}", name);
            // Euro, eacute, ydieresis
            for code in [0x80, 0xE9, 0xFF] {
                assert!(metrics.width(code).unwrap_or(0.0) > 0.0, "{} code {}", name, code);
            }
        }
    }

    #[test]
    fn test_symbolic_fonts() {
        for name in ["Symbol", "ZapfDingbats"] {
            let metrics = FontMetrics::parse(EMBEDDED_METRICS[name]).unwrap();
            assert!(metrics.is_symbolic(), "{}", name);
        }
    }
}

//! Adobe Font Metrics (AFM) parsing.
//!
//! Only the parts of the grammar a simple font needs are read:
//!
//! ```text
//! StartFontMetrics 4.1
//! FontName Helvetica
//! FontBBox -166 -225 1000 931
//! ...
//! StartCharMetrics 315
//! C 32 ; WX 278 ; N space ;
//! ...
//! EndCharMetrics
//! ```
//!
//! Header lines are `Key value` pairs; unknown keys are ignored. Each body
//! line is a `;`-separated list of fields of which `C` (code) and `WX`
//! (advance width) are required.
//!
//! Reference: Adobe Technical Note #5004, AFM File Format Specification 4.1

use crate::error::{Error, Result};
use std::collections::BTreeMap;

/// Metrics read from an AFM file. All lengths are in 1/1000 em.
#[derive(Debug, Clone, PartialEq)]
pub struct FontMetrics {
    /// PostScript name (e.g., "Helvetica-Bold")
    pub font_name: String,
    pub full_name: Option<String>,
    pub family_name: Option<String>,
    pub weight: Option<String>,
    /// Font bounding box: llx, lly, urx, ury
    pub bbox: [f64; 4],
    pub cap_height: f64,
    pub x_height: f64,
    pub ascender: f64,
    pub descender: f64,
    /// Dominant horizontal stem width
    pub std_hw: f64,
    /// Dominant vertical stem width
    pub std_vw: f64,
    pub italic_angle: f64,
    pub is_fixed_pitch: bool,
    pub encoding_scheme: Option<String>,
    /// Advance widths of the encoded characters, by code
    pub widths: BTreeMap<u8, f64>,
}

impl FontMetrics {
    /// Parse AFM text.
    ///
    /// Malformed header values, a body line without `C` or `WX`, and a file
    /// that ends inside the character metrics are errors. A character code
    /// lower than its predecessor ends the body early without error.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());

        match lines.next() {
            Some(first) if first.starts_with("StartFontMetrics") => {}
            _ => return Err(Error::Font("missing StartFontMetrics".to_string())),
        }

        let mut metrics = FontMetrics::empty();
        let mut font_name = None;
        let mut bbox = None;
        let mut in_body = false;

        for line in lines.by_ref() {
            let (key, value) = split_key_value(line);
            match key {
                "StartCharMetrics" => {
                    in_body = true;
                    break;
                }
                "FontName" => font_name = Some(value.to_string()),
                "FullName" => metrics.full_name = Some(value.to_string()),
                "FamilyName" => metrics.family_name = Some(value.to_string()),
                "Weight" => metrics.weight = Some(value.to_string()),
                "EncodingScheme" => metrics.encoding_scheme = Some(value.to_string()),
                "FontBBox" => bbox = Some(parse_bbox(value)?),
                "CapHeight" => metrics.cap_height = parse_number(key, value)?,
                "XHeight" => metrics.x_height = parse_number(key, value)?,
                "Ascender" => metrics.ascender = parse_number(key, value)?,
                "Descender" => metrics.descender = parse_number(key, value)?,
                "StdHW" => metrics.std_hw = parse_number(key, value)?,
                "StdVW" => metrics.std_vw = parse_number(key, value)?,
                "ItalicAngle" => metrics.italic_angle = parse_number(key, value)?,
                "IsFixedPitch" => metrics.is_fixed_pitch = value.eq_ignore_ascii_case("true"),
                _ => {}
            }
        }

        if !in_body {
            return Err(Error::Font("missing StartCharMetrics".to_string()));
        }
        metrics.font_name = font_name.ok_or_else(|| Error::Font("missing FontName".to_string()))?;
        metrics.bbox = bbox.ok_or_else(|| {
            Error::Font(format!("{}: missing FontBBox", metrics.font_name))
        })?;

        let mut previous = i64::MIN;
        let mut terminated = false;
        for line in lines {
            if line.starts_with("EndCharMetrics") {
                terminated = true;
                break;
            }
            let (code, width) = parse_char_metric(line)
                .map_err(|e| Error::Font(format!("{}: {}", metrics.font_name, e)))?;
            if code < previous {
                if code == -1 {
                    log::debug!("{}: unencoded glyphs follow, body read", metrics.font_name);
                } else {
                    log::warn!(
                        "{}: character code {} after {}, ignoring the rest of the metrics",
                        metrics.font_name,
                        code,
                        previous
                    );
                }
                terminated = true;
                break;
            }
            previous = code;
            if let Ok(code) = u8::try_from(code) {
                metrics.widths.insert(code, width);
            }
        }

        if !terminated {
            return Err(Error::Font(format!(
                "{}: missing EndCharMetrics",
                metrics.font_name
            )));
        }
        Ok(metrics)
    }

    fn empty() -> Self {
        Self {
            font_name: String::new(),
            full_name: None,
            family_name: None,
            weight: None,
            bbox: [0.0; 4],
            cap_height: 0.0,
            x_height: 0.0,
            ascender: 0.0,
            descender: 0.0,
            std_hw: 0.0,
            std_vw: 0.0,
            italic_angle: 0.0,
            is_fixed_pitch: false,
            encoding_scheme: None,
            widths: BTreeMap::new(),
        }
    }

    /// Advance width of `code`, if the font encodes it.
    pub fn width(&self, code: u8) -> Option<f64> {
        self.widths.get(&code).copied()
    }

    /// Lowest encoded character code.
    pub fn first_char(&self) -> Option<u8> {
        self.widths.keys().next().copied()
    }

    /// Highest encoded character code.
    pub fn last_char(&self) -> Option<u8> {
        self.widths.keys().next_back().copied()
    }

    /// Minimum distance between baselines, in font units.
    ///
    /// Ascender minus descender, or the bounding box height when the
    /// ascender is not given.
    pub fn min_leading_units(&self) -> f64 {
        if self.ascender != 0.0 {
            self.ascender - self.descender
        } else {
            self.bbox[3] - self.bbox[1]
        }
    }

    /// Whether the font uses its own built-in encoding.
    pub fn is_symbolic(&self) -> bool {
        self.encoding_scheme.as_deref() == Some("FontSpecific")
    }
}

fn split_key_value(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((key, value)) => (key, value.trim()),
        None => (line, ""),
    }
}

fn parse_number(key: &str, value: &str) -> Result<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| Error::Font(format!("bad {} value {:?}", key, value)))
}

fn parse_bbox(value: &str) -> Result<[f64; 4]> {
    let numbers = value
        .split_whitespace()
        .map(|v| parse_number("FontBBox", v))
        .collect::<Result<Vec<f64>>>()?;
    <[f64; 4]>::try_from(numbers)
        .map_err(|_| Error::Font(format!("FontBBox needs 4 numbers, got {:?}", value)))
}

/// Read `C` and `WX` from one character metrics line.
fn parse_char_metric(line: &str) -> std::result::Result<(i64, f64), String> {
    let mut code = None;
    let mut width = None;

    for field in line.split(';') {
        let (key, value) = split_key_value(field.trim());
        match key {
            "C" => code = Some(value.parse::<i64>().map_err(|_| format!("bad code in {:?}", line))?),
            "CH" => {
                let hex = value.trim_start_matches('<').trim_end_matches('>');
                code = Some(
                    i64::from_str_radix(hex, 16).map_err(|_| format!("bad code in {:?}", line))?,
                );
            }
            "WX" => {
                width = Some(
                    value
                        .parse::<f64>()
                        .ok()
                        .filter(|w| w.is_finite())
                        .ok_or_else(|| format!("bad width in {:?}", line))?,
                );
            }
            _ => {}
        }
    }

    match (code, width) {
        (Some(code), Some(width)) => Ok((code, width)),
        (None, _) => Err(format!("no character code in {:?}", line)),
        (_, None) => Err(format!("no width in {:?}", line)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "StartFontMetrics 4.1
Comment test font
FontName Sample-Bold
FullName Sample Bold
Weight Bold
ItalicAngle -12
IsFixedPitch false
FontBBox -100 -200 1000 900
CapHeight 700
XHeight 500
Ascender 750
Descender -250
StdHW 80
StdVW 90
StartCharMetrics 3
C 32 ; WX 250 ; N space ; B 0 0 0 0 ;
C 65 ; WX 700 ; N A ; B 10 0 690 700 ;
C 66 ; WX 650.5 ; N B ;
EndCharMetrics
EndFontMetrics
";

    #[test]
    fn test_parse_header() {
        let m = FontMetrics::parse(SAMPLE).unwrap();
        assert_eq!(m.font_name, "Sample-Bold");
        assert_eq!(m.full_name.as_deref(), Some("Sample Bold"));
        assert_eq!(m.weight.as_deref(), Some("Bold"));
        assert_eq!(m.bbox, [-100.0, -200.0, 1000.0, 900.0]);
        assert_eq!(m.cap_height, 700.0);
        assert_eq!(m.ascender, 750.0);
        assert_eq!(m.descender, -250.0);
        assert_eq!(m.std_vw, 90.0);
        assert_eq!(m.italic_angle, -12.0);
        assert!(!m.is_fixed_pitch);
    }

    #[test]
    fn test_parse_widths() {
        let m = FontMetrics::parse(SAMPLE).unwrap();
        assert_eq!(m.width(32), Some(250.0));
        assert_eq!(m.width(66), Some(650.5));
        assert_eq!(m.width(67), None);
        assert_eq!(m.first_char(), Some(32));
        assert_eq!(m.last_char(), Some(66));
    }

    #[test]
    fn test_out_of_order_code_stops_early() {
        let text = SAMPLE.replace("C 66 ; WX 650.5 ; N B ;", "C 40 ; WX 333 ; N parenleft ;");
        let m = FontMetrics::parse(&text).unwrap();
        assert_eq!(m.widths.len(), 2);
        assert_eq!(m.width(40), None);
    }

    #[test]
    fn test_unencoded_section_stops_early() {
        let text = SAMPLE.replace("EndCharMetrics", "C -1 ; WX 500 ; N Euro ;\nEndCharMetrics");
        let m = FontMetrics::parse(&text).unwrap();
        assert_eq!(m.widths.len(), 3);
    }

    #[test]
    fn test_missing_sentinel_is_error() {
        let text = SAMPLE.replace("EndCharMetrics\nEndFontMetrics\n", "");
        assert!(matches!(FontMetrics::parse(&text), Err(Error::Font(_))));
    }

    #[test]
    fn test_missing_width_is_error() {
        let text = SAMPLE.replace("C 65 ; WX 700 ; N A ;", "C 65 ; N A ;");
        let err = FontMetrics::parse(&text).unwrap_err();
        assert!(err.to_string().contains("no width"));
    }

    #[test]
    fn test_not_afm() {
        assert!(FontMetrics::parse("%!PS-AdobeFont-1.0").is_err());
        assert!(FontMetrics::parse("").is_err());
    }

    #[test]
    fn test_bad_header_number() {
        let text = SAMPLE.replace("CapHeight 700", "CapHeight tall");
        assert!(FontMetrics::parse(&text).is_err());
        let text = SAMPLE.replace("FontBBox -100 -200 1000 900", "FontBBox 1 2 3");
        assert!(FontMetrics::parse(&text).is_err());
    }

    #[test]
    fn test_min_leading_falls_back_to_bbox() {
        let m = FontMetrics::parse(SAMPLE).unwrap();
        assert_eq!(m.min_leading_units(), 1000.0);

        let text = SAMPLE.replace("Ascender 750\n", "");
        let m = FontMetrics::parse(&text).unwrap();
        assert_eq!(m.min_leading_units(), 1100.0);
    }

    #[test]
    fn test_hex_code() {
        let text = SAMPLE.replace("C 66 ;", "CH <42> ;");
        let m = FontMetrics::parse(&text).unwrap();
        assert_eq!(m.width(0x42), Some(650.5));
    }
}

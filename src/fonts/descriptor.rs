//! Font descriptor dictionaries.
//!
//! PDF Spec: ISO 32000-1:2008, Section 9.8 - Font Descriptors

use super::afm::FontMetrics;
use crate::error::Result;
use crate::object::{Dictionary, Name, Object, Rectangle};

/// Font descriptor flags (Table 123).
pub mod flags {
    /// All glyphs have the same width
    pub const FIXED_PITCH: i64 = 1;
    /// Glyphs have serifs
    pub const SERIF: i64 = 1 << 1;
    /// Font contains glyphs outside the standard Latin set
    pub const SYMBOLIC: i64 = 1 << 2;
    /// Font uses the standard Latin character set
    pub const NONSYMBOLIC: i64 = 1 << 5;
    /// Glyphs are slanted
    pub const ITALIC: i64 = 1 << 6;
}

/// Descriptor derived once from a font's metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    dict: Dictionary,
    flags: i64,
}

impl FontDescriptor {
    pub fn from_metrics(metrics: &FontMetrics) -> Result<Self> {
        let flags = compute_flags(metrics);
        let [llx, lly, urx, ury] = metrics.bbox;

        let mut dict = Dictionary::new();
        dict.set("Type", Name::new("FontDescriptor"));
        dict.set("FontName", Name::new(metrics.font_name.as_str()));
        dict.set("Flags", flags);
        dict.set("FontBBox", Rectangle::new(llx, lly, urx, ury)?);
        dict.set("ItalicAngle", Object::real(metrics.italic_angle)?);
        dict.set("Ascent", Object::real(metrics.ascender)?);
        dict.set("Descent", Object::real(metrics.descender)?);
        dict.set("CapHeight", Object::real(metrics.cap_height)?);
        dict.set("StemV", Object::real(metrics.std_vw)?);
        dict.set("StemH", Object::real(metrics.std_hw)?);
        if metrics.x_height != 0.0 {
            dict.set("XHeight", Object::real(metrics.x_height)?);
        }
        if let Some(family) = &metrics.family_name {
            dict.set("FontFamily", crate::object::PdfString::new(family.as_str()));
        }

        Ok(Self { dict, flags })
    }

    pub fn flags(&self) -> i64 {
        self.flags
    }

    pub fn dict(&self) -> &Dictionary {
        &self.dict
    }

    pub fn to_object(&self) -> Object {
        Object::Dictionary(self.dict.clone())
    }
}

fn compute_flags(metrics: &FontMetrics) -> i64 {
    let mut value = 0;
    if metrics.is_fixed_pitch {
        value |= flags::FIXED_PITCH;
    }
    if metrics.is_symbolic() {
        value |= flags::SYMBOLIC;
    } else {
        value |= flags::NONSYMBOLIC;
    }
    if metrics.italic_angle != 0.0 {
        value |= flags::ITALIC;
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::PdfObject;

    fn metrics(extra: &str) -> FontMetrics {
        let text = format!(
            "StartFontMetrics 4.1\nFontName Test\nFontBBox 0 -200 1000 800\nAscender 700\n\
             Descender -200\nCapHeight 650\nStdVW 80\n{}\nStartCharMetrics 1\n\
             C 32 ; WX 250 ;\nEndCharMetrics\n",
            extra
        );
        FontMetrics::parse(&text).unwrap()
    }

    #[test]
    fn test_descriptor_entries() {
        let desc = FontDescriptor::from_metrics(&metrics("")).unwrap();
        let dict = desc.dict();
        assert_eq!(dict.get("Type"), Some(&Object::Name(Name::new("FontDescriptor"))));
        assert_eq!(dict.get("FontName"), Some(&Object::Name(Name::new("Test"))));
        assert_eq!(dict.get("Ascent").and_then(|a| a.as_real()), Some(700.0));
        assert_eq!(dict.get("StemV").and_then(|a| a.as_real()), Some(80.0));
        assert!(!dict.contains_key("XHeight"));

        let bbox = String::from_utf8(dict.get("FontBBox").unwrap().to_bytes()).unwrap();
        assert_eq!(bbox, "[ 0 -200 1000 800 ]");
    }

    #[test]
    fn test_flags() {
        assert_eq!(FontDescriptor::from_metrics(&metrics("")).unwrap().flags(), flags::NONSYMBOLIC);

        let mono = metrics("IsFixedPitch true\nItalicAngle -11");
        assert_eq!(
            FontDescriptor::from_metrics(&mono).unwrap().flags(),
            flags::FIXED_PITCH | flags::NONSYMBOLIC | flags::ITALIC
        );

        let symbol = metrics("EncodingScheme FontSpecific");
        assert_eq!(FontDescriptor::from_metrics(&symbol).unwrap().flags(), flags::SYMBOLIC);
    }
}

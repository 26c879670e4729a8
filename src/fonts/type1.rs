//! Simple Type 1 fonts described by AFM metrics.
//!
//! PDF Spec: ISO 32000-1:2008, Section 9.6.2 - Type 1 Fonts

use super::afm::FontMetrics;
use super::descriptor::FontDescriptor;
use crate::encoding::win_ansi_code;
use crate::error::{Error, Result};
use crate::object::{Dictionary, Name, Object, ObjectRef};

/// A non-embedded Type 1 font.
///
/// Built once from metrics text; a font that exists is always complete.
#[derive(Debug, Clone, PartialEq)]
pub struct Type1Font {
    metrics: FontMetrics,
    descriptor: FontDescriptor,
}

impl Type1Font {
    /// Parse AFM text into a font.
    pub fn parse(afm: &str) -> Result<Self> {
        let metrics = FontMetrics::parse(afm)?;
        let descriptor = FontDescriptor::from_metrics(&metrics)?;
        log::debug!(
            "Parsed font {} ({} widths)",
            metrics.font_name,
            metrics.widths.len()
        );
        Ok(Self { metrics, descriptor })
    }

    /// PostScript name, used as `/BaseFont`.
    pub fn name(&self) -> &str {
        &self.metrics.font_name
    }

    pub fn metrics(&self) -> &FontMetrics {
        &self.metrics
    }

    pub fn descriptor(&self) -> &FontDescriptor {
        &self.descriptor
    }

    /// Width of `ch` in font units; characters the font cannot show are 0.
    ///
    /// Symbolic fonts take `ch` as a code in their built-in encoding.
    pub fn char_width(&self, ch: char) -> f64 {
        self.code(ch)
            .and_then(|code| self.metrics.width(code))
            .unwrap_or(0.0)
    }

    fn code(&self, ch: char) -> Option<u8> {
        if self.metrics.is_symbolic() {
            u8::try_from(u32::from(ch)).ok()
        } else {
            win_ansi_code(ch)
        }
    }

    /// Width of `text` in points at `size`.
    pub fn text_width(&self, text: &str, size: f64) -> Result<f64> {
        let size = check_size(size)?;
        let units: f64 = text.chars().map(|c| self.char_width(c)).sum();
        Ok(units * size / 1000.0)
    }

    /// Minimum baseline-to-baseline distance in points at `size`.
    pub fn min_leading(&self, size: f64) -> Result<f64> {
        let size = check_size(size)?;
        Ok(self.metrics.min_leading_units() * size / 1000.0)
    }

    /// The `/Font` dictionary, pointing at an already registered descriptor.
    pub fn font_dictionary(&self, descriptor: ObjectRef) -> Result<Dictionary> {
        let mut dict = Dictionary::new();
        dict.set("Type", Name::new("Font"));
        dict.set("Subtype", Name::new("Type1"));
        dict.set("BaseFont", Name::new(self.name()));
        if !self.metrics.is_symbolic() {
            dict.set("Encoding", Name::new("WinAnsiEncoding"));
        }

        if let (Some(first), Some(last)) = (self.metrics.first_char(), self.metrics.last_char()) {
            let widths = (first..=last)
                .map(|code| Object::real(self.metrics.width(code).unwrap_or(0.0)))
                .collect::<Result<Vec<Object>>>()?;
            dict.set("FirstChar", i64::from(first));
            dict.set("LastChar", i64::from(last));
            dict.set("Widths", widths);
        }
        dict.set("FontDescriptor", descriptor);
        Ok(dict)
    }
}

fn check_size(size: f64) -> Result<f64> {
    if size.is_finite() && size > 0.0 {
        Ok(size)
    } else {
        Err(Error::InvalidArgument(format!("font size must be positive, got {}", size)))
    }
}

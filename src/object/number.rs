//! Real numbers and rectangles.
//!
//! PDF Spec: ISO 32000-1:2008, Section 7.3.3 - Numeric Objects
//! and Section 7.9.5 - Rectangles

use super::{write_array, Object, PdfObject};
use crate::error::{Error, Result};
use std::io::{self, Write};

/// Number of fractional digits kept when writing a real number.
pub const REAL_PRECISION: usize = 5;

/// Format a real number the way it is written into a PDF file.
///
/// Integral values print without a decimal point. Other values keep at most
/// [`REAL_PRECISION`] fractional digits of their shortest round-trip decimal
/// form, truncated toward zero, with trailing zeros removed. `-0` prints as
/// `0`.
pub(crate) fn format_real(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.fract() == 0.0 {
        return format!("{}", value);
    }

    // Display gives the shortest decimal that round-trips and never uses
    // an exponent, so 0.29 stays 0.29 and truncation works on real digits.
    let formatted = value.to_string();
    let (int_part, frac) = formatted.split_once('.').unwrap_or((formatted.as_str(), ""));
    let frac = frac[..REAL_PRECISION.min(frac.len())].trim_end_matches('0');

    let result = if frac.is_empty() {
        int_part.to_string()
    } else {
        format!("{}.{}", int_part, frac)
    };
    if result == "-0" {
        "0".to_string()
    } else {
        result
    }
}

/// Reject values a PDF real cannot represent.
pub(crate) fn ensure_finite(value: f64, what: &str) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::InvalidArgument(format!("{} must be finite, got {}", what, value)))
    }
}

/// A finite real number.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Real(f64);

impl Real {
    /// Create a real number, rejecting NaN and infinities.
    pub fn new(value: f64) -> Result<Self> {
        ensure_finite(value, "real number").map(Self)
    }

    /// The numeric value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Real {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Real::new(value)
    }
}

impl PdfObject for Real {
    fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(format_real(self.0).as_bytes())
    }
}

/// A rectangle given by two opposite corners.
///
/// The corners are written in the order they were given
/// (`llx lly urx ury`); width and height do not depend on which corner is
/// numerically larger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    llx: Real,
    lly: Real,
    urx: Real,
    ury: Real,
}

impl Rectangle {
    /// Create a rectangle from lower-left and upper-right coordinates.
    pub fn new(llx: f64, lly: f64, urx: f64, ury: f64) -> Result<Self> {
        Ok(Self {
            llx: Real::new(llx)?,
            lly: Real::new(lly)?,
            urx: Real::new(urx)?,
            ury: Real::new(ury)?,
        })
    }

    /// Create a rectangle anchored at the origin.
    pub fn from_size(width: f64, height: f64) -> Result<Self> {
        Self::new(0.0, 0.0, width, height)
    }

    /// Lower-left x.
    pub fn llx(&self) -> f64 {
        self.llx.value()
    }

    /// Lower-left y.
    pub fn lly(&self) -> f64 {
        self.lly.value()
    }

    /// Upper-right x.
    pub fn urx(&self) -> f64 {
        self.urx.value()
    }

    /// Upper-right y.
    pub fn ury(&self) -> f64 {
        self.ury.value()
    }

    /// Horizontal extent.
    pub fn width(&self) -> f64 {
        (self.urx() - self.llx()).abs()
    }

    /// Vertical extent.
    pub fn height(&self) -> f64 {
        (self.ury() - self.lly()).abs()
    }
}

impl PdfObject for Rectangle {
    fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> io::Result<()> {
        write_array(
            w,
            &[
                Object::Real(self.llx),
                Object::Real(self.lly),
                Object::Real(self.urx),
                Object::Real(self.ury),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_reals_have_no_decimal_point() {
        assert_eq!(format_real(1.0), "1");
        assert_eq!(format_real(612.0), "612");
        assert_eq!(format_real(-72.0), "-72");
        assert_eq!(format_real(0.0), "0");
        assert_eq!(format_real(-0.0), "0");
    }

    #[test]
    fn test_fraction_digits_are_truncated() {
        assert_eq!(format_real(3.14258), "3.14258");
        assert_eq!(format_real(0.5), "0.5");
        assert_eq!(format_real(1.999999), "1.99999");
        assert_eq!(format_real(-2.123456789), "-2.12345");
        // Truncation never carries into the integer part.
        assert_eq!(format_real(0.9999999999), "0.99999");
        assert_eq!(format_real(-4.999999999), "-4.99999");
    }

    #[test]
    fn test_binary_artefacts_do_not_leak() {
        assert_eq!(format_real(0.29), "0.29");
        assert_eq!(format_real(0.1 + 0.2), "0.3");
    }

    #[test]
    fn test_tiny_values_collapse_to_zero() {
        assert_eq!(format_real(0.0000001), "0");
        assert_eq!(format_real(-0.0000001), "0");
    }

    #[test]
    fn test_real_rejects_nan() {
        assert!(Real::new(f64::NAN).is_err());
        assert!(Real::try_from(f64::NEG_INFINITY).is_err());
        assert_eq!(Real::new(2.5).unwrap().value(), 2.5);
    }

    #[test]
    fn test_rectangle_write_order() {
        let rect = Rectangle::new(0.0, 0.0, 612.0, 792.0).unwrap();
        assert_eq!(String::from_utf8(rect.to_bytes()).unwrap(), "[ 0 0 612 792 ]");

        // Swapped corners keep their given order
        let swapped = Rectangle::new(612.0, 792.0, 0.0, 0.0).unwrap();
        assert_eq!(String::from_utf8(swapped.to_bytes()).unwrap(), "[ 612 792 0 0 ]");
    }

    #[test]
    fn test_rectangle_dimensions_are_order_independent() {
        let a = Rectangle::new(10.0, 20.0, 110.0, 70.0).unwrap();
        let b = Rectangle::new(110.0, 70.0, 10.0, 20.0).unwrap();
        assert_eq!(a.width(), 100.0);
        assert_eq!(a.height(), 50.0);
        assert_eq!(b.width(), a.width());
        assert_eq!(b.height(), a.height());
    }

    #[test]
    fn test_rectangle_rejects_non_finite() {
        assert!(Rectangle::new(0.0, f64::NAN, 1.0, 1.0).is_err());
    }
}

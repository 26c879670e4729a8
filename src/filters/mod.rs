//! Stream filter implementations.
//!
//! This module provides encoders for the PDF filters the writer emits:
//! - FlateDecode (zlib/deflate), optionally with the PNG Up predictor
//! - ASCIIHexDecode (hexadecimal encoding)
//!
//! Filters can be chained on one [`Stream`](crate::object::Stream); each
//! application wraps the previous payload.

use crate::error::{Error, Result};
use crate::object::Dictionary;

mod ascii_hex;
mod flate;

pub use ascii_hex::AsciiHexFilter;
pub use flate::FlateFilter;

/// Trait for PDF stream filters.
///
/// Each filter encodes a payload so that a reader applying the filter named
/// by [`StreamFilter::name`] recovers the original bytes.
pub trait StreamFilter {
    /// Filter name as written to `/Filter` (e.g., "FlateDecode").
    fn name(&self) -> &'static str;

    /// Parameters written to `/DecodeParms`, if the filter needs any.
    fn decode_params(&self) -> Option<Dictionary> {
        None
    }

    /// Encode the input data.
    fn encode(&self, input: &[u8]) -> Result<Vec<u8>>;
}

/// PDF stream filter types supported for encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    /// FlateDecode (deflate/zlib compression)
    FlateDecode,
    /// ASCIIHexDecode (hexadecimal encoding)
    ASCIIHexDecode,
}

impl Filter {
    /// Look up a filter by its PDF name.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "FlateDecode" => Ok(Filter::FlateDecode),
            "ASCIIHexDecode" => Ok(Filter::ASCIIHexDecode),
            other => Err(Error::UnsupportedFilter(other.to_string())),
        }
    }

    /// The PDF name of this filter.
    pub fn as_name(&self) -> &'static str {
        match self {
            Filter::FlateDecode => "FlateDecode",
            Filter::ASCIIHexDecode => "ASCIIHexDecode",
        }
    }

    /// An encoder with default settings.
    pub fn encoder(&self) -> Box<dyn StreamFilter> {
        match self {
            Filter::FlateDecode => Box::new(FlateFilter::new()),
            Filter::ASCIIHexDecode => Box::new(AsciiHexFilter),
        }
    }
}

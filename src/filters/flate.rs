//! FlateDecode encoder.
//!
//! Compresses data with zlib (RFC 1950) through `flate2`. With a predictor
//! configured, rows are first transformed with the PNG Up predictor
//! (predictor 12), which helps on tabular binary data.

use crate::error::{Error, Result};
use crate::filters::StreamFilter;
use crate::object::Dictionary;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::Write;

/// PNG "Up" predictor number, as written to `/Predictor`.
const PNG_UP: i64 = 12;

/// FlateDecode filter implementation.
#[derive(Debug, Clone, Copy)]
pub struct FlateFilter {
    level: u32,
    /// Row width in bytes when the PNG Up predictor is applied
    predictor_columns: Option<usize>,
}

impl Default for FlateFilter {
    fn default() -> Self {
        Self {
            level: Compression::default().level(),
            predictor_columns: None,
        }
    }
}

impl FlateFilter {
    /// Create a filter with the default compression level.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the compression level (0-9). Values above 9 are clamped.
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level.min(9);
        self
    }

    /// Apply the PNG Up predictor to rows of `columns` bytes before
    /// compressing.
    pub fn with_png_up_predictor(mut self, columns: usize) -> Self {
        self.predictor_columns = Some(columns);
        self
    }
}

/// Prefix each row with the Up tag and replace bytes by their difference
/// from the row above.
fn png_up_encode(input: &[u8], columns: usize) -> Result<Vec<u8>> {
    if columns == 0 || input.len() % columns != 0 {
        return Err(Error::InvalidArgument(format!(
            "FlateDecode: {} bytes do not form rows of {} columns",
            input.len(),
            columns
        )));
    }

    let mut output = Vec::with_capacity(input.len() + input.len() / columns);
    let mut previous = vec![0u8; columns];
    for row in input.chunks(columns) {
        output.push(2); // PNG filter type Up
        for (i, &byte) in row.iter().enumerate() {
            output.push(byte.wrapping_sub(previous[i]));
        }
        previous.copy_from_slice(row);
    }
    Ok(output)
}

impl StreamFilter for FlateFilter {
    fn name(&self) -> &'static str {
        "FlateDecode"
    }

    fn decode_params(&self) -> Option<Dictionary> {
        self.predictor_columns.map(|columns| {
            Dictionary::new()
                .with("Predictor", PNG_UP)
                .with("Columns", columns)
        })
    }

    fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
        let predicted;
        let data = match self.predictor_columns {
            Some(columns) => {
                predicted = png_up_encode(input, columns)?;
                &predicted[..]
            }
            None => input,
        };

        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::new(self.level));
        encoder.write_all(data)?;
        Ok(encoder.finish()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::ZlibDecoder;
    use std::io::Read;

    fn inflate(data: &[u8]) -> Vec<u8> {
        let mut decoder = ZlibDecoder::new(data);
        let mut out = Vec::new();
        decoder.read_to_end(&mut out).unwrap();
        out
    }

    #[test]
    fn test_flate_encode_inflates_back() {
        let original = b"BT /F1 24 Tf 72 720 Td (Hello World: 0) Tj ET".repeat(10);
        let encoded = FlateFilter::new().encode(&original).unwrap();
        assert!(encoded.len() < original.len());
        assert_eq!(inflate(&encoded), original);
    }

    #[test]
    fn test_flate_level_zero_still_valid() {
        let encoded = FlateFilter::new().with_level(0).encode(b"abc").unwrap();
        assert_eq!(inflate(&encoded), b"abc");
    }

    #[test]
    fn test_png_up_rows() {
        let predicted = png_up_encode(&[1, 2, 3, 4, 6, 8], 3).unwrap();
        assert_eq!(predicted, vec![2, 1, 2, 3, 2, 3, 4, 5]);
    }

    #[test]
    fn test_png_up_rejects_partial_row() {
        assert!(png_up_encode(&[1, 2, 3, 4], 3).is_err());
        assert!(FlateFilter::new().with_png_up_predictor(0).encode(b"ab").is_err());
    }

    #[test]
    fn test_decode_params_only_with_predictor() {
        assert!(FlateFilter::new().decode_params().is_none());
        let params = FlateFilter::new().with_png_up_predictor(4).decode_params().unwrap();
        assert_eq!(params.get("Predictor").and_then(|p| p.as_integer()), Some(12));
        assert_eq!(params.get("Columns").and_then(|p| p.as_integer()), Some(4));
    }
}

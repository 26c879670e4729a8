//! Configuration for PDF generation.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Configuration for a [`PdfWriter`](crate::writer::PdfWriter).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    /// PDF version written in the header (e.g., "1.7")
    pub version: String,
    /// Whether to compress page content streams with FlateDecode
    pub compress: bool,
    /// Producer application recorded in the Info dictionary
    pub producer: Option<String>,
    /// Creator application recorded in the Info dictionary
    pub creator: Option<String>,
    /// Force /Producer and /Creator into Info even if no metadata was added
    pub stamp_producer: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            version: "1.7".to_string(),
            compress: false,
            producer: Some(format!("{} {}", crate::NAME, crate::VERSION)),
            creator: None,
            stamp_producer: false,
        }
    }
}

impl WriterConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a JSON document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the header version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Enable or disable stream compression.
    ///
    /// When enabled, page content streams are compressed using FlateDecode
    /// (zlib/deflate) to reduce file size.
    pub fn with_compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Set the producer string.
    pub fn with_producer(mut self, producer: impl Into<String>) -> Self {
        self.producer = Some(producer.into());
        self
    }

    /// Set the creator string.
    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = Some(creator.into());
        self
    }

    /// Always stamp producer/creator into the Info dictionary.
    pub fn with_stamp_producer(mut self, stamp: bool) -> Self {
        self.stamp_producer = stamp;
        self
    }
}

// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::too_many_arguments)]
#![allow(clippy::enum_variant_names)]
#![allow(clippy::wrong_self_convention)]

//! # PDF Forge
//!
//! Low-level PDF serialization engine: typed PDF objects, a registry of
//! indirect objects, and byte-exact output of the body, cross-reference
//! table and trailer.
//!
//! ## Core Features
//!
//! - **Object model**: names, strings, numbers, arrays, dictionaries and
//!   streams, each writing its canonical form (ISO 32000-1:2008 §7.3)
//! - **Stream filters**: FlateDecode (with PNG Up predictor) and ASCIIHexDecode
//! - **Text encodings**: WinAnsi, PDFDocEncoding and UTF-16BE literal strings
//! - **Standard fonts**: Type 1 metrics from AFM files, descriptors, widths
//! - **Content streams**: graphics operators and text objects with adjacent
//!   operator merging
//! - **Document structure**: catalog, page tree, Info dictionary, outlines
//!
//! ## Quick Start
//!
//! ```ignore
//! use pdf_forge::content::ContentStreamBuilder;
//! use pdf_forge::document::PageSize;
//! use pdf_forge::encoding::WinAnsiEncoding;
//! use pdf_forge::fonts::FontRegistry;
//! use pdf_forge::writer::PdfWriter;
//!
//! # fn main() -> pdf_forge::Result<()> {
//! let fonts = FontRegistry::new();
//! let helvetica = fonts.get("Helvetica")?;
//!
//! let mut writer = PdfWriter::new();
//! let font = writer.add_font(&helvetica)?;
//! let mut page = writer.add_page(PageSize::Letter)?;
//! let name = page.add_font(font)?;
//!
//! let mut content = ContentStreamBuilder::new();
//! content.text(&name, 24.0, 72.0, 720.0, "Hello World: 0", &WinAnsiEncoding);
//! page.set_content(&content)?;
//!
//! writer.save("hello.pdf")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

// Error handling
pub mod error;

/// Writer configuration
pub mod config;

// Object model
pub mod object;

// Text encodings and stream filters
pub mod encoding;
pub mod filters;

// Fonts and page content
pub mod content;
pub mod fonts;

// Document structure and output
pub mod document;
pub mod writer;

pub use config::WriterConfig;
pub use error::{Error, Result};
pub use object::{Dictionary, Name, Object, ObjectRef, PdfObject, PdfString, Real, Rectangle, Stream};
pub use writer::PdfWriter;

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

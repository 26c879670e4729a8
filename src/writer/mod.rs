//! PDF writing module.
//!
//! ## Architecture
//!
//! ```text
//! Objects, pages, fonts, outline items
//!     ↓
//! [PdfWriter] (registry of indirect objects, creation order)
//!     ↓
//! [ObjectSerializer] (serializes PDF objects)
//!     ↓
//! [CountingWriter] (records each object's byte offset)
//!     ↓
//! header + body + xref + trailer
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use pdf_forge::writer::PdfWriter;
//! use pdf_forge::document::PageSize;
//!
//! let mut writer = PdfWriter::new();
//! writer.add_page(PageSize::Letter)?;
//! let bytes = writer.finish()?;
//! ```

mod counting;
mod object_serializer;
mod pdf_writer;

pub use counting::CountingWriter;
pub use object_serializer::ObjectSerializer;
pub use pdf_writer::PdfWriter;

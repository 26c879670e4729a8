//! Document structure: pages, metadata and outline.
//!
//! The catalog and page tree live in [`PdfWriter`](crate::writer::PdfWriter);
//! the types here describe what hangs off them.

pub mod info;
pub mod outline;
pub mod page;

pub use info::{pdf_date, Info};
pub use outline::{
    Destination, FitMode, Outline, OutlineId, OutlineItem, OutlineStyle, OUTLINE_TOP_OFFSET,
};
pub use page::{PageBuilder, PageSize};

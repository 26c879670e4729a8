//! Fonts for generated documents.
//!
//! Simple (non-embedded) Type 1 fonts are described by AFM metrics. The
//! metrics give the `/Widths` array, the font descriptor, and the numbers
//! layout code needs (text width, minimum leading).

pub mod afm;
pub mod descriptor;
mod registry;
mod standard;
mod type1;

pub use afm::FontMetrics;
pub use descriptor::FontDescriptor;
pub use registry::{DirectoryMetrics, FontRegistry, MetricsSource, StandardMetrics};
pub use standard::STANDARD_FONT_NAMES;
pub use type1::Type1Font;

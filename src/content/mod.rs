//! Page content streams.
//!
//! [`ContentStreamBuilder`] collects graphics operators and text objects
//! and produces the bytes of a page's content stream. Text objects merge
//! adjacent operators as they are appended (see [`TextObject::push`]).

mod content_stream;
mod text_object;

pub use content_stream::{ContentStreamBuilder, ContentStreamOp};
pub use text_object::{TextObject, TextOperator};

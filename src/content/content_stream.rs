//! PDF content stream builder.
//!
//! Builds page content streams from graphics and text operators
//! according to PDF specification ISO 32000-1:2008 Section 8-9.

use super::text_object::TextObject;
use crate::encoding::TextEncoder;
use crate::error::Result;
use crate::filters::FlateFilter;
use crate::object::{format_real, Name, Real, Stream};
use std::io::Write;

/// Operations that can be added to a content stream.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentStreamOp {
    /// Save graphics state (q)
    SaveState,
    /// Restore graphics state (Q)
    RestoreState,
    /// Concatenate to the transformation matrix (cm)
    Transform([f64; 6]),
    /// Set fill color RGB (rg)
    SetFillColorRgb(f64, f64, f64),
    /// Set stroke color RGB (RG)
    SetStrokeColorRgb(f64, f64, f64),
    /// Set line width (w)
    SetLineWidth(f64),
    /// Move to (m)
    MoveTo(f64, f64),
    /// Line to (l)
    LineTo(f64, f64),
    /// Rectangle (re)
    Rectangle(f64, f64, f64, f64),
    /// Close path (h)
    ClosePath,
    /// Stroke (S)
    Stroke,
    /// Fill (f)
    Fill,
    /// A complete BT ... ET block
    Text(TextObject),
    /// Raw operator line (for extensibility)
    Raw(String),
}

/// Builder for PDF content streams.
#[derive(Debug, Clone, Default)]
pub struct ContentStreamBuilder {
    operations: Vec<ContentStreamOp>,
}

impl ContentStreamBuilder {
    /// Create a new content stream builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a raw operation.
    pub fn op(&mut self, op: ContentStreamOp) -> &mut Self {
        self.operations.push(op);
        self
    }

    /// Operations added so far.
    pub fn operations(&self) -> &[ContentStreamOp] {
        &self.operations
    }

    /// Show `text` at (`x`, `y`) in a text object of its own.
    pub fn text(
        &mut self,
        font: &Name,
        size: f64,
        x: f64,
        y: f64,
        text: &str,
        encoder: &dyn TextEncoder,
    ) -> &mut Self {
        let mut object = TextObject::new();
        object
            .set_font(font.clone(), size)
            .move_text(x, y)
            .show_text(text, encoder);
        self.text_object(object)
    }

    /// Add a prepared text object.
    pub fn text_object(&mut self, object: TextObject) -> &mut Self {
        self.op(ContentStreamOp::Text(object))
    }

    pub fn save_state(&mut self) -> &mut Self {
        self.op(ContentStreamOp::SaveState)
    }

    pub fn restore_state(&mut self) -> &mut Self {
        self.op(ContentStreamOp::RestoreState)
    }

    pub fn transform(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> &mut Self {
        self.op(ContentStreamOp::Transform([a, b, c, d, e, f]))
    }

    pub fn translate(&mut self, tx: f64, ty: f64) -> &mut Self {
        self.transform(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    pub fn set_fill_color(&mut self, r: f64, g: f64, b: f64) -> &mut Self {
        self.op(ContentStreamOp::SetFillColorRgb(r, g, b))
    }

    pub fn set_stroke_color(&mut self, r: f64, g: f64, b: f64) -> &mut Self {
        self.op(ContentStreamOp::SetStrokeColorRgb(r, g, b))
    }

    pub fn set_line_width(&mut self, width: f64) -> &mut Self {
        self.op(ContentStreamOp::SetLineWidth(width))
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.op(ContentStreamOp::MoveTo(x, y))
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.op(ContentStreamOp::LineTo(x, y))
    }

    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        self.op(ContentStreamOp::Rectangle(x, y, width, height))
    }

    pub fn close_path(&mut self) -> &mut Self {
        self.op(ContentStreamOp::ClosePath)
    }

    pub fn stroke(&mut self) -> &mut Self {
        self.op(ContentStreamOp::Stroke)
    }

    pub fn fill(&mut self) -> &mut Self {
        self.op(ContentStreamOp::Fill)
    }

    pub fn raw(&mut self, line: impl Into<String>) -> &mut Self {
        self.op(ContentStreamOp::Raw(line.into()))
    }

    /// Build the content stream bytes.
    pub fn build(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();

        for op in &self.operations {
            self.write_op(&mut buf, op)?;
        }

        Ok(buf)
    }

    /// Build a stream object, Flate-compressed when `compress` is set.
    pub fn into_stream(&self, compress: bool) -> Result<Stream> {
        let stream = Stream::new(self.build()?);
        if compress {
            stream.filtered(&FlateFilter::new())
        } else {
            Ok(stream)
        }
    }

    /// Write a single operation, including its line end.
    fn write_op<W: Write>(&self, w: &mut W, op: &ContentStreamOp) -> Result<()> {
        match op {
            ContentStreamOp::SaveState => writeln!(w, "q")?,
            ContentStreamOp::RestoreState => writeln!(w, "Q")?,
            ContentStreamOp::Transform(m) => writeln!(w, "{} cm", numbers(m)?)?,
            ContentStreamOp::SetFillColorRgb(r, g, b) => {
                writeln!(w, "{} rg", numbers(&[*r, *g, *b])?)?
            }
            ContentStreamOp::SetStrokeColorRgb(r, g, b) => {
                writeln!(w, "{} RG", numbers(&[*r, *g, *b])?)?
            }
            ContentStreamOp::SetLineWidth(width) => writeln!(w, "{} w", numbers(&[*width])?)?,
            ContentStreamOp::MoveTo(x, y) => writeln!(w, "{} m", numbers(&[*x, *y])?)?,
            ContentStreamOp::LineTo(x, y) => writeln!(w, "{} l", numbers(&[*x, *y])?)?,
            ContentStreamOp::Rectangle(x, y, width, height) => {
                writeln!(w, "{} re", numbers(&[*x, *y, *width, *height])?)?
            }
            ContentStreamOp::ClosePath => writeln!(w, "h")?,
            ContentStreamOp::Stroke => writeln!(w, "S")?,
            ContentStreamOp::Fill => writeln!(w, "f")?,
            ContentStreamOp::Text(object) => object.write(w)?,
            ContentStreamOp::Raw(line) => writeln!(w, "{}", line)?,
        }
        Ok(())
    }
}

/// Space-separated operands, rejecting NaN and infinities.
fn numbers(values: &[f64]) -> Result<String> {
    let formatted = values
        .iter()
        .map(|v| Real::new(*v).map(|r| format_real(r.value())))
        .collect::<Result<Vec<String>>>()?;
    Ok(formatted.join(" "))
}

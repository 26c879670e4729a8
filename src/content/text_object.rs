//! Text objects (`BT` ... `ET`) with append-time operator merging.
//!
//! PDF Spec: ISO 32000-1:2008, Section 9.4 - Text Objects

use crate::encoding::TextEncoder;
use crate::error::Result;
use crate::object::{format_real, Name, PdfObject, Real};
use std::io::Write;

/// Text operators a text object can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum TextOperator {
    /// Move to the start of the next line, offset from the current one (Td)
    MoveText {
        /// Horizontal offset
        dx: f64,
        /// Vertical offset
        dy: f64,
    },
    /// Select font resource and size (Tf)
    SetFont {
        /// Resource name in the page's /Font dictionary
        name: Name,
        /// Size in text space units
        size: f64,
    },
    /// Character spacing (Tc)
    SetCharacterSpacing(f64),
    /// Word spacing (Tw)
    SetWordSpacing(f64),
    /// Move to the next line using the current leading (T*)
    NextLine,
    /// Show an already encoded literal string body (Tj)
    ShowText(Vec<u8>),
}

impl TextOperator {
    /// Whether `next`, appended right after `self`, can be folded into it.
    pub fn is_collapsible(&self, next: &TextOperator) -> bool {
        matches!(
            (self, next),
            (TextOperator::MoveText { .. }, TextOperator::MoveText { .. })
                | (TextOperator::SetFont { .. }, TextOperator::SetFont { .. })
                | (TextOperator::SetCharacterSpacing(_), TextOperator::SetCharacterSpacing(_))
                | (TextOperator::SetWordSpacing(_), TextOperator::SetWordSpacing(_))
        )
    }

    /// The single operator equivalent to `self` followed by `next`.
    ///
    /// Offsets add up; state setters keep the later value. Returns `None`
    /// when the pair does not merge.
    pub fn collapse(&self, next: &TextOperator) -> Option<TextOperator> {
        match (self, next) {
            (
                TextOperator::MoveText { dx, dy },
                TextOperator::MoveText { dx: dx2, dy: dy2 },
            ) => Some(TextOperator::MoveText {
                dx: dx + dx2,
                dy: dy + dy2,
            }),
            _ if self.is_collapsible(next) => Some(next.clone()),
            _ => None,
        }
    }

    /// Write the operator and its operands, without a line end.
    pub fn write<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        match self {
            TextOperator::MoveText { dx, dy } => {
                write!(w, "{} {} Td", number(*dx)?, number(*dy)?)?;
            }
            TextOperator::SetFont { name, size } => {
                name.write_to(w)?;
                write!(w, " {} Tf", number(*size)?)?;
            }
            TextOperator::SetCharacterSpacing(spacing) => write!(w, "{} Tc", number(*spacing)?)?,
            TextOperator::SetWordSpacing(spacing) => write!(w, "{} Tw", number(*spacing)?)?,
            TextOperator::NextLine => w.write_all(b"T*")?,
            TextOperator::ShowText(bytes) => {
                w.write_all(b"(")?;
                w.write_all(bytes)?;
                w.write_all(b") Tj")?;
            }
        }
        Ok(())
    }
}

fn number(value: f64) -> Result<String> {
    Ok(format_real(Real::new(value)?.value()))
}

/// A sequence of text operators written between `BT` and `ET`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextObject {
    ops: Vec<TextOperator>,
}

impl TextObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `op`, merging it into the last operator when they combine.
    ///
    /// Only the last operator is consulted; an operator of another kind in
    /// between prevents merging.
    pub fn push(&mut self, op: TextOperator) -> &mut Self {
        if let Some(last) = self.ops.last_mut() {
            if let Some(merged) = last.collapse(&op) {
                *last = merged;
                return self;
            }
        }
        self.ops.push(op);
        self
    }

    pub fn move_text(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.push(TextOperator::MoveText { dx, dy })
    }

    pub fn set_font(&mut self, name: Name, size: f64) -> &mut Self {
        self.push(TextOperator::SetFont { name, size })
    }

    pub fn set_character_spacing(&mut self, spacing: f64) -> &mut Self {
        self.push(TextOperator::SetCharacterSpacing(spacing))
    }

    pub fn set_word_spacing(&mut self, spacing: f64) -> &mut Self {
        self.push(TextOperator::SetWordSpacing(spacing))
    }

    pub fn next_line(&mut self) -> &mut Self {
        self.push(TextOperator::NextLine)
    }

    /// Encode `text` and show it.
    pub fn show_text(&mut self, text: &str, encoder: &dyn TextEncoder) -> &mut Self {
        self.push(TextOperator::ShowText(encoder.encode(text)))
    }

    pub fn ops(&self) -> &[TextOperator] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Write `BT`, one operator per line, then `ET`.
    ///
    /// Fails if an operand is NaN or infinite.
    pub fn write<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        w.write_all(b"BT\n")?;
        for op in &self.ops {
            op.write(w)?;
            w.write_all(b"\n")?;
        }
        w.write_all(b"ET\n")?;
        Ok(())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.write(&mut buf)?;
        Ok(buf)
    }
}

//! PDF object types.
//!
//! Every object knows how to write its canonical byte form through the
//! [`PdfObject`] trait. [`Object`] is the closed union that composite
//! objects (arrays, dictionaries, streams) store.
//!
//! PDF Spec: ISO 32000-1:2008, Section 7.3 - Objects

mod dictionary;
mod indirect;
mod name;
mod number;
mod stream;
mod string;

pub use dictionary::Dictionary;
pub use indirect::IndirectObject;
pub use name::Name;
pub use number::{Real, Rectangle, REAL_PRECISION};
pub use stream::Stream;
pub use string::{PdfString, StringEncoding};

pub(crate) use number::format_real;

use std::io::{self, Write};

/// Anything that can be serialized into a PDF file.
///
/// Implementations write nothing but their own canonical representation
/// to the sink.
pub trait PdfObject {
    /// Write the canonical representation of this object.
    fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> io::Result<()>;

    /// Serialize into a fresh byte buffer.
    fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write_to(&mut buf);
        buf
    }
}

/// PDF object representation.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    /// Null object
    Null,
    /// Boolean value
    Boolean(bool),
    /// Integer value
    Integer(i64),
    /// Real (floating-point) value
    Real(Real),
    /// Literal string with a single-byte text encoding
    String(PdfString),
    /// Name (starting with /)
    Name(Name),
    /// Array of objects
    Array(Vec<Object>),
    /// Dictionary (key-value pairs)
    Dictionary(Dictionary),
    /// Stream (dictionary + data)
    Stream(Stream),
    /// Indirect object reference
    Reference(ObjectRef),
    /// Rectangle written as a four-element array
    Rectangle(Rectangle),
}

/// Reference to an indirect object.
///
/// A small value handle: it never owns its target, so it can be stored
/// in any number of parents before the target is complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectRef {
    /// Object number
    pub id: u32,
    /// Generation number
    pub gen: u16,
}

impl ObjectRef {
    /// Create a new object reference.
    pub fn new(id: u32, gen: u16) -> Self {
        Self { id, gen }
    }
}

impl std::fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} R", self.id, self.gen)
    }
}

impl PdfObject for ObjectRef {
    fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> io::Result<()> {
        write!(w, "{} {} R", self.id, self.gen)
    }
}

impl Object {
    /// Get the type name of this object (without data).
    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Null => "Null",
            Object::Boolean(_) => "Boolean",
            Object::Integer(_) => "Integer",
            Object::Real(_) => "Real",
            Object::String(s) if s.is_doc_encoded() => "PdfDocEncoded String",
            Object::String(_) => "String",
            Object::Name(_) => "Name",
            Object::Array(_) => "Array",
            Object::Dictionary(_) => "Dictionary",
            Object::Stream(_) => "Stream",
            Object::Reference(_) => "Reference",
            Object::Rectangle(_) => "Rectangle",
        }
    }

    /// Create a real number object, rejecting NaN and infinities.
    pub fn real(value: f64) -> crate::error::Result<Object> {
        Ok(Object::Real(Real::new(value)?))
    }

    /// Try to cast to integer.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Object::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to cast to real number. Integers widen to reals.
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Object::Real(r) => Some(r.value()),
            Object::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to cast to name.
    pub fn as_name(&self) -> Option<&Name> {
        match self {
            Object::Name(n) => Some(n),
            _ => None,
        }
    }

    /// Try to cast to string.
    pub fn as_string(&self) -> Option<&PdfString> {
        match self {
            Object::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to cast to dictionary. Works for both Dictionary and Stream objects.
    pub fn as_dict(&self) -> Option<&Dictionary> {
        match self {
            Object::Dictionary(d) => Some(d),
            Object::Stream(s) => Some(s.dict()),
            _ => None,
        }
    }

    /// Mutable access to a dictionary or a stream's dictionary.
    pub fn as_dict_mut(&mut self) -> Option<&mut Dictionary> {
        match self {
            Object::Dictionary(d) => Some(d),
            Object::Stream(s) => Some(s.dict_mut()),
            _ => None,
        }
    }

    /// Try to cast to array.
    pub fn as_array(&self) -> Option<&Vec<Object>> {
        match self {
            Object::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Try to cast to stream.
    pub fn as_stream(&self) -> Option<&Stream> {
        match self {
            Object::Stream(s) => Some(s),
            _ => None,
        }
    }

    /// Try to cast to reference.
    pub fn as_reference(&self) -> Option<ObjectRef> {
        match self {
            Object::Reference(r) => Some(*r),
            _ => None,
        }
    }

    /// Try to cast to boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Object::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Check if object is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Object::Null)
    }
}

/// Write an array as `[ e1 e2 ... ]`; the empty array is `[ ]`.
pub(crate) fn write_array<W: Write + ?Sized>(w: &mut W, items: &[Object]) -> io::Result<()> {
    w.write_all(b"[")?;
    for item in items {
        w.write_all(b" ")?;
        item.write_to(w)?;
    }
    w.write_all(b" ]")
}

impl PdfObject for Object {
    fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> io::Result<()> {
        match self {
            Object::Null => w.write_all(b"null"),
            Object::Boolean(b) => w.write_all(if *b { b"true" } else { b"false" }),
            Object::Integer(i) => write!(w, "{}", i),
            Object::Real(r) => r.write_to(w),
            Object::String(s) => s.write_to(w),
            Object::Name(n) => n.write_to(w),
            Object::Array(arr) => write_array(w, arr),
            Object::Dictionary(dict) => dict.write_to(w),
            Object::Stream(stream) => stream.write_to(w),
            Object::Reference(r) => r.write_to(w),
            Object::Rectangle(rect) => rect.write_to(w),
        }
    }
}

impl From<bool> for Object {
    fn from(b: bool) -> Self {
        Object::Boolean(b)
    }
}

impl From<i64> for Object {
    fn from(i: i64) -> Self {
        Object::Integer(i)
    }
}

impl From<i32> for Object {
    fn from(i: i32) -> Self {
        Object::Integer(i as i64)
    }
}

impl From<usize> for Object {
    fn from(i: usize) -> Self {
        Object::Integer(i as i64)
    }
}

impl From<Real> for Object {
    fn from(r: Real) -> Self {
        Object::Real(r)
    }
}

impl From<Name> for Object {
    fn from(n: Name) -> Self {
        Object::Name(n)
    }
}

impl From<PdfString> for Object {
    fn from(s: PdfString) -> Self {
        Object::String(s)
    }
}

impl From<Vec<Object>> for Object {
    fn from(items: Vec<Object>) -> Self {
        Object::Array(items)
    }
}

impl From<Dictionary> for Object {
    fn from(d: Dictionary) -> Self {
        Object::Dictionary(d)
    }
}

impl From<Stream> for Object {
    fn from(s: Stream) -> Self {
        Object::Stream(s)
    }
}

impl From<ObjectRef> for Object {
    fn from(r: ObjectRef) -> Self {
        Object::Reference(r)
    }
}

impl From<Rectangle> for Object {
    fn from(r: Rectangle) -> Self {
        Object::Rectangle(r)
    }
}

//! PDF object serialization.
//!
//! Serializes objects to their byte representation according to
//! PDF specification ISO 32000-1:2008, and offers small constructors
//! for building the fixed document-structure dictionaries.

use crate::error::Result;
use crate::object::{
    Dictionary, IndirectObject, Name, Object, ObjectRef, PdfObject, PdfString, Rectangle,
};
use std::io::Write;

/// Serializer for PDF objects.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectSerializer;

impl ObjectSerializer {
    pub fn new() -> Self {
        Self
    }

    /// Serialize an object to bytes.
    pub fn serialize<T: PdfObject + ?Sized>(&self, obj: &T) -> Vec<u8> {
        obj.to_bytes()
    }

    /// Serialize an object to a string (for debugging).
    pub fn serialize_to_string<T: PdfObject + ?Sized>(&self, obj: &T) -> String {
        String::from_utf8_lossy(&self.serialize(obj)).into_owned()
    }

    /// Serialize an indirect object definition.
    ///
    /// Format: `{id} {gen} obj\n{object}\nendobj\n\n`
    pub fn serialize_indirect(&self, indirect: &IndirectObject) -> Vec<u8> {
        indirect.to_bytes()
    }

    /// Write the trailer keyword and dictionary.
    pub fn write_trailer<W: Write + ?Sized>(&self, w: &mut W, trailer: &Dictionary) -> Result<()> {
        writeln!(w, "trailer")?;
        trailer.write_to(w)?;
        writeln!(w)?;
        Ok(())
    }
}

/// Helper functions for building PDF objects.
impl ObjectSerializer {
    /// Create a Name object.
    pub fn name(s: &str) -> Object {
        Object::Name(Name::new(s))
    }

    /// Create a WinAnsi string object.
    pub fn string(s: &str) -> Object {
        Object::String(PdfString::new(s))
    }

    /// Create a PDFDocEncoded string object.
    pub fn doc_string(s: &str) -> Object {
        Object::String(PdfString::doc_encoded(s))
    }

    pub fn integer(i: i64) -> Object {
        Object::Integer(i)
    }

    /// Create a Real object; NaN and infinities are rejected.
    pub fn real(r: f64) -> Result<Object> {
        Object::real(r)
    }

    pub fn boolean(b: bool) -> Object {
        Object::Boolean(b)
    }

    pub fn array(items: Vec<Object>) -> Object {
        Object::Array(items)
    }

    /// Create a Dictionary from key/value pairs.
    pub fn dict(entries: Vec<(&str, Object)>) -> Dictionary {
        entries.into_iter().collect()
    }

    pub fn reference(id: u32, gen: u16) -> Object {
        Object::Reference(ObjectRef::new(id, gen))
    }

    /// Create a rectangle from [x, y, width, height] -> [llx, lly, urx, ury].
    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Result<Object> {
        Ok(Object::Rectangle(Rectangle::new(x, y, x + width, y + height)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::Stream;

    #[test]
    fn test_serialize_primitives() {
        let s = ObjectSerializer::new();
        assert_eq!(s.serialize_to_string(&Object::Null), "null");
        assert_eq!(s.serialize_to_string(&ObjectSerializer::boolean(false)), "false");
        assert_eq!(s.serialize_to_string(&ObjectSerializer::integer(-123)), "-123");
        assert_eq!(s.serialize_to_string(&ObjectSerializer::real(3.14258).unwrap()), "3.14258");
        assert_eq!(s.serialize_to_string(&ObjectSerializer::real(1.0).unwrap()), "1");
    }

    #[test]
    fn test_serialize_string() {
        let s = ObjectSerializer::new();
        assert_eq!(
            s.serialize_to_string(&ObjectSerializer::string("Test (parens)")),
            "(Test \\(parens\\))"
        );
    }

    #[test]
    fn test_serialize_name_with_special_chars() {
        let s = ObjectSerializer::new();
        assert_eq!(
            s.serialize_to_string(&ObjectSerializer::name("Name With Space")),
            "/Name#20With#20Space"
        );
    }

    #[test]
    fn test_serialize_dictionary() {
        let s = ObjectSerializer::new();
        let dict = ObjectSerializer::dict(vec![
            ("Type", ObjectSerializer::name("Page")),
            ("Count", ObjectSerializer::integer(1)),
        ]);
        assert_eq!(s.serialize_to_string(&dict), "<</Count 1/Type /Page>>");
    }

    #[test]
    fn test_serialize_indirect() {
        let s = ObjectSerializer::new();
        let obj = IndirectObject::new(ObjectRef::new(1, 0), Object::Integer(42));
        assert_eq!(s.serialize_indirect(&obj), b"1 0 obj\n42\nendobj\n\n");
    }

    #[test]
    fn test_serialize_stream() {
        let s = ObjectSerializer::new();
        let stream = Stream::new(b"stream data".to_vec());
        let result = s.serialize_to_string(&stream);
        assert!(result.contains("/Length 11"));
        assert!(result.contains("stream\nstream data\nendstream"));
    }

    #[test]
    fn test_write_trailer() {
        let s = ObjectSerializer::new();
        let trailer = ObjectSerializer::dict(vec![
            ("Size", ObjectSerializer::integer(4)),
            ("Root", ObjectSerializer::reference(1, 0)),
        ]);
        let mut out = Vec::new();
        s.write_trailer(&mut out, &trailer).unwrap();
        assert_eq!(out, b"trailer\n<</Root 1 0 R/Size 4>>\n");
    }

    #[test]
    fn test_rect_helper() {
        let s = ObjectSerializer::new();
        let rect = ObjectSerializer::rect(0.0, 0.0, 612.0, 792.0).unwrap();
        assert_eq!(s.serialize_to_string(&rect), "[ 0 0 612 792 ]");
        assert!(ObjectSerializer::rect(f64::NAN, 0.0, 1.0, 1.0).is_err());
    }
}

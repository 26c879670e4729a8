//! Indirect objects.
//!
//! PDF Spec: ISO 32000-1:2008, Section 7.3.10 - Indirect Objects

use super::{Object, ObjectRef, PdfObject};
use std::io::{self, Write};

/// An object registered under an object number.
///
/// The wrapped object may change until the document is written; the byte
/// offset is recorded by the write pass.
#[derive(Debug, Clone, PartialEq)]
pub struct IndirectObject {
    reference: ObjectRef,
    object: Object,
    offset: Option<u64>,
}

impl IndirectObject {
    pub(crate) fn new(reference: ObjectRef, object: Object) -> Self {
        Self {
            reference,
            object,
            offset: None,
        }
    }

    /// The handle other objects use to point here.
    pub fn reference(&self) -> ObjectRef {
        self.reference
    }

    pub fn object(&self) -> &Object {
        &self.object
    }

    pub(crate) fn object_mut(&mut self) -> &mut Object {
        &mut self.object
    }

    /// Byte offset of the `N G obj` line from the last write pass.
    pub fn offset(&self) -> Option<u64> {
        self.offset
    }

    pub(crate) fn set_offset(&mut self, offset: u64) {
        self.offset = Some(offset);
    }
}

impl PdfObject for IndirectObject {
    fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> io::Result<()> {
        let body = self.object.to_bytes();
        writeln!(w, "{} {} obj", self.reference.id, self.reference.gen)?;
        w.write_all(&body)?;
        if body.last() != Some(&b'\n') {
            w.write_all(b"\n")?;
        }
        w.write_all(b"endobj\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{Dictionary, Name, Stream};

    #[test]
    fn test_write_dictionary_body() {
        let dict = Dictionary::new().with("Type", Name::new("Catalog"));
        let obj = IndirectObject::new(ObjectRef::new(1, 0), Object::Dictionary(dict));
        assert_eq!(obj.to_bytes(), b"1 0 obj\n<</Type /Catalog>>\nendobj\n\n".to_vec());
    }

    #[test]
    fn test_stream_body_gets_newline_before_endobj() {
        let stream = Stream::new(b"data\n".to_vec());
        let obj = IndirectObject::new(ObjectRef::new(4, 0), Object::Stream(stream));
        let bytes = obj.to_bytes();
        assert!(bytes.ends_with(b"endstream\nendobj\n\n"));
    }

    #[test]
    fn test_offset_set_by_write_pass() {
        let mut obj = IndirectObject::new(ObjectRef::new(2, 0), Object::Null);
        assert_eq!(obj.offset(), None);
        obj.set_offset(15);
        assert_eq!(obj.offset(), Some(15));
        assert_eq!(obj.reference(), ObjectRef::new(2, 0));
    }
}

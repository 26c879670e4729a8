//! Document information dictionary.
//!
//! PDF Spec: ISO 32000-1:2008, Section 14.3.3 - Document Information Dictionary

use crate::error::{Error, Result};
use crate::object::{Dictionary, Name, Object, PdfString};
use crate::writer::PdfWriter;
use chrono::{DateTime, Offset, TimeZone};

/// View of a writer's Info dictionary.
///
/// Reading never creates the dictionary; the first successful write does.
/// Every value must be a PDFDocEncoded string; anything else is rejected
/// before the dictionary is touched.
pub struct Info<'a> {
    writer: &'a mut PdfWriter,
}

impl<'a> Info<'a> {
    pub(crate) fn new(writer: &'a mut PdfWriter) -> Self {
        Self { writer }
    }

    /// Store `value` under `key`.
    pub fn set(&mut self, key: &str, value: Object) -> Result<()> {
        let key = Name::checked(key)?;
        match value {
            Object::String(s) if s.is_doc_encoded() => {
                self.writer.info_dict_mut()?.set(key, s);
                Ok(())
            }
            other => Err(Error::wrong_type("PdfDocEncoded String", other.type_name())),
        }
    }

    /// Store `text` as a PDFDocEncoded string.
    pub fn set_text(&mut self, key: &str, text: &str) -> Result<()> {
        self.set(key, Object::String(PdfString::doc_encoded(text)))
    }

    pub fn get(&self, key: &str) -> Option<&PdfString> {
        self.writer.info_dict()?.get(key).and_then(|v| v.as_string())
    }

    pub fn len(&self) -> usize {
        self.writer.info_dict().map_or(0, Dictionary::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn title(&mut self, title: &str) -> Result<()> {
        self.set_text("Title", title)
    }

    pub fn author(&mut self, author: &str) -> Result<()> {
        self.set_text("Author", author)
    }

    pub fn subject(&mut self, subject: &str) -> Result<()> {
        self.set_text("Subject", subject)
    }

    pub fn keywords(&mut self, keywords: &str) -> Result<()> {
        self.set_text("Keywords", keywords)
    }

    pub fn creator(&mut self, creator: &str) -> Result<()> {
        self.set_text("Creator", creator)
    }

    pub fn producer(&mut self, producer: &str) -> Result<()> {
        self.set_text("Producer", producer)
    }

    pub fn set_creation_date<Tz: TimeZone>(&mut self, date: &DateTime<Tz>) -> Result<()> {
        self.set_text("CreationDate", &pdf_date(date))
    }

    pub fn set_mod_date<Tz: TimeZone>(&mut self, date: &DateTime<Tz>) -> Result<()> {
        self.set_text("ModDate", &pdf_date(date))
    }
}

/// Format a date as `D:YYYYMMDDHHmmSS+HH'mm'` (Section 7.9.4).
pub fn pdf_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    let offset_secs = date.offset().fix().local_minus_utc();
    let sign = if offset_secs < 0 { '-' } else { '+' };
    let offset_mins = offset_secs.abs() / 60;
    format!(
        "D:{}{}{:02}'{:02}'",
        date.naive_local().format("%Y%m%d%H%M%S"),
        sign,
        offset_mins / 60,
        offset_mins % 60
    )
}

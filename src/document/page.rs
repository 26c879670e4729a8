//! Pages and their resources.
//!
//! PDF Spec: ISO 32000-1:2008, Section 7.7.3.3 - Page Objects

use crate::content::ContentStreamBuilder;
use crate::error::{Error, Result};
use crate::object::{Dictionary, Name, Object, ObjectRef, Rectangle, Stream};
use crate::writer::PdfWriter;

/// Standard page sizes in points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PageSize {
    /// US Letter (8.5" x 11")
    #[default]
    Letter,
    /// A4 (210mm x 297mm)
    A4,
    /// US Legal (8.5" x 14")
    Legal,
    /// Custom width and height
    Custom(f64, f64),
}

impl PageSize {
    /// (width, height) in points.
    pub fn dimensions(&self) -> (f64, f64) {
        match self {
            PageSize::Letter => (612.0, 792.0),
            PageSize::A4 => (595.0, 842.0),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::Custom(w, h) => (*w, *h),
        }
    }

    /// The `/MediaBox` rectangle.
    pub fn media_box(&self) -> Result<Rectangle> {
        let (width, height) = self.dimensions();
        if width <= 0.0 || height <= 0.0 {
            return Err(Error::InvalidArgument(format!(
                "page size must be positive, got {} x {}",
                width, height
            )));
        }
        Rectangle::from_size(width, height)
    }
}

/// The initial page dictionary, before it is linked into the page tree.
pub(crate) fn page_dictionary(size: PageSize, parent: ObjectRef) -> Result<Dictionary> {
    let resources = Dictionary::new().with(
        "ProcSet",
        vec![Object::Name(Name::new("PDF")), Object::Name(Name::new("Text"))],
    );
    Ok(Dictionary::new()
        .with("Type", Name::new("Page"))
        .with("Parent", parent)
        .with("MediaBox", size.media_box()?)
        .with("Resources", resources))
}

/// A page being built.
///
/// Borrows the writer so that streams and fonts it registers land in the
/// same document.
pub struct PageBuilder<'a> {
    writer: &'a mut PdfWriter,
    page: ObjectRef,
}

impl<'a> PageBuilder<'a> {
    pub(crate) fn new(writer: &'a mut PdfWriter, page: ObjectRef) -> Self {
        Self { writer, page }
    }

    /// Reference to the page object, e.g. for outline destinations.
    pub fn reference(&self) -> ObjectRef {
        self.page
    }

    fn dict(&self) -> Result<&Dictionary> {
        self.writer
            .object(self.page)?
            .as_dict()
            .ok_or_else(|| Error::wrong_type("Dictionary", "Page"))
    }

    fn dict_mut(&mut self) -> Result<&mut Dictionary> {
        self.writer.dict_mut(self.page)
    }

    /// Register `stream` and make it the page's `/Contents`.
    pub fn set_contents(&mut self, stream: Stream) -> Result<ObjectRef> {
        let contents = self.writer.create_indirect(stream);
        self.dict_mut()?.set("Contents", contents);
        Ok(contents)
    }

    /// Build `content` into a stream (compressed if configured) and set it.
    pub fn set_content(&mut self, content: &ContentStreamBuilder) -> Result<ObjectRef> {
        let stream = content.into_stream(self.writer.config().compress)?;
        self.set_contents(stream)
    }

    pub fn set_media_box(&mut self, media_box: Rectangle) -> Result<()> {
        self.dict_mut()?.set("MediaBox", media_box);
        Ok(())
    }

    /// Resource name already assigned to `font`, if any.
    pub fn font_name(&self, font: ObjectRef) -> Result<Option<Name>> {
        Ok(font_resources(self.dict()?)
            .and_then(|fonts| find_font(fonts, font))
            .cloned())
    }

    /// Make `font` available to the page's content and return its
    /// resource name.
    ///
    /// Adding the same font again returns the name it already has.
    pub fn add_font(&mut self, font: ObjectRef) -> Result<Name> {
        self.writer.object(font)?;

        let page = self.dict_mut()?;
        if !matches!(page.get("Resources"), Some(Object::Dictionary(_))) {
            page.set("Resources", Dictionary::new());
        }
        let resources = page
            .get_mut("Resources")
            .and_then(|r| r.as_dict_mut())
            .ok_or_else(|| Error::wrong_type("Dictionary", "Resources"))?;
        if !matches!(resources.get("Font"), Some(Object::Dictionary(_))) {
            resources.set("Font", Dictionary::new());
        }
        let fonts = resources
            .get_mut("Font")
            .and_then(|f| f.as_dict_mut())
            .ok_or_else(|| Error::wrong_type("Dictionary", "Font resources"))?;

        if let Some(name) = find_font(fonts, font) {
            return Ok(name.clone());
        }

        let mut n = fonts.len() + 1;
        while fonts.contains_key(&format!("F{}", n)) {
            n += 1;
        }
        let name = Name::new(format!("F{}", n));
        fonts.set(name.clone(), font);
        log::debug!("Page {}: font {} as {}", self.page, font, name);
        Ok(name)
    }
}

fn font_resources(page: &Dictionary) -> Option<&Dictionary> {
    page.get("Resources")
        .and_then(|r| r.as_dict())
        .and_then(|r| r.get("Font"))
        .and_then(|f| f.as_dict())
}

fn find_font(fonts: &Dictionary, font: ObjectRef) -> Option<&Name> {
    fonts
        .iter()
        .find(|(_, value)| value.as_reference() == Some(font))
        .map(|(name, _)| name)
}

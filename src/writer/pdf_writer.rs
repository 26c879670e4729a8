//! PDF document writer.
//!
//! Owns every indirect object of one document and writes the complete
//! file: header, body, xref table, and trailer.

use super::counting::CountingWriter;
use super::object_serializer::ObjectSerializer;
use crate::config::WriterConfig;
use crate::document::page::page_dictionary;
use crate::document::{Info, Outline, OutlineId, OutlineItem, PageBuilder, PageSize};
use crate::error::{Error, Result};
use crate::fonts::Type1Font;
use crate::object::{Dictionary, IndirectObject, Name, Object, ObjectRef};
use indexmap::IndexMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Registry of indirect objects plus the document structure built on it.
///
/// Object numbers are issued per writer, starting at 1 with the catalog,
/// and objects are written in the order they were created.
#[derive(Debug)]
pub struct PdfWriter {
    config: WriterConfig,
    objects: Vec<IndirectObject>,
    /// Object ID counter
    next_obj_id: u32,
    catalog: ObjectRef,
    pages: Option<ObjectRef>,
    info: Option<ObjectRef>,
    outline: Option<Outline>,
    /// Font resources used (name -> font dictionary)
    fonts: IndexMap<String, ObjectRef>,
}

impl PdfWriter {
    /// Create a new PDF writer with default config.
    pub fn new() -> Self {
        Self::with_config(WriterConfig::default())
    }

    /// Create a PDF writer with custom config.
    pub fn with_config(config: WriterConfig) -> Self {
        let mut writer = Self {
            config,
            objects: Vec::new(),
            next_obj_id: 1,
            catalog: ObjectRef::new(0, 0),
            pages: None,
            info: None,
            outline: None,
            fonts: IndexMap::new(),
        };
        let catalog = Dictionary::new().with("Type", Name::new("Catalog"));
        writer.catalog = writer.create_indirect(catalog);
        writer
    }

    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// The document catalog, referenced from the trailer's `/Root`.
    pub fn catalog(&self) -> ObjectRef {
        self.catalog
    }

    /// Allocate a new object ID.
    fn alloc_obj_id(&mut self) -> u32 {
        let id = self.next_obj_id;
        self.next_obj_id += 1;
        id
    }

    /// Register `object` under a fresh object number.
    ///
    /// The reference is valid immediately and can be stored in other
    /// objects before this one is complete.
    pub fn create_indirect(&mut self, object: impl Into<Object>) -> ObjectRef {
        let object = object.into();
        let reference = ObjectRef::new(self.alloc_obj_id(), 0);
        log::debug!("Registered {} obj ({})", reference.id, object.type_name());
        self.objects.push(IndirectObject::new(reference, object));
        reference
    }

    /// Registered object behind `reference`.
    pub fn object(&self, reference: ObjectRef) -> Result<&Object> {
        lookup(&self.objects, reference).map(|o| o.object())
    }

    /// Mutable access to a registered object.
    pub fn object_mut(&mut self, reference: ObjectRef) -> Result<&mut Object> {
        lookup_mut(&mut self.objects, reference).map(|o| o.object_mut())
    }

    /// Mutable access to a registered dictionary (or a stream's dictionary).
    pub fn dict_mut(&mut self, reference: ObjectRef) -> Result<&mut Dictionary> {
        dict_in(&mut self.objects, reference)
    }

    /// All registered objects in creation order.
    pub fn objects(&self) -> impl Iterator<Item = &IndirectObject> {
        self.objects.iter()
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// The page tree root, created on first use and linked from the catalog.
    fn pages_root(&mut self) -> Result<ObjectRef> {
        if let Some(pages) = self.pages {
            return Ok(pages);
        }
        let pages = self.create_indirect(ObjectSerializer::dict(vec![
            ("Type", ObjectSerializer::name("Pages")),
            ("Kids", ObjectSerializer::array(Vec::new())),
            ("Count", ObjectSerializer::integer(0)),
        ]));
        let catalog = self.catalog;
        self.dict_mut(catalog)?.set("Pages", pages);
        self.pages = Some(pages);
        Ok(pages)
    }

    /// Add a page and return a builder for its contents and resources.
    pub fn add_page(&mut self, size: PageSize) -> Result<PageBuilder<'_>> {
        size.media_box()?;
        let pages = self.pages_root()?;
        let page = self.create_indirect(page_dictionary(size, pages)?);

        let pages_dict = self.dict_mut(pages)?;
        let count = match pages_dict.get_mut("Kids") {
            Some(Object::Array(kids)) => {
                kids.push(Object::Reference(page));
                kids.len()
            }
            _ => return Err(Error::wrong_type("Array", "Kids")),
        };
        pages_dict.set("Count", count);
        log::debug!("Added page {} as {}", count, page);
        Ok(PageBuilder::new(self, page))
    }

    /// Reopen a page created by [`PdfWriter::add_page`].
    pub fn page(&mut self, page: ObjectRef) -> Result<PageBuilder<'_>> {
        let is_page = self
            .object(page)?
            .as_dict()
            .and_then(|d| d.get("Type"))
            .and_then(|t| t.as_name())
            .is_some_and(|t| t.as_str() == "Page");
        if !is_page {
            let found = self.object(page)?.type_name();
            return Err(Error::wrong_type("Page", found));
        }
        Ok(PageBuilder::new(self, page))
    }

    pub fn page_count(&self) -> usize {
        self.pages
            .and_then(|pages| self.object(pages).ok())
            .and_then(|pages| pages.as_dict())
            .and_then(|pages| pages.get("Kids"))
            .and_then(|kids| kids.as_array())
            .map_or(0, |kids| kids.len())
    }

    /// Register a Type 1 font and its descriptor, once per font name.
    ///
    /// Adding the same font again returns the first reference.
    pub fn add_font(&mut self, font: &Type1Font) -> Result<ObjectRef> {
        if let Some(font_ref) = self.fonts.get(font.name()) {
            return Ok(*font_ref);
        }

        let descriptor = self.create_indirect(font.descriptor().to_object());
        let font_ref = self.create_indirect(font.font_dictionary(descriptor)?);
        self.fonts.insert(font.name().to_string(), font_ref);
        log::debug!("Registered font {} as {}", font.name(), font_ref);
        Ok(font_ref)
    }

    /// The Info dictionary. It is registered on the first metadata write,
    /// so reading through this view leaves the document unchanged.
    pub fn info(&mut self) -> Info<'_> {
        Info::new(self)
    }

    pub(crate) fn info_dict(&self) -> Option<&Dictionary> {
        let info = self.info?;
        lookup(&self.objects, info).ok()?.object().as_dict()
    }

    pub(crate) fn info_dict_mut(&mut self) -> Result<&mut Dictionary> {
        let info = match self.info {
            Some(info) => info,
            None => {
                let info = self.create_indirect(Dictionary::new());
                self.info = Some(info);
                log::debug!("Created Info dictionary {}", info);
                info
            }
        };
        self.dict_mut(info)
    }

    /// Whether an Info dictionary will be written.
    pub fn has_info(&self) -> bool {
        self.info.is_some()
    }

    /// The outline tree, if any item has been added.
    pub fn outline(&self) -> Option<&Outline> {
        self.outline.as_ref()
    }

    /// Append `item` under `parent`, or at the top level when `parent` is
    /// `None`. The outline root is created on first use.
    pub fn add_outline_item(
        &mut self,
        parent: Option<OutlineId>,
        item: &OutlineItem,
    ) -> Result<OutlineId> {
        match (parent, &self.outline) {
            (Some(parent), Some(outline)) => outline.check(parent)?,
            (Some(_), None) => {
                return Err(Error::InvalidArgument(
                    "outline parent given before any outline item exists".to_string(),
                ))
            }
            (None, _) => {}
        }
        self.object(item.destination.page)?;
        let dict = item.to_dict()?;

        if self.outline.is_none() {
            let root = self.create_indirect(ObjectSerializer::dict(vec![(
                "Type",
                ObjectSerializer::name("Outlines"),
            )]));
            let catalog = self.dict_mut(self.catalog)?;
            catalog.set("Outlines", root);
            catalog.set("PageMode", Name::new("UseOutlines"));
            self.outline = Some(Outline::new(root));
        }

        let reference = self.create_indirect(dict);
        let outline = self
            .outline
            .as_mut()
            .ok_or_else(|| Error::InvalidArgument("outline root missing".to_string()))?;
        let parent = parent.unwrap_or_else(|| outline.root());
        let id = outline.append(parent, reference)?;

        for node in outline.touched_by_append(id) {
            if let Some(node_ref) = outline.reference(node) {
                outline.apply_links(node, dict_in(&mut self.objects, node_ref)?);
            }
        }
        log::debug!("Added outline item {} '{}'", reference, item.title);
        Ok(id)
    }

    /// Stamp /Producer and /Creator into Info when it exists or stamping
    /// is forced. Values already present are kept.
    fn stamp_producer(&mut self) -> Result<()> {
        if self.info.is_none() && !self.config.stamp_producer {
            return Ok(());
        }
        let producer = self.config.producer.clone();
        let creator = self.config.creator.clone();
        let mut info = self.info();
        for (key, value) in [("Producer", producer), ("Creator", creator)] {
            if let Some(value) = value {
                if info.get(key).is_none() {
                    info.set_text(key, &value)?;
                }
            }
        }
        Ok(())
    }

    /// Write the complete document to `sink` and return the number of
    /// bytes written.
    ///
    /// Offsets are recorded afresh on every call, so writing again after a
    /// failed sink produces a consistent file.
    pub fn write<W: Write>(&mut self, sink: W) -> Result<u64> {
        self.stamp_producer()?;
        log::debug!("Writing PDF {} with {} objects", self.config.version, self.objects.len());

        let serializer = ObjectSerializer::new();
        let mut out = CountingWriter::new(sink);

        // PDF Header
        writeln!(out, "%PDF-{}", self.config.version)?;
        // Binary marker (recommended for binary content)
        out.write_all(b"%\xE2\xE3\xCF\xD3\n")?;

        for object in &mut self.objects {
            let offset = out.position();
            object.set_offset(offset);
            log::trace!("{} obj at offset {}", object.reference().id, offset);
            out.write_all(&serializer.serialize_indirect(object))?;
        }
        out.flush()?;

        // Write xref table
        let xref_start = out.position();
        let mut entries: Vec<(u32, u16, u64)> = self
            .objects
            .iter()
            .map(|o| {
                let r = o.reference();
                (r.id, r.gen, o.offset().unwrap_or(0))
            })
            .collect();
        entries.sort_by_key(|(id, _, _)| *id);

        writeln!(out, "xref")?;
        writeln!(out, "0 {}", entries.len() + 1)?;
        // Object 0 is always free
        writeln!(out, "0000000000 65535 f ")?;
        for (_, gen, offset) in &entries {
            writeln!(out, "{:010} {:05} n ", offset, gen)?;
        }

        // Write trailer
        let mut trailer = ObjectSerializer::dict(vec![
            ("Size", ObjectSerializer::integer(entries.len() as i64 + 1)),
            ("Root", Object::Reference(self.catalog)),
        ]);
        if let Some(info) = self.info {
            trailer.set("Info", info);
        }
        serializer.write_trailer(&mut out, &trailer)?;
        writeln!(out, "startxref")?;
        writeln!(out, "{}", xref_start)?;
        write!(out, "%%EOF")?;
        out.flush()?;

        let total = out.position();
        log::debug!("Wrote {} bytes, startxref {}", total, xref_start);
        Ok(total)
    }

    /// Build the complete PDF document.
    pub fn finish(mut self) -> Result<Vec<u8>> {
        let mut output = Vec::new();
        self.write(&mut output)?;
        Ok(output)
    }

    /// Save the PDF to a file.
    pub fn save(mut self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path)?;
        self.write(BufWriter::new(file))?;
        Ok(())
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn lookup(objects: &[IndirectObject], reference: ObjectRef) -> Result<&IndirectObject> {
    let index = (reference.id as usize).wrapping_sub(1);
    objects
        .get(index)
        .filter(|o| o.reference() == reference)
        .ok_or(Error::ObjectNotFound(reference.id, reference.gen))
}

fn lookup_mut(objects: &mut [IndirectObject], reference: ObjectRef) -> Result<&mut IndirectObject> {
    let index = (reference.id as usize).wrapping_sub(1);
    objects
        .get_mut(index)
        .filter(|o| o.reference() == reference)
        .ok_or(Error::ObjectNotFound(reference.id, reference.gen))
}

fn dict_in(objects: &mut [IndirectObject], reference: ObjectRef) -> Result<&mut Dictionary> {
    let object = lookup_mut(objects, reference)?.object_mut();
    let found = object.type_name();
    object
        .as_dict_mut()
        .ok_or_else(|| Error::wrong_type("Dictionary", found))
}

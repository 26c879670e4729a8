//! Stream objects.
//!
//! PDF Spec: ISO 32000-1:2008, Section 7.3.8 - Stream Objects

use super::{Dictionary, Name, Object, PdfObject};
use crate::error::Result;
use crate::filters::StreamFilter;
use bytes::Bytes;
use std::io::{self, Write};

/// A dictionary plus a byte payload.
///
/// `/Length`, `/Filter` and `/DecodeParms` are derived when the stream is
/// written, so they always agree with the payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Stream {
    dict: Dictionary,
    data: Bytes,
    /// Applied filters in decode order (the most recently applied first)
    filters: Vec<(Name, Option<Dictionary>)>,
}

impl Stream {
    /// Create a stream with an empty dictionary.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self::with_dict(Dictionary::new(), data)
    }

    /// Create a stream with caller-supplied dictionary entries.
    pub fn with_dict(dict: Dictionary, data: impl Into<Bytes>) -> Self {
        Self {
            dict,
            data: data.into(),
            filters: Vec::new(),
        }
    }

    pub fn dict(&self) -> &Dictionary {
        &self.dict
    }

    pub fn dict_mut(&mut self) -> &mut Dictionary {
        &mut self.dict
    }

    /// The (possibly filtered) payload.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Payload length in bytes, as written to `/Length`.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Names of the applied filters, in decode order.
    pub fn filter_names(&self) -> impl Iterator<Item = &Name> {
        self.filters.iter().map(|(name, _)| name)
    }

    /// Encode the payload with `filter` and record it for decoding.
    ///
    /// On error the stream is left unchanged.
    pub fn apply_filter(&mut self, filter: &dyn StreamFilter) -> Result<()> {
        let encoded = filter.encode(&self.data)?;
        log::trace!(
            "{} filter: {} -> {} bytes",
            filter.name(),
            self.data.len(),
            encoded.len()
        );
        self.data = Bytes::from(encoded);
        self.filters
            .insert(0, (Name::new(filter.name()), filter.decode_params()));
        Ok(())
    }

    /// Builder form of [`Stream::apply_filter`].
    pub fn filtered(mut self, filter: &dyn StreamFilter) -> Result<Self> {
        self.apply_filter(filter)?;
        Ok(self)
    }

    /// The dictionary as written, including derived entries.
    pub fn effective_dict(&self) -> Dictionary {
        let mut dict = self.dict.clone();
        dict.set("Length", self.data.len());

        match self.filters.as_slice() {
            [] => {}
            [(name, params)] => {
                dict.set("Filter", name.clone());
                if let Some(params) = params {
                    dict.set("DecodeParms", params.clone());
                }
            }
            filters => {
                let names: Vec<Object> = filters
                    .iter()
                    .map(|(name, _)| Object::Name(name.clone()))
                    .collect();
                dict.set("Filter", names);
                if filters.iter().any(|(_, params)| params.is_some()) {
                    let params: Vec<Object> = filters
                        .iter()
                        .map(|(_, params)| match params {
                            Some(p) => Object::Dictionary(p.clone()),
                            None => Object::Null,
                        })
                        .collect();
                    dict.set("DecodeParms", params);
                }
            }
        }
        dict
    }
}

impl PdfObject for Stream {
    fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> io::Result<()> {
        self.effective_dict().write_to(w)?;
        w.write_all(b"\nstream\n")?;
        w.write_all(&self.data)?;
        w.write_all(b"\nendstream")
    }
}

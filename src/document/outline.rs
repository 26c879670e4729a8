//! Document outline (bookmarks).
//!
//! Outline items are stored in one flat arena and address each other by
//! [`OutlineId`]. The link entries of a node (`/Parent`, `/Prev`, `/Next`,
//! `/First`, `/Last`, `/Count`) are derived from the arena, so they stay
//! consistent whatever order items are added in.
//!
//! PDF Spec: ISO 32000-1:2008, Section 12.3.3 - Document Outline

use crate::error::{Error, Result};
use crate::object::{Dictionary, Name, Object, ObjectRef, PdfString};
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of per-tree tags, so ids from one outline are refused by another.
static NEXT_TREE: AtomicU64 = AtomicU64::new(1);

/// Points added above the target y so it does not sit flush with the
/// top of the viewer window.
pub const OUTLINE_TOP_OFFSET: f64 = 10.0;

/// Page fit mode for destinations.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[allow(clippy::upper_case_acronyms)]
pub enum FitMode {
    /// Fit the entire page in the window
    Fit,
    /// Fit the page width, with top at specified position
    FitH(Option<f64>),
    /// Display at specific position with zoom
    #[default]
    XYZ,
}

/// Where an outline item jumps to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Destination {
    /// Target page
    pub page: ObjectRef,
    /// How the page is fitted
    pub fit: FitMode,
    /// Left coordinate for XYZ (None = unchanged)
    pub left: Option<f64>,
    /// Top coordinate for XYZ (None = unchanged)
    pub top: Option<f64>,
    /// Zoom factor for XYZ (None = unchanged)
    pub zoom: Option<f64>,
}

impl Destination {
    /// Jump to vertical position `y` on `page`, slightly above the target.
    pub fn new(page: ObjectRef, y: f64) -> Self {
        Self {
            page,
            fit: FitMode::XYZ,
            left: None,
            top: Some(y + OUTLINE_TOP_OFFSET),
            zoom: None,
        }
    }

    /// Show the whole page.
    pub fn fit(page: ObjectRef) -> Self {
        Self {
            page,
            fit: FitMode::Fit,
            left: None,
            top: None,
            zoom: None,
        }
    }

    /// Set a zoom factor (XYZ only).
    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = Some(zoom);
        self
    }

    /// The `/Dest` array.
    pub fn to_object(&self) -> Result<Object> {
        let optional = |v: Option<f64>| match v {
            Some(v) => Object::real(v),
            None => Ok(Object::Null),
        };

        let mut arr = vec![Object::Reference(self.page)];
        match self.fit {
            FitMode::Fit => arr.push(Object::Name(Name::new("Fit"))),
            FitMode::FitH(top) => {
                arr.push(Object::Name(Name::new("FitH")));
                arr.push(optional(top)?);
            }
            FitMode::XYZ => {
                arr.push(Object::Name(Name::new("XYZ")));
                arr.push(optional(self.left)?);
                arr.push(optional(self.top)?);
                arr.push(optional(self.zoom)?);
            }
        }
        Ok(Object::Array(arr))
    }
}

/// Text style for outline items.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OutlineStyle {
    /// Display in italic
    pub italic: bool,
    /// Display in bold
    pub bold: bool,
    /// Text color (RGB, 0.0-1.0)
    pub color: Option<(f64, f64, f64)>,
}

impl OutlineStyle {
    /// Create a new default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set bold style.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Set italic style.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Set text color.
    pub fn color(mut self, r: f64, g: f64, b: f64) -> Self {
        self.color = Some((r, g, b));
        self
    }

    /// Get the flags value for this style (PDF spec Section 12.3.3).
    pub fn flags(&self) -> i64 {
        let mut flags = 0i64;
        if self.italic {
            flags |= 1;
        }
        if self.bold {
            flags |= 2;
        }
        flags
    }
}

/// A single outline item (bookmark).
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineItem {
    /// Display title
    pub title: String,
    /// Destination when clicked
    pub destination: Destination,
    /// Display style
    pub style: OutlineStyle,
}

impl OutlineItem {
    /// Create an item jumping to `y` on `page`.
    pub fn new(title: impl Into<String>, page: ObjectRef, y: f64) -> Self {
        Self::with_destination(title, Destination::new(page, y))
    }

    pub fn with_destination(title: impl Into<String>, destination: Destination) -> Self {
        Self {
            title: title.into(),
            destination,
            style: OutlineStyle::default(),
        }
    }

    pub fn with_style(mut self, style: OutlineStyle) -> Self {
        self.style = style;
        self
    }

    /// The item's own entries; link entries are added by the outline.
    pub(crate) fn to_dict(&self) -> Result<Dictionary> {
        let mut dict = Dictionary::new();
        dict.set("Title", PdfString::doc_encoded(self.title.as_str()));
        dict.set("Dest", self.destination.to_object()?);

        let flags = self.style.flags();
        if flags != 0 {
            dict.set("F", flags);
        }
        if let Some((r, g, b)) = self.style.color {
            dict.set(
                "C",
                vec![Object::real(r)?, Object::real(g)?, Object::real(b)?],
            );
        }
        Ok(dict)
    }
}

/// Handle to a node of an [`Outline`]. The root is always present.
///
/// An id is only valid for the outline that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutlineId {
    tree: u64,
    index: usize,
}

#[derive(Debug, Clone)]
struct OutlineNode {
    reference: ObjectRef,
    parent: Option<OutlineId>,
    first: Option<OutlineId>,
    last: Option<OutlineId>,
    prev: Option<OutlineId>,
    next: Option<OutlineId>,
    children: usize,
}

impl OutlineNode {
    fn new(reference: ObjectRef, parent: Option<OutlineId>) -> Self {
        Self {
            reference,
            parent,
            first: None,
            last: None,
            prev: None,
            next: None,
            children: 0,
        }
    }
}

/// The outline tree: the `/Outlines` root plus every item.
#[derive(Debug, Clone)]
pub struct Outline {
    tree: u64,
    nodes: Vec<OutlineNode>,
}

impl Outline {
    pub(crate) fn new(root: ObjectRef) -> Self {
        Self {
            tree: NEXT_TREE.fetch_add(1, Ordering::Relaxed),
            nodes: vec![OutlineNode::new(root, None)],
        }
    }

    /// The `/Outlines` dictionary node.
    pub fn root(&self) -> OutlineId {
        self.id(0)
    }

    /// Number of items, not counting the root.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: OutlineId) -> bool {
        self.node(id).is_some()
    }

    fn id(&self, index: usize) -> OutlineId {
        OutlineId {
            tree: self.tree,
            index,
        }
    }

    fn node(&self, id: OutlineId) -> Option<&OutlineNode> {
        if id.tree == self.tree {
            self.nodes.get(id.index)
        } else {
            None
        }
    }

    pub fn reference(&self, id: OutlineId) -> Option<ObjectRef> {
        self.node(id).map(|n| n.reference)
    }

    pub fn parent(&self, id: OutlineId) -> Option<OutlineId> {
        self.node(id).and_then(|n| n.parent)
    }

    pub fn first(&self, id: OutlineId) -> Option<OutlineId> {
        self.node(id).and_then(|n| n.first)
    }

    pub fn last(&self, id: OutlineId) -> Option<OutlineId> {
        self.node(id).and_then(|n| n.last)
    }

    pub fn prev(&self, id: OutlineId) -> Option<OutlineId> {
        self.node(id).and_then(|n| n.prev)
    }

    pub fn next(&self, id: OutlineId) -> Option<OutlineId> {
        self.node(id).and_then(|n| n.next)
    }

    /// Number of direct children.
    pub fn child_count(&self, id: OutlineId) -> usize {
        self.node(id).map(|n| n.children).unwrap_or(0)
    }

    pub(crate) fn check(&self, id: OutlineId) -> Result<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(Error::InvalidArgument(format!(
                "outline node {} does not belong to this outline",
                id.index
            )))
        }
    }

    /// Append a node as the last child of `parent`.
    pub(crate) fn append(&mut self, parent: OutlineId, reference: ObjectRef) -> Result<OutlineId> {
        self.check(parent)?;
        let id = self.id(self.nodes.len());
        let mut node = OutlineNode::new(reference, Some(parent));

        let parent_node = &mut self.nodes[parent.index];
        node.prev = parent_node.last;
        if parent_node.first.is_none() {
            parent_node.first = Some(id);
        }
        parent_node.last = Some(id);
        parent_node.children += 1;

        if let Some(prev) = node.prev {
            self.nodes[prev.index].next = Some(id);
        }
        self.nodes.push(node);
        Ok(id)
    }

    /// Nodes whose link entries change when `id` is appended.
    pub(crate) fn touched_by_append(&self, id: OutlineId) -> Vec<OutlineId> {
        let mut touched = vec![id];
        touched.extend(self.parent(id));
        touched.extend(self.prev(id));
        touched
    }

    /// Link entries of a node.
    ///
    /// The root's `/Count` is positive and items' negative (closed), with
    /// the number of direct children as magnitude. Childless nodes get no
    /// `/First`, `/Last` or `/Count`.
    pub(crate) fn link_entries(&self, id: OutlineId) -> Vec<(&'static str, Object)> {
        let node = &self.nodes[id.index];
        let reference = |id: OutlineId| Object::Reference(self.nodes[id.index].reference);
        let mut entries = Vec::new();

        if let Some(parent) = node.parent {
            entries.push(("Parent", reference(parent)));
        }
        if let Some(prev) = node.prev {
            entries.push(("Prev", reference(prev)));
        }
        if let Some(next) = node.next {
            entries.push(("Next", reference(next)));
        }
        if let (Some(first), Some(last)) = (node.first, node.last) {
            entries.push(("First", reference(first)));
            entries.push(("Last", reference(last)));
            let count = node.children as i64;
            let count = if node.parent.is_none() { count } else { -count };
            entries.push(("Count", Object::Integer(count)));
        }
        entries
    }

    /// Replace the link entries of `id` in `dict`.
    pub(crate) fn apply_links(&self, id: OutlineId, dict: &mut Dictionary) {
        for key in ["Parent", "Prev", "Next", "First", "Last", "Count"] {
            dict.remove(key);
        }
        for (key, value) in self.link_entries(id) {
            dict.set(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(id: u32) -> ObjectRef {
        ObjectRef::new(id, 0)
    }

    #[test]
    fn test_destination_offset() {
        let dest = Destination::new(r(3), 700.0);
        assert_eq!(dest.top, Some(710.0));
        assert_eq!(
            dest.to_object().unwrap(),
            Object::Array(vec![
                Object::Reference(r(3)),
                Object::Name(Name::new("XYZ")),
                Object::Null,
                Object::real(710.0).unwrap(),
                Object::Null,
            ])
        );
    }

    #[test]
    fn test_destination_fit() {
        let dest = Destination::fit(r(3)).to_object().unwrap();
        assert_eq!(dest.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_outline_style_flags() {
        assert_eq!(OutlineStyle::new().flags(), 0);
        assert_eq!(OutlineStyle::new().italic().flags(), 1);
        assert_eq!(OutlineStyle::new().bold().flags(), 2);
        assert_eq!(OutlineStyle::new().bold().italic().flags(), 3);
    }

    #[test]
    fn test_item_dict() {
        let item = OutlineItem::new("Chapter 1", r(3), 500.0)
            .with_style(OutlineStyle::new().bold().color(1.0, 0.0, 0.0));
        let dict = item.to_dict().unwrap();
        assert_eq!(
            dict.get("Title").and_then(|t| t.as_string()),
            Some(&PdfString::doc_encoded("Chapter 1"))
        );
        assert_eq!(dict.get("F"), Some(&Object::Integer(2)));
        assert!(dict.get("C").and_then(|c| c.as_array()).is_some());
    }

    #[test]
    fn test_item_rejects_non_finite_destination() {
        let item = OutlineItem::new("Bad", r(3), f64::NAN);
        assert!(item.to_dict().is_err());
    }

    #[test]
    fn test_sibling_threading() {
        let mut outline = Outline::new(r(10));
        let root = outline.root();
        let a = outline.append(root, r(11)).unwrap();
        let b = outline.append(root, r(12)).unwrap();
        let c = outline.append(root, r(13)).unwrap();

        assert_eq!(outline.first(root), Some(a));
        assert_eq!(outline.last(root), Some(c));
        assert_eq!(outline.child_count(root), 3);
        assert_eq!(outline.next(a), Some(b));
        assert_eq!(outline.prev(b), Some(a));
        assert_eq!(outline.next(b), Some(c));
        assert_eq!(outline.prev(a), None);
        assert_eq!(outline.next(c), None);
        assert_eq!(outline.len(), 3);
    }

    #[test]
    fn test_count_sign_by_depth() {
        let mut outline = Outline::new(r(10));
        let root = outline.root();
        let a = outline.append(root, r(11)).unwrap();
        outline.append(a, r(12)).unwrap();
        outline.append(a, r(13)).unwrap();

        let root_entries = outline.link_entries(root);
        assert!(root_entries.contains(&("Count", Object::Integer(1))));
        let item_entries = outline.link_entries(a);
        assert!(item_entries.contains(&("Count", Object::Integer(-2))));
    }

    #[test]
    fn test_childless_node_has_no_child_links() {
        let mut outline = Outline::new(r(10));
        let leaf = outline.append(outline.root(), r(11)).unwrap();
        let keys: Vec<&str> = outline.link_entries(leaf).into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["Parent"]);
        assert!(!outline.link_entries(outline.root()).is_empty());
    }

    #[test]
    fn test_unknown_parent_rejected() {
        let mut outline = Outline::new(r(10));
        let stray = OutlineId {
            tree: outline.tree,
            index: 5,
        };
        assert!(outline.append(stray, r(11)).is_err());
        assert!(outline.is_empty());
    }

    #[test]
    fn test_id_from_other_outline_rejected() {
        let mut first = Outline::new(r(10));
        let mut second = Outline::new(r(20));
        let a = first.append(first.root(), r(11)).unwrap();
        second.append(second.root(), r(21)).unwrap();

        // Same index, different tree.
        assert!(!second.contains(a));
        assert!(second.reference(a).is_none());
        assert!(second.append(a, r(22)).is_err());
        assert!(second.append(first.root(), r(22)).is_err());
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn test_apply_links_replaces_stale_entries() {
        let mut outline = Outline::new(r(10));
        let root = outline.root();
        let a = outline.append(root, r(11)).unwrap();
        let mut dict = Dictionary::new();
        outline.apply_links(a, &mut dict);
        assert!(!dict.contains_key("Next"));

        outline.append(root, r(12)).unwrap();
        outline.apply_links(a, &mut dict);
        assert_eq!(dict.get("Next"), Some(&Object::Reference(r(12))));
    }
}

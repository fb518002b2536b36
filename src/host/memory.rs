//! In-memory reference host.
//!
//! Backs the test suite and the CLI preview. Models just enough of a
//! page-layout application: one active document with pages, page items,
//! name-keyed color tables, an application-level selection, and an undo
//! history with snapshot-rollback transactions.

use std::collections::HashMap;

use crate::color::{ColorSpace, ColorValue};
use crate::geometry::{Bounds, Transform};

use super::{
    ColorGroupId, ColorId, Host, Margins, PageId, ShapeId, ShapeKind, TextFrame,
};

/// US letter, portrait, in points - the host's default page size.
const DEFAULT_PAGE_BOUNDS: Bounds = Bounds::new(0.0, 0.0, 792.0, 612.0);

const DEFAULT_MARGINS: Margins = Margins {
    top: 36.0,
    left: 36.0,
    bottom: 36.0,
    right: 36.0,
    column_gutter: 12.0,
};

#[derive(Debug, Clone)]
struct Page {
    bounds: Bounds,
    margins: Margins,
    items: Vec<ShapeId>,
}

#[derive(Debug, Clone)]
enum ShapeData {
    Rectangle {
        bounds: Bounds,
        fill: ColorId,
        stroke_weight: f64,
    },
    Group {
        members: Vec<ShapeId>,
        bounds: Bounds,
    },
    TextFrame(TextFrame),
    Other {
        bounds: Bounds,
    },
}

#[derive(Debug, Clone)]
struct Shape {
    data: ShapeData,
    parent: Option<PageId>,
    transform: Transform,
}

/// A named color resource entry in the document color table.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorEntry {
    pub name: String,
    pub value: ColorValue,
    pub group: ColorGroupId,
}

/// An in-memory [`Host`] implementation.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    next_id: u64,
    open_documents: usize,
    selection: Vec<ShapeId>,
    pages: HashMap<PageId, Page>,
    page_order: Vec<PageId>,
    shapes: HashMap<ShapeId, Shape>,
    colors: Vec<(ColorId, ColorEntry)>,
    color_groups: Vec<(ColorGroupId, String)>,
    history: Vec<String>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Open a document; returns the id of its first page.
    pub fn create_document(&mut self) -> PageId {
        self.open_documents += 1;
        self.add_page()
    }

    /// Insert a bare shape for scenario setup (something a user drew or
    /// pasted before running the flag tools). `page: None` puts the shape on
    /// the pasteboard.
    pub fn insert_shape(
        &mut self,
        page: Option<PageId>,
        kind: ShapeKind,
        bounds: Bounds,
    ) -> ShapeId {
        let id = ShapeId(self.next_id());
        let data = match kind {
            ShapeKind::Group => ShapeData::Group { members: Vec::new(), bounds },
            // Fill is irrelevant for consumed shapes; a zero id marks "unset"
            ShapeKind::Rectangle => ShapeData::Rectangle {
                bounds,
                fill: ColorId(0),
                stroke_weight: 1.0,
            },
            ShapeKind::Other => ShapeData::Other { bounds },
        };
        self.shapes.insert(id, Shape { data, parent: page, transform: Transform::IDENTITY });
        if let Some(page) = page {
            if let Some(p) = self.pages.get_mut(&page) {
                p.items.push(id);
            }
        }
        id
    }

    // ----- inspection helpers for tests and the CLI -----

    /// Committed undo labels, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Number of entries in the document color table.
    pub fn color_count(&self) -> usize {
        self.colors.len()
    }

    pub fn color_entry(&self, color: ColorId) -> Option<&ColorEntry> {
        self.colors.iter().find(|(id, _)| *id == color).map(|(_, e)| e)
    }

    pub fn color_group_count(&self) -> usize {
        self.color_groups.len()
    }

    pub fn group_members(&self, shape: ShapeId) -> Option<&[ShapeId]> {
        match &self.shapes.get(&shape)?.data {
            ShapeData::Group { members, .. } => Some(members),
            _ => None,
        }
    }

    pub fn rectangle_fill(&self, shape: ShapeId) -> Option<ColorId> {
        match &self.shapes.get(&shape)?.data {
            ShapeData::Rectangle { fill, .. } => Some(*fill),
            _ => None,
        }
    }

    pub fn rectangle_stroke_weight(&self, shape: ShapeId) -> Option<f64> {
        match &self.shapes.get(&shape)?.data {
            ShapeData::Rectangle { stroke_weight, .. } => Some(*stroke_weight),
            _ => None,
        }
    }

    pub fn text_frame(&self, shape: ShapeId) -> Option<&TextFrame> {
        match &self.shapes.get(&shape)?.data {
            ShapeData::TextFrame(frame) => Some(frame),
            _ => None,
        }
    }

    pub fn shape_exists(&self, shape: ShapeId) -> bool {
        self.shapes.contains_key(&shape)
    }

    /// Top-level items on a page, in creation order.
    pub fn page_items(&self, page: PageId) -> &[ShapeId] {
        self.pages.get(&page).map_or(&[], |p| p.items.as_slice())
    }

    pub fn page_count(&self) -> usize {
        self.page_order.len()
    }

    fn detach_from_page(&mut self, shape: ShapeId) {
        if let Some(page) = self.shapes.get(&shape).and_then(|s| s.parent) {
            if let Some(p) = self.pages.get_mut(&page) {
                p.items.retain(|id| *id != shape);
            }
        }
    }

    fn shape(&self, shape: ShapeId) -> &Shape {
        &self.shapes[&shape]
    }
}

impl Host for MemoryHost {
    fn document_count(&self) -> usize {
        self.open_documents
    }

    fn selection(&self) -> Vec<ShapeId> {
        self.selection.clone()
    }

    fn set_selection(&mut self, shapes: &[ShapeId]) {
        self.selection = shapes.to_vec();
    }

    fn add_page(&mut self) -> PageId {
        let id = PageId(self.next_id());
        self.pages.insert(
            id,
            Page { bounds: DEFAULT_PAGE_BOUNDS, margins: DEFAULT_MARGINS, items: Vec::new() },
        );
        self.page_order.push(id);
        id
    }

    fn page_bounds(&self, page: PageId) -> Bounds {
        self.pages[&page].bounds
    }

    fn page_margins(&self, page: PageId) -> Margins {
        self.pages[&page].margins
    }

    fn shape_kind(&self, shape: ShapeId) -> ShapeKind {
        match self.shape(shape).data {
            ShapeData::Rectangle { .. } => ShapeKind::Rectangle,
            ShapeData::Group { .. } => ShapeKind::Group,
            _ => ShapeKind::Other,
        }
    }

    fn shape_bounds(&self, shape: ShapeId) -> Bounds {
        match &self.shape(shape).data {
            ShapeData::Rectangle { bounds, .. }
            | ShapeData::Group { bounds, .. }
            | ShapeData::Other { bounds } => *bounds,
            ShapeData::TextFrame(frame) => frame.bounds,
        }
    }

    fn shape_transform(&self, shape: ShapeId) -> Transform {
        self.shape(shape).transform
    }

    fn set_shape_transform(&mut self, shape: ShapeId, transform: Transform) {
        if let Some(s) = self.shapes.get_mut(&shape) {
            s.transform = transform;
        }
    }

    fn parent_page(&self, shape: ShapeId) -> Option<PageId> {
        self.shape(shape).parent
    }

    fn remove_shape(&mut self, shape: ShapeId) {
        self.detach_from_page(shape);
        if let Some(removed) = self.shapes.remove(&shape) {
            if let ShapeData::Group { members, .. } = removed.data {
                for member in members {
                    self.remove_shape(member);
                }
            }
        }
        // The host never leaves a dangling selection reference
        self.selection.retain(|id| *id != shape);
    }

    fn add_rectangle(
        &mut self,
        page: PageId,
        bounds: Bounds,
        fill: ColorId,
        stroke_weight: f64,
    ) -> ShapeId {
        let id = ShapeId(self.next_id());
        self.shapes.insert(
            id,
            Shape {
                data: ShapeData::Rectangle { bounds, fill, stroke_weight },
                parent: Some(page),
                transform: Transform::IDENTITY,
            },
        );
        if let Some(p) = self.pages.get_mut(&page) {
            p.items.push(id);
        }
        id
    }

    fn group(&mut self, page: PageId, members: &[ShapeId]) -> ShapeId {
        let bounds = members
            .iter()
            .map(|id| self.shape_bounds(*id))
            .reduce(Bounds::union)
            .unwrap_or(Bounds::new(0.0, 0.0, 0.0, 0.0));

        // Members move from the page item list into the group
        for member in members {
            self.detach_from_page(*member);
        }

        let id = ShapeId(self.next_id());
        self.shapes.insert(
            id,
            Shape {
                data: ShapeData::Group { members: members.to_vec(), bounds },
                parent: Some(page),
                transform: Transform::IDENTITY,
            },
        );
        if let Some(p) = self.pages.get_mut(&page) {
            p.items.push(id);
        }
        id
    }

    fn add_text_frame(&mut self, page: PageId, frame: TextFrame) -> ShapeId {
        let id = ShapeId(self.next_id());
        self.shapes.insert(
            id,
            Shape {
                data: ShapeData::TextFrame(frame),
                parent: Some(page),
                transform: Transform::IDENTITY,
            },
        );
        if let Some(p) = self.pages.get_mut(&page) {
            p.items.push(id);
        }
        id
    }

    fn color_by_name(&self, name: &str) -> Option<ColorId> {
        self.colors.iter().find(|(_, e)| e.name == name).map(|(id, _)| *id)
    }

    fn add_color(&mut self, name: &str, value: ColorValue, group: ColorGroupId) -> ColorId {
        let id = ColorId(self.next_id());
        self.colors.push((id, ColorEntry { name: name.to_string(), value, group }));
        id
    }

    fn set_color_space(&mut self, color: ColorId, space: ColorSpace) {
        if let Some((_, entry)) = self.colors.iter_mut().find(|(id, _)| *id == color) {
            entry.value = match space {
                ColorSpace::Cmyk => entry.value.to_cmyk(),
                ColorSpace::Rgb => entry.value.to_rgb(),
            };
        }
    }

    fn color_group_by_name(&self, name: &str) -> Option<ColorGroupId> {
        self.color_groups.iter().find(|(_, n)| n == name).map(|(id, _)| *id)
    }

    fn add_color_group(&mut self, name: &str) -> ColorGroupId {
        let id = ColorGroupId(self.next_id());
        self.color_groups.push((id, name.to_string()));
        id
    }

    fn undoable<T, E>(
        &mut self,
        label: &str,
        op: impl FnOnce(&mut Self) -> Result<T, E>,
    ) -> Result<T, E> {
        let snapshot = self.clone();
        match op(self) {
            Ok(value) => {
                self.history.push(label.to_string());
                Ok(value)
            }
            Err(err) => {
                // All-or-nothing: roll the whole host back
                *self = snapshot;
                Err(err)
            }
        }
    }
}

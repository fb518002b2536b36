//! Host document abstraction.
//!
//! The core never reads ambient application state: every operation receives
//! a [`Host`], which exposes the slice of a page-layout document model the
//! flag tools need - selection accessors, page and shape creation, the
//! name-keyed color tables, and an undoable-transaction wrapper.
//!
//! Handles are opaque ids minted by the host; the core only compares and
//! passes them back.

mod memory;

pub use memory::MemoryHost;

use crate::color::{ColorSpace, ColorValue};
use crate::geometry::{Bounds, Transform};

/// Handle to a page in the active document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub u64);

/// Handle to a page item (rectangle, group, text frame, or anything else).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub u64);

/// Handle to a named color resource in the document color table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColorId(pub u64);

/// Handle to a named color group in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColorGroupId(pub u64);

/// Capability tag for a selected element, resolved once at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Rectangle,
    Group,
    /// Anything the flag tools cannot replace (text, images, guides, ...)
    Other,
}

/// Page margin metrics, including the column gutter used for caption padding.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Margins {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub column_gutter: f64,
}

/// Horizontal paragraph justification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Justification {
    Left,
    Center,
    Right,
}

/// Vertical justification of text within its frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalJustification {
    Top,
    Center,
    Bottom,
}

/// A fully specified text frame, created in one call.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFrame {
    pub bounds: Bounds,
    pub contents: String,
    pub justification: Justification,
    pub vertical_justification: VerticalJustification,
    pub point_size: f64,
    pub font_family: String,
    pub fill: Option<ColorId>,
}

/// The injected document model.
///
/// Mutating methods may assume their handles are live; the core only passes
/// handles it received from the same host and never uses a handle after
/// removing the shape behind it.
pub trait Host {
    // ----- selection context -----

    /// Number of open documents.
    fn document_count(&self) -> usize;

    /// The active selection, in selection order.
    fn selection(&self) -> Vec<ShapeId>;

    /// Replace the active selection.
    fn set_selection(&mut self, shapes: &[ShapeId]);

    // ----- pages -----

    /// Append a new page to the active document.
    fn add_page(&mut self) -> PageId;

    fn page_bounds(&self, page: PageId) -> Bounds;

    fn page_margins(&self, page: PageId) -> Margins;

    // ----- shapes -----

    fn shape_kind(&self, shape: ShapeId) -> ShapeKind;

    fn shape_bounds(&self, shape: ShapeId) -> Bounds;

    fn shape_transform(&self, shape: ShapeId) -> Transform;

    fn set_shape_transform(&mut self, shape: ShapeId, transform: Transform);

    /// The page a shape sits on, or None for pasteboard items.
    fn parent_page(&self, shape: ShapeId) -> Option<PageId>;

    /// Remove a shape from the document. The handle is dead afterwards.
    fn remove_shape(&mut self, shape: ShapeId);

    /// Create a filled rectangle on a page.
    fn add_rectangle(
        &mut self,
        page: PageId,
        bounds: Bounds,
        fill: ColorId,
        stroke_weight: f64,
    ) -> ShapeId;

    /// Combine shapes on one page into a single group.
    fn group(&mut self, page: PageId, members: &[ShapeId]) -> ShapeId;

    /// Create a text frame on a page.
    fn add_text_frame(&mut self, page: PageId, frame: TextFrame) -> ShapeId;

    // ----- color tables -----

    /// Look up a color resource by its unique name.
    fn color_by_name(&self, name: &str) -> Option<ColorId>;

    /// Create a named color resource inside a color group.
    fn add_color(&mut self, name: &str, value: ColorValue, group: ColorGroupId) -> ColorId;

    /// Force a color resource into the given space, converting its value.
    fn set_color_space(&mut self, color: ColorId, space: ColorSpace);

    fn color_group_by_name(&self, name: &str) -> Option<ColorGroupId>;

    fn add_color_group(&mut self, name: &str) -> ColorGroupId;

    // ----- history -----

    /// Run `op` as one undoable operation labeled `label`.
    ///
    /// The host guarantees all-or-nothing at this boundary: when `op` fails,
    /// no partial mutation stays visible. The default implementation just
    /// runs the operation, for hosts without history.
    fn undoable<T, E>(
        &mut self,
        label: &str,
        op: impl FnOnce(&mut Self) -> Result<T, E>,
    ) -> Result<T, E>
    where
        Self: Sized,
    {
        let _ = label;
        op(self)
    }
}

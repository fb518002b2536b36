//! Selection resolver.
//!
//! Decides what the current selection means for flag creation and, on the
//! mutating path, materializes a [`FlagLocation`]: either a fresh page or
//! the footprint of a consumed (removed) selected shape.
//!
//! [`classify_selection`] and [`resolve_flag_location`] evaluate the same
//! decision table in the same order; classification never mutates the host
//! and exists for status display.

use thiserror::Error;

use crate::config::FlagConfig;
use crate::geometry::{Bounds, Transform};
use crate::host::{Host, PageId, ShapeKind};

/// Why a selection cannot become a flag location.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("no document is open")]
    NoDocument,
    #[error("multiple elements selected")]
    MultipleSelected,
    #[error("unsupported selection type")]
    Unsupported,
    #[error("orphaned element")]
    Orphaned,
}

/// What the current selection means, for UI status display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// No document is open; nothing can be created.
    NoDocument,
    /// The selection cannot be replaced by a flag.
    Invalid,
    /// Nothing is selected; a flag would go on a new page.
    New,
    /// Exactly one replaceable element is selected.
    Replace,
}

/// Where a flag goes: a container page, the rectangle it fills, and the
/// transform to reapply to the finished group.
///
/// Ephemeral - produced by [`resolve_flag_location`] and consumed once by
/// the layout engine.
#[derive(Debug, Clone, PartialEq)]
pub struct FlagLocation {
    pub container: PageId,
    pub bounds: Bounds,
    pub transform: Option<Transform>,
}

/// Classify the current selection without touching the host.
///
/// Same predicates, same order as [`resolve_flag_location`]. With
/// `strict_parent_page_check` off, a parentless supported element reports
/// [`Classification::Replace`] even though resolving it will fail.
pub fn classify_selection(host: &impl Host, config: &FlagConfig) -> Classification {
    if host.document_count() == 0 {
        return Classification::NoDocument;
    }
    let selection = host.selection();
    if selection.len() > 1 {
        return Classification::Invalid;
    }
    let Some(&shape) = selection.first() else {
        return Classification::New;
    };
    if !is_replaceable(host.shape_kind(shape)) {
        return Classification::Invalid;
    }
    if config.strict_parent_page_check && host.parent_page(shape).is_none() {
        return Classification::Invalid;
    }
    Classification::Replace
}

/// Turn the current selection into a [`FlagLocation`].
///
/// Empty selection appends a new page and uses its full bounds. A single
/// replaceable element is consumed: its transform is recorded and reset to
/// identity so the bounds read axis-aligned, then the element is removed.
///
/// Every failure check runs before the first mutation, so an `Err` means
/// the document is untouched. The orphan check always applies here, even
/// when classification is lax about it.
pub fn resolve_flag_location(
    host: &mut impl Host,
    config: &FlagConfig,
) -> Result<FlagLocation, SelectionError> {
    let _ = config;
    if host.document_count() == 0 {
        return Err(SelectionError::NoDocument);
    }
    let selection = host.selection();
    if selection.len() > 1 {
        return Err(SelectionError::MultipleSelected);
    }
    let Some(&shape) = selection.first() else {
        let page = host.add_page();
        return Ok(FlagLocation {
            container: page,
            bounds: host.page_bounds(page),
            transform: None,
        });
    };
    if !is_replaceable(host.shape_kind(shape)) {
        return Err(SelectionError::Unsupported);
    }
    let Some(page) = host.parent_page(shape) else {
        return Err(SelectionError::Orphaned);
    };

    let transform = host.shape_transform(shape);
    host.set_shape_transform(shape, Transform::IDENTITY);
    let bounds = host.shape_bounds(shape);
    host.remove_shape(shape);

    Ok(FlagLocation {
        container: page,
        bounds,
        transform: Some(transform),
    })
}

fn is_replaceable(kind: ShapeKind) -> bool {
    matches!(kind, ShapeKind::Rectangle | ShapeKind::Group)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryHost;

    fn host_with_page() -> (MemoryHost, PageId) {
        let mut host = MemoryHost::new();
        let page = host.create_document();
        (host, page)
    }

    #[test]
    fn test_classify_no_document() {
        let host = MemoryHost::new();
        assert_eq!(
            classify_selection(&host, &FlagConfig::default()),
            Classification::NoDocument
        );
    }

    #[test]
    fn test_classify_empty_selection() {
        let (host, _) = host_with_page();
        assert_eq!(classify_selection(&host, &FlagConfig::default()), Classification::New);
    }

    #[test]
    fn test_classify_multiple_selected() {
        let (mut host, page) = host_with_page();
        let a = host.insert_shape(Some(page), ShapeKind::Rectangle, Bounds::new(0.0, 0.0, 10.0, 10.0));
        let b = host.insert_shape(Some(page), ShapeKind::Rectangle, Bounds::new(10.0, 0.0, 20.0, 10.0));
        host.set_selection(&[a, b]);
        assert_eq!(classify_selection(&host, &FlagConfig::default()), Classification::Invalid);
    }

    #[test]
    fn test_classify_unsupported_kind() {
        let (mut host, page) = host_with_page();
        let shape = host.insert_shape(Some(page), ShapeKind::Other, Bounds::new(0.0, 0.0, 10.0, 10.0));
        host.set_selection(&[shape]);
        assert_eq!(classify_selection(&host, &FlagConfig::default()), Classification::Invalid);
    }

    #[test]
    fn test_classify_replaceable_kinds() {
        let (mut host, page) = host_with_page();
        for kind in [ShapeKind::Rectangle, ShapeKind::Group] {
            let shape = host.insert_shape(Some(page), kind, Bounds::new(0.0, 0.0, 10.0, 10.0));
            host.set_selection(&[shape]);
            assert_eq!(classify_selection(&host, &FlagConfig::default()), Classification::Replace);
        }
    }

    #[test]
    fn test_classify_orphan_depends_on_config() {
        let (mut host, _) = host_with_page();
        let orphan = host.insert_shape(None, ShapeKind::Rectangle, Bounds::new(0.0, 0.0, 10.0, 10.0));
        host.set_selection(&[orphan]);

        let strict = FlagConfig::default();
        assert_eq!(classify_selection(&host, &strict), Classification::Invalid);

        let lax = FlagConfig { strict_parent_page_check: false, ..strict };
        assert_eq!(classify_selection(&host, &lax), Classification::Replace);
    }

    #[test]
    fn test_resolve_no_document() {
        let mut host = MemoryHost::new();
        assert_eq!(
            resolve_flag_location(&mut host, &FlagConfig::default()),
            Err(SelectionError::NoDocument)
        );
    }

    #[test]
    fn test_resolve_empty_selection_adds_page() {
        let (mut host, _) = host_with_page();
        let location = resolve_flag_location(&mut host, &FlagConfig::default()).unwrap();
        assert_eq!(host.page_count(), 2);
        assert_eq!(location.bounds, host.page_bounds(location.container));
        assert!(location.transform.is_none());
    }

    #[test]
    fn test_resolve_consumes_selected_rectangle() {
        let (mut host, page) = host_with_page();
        let bounds = Bounds::new(10.0, 20.0, 110.0, 220.0);
        let shape = host.insert_shape(Some(page), ShapeKind::Rectangle, bounds);
        let transform = Transform { rotation: 45.0, ..Transform::IDENTITY };
        host.set_shape_transform(shape, transform);
        host.set_selection(&[shape]);

        let location = resolve_flag_location(&mut host, &FlagConfig::default()).unwrap();
        assert_eq!(location.container, page);
        assert_eq!(location.bounds, bounds);
        assert_eq!(location.transform, Some(transform));
        assert!(!host.shape_exists(shape));
        assert!(host.selection().is_empty());
        // Replacing a shape must not grow the document
        assert_eq!(host.page_count(), 1);
    }

    #[test]
    fn test_resolve_orphan_fails_without_mutation() {
        let (mut host, _) = host_with_page();
        let orphan = host.insert_shape(None, ShapeKind::Rectangle, Bounds::new(0.0, 0.0, 10.0, 10.0));
        host.set_selection(&[orphan]);

        // The lax variant classifies this as Replace, but resolution still
        // needs a container page
        let lax = FlagConfig { strict_parent_page_check: false, ..FlagConfig::default() };
        assert_eq!(resolve_flag_location(&mut host, &lax), Err(SelectionError::Orphaned));
        assert!(host.shape_exists(orphan));
        assert_eq!(host.page_count(), 1);
    }

    #[test]
    fn test_resolve_unsupported_fails_without_mutation() {
        let (mut host, page) = host_with_page();
        let shape = host.insert_shape(Some(page), ShapeKind::Other, Bounds::new(0.0, 0.0, 10.0, 10.0));
        host.set_selection(&[shape]);

        assert_eq!(
            resolve_flag_location(&mut host, &FlagConfig::default()),
            Err(SelectionError::Unsupported)
        );
        assert!(host.shape_exists(shape));
        assert_eq!(host.selection(), vec![shape]);
    }
}

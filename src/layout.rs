//! Stripe layout engine.
//!
//! Partitions a flag location into equal horizontal bands, paints one
//! stroke-less rectangle per band, groups them, and hands the group back as
//! the new selection.

use crate::geometry::stripe_bounds;
use crate::host::{ColorId, Host, ShapeId};
use crate::resolver::FlagLocation;

/// Paint the stripes for one flag.
///
/// `fills` is the palette's color list in visual top-to-bottom order;
/// `None` entries are holes and are dropped before the band count is taken,
/// so the retained fills always tile the full bounds. With no retained
/// fills nothing is created and `None` is returned.
///
/// The location's preserved transform is reapplied to the finished group,
/// not to the individual stripes, and the group becomes the host selection.
pub fn layout_stripes(
    host: &mut impl Host,
    location: &FlagLocation,
    fills: &[Option<ColorId>],
) -> Option<ShapeId> {
    let retained: Vec<ColorId> = fills.iter().flatten().copied().collect();
    if retained.is_empty() {
        return None;
    }

    let total = retained.len();
    let stripes: Vec<ShapeId> = retained
        .iter()
        .enumerate()
        .map(|(index, fill)| {
            let bounds = stripe_bounds(location.bounds, index, total);
            host.add_rectangle(location.container, bounds, *fill, 0.0)
        })
        .collect();

    let group = host.group(location.container, &stripes);
    if let Some(transform) = location.transform {
        host.set_shape_transform(group, transform);
    }
    host.set_selection(&[group]);
    Some(group)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorValue;
    use crate::geometry::{Bounds, Transform};
    use crate::host::{MemoryHost, PageId};

    fn host_with_page() -> (MemoryHost, PageId) {
        let mut host = MemoryHost::new();
        let page = host.create_document();
        (host, page)
    }

    fn fill(host: &mut MemoryHost, name: &str) -> ColorId {
        let group = match host.color_group_by_name("Swatches") {
            Some(g) => g,
            None => host.add_color_group("Swatches"),
        };
        host.add_color(name, ColorValue::Rgb([0.0, 0.0, 0.0]), group)
    }

    fn location(page: PageId, bounds: Bounds) -> FlagLocation {
        FlagLocation { container: page, bounds, transform: None }
    }

    #[test]
    fn test_empty_palette_is_a_no_op() {
        let (mut host, page) = host_with_page();
        let loc = location(page, Bounds::new(0.0, 0.0, 100.0, 300.0));
        assert_eq!(layout_stripes(&mut host, &loc, &[]), None);
        assert_eq!(layout_stripes(&mut host, &loc, &[None, None]), None);
        assert!(host.page_items(page).is_empty());
        assert!(host.selection().is_empty());
    }

    #[test]
    fn test_three_stripes_tile_and_select() {
        let (mut host, page) = host_with_page();
        let red = fill(&mut host, "Red");
        let green = fill(&mut host, "Green");
        let blue = fill(&mut host, "Blue");
        let loc = location(page, Bounds::new(0.0, 0.0, 300.0, 100.0));

        let group = layout_stripes(&mut host, &loc, &[Some(red), Some(green), Some(blue)])
            .expect("three stripes should produce a group");

        assert_eq!(host.selection(), vec![group]);
        let members = host.group_members(group).unwrap().to_vec();
        assert_eq!(members.len(), 3);
        assert_eq!(host.shape_bounds(members[0]), Bounds::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(host.shape_bounds(members[1]), Bounds::new(100.0, 0.0, 200.0, 100.0));
        assert_eq!(host.shape_bounds(members[2]), Bounds::new(200.0, 0.0, 300.0, 100.0));
        assert_eq!(host.rectangle_fill(members[0]), Some(red));
        assert_eq!(host.rectangle_fill(members[2]), Some(blue));
        assert_eq!(host.rectangle_stroke_weight(members[0]), Some(0.0));
        assert_eq!(host.shape_bounds(group), loc.bounds);
    }

    #[test]
    fn test_holes_dropped_before_counting() {
        let (mut host, page) = host_with_page();
        let a = fill(&mut host, "A");
        let b = fill(&mut host, "B");
        let loc = location(page, Bounds::new(0.0, 0.0, 100.0, 100.0));

        let group = layout_stripes(&mut host, &loc, &[Some(a), None, Some(b)]).unwrap();
        let members = host.group_members(group).unwrap().to_vec();
        // Two bands of 50, not three bands with a gap
        assert_eq!(members.len(), 2);
        assert_eq!(host.shape_bounds(members[0]), Bounds::new(0.0, 0.0, 50.0, 100.0));
        assert_eq!(host.shape_bounds(members[1]), Bounds::new(50.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn test_transform_reapplied_to_group_only() {
        let (mut host, page) = host_with_page();
        let a = fill(&mut host, "A");
        let transform = Transform { rotation: 30.0, ..Transform::IDENTITY };
        let loc = FlagLocation {
            container: page,
            bounds: Bounds::new(0.0, 0.0, 100.0, 100.0),
            transform: Some(transform),
        };

        let group = layout_stripes(&mut host, &loc, &[Some(a)]).unwrap();
        assert_eq!(host.shape_transform(group), transform);
        let members = host.group_members(group).unwrap().to_vec();
        assert_eq!(host.shape_transform(members[0]), Transform::IDENTITY);
    }
}

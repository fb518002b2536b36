//! End-to-end tests driving the full flag pipeline against the in-memory
//! host.

use flagpress::color::{ColorSpec, ColorValue};
use flagpress::config::FlagConfig;
use flagpress::flags::{create_flag, FlagError};
use flagpress::geometry::{Bounds, Transform};
use flagpress::host::{Host, MemoryHost, ShapeKind};
use flagpress::listener::SelectionMonitor;
use flagpress::overlay::Caption;
use flagpress::palette::{Palette, Stripe};
use flagpress::palettes::{get_builtin, list_builtins};
use flagpress::render::render_flag;
use flagpress::resolver::{Classification, SelectionError};

fn rgb_palette() -> Palette {
    Palette {
        name: "rgb".to_string(),
        title: "RGB".to_string(),
        stripes: vec![
            Some(Stripe::new("Red", ColorSpec::hex("#FF0000"))),
            Some(Stripe::new("Green", ColorSpec::hex("#00FF00"))),
            Some(Stripe::new("Blue", ColorSpec::hex("#0000FF"))),
        ],
    }
}

#[test]
fn test_replace_selection_end_to_end() {
    let mut host = MemoryHost::new();
    let page = host.create_document();
    let target = host.insert_shape(
        Some(page),
        ShapeKind::Rectangle,
        Bounds::new(0.0, 0.0, 300.0, 100.0),
    );
    host.set_selection(&[target]);

    let group = create_flag(&mut host, &rgb_palette(), &FlagConfig::default(), None)
        .unwrap()
        .expect("three stripes");

    // The consumed rectangle is gone, the group took its footprint
    assert!(!host.shape_exists(target));
    assert_eq!(host.shape_bounds(group), Bounds::new(0.0, 0.0, 300.0, 100.0));
    assert_eq!(host.selection(), vec![group]);

    // Three full-width bands of 100 each
    let members = host.group_members(group).unwrap().to_vec();
    assert_eq!(members.len(), 3);
    assert_eq!(host.shape_bounds(members[0]), Bounds::new(0.0, 0.0, 100.0, 100.0));
    assert_eq!(host.shape_bounds(members[1]), Bounds::new(100.0, 0.0, 200.0, 100.0));
    assert_eq!(host.shape_bounds(members[2]), Bounds::new(200.0, 0.0, 300.0, 100.0));

    // Each swatch registered once, normalized to CMYK
    assert_eq!(host.color_count(), 3);
    let red = host.color_by_name("Red").unwrap();
    assert_eq!(
        host.color_entry(red).unwrap().value,
        ColorValue::Cmyk([0.0, 100.0, 100.0, 0.0])
    );
}

#[test]
fn test_transform_survives_replacement() {
    let mut host = MemoryHost::new();
    let page = host.create_document();
    let target = host.insert_shape(
        Some(page),
        ShapeKind::Rectangle,
        Bounds::new(0.0, 0.0, 100.0, 200.0),
    );
    let transform = Transform { rotation: 15.0, shear: 5.0, ..Transform::IDENTITY };
    host.set_shape_transform(target, transform);
    host.set_selection(&[target]);

    let group = create_flag(&mut host, &rgb_palette(), &FlagConfig::default(), None)
        .unwrap()
        .unwrap();
    assert_eq!(host.shape_transform(group), transform);
}

#[test]
fn test_empty_selection_uses_a_new_page() {
    let mut host = MemoryHost::new();
    host.create_document();

    let group = create_flag(&mut host, &rgb_palette(), &FlagConfig::default(), None)
        .unwrap()
        .unwrap();

    assert_eq!(host.page_count(), 2);
    let page = host.parent_page(group).unwrap();
    assert_eq!(host.shape_bounds(group), host.page_bounds(page));
}

#[test]
fn test_second_flag_reuses_swatches() {
    let mut host = MemoryHost::new();
    host.create_document();
    let config = FlagConfig::default();

    create_flag(&mut host, &rgb_palette(), &config, None).unwrap();
    host.set_selection(&[]);
    create_flag(&mut host, &rgb_palette(), &config, None).unwrap();

    assert_eq!(host.color_count(), 3);
    assert_eq!(host.color_group_count(), 1);
    assert_eq!(host.history().len(), 2);
}

#[test]
fn test_caption_lands_on_top_of_the_flag() {
    let mut host = MemoryHost::new();
    host.create_document();

    let caption = Caption::new("Happy Pride", false);
    let group = create_flag(
        &mut host,
        &rgb_palette(),
        &FlagConfig::default(),
        Some(&caption),
    )
    .unwrap()
    .unwrap();

    let page = host.parent_page(group).unwrap();
    let frame_id = host
        .page_items(page)
        .iter()
        .copied()
        .find(|id| host.text_frame(*id).is_some())
        .expect("caption frame on the page");
    let frame = host.text_frame(frame_id).unwrap();
    assert_eq!(frame.contents, "Happy Pride");

    let bounds = host.page_bounds(page);
    let span = bounds.height();
    assert_eq!(frame.bounds.top, bounds.top + span * 2.0 / 5.0);
    assert_eq!(frame.bounds.bottom, bounds.top + span * 3.0 / 5.0);
}

#[test]
fn test_failed_flag_is_fully_rolled_back() {
    let mut host = MemoryHost::new();
    let page = host.create_document();
    let target = host.insert_shape(
        Some(page),
        ShapeKind::Rectangle,
        Bounds::new(0.0, 0.0, 100.0, 100.0),
    );
    host.set_selection(&[target]);

    let broken = Palette {
        name: "broken".to_string(),
        title: "Broken".to_string(),
        stripes: vec![
            Some(Stripe::new("Good", ColorSpec::hex("#112233"))),
            Some(Stripe::new("Bad", ColorSpec::hex("#12"))),
        ],
    };
    let err = create_flag(&mut host, &broken, &FlagConfig::default(), None).unwrap_err();
    assert!(matches!(err, FlagError::Color(_)));

    assert!(host.shape_exists(target));
    assert_eq!(host.selection(), vec![target]);
    assert_eq!(host.color_count(), 0);
    assert_eq!(host.page_count(), 1);
    assert!(host.history().is_empty());
}

#[test]
fn test_multiple_selection_is_rejected_untouched() {
    let mut host = MemoryHost::new();
    let page = host.create_document();
    let a = host.insert_shape(Some(page), ShapeKind::Rectangle, Bounds::new(0.0, 0.0, 10.0, 10.0));
    let b = host.insert_shape(Some(page), ShapeKind::Group, Bounds::new(10.0, 0.0, 20.0, 10.0));
    host.set_selection(&[a, b]);

    let err = create_flag(&mut host, &rgb_palette(), &FlagConfig::default(), None).unwrap_err();
    assert_eq!(err, FlagError::Selection(SelectionError::MultipleSelected));
    assert!(host.shape_exists(a));
    assert!(host.shape_exists(b));
    assert_eq!(host.selection(), vec![a, b]);
}

#[test]
fn test_monitor_follows_a_working_session() {
    let mut host = MemoryHost::new();
    let mut monitor = SelectionMonitor::default();

    assert_eq!(monitor.on_selection_changed(&host), Some(Classification::NoDocument));

    let page = host.create_document();
    assert_eq!(monitor.on_selection_changed(&host), Some(Classification::New));

    let shape =
        host.insert_shape(Some(page), ShapeKind::Rectangle, Bounds::new(0.0, 0.0, 50.0, 50.0));
    host.set_selection(&[shape]);
    assert_eq!(monitor.on_selection_changed(&host), Some(Classification::Replace));

    create_flag(&mut host, &rgb_palette(), &FlagConfig::default(), None).unwrap();
    assert_eq!(monitor.on_selection_changed(&host), Some(Classification::Replace));

    monitor.dispose();
    monitor.dispose();
    assert_eq!(monitor.on_selection_changed(&host), None);
}

#[test]
fn test_every_builtin_creates_and_renders() {
    for name in list_builtins() {
        let palette = get_builtin(name).unwrap();

        let mut host = MemoryHost::new();
        host.create_document();
        let group = create_flag(&mut host, &palette, &FlagConfig::default(), None)
            .unwrap()
            .unwrap_or_else(|| panic!("{} produced no group", name));
        assert_eq!(
            host.group_members(group).unwrap().len(),
            palette.stripe_count(),
            "{} stripe count mismatch",
            name
        );

        render_flag(&palette, 30, 20).unwrap_or_else(|e| panic!("{}: {}", name, e));
    }
}

#[test]
fn test_preview_png_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rainbow.png");

    let image = render_flag(&get_builtin("rainbow").unwrap(), 60, 36).unwrap();
    image.save(&path).unwrap();

    let loaded = image::open(&path).unwrap().to_rgba8();
    assert_eq!(loaded.dimensions(), (60, 36));
    assert_eq!(loaded.get_pixel(0, 0), image.get_pixel(0, 0));
}

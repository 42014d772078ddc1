//! Tests for panel layout: stacking, removal, bounds and reflow

mod common;

use common::{panel_with_items, positions, test_panel, texts, Monospace, RecordingSurface};
use dockmenu::geometry::Vec2;
use dockmenu::panel::{Corner, ItemStyle, Panel, PanelType, DEFAULT_CAPACITY};
use dockmenu::PanelError;

// ============================================================================
// Capacity
// ============================================================================

#[test]
fn test_adds_up_to_capacity_succeed() {
    let mut panel = Panel::with_capacity(PanelType::Dynamic, 3, Monospace);
    for text in ["a", "b", "c"] {
        assert!(panel.add_item(text).is_ok());
    }
    assert!(panel.is_full());

    let before = texts(&panel);
    let bounds = panel.bounds();
    assert_eq!(
        panel.add_item("d"),
        Err(PanelError::CapacityExceeded { capacity: 3 })
    );
    assert_eq!(texts(&panel), before);
    assert_eq!(panel.bounds(), bounds);
}

#[test]
fn test_default_capacity() {
    let mut panel = test_panel(PanelType::Dynamic);
    for i in 0..DEFAULT_CAPACITY {
        panel.add_item(&format!("item {}", i)).unwrap();
    }
    assert_eq!(panel.len(), DEFAULT_CAPACITY);
    assert!(panel.add_item("one too many").is_err());
}

// ============================================================================
// Ordering and lookup
// ============================================================================

#[test]
fn test_insertion_order_preserved() {
    let panel = panel_with_items(PanelType::Dynamic, &["one", "two", "three"]);
    assert_eq!(texts(&panel), vec!["one", "two", "three"]);

    let first = panel.find_item("one").unwrap();
    assert_eq!(panel.items()[0].id(), first);
}

#[test]
fn test_find_item_returns_first_match() {
    let panel = panel_with_items(PanelType::Dynamic, &["dup", "other", "dup"]);
    let found = panel.find_item("dup").unwrap();
    assert_eq!(found, panel.items()[0].id());
    assert!(panel.find_item("missing").is_none());
}

#[test]
fn test_removed_handle_is_rejected() {
    let mut panel = test_panel(PanelType::Dynamic);
    let id = panel.add_item("gone").unwrap();
    panel.remove_item(id).unwrap();

    assert!(panel.item(id).is_none());
    assert_eq!(panel.remove_item(id), Err(PanelError::ItemNotFound(id)));
    assert_eq!(
        panel.set_item_text(id, "back"),
        Err(PanelError::ItemNotFound(id))
    );

    let new_id = panel.add_item("new").unwrap();
    assert_ne!(new_id, id);
}

#[test]
fn test_remove_by_text() {
    let mut panel = panel_with_items(PanelType::Dynamic, &["keep", "drop"]);
    panel.remove_item_by_text("drop").unwrap();
    assert_eq!(texts(&panel), vec!["keep"]);
    assert_eq!(
        panel.remove_item_by_text("drop"),
        Err(PanelError::TextNotFound("drop".to_string()))
    );
}

#[test]
fn test_remove_first_and_last() {
    let mut panel = panel_with_items(PanelType::Dynamic, &["a", "b", "c"]);
    panel.remove_first().unwrap();
    panel.remove_last().unwrap();
    assert_eq!(texts(&panel), vec!["b"]);
    assert_eq!(panel.items()[0].position(), Vec2::new(25.0, 25.0));

    panel.remove_last().unwrap();
    assert_eq!(panel.remove_first(), Err(PanelError::Empty));
    assert_eq!(panel.remove_last(), Err(PanelError::Empty));
}

// ============================================================================
// Compaction
// ============================================================================

#[test]
fn test_remove_middle_top_docked() {
    let mut panel = test_panel(PanelType::Dynamic);
    let sized = |size| ItemStyle::default().with_character_size(size);
    panel.add_item_with_style("a", &sized(20)).unwrap();
    let middle = panel.add_item_with_style("b", &sized(30)).unwrap();
    panel.add_item_with_style("c", &sized(16)).unwrap();
    assert_eq!(
        positions(&panel),
        vec![
            Vec2::new(25.0, 25.0),
            Vec2::new(25.0, 55.0),
            Vec2::new(25.0, 95.0)
        ]
    );
    let height = panel.bounds().y;

    panel.remove_item(middle).unwrap();

    assert_eq!(texts(&panel), vec!["a", "c"]);
    assert_eq!(
        positions(&panel),
        vec![Vec2::new(25.0, 25.0), Vec2::new(25.0, 55.0)]
    );
    assert_eq!(panel.bounds().y, height - 40.0);
}

#[test]
fn test_remove_middle_bottom_docked() {
    let mut panel = test_panel(PanelType::Dynamic);
    panel.set_docking_position(Corner::BottomLeft);
    for text in ["a", "b", "c"] {
        panel.add_item(text).unwrap();
    }
    assert_eq!(
        positions(&panel),
        vec![
            Vec2::new(25.0, 515.0),
            Vec2::new(25.0, 545.0),
            Vec2::new(25.0, 575.0)
        ]
    );

    panel.remove_item_by_text("b").unwrap();

    assert_eq!(texts(&panel), vec!["a", "c"]);
    assert_eq!(
        positions(&panel),
        vec![Vec2::new(25.0, 545.0), Vec2::new(25.0, 575.0)]
    );
}

#[test]
fn test_removing_widest_shrinks_width() {
    let mut panel = panel_with_items(PanelType::Dynamic, &["ab", "abcdefgh"]);
    assert_eq!(panel.bounds().x, 80.0 + 50.0 + 2.5);
    panel.remove_item_by_text("abcdefgh").unwrap();
    assert_eq!(panel.bounds().x, 20.0 + 50.0 + 2.5);
}

#[test]
fn test_removing_last_item_resets_bounds() {
    let mut panel = panel_with_items(PanelType::Dynamic, &["only"]);
    panel.remove_last().unwrap();
    assert_eq!(panel.bounds(), Vec2::new(50.0, 50.0));
}

// ============================================================================
// Bounds
// ============================================================================

#[test]
fn test_bounds_monotonic_in_width() {
    let mut panel = test_panel(PanelType::Dynamic);
    panel.add_item("abc").unwrap();
    assert_eq!(panel.bounds().x, 30.0 + 50.0 + 2.5);

    panel.add_item("abcdef").unwrap();
    assert_eq!(panel.bounds().x, 60.0 + 50.0 + 2.5);

    panel.add_item("a").unwrap();
    assert_eq!(panel.bounds().x, 60.0 + 50.0 + 2.5);
}

#[test]
fn test_two_item_scenario() {
    let mut panel = test_panel(PanelType::Dynamic);
    let a = panel.add_item("A").unwrap();
    let bb = panel.add_item("BB").unwrap();

    let inflation = 20.0 * 0.25 / 2.0;
    // Bounds include 2 x 25px padding, so an emptied panel is (50, 50)
    assert_eq!(panel.bounds().x, 20.0 + 50.0 + inflation);
    assert_eq!(panel.bounds().y, 50.0 + 20.0 + 20.0 + 10.0 + inflation);
    assert_eq!(panel.item(a).unwrap().position(), Vec2::new(25.0, 25.0));
    assert_eq!(panel.item(bb).unwrap().position(), Vec2::new(25.0, 55.0));
}

#[test]
fn test_corner_symmetry() {
    let contents = ["Play", "Options", "Quit"];
    let reference = panel_with_items(PanelType::Dynamic, &contents).bounds();

    for corner in Corner::ALL {
        let mut panel = test_panel(PanelType::Dynamic);
        panel.set_docking_position(corner);
        for text in contents {
            panel.add_item(text).unwrap();
        }
        assert_eq!(panel.bounds(), reference, "bounds differ for {}", corner);
    }
}

#[test]
fn test_panel_rect_follows_docking_corner() {
    let mut panel = panel_with_items(PanelType::Dynamic, &["abc"]);
    let bounds = panel.bounds();
    assert_eq!(panel.panel_rect().x, 0.0);

    panel.set_docking_position(Corner::BottomRight);
    let rect = panel.panel_rect();
    assert_eq!(rect.right(), 800.0);
    assert_eq!(rect.bottom(), 600.0);
    assert_eq!(rect.width, bounds.x);
}

// ============================================================================
// Layout parameters
// ============================================================================

#[test]
fn test_padding_reversible() {
    for corner in Corner::ALL {
        let mut panel = test_panel(PanelType::Dynamic);
        panel.set_docking_position(corner);
        for text in ["a", "bb", "ccc"] {
            panel.add_item(text).unwrap();
        }
        let before = positions(&panel);
        let bounds = panel.bounds();

        panel.set_padding(40.0, 35.0).unwrap();
        assert_ne!(positions(&panel), before);
        panel.set_padding(25.0, 25.0).unwrap();

        assert_eq!(positions(&panel), before, "positions differ for {}", corner);
        assert_eq!(panel.bounds(), bounds);
    }
}

#[test]
fn test_padding_on_empty_panel() {
    let mut panel = test_panel(PanelType::Dynamic);
    panel.set_padding(10.0, 0.0).unwrap();
    assert_eq!(panel.bounds(), Vec2::new(20.0, 0.0));
    panel.set_padding(25.0, 25.0).unwrap();
    assert_eq!(panel.bounds(), Vec2::new(50.0, 50.0));
}

#[test]
fn test_negative_parameters_rejected() {
    let mut panel = panel_with_items(PanelType::Dynamic, &["a"]);
    let before = positions(&panel);

    assert_eq!(
        panel.set_padding(-1.0, 0.0),
        Err(PanelError::NegativePadding { x: -1.0, y: 0.0 })
    );
    assert_eq!(
        panel.set_component_buffer(-3),
        Err(PanelError::NegativeBuffer(-3))
    );
    assert_eq!(panel.padding(), Vec2::new(25.0, 25.0));
    assert_eq!(panel.component_buffer(), 10);
    assert_eq!(positions(&panel), before);
}

#[test]
fn test_component_buffer_top_docked() {
    let mut panel = panel_with_items(PanelType::Dynamic, &["a", "b", "c"]);
    panel.set_component_buffer(20).unwrap();
    assert_eq!(
        positions(&panel),
        vec![
            Vec2::new(25.0, 25.0),
            Vec2::new(25.0, 65.0),
            Vec2::new(25.0, 105.0)
        ]
    );
    assert_eq!(panel.bounds().y, 50.0 + 60.0 + 40.0 + 2.5);
}

#[test]
fn test_component_buffer_bottom_docked() {
    let mut panel = test_panel(PanelType::Dynamic);
    panel.set_docking_position(Corner::BottomLeft);
    for text in ["a", "b", "c"] {
        panel.add_item(text).unwrap();
    }
    panel.set_component_buffer(20).unwrap();
    assert_eq!(
        positions(&panel),
        vec![
            Vec2::new(25.0, 495.0),
            Vec2::new(25.0, 535.0),
            Vec2::new(25.0, 575.0)
        ]
    );
}

#[test]
fn test_text_origin_locked_on_dynamic() {
    let mut panel = test_panel(PanelType::Dynamic);
    assert_eq!(
        panel.set_text_origin_point(Corner::TopRight),
        Err(PanelError::TextOriginLocked)
    );

    panel.set_docking_position(Corner::BottomRight);
    assert_eq!(panel.text_origin_point(), Corner::BottomRight);
}

#[test]
fn test_static_text_origin_independent() {
    let mut panel = test_panel(PanelType::Static);
    panel.set_text_origin_point(Corner::TopRight).unwrap();
    panel.set_docking_position(Corner::BottomLeft);
    assert_eq!(panel.text_origin_point(), Corner::TopRight);

    let id = panel.add_item("abcd").unwrap();
    let item = panel.item(id).unwrap();
    assert_eq!(item.origin(), Vec2::new(40.0, 0.0));
    assert_eq!(item.position(), Vec2::new(25.0, 575.0));
}

#[test]
fn test_text_origin_change_keeps_existing_items() {
    let mut panel = test_panel(PanelType::Static);
    panel.show();
    let first = panel.add_item("abc").unwrap();

    panel.set_text_origin_point(Corner::BottomLeft).unwrap();
    let mut surface = RecordingSurface::new(800, 600);
    panel.draw(&mut surface);

    let item = panel.item(first).unwrap();
    assert_eq!(item.anchor(), Corner::TopLeft);
    assert_eq!(item.draw_origin(), Vec2::new(25.0, 25.0));
    assert_eq!(surface.texts()[0], ("abc".to_string(), Vec2::new(25.0, 25.0)));

    // Only items added afterwards use the new origin
    let second = panel.add_item("de").unwrap();
    let item = panel.item(second).unwrap();
    assert_eq!(item.anchor(), Corner::BottomLeft);
    assert_eq!(item.position(), Vec2::new(25.0, 55.0));
    assert_eq!(item.draw_origin(), Vec2::new(25.0, 35.0));

    // A later text change re-measures against the item's own corner
    panel.set_item_text(first, "abcdef").unwrap();
    surface.clear();
    panel.draw(&mut surface);
    assert_eq!(panel.item(first).unwrap().draw_origin(), Vec2::new(25.0, 25.0));
}

#[test]
fn test_static_bounds_ignore_padding_change() {
    let mut panel = panel_with_items(PanelType::Static, &["ab"]);
    let bounds = panel.bounds();

    panel.set_padding(50.0, 50.0).unwrap();
    assert_eq!(panel.bounds(), bounds);
    assert_eq!(panel.items()[0].position(), Vec2::new(50.0, 50.0));

    panel.add_item("c").unwrap();
    assert_eq!(panel.bounds().x, 20.0 + 100.0 + 2.5);
}

// ============================================================================
// Reflow
// ============================================================================

#[test]
fn test_same_corner_twice_is_noop() {
    let mut panel = panel_with_items(PanelType::Dynamic, &["a", "b"]);
    panel.set_docking_position(Corner::TopRight);
    assert!(panel.needs_reflow());

    let mut surface = RecordingSurface::new(800, 600);
    panel.draw(&mut surface);
    assert!(!panel.needs_reflow());
    let after_reflow = positions(&panel);

    panel.set_docking_position(Corner::TopRight);
    assert!(!panel.needs_reflow());
    assert_eq!(positions(&panel), after_reflow);
}

#[test]
fn test_docking_change_reflows_on_draw() {
    let mut panel = panel_with_items(PanelType::Dynamic, &["a", "b", "c"]);
    let ids: Vec<_> = panel.items().iter().map(|item| item.id()).collect();

    panel.set_docking_position(Corner::BottomRight);
    // Positions are stale until the next draw
    assert_eq!(panel.items()[0].position(), Vec2::new(25.0, 25.0));

    let mut surface = RecordingSurface::new(800, 600);
    panel.draw(&mut surface);

    assert_eq!(
        positions(&panel),
        vec![
            Vec2::new(775.0, 515.0),
            Vec2::new(775.0, 545.0),
            Vec2::new(775.0, 575.0)
        ]
    );
    let reflowed: Vec<_> = panel.items().iter().map(|item| item.id()).collect();
    assert_eq!(reflowed, ids);
    assert_eq!(texts(&panel), vec!["a", "b", "c"]);
}

#[test]
fn test_docking_round_trip_restores_layout() {
    let mut panel = panel_with_items(PanelType::Dynamic, &["a", "bb", "ccc"]);
    let before = positions(&panel);
    let bounds = panel.bounds();
    let mut surface = RecordingSurface::new(800, 600);

    panel.set_docking_position(Corner::BottomLeft);
    panel.draw(&mut surface);
    panel.set_docking_position(Corner::TopLeft);
    panel.draw(&mut surface);

    assert_eq!(positions(&panel), before);
    assert_eq!(panel.bounds(), bounds);
}

#[test]
fn test_surface_resize_reflows() {
    let mut panel = test_panel(PanelType::Dynamic);
    panel.set_docking_position(Corner::TopRight);
    let id = panel.add_item("abc").unwrap();
    assert_eq!(panel.item(id).unwrap().position(), Vec2::new(775.0, 25.0));

    let mut surface = RecordingSurface::new(1000, 600);
    panel.draw(&mut surface);

    let item = panel.item(id).unwrap();
    assert_eq!(item.position(), Vec2::new(975.0, 25.0));
    assert_eq!(item.global_bounds().right(), 975.0);
    assert_eq!(panel.panel_rect().right(), 1000.0);
}

// ============================================================================
// Content updates
// ============================================================================

#[test]
fn test_set_item_text_refits_bounds() {
    let mut panel = panel_with_items(PanelType::Dynamic, &["ab"]);
    let id = panel.items()[0].id();
    panel.set_item_text(id, "abcdefghij").unwrap();
    assert_eq!(panel.bounds().x, 100.0 + 50.0 + 2.5);
    assert_eq!(panel.item(id).unwrap().text(), "abcdefghij");
}

#[test]
fn test_right_docked_text_change_reanchors_on_draw() {
    let mut panel = test_panel(PanelType::Dynamic);
    panel.set_docking_position(Corner::TopRight);
    panel.show();
    let id = panel.add_item("abc").unwrap();
    let below = panel.add_item("x").unwrap();

    panel.set_item_text(id, "abcdefgh").unwrap();
    let mut surface = RecordingSurface::new(800, 600);
    panel.draw(&mut surface);

    let item = panel.item(id).unwrap();
    assert_eq!(item.global_bounds().right(), 775.0);
    assert_eq!(item.position().y, 25.0);
    assert_eq!(panel.item(below).unwrap().position(), Vec2::new(775.0, 55.0));
    assert_eq!(
        surface.texts()[0],
        ("abcdefgh".to_string(), Vec2::new(695.0, 25.0))
    );
}

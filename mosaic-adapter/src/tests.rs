use crate::*;

use alloc::string::String;
use alloc::vec::Vec;

use mosaic_layout::{
    ElementKind, ItemKind, LayoutTree, Location, Malformed, ReorderError, ReorderEvent,
    sample_layout,
};
use mosaic_window::{ColumnBreakpoints, GridOptions, VisibleRange};

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_f32(&mut self, start: f32, end: f32) -> f32 {
        let unit = (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32;
        start + (end - start) * unit
    }
}

fn close(a: f32, b: f32) -> bool {
    let d = a - b;
    d < 1e-3 && d > -1e-3
}

fn section_ids(tree: &LayoutTree) -> Vec<String> {
    tree.sections().iter().map(|s| s.id.clone()).collect()
}

#[test]
fn controller_reports_mounts_and_unmounts() {
    let mut c = WindowController::new(GridOptions::gallery()).unwrap();
    assert_eq!(c.range(), VisibleRange::EMPTY);

    let diff = c.on_resize(800).unwrap().unwrap();
    assert_eq!(diff.mounted.first, 0..51);
    assert!(diff.unmounted.is_empty());
    assert_eq!(c.range(), VisibleRange::new(0, 51));

    // Twenty rows down: ten buffer rows above, so the range starts at row 10.
    let diff = c.on_scroll(2320).unwrap().unwrap();
    assert_eq!(c.range(), VisibleRange::new(30, 111));
    assert_eq!(diff.mounted.first, 51..111);
    assert_eq!(diff.unmounted.first, 0..30);

    // Same rows: nothing to do.
    assert_eq!(c.on_scroll(2330).unwrap(), None);
}

#[test]
fn nothing_is_materialized_before_first_measurement() {
    let mut c = WindowController::new(GridOptions::gallery()).unwrap();
    assert_eq!(c.range(), VisibleRange::EMPTY);

    // A zero-height viewport at the top still mounts the ten buffer rows.
    let diff = c.on_scroll(0).unwrap().unwrap();
    assert_eq!(c.range(), VisibleRange::new(0, 30));
    assert_eq!(diff.mounted.first, 0..30);
    assert!(diff.unmounted.is_empty());
}

#[test]
fn controller_keeps_state_on_invalid_measurement() {
    let mut c = WindowController::new(GridOptions::gallery()).unwrap();
    c.on_resize(800).unwrap();
    let before = (c.viewport(), c.range());

    assert!(c.on_resize(-1).is_err());
    assert!(c.set_options(GridOptions::gallery().with_row_height(0)).is_err());
    assert_eq!((c.viewport(), c.range()), before);
    assert_eq!(c.options(), &GridOptions::gallery());
}

#[test]
fn controller_rejects_invalid_initial_options() {
    assert!(WindowController::new(GridOptions::gallery().with_columns_per_row(0)).is_err());
}

#[test]
fn controller_follows_breakpoints_and_item_count() {
    let mut c = WindowController::new(GridOptions::gallery())
        .unwrap()
        .with_breakpoints(ColumnBreakpoints::default());
    c.on_viewport(mosaic_window::Viewport::new(2320, 800)).unwrap();
    assert_eq!(c.range(), VisibleRange::new(30, 111));

    // Already three columns at desktop width.
    assert_eq!(c.on_width(1024).unwrap(), None);

    let diff = c.on_width(500).unwrap().unwrap();
    assert_eq!(c.options().columns_per_row, 2);
    assert_eq!(c.range(), VisibleRange::new(20, 74));
    assert_eq!(diff.mounted.first, 20..30);
    assert_eq!(diff.unmounted.first, 74..111);

    let diff = c.set_total_items(40).unwrap().unwrap();
    assert_eq!(c.range(), VisibleRange::new(20, 40));
    assert!(diff.mounted.is_empty());
    assert_eq!(diff.unmounted.first, 40..74);

    assert_eq!(c.set_total_items(40).unwrap(), None);
}

#[test]
fn on_width_without_breakpoints_is_noop() {
    let mut c = WindowController::new(GridOptions::gallery()).unwrap();
    c.on_resize(800).unwrap();
    assert_eq!(c.on_width(300).unwrap(), None);
    assert_eq!(c.options().columns_per_row, 3);
}

#[test]
fn store_dispatch_bumps_version_only_on_change() {
    let mut store = LayoutStore::new(sample_layout());
    assert_eq!(store.version(), 0);

    assert_eq!(
        store.dispatch(&ReorderEvent::section(0, 1)),
        DispatchOutcome::Applied { version: 1 }
    );
    assert_eq!(section_ids(store.tree()), ["2", "1"]);

    assert_eq!(
        store.dispatch(&ReorderEvent::section(1, 1)),
        DispatchOutcome::Unchanged
    );
    assert_eq!(store.version(), 1);

    let before = store.tree().clone();
    let outcome = store.dispatch(&ReorderEvent::section(9, 0));
    assert_eq!(
        outcome,
        DispatchOutcome::Ignored(ReorderError::IndexOutOfRange {
            level: ItemKind::Section,
            index: 9,
            len: 2,
        })
    );
    assert!(LayoutTree::ptr_eq(store.tree(), &before));
    assert_eq!(store.version(), 1);
}

#[test]
fn store_drops_stale_commits() {
    let mut store = LayoutStore::new(sample_layout());
    let snap = store.snapshot();
    let computed = snap.tree.apply(&ReorderEvent::section(0, 1)).unwrap();

    // Another change lands first.
    store.dispatch(&ReorderEvent::column(
        Location::column(0, 0),
        Location::column(0, 1),
    ));
    let current = store.tree().clone();

    assert!(!store.commit(snap.version, computed));
    assert!(LayoutTree::ptr_eq(store.tree(), &current));
    assert_eq!(store.version(), 1);

    let snap = store.snapshot();
    let computed = snap.tree.apply(&ReorderEvent::section(0, 1)).unwrap();
    assert!(store.commit(snap.version, computed));
    assert_eq!(store.version(), 2);
    assert_eq!(section_ids(store.tree()), ["2", "1"]);

    // Committing the same tree is accepted without a new version.
    let snap = store.snapshot();
    assert!(store.commit(snap.version, snap.tree));
    assert_eq!(store.version(), 2);
}

#[test]
fn store_replace_always_installs() {
    let mut store = LayoutStore::default();
    assert!(store.tree().is_empty());
    assert_eq!(store.replace(sample_layout()), 1);
    assert_eq!(store.tree().len(), 2);
}

#[test]
fn sequential_ids_are_unique() {
    let mut ids = SequentialIds::new("x");
    assert_eq!(ids.next_id(), "x-1");
    assert_eq!(ids.next_id(), "x-2");

    let mut resumed = SequentialIds::starting_at("el", 40);
    assert_eq!(resumed.next_id(), "el-40");
}

#[test]
fn closures_are_id_sources() {
    let mut n = 0;
    let mut ids = || {
        n += 1;
        alloc::format!("uuid-{n}")
    };
    let insert = palette_insert(ElementKind::Input, &mut ids);
    assert_eq!(insert.generated_id, "uuid-1");
    assert_eq!(insert.generated_content, ElementKind::Input.default_content());
}

#[test]
fn drag_between_columns_lists_becomes_column_move() {
    let mut ids = SequentialIds::new("x");
    let event = DragEnd::new(
        DragContainer::Columns { section: 0 },
        DragContainer::Columns { section: 1 },
        1,
        0,
    )
    .into_event(&mut ids)
    .unwrap();
    assert_eq!(
        event,
        ReorderEvent::column(Location::column(0, 1), Location::column(1, 0))
    );

    // Non-palette drags do not consume ids.
    assert_eq!(ids.next_id(), "x-1");
}

#[test]
fn drag_from_palette_inserts_fresh_element() {
    let mut ids = SequentialIds::new("x");
    let mut store = LayoutStore::new(sample_layout());

    let event = DragEnd::from_palette(
        ElementKind::Button,
        DragContainer::Elements {
            section: 1,
            column: 0,
        },
        1,
    )
    .into_event(&mut ids)
    .unwrap();
    assert!(event.is_palette_insert());

    assert_eq!(store.dispatch(&event), DispatchOutcome::Applied { version: 1 });
    let inserted = store.tree().element(1, 0, 1).unwrap();
    assert_eq!(inserted.id, "x-1");
    assert_eq!(inserted.kind, ElementKind::Button);
    assert_eq!(inserted.content, ElementKind::Button.default_content());
    assert_eq!(store.tree().column(1, 0).unwrap().len(), 3);
}

#[test]
fn drag_translation_rejects_inconsistent_containers() {
    let mut ids = SequentialIds::new("x");

    let err = DragEnd::new(
        DragContainer::Sections,
        DragContainer::Columns { section: 0 },
        0,
        0,
    )
    .into_event(&mut ids)
    .unwrap_err();
    assert_eq!(
        err,
        ReorderError::MalformedEvent(Malformed::ContainerMismatch {
            from: "sections",
            to: "columns",
        })
    );

    let err = DragEnd::from_palette(ElementKind::Paragraph, DragContainer::Sections, 0)
        .into_event(&mut ids)
        .unwrap_err();
    assert!(matches!(
        err,
        ReorderError::MalformedEvent(Malformed::ContainerMismatch { from: "palette", .. })
    ));

    let mut missing_kind = DragEnd::from_palette(
        ElementKind::Paragraph,
        DragContainer::Elements {
            section: 0,
            column: 0,
        },
        0,
    );
    missing_kind.palette_kind = None;
    assert_eq!(
        missing_kind.into_event(&mut ids),
        Err(ReorderError::MalformedEvent(Malformed::MissingPaletteKind))
    );

    let err = DragEnd::new(
        DragContainer::Elements {
            section: 0,
            column: 0,
        },
        DragContainer::Palette,
        0,
        0,
    )
    .into_event(&mut ids)
    .unwrap_err();
    assert!(matches!(
        err,
        ReorderError::MalformedEvent(Malformed::ContainerMismatch { to: "palette", .. })
    ));
}

#[test]
fn long_press_fires_once() {
    let mut lp = LongPress::new();
    assert_eq!(lp.press(0), PressEvent::Started);
    assert!(lp.is_pressed());
    assert_eq!(lp.tick(100), None);
    assert_eq!(lp.tick(400), Some(PressEvent::LongPress));
    assert!(lp.is_long_press_active());
    assert_eq!(lp.tick(900), None);
    assert_eq!(lp.release(1000), Some(PressEvent::Finished));
    assert!(!lp.is_pressed());
    assert_eq!(lp.release(1001), None);
}

#[test]
fn short_press_is_cancelled() {
    let mut lp = LongPress::with_threshold_ms(250);
    lp.press(1000);
    assert_eq!(lp.tick(1200), None);
    assert_eq!(lp.release(1200), Some(PressEvent::Cancelled));
    assert!(!lp.is_long_press_active());

    // Held past the threshold, but no tick ever reported the long press.
    lp.press(2000);
    assert_eq!(lp.release(2300), Some(PressEvent::Cancelled));
    assert!(!lp.is_pressed());
}

#[test]
fn release_finishes_only_after_long_press_fired() {
    let mut lp = LongPress::new();
    lp.press(0);
    assert_eq!(lp.release(500), Some(PressEvent::Cancelled));

    lp.press(1000);
    assert_eq!(lp.tick(1400), Some(PressEvent::LongPress));
    assert_eq!(lp.release(1500), Some(PressEvent::Finished));
}

#[test]
fn tween_reaches_target_monotonically() {
    let tween = Tween::new(0.0, -40.0, 100, 1200, Easing::EaseOutCubic);
    let mut last = tween.sample(0);
    assert!(close(last, 0.0));
    for now in (100..=1300).step_by(50) {
        let v = tween.sample(now);
        assert!(v <= last);
        last = v;
    }
    assert!(tween.is_done(1300));
    assert!(close(tween.sample(5000), -40.0));
}

#[test]
fn parallax_drag_moves_and_clamps() {
    let mut track = ParallaxTrack::new();
    assert_eq!(track.sample(0).translate_pct, 0.0);

    // Moving without a press does nothing.
    assert_eq!(track.pointer_move(100.0, 1000.0, 0), None);

    track.pointer_down(500.0);
    assert!(track.is_dragging());
    let next = track.pointer_move(300.0, 1000.0, 0).unwrap();
    assert!(close(next, -40.0));
    assert!(close(track.sample(0).translate_pct, 0.0));
    let frame = track.sample(1200);
    assert!(close(frame.translate_pct, -40.0));
    assert!(close(frame.object_position_pct, 60.0));
    track.pointer_up();

    // The next drag continues from -40 and stops at the ends.
    track.pointer_down(0.0);
    assert!(close(track.pointer_move(-1000.0, 1000.0, 2000).unwrap(), -100.0));
    assert!(close(track.pointer_move(2000.0, 1000.0, 2100).unwrap(), 0.0));
    assert_eq!(track.pointer_move(10.0, 0.0, 2200), None);
    track.pointer_up();
    assert!(!track.is_dragging());
    assert!(close(track.percentage(), 0.0));
}

#[test]
fn parallax_stays_in_bounds() {
    let mut rng = Lcg::new(0x5eed);
    let mut track = ParallaxTrack::new().with_duration_ms(300);
    let mut now = 0u64;

    for _ in 0..200 {
        track.pointer_down(rng.gen_f32(0.0, 1920.0));
        for _ in 0..8 {
            now += rng.next_u64() % 100;
            let width = rng.gen_f32(-10.0, 1920.0);
            if let Some(next) = track.pointer_move(rng.gen_f32(-500.0, 2500.0), width, now) {
                assert!((-100.0..=0.0).contains(&next));
            }
            let frame = track.sample(now);
            assert!((-100.0..=0.0).contains(&frame.translate_pct));
            assert!((0.0..=100.0).contains(&frame.object_position_pct));
        }
        track.pointer_up();
    }
}

use mosaic_adapter::{
    DispatchOutcome, DragContainer, DragEnd, LayoutStore, LongPress, ParallaxTrack,
    SequentialIds, WindowController,
};
use mosaic_layout::{ElementKind, sample_layout};
use mosaic_window::{ColumnBreakpoints, GridOptions, LoadPolicy, LoadStrategy};

fn main() {
    // Example: an adapter replaying UI events against the controllers without any UI objects.
    //
    // An adapter would:
    // - forward scroll/resize/width events to the window controller and mount/unmount the diff
    // - translate sortable drag completions into reorder events for the layout store
    // - feed pointer events and frame timestamps to the gestures
    let mut grid = WindowController::new(GridOptions::gallery())
        .expect("gallery options are valid")
        .with_breakpoints(ColumnBreakpoints::default());
    let policy = LoadPolicy::default();

    grid.on_width(1280).expect("width");
    for (scroll_top, height) in [(0, 800), (1160, 800), (4640, 800), (4650, 800)] {
        grid.on_resize(height).expect("height");
        match grid.on_scroll(scroll_top).expect("scroll") {
            Some(diff) => {
                let eager = diff
                    .mounted
                    .iter()
                    .filter(|&i| policy.strategy(i) == LoadStrategy::Eager)
                    .count();
                println!(
                    "scroll_top={scroll_top} range={:?} mount={} unmount={} eager={eager}",
                    grid.range(),
                    diff.mounted.len(),
                    diff.unmounted.len(),
                );
            }
            None => println!("scroll_top={scroll_top} unchanged"),
        }
    }
    if let Some(diff) = grid.on_width(600).expect("width") {
        println!("narrow: range={:?} mount={}", grid.range(), diff.mounted.len());
    }

    let mut store = LayoutStore::new(sample_layout());
    let mut ids = SequentialIds::new("el");
    let drags = [
        DragEnd::new(DragContainer::Sections, DragContainer::Sections, 0, 1),
        DragEnd::from_palette(
            ElementKind::Input,
            DragContainer::Elements {
                section: 0,
                column: 1,
            },
            0,
        ),
        DragEnd::new(
            DragContainer::Sections,
            DragContainer::Columns { section: 0 },
            0,
            0,
        ),
    ];
    for drag in drags {
        match drag.into_event(&mut ids) {
            Ok(event) => match store.dispatch(&event) {
                DispatchOutcome::Applied { version } => println!("applied -> v{version}"),
                DispatchOutcome::Unchanged => println!("unchanged"),
                DispatchOutcome::Ignored(err) => println!("ignored: {err}"),
            },
            Err(err) => println!("rejected drag: {err}"),
        }
    }

    let mut press = LongPress::new();
    press.press(0);
    for now_ms in (0..=600).step_by(100) {
        if let Some(event) = press.tick(now_ms) {
            println!("t={now_ms} {event:?}");
        }
    }
    println!("release: {:?}", press.release(650));

    let mut track = ParallaxTrack::new();
    track.pointer_down(900.0);
    track.pointer_move(400.0, 1440.0, 0);
    track.pointer_up();
    for now_ms in (0..=1200).step_by(300) {
        let frame = track.sample(now_ms);
        println!(
            "t={now_ms} translate={:.1}% object_position={:.1}%",
            frame.translate_pct, frame.object_position_pct
        );
    }
}

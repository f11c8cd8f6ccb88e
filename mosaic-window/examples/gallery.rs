// Example: windowing a 500-image gallery while the user scrolls.
use mosaic_window::{
    ColumnBreakpoints, GridOptions, GridWindow, LoadPolicy, RangeDiff, Viewport, VisibleRange,
};

fn main() {
    let columns = ColumnBreakpoints::default().columns_for_width(1280);
    let window = GridWindow::new(GridOptions::gallery().with_columns_per_row(columns))
        .expect("gallery preset is valid");
    let policy = LoadPolicy::default();
    println!("content_height={}px", window.content_height_px());

    let mut mounted = VisibleRange::EMPTY;
    for scroll_top in [0, 400, 1_600, 6_000, -80] {
        let next = window
            .visible_range(Viewport::new(scroll_top, 800))
            .expect("viewport height is non-negative");
        let diff = RangeDiff::between(mounted, next);
        println!(
            "scroll_top={scroll_top} range={:?} +{} -{}",
            next.indices(),
            diff.mounted.len(),
            diff.unmounted.len()
        );
        mounted = next;
    }

    window.for_each_placement(VisibleRange::new(0, 4), |p| {
        println!(
            "item {} -> row {} col {} top {}px load={:?} priority={}",
            p.index,
            p.row,
            p.column,
            p.top_px,
            policy.strategy(p.index),
            policy.is_priority(p.index)
        );
    });
}

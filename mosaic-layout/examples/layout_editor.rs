// Example: replaying a layout editing session against the seed page.
use mosaic_layout::{ElementKind, Location, PaletteInsert, ReorderEvent, sample_layout};

fn print_tree(tree: &mosaic_layout::LayoutTree) {
    for section in tree.sections() {
        println!("section {}", section.id);
        for column in section.columns() {
            let ids: Vec<&str> = column.elements().iter().map(|e| e.id.as_str()).collect();
            println!("  column {} {:?}", column.id, ids);
        }
    }
}

fn main() {
    let mut tree = sample_layout();
    let session = [
        ReorderEvent::section(0, 1),
        ReorderEvent::column(Location::column(1, 1), Location::column(0, 0)),
        ReorderEvent::element(Location::element(0, 0, 0), Location::element(0, 1, 2)),
        ReorderEvent::palette(
            PaletteInsert::with_default_content(ElementKind::Button, "palette-1"),
            Location::element(1, 0, 0),
        ),
        // Stale coordinates: rejected, tree left as it was.
        ReorderEvent::element(Location::element(7, 0, 0), Location::element(0, 0, 0)),
    ];

    for event in &session {
        match tree.apply(event) {
            Ok(next) => tree = next,
            Err(err) => println!("ignored drag: {err}"),
        }
    }
    print_tree(&tree);
}

use crate::{Column, Element, ElementKind, LayoutTree, Section};

/// The layout editor's starting page: two sections, each with two columns of two elements.
pub fn sample_layout() -> LayoutTree {
    ["1", "2"].into_iter().map(sample_section).collect()
}

fn sample_section(id: &str) -> Section {
    let first = alloc::format!("{id}-1");
    let second = alloc::format!("{id}-2");
    Section::new(
        id,
        [
            Column::new(
                first.as_str(),
                [
                    Element::new(
                        alloc::format!("{first}-1"),
                        ElementKind::Paragraph,
                        "This is a sample paragraph.",
                    ),
                    Element::new(
                        alloc::format!("{first}-2"),
                        ElementKind::Button,
                        "Click me!",
                    ),
                ],
            ),
            Column::new(
                second.as_str(),
                [
                    Element::new(
                        alloc::format!("{second}-1"),
                        ElementKind::Input,
                        "Enter text here",
                    ),
                    Element::new(
                        alloc::format!("{second}-2"),
                        ElementKind::Paragraph,
                        "Another sample paragraph.",
                    ),
                ],
            ),
        ],
    )
}

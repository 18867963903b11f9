//! Documentation entries and shared content for icon components
//!
//! Icon pages share one guidance section, the way every icon's docs page
//! repeats the same sizing and tone material. Each icon entry passes its
//! own demonstration function in.

use crate::documentation::demo::{element, DemoNode, ExampleFn};
use crate::documentation::richtext::{strong, text, RichText};
use crate::documentation::traits::{DocSection, DocumentedComponent};

/// Shared guidance section included by every icon entry
pub fn icon_guidance(example: ExampleFn) -> DocSection {
    DocSection::new(
        "Icon sizing and tone",
        RichText::paragraph(vec![text(
            "Icons inherit their size and tone from the enclosing text or heading context, keeping them aligned with the surrounding content by default.",
        )])
        .and_paragraph(vec![
            text("When used standalone, set the "),
            strong("size"),
            text(" and "),
            strong("tone"),
            text(" props directly."),
        ]),
    )
    .example(example)
}

/// Documentation for the IconEdit component
pub struct IconEditDocs;

fn icon_edit_example() -> DemoNode {
    element("Stack")
        .prop("space", "none")
        .prop("align", "center")
        .child(
            element("Heading")
                .prop("component", "div")
                .prop("level", "1")
                .child(element("IconEdit")),
        )
        .into()
}

fn icon_edit_guidance_example() -> DemoNode {
    element("Stack")
        .prop("space", "small")
        .child(element("IconEdit").prop("size", "large"))
        .child(element("IconEdit").prop("tone", "positive"))
        .into()
}

impl DocumentedComponent for IconEditDocs {
    fn name() -> &'static str {
        "IconEdit"
    }

    fn category() -> &'static str {
        "Icon"
    }

    fn migration_guide() -> bool {
        true
    }

    fn example() -> DemoNode {
        icon_edit_example()
    }

    fn additional() -> Vec<DocSection> {
        vec![icon_guidance(icon_edit_guidance_example)]
    }
}

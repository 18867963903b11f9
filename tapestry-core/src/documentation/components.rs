//! Documentation entries for the layout components

use crate::documentation::demo::{element, DemoNode};
use crate::documentation::richtext::{link, strong, text, RichText};
use crate::documentation::traits::{Alternative, DocSection, DocumentedComponent};

/// Screen gutter tokens applied by PageBlock at each breakpoint
pub struct Gutters {
    pub mobile: &'static str,
    pub tablet: &'static str,
}

pub const GUTTERS: Gutters = Gutters {
    mobile: "small",
    tablet: "gutter",
};

/// Container tags accepted by PageBlock's `component` prop
pub const VALID_CONTAINER_COMPONENTS: &[&str] = &["div", "article", "aside", "main", "section"];

/// Documentation for the PageBlock component
pub struct PageBlockDocs;

/// Documentation for the ContentBlock component
pub struct ContentBlockDocs;

fn page_block_example() -> DemoNode {
    element("PageBlock")
        .prop("width", "medium")
        .child(element("Placeholder").prop("height", 100))
        .into()
}

fn max_width_example() -> DemoNode {
    element("PageBlock")
        .prop("width", "medium")
        .child(element("Placeholder").prop("height", 100))
        .into()
}

fn gutters_example() -> DemoNode {
    element("Box")
        .prop("background", "formAccent")
        .child(
            element("PageBlock").prop("width", "medium").child(
                element("Box")
                    .prop("background", "surface")
                    .child(element("Placeholder").prop("height", 100)),
            ),
        )
        .into()
}

fn custom_semantics_description() -> RichText {
    let mut inlines = vec![
        text("The rendered HTML tag can be customised to keep the underlying document semantics meaningful. Set the "),
        strong("component"),
        text(" prop to one of "),
    ];
    let last = VALID_CONTAINER_COMPONENTS.len() - 1;
    for (i, component) in VALID_CONTAINER_COMPONENTS.iter().enumerate() {
        inlines.push(strong(*component));
        if *component == "div" {
            inlines.push(text(" (default)"));
        }
        if i + 1 < last {
            inlines.push(text(", "));
        } else if i + 1 == last {
            inlines.push(text(" and "));
        } else {
            inlines.push(text("."));
        }
    }
    RichText::paragraph(inlines)
}

impl DocumentedComponent for PageBlockDocs {
    fn name() -> &'static str {
        "PageBlock"
    }

    fn category() -> &'static str {
        "Layout"
    }

    fn migration_guide() -> bool {
        true
    }

    fn description() -> Option<RichText> {
        Some(RichText::paragraph(vec![
            text("Provides a top-level page container, constraining the content width (using "),
            link("ContentBlock", "/components/ContentBlock"),
            text(") while establishing common screen gutters on smaller devices."),
        ]))
    }

    fn example() -> DemoNode {
        page_block_example()
    }

    fn alternatives() -> Vec<Alternative> {
        vec![Alternative::new(
            "ContentBlock",
            "For controlled width layout blocks",
        )]
    }

    fn additional() -> Vec<DocSection> {
        vec![
            DocSection::new(
                "Maximum width",
                RichText::paragraph(vec![
                    text("Use the "),
                    strong("width"),
                    text(" prop to adjust the maximum width of the page container. Choose from either "),
                    strong("medium"),
                    text(" or "),
                    strong("large"),
                    text("."),
                ]),
            )
            .example(max_width_example),
            DocSection::new(
                "Screen gutters",
                RichText::paragraph(vec![text(
                    "Establishes consistent responsive gutters between the content and the screen edge.",
                )])
                .and_paragraph(vec![
                    text("Uses "),
                    strong(GUTTERS.mobile),
                    text(" space on "),
                    link("mobile", "/foundations/breakpoints"),
                    text(" and the semantic "),
                    strong(GUTTERS.tablet),
                    text(" on "),
                    link("tablet", "/foundations/breakpoints"),
                    text(" and above."),
                ]),
            )
            .playroom(false)
            .code(false)
            .example(gutters_example),
            DocSection::new("Custom semantics", custom_semantics_description()),
        ]
    }
}

fn content_block_example() -> DemoNode {
    element("ContentBlock")
        .prop("width", "medium")
        .child(element("Placeholder").prop("height", 100))
        .into()
}

fn content_block_width_example() -> DemoNode {
    element("ContentBlock")
        .prop("width", "large")
        .child(element("Placeholder").prop("height", 100))
        .into()
}

impl DocumentedComponent for ContentBlockDocs {
    fn name() -> &'static str {
        "ContentBlock"
    }

    fn category() -> &'static str {
        "Layout"
    }

    fn description() -> Option<RichText> {
        Some(RichText::paragraph(vec![
            text("Provides a container constrained to a maximum width and centred horizontally. Unlike "),
            link("PageBlock", "/components/PageBlock"),
            text(", no screen gutters are applied."),
        ]))
    }

    fn example() -> DemoNode {
        content_block_example()
    }

    fn alternatives() -> Vec<Alternative> {
        vec![Alternative::new(
            "PageBlock",
            "For page-level containers with responsive screen gutters",
        )]
    }

    fn additional() -> Vec<DocSection> {
        vec![DocSection::new(
            "Maximum width",
            RichText::paragraph(vec![
                text("Use the "),
                strong("width"),
                text(" prop to adjust the maximum width of the container."),
            ]),
        )
        .example(content_block_width_example)]
    }
}

//! Markdown rendering for documentation pages
//!
//! Pure functions from documentation entries to page text. File layout and
//! writing live in the generator.

use tapestry_core::documentation::{ComponentDocs, DocsRegistry, Inline, RichText};

use crate::source;

/// Renders one inline node
fn inline(node: &Inline) -> String {
    match node {
        Inline::Text(s) => s.clone(),
        Inline::Strong(s) => format!("**{}**", s),
        Inline::Link { label, href } => format!("[{}]({})", label, href),
    }
}

/// Renders rich text as Markdown paragraphs
pub fn rich_text(content: &RichText) -> String {
    content
        .paragraphs
        .iter()
        .map(|paragraph| paragraph.iter().map(inline).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn code_block(out: &mut String, source_text: &str) {
    out.push_str("```\n");
    out.push_str(source_text);
    out.push_str("\n```\n\n");
}

fn playground_link(out: &mut String, component: &str) {
    out.push_str(&format!(
        "[Open in playground](/playroom?component={})\n\n",
        component
    ));
}

/// Renders a full component documentation page
pub fn component_page(docs: &ComponentDocs) -> String {
    let mut page = format!("# {}\n\n", docs.name);
    page.push_str(&format!("Category: {}\n\n", docs.category));

    if docs.migration_guide {
        page.push_str("A migration guide is available for this component.\n\n");
    }

    if let Some(description) = &docs.description {
        page.push_str(&rich_text(description));
        page.push_str("\n\n");
    }

    page.push_str("## Example\n\n");
    code_block(&mut page, &source::extract(&(docs.example)()));
    playground_link(&mut page, &docs.name);

    if !docs.alternatives.is_empty() {
        page.push_str("## Alternatives\n\n");
        for alternative in &docs.alternatives {
            page.push_str(&format!(
                "- [{}](/components/{}): {}\n",
                alternative.name, alternative.name, alternative.description
            ));
        }
        page.push('\n');
    }

    for section in &docs.additional {
        page.push_str(&format!("## {}\n\n", section.label));
        page.push_str(&rich_text(&section.description));
        page.push_str("\n\n");

        if let Some(example) = section.example {
            if section.code {
                code_block(&mut page, &source::extract(&example()));
            }
            if section.playroom {
                playground_link(&mut page, &docs.name);
            }
        }
    }

    page
}

/// Renders the category index page
pub fn category_index(title: &str, registry: &DocsRegistry) -> String {
    let mut page = format!("# {}\n\n", title);
    for category in registry.categories() {
        page.push_str(&format!("## {}\n\n", category));
        for docs in registry.list_category(category) {
            page.push_str(&format!("- [{}](components/{}.md)\n", docs.name, docs.name));
        }
        page.push('\n');
    }
    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use tapestry_core::documentation::components::PageBlockDocs;
    use tapestry_core::documentation::icons::IconEditDocs;
    use tapestry_core::documentation::richtext::{link, strong, text};
    use tapestry_core::documentation::{DocsRegistry, DocumentedComponent};

    #[test]
    fn test_rich_text_rendering() {
        let content = RichText::paragraph(vec![
            text("Use the "),
            strong("width"),
            text(" prop, see "),
            link("ContentBlock", "/components/ContentBlock"),
            text("."),
        ]);
        assert_eq!(
            rich_text(&content),
            "Use the **width** prop, see [ContentBlock](/components/ContentBlock)."
        );
    }

    #[test]
    fn test_component_page_structure() {
        let page = component_page(&PageBlockDocs::docs());

        assert!(page.starts_with("# PageBlock\n"));
        assert!(page.contains("Category: Layout"));
        assert!(page.contains("A migration guide is available"));
        assert!(page.contains("## Example"));
        assert!(page.contains("## Alternatives"));
        assert!(page.contains("## Maximum width"));
        assert!(page.contains("## Screen gutters"));
        assert!(page.contains("## Custom semantics"));
        assert!(page.contains("<PageBlock width=\"medium\">"));
    }

    #[test]
    fn test_section_flags_suppress_views() {
        let page = component_page(&PageBlockDocs::docs());

        // Code fences: top example plus "Maximum width" only. The
        // "Screen gutters" section disables both views and "Custom
        // semantics" has no example.
        let fences = page.matches("```").count();
        assert_eq!(fences, 4);

        let playground_links = page.matches("[Open in playground]").count();
        assert_eq!(playground_links, 2);
    }

    #[test]
    fn test_page_without_description() {
        let page = component_page(&IconEditDocs::docs());
        assert!(page.starts_with("# IconEdit\n"));
        assert!(page.contains("## Icon sizing and tone"));
    }

    #[test]
    fn test_category_index_order() {
        let registry = DocsRegistry::with_components().unwrap();
        let page = category_index("Tapestry", &registry);

        assert!(page.starts_with("# Tapestry\n"));
        let layout = page.find("## Layout").unwrap();
        let icon = page.find("## Icon\n").unwrap();
        assert!(layout < icon);

        let page_block = page.find("[PageBlock]").unwrap();
        let content_block = page.find("[ContentBlock]").unwrap();
        assert!(page_block < content_block);
    }
}

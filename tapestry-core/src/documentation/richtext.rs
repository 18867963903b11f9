//! Rich-text model for documentation prose
//!
//! Descriptions are ordered paragraphs of inline nodes. Rendering to an
//! output format is a consumer concern; this module only carries the data.

use serde::{Deserialize, Serialize};

/// A single inline node within a paragraph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Inline {
    /// Plain text run
    Text(String),
    /// Emphasised text run
    Strong(String),
    /// Link with a visible label
    Link { label: String, href: String },
}

/// Ordered paragraphs of inline content
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichText {
    pub paragraphs: Vec<Vec<Inline>>,
}

impl RichText {
    /// Creates empty rich text
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates rich text with a single paragraph
    pub fn paragraph(inlines: Vec<Inline>) -> Self {
        Self {
            paragraphs: vec![inlines],
        }
    }

    /// Appends another paragraph, builder style
    pub fn and_paragraph(mut self, inlines: Vec<Inline>) -> Self {
        self.paragraphs.push(inlines);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.iter().all(|p| p.is_empty())
    }

    /// Flattens the content to plain text, used for search
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for paragraph in &self.paragraphs {
            if !out.is_empty() {
                out.push(' ');
            }
            for inline in paragraph {
                match inline {
                    Inline::Text(s) | Inline::Strong(s) => out.push_str(s),
                    Inline::Link { label, .. } => out.push_str(label),
                }
            }
        }
        out
    }
}

/// Creates a plain text node
pub fn text(s: impl Into<String>) -> Inline {
    Inline::Text(s.into())
}

/// Creates an emphasised text node
pub fn strong(s: impl Into<String>) -> Inline {
    Inline::Strong(s.into())
}

/// Creates a link node
pub fn link(label: impl Into<String>, href: impl Into<String>) -> Inline {
    Inline::Link {
        label: label.into(),
        href: href.into(),
    }
}

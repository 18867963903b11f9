//! Documentation traits and types for Tapestry components

use serde::{Deserialize, Serialize};

use crate::documentation::demo::{DemoNode, ExampleFn};
use crate::documentation::richtext::RichText;
use crate::error::{Error, Result};

/// A related component suggested alongside an entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternative {
    /// Name of the related component
    pub name: String,
    /// Why a reader might reach for it instead
    pub description: String,
}

impl Alternative {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A sub-block of additional documentation content
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocSection {
    /// Section heading
    pub label: String,
    /// Section prose
    pub description: RichText,
    /// Optional demonstration for this section
    #[serde(skip)]
    pub example: Option<ExampleFn>,
    /// Whether the interactive playground view is shown
    pub playroom: bool,
    /// Whether the extracted source view is shown
    pub code: bool,
}

impl DocSection {
    /// Creates a section with both views enabled
    pub fn new(label: impl Into<String>, description: RichText) -> Self {
        Self {
            label: label.into(),
            description,
            example: None,
            playroom: true,
            code: true,
        }
    }

    pub fn example(mut self, example: ExampleFn) -> Self {
        self.example = Some(example);
        self
    }

    pub fn playroom(mut self, playroom: bool) -> Self {
        self.playroom = playroom;
        self
    }

    pub fn code(mut self, code: bool) -> Self {
        self.code = code;
        self
    }
}

/// Documentation record for one design-system component
///
/// Entries are authored statically, registered once during the site build
/// pass, and treated as immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentDocs {
    /// Component name, the registry key
    pub name: String,
    /// Category label grouping entries (e.g. "Layout", "Icon")
    pub category: String,
    /// Whether a migration guide exists elsewhere
    pub migration_guide: bool,
    /// Lead prose for the component page
    pub description: Option<RichText>,
    /// Primary demonstration
    #[serde(skip)]
    pub example: ExampleFn,
    /// Related components, in listed order
    pub alternatives: Vec<Alternative>,
    /// Additional sections, rendered in listed order
    pub additional: Vec<DocSection>,
}

impl ComponentDocs {
    /// Starts building an entry for out-of-tree components
    pub fn builder(name: impl Into<String>) -> DocsBuilder {
        DocsBuilder {
            name: name.into(),
            category: String::new(),
            migration_guide: false,
            description: None,
            example: None,
            alternatives: Vec::new(),
            additional: Vec::new(),
        }
    }

    /// Checks the required-field invariants, naming the missing field
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::SchemaViolation {
                entry: self.name.clone(),
                field: "name",
            });
        }
        if self.category.trim().is_empty() {
            return Err(Error::SchemaViolation {
                entry: self.name.clone(),
                field: "category",
            });
        }
        Ok(())
    }
}

/// Builder for [`ComponentDocs`]
///
/// `build` fails with a schema violation rather than producing an entry
/// missing its category or example.
pub struct DocsBuilder {
    name: String,
    category: String,
    migration_guide: bool,
    description: Option<RichText>,
    example: Option<ExampleFn>,
    alternatives: Vec<Alternative>,
    additional: Vec<DocSection>,
}

impl DocsBuilder {
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn migration_guide(mut self, migration_guide: bool) -> Self {
        self.migration_guide = migration_guide;
        self
    }

    pub fn description(mut self, description: RichText) -> Self {
        self.description = Some(description);
        self
    }

    pub fn example(mut self, example: ExampleFn) -> Self {
        self.example = Some(example);
        self
    }

    pub fn alternative(mut self, alternative: Alternative) -> Self {
        self.alternatives.push(alternative);
        self
    }

    pub fn section(mut self, section: DocSection) -> Self {
        self.additional.push(section);
        self
    }

    pub fn build(self) -> Result<ComponentDocs> {
        let example = self.example.ok_or_else(|| Error::SchemaViolation {
            entry: self.name.clone(),
            field: "example",
        })?;
        let docs = ComponentDocs {
            name: self.name,
            category: self.category,
            migration_guide: self.migration_guide,
            description: self.description,
            example,
            alternatives: self.alternatives,
            additional: self.additional,
        };
        docs.validate()?;
        Ok(docs)
    }
}

/// Trait implemented by every built-in component's documentation marker
pub trait DocumentedComponent {
    /// Returns the component name
    fn name() -> &'static str;

    /// Returns the category label
    fn category() -> &'static str;

    /// Returns whether a migration guide exists (defaults to false)
    fn migration_guide() -> bool {
        false
    }

    /// Returns the lead description (defaults to none)
    fn description() -> Option<RichText> {
        None
    }

    /// Returns the primary demonstration snippet
    fn example() -> DemoNode;

    /// Returns related components (defaults to empty)
    fn alternatives() -> Vec<Alternative> {
        Vec::new()
    }

    /// Returns additional sections (defaults to empty)
    fn additional() -> Vec<DocSection> {
        Vec::new()
    }

    /// Builds the complete entry
    fn docs() -> ComponentDocs
    where
        Self: Sized,
    {
        ComponentDocs {
            name: Self::name().to_string(),
            category: Self::category().to_string(),
            migration_guide: Self::migration_guide(),
            description: Self::description(),
            example: Self::example,
            alternatives: Self::alternatives(),
            additional: Self::additional(),
        }
    }
}

//! Documentation entry registry
//!
//! Populated sequentially during the site build pass, read-only afterwards.
//! Registering the same component name twice is an error.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::documentation::components::{ContentBlockDocs, PageBlockDocs};
use crate::documentation::icons::IconEditDocs;
use crate::documentation::traits::{ComponentDocs, DocumentedComponent};
use crate::error::{Error, Result};

/// Registry mapping component names to documentation entries
pub struct DocsRegistry {
    /// Entries in registration order
    entries: Vec<ComponentDocs>,
    index: FxHashMap<String, usize>,
}

impl DocsRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Creates a registry pre-populated with every built-in component entry
    pub fn with_components() -> Result<Self> {
        let mut registry = Self::new();
        registry.register_all()?;
        Ok(registry)
    }

    /// Registers all built-in component docs
    fn register_all(&mut self) -> Result<()> {
        // Layout
        self.register_component::<PageBlockDocs>()?;
        self.register_component::<ContentBlockDocs>()?;

        // Icons
        self.register_component::<IconEditDocs>()?;

        Ok(())
    }

    /// Registers a single built-in component
    pub fn register_component<T: DocumentedComponent>(&mut self) -> Result<()> {
        self.register(T::docs())
    }

    /// Stores an entry, validating it first
    pub fn register(&mut self, docs: ComponentDocs) -> Result<()> {
        docs.validate()?;
        if self.index.contains_key(&docs.name) {
            return Err(Error::DuplicateEntry(docs.name));
        }
        debug!(component = %docs.name, category = %docs.category, "registered documentation entry");
        self.index.insert(docs.name.clone(), self.entries.len());
        self.entries.push(docs);
        Ok(())
    }

    /// Get an entry by component name
    pub fn get(&self, name: &str) -> Option<&ComponentDocs> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    /// Get an entry by component name, failing if none is registered
    pub fn lookup(&self, name: &str) -> Result<&ComponentDocs> {
        self.get(name)
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    /// Iterates over all entries in registration order
    pub fn list(&self) -> impl Iterator<Item = &ComponentDocs> {
        self.entries.iter()
    }

    /// Iterates over entries of one category, preserving registration order
    pub fn list_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a ComponentDocs> + 'a {
        self.entries.iter().filter(move |docs| docs.category == category)
    }

    /// Distinct categories in first-seen order
    pub fn categories(&self) -> Vec<&str> {
        let mut categories = Vec::new();
        for docs in &self.entries {
            if !categories.contains(&docs.category.as_str()) {
                categories.push(docs.category.as_str());
            }
        }
        categories
    }

    /// Case-insensitive substring search over names, categories and prose
    pub fn search(&self, query: &str) -> Vec<&ComponentDocs> {
        let query = query.to_lowercase();
        self.entries
            .iter()
            .filter(|docs| {
                docs.name.to_lowercase().contains(&query)
                    || docs.category.to_lowercase().contains(&query)
                    || docs
                        .description
                        .as_ref()
                        .is_some_and(|d| d.plain_text().to_lowercase().contains(&query))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for DocsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

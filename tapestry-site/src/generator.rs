//! Site tree generation
//!
//! Walks the registry in registration order and writes the static site:
//! a category index, one Markdown page per component, and a JSON manifest
//! for external tooling. Any failure aborts the build.

use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info};

use tapestry_core::documentation::{ComponentDocs, DocsRegistry};
use tapestry_core::Result;

use crate::markdown;

#[derive(Serialize)]
struct Manifest<'a> {
    title: &'a str,
    components: Vec<&'a ComponentDocs>,
}

/// Writes a documentation site tree for a frozen registry
pub struct SiteGenerator<'a> {
    registry: &'a DocsRegistry,
    title: String,
    output: PathBuf,
}

impl<'a> SiteGenerator<'a> {
    pub fn new(registry: &'a DocsRegistry, title: impl Into<String>, output: impl Into<PathBuf>) -> Self {
        Self {
            registry,
            title: title.into(),
            output: output.into(),
        }
    }

    /// Generates the full site tree under the output directory
    pub fn build(&self) -> Result<()> {
        let components_dir = self.output.join("components");
        fs::create_dir_all(&components_dir)?;

        fs::write(
            self.output.join("index.md"),
            markdown::category_index(&self.title, self.registry),
        )?;

        for docs in self.registry.list() {
            let path = components_dir.join(format!("{}.md", docs.name));
            fs::write(&path, markdown::component_page(docs))?;
            debug!(component = %docs.name, path = %path.display(), "wrote component page");
        }

        let manifest = Manifest {
            title: &self.title,
            components: self.registry.list().collect(),
        };
        let json = serde_json::to_string_pretty(&manifest).map_err(anyhow::Error::from)?;
        fs::write(self.output.join("manifest.json"), json)?;

        info!(
            components = self.registry.len(),
            output = %self.output.display(),
            "documentation site generated"
        );
        Ok(())
    }
}

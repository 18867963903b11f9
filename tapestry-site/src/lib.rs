//! Static documentation site generation for the Tapestry design system
//!
//! This crate is the rendering collaborator of `tapestry-core`: it turns
//! registered documentation entries into a static site tree of Markdown
//! pages, extracted example source, and a JSON manifest.

pub mod generator;
pub mod markdown;
pub mod source;

pub use generator::SiteGenerator;

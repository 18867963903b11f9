//! Documentation system for the Tapestry design system

pub mod components;
pub mod demo;
pub mod icons;
pub mod registry;
pub mod richtext;
pub mod traits;


pub use demo::{element, DemoElement, DemoNode, ExampleFn, PropValue};
pub use registry::DocsRegistry;
pub use richtext::{Inline, RichText};
pub use traits::{Alternative, ComponentDocs, DocSection, DocsBuilder, DocumentedComponent};

//! Demonstration snippet model
//!
//! Every documented component carries at least one example, authored as a
//! zero-argument function producing a [`DemoNode`] tree. The same tree is
//! rendered for live display and extracted as source text, so example
//! functions must be pure: plain `fn` pointers cannot capture state, and
//! two invocations must produce structurally identical trees.

use serde::{Deserialize, Serialize};

/// A zero-argument producer of a demonstration snippet
pub type ExampleFn = fn() -> DemoNode;

/// Value of a component prop within a demo snippet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropValue {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Str(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Str(value)
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        PropValue::Int(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        PropValue::Int(value as i64)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

/// A component element in a demo snippet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoElement {
    pub component: String,
    /// Props in authored order
    pub props: Vec<(String, PropValue)>,
    pub children: Vec<DemoNode>,
}

impl DemoElement {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            props: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Appends a prop, builder style
    pub fn prop(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.push((name.into(), value.into()));
        self
    }

    /// Appends a child node, builder style
    pub fn child(mut self, node: impl Into<DemoNode>) -> Self {
        self.children.push(node.into());
        self
    }
}

/// One node of a demo snippet tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemoNode {
    Element(DemoElement),
    Text(String),
}

impl From<DemoElement> for DemoNode {
    fn from(element: DemoElement) -> Self {
        DemoNode::Element(element)
    }
}

impl From<&str> for DemoNode {
    fn from(text: &str) -> Self {
        DemoNode::Text(text.to_string())
    }
}

/// Starts a demo element, the usual entry point when authoring examples
pub fn element(component: impl Into<String>) -> DemoElement {
    DemoElement::new(component)
}

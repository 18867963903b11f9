//! Core types and data structures for the Tapestry documentation toolchain
//!
//! This crate provides the fundamental building blocks used throughout
//! the Tapestry docs pipeline, including:
//! - The component documentation model
//! - Rich-text and demo-snippet representation
//! - The documentation entry registry
//! - Error types

pub mod documentation;
pub mod error;

pub use error::{Error, Result};

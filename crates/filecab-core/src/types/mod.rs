//! Core type definitions used across the FileCab workspace.

pub mod document;
pub mod filter;
pub mod id;

pub use document::Document;
pub use filter::Filter;
pub use id::*;

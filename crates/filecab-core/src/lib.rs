//! # filecab-core
//!
//! Core crate for FileCab. Contains the document store trait, configuration
//! schemas, typed identifiers, document/filter types, and the unified error
//! system.
//!
//! This crate has **no** internal dependencies on other FileCab crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;

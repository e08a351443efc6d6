//! # filecab-entity
//!
//! Domain entity models for FileCab: file and folder records, the hierarchy
//! level enum, and the record kind discriminator shared by validation.

pub mod file;
pub mod folder;
pub mod kind;
pub mod level;

pub use file::{CreateFile, File};
pub use folder::{CreateFolder, Folder};
pub use kind::RecordKind;
pub use level::Level;

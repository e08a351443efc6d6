//! Folder management service.

pub mod service;

pub use service::{FolderContents, FolderService};

//! # filecab-service
//!
//! Business logic service layer for FileCab. Each service orchestrates the
//! hierarchy validator and typed repositories to implement application-level
//! use cases.
//!
//! Services follow constructor injection: all dependencies are provided at
//! construction time via `Arc` references.

pub mod file;
pub mod folder;
pub mod hierarchy;

pub use file::FileService;
pub use folder::{FolderContents, FolderService};
pub use hierarchy::{HierarchyValidator, NewRecord, RecordDraft};

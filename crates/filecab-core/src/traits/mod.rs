//! Core traits defined in `filecab-core` and implemented by other crates.

pub mod store;

pub use store::DocumentStore;

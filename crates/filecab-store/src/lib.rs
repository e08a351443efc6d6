//! Store backends and typed repositories for FileCab.
//!
//! The [`StoreManager`] selects a [`DocumentStore`](filecab_core::traits::DocumentStore)
//! backend from configuration. Repositories in [`repositories`] wrap the store
//! with entity-aware queries for folders and files.

pub mod memory;
pub mod migration;
pub mod postgres;
pub mod provider;
pub mod repositories;

pub use provider::StoreManager;

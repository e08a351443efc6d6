//! PostgreSQL document store.

pub mod store;

pub use store::PostgresDocumentStore;

//! File metadata management service.

pub mod service;

pub use service::FileService;

//! End-to-end HTTP tests driven through the full router over the in-memory
//! store provider.

mod helpers;

mod file_test;
mod folder_test;

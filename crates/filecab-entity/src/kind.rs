//! Record kind discriminator.

use std::fmt;

/// The two record kinds managed by the service.
///
/// Files and folders share the same document shape; validation uses the
/// kind to pick the collection to probe and to word user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// A file metadata record.
    File,
    /// A folder record.
    Folder,
}

impl RecordKind {
    /// Lowercase label used in user-facing messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Folder => "folder",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

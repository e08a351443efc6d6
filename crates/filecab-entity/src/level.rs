//! Hierarchy level enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Position of a record in the two-level hierarchy.
///
/// Root records have no parent; child records always reference a parent
/// folder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Top-level record with no parent.
    #[default]
    Root,
    /// Record nested directly under a parent folder.
    Child,
}

impl Level {
    /// Return the level as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::Child => "child",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Level {
    type Err = filecab_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "root" => Ok(Self::Root),
            "child" => Ok(Self::Child),
            _ => Err(filecab_core::AppError::validation(
                "level can only be root or child",
            )),
        }
    }
}

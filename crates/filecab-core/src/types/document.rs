//! The generic document envelope returned by every store backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single stored document.
///
/// The store assigns `id`, `created_at`, and `updated_at`; the caller owns
/// the shape of `fields`. Typed entity models are converted from this
/// envelope with `TryFrom<Document>` impls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Document {
    /// Store-assigned unique identifier.
    pub id: Uuid,
    /// The document body as a JSON object.
    pub fields: serde_json::Value,
    /// When the document was inserted.
    pub created_at: DateTime<Utc>,
    /// When the document was last updated.
    pub updated_at: DateTime<Utc>,
}

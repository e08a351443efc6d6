//! Equality filters for document store queries.

use std::collections::BTreeMap;

use serde_json::Value;
use uuid::Uuid;

use crate::types::document::Document;

/// A conjunction of equality conditions on a document.
///
/// Supports matching on the document id and on top-level members of the
/// `fields` object, including explicit-null matching. Field order is kept
/// stable (BTreeMap) so that SQL generation is deterministic.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    /// Match on the store-assigned document id.
    pub id: Option<Uuid>,
    /// Field name to expected value. `Value::Null` requires the field to be
    /// present and null.
    pub fields: BTreeMap<String, Value>,
}

impl Filter {
    /// Create an empty filter that matches every document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filter matching a single document by id.
    pub fn by_id(id: Uuid) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    /// Add an equality condition on a field.
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Whether this filter has no conditions at all.
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.fields.is_empty()
    }

    /// Evaluate the filter against a document.
    pub fn matches(&self, doc: &Document) -> bool {
        if let Some(id) = self.id {
            if doc.id != id {
                return false;
            }
        }

        self.fields
            .iter()
            .all(|(field, expected)| doc.fields.get(field) == Some(expected))
    }
}

//! Frontend Models
//!
//! Data structures for the item list.

use std::fmt;

use chrono::Utc;
use uuid::Uuid;

/// Session-unique item identifier, used as the list rendering key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Fresh random (v4) identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Item data structure
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    /// Creation time, milliseconds since the Unix epoch
    pub timestamp: i64,
    pub text: String,
}

impl Item {
    /// Build a new item stamped with a fresh id and the current time.
    /// The text is kept as given, empty included.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            timestamp: Utc::now().timestamp_millis(),
            text: text.into(),
        }
    }
}

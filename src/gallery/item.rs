// SPDX-License-Identifier: MPL-2.0
//! Records returned by the image search endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One fetched image record.
///
/// Identity is positional: two items with the same `url` (possible across
/// pages) are distinct entries and are never deduplicated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub id: String,

    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    /// Every other field of the record (breeds, categories, ...), kept opaque.
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl Item {
    /// Creates an item with only a URL, mostly useful in tests.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            url: url.into(),
            width: None,
            height: None,
            metadata: Map::new(),
        }
    }

    /// Width over height, when the API reported both dimensions.
    pub fn aspect_ratio(&self) -> Option<f32> {
        match (self.width, self.height) {
            (Some(w), Some(h)) if w > 0 && h > 0 => Some(w as f32 / h as f32),
            _ => None,
        }
    }
}

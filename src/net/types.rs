//! Wire DTOs for the gallery backend's JSON responses.
//!
//! DESIGN
//! ======
//! Every optional field tolerates both absence and an explicit `null`, so a
//! sparse record from the tagger still renders as a card with zeroed
//! dimensions instead of failing the whole listing.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// One image record as returned by `GET /api/images`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// Stored file path relative to the images root; may use `\` separators.
    #[serde(default, deserialize_with = "null_as_default")]
    pub path: String,
    /// Folder-derived category labels.
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<String>,
    /// Machine-generated labels, most confident first.
    #[serde(default, deserialize_with = "null_as_default")]
    pub ai_tags: Vec<AiTag>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub technical: Technical,
}

/// A classifier label with its confidence in `[0, 1]`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AiTag {
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub probability: f64,
}

impl AiTag {
    /// Confidence as a whole percentage, e.g. `0.873` -> `87`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn confidence_percent(&self) -> i64 {
        (self.probability * 100.0).round() as i64
    }
}

/// Pixel dimensions; absent values read as zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Technical {
    #[serde(default, deserialize_with = "null_as_default")]
    pub width: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub height: f64,
}

/// Filter pair sent with every image listing request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageQuery {
    /// Empty means all categories.
    pub category: String,
    /// Already trimmed; empty means no search.
    pub search: String,
}

impl ImageQuery {
    /// Query-string pairs in request order. Both keys are always present.
    pub fn pairs(&self) -> [(&'static str, &str); 2] {
        [("category", self.category.as_str()), ("search", self.search.as_str())]
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

//! The catalog record

use super::lenient;
use serde::{Deserialize, Serialize};

/// Price marker meaning no price was provided
pub const NO_PRICE: &str = "N/A";

/// One book entry in the catalog
///
/// Missing fields deserialize as empty strings so records written by older
/// sessions (which omit the metadata fields) still load. Numbers and booleans
/// in text fields are kept as their JSON text.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Book {
    /// Display name
    #[serde(deserialize_with = "lenient::text")]
    pub title: String,

    #[serde(deserialize_with = "lenient::text")]
    pub author: String,

    // Metadata carried from seed data, never edited
    #[serde(deserialize_with = "lenient::text")]
    pub publisher: String,
    #[serde(deserialize_with = "lenient::text")]
    pub year: String,
    #[serde(deserialize_with = "lenient::text")]
    pub language: String,
    #[serde(deserialize_with = "lenient::text")]
    pub pages: String,

    /// Free-form price text or `N/A`
    #[serde(deserialize_with = "lenient::text")]
    pub price: String,

    /// Cover image address
    #[serde(deserialize_with = "lenient::text")]
    pub url: String,

    /// External product link
    #[serde(deserialize_with = "lenient::text")]
    pub link: String,
}

impl Book {
    /// Create a record as the form does: no price, link mirroring the cover.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        let url = url.into();
        Self {
            title: title.into(),
            author: author.into(),
            price: NO_PRICE.to_string(),
            link: url.clone(),
            url,
            ..Self::default()
        }
    }

}

/// A record in its persisted shape, with the selection flag alongside
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredBook {
    #[serde(flatten)]
    pub book: Book,

    #[serde(default)]
    pub selected: bool,
}

//! Book records as served by the catalog

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Format key under which the catalog publishes cover images
pub const COVER_IMAGE_FORMAT: &str = "image/jpeg";

/// A catalog book
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    /// Catalog identifier
    pub id: u64,

    /// Book title
    pub title: String,

    /// Authors, in catalog order
    #[serde(default)]
    pub authors: Vec<Author>,

    /// Subject headings
    #[serde(default)]
    pub subjects: Vec<String>,

    /// Language codes
    #[serde(default)]
    pub languages: Vec<String>,

    /// Copyright status, when known
    #[serde(default)]
    pub copyright: Option<bool>,

    /// Download links keyed by MIME type
    #[serde(default)]
    pub formats: BTreeMap<String, String>,

    #[serde(default)]
    pub download_count: u64,
}

impl Book {
    /// Create a book with just a title
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            authors: Vec::new(),
            subjects: Vec::new(),
            languages: Vec::new(),
            copyright: None,
            formats: BTreeMap::new(),
            download_count: 0,
        }
    }

    /// Add an author
    pub fn with_author(mut self, name: impl Into<String>) -> Self {
        self.authors.push(Author::new(name));
        self
    }

    /// Set the cover image URL
    pub fn with_cover(mut self, url: impl Into<String>) -> Self {
        self.formats.insert(COVER_IMAGE_FORMAT.to_string(), url.into());
        self
    }

    /// Get the primary author (first listed)
    pub fn primary_author(&self) -> Option<&str> {
        self.authors.first().map(|a| a.name.as_str())
    }

    /// Cover image URL, if the catalog has one
    pub fn cover_image_url(&self) -> Option<&str> {
        self.formats.get(COVER_IMAGE_FORMAT).map(|s| s.as_str())
    }
}

/// A book author
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Author {
    /// Name as the catalog spells it ("Stoker, Bram")
    pub name: String,

    #[serde(default)]
    pub birth_year: Option<i32>,

    #[serde(default)]
    pub death_year: Option<i32>,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            birth_year: None,
            death_year: None,
        }
    }
}

//! The client-held query selection

use super::{Category, Copyright, Language, SortOrder};
use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

/// A 1-based page number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Page(NonZeroU32);

impl Page {
    pub const FIRST: Page = Page(NonZeroU32::MIN);

    /// Create a page number, rejecting zero
    pub fn new(n: u32) -> Option<Self> {
        NonZeroU32::new(n).map(Self)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    pub fn is_first(self) -> bool {
        self == Self::FIRST
    }

    /// The following page
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// The preceding page, or `None` on the first page
    pub fn previous(self) -> Option<Self> {
        Self::new(self.get() - 1)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::FIRST
    }
}

impl TryFrom<u32> for Page {
    type Error = ParseError;

    fn try_from(n: u32) -> Result<Self, Self::Error> {
        Self::new(n).ok_or_else(|| ParseError::InvalidPage(n.to_string()))
    }
}

impl From<Page> for u32 {
    fn from(page: Page) -> Self {
        page.get()
    }
}

impl FromStr for Page {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| ParseError::InvalidPage(s.to_string()))
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Current search, filter, sort and page selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
    /// Free-text title/author search, as typed
    pub search_term: String,

    pub languages: BTreeSet<Language>,

    pub copyright: BTreeSet<Copyright>,

    pub categories: BTreeSet<Category>,

    pub sort: SortOrder,

    pub page: Page,
}

impl QueryState {
    /// Search term with surrounding whitespace removed
    pub fn trimmed_search(&self) -> &str {
        self.search_term.trim()
    }

    /// Whether any search text or filter value is set (sort and page excluded)
    pub fn has_active_filters(&self) -> bool {
        !self.trimmed_search().is_empty()
            || !self.languages.is_empty()
            || !self.copyright.is_empty()
            || !self.categories.is_empty()
    }
}

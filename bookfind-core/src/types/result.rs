//! What the renderer shows for the most recent requests

use super::Book;
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};

/// Fetched items plus loading and error flags
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FetchResult {
    /// Items of the last successful response
    pub items: Vec<Book>,

    /// A request is outstanding
    pub is_loading: bool,

    /// User-facing message of the last failure
    pub error: Option<String>,
}

impl FetchResult {
    /// Apply the outcome of one request
    ///
    /// A failure keeps the previous items on screen.
    pub fn apply(&mut self, outcome: Result<Vec<Book>, CatalogError>) {
        match outcome {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => {
                self.error = Some(e.user_message().to_string());
            }
        }
    }

    /// No items and no error
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.error.is_none()
    }
}

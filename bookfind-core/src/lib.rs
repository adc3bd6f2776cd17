//! Bookfind Core Library
//!
//! This crate provides the query state, request building and synchronization
//! logic for browsing the Gutendex book catalog. User interactions mutate a
//! [`QueryState`]; the [`Synchronizer`] turns those mutations into catalog
//! requests (debouncing free-text search) and folds the responses into a
//! [`FetchResult`] for a renderer to display.

pub mod client;
pub mod config;
pub mod debounce;
pub mod error;
pub mod query;
pub mod session;
pub mod store;
pub mod sync;
pub mod types;

pub use client::{CatalogClient, HttpCatalogClient};
pub use config::CatalogConfig;
pub use error::{
    BookfindError, CatalogError, ConfigError, ParseError, Result, FETCH_FAILED_MESSAGE,
};
pub use query::CatalogRequest;
pub use session::{Session, SessionHandle};
pub use store::{Action, ActiveFilter, ClearTarget, Effect, PageNav, QueryStore};
pub use sync::{FetchCommand, Snapshot, Synchronizer, Ticket};
pub use types::{
    Author, Book, Category, Copyright, FetchResult, FilterKind, FilterValue, Language, Page,
    QueryState, SortOrder,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dracula_scenario() {
        let mut store = QueryStore::new();
        store.set_search("dracula");
        store.toggle_language(Language::English);

        let request = CatalogRequest::from_state(store.state());
        assert_eq!(request.query_string(), "search=dracula&languages=en&page=1");
    }
}

//! Core types for query state and catalog results

mod book;
mod filter;
mod result;
mod state;

pub use book::{Author, Book, COVER_IMAGE_FORMAT};
pub use filter::{Category, Copyright, FilterKind, FilterValue, Language, SortOrder};
pub use result::FetchResult;
pub use state::{Page, QueryState};

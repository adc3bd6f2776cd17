//! CLI command implementations

mod browse;
mod filters;
mod search;

pub use browse::browse;
pub use filters::filters;
pub use search::{search, SearchArgs};

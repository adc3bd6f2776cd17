//! Request descriptors for the catalog search endpoint

use crate::types::{FilterValue, QueryState};
use std::collections::BTreeSet;
use std::fmt;

/// Query parameters for one catalog request, already URL-encoded
///
/// Parameters are kept in the order the catalog documents them:
/// `search`, `copyright`, `languages`, `topic`, `sort`, `page`.
/// Only `page` is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRequest {
    params: Vec<(&'static str, String)>,
}

impl CatalogRequest {
    /// Build the request for a query selection
    pub fn from_state(state: &QueryState) -> Self {
        let mut params = Vec::new();

        let search = state.trimmed_search();
        if !search.is_empty() {
            params.push(("search", urlencoding::encode(search).into_owned()));
        }
        if !state.copyright.is_empty() {
            params.push(("copyright", joined(&state.copyright)));
        }
        if !state.languages.is_empty() {
            params.push(("languages", joined(&state.languages)));
        }
        if !state.categories.is_empty() {
            // Encoded as one string, separator included
            let topic = joined(&state.categories);
            params.push(("topic", urlencoding::encode(&topic).into_owned()));
        }
        if let Some(sort) = state.sort.param() {
            params.push(("sort", sort.to_string()));
        }
        params.push(("page", state.page.to_string()));

        Self { params }
    }

    /// Encoded value of a parameter
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// `key=value` pairs joined with `&`
    pub fn query_string(&self) -> String {
        self.params
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Full request URL against a catalog endpoint
    pub fn url(&self, base_url: &str) -> String {
        format!("{}?{}", base_url, self.query_string())
    }
}

impl fmt::Display for CatalogRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.query_string())
    }
}

fn joined<T: FilterValue>(values: &BTreeSet<T>) -> String {
    values
        .iter()
        .map(|v| v.term())
        .collect::<Vec<_>>()
        .join(",")
}

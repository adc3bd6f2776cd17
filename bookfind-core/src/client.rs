//! Remote catalog client

use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::query::CatalogRequest;
use crate::types::Book;
use async_trait::async_trait;
use serde::Deserialize;

/// Anything that can answer a catalog request
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Fetch one page of results
    async fn fetch(&self, request: &CatalogRequest) -> Result<Vec<Book>, CatalogError>;
}

/// Response envelope; pagination fields are not consumed
#[derive(Debug, Deserialize)]
struct CatalogPage {
    results: Vec<Book>,
}

/// Catalog client speaking HTTP via reqwest
///
/// No retries and no timeout beyond what the transport applies.
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpCatalogClient {
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
        }
    }
}

#[async_trait]
impl CatalogClient for HttpCatalogClient {
    async fn fetch(&self, request: &CatalogRequest) -> Result<Vec<Book>, CatalogError> {
        let url = request.url(&self.base_url);
        tracing::debug!(%url, "Fetching books");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let page: CatalogPage = serde_json::from_slice(&body)?;

        tracing::debug!(count = page.results.len(), %url, "Fetched books");
        Ok(page.results)
    }
}

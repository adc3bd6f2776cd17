//! One-shot search command implementation

use crate::render;
use anyhow::{bail, Result};
use bookfind_core::{
    CatalogClient, CatalogConfig, CatalogRequest, Category, Copyright, FetchResult,
    HttpCatalogClient, Language, Page, QueryState, SortOrder,
};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Query selection for a single search
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Free-text title/author search
    pub query: Option<String>,

    /// Language filter, by code or name (repeatable)
    #[arg(short, long = "language", value_name = "LANG")]
    pub languages: Vec<Language>,

    /// Copyright filter: true/yes or false/no (repeatable)
    #[arg(short, long = "copyright", value_name = "FLAG")]
    pub copyright: Vec<Copyright>,

    /// Category filter (repeatable)
    #[arg(short = 't', long = "category", value_name = "CATEGORY")]
    pub categories: Vec<Category>,

    /// Sort order (popular, ascending, descending)
    #[arg(short, long, default_value = "popular")]
    pub sort: SortOrder,

    /// Page number, starting at 1
    #[arg(short, long, default_value = "1")]
    pub page: Page,

    /// Print the results as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the request URL without sending it
    #[arg(long)]
    pub dry_run: bool,
}

impl SearchArgs {
    fn to_state(&self) -> QueryState {
        QueryState {
            search_term: self.query.clone().unwrap_or_default(),
            languages: self.languages.iter().copied().collect(),
            copyright: self.copyright.iter().copied().collect(),
            categories: self.categories.iter().copied().collect(),
            sort: self.sort,
            page: self.page,
        }
    }
}

/// Fetch one page of results and print it
pub async fn search(config: &CatalogConfig, args: SearchArgs) -> Result<()> {
    let state = args.to_state();
    let request = CatalogRequest::from_state(&state);

    if args.dry_run {
        println!("{}", request.url(&config.base_url));
        return Ok(());
    }

    let client = HttpCatalogClient::new(config);

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message("Fetching books...");

    let outcome = client.fetch(&request).await;
    pb.finish_and_clear();

    if let Err(e) = &outcome {
        tracing::warn!(error = %e, url = %request.url(&config.base_url), "Catalog request failed");
    }
    let mut result = FetchResult::default();
    result.apply(outcome);

    if let Some(message) = result.error {
        bail!(message);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result.items)?);
    } else {
        println!("{}", render::render(&state, &result));
    }

    Ok(())
}

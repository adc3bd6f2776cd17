//! Interactive browse command implementation

use crate::input::{self, Input};
use crate::render;
use anyhow::Result;
use bookfind_core::{CatalogConfig, HttpCatalogClient, Session, Snapshot};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::{self, error::RecvError};

/// Run a browsing session fed by stdin lines
pub async fn browse(config: &CatalogConfig) -> Result<()> {
    let client = Arc::new(HttpCatalogClient::new(config));
    let (session, handle) = Session::new(client, config.debounce);

    let renderer = tokio::spawn(render_snapshots(handle.subscribe()));
    let session = tokio::spawn(session.run());

    println!("{}", input::HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match input::parse_line(&line) {
            Ok(Input::Action(action)) => handle.send(action)?,
            Ok(Input::Filters) => println!("{}", render::render_filters()),
            Ok(Input::Help) => println!("{}", input::HELP),
            Ok(Input::Quit) => break,
            Ok(Input::Empty) => {}
            Err(e) => eprintln!("{}", e),
        }
    }

    // Closing the last handle lets the session flush and drain, then stop
    drop(handle);
    let last = session.await?;
    renderer.await?;

    tracing::debug!(
        items = last.result.items.len(),
        page = %last.state.page,
        "Browse finished"
    );
    Ok(())
}

async fn render_snapshots(mut snapshots: broadcast::Receiver<Snapshot>) {
    let mut last_view = String::new();
    loop {
        match snapshots.recv().await {
            Ok(snapshot) => {
                let view = render::render(&snapshot.state, &snapshot.result);
                if view != last_view {
                    println!("\n{}", view);
                    last_view = view;
                }
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::debug!(skipped, "Renderer fell behind");
            }
            Err(RecvError::Closed) => break,
        }
    }
}

//! Async browsing session
//!
//! A [`Session`] is the single owner of a [`Synchronizer`]. It runs one event
//! loop that takes user actions from a [`SessionHandle`], timer fires from
//! the debouncer, and settled fetches from spawned request tasks, and handles
//! them strictly one at a time. After every event it broadcasts a
//! [`Snapshot`] to subscribed renderers.

use crate::client::CatalogClient;
use crate::debounce::{TimerId, TokioScheduler};
use crate::error::{BookfindError, CatalogError, Result};
use crate::store::Action;
use crate::sync::{FetchCommand, Snapshot, Synchronizer, Ticket};
use crate::types::Book;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};

/// Capacity of the snapshot channel; slow renderers skip intermediate states
const SNAPSHOT_CAPACITY: usize = 64;

/// Events produced inside the session
#[derive(Debug)]
enum Internal {
    Timer(TimerId),
    Settled {
        ticket: Ticket,
        outcome: std::result::Result<Vec<Book>, CatalogError>,
    },
}

/// Sending side of a running session
///
/// Dropping every handle ends the session.
#[derive(Clone)]
pub struct SessionHandle {
    actions: mpsc::UnboundedSender<Action>,
    snapshots: broadcast::Sender<Snapshot>,
}

impl SessionHandle {
    /// Queue a user action
    pub fn send(&self, action: Action) -> Result<()> {
        self.actions
            .send(action)
            .map_err(|_| BookfindError::SessionClosed)
    }

    /// Subscribe to snapshots published after each event
    pub fn subscribe(&self) -> broadcast::Receiver<Snapshot> {
        self.snapshots.subscribe()
    }
}

/// Event loop owning the query state and the fetch result
pub struct Session {
    sync: Synchronizer<TokioScheduler<Internal>>,
    client: Arc<dyn CatalogClient>,
    actions: mpsc::UnboundedReceiver<Action>,
    internal_tx: mpsc::UnboundedSender<Internal>,
    internal_rx: mpsc::UnboundedReceiver<Internal>,
    snapshots: broadcast::Sender<Snapshot>,
}

impl Session {
    /// Create a session and its handle; nothing runs until [`Session::run`]
    pub fn new(client: Arc<dyn CatalogClient>, debounce: Duration) -> (Self, SessionHandle) {
        let (actions_tx, actions) = mpsc::unbounded_channel();
        let (internal_tx, internal_rx) = mpsc::unbounded_channel();
        let (snapshots, _) = broadcast::channel(SNAPSHOT_CAPACITY);

        let scheduler = TokioScheduler::new(internal_tx.clone(), Internal::Timer);
        let session = Self {
            sync: Synchronizer::new(scheduler, debounce),
            client,
            actions,
            internal_tx,
            internal_rx,
            snapshots: snapshots.clone(),
        };
        let handle = SessionHandle {
            actions: actions_tx,
            snapshots,
        };
        (session, handle)
    }

    /// Load the first page, then process events until every handle is dropped
    ///
    /// Once the last handle is gone, a pending debounced search is sent at
    /// once and the session waits for every in-flight request to settle.
    /// Returns the last snapshot.
    pub async fn run(mut self) -> Snapshot {
        tracing::info!("Browsing session started");

        let initial = self.sync.dispatch();
        self.spawn_fetch(initial);
        self.publish();

        let mut draining = false;
        loop {
            if draining && self.sync.in_flight() == 0 {
                break;
            }

            tokio::select! {
                action = self.actions.recv(), if !draining => match action {
                    Some(action) => {
                        tracing::debug!(?action, "Handling action");
                        if let Some(command) = self.sync.apply(action) {
                            self.spawn_fetch(command);
                        }
                    }
                    None => {
                        tracing::debug!(
                            in_flight = self.sync.in_flight(),
                            "Input closed, draining"
                        );
                        draining = true;
                        if let Some(command) = self.sync.flush_search() {
                            self.spawn_fetch(command);
                        }
                    }
                },
                Some(event) = self.internal_rx.recv() => match event {
                    Internal::Timer(id) => {
                        if let Some(command) = self.sync.on_timer(id) {
                            self.spawn_fetch(command);
                        }
                    }
                    Internal::Settled { ticket, outcome } => {
                        self.sync.settle(ticket, outcome);
                    }
                },
                else => break,
            }
            self.publish();
        }

        tracing::info!("Browsing session ended");
        self.sync.snapshot()
    }

    fn spawn_fetch(&self, command: FetchCommand) {
        let client = Arc::clone(&self.client);
        let tx = self.internal_tx.clone();
        tokio::spawn(async move {
            let FetchCommand { ticket, request } = command;
            let outcome = client.fetch(&request).await;
            // Receiver gone means the session is over
            let _ = tx.send(Internal::Settled { ticket, outcome });
        });
    }

    fn publish(&self) {
        // No subscribers is fine
        let _ = self.snapshots.send(self.sync.snapshot());
    }
}

//! Query synchronizer
//!
//! Turns store effects into fetch commands and folds settled responses into
//! the [`FetchResult`]. It performs no I/O itself: the caller runs each
//! [`FetchCommand`] and reports back through [`Synchronizer::settle`].
//!
//! Superseded requests are never cancelled. Responses are applied in the
//! order they settle, so an older request that settles last overwrites the
//! items of a newer one.

use crate::debounce::{Debouncer, Scheduler, TimerId};
use crate::error::CatalogError;
use crate::query::CatalogRequest;
use crate::store::{Action, Effect, QueryStore};
use crate::types::{Book, FetchResult, QueryState};
use std::collections::BTreeSet;
use std::time::Duration;

/// Sequence number of a dispatched request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// A request the caller must execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchCommand {
    pub ticket: Ticket,
    pub request: CatalogRequest,
}

/// Everything a renderer needs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub state: QueryState,
    pub result: FetchResult,
}

/// Owner of the query state, the fetch result and the search debouncer
pub struct Synchronizer<S> {
    store: QueryStore,
    result: FetchResult,
    debouncer: Debouncer,
    scheduler: S,
    next_ticket: u64,
    in_flight: BTreeSet<Ticket>,
    // Highest ticket whose response has been applied
    applied: Option<Ticket>,
}

impl<S: Scheduler> Synchronizer<S> {
    pub fn new(scheduler: S, debounce: Duration) -> Self {
        Self::with_store(QueryStore::new(), scheduler, debounce)
    }

    /// Start from an existing store
    pub fn with_store(store: QueryStore, scheduler: S, debounce: Duration) -> Self {
        Self {
            store,
            result: FetchResult::default(),
            debouncer: Debouncer::new(debounce),
            scheduler,
            next_ticket: 0,
            in_flight: BTreeSet::new(),
            applied: None,
        }
    }

    pub fn state(&self) -> &QueryState {
        self.store.state()
    }

    pub fn result(&self) -> &FetchResult {
        &self.result
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Requests dispatched but not yet settled
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    /// A debounced search is waiting for its quiet period
    pub fn search_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.store.state().clone(),
            result: self.result.clone(),
        }
    }

    /// Apply a user action; returns a request to run if one is due now
    pub fn apply(&mut self, action: Action) -> Option<FetchCommand> {
        match self.store.apply(action) {
            Effect::None => None,
            Effect::Sync => Some(self.dispatch()),
            Effect::ScheduleSearch => {
                let id = self.debouncer.trigger(&mut self.scheduler);
                tracing::trace!(?id, "Search debounce restarted");
                None
            }
            Effect::CancelSearchAndSync => {
                self.debouncer.cancel(&mut self.scheduler);
                Some(self.dispatch())
            }
        }
    }

    /// Handle a timer fire from the scheduler
    ///
    /// A fresh search starts again from the first page. Blank search text
    /// issues no request.
    pub fn on_timer(&mut self, id: TimerId) -> Option<FetchCommand> {
        if !self.debouncer.fire(id) {
            tracing::trace!(?id, "Ignoring stale timer");
            return None;
        }
        self.search_due()
    }

    /// Send a pending debounced search without waiting for its timer
    ///
    /// For when no further input will arrive.
    pub fn flush_search(&mut self) -> Option<FetchCommand> {
        if !self.debouncer.is_pending() {
            return None;
        }
        self.debouncer.cancel(&mut self.scheduler);
        tracing::debug!("Flushing pending search");
        self.search_due()
    }

    fn search_due(&mut self) -> Option<FetchCommand> {
        if self.store.state().trimmed_search().is_empty() {
            tracing::debug!("Search text is blank, not fetching");
            return None;
        }

        self.store.reset_page();
        Some(self.dispatch())
    }

    /// Issue a request for the current state
    pub fn dispatch(&mut self) -> FetchCommand {
        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;

        let request = CatalogRequest::from_state(self.store.state());
        tracing::debug!(ticket = ticket.get(), %request, "Dispatching catalog request");

        self.in_flight.insert(ticket);
        self.result.is_loading = true;
        self.result.error = None;

        FetchCommand { ticket, request }
    }

    /// Fold the outcome of a dispatched request into the result
    pub fn settle(&mut self, ticket: Ticket, outcome: Result<Vec<Book>, CatalogError>) {
        if !self.in_flight.remove(&ticket) {
            tracing::warn!(ticket = ticket.get(), "Ignoring response for unknown request");
            return;
        }

        if self.applied.is_some_and(|applied| ticket < applied) {
            tracing::debug!(
                ticket = ticket.get(),
                "Applying response that was superseded by a newer request"
            );
        }
        self.applied = self.applied.max(Some(ticket));

        if let Err(e) = &outcome {
            tracing::warn!(ticket = ticket.get(), error = %e, "Catalog request failed");
        }
        self.result.apply(outcome);
        self.result.is_loading = !self.in_flight.is_empty();
    }
}

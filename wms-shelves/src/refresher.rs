//! Keeps the shelf control in step with the warehouse control.
//!
//! `ShelfRefresher::refresh` is the whole operation: clear to the sentinel,
//! stop if no warehouse is chosen, otherwise fetch and render. Every call
//! takes a ticket from a `RequestSequence`; when a response comes back and a
//! newer call has started since, the response is dropped instead of
//! overwriting the newer state.

use log::{debug, info, warn};
use std::cell::Cell;

use crate::{
    endpoint::ShelvesEndpoint,
    error::ShelfError,
    select::{FailureDisplay, SelectEntry, ShelfSelectState},
    shelf::{ShelfOption, WarehouseSelection},
};

/// Read side: the warehouse control.
pub trait WarehouseControl {
    /// Current value, or `None` when the control is not in the document.
    fn selection(&self) -> Option<WarehouseSelection>;
}

/// Write side: the shelf control.
pub trait ShelfControl {
    fn is_present(&self) -> bool;
    /// Replace every option with `entries`, in order.
    fn render(&self, entries: &[SelectEntry]);
}

/// Where shelf lists come from. Futures need not be `Send`: the browser
/// event loop is single-threaded.
#[allow(async_fn_in_trait)]
pub trait ShelfSource {
    async fn fetch_shelves(&self, url: &str) -> Result<Vec<ShelfOption>, ShelfError>;
}

/// Monotonic request tickets. Only the latest ticket may render a response.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: Cell<u64>,
}

impl RequestSequence {
    pub fn issue(&self) -> u64 {
        let next = self.latest.get().wrapping_add(1);
        self.latest.set(next);
        next
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.get() == ticket
    }
}

/// What a single `refresh` ended up doing.
#[derive(Debug)]
pub enum RefreshOutcome {
    /// A control was missing; nothing touched.
    Skipped,
    /// Empty selection; sentinel only, no request made.
    Cleared,
    /// Rendered this many shelves after the sentinel.
    Loaded(usize),
    /// Fetch failed; rendered per the configured `FailureDisplay`.
    Failed(ShelfError),
    /// A newer refresh started while this one was in flight; response dropped.
    Superseded,
}

impl RefreshOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            RefreshOutcome::Skipped => "skipped",
            RefreshOutcome::Cleared => "cleared",
            RefreshOutcome::Loaded(_) => "loaded",
            RefreshOutcome::Failed(_) => "failed",
            RefreshOutcome::Superseded => "superseded",
        }
    }
}

pub struct ShelfRefresher<W, C, S> {
    warehouse: W,
    shelves: C,
    source: S,
    endpoint: ShelvesEndpoint,
    failure_display: FailureDisplay,
    sequence: RequestSequence,
}

impl<W, C, S> ShelfRefresher<W, C, S>
where
    W: WarehouseControl,
    C: ShelfControl,
    S: ShelfSource,
{
    pub fn new(warehouse: W, shelves: C, source: S, endpoint: ShelvesEndpoint) -> Self {
        Self {
            warehouse,
            shelves,
            source,
            endpoint,
            failure_display: FailureDisplay::default(),
            sequence: RequestSequence::default(),
        }
    }

    pub fn with_failure_display(mut self, failure_display: FailureDisplay) -> Self {
        self.failure_display = failure_display;
        self
    }

    pub fn warehouse(&self) -> &W {
        &self.warehouse
    }

    pub fn shelves(&self) -> &C {
        &self.shelves
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn endpoint(&self) -> &ShelvesEndpoint {
        &self.endpoint
    }

    pub async fn refresh(&self) -> RefreshOutcome {
        let Some(selection) = self.warehouse.selection() else {
            debug!("warehouse control not found, skipping shelf refresh");
            return RefreshOutcome::Skipped;
        };
        if !self.shelves.is_present() {
            debug!("shelf control not found, skipping shelf refresh");
            return RefreshOutcome::Skipped;
        }

        let ticket = self.sequence.issue();
        self.render(&ShelfSelectState::Empty);
        if selection.is_empty() {
            return RefreshOutcome::Cleared;
        }

        let url = self.endpoint.url_for(&selection);
        debug!("fetching shelves: {url}");
        let result = self.source.fetch_shelves(&url).await;

        if !self.sequence.is_current(ticket) {
            debug!(
                "dropping shelves response for warehouse {}: superseded",
                selection.as_str()
            );
            return RefreshOutcome::Superseded;
        }

        match result {
            Ok(shelves) => {
                let count = shelves.len();
                info!("loaded {count} shelves for warehouse {}", selection.as_str());
                self.render(&ShelfSelectState::Loaded(shelves));
                RefreshOutcome::Loaded(count)
            }
            Err(err) => {
                warn!(
                    "could not load shelves for warehouse {}: {err}",
                    selection.as_str()
                );
                self.render(&ShelfSelectState::failed(self.failure_display));
                RefreshOutcome::Failed(err)
            }
        }
    }

    fn render(&self, state: &ShelfSelectState) {
        self.shelves.render(&state.entries());
    }
}

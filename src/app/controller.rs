use std::sync::Arc;

use tokio::sync::mpsc;

use super::worker::spawn_fetch_worker;
use crate::logic::{Action, QueryTracker, reduce, send_query};
use crate::sources::{FetchPage, PageRequest, PageResult};
use crate::state::{ListConfig, ListState};

/// How a page result was handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultOutcome {
    /// The page belonged to the latest query and was merged.
    Committed {
        /// Number of variables in the page.
        count: usize,
    },
    /// The latest query failed; pages kept, `refreshing` cleared, next advance retries.
    Failed,
    /// The page answered an outdated query and was dropped without touching state.
    Stale,
}

/// What: Mounted list: pure reducer state plus the fetch effect.
///
/// Details:
/// - `dispatch` is the only way to change state. After every transition the query key
///   is compared by value with the last issued one, and a new page request is sent
///   when it differs.
/// - Only results carrying the latest query id commit.
pub struct ListController {
    /// Current state.
    state: ListState,
    /// Query id bookkeeping.
    tracker: QueryTracker,
    /// Requests to the fetch worker.
    req_tx: mpsc::UnboundedSender<PageRequest>,
    /// Results from the fetch worker.
    result_rx: mpsc::UnboundedReceiver<PageResult>,
}

impl ListController {
    /// What: Mount a list and request page 0.
    ///
    /// Inputs:
    /// - `config`: Initial struct, flags, sort spec, filters, limit and layout
    /// - `source`: Page source the fetch worker queries
    ///
    /// Output:
    /// - Controller whose first request is already in flight.
    ///
    /// Details:
    /// - Must be called within a tokio runtime; the fetch worker is spawned here.
    #[must_use]
    pub fn mount(config: ListConfig, source: Arc<dyn FetchPage>) -> Self {
        let (req_tx, req_rx) = mpsc::unbounded_channel();
        let (result_tx, result_rx) = mpsc::unbounded_channel();
        spawn_fetch_worker(req_rx, result_tx, source);
        let state = ListState::from_config(config);
        let mut tracker = QueryTracker::new();
        tracing::info!(
            struct_name = %state.struct_ref.name,
            limit = state.limit,
            "mounting list"
        );
        send_query(&mut tracker, &state, &req_tx);
        Self {
            state,
            tracker,
            req_tx,
            result_rx,
        }
    }

    /// Current state snapshot.
    #[must_use]
    pub const fn state(&self) -> &ListState {
        &self.state
    }

    /// Id of the most recently issued page request.
    #[must_use]
    pub const fn latest_query_id(&self) -> u64 {
        self.tracker.latest_query_id
    }

    /// What: Apply `action` and re-fetch when the query changed.
    ///
    /// Inputs:
    /// - `action`: Event to apply
    ///
    /// Output:
    /// - `Some(id)` when a new page request was issued.
    ///
    /// Details:
    /// - Every issued request marks the state `refreshing` before returning, so paging
    ///   stays blocked until the latest request is answered.
    pub fn dispatch(&mut self, action: Action) -> Option<u64> {
        tracing::debug!(action = action.name(), "dispatch");
        self.state = reduce(&self.state, action);
        let issued = send_query(&mut self.tracker, &self.state, &self.req_tx);
        if issued.is_some() && !self.state.refreshing {
            self.state = reduce(&self.state, Action::FetchStarted);
        }
        issued
    }

    /// What: Handle one page result from the fetch worker.
    ///
    /// Inputs:
    /// - `result`: Page result tagged with its request id
    ///
    /// Output:
    /// - How the result was handled.
    ///
    /// Details:
    /// - Outdated ids are dropped. `refreshing` belongs to the latest request, which is
    ///   either still in flight or already answered, so state is left alone.
    /// - Failures keep variables, offset and end flag; the next scroll re-requests the
    ///   failed page and a query change starts over from page 0.
    pub fn apply_result(&mut self, result: PageResult) -> ResultOutcome {
        if !self.tracker.is_current(result.id) {
            tracing::debug!(
                query_id = result.id,
                latest = self.tracker.latest_query_id,
                "discarding stale page"
            );
            return ResultOutcome::Stale;
        }
        match result.outcome {
            Ok(page) => {
                let count = page.len();
                self.state = reduce(&self.state, Action::SetVariables(page));
                tracing::debug!(
                    query_id = result.id,
                    count,
                    total = self.state.variables.len(),
                    reached_end = self.state.reached_end,
                    "page committed"
                );
                ResultOutcome::Committed { count }
            }
            Err(e) => {
                tracing::warn!(
                    query_id = result.id,
                    offset = self.state.offset,
                    error = %e,
                    "page fetch failed"
                );
                self.state = reduce(&self.state, Action::FetchFailed);
                ResultOutcome::Failed
            }
        }
    }

    /// What: Wait for the next page result and apply it.
    ///
    /// Output:
    /// - `None` when the fetch worker is gone; otherwise how the result was handled.
    pub async fn next_result(&mut self) -> Option<ResultOutcome> {
        let result = self.result_rx.recv().await?;
        Some(self.apply_result(result))
    }

    /// What: Wait until the latest request has been answered.
    ///
    /// Output:
    /// - Outcome of the latest request, skipping stale results on the way.
    pub async fn settle(&mut self) -> Option<ResultOutcome> {
        loop {
            match self.next_result().await? {
                ResultOutcome::Stale => {}
                outcome => return Some(outcome),
            }
        }
    }
}

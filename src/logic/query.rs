use tokio::sync::mpsc;

use crate::sources::{PageQuery, PageRequest};
use crate::state::{ListState, QueryKey};

/// What: Query-epoch bookkeeping for one mounted list.
///
/// Details:
/// - Every issued request gets a fresh id; only results carrying `latest_query_id`
///   may commit, so a slow response for an outdated query is dropped.
#[derive(Debug, Default)]
pub struct QueryTracker {
    /// Id handed to the next request.
    pub next_query_id: u64,
    /// Id of the most recently issued request.
    pub latest_query_id: u64,
    /// Key of the most recently issued request.
    issued: Option<QueryKey>,
}

impl QueryTracker {
    /// Tracker whose first request gets id 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next_query_id: 1,
            latest_query_id: 0,
            issued: None,
        }
    }

    /// Whether `key` differs by value from the last issued request.
    #[must_use]
    pub fn needs_fetch(&self, key: &QueryKey) -> bool {
        self.issued.as_ref() != Some(key)
    }

    /// Whether a result tagged `id` belongs to the latest request.
    #[must_use]
    pub const fn is_current(&self, id: u64) -> bool {
        id == self.latest_query_id
    }
}

/// What: Send a page request for the current state when its query key changed.
///
/// Inputs:
/// - `tracker`: Query bookkeeping; updates `next_query_id`, `latest_query_id` and the issued key
/// - `st`: Current list state
/// - `req_tx`: Channel to the fetch worker
///
/// Output:
/// - `Some(id)` when a request was sent; `None` when the key is unchanged.
///
/// Details:
/// - The id allows correlating responses so stale results can be discarded.
pub fn send_query(
    tracker: &mut QueryTracker,
    st: &ListState,
    req_tx: &mpsc::UnboundedSender<PageRequest>,
) -> Option<u64> {
    let key = st.query_key();
    if !tracker.needs_fetch(&key) {
        return None;
    }
    let id = tracker.next_query_id;
    tracker.next_query_id += 1;
    tracker.latest_query_id = id;
    tracker.issued = Some(key);
    tracing::debug!(query_id = id, offset = st.offset, limit = st.limit, "issuing page request");
    if req_tx
        .send(PageRequest {
            id,
            query: PageQuery::from_state(st),
        })
        .is_err()
    {
        tracing::warn!(query_id = id, "fetch worker is gone; request dropped");
    }
    Some(id)
}

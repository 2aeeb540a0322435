use std::sync::Arc;

use tokio::sync::mpsc;

use crate::sources::{FetchPage, PageRequest, PageResult};

/// What: Spawn the background worker that runs page requests.
///
/// Inputs:
/// - `req_rx`: Channel receiver for page requests
/// - `result_tx`: Channel sender for page results
/// - `source`: Page source to query
///
/// Details:
/// - Each request runs on its own task, so a slow page never blocks a newer query.
/// - Results carry the request id; the controller decides whether they are stale.
/// - The worker exits once every request sender is dropped.
pub fn spawn_fetch_worker(
    mut req_rx: mpsc::UnboundedReceiver<PageRequest>,
    result_tx: mpsc::UnboundedSender<PageResult>,
    source: Arc<dyn FetchPage>,
) {
    tokio::spawn(async move {
        while let Some(req) = req_rx.recv().await {
            let PageRequest { id, query } = req;
            let offset = query.offset;
            let fut = source.fetch_page(query);
            let tx = result_tx.clone();
            tokio::spawn(async move {
                let outcome = fut.await.map_err(|e| e.to_string());
                match &outcome {
                    Ok(page) => {
                        tracing::trace!(query_id = id, offset, count = page.len(), "page fetched");
                    }
                    Err(e) => {
                        tracing::debug!(query_id = id, offset, error = %e, "page fetch failed");
                    }
                }
                let _ = tx.send(PageResult { id, outcome });
            });
        }
        tracing::trace!("fetch worker stopped");
    });
}

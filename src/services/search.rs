//! Search Service
//!
//! Background worker that executes search requests against an injected
//! backend and reports completions over a channel. Each request runs in its
//! own task so a slow search never blocks a newer one; which completion is
//! current is decided by the controller's sequence number, not by arrival
//! order.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::api::SearchResultItem;
use crate::utils::log_debug;

/// The injected asynchronous search function
///
/// Implementations must resolve or fail; failures are tolerated and rendered
/// as an empty result set by the controller.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, term: &str) -> Result<Vec<SearchResultItem>>;
}

#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub seq: u64,
    pub term: String,
}

#[derive(Debug)]
pub enum SearchResponse {
    Completed {
        seq: u64,
        term: String,
        results: Result<Vec<SearchResultItem>>,
    },
}

/// Spawn the search worker task
///
/// Requests arrive on `request_rx`; every completion (success or failure) is
/// sent back on `response_tx`. The worker exits when the request channel
/// closes, which ties its lifetime to the owning widget.
pub fn spawn_search_worker<B>(
    backend: Arc<B>,
    mut request_rx: mpsc::UnboundedReceiver<SearchRequest>,
    response_tx: mpsc::UnboundedSender<SearchResponse>,
) where
    B: SearchBackend + 'static,
{
    tokio::spawn(async move {
        while let Some(request) = request_rx.recv().await {
            let backend = Arc::clone(&backend);
            let response_tx = response_tx.clone();

            tokio::spawn(async move {
                log_debug(&format!(
                    "DEBUG [SEARCH WORKER]: Executing seq={} term={:?}",
                    request.seq, request.term
                ));

                let results = backend.search(&request.term).await;

                if let Err(e) = &results {
                    log_debug(&format!(
                        "DEBUG [SEARCH WORKER]: seq={} failed: {}",
                        request.seq, e
                    ));
                }

                let _ = response_tx.send(SearchResponse::Completed {
                    seq: request.seq,
                    term: request.term,
                    results,
                });
            });
        }
    });
}

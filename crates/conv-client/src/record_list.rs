use crate::{ApiClient, LIST_FAILED_MESSAGE};

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use conv_core::{ListPage, ListQuery, Record, apply_query};
use log::{debug, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

/// Shared "refetch needed" flag; the form's success callback sets it
#[derive(Debug, Clone, Default)]
pub struct RefreshHandle(Arc<AtomicBool>);

impl RefreshHandle {
    pub fn mark_stale(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stale(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    fn take(&self) -> bool {
        self.0.swap(false, Ordering::SeqCst)
    }
}

/// Records page: the fetched collection of the user's zone plus the
/// query that selects the visible page.
pub struct RecordList {
    client: Arc<ApiClient>,
    records: Vec<Record>,
    state: LoadState,
    query: ListQuery,
    refresh: RefreshHandle,
}

impl RecordList {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self::with_query(client, ListQuery::default())
    }

    pub fn with_query(client: Arc<ApiClient>, query: ListQuery) -> Self {
        Self {
            client,
            records: Vec::new(),
            state: LoadState::Loading,
            query,
            refresh: RefreshHandle::default(),
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn query_mut(&mut self) -> &mut ListQuery {
        &mut self.query
    }

    pub fn refresh_handle(&self) -> RefreshHandle {
        self.refresh.clone()
    }

    /// Refetch the whole collection; the previous one stays visible on failure
    pub async fn refresh(&mut self) -> &LoadState {
        self.refresh.take();
        self.state = LoadState::Loading;

        self.state = match self.client.list_records().await {
            Ok(records) => {
                debug!("Fetched {} records", records.len());
                self.records = records;
                LoadState::Ready
            }
            Err(e) => {
                warn!("Failed to fetch records: {e}");
                LoadState::Failed(
                    e.backend_message(&["message"])
                        .unwrap_or_else(|| LIST_FAILED_MESSAGE.to_string()),
                )
            }
        };
        &self.state
    }

    /// Refetch only when marked stale. Returns whether a fetch ran.
    pub async fn refresh_if_stale(&mut self) -> bool {
        if !self.refresh.is_stale() {
            return false;
        }
        self.refresh().await;
        true
    }

    pub fn visible_page(&self) -> ListPage<'_> {
        apply_query(&self.records, &self.query)
    }
}

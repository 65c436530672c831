//! Per-visitor session state held in memory using moka
//!
//! Each session owns a selection and a single receipt slot. Entries expire
//! after the configured idle time, which stands in for the end of a browser
//! session.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use moka::future::Cache;
use serde::Serialize;
use tracing::debug;

use crate::error::{AppError, Result};
use crate::pricing::SelectionSet;

const MAX_SESSIONS: u64 = 10_000;

/// A session's selection; updates hold the lock for their whole
/// read-change-write
type SelectionSlot = Arc<tokio::sync::Mutex<SelectionSet>>;

/// Session-scoped state
#[derive(Clone)]
pub struct SessionStore {
    /// Selections (session id -> locked SelectionSet)
    selections: Cache<String, SelectionSlot>,
    /// Last previewed or submitted receipt (session id -> serialized BookingRecord)
    receipts: Cache<String, Arc<String>>,
    /// Sessions with a submission in flight
    submitting: Arc<Mutex<HashSet<String>>>,
}

impl SessionStore {
    /// Create a store whose entries expire after `ttl` of inactivity
    pub fn new(ttl: Duration) -> Self {
        Self {
            selections: Cache::builder()
                .max_capacity(MAX_SESSIONS)
                .time_to_idle(ttl)
                .build(),
            receipts: Cache::builder()
                .max_capacity(MAX_SESSIONS)
                .time_to_idle(ttl)
                .build(),
            submitting: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Current selection; empty for a new session
    pub async fn selection(&self, session: &str) -> SelectionSet {
        match self.selections.get(session).await {
            Some(slot) => slot.lock().await.clone(),
            None => SelectionSet::new(),
        }
    }

    /// The session's slot, created on first use. Concurrent callers for the
    /// same session get the same slot.
    async fn selection_slot(&self, session: &str) -> SelectionSlot {
        self.selections
            .get_with_by_ref(session, async {
                Arc::new(tokio::sync::Mutex::new(SelectionSet::new()))
            })
            .await
    }

    /// Apply a change to a session's selection and store the result.
    ///
    /// Changes to one session run one at a time. A failed change leaves the
    /// selection as it was.
    pub async fn update_selection<T>(
        &self,
        session: &str,
        change: impl FnOnce(&mut SelectionSet) -> Result<T>,
    ) -> Result<(SelectionSet, T)> {
        let slot = self.selection_slot(session).await;
        let mut current = slot.lock().await;

        let mut draft = current.clone();
        let outcome = change(&mut draft)?;
        *current = draft;

        debug!("Session {} selection now has {} services", session, current.len());
        Ok((current.clone(), outcome))
    }

    pub async fn clear_selection(&self, session: &str) {
        if let Some(slot) = self.selections.get(session).await {
            slot.lock().await.clear();
        }
    }

    /// Replace the receipt slot. Any previous receipt is discarded.
    pub async fn store_receipt(&self, session: &str, raw: String) {
        self.receipts.insert(session.to_string(), Arc::new(raw)).await;
    }

    pub async fn receipt(&self, session: &str) -> Option<Arc<String>> {
        self.receipts.get(session).await
    }

    /// Mark a submission as in flight for this session.
    ///
    /// The returned guard releases the mark when dropped, whether the
    /// submission succeeded, failed or was abandoned.
    pub fn begin_submission(&self, session: &str) -> Result<SubmissionGuard> {
        let mut submitting = self
            .submitting
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if !submitting.insert(session.to_string()) {
            return Err(AppError::SubmissionInProgress);
        }
        Ok(SubmissionGuard {
            session: session.to_string(),
            submitting: self.submitting.clone(),
        })
    }

    /// Get store statistics for monitoring
    pub fn stats(&self) -> SessionStats {
        SessionStats {
            selections: self.selections.entry_count(),
            receipts: self.receipts.entry_count(),
            submissions_in_flight: self
                .submitting
                .lock()
                .map(|s| s.len())
                .unwrap_or_default(),
        }
    }
}

/// Held for the duration of a booking submission
#[derive(Debug)]
pub struct SubmissionGuard {
    session: String,
    submitting: Arc<Mutex<HashSet<String>>>,
}

impl Drop for SubmissionGuard {
    fn drop(&mut self) {
        let mut submitting = self
            .submitting
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        submitting.remove(&self.session);
    }
}

/// Session statistics for the health endpoint
#[derive(Debug, Clone, Serialize)]
pub struct SessionStats {
    pub selections: u64,
    pub receipts: u64,
    pub submissions_in_flight: usize,
}

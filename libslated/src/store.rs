//! Persistence collaborator for scheduled rows
//!
//! The submission gateway talks to a [`ScheduleStore`], not to SQL
//! directly. The production implementation is [`Database`]; an in-memory
//! store with failure injection is available to all builds to support
//! integration tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use crate::db::Database;
use crate::error::{Result, StoreError};
use crate::types::ScheduledPostRecord;

/// Batch persistence of scheduled rows
///
/// `insert_batch` is all-or-nothing: a failed call leaves no rows visible.
/// There are no partial-success semantics.
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    /// Persist the full record sequence as one atomic batch
    async fn insert_batch(&self, records: &[ScheduledPostRecord]) -> Result<()>;

    /// List persisted rows, soonest first
    async fn list_scheduled(&self, limit: usize) -> Result<Vec<ScheduledPostRecord>>;
}

#[async_trait]
impl ScheduleStore for Database {
    async fn insert_batch(&self, records: &[ScheduledPostRecord]) -> Result<()> {
        self.insert_scheduled_batch(records).await
    }

    async fn list_scheduled(&self, limit: usize) -> Result<Vec<ScheduledPostRecord>> {
        Database::list_scheduled(self, limit).await
    }
}

/// In-memory store for tests and offline shells
///
/// Clones share state, so a test can keep a handle while the gateway owns
/// another. Supports failure injection, call counting, and inspection of
/// captured payloads.
#[derive(Clone)]
pub struct MemoryStore {
    fail_with: Option<String>,
    delay: Duration,
    insert_calls: Arc<Mutex<usize>>,
    records: Arc<Mutex<Vec<ScheduledPostRecord>>>,
}

impl MemoryStore {
    /// A store where every insert succeeds
    pub fn new() -> Self {
        Self {
            fail_with: None,
            delay: Duration::from_millis(0),
            insert_calls: Arc::new(Mutex::new(0)),
            records: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A store where every insert fails with the given error message
    pub fn failing(error: &str) -> Self {
        Self {
            fail_with: Some(error.to_string()),
            ..Self::new()
        }
    }

    /// A store that sleeps before completing each insert
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::new()
        }
    }

    /// How many times `insert_batch` has been called
    pub fn insert_calls(&self) -> usize {
        *self.insert_calls.lock().unwrap()
    }

    /// All records persisted so far
    pub fn records(&self) -> Vec<ScheduledPostRecord> {
        self.records.lock().unwrap().clone()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScheduleStore for MemoryStore {
    async fn insert_batch(&self, records: &[ScheduledPostRecord]) -> Result<()> {
        *self.insert_calls.lock().unwrap() += 1;

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        if let Some(error) = &self.fail_with {
            return Err(StoreError::Unavailable(error.clone()).into());
        }

        self.records.lock().unwrap().extend_from_slice(records);
        Ok(())
    }

    async fn list_scheduled(&self, limit: usize) -> Result<Vec<ScheduledPostRecord>> {
        let mut records = self.records.lock().unwrap().clone();
        records.sort_by_key(|r| r.scheduled_at);
        records.truncate(limit);
        Ok(records)
    }
}

//! API key pool with per-key quota tracking and cursor rotation
//!
//! The pool scans from a rotating cursor so load spreads across keys. A
//! record is skipped once it is over quota, error-locked or deactivated;
//! running out of usable records is "no capacity", not a fault.

use chrono::Utc;

use crate::types::{KeyRecord, MAX_CONSECUTIVE_ERRORS};

pub struct KeyPool {
    records: Vec<KeyRecord>,
    cursor: usize,
}

impl KeyPool {
    pub fn new(keys: impl IntoIterator<Item = String>) -> Self {
        Self::with_records(keys.into_iter().map(KeyRecord::new).collect())
    }

    pub fn with_records(records: Vec<KeyRecord>) -> Self {
        Self { records, cursor: 0 }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn records(&self) -> &[KeyRecord] {
        &self.records
    }

    /// Find the next usable key, starting from the cursor and wrapping once.
    ///
    /// Stale daily counters are reset across the whole pool first. The
    /// cursor moves past records that do not qualify, so the next scan
    /// resumes where this one gave up.
    pub fn next_available_key(&mut self) -> Option<&KeyRecord> {
        if self.records.is_empty() {
            return None;
        }

        let today = Utc::now().date_naive();
        for record in &mut self.records {
            record.reset_if_stale(today);
        }

        for _ in 0..self.records.len() {
            if self.records[self.cursor].is_available() {
                return Some(&self.records[self.cursor]);
            }
            self.cursor = (self.cursor + 1) % self.records.len();
        }

        tracing::warn!("all API keys exhausted or deactivated");
        None
    }

    /// Record the outcome of one dispatched request against `key`.
    ///
    /// Usage and `last_used` are updated unconditionally. Five consecutive
    /// failures deactivate the record; success does not reset the error
    /// count. Cursor movement is the dispatcher's job.
    pub fn record_result(&mut self, key: &str, success: bool) {
        let Some(record) = self.records.iter_mut().find(|record| record.key == key) else {
            return;
        };

        record.requests_today += 1;
        record.last_used = Utc::now();

        if !success {
            record.consecutive_errors += 1;
            if record.consecutive_errors >= MAX_CONSECUTIVE_ERRORS {
                record.active = false;
                tracing::warn!(key = %redact(key), "key deactivated after repeated errors");
            }
        }
    }

    /// Move the cursor one position forward, wrapping around the pool.
    pub fn advance_cursor(&mut self) {
        if !self.records.is_empty() {
            self.cursor = (self.cursor + 1) % self.records.len();
        }
    }

    /// Manually put a deactivated key back into rotation.
    pub fn reactivate(&mut self, key: &str) -> bool {
        match self.records.iter_mut().find(|record| record.key == key) {
            Some(record) => {
                record.active = true;
                record.consecutive_errors = 0;
                tracing::info!(key = %redact(key), "key reactivated");
                true
            }
            None => false,
        }
    }

    pub fn active_keys(&self) -> usize {
        self.records.iter().filter(|record| record.active).count()
    }

    pub fn total_requests_today(&self) -> u32 {
        self.records.iter().map(|record| record.requests_today).sum()
    }
}

/// Keys are credentials; only a short prefix ever reaches the logs.
fn redact(key: &str) -> String {
    let prefix: String = key.chars().take(8).collect();
    format!("{prefix}…")
}

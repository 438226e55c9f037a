//! Request dispatch with key rotation, context batching and retry/backoff
//!
//! The dispatcher exclusively owns its `KeyPool` and `ContextAccumulator`;
//! nothing else mutates them. `None` results are deliberate non-errors:
//! either the request was deferred into the buffer, or capacity/attempts
//! ran out and the caller should try again later.

use std::time::Duration;
use tokio::time::sleep;

use shared::{ApiStats, ContextCategory};

use crate::services::{ContextAccumulator, KeyPool};
use crate::traits::GenerativeClient;

/// Default attempt cap per dispatch.
pub const MAX_ATTEMPTS: u32 = 3;

/// Retry delays grow as base^attempt seconds.
const BACKOFF_BASE_SECS: u64 = 2;

pub struct RequestDispatcher<C: GenerativeClient> {
    pool: KeyPool,
    accumulator: ContextAccumulator,
    client: C,
}

impl<C: GenerativeClient> RequestDispatcher<C> {
    pub fn new(pool: KeyPool, accumulator: ContextAccumulator, client: C) -> Self {
        Self {
            pool,
            accumulator,
            client,
        }
    }

    /// Append context without considering a dispatch.
    pub fn buffer(&mut self, category: ContextCategory, payload: &str) {
        self.accumulator.add(category, payload);
    }

    /// Buffer the payload and dispatch when the batch policy says so.
    ///
    /// Critical submissions re-tag the item and always dispatch. A `None`
    /// from a non-critical submit means the request was deferred without a
    /// network call.
    pub async fn submit(
        &mut self,
        payload: &str,
        category: ContextCategory,
        critical: bool,
    ) -> Option<String> {
        let category = if critical {
            ContextCategory::Critical
        } else {
            category
        };
        self.accumulator.add(category, payload);

        if !self.accumulator.should_flush(critical) {
            tracing::debug!(%category, "context buffered, request deferred");
            return None;
        }

        let prompt = self.accumulator.build_batch(payload);
        self.dispatch(&prompt, MAX_ATTEMPTS).await
    }

    /// Perform the upstream call with key rotation and exponential backoff.
    ///
    /// Each attempt takes whatever key the pool offers; a pool with no
    /// capacity aborts the whole dispatch. The cursor rotates after every
    /// outcome to spread load, and again when a failure is quota-related so
    /// the exhausted key is left behind immediately.
    pub async fn dispatch(&mut self, prompt: &str, max_attempts: u32) -> Option<String> {
        for attempt in 0..max_attempts {
            let key = match self.pool.next_available_key() {
                Some(record) => record.key.clone(),
                None => {
                    tracing::warn!("no API key available, dispatch aborted");
                    return None;
                }
            };

            match self.client.generate(&key, prompt).await {
                Ok(text) => {
                    self.pool.record_result(&key, true);
                    self.pool.advance_cursor();
                    tracing::info!(chars = text.len(), "received model response");
                    return Some(text);
                }
                Err(failure) => {
                    tracing::warn!(attempt = attempt + 1, %failure, "model request failed");
                    self.pool.record_result(&key, false);
                    self.pool.advance_cursor();
                    if failure.is_quota_related() {
                        self.pool.advance_cursor();
                    }
                    if attempt + 1 < max_attempts {
                        sleep(Duration::from_secs(BACKOFF_BASE_SECS.pow(attempt))).await;
                    }
                }
            }
        }

        tracing::error!("all dispatch attempts exhausted");
        None
    }

    /// Aggregate counters for the telemetry snapshot.
    pub fn stats(&self) -> ApiStats {
        ApiStats {
            total_keys: self.pool.len(),
            active_keys: self.pool.active_keys(),
            total_requests_today: self.pool.total_requests_today(),
            buffer_size: self.accumulator.len(),
            cursor: self.pool.cursor(),
        }
    }

    pub fn pool(&self) -> &KeyPool {
        &self.pool
    }

    pub fn pool_mut(&mut self) -> &mut KeyPool {
        &mut self.pool
    }

    pub fn accumulator(&self) -> &ContextAccumulator {
        &self.accumulator
    }
}

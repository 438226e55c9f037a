//! Prompt-context buffering with a size/time/criticality flush policy
//!
//! Non-critical requests are deferred until enough context accrues or the
//! flush interval elapses; anything critical flushes immediately. This is
//! what keeps call volume down against a quota-limited upstream.

use std::time::Duration;
use tokio::time::Instant;

use shared::ContextCategory;

use crate::types::ContextItem;

/// Buffer size that triggers eviction.
pub const BUFFER_CAPACITY: usize = 50;
/// Items retained after eviction (most recent first to go stale are dropped).
pub const BUFFER_RETAIN: usize = 30;
/// Buffered item count that makes a batch ready.
pub const FLUSH_THRESHOLD: usize = 10;
/// Time since the last flush that makes a batch ready.
pub const FLUSH_INTERVAL: Duration = Duration::from_secs(300);

/// Buffered items rendered into a batch summary.
const SUMMARY_WINDOW: usize = 10;

pub struct ContextAccumulator {
    buffer: Vec<ContextItem>,
    last_flush: Instant,
    flush_interval: Duration,
}

impl ContextAccumulator {
    pub fn new() -> Self {
        Self::with_flush_interval(FLUSH_INTERVAL)
    }

    pub fn with_flush_interval(flush_interval: Duration) -> Self {
        Self {
            buffer: Vec::new(),
            // The timer starts now: a fresh buffer defers until the policy
            // says otherwise.
            last_flush: Instant::now(),
            flush_interval,
        }
    }

    /// Append one item, evicting the oldest entries when the buffer grows
    /// past capacity. Recent context is never lost.
    pub fn add(&mut self, category: ContextCategory, payload: impl Into<String>) {
        self.buffer.push(ContextItem::new(category, payload));

        if self.buffer.len() > BUFFER_CAPACITY {
            let excess = self.buffer.len() - BUFFER_RETAIN;
            self.buffer.drain(..excess);
        }
    }

    /// Whether the buffered batch is ready to dispatch.
    pub fn should_flush(&self, critical: bool) -> bool {
        critical
            || self.buffer.len() >= FLUSH_THRESHOLD
            || self.last_flush.elapsed() > self.flush_interval
            || self
                .buffer
                .iter()
                .any(|item| item.category == ContextCategory::Critical)
    }

    /// Compose the batched prompt and drain the buffer.
    ///
    /// With an empty buffer the new item passes through unchanged.
    /// Otherwise the most recent buffered items are rendered as a session
    /// summary ahead of the new item, the buffer is cleared and the flush
    /// timer restarts.
    pub fn build_batch(&mut self, new_item: &str) -> String {
        if self.buffer.is_empty() {
            return new_item.to_string();
        }

        let start = self.buffer.len().saturating_sub(SUMMARY_WINDOW);
        let summary: Vec<String> = self.buffer[start..].iter().map(summarize).collect();

        self.buffer.clear();
        self.last_flush = Instant::now();

        format!(
            "SESSION CONTEXT:\n{}\n\nCURRENT REQUEST:\n{}\n\n\
             Analyse the accumulated context and respond taking all of it into account.",
            summary.join("\n"),
            new_item
        )
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn items(&self) -> &[ContextItem] {
        &self.buffer
    }
}

impl Default for ContextAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

fn summarize(item: &ContextItem) -> String {
    match item.category {
        ContextCategory::StrategyResult => format!("Strategy result: {}", item.payload),
        ContextCategory::MarketData => format!("Market data: {}", item.payload),
        ContextCategory::Earnings => format!("Earnings: {}", item.payload),
        ContextCategory::Error => format!("Error: {}", item.payload),
        ContextCategory::Critical => format!("Urgent: {}", item.payload),
        ContextCategory::General => format!("Note: {}", item.payload),
    }
}

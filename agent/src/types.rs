//! Agent-specific data types

use chrono::{DateTime, NaiveDate, Utc};
use shared::ContextCategory;

/// Default daily request allowance per key (Gemini free tier).
pub const DEFAULT_DAILY_LIMIT: u32 = 1500;

/// Consecutive errors before a key is pulled from rotation.
pub const MAX_CONSECUTIVE_ERRORS: u32 = 5;

/// Per-key usage bookkeeping.
///
/// `requests_today` and `consecutive_errors` are per calendar day and reset
/// when `last_used` goes stale. Deactivation is terminal until a manual
/// `KeyPool::reactivate`.
#[derive(Debug, Clone)]
pub struct KeyRecord {
    pub key: String,
    pub requests_today: u32,
    pub last_used: DateTime<Utc>,
    pub consecutive_errors: u32,
    pub active: bool,
    pub daily_limit: u32,
}

impl KeyRecord {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            requests_today: 0,
            last_used: Utc::now(),
            consecutive_errors: 0,
            active: true,
            daily_limit: DEFAULT_DAILY_LIMIT,
        }
    }

    /// Usable right now: active, under quota and not error-locked.
    pub fn is_available(&self) -> bool {
        self.active
            && self.requests_today < self.daily_limit
            && self.consecutive_errors < MAX_CONSECUTIVE_ERRORS
    }

    /// Reset the daily counters when the record was last used before `today`.
    /// Does not reactivate a deactivated key.
    pub fn reset_if_stale(&mut self, today: NaiveDate) {
        if self.last_used.date_naive() < today {
            self.requests_today = 0;
            self.consecutive_errors = 0;
        }
    }
}

/// One buffered prompt fragment.
#[derive(Debug, Clone)]
pub struct ContextItem {
    pub category: ContextCategory,
    pub payload: String,
    pub created_at: DateTime<Utc>,
}

impl ContextItem {
    pub fn new(category: ContextCategory, payload: impl Into<String>) -> Self {
        Self {
            category,
            payload: payload.into(),
            created_at: Utc::now(),
        }
    }
}

/// Mutable agent-loop state.
#[derive(Debug, Clone, Default)]
pub struct AgentState {
    pub running: bool,
    pub daily_earnings: f64,
    pub total_earnings: f64,
    pub tasks_completed: u32,
    pub active_strategies: Vec<String>,
}

//! Core shared types and telemetry payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Category tag for buffered prompt context.
///
/// The phrasing used when a batch is rendered depends on the category, and
/// any buffered `Critical` item forces the next flush.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContextCategory {
    StrategyResult,
    MarketData,
    Earnings,
    Error,
    Critical,
    General,
}

impl fmt::Display for ContextCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextCategory::StrategyResult => write!(f, "strategy_result"),
            ContextCategory::MarketData => write!(f, "market_data"),
            ContextCategory::Earnings => write!(f, "earnings"),
            ContextCategory::Error => write!(f, "error"),
            ContextCategory::Critical => write!(f, "critical"),
            ContextCategory::General => write!(f, "general"),
        }
    }
}

/// Aggregate counters exposed by the request dispatcher.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiStats {
    pub total_keys: usize,
    pub active_keys: usize,
    pub total_requests_today: u32,
    pub buffer_size: usize,
    pub cursor: usize,
}

/// Snapshot of the agent published for the dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentStatus {
    pub running: bool,
    pub daily_earnings: f64,
    pub total_earnings: f64,
    pub tasks_completed: u32,
    pub active_strategies: Vec<String>,
    pub daily_goal: f64,
    pub progress_percent: f64,
    pub api: ApiStats,
}

/// Result of one strategy execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyOutcome {
    pub strategy: String,
    pub success: bool,
    pub earnings: f64,
    pub detail: String,
}

impl StrategyOutcome {
    pub fn success(strategy: &str, earnings: f64, detail: impl Into<String>) -> Self {
        Self {
            strategy: strategy.to_string(),
            success: true,
            earnings,
            detail: detail.into(),
        }
    }

    pub fn failure(strategy: &str, detail: impl Into<String>) -> Self {
        Self {
            strategy: strategy.to_string(),
            success: false,
            earnings: 0.0,
            detail: detail.into(),
        }
    }
}

/// Per-strategy execution counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StrategyStats {
    pub executions: u64,
    pub successes: u64,
    pub total_earnings: f64,
}

/// One line of the append-only earnings journal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EarningsRecord {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub strategy: String,
    pub amount: f64,
    pub detail: String,
}

impl EarningsRecord {
    pub fn new(strategy: &str, amount: f64, detail: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            strategy: strategy.to_string(),
            amount,
            detail: detail.into(),
        }
    }
}

//! Agent trait definitions for dependency injection

use async_trait::async_trait;

use shared::{ApiFailure, StrategyOutcome};

/// Upstream generative-text API client.
///
/// One operation: a single generation call with an explicit key. Key
/// selection, batching and retries all live in the dispatcher, so mocks
/// only need to script success and failure.
#[mockall::automock]
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    async fn generate(&self, api_key: &str, prompt: &str) -> Result<String, ApiFailure>;
}

/// A single earning strategy: availability check, execution, potential estimate.
///
/// All concrete implementations are simulation stubs; `execute` returns
/// synthetic numbers drawn from a fixed probability table.
#[mockall::automock]
#[async_trait]
pub trait EarningStrategy: Send + Sync {
    /// Stable identifier used in logs, stats and the journal.
    fn name(&self) -> &'static str;

    /// Whether the required credentials are configured.
    async fn can_execute(&self) -> bool;

    /// Run one round of the strategy.
    async fn execute(&self) -> StrategyOutcome;

    /// Expected payout of one execution, in dollars. Zero when the strategy
    /// cannot execute.
    async fn estimate_potential(&self) -> f64;
}

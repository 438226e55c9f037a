//! Crypto trading strategy (simulated)

use async_trait::async_trait;
use rand::seq::SliceRandom;

use shared::StrategyOutcome;

use super::SimulationProfile;
use crate::config::Config;
use crate::traits::EarningStrategy;

pub struct CryptoTradingStrategy {
    config: Config,
    profile: SimulationProfile,
}

impl CryptoTradingStrategy {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            profile: SimulationProfile {
                success_rate: 0.35,
                payout_range: (0.05, 1.5),
            },
        }
    }
}

#[async_trait]
impl EarningStrategy for CryptoTradingStrategy {
    fn name(&self) -> &'static str {
        "crypto_trading"
    }

    async fn can_execute(&self) -> bool {
        self.config.api.binance_api_key.is_some()
    }

    async fn execute(&self) -> StrategyOutcome {
        tracing::info!("analysing crypto market");

        let market_condition = *["bullish", "bearish", "stable"]
            .choose(&mut rand::thread_rng())
            .unwrap_or(&"stable");
        tracing::debug!(market_condition, "market snapshot");

        match self.profile.sample() {
            Some(amount) => StrategyOutcome::success(
                self.name(),
                amount,
                format!("closed a position in a {market_condition} market"),
            ),
            None => StrategyOutcome::failure(
                self.name(),
                format!("no entry signal in a {market_condition} market"),
            ),
        }
    }

    async fn estimate_potential(&self) -> f64 {
        if !self.can_execute().await {
            return 0.0;
        }
        // High ceiling, scaled down by how much risk the agent may take
        3.0 * self.config.agent.risk_tolerance
    }
}

//! Survey and micro-task strategy (simulated)
//!
//! The one strategy that needs no credentials, so the agent always has at
//! least this to fall back on.

use async_trait::async_trait;
use rand::Rng;

use shared::StrategyOutcome;

use super::SimulationProfile;
use crate::config::Config;
use crate::traits::EarningStrategy;

pub struct SurveyStrategy {
    profile: SimulationProfile,
}

impl SurveyStrategy {
    pub fn new(_config: &Config) -> Self {
        Self {
            profile: SimulationProfile {
                success_rate: 0.9,
                payout_range: (0.05, 0.25),
            },
        }
    }
}

#[async_trait]
impl EarningStrategy for SurveyStrategy {
    fn name(&self) -> &'static str {
        "surveys"
    }

    async fn can_execute(&self) -> bool {
        true
    }

    async fn execute(&self) -> StrategyOutcome {
        tracing::info!("looking for available surveys");

        let available = rand::thread_rng().gen_range(1..=5);

        match self.profile.sample() {
            Some(amount) => StrategyOutcome::success(
                self.name(),
                amount,
                format!("{available} surveys completed"),
            ),
            None => StrategyOutcome::failure(self.name(), "screened out of every survey"),
        }
    }

    async fn estimate_potential(&self) -> f64 {
        // Low but steady
        0.3
    }
}

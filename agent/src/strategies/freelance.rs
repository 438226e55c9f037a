//! Freelance micro-task strategy (simulated)

use async_trait::async_trait;

use shared::StrategyOutcome;

use super::SimulationProfile;
use crate::config::Config;
use crate::traits::EarningStrategy;

pub struct FreelanceStrategy {
    config: Config,
    profile: SimulationProfile,
}

impl FreelanceStrategy {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            profile: SimulationProfile {
                success_rate: 0.6,
                payout_range: (0.1, 0.9),
            },
        }
    }
}

#[async_trait]
impl EarningStrategy for FreelanceStrategy {
    fn name(&self) -> &'static str {
        "freelance"
    }

    async fn can_execute(&self) -> bool {
        self.config.api.upwork_client_id.is_some() || self.config.api.fiverr_api_key.is_some()
    }

    async fn execute(&self) -> StrategyOutcome {
        tracing::info!("scanning freelance boards for micro tasks");

        // Stand-in task listing until a marketplace integration exists
        let candidate_tasks = ["data entry", "text translation", "content writing"];
        tracing::debug!(found = candidate_tasks.len(), "candidate tasks");

        match self.profile.sample() {
            Some(amount) => StrategyOutcome::success(
                self.name(),
                amount,
                format!(
                    "{} candidate tasks found, one completed",
                    candidate_tasks.len()
                ),
            ),
            None => StrategyOutcome::failure(self.name(), "no suitable task found"),
        }
    }

    async fn estimate_potential(&self) -> f64 {
        if !self.can_execute().await {
            return 0.0;
        }
        1.5
    }
}

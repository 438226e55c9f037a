//! Content creation strategy (simulated)

use async_trait::async_trait;

use shared::StrategyOutcome;

use super::SimulationProfile;
use crate::config::Config;
use crate::traits::EarningStrategy;

pub struct ContentCreationStrategy {
    config: Config,
    profile: SimulationProfile,
}

impl ContentCreationStrategy {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            profile: SimulationProfile {
                success_rate: 0.5,
                payout_range: (0.2, 0.8),
            },
        }
    }
}

#[async_trait]
impl EarningStrategy for ContentCreationStrategy {
    fn name(&self) -> &'static str {
        "content_creation"
    }

    async fn can_execute(&self) -> bool {
        self.config.api.openai_api_key.is_some()
    }

    async fn execute(&self) -> StrategyOutcome {
        tracing::info!("drafting content batch");

        let content_types = ["blog_posts", "social_media", "product_descriptions"];

        match self.profile.sample() {
            Some(amount) => StrategyOutcome::success(
                self.name(),
                amount,
                format!("{} content pieces drafted and listed", content_types.len()),
            ),
            None => StrategyOutcome::failure(self.name(), "no buyer for the drafted batch"),
        }
    }

    async fn estimate_potential(&self) -> f64 {
        if !self.can_execute().await {
            return 0.0;
        }
        1.0
    }
}

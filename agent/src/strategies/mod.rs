//! Simulated earning strategies
//!
//! Every strategy here is a placeholder: availability is gated on real
//! credentials being configured, but execution draws a synthetic outcome
//! from a fixed probability table instead of talking to a marketplace.
//! The profiles are test fixtures, not business logic.

pub mod content_creation;
pub mod crypto_trading;
pub mod freelance;
pub mod manager;
pub mod surveys;

pub use content_creation::ContentCreationStrategy;
pub use crypto_trading::CryptoTradingStrategy;
pub use freelance::FreelanceStrategy;
pub use manager::StrategyManager;
pub use surveys::SurveyStrategy;

use rand::Rng;

/// Fixed probability table driving one simulated strategy.
#[derive(Debug, Clone, Copy)]
pub struct SimulationProfile {
    /// Chance that one execution pays out.
    pub success_rate: f64,
    /// Uniform payout range in dollars, inclusive.
    pub payout_range: (f64, f64),
}

impl SimulationProfile {
    /// Draw one synthetic outcome: `Some(amount)` on a hit, `None` on a miss.
    pub fn sample(&self) -> Option<f64> {
        let mut rng = rand::thread_rng();
        if rng.gen_bool(self.success_rate) {
            Some(rng.gen_range(self.payout_range.0..=self.payout_range.1))
        } else {
            None
        }
    }
}

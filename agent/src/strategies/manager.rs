//! Strategy registry, selection and execution bookkeeping

use std::cmp::Ordering;
use std::collections::HashMap;

use shared::{StrategyOutcome, StrategyStats};

use super::{ContentCreationStrategy, CryptoTradingStrategy, FreelanceStrategy, SurveyStrategy};
use crate::config::Config;
use crate::traits::EarningStrategy;

pub struct StrategyManager {
    strategies: Vec<Box<dyn EarningStrategy>>,
    stats: HashMap<String, StrategyStats>,
}

impl StrategyManager {
    /// Register the full built-in strategy set.
    pub fn new(config: &Config) -> Self {
        let strategies: Vec<Box<dyn EarningStrategy>> = vec![
            Box::new(FreelanceStrategy::new(config)),
            Box::new(CryptoTradingStrategy::new(config)),
            Box::new(ContentCreationStrategy::new(config)),
            Box::new(SurveyStrategy::new(config)),
        ];
        tracing::info!(count = strategies.len(), "strategies registered");
        Self::with_strategies(strategies)
    }

    /// Build a manager over an arbitrary strategy set (used by tests).
    pub fn with_strategies(strategies: Vec<Box<dyn EarningStrategy>>) -> Self {
        let stats = strategies
            .iter()
            .map(|strategy| (strategy.name().to_string(), StrategyStats::default()))
            .collect();
        Self { strategies, stats }
    }

    /// Names of the strategies that can currently execute.
    pub async fn available(&self) -> Vec<String> {
        let mut available = Vec::new();
        for strategy in &self.strategies {
            if strategy.can_execute().await {
                available.push(strategy.name().to_string());
            }
        }
        available
    }

    /// Pick strategies whose combined estimated potential covers `target`,
    /// best estimate first.
    pub async fn select_best(&self, target: f64) -> Vec<String> {
        let mut ranked = Vec::new();
        for strategy in &self.strategies {
            if strategy.can_execute().await {
                ranked.push((strategy.name().to_string(), strategy.estimate_potential().await));
            }
        }
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        let mut selected = Vec::new();
        let mut covered = 0.0;
        for (name, potential) in ranked {
            if covered < target {
                selected.push(name);
                covered += potential;
            }
        }

        tracing::info!(
            count = selected.len(),
            target,
            "strategies selected"
        );
        selected
    }

    /// Execute one strategy by name, recording its stats. `None` for an
    /// unknown name; an unavailable strategy yields a failed outcome rather
    /// than an error.
    pub async fn execute(&mut self, name: &str) -> Option<StrategyOutcome> {
        let strategy = self
            .strategies
            .iter()
            .find(|strategy| strategy.name() == name)?;

        let outcome = if strategy.can_execute().await {
            strategy.execute().await
        } else {
            StrategyOutcome::failure(name, "strategy unavailable")
        };

        let entry = self.stats.entry(name.to_string()).or_default();
        entry.executions += 1;
        if outcome.success {
            entry.successes += 1;
            entry.total_earnings += outcome.earnings;
        }

        Some(outcome)
    }

    pub fn stats(&self) -> &HashMap<String, StrategyStats> {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::MockEarningStrategy;

    fn scripted(name: &'static str, executable: bool, potential: f64) -> MockEarningStrategy {
        let mut strategy = MockEarningStrategy::new();
        strategy.expect_name().return_const(name);
        strategy.expect_can_execute().returning(move || executable);
        strategy
            .expect_estimate_potential()
            .returning(move || potential);
        strategy
            .expect_execute()
            .returning(move || StrategyOutcome::success(name, potential / 2.0, "scripted"));
        strategy
    }

    #[tokio::test]
    async fn test_available_filters_on_can_execute() {
        let manager = StrategyManager::with_strategies(vec![
            Box::new(scripted("a", true, 1.0)),
            Box::new(scripted("b", false, 2.0)),
        ]);

        assert_eq!(manager.available().await, vec!["a".to_string()]);
    }

    #[tokio::test]
    async fn test_select_best_orders_by_potential() {
        let manager = StrategyManager::with_strategies(vec![
            Box::new(scripted("low", true, 0.3)),
            Box::new(scripted("high", true, 1.5)),
            Box::new(scripted("mid", true, 1.0)),
        ]);

        // 1.5 already covers the target, so only the best is picked
        assert_eq!(manager.select_best(1.0).await, vec!["high".to_string()]);

        // A larger target pulls in the runners-up in order
        assert_eq!(
            manager.select_best(3.0).await,
            vec!["high".to_string(), "mid".to_string(), "low".to_string()]
        );
    }

    #[tokio::test]
    async fn test_execute_records_stats() {
        let mut manager =
            StrategyManager::with_strategies(vec![Box::new(scripted("a", true, 1.0))]);

        let outcome = manager.execute("a").await.unwrap();
        assert!(outcome.success);

        let stats = &manager.stats()["a"];
        assert_eq!(stats.executions, 1);
        assert_eq!(stats.successes, 1);
        assert!(stats.total_earnings > 0.0);
    }

    #[tokio::test]
    async fn test_execute_unavailable_strategy_fails_without_running() {
        let mut strategy = MockEarningStrategy::new();
        strategy.expect_name().return_const("gated");
        strategy.expect_can_execute().returning(|| false);
        strategy.expect_execute().never();

        let mut manager = StrategyManager::with_strategies(vec![Box::new(strategy)]);

        let outcome = manager.execute("gated").await.unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.earnings, 0.0);
        assert_eq!(manager.stats()["gated"].executions, 1);
    }

    #[tokio::test]
    async fn test_execute_unknown_strategy_is_none() {
        let mut manager = StrategyManager::with_strategies(vec![]);
        assert!(manager.execute("missing").await.is_none());
    }
}

//! Main autonomous agent loop
//!
//! Each cycle selects the strategies whose combined estimated potential
//! covers the remaining daily goal, executes them, journals paying
//! outcomes, feeds results into the dispatcher's context buffer and
//! publishes a status snapshot for the dashboard. Reaching the goal
//! triggers the end-of-day reset.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tokio::time::sleep;

use shared::{AgentStatus, ContextCategory, EarningsRecord, StrategyOutcome, StrategyStats};

use crate::config::Config;
use crate::services::{EarningsLog, RequestDispatcher};
use crate::strategies::StrategyManager;
use crate::traits::GenerativeClient;
use crate::types::AgentState;

pub struct AutonomousAgent<C: GenerativeClient> {
    config: Config,
    state: AgentState,
    dispatcher: RequestDispatcher<C>,
    strategies: StrategyManager,
    journal: EarningsLog,
    status: Arc<RwLock<AgentStatus>>,
    strategy_stats: Arc<RwLock<HashMap<String, StrategyStats>>>,
}

impl<C: GenerativeClient> AutonomousAgent<C> {
    pub fn new(
        config: Config,
        dispatcher: RequestDispatcher<C>,
        strategies: StrategyManager,
        journal: EarningsLog,
    ) -> Self {
        Self {
            config,
            state: AgentState::default(),
            dispatcher,
            strategies,
            journal,
            status: Arc::new(RwLock::new(AgentStatus::default())),
            strategy_stats: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Snapshot handle read by the dashboard.
    pub fn status_handle(&self) -> Arc<RwLock<AgentStatus>> {
        self.status.clone()
    }

    /// Per-strategy stats handle read by the dashboard.
    pub fn strategy_stats_handle(&self) -> Arc<RwLock<HashMap<String, StrategyStats>>> {
        self.strategy_stats.clone()
    }

    pub fn state(&self) -> &AgentState {
        &self.state
    }

    /// Run cycles until shutdown.
    pub async fn run(&mut self) {
        self.state.running = true;
        tracing::info!(
            goal = self.config.agent.daily_earning_goal,
            "starting main agent loop"
        );

        while self.state.running {
            self.run_cycle().await;

            if self.state.daily_earnings >= self.config.agent.daily_earning_goal {
                tracing::info!(
                    earned = self.state.daily_earnings,
                    "daily goal reached"
                );
                self.end_of_day().await;
            }

            sleep(self.config.agent.cycle_interval).await;
        }
    }

    /// One selection/execution round.
    pub async fn run_cycle(&mut self) {
        let available = self.strategies.available().await;
        if available.is_empty() {
            tracing::warn!("no earning strategy available");
            sleep(self.config.agent.idle_interval).await;
            self.publish_status().await;
            return;
        }

        let remaining =
            (self.config.agent.daily_earning_goal - self.state.daily_earnings).max(0.0);
        let selected = self.strategies.select_best(remaining).await;
        tracing::info!(
            count = selected.len(),
            remaining,
            "executing selected strategies"
        );

        for name in selected {
            if !self.state.running
                || self.state.tasks_completed >= self.config.agent.max_daily_tasks
            {
                break;
            }

            tracing::info!(strategy = %name, "executing strategy");
            let Some(outcome) = self.strategies.execute(&name).await else {
                continue;
            };
            self.handle_outcome(outcome).await;

            sleep(self.config.agent.strategy_pause).await;
        }

        // Batched (usually deferred) request for tuning advice
        if let Some(advice) = self
            .dispatcher
            .submit(
                "Review the recorded strategy results and suggest adjustments.",
                ContextCategory::StrategyResult,
                false,
            )
            .await
        {
            tracing::info!(chars = advice.len(), "received strategy tuning advice");
        }

        if self.state.daily_earnings < self.config.agent.daily_earning_goal {
            self.request_guidance().await;
        }

        self.publish_status().await;
    }

    async fn handle_outcome(&mut self, outcome: StrategyOutcome) {
        if outcome.success {
            self.state.daily_earnings += outcome.earnings;
            self.state.total_earnings += outcome.earnings;
            self.state.tasks_completed += 1;
            if !self.state.active_strategies.contains(&outcome.strategy) {
                self.state.active_strategies.push(outcome.strategy.clone());
            }

            tracing::info!(
                strategy = %outcome.strategy,
                earned = outcome.earnings,
                today = self.state.daily_earnings,
                "strategy completed"
            );

            if outcome.earnings > 0.0 {
                let record =
                    EarningsRecord::new(&outcome.strategy, outcome.earnings, &outcome.detail);
                if let Err(e) = self.journal.append(&record).await {
                    tracing::warn!(error = %e, "failed to journal earnings record");
                }
            }
        } else {
            tracing::warn!(
                strategy = %outcome.strategy,
                detail = %outcome.detail,
                "strategy produced nothing"
            );
        }

        let summary = format!("{}: {}", outcome.strategy, outcome.detail);
        self.dispatcher
            .buffer(ContextCategory::StrategyResult, &summary);
    }

    /// Critical earning-opportunity analysis, sent when the agent is behind
    /// its goal. Critical submissions always dispatch.
    async fn request_guidance(&mut self) {
        let prompt = self.build_analysis_prompt();
        match self
            .dispatcher
            .submit(&prompt, ContextCategory::MarketData, true)
            .await
        {
            Some(plan) => {
                tracing::info!(chars = plan.len(), "received earning-opportunity analysis")
            }
            None => tracing::debug!("no analysis available (no upstream capacity)"),
        }
    }

    fn build_analysis_prompt(&self) -> String {
        let goal = self.config.agent.daily_earning_goal;
        let earned = self.state.daily_earnings;
        format!(
            "You are an expert on earning money online. Analyse the current \
             situation and propose concrete actions.\n\n\
             CURRENT DATA:\n\
             - Earned today: ${earned:.2}\n\
             - Goal: ${goal:.2} per day\n\
             - Still to earn: ${:.2}\n\n\
             AVAILABLE STRATEGIES:\n\
             1. Freelance (micro tasks, translations, data entry)\n\
             2. Content creation (posts, product descriptions)\n\
             3. Surveys and testing\n\
             4. Crypto trading\n\n\
             GIVE A CONCRETE PLAN:\n\
             1. Which strategy to use NOW?\n\
             2. Where exactly to look for tasks?\n\
             3. How much time to spend?\n\
             4. Expected income?\n\n\
             The answer must be practical and achievable TODAY.",
            (goal - earned).max(0.0)
        )
    }

    /// Log the day's totals and reset the daily counters. Deactivated keys
    /// stay deactivated; only usage counters roll over.
    async fn end_of_day(&mut self) {
        tracing::info!(
            earned = self.state.daily_earnings,
            tasks = self.state.tasks_completed,
            "end of day"
        );

        self.state.daily_earnings = 0.0;
        self.state.tasks_completed = 0;
        self.state.active_strategies.clear();

        self.publish_status().await;
    }

    /// Stop the loop and log lifetime totals.
    pub async fn shutdown(&mut self) {
        self.state.running = false;
        tracing::info!(
            total = self.state.total_earnings,
            "agent shut down"
        );
        self.publish_status().await;
    }

    async fn publish_status(&self) {
        let goal = self.config.agent.daily_earning_goal;
        let snapshot = AgentStatus {
            running: self.state.running,
            daily_earnings: self.state.daily_earnings,
            total_earnings: self.state.total_earnings,
            tasks_completed: self.state.tasks_completed,
            active_strategies: self.state.active_strategies.clone(),
            daily_goal: goal,
            progress_percent: if goal > 0.0 {
                self.state.daily_earnings / goal * 100.0
            } else {
                0.0
            },
            api: self.dispatcher.stats(),
        };

        *self.status.write().await = snapshot;
        *self.strategy_stats.write().await = self.strategies.stats().clone();
    }
}

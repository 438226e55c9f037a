//! End-to-end tests wiring the agent loop, dispatcher and journal together

use agent::services::{ContextAccumulator, EarningsLog, KeyPool, RequestDispatcher};
use agent::strategies::StrategyManager;
use agent::traits::MockGenerativeClient;
use agent::{AutonomousAgent, Config};

use shared::ContextCategory;

fn full_config(journal_path: std::path::PathBuf) -> Config {
    let mut config = Config::default();
    config.api.gemini_api_keys = vec!["key-a".to_string(), "key-b".to_string()];
    config.api.openai_api_key = Some("openai".to_string());
    config.api.upwork_client_id = Some("upwork".to_string());
    config.api.binance_api_key = Some("binance".to_string());
    config.monitoring.earnings_log_path = journal_path;
    config
}

#[tokio::test(start_paused = true)]
async fn test_single_cycle_runs_best_strategy_and_publishes_status() {
    let dir = tempfile::tempdir().unwrap();
    let journal_path = dir.path().join("earnings.jsonl");
    let config = full_config(journal_path.clone());

    // The cycle stays behind its goal, so it always ends with one critical
    // guidance dispatch
    let mut client = MockGenerativeClient::new();
    client
        .expect_generate()
        .times(1)
        .returning(|_, _| Ok("use freelance next".to_string()));

    let pool = KeyPool::new(config.api.gemini_api_keys.clone());
    let dispatcher = RequestDispatcher::new(pool, ContextAccumulator::new(), client);
    let strategies = StrategyManager::new(&config);
    let journal = EarningsLog::new(&journal_path);

    let mut agent = AutonomousAgent::new(config, dispatcher, strategies, journal.clone());
    let status = agent.status_handle();
    let strategy_stats = agent.strategy_stats_handle();

    agent.run_cycle().await;

    // With every credential configured, freelance has the best estimate and
    // covers the $1 goal on its own
    let stats = strategy_stats.read().await.clone();
    assert_eq!(stats["freelance"].executions, 1);
    assert_eq!(stats["crypto_trading"].executions, 0);

    let snapshot = status.read().await.clone();
    assert_eq!(snapshot.api.total_keys, 2);
    assert_eq!(snapshot.daily_goal, 1.0);
    assert!(snapshot.daily_earnings >= 0.0);

    // Journal and state agree on what was earned
    let journaled: f64 = journal.total().await.unwrap();
    assert!((journaled - snapshot.daily_earnings).abs() < 1e-9);
}

#[tokio::test]
async fn test_deferred_submissions_batch_into_one_dispatch() {
    let mut client = MockGenerativeClient::new();
    client
        .expect_generate()
        .withf(|_, prompt| prompt.contains("SESSION CONTEXT:"))
        .times(1)
        .returning(|_, _| Ok("batched".to_string()));

    let pool = KeyPool::new(vec!["key-a".to_string()]);
    let mut dispatcher = RequestDispatcher::new(pool, ContextAccumulator::new(), client);

    for i in 0..5 {
        let deferred = dispatcher
            .submit(
                &format!("observation {i}"),
                ContextCategory::MarketData,
                false,
            )
            .await;
        assert!(deferred.is_none());
    }

    // The critical request flushes everything buffered so far
    let result = dispatcher
        .submit("what should happen now?", ContextCategory::General, true)
        .await;

    assert_eq!(result.as_deref(), Some("batched"));
    assert_eq!(dispatcher.stats().buffer_size, 0);
    assert_eq!(dispatcher.stats().total_requests_today, 1);
}

#[tokio::test(start_paused = true)]
async fn test_capacity_exhaustion_degrades_to_no_result() {
    let mut client = MockGenerativeClient::new();
    client
        .expect_generate()
        .returning(|_, _| Err(shared::ApiFailure::QuotaExceeded));

    let pool = KeyPool::new(vec!["key-a".to_string()]);
    let mut dispatcher = RequestDispatcher::new(pool, ContextAccumulator::new(), client);

    // Keep submitting critical requests until the key is error-locked; every
    // outcome is a quiet None, never a panic or error
    for _ in 0..3 {
        let result = dispatcher
            .submit("urgent", ContextCategory::General, true)
            .await;
        assert!(result.is_none());
    }

    assert_eq!(dispatcher.stats().active_keys, 0);
}

//! Agent binary entry point

use clap::Parser;

use agent::services::{ContextAccumulator, EarningsLog, GeminiClient, KeyPool, RequestDispatcher};
use agent::strategies::StrategyManager;
use agent::web;
use agent::{AutonomousAgent, Config};

#[derive(Parser)]
#[command(name = "agent")]
#[command(about = "Autonomous earning agent with API key rotation and context batching")]
struct Args {
    /// Dashboard port override
    #[arg(long)]
    port: Option<u16>,

    /// Daily earning goal override, in dollars
    #[arg(long)]
    goal: Option<f64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = Config::from_env();
    if let Some(port) = args.port {
        config.monitoring.dashboard_port = port;
    }
    if let Some(goal) = args.goal {
        config.agent.daily_earning_goal = goal;
    }
    if let Some(level) = args.log_level {
        config.monitoring.log_level = level;
    }

    shared::logging::init_tracing(Some(&config.monitoring.log_level));
    config.validate();

    if config.api.gemini_api_keys.is_empty() {
        tracing::warn!("GEMINI_API_KEYS is not set; model-backed analysis will be unavailable");
    } else {
        tracing::info!(
            keys = config.api.gemini_api_keys.len(),
            "API key pool initialized"
        );
    }

    let pool = KeyPool::new(config.api.gemini_api_keys.clone());
    let dispatcher = RequestDispatcher::new(pool, ContextAccumulator::new(), GeminiClient::new());
    let strategies = StrategyManager::new(&config);
    let journal = EarningsLog::new(&config.monitoring.earnings_log_path);

    let mut agent = AutonomousAgent::new(config.clone(), dispatcher, strategies, journal.clone());

    let app_state = web::AppState {
        status: agent.status_handle(),
        strategy_stats: agent.strategy_stats_handle(),
        journal,
    };
    let port = config.monitoring.dashboard_port;
    tokio::spawn(async move {
        if let Err(e) = web::serve(app_state, port).await {
            tracing::error!(error = %e, "dashboard server exited");
        }
    });

    tracing::info!(
        goal = config.agent.daily_earning_goal,
        "starting autonomous agent"
    );
    tracing::info!("dashboard available at http://127.0.0.1:{port}");

    tokio::select! {
        _ = agent.run() => {}
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown signal received");
        }
    }

    agent.shutdown().await;
    Ok(())
}

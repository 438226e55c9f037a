//! Environment-driven configuration
//!
//! All settings are loaded from environment variables, with a `.env` file
//! in the current directory (or any parent) taken into account first.
//! Real environment variables take precedence over `.env` values.
//!
//! ## Keys
//! - `GEMINI_API_KEYS`: comma-separated pool of Gemini API keys. Falls back
//!   to a single `GOOGLE_API_KEY` / `GOOGLE_AI_API_KEY` when unset.
//! - Strategy credentials (all optional; strategies without credentials are
//!   skipped): `OPENAI_API_KEY`, `UPWORK_CLIENT_ID`, `UPWORK_CLIENT_SECRET`,
//!   `FIVERR_API_KEY`, `BINANCE_API_KEY`, `BINANCE_SECRET_KEY`.
//! - Tuning: `DAILY_EARNING_GOAL`, `MAX_DAILY_TASKS`, `RISK_TOLERANCE`,
//!   `DASHBOARD_PORT`, `LOG_LEVEL`, `EARNINGS_LOG_PATH`.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Upstream and strategy credentials.
#[derive(Debug, Clone, Default)]
pub struct ApiConfig {
    pub gemini_api_keys: Vec<String>,
    pub openai_api_key: Option<String>,
    pub upwork_client_id: Option<String>,
    pub upwork_client_secret: Option<String>,
    pub fiverr_api_key: Option<String>,
    pub binance_api_key: Option<String>,
    pub binance_secret_key: Option<String>,
}

/// Agent loop tuning.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Daily earning goal, in dollars.
    pub daily_earning_goal: f64,
    /// Maximum strategy executions per day.
    pub max_daily_tasks: u32,
    /// Risk tolerance in [0, 1]; scales the crypto strategy's estimate.
    pub risk_tolerance: f64,
    /// Pause between cycles.
    pub cycle_interval: Duration,
    /// Pause between strategy executions within a cycle.
    pub strategy_pause: Duration,
    /// Pause when no strategy is available.
    pub idle_interval: Duration,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            daily_earning_goal: 1.0,
            max_daily_tasks: 10,
            risk_tolerance: 0.3,
            cycle_interval: Duration::from_secs(60),
            strategy_pause: Duration::from_secs(30),
            idle_interval: Duration::from_secs(300),
        }
    }
}

/// Dashboard and logging settings.
#[derive(Debug, Clone)]
pub struct MonitoringConfig {
    pub dashboard_port: u16,
    pub log_level: String,
    pub earnings_log_path: PathBuf,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            dashboard_port: 8080,
            log_level: "info".to_string(),
            earnings_log_path: PathBuf::from("data/earnings.jsonl"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub api: ApiConfig,
    pub agent: AgentConfig,
    pub monitoring: MonitoringConfig,
}

impl Config {
    /// Load configuration from the environment (after reading `.env`).
    pub fn from_env() -> Self {
        // Silently ignored when no .env file exists
        let _ = dotenvy::dotenv();

        let gemini_api_keys = env_opt("GEMINI_API_KEYS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|key| !key.is_empty())
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        // Single-key fallback for setups without a pool
        let gemini_api_keys = if gemini_api_keys.is_empty() {
            env_opt("GOOGLE_API_KEY")
                .or_else(|| env_opt("GOOGLE_AI_API_KEY"))
                .map(|key| vec![key])
                .unwrap_or_default()
        } else {
            gemini_api_keys
        };

        let api = ApiConfig {
            gemini_api_keys,
            openai_api_key: env_opt("OPENAI_API_KEY"),
            upwork_client_id: env_opt("UPWORK_CLIENT_ID"),
            upwork_client_secret: env_opt("UPWORK_CLIENT_SECRET"),
            fiverr_api_key: env_opt("FIVERR_API_KEY"),
            binance_api_key: env_opt("BINANCE_API_KEY"),
            binance_secret_key: env_opt("BINANCE_SECRET_KEY"),
        };

        let defaults = AgentConfig::default();
        let agent = AgentConfig {
            daily_earning_goal: env_parsed("DAILY_EARNING_GOAL", defaults.daily_earning_goal),
            max_daily_tasks: env_parsed("MAX_DAILY_TASKS", defaults.max_daily_tasks),
            risk_tolerance: env_parsed("RISK_TOLERANCE", defaults.risk_tolerance),
            ..defaults
        };

        let defaults = MonitoringConfig::default();
        let monitoring = MonitoringConfig {
            dashboard_port: env_parsed("DASHBOARD_PORT", defaults.dashboard_port),
            log_level: env_opt("LOG_LEVEL").unwrap_or(defaults.log_level),
            earnings_log_path: env_opt("EARNINGS_LOG_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.earnings_log_path),
        };

        Config {
            api,
            agent,
            monitoring,
        }
    }

    /// Names of credentials that are not configured.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.api.gemini_api_keys.is_empty() {
            missing.push("GEMINI_API_KEYS");
        }
        if self.api.openai_api_key.is_none() {
            missing.push("OPENAI_API_KEY");
        }
        if self.api.upwork_client_id.is_none() && self.api.fiverr_api_key.is_none() {
            missing.push("UPWORK_CLIENT_ID/FIVERR_API_KEY");
        }
        if self.api.binance_api_key.is_none() {
            missing.push("BINANCE_API_KEY");
        }
        missing
    }

    /// Warn about missing credentials. The agent still starts in a reduced
    /// mode: strategies without credentials are skipped.
    pub fn validate(&self) -> bool {
        let missing = self.missing_credentials();
        if missing.is_empty() {
            return true;
        }
        tracing::warn!(
            "missing credentials: {} (running in reduced mode)",
            missing.join(", ")
        );
        false
    }
}

fn env_opt(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn env_parsed<T: std::str::FromStr>(name: &str, default: T) -> T {
    env_opt(name)
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

//! Tracing setup shared by the agent binary and its tests

/// Initialize the stdout tracing subscriber with per-crate level filters.
///
/// Noisy HTTP internals are pinned to `warn` regardless of the base level.
pub fn init_tracing(log_level: Option<&str>) {
    use tracing_subscriber::{fmt, EnvFilter};

    let base_level = log_level.unwrap_or("info");
    let filter = format!(
        "agent={base_level},shared={base_level},tower_http=warn,hyper=warn,reqwest=warn"
    );

    fmt()
        .with_env_filter(EnvFilter::new(&filter))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    tracing::debug!("logging initialized at level {base_level}");
}

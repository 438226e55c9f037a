//! REST API handlers
//!
//! HTTP endpoints for the dashboard: agent status, strategy stats and the
//! earnings history.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, Json};
use serde_json::{json, Value};

use shared::AgentStatus;

use crate::web::AppState;

const DASHBOARD_HTML: &str = include_str!("dashboard.html");

/// Serve the embedded dashboard page.
pub async fn dashboard_page() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

/// Current agent status snapshot.
pub async fn get_status(State(state): State<AppState>) -> Json<AgentStatus> {
    Json(state.status.read().await.clone())
}

/// Per-strategy execution stats.
pub async fn get_strategies(State(state): State<AppState>) -> Json<Value> {
    let stats = state.strategy_stats.read().await.clone();
    Json(json!({ "strategies": stats }))
}

/// Recent earnings records plus the running total.
pub async fn get_earnings_history(
    State(state): State<AppState>,
) -> Result<Json<Value>, StatusCode> {
    let records = state
        .journal
        .recent(30)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    let total = state
        .journal
        .total()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(json!({
        "records": records,
        "total_earnings": total,
    })))
}

//! Embedded status dashboard
//!
//! Served from the agent process itself. Handlers only read published
//! snapshots and the earnings journal; they never touch the key pool or
//! the context buffer directly.

pub mod handlers;

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;

use shared::{AgentStatus, StrategyStats};

use crate::error::AgentResult;
use crate::services::EarningsLog;

#[derive(Clone)]
pub struct AppState {
    pub status: Arc<RwLock<AgentStatus>>,
    pub strategy_stats: Arc<RwLock<HashMap<String, StrategyStats>>>,
    pub journal: EarningsLog,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::api::dashboard_page))
        .route("/api/status", get(handlers::api::get_status))
        .route("/api/strategies", get(handlers::api::get_strategies))
        .route("/api/earnings/history", get(handlers::api::get_earnings_history))
        .route("/ws", get(handlers::websocket::websocket_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn serve(state: AppState, port: u16) -> AgentResult<()> {
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("dashboard listening on http://{addr}");
    axum::serve(listener, router(state)).await?;
    Ok(())
}

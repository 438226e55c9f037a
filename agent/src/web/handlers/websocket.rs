//! WebSocket status push
//!
//! Pushes a `status_update` frame to connected dashboard clients on a fixed
//! interval. Clients are read-only consumers; incoming frames are ignored
//! except for close.

use std::time::Duration;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::Response;
use chrono::Utc;
use futures_util::{SinkExt, StreamExt};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::web::AppState;

const STATUS_PUSH_INTERVAL: Duration = Duration::from_secs(5);

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> Response {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let client_id = Uuid::new_v4();
    info!(%client_id, "new dashboard WebSocket connection");

    let (mut sender, mut receiver) = socket.split();
    let mut ticker = tokio::time::interval(STATUS_PUSH_INTERVAL);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let status = state.status.read().await.clone();
                let frame = serde_json::json!({
                    "type": "status_update",
                    "data": status,
                    "timestamp": Utc::now().to_rfc3339(),
                });

                let text = match serde_json::to_string(&frame) {
                    Ok(text) => text,
                    Err(e) => {
                        warn!(error = %e, "failed to serialize status frame");
                        continue;
                    }
                };

                if sender.send(Message::Text(text)).await.is_err() {
                    break;
                }
            }
            msg = receiver.next() => {
                match msg {
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                    _ => {}
                }
            }
        }
    }

    debug!(%client_id, "dashboard WebSocket closed");
}

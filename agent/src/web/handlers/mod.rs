//! Dashboard HTTP and WebSocket handlers

pub mod api;
pub mod websocket;

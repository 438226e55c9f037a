//! Autonomous earning agent library
//!
//! Rotates a pool of generative-API keys, batches prompt context to cut
//! call volume, and cycles through simulated earning strategies. The only
//! stateful core is the key-rotation/context-batching dispatcher; every
//! strategy integration is a placeholder returning synthetic numbers.

pub mod config;
pub mod core;
pub mod error;
pub mod services;
pub mod strategies;
pub mod traits;
pub mod types;
pub mod web;

// Re-export main types
pub use config::Config;
pub use core::AutonomousAgent;
pub use error::{AgentError, AgentResult};
pub use services::{ContextAccumulator, EarningsLog, GeminiClient, KeyPool, RequestDispatcher};
pub use traits::{EarningStrategy, GenerativeClient};
pub use types::{AgentState, ContextItem, KeyRecord};

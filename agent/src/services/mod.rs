//! Service implementations: key pool, context batching, dispatch, upstream
//! client and the earnings journal

pub mod context_accumulator;
pub mod dispatcher;
pub mod earnings_log;
pub mod gemini_client;
pub mod key_pool;

pub use context_accumulator::ContextAccumulator;
pub use dispatcher::RequestDispatcher;
pub use earnings_log::EarningsLog;
pub use gemini_client::GeminiClient;
pub use key_pool::KeyPool;

#[cfg(test)]
mod tests;

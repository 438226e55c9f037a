//! Unit tests for the service implementations

mod context_accumulator;
mod earnings_log;

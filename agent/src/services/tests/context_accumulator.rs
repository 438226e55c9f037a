//! Tests for ContextAccumulator buffering and flush policy

use std::time::Duration;

use shared::ContextCategory;

use crate::services::context_accumulator::{BUFFER_RETAIN, FLUSH_THRESHOLD};
use crate::services::ContextAccumulator;

#[test]
fn test_eviction_keeps_most_recent_in_order() {
    let mut accumulator = ContextAccumulator::new();

    // Crossing capacity truncates to the most recent 30
    for i in 0..51 {
        accumulator.add(ContextCategory::General, format!("item-{i}"));
    }

    assert_eq!(accumulator.len(), BUFFER_RETAIN);
    let payloads: Vec<&str> = accumulator
        .items()
        .iter()
        .map(|item| item.payload.as_str())
        .collect();
    assert_eq!(payloads[0], "item-21");
    assert_eq!(payloads[BUFFER_RETAIN - 1], "item-50");
}

#[test]
fn test_buffer_stays_bounded_under_sustained_adds() {
    let mut accumulator = ContextAccumulator::new();

    for i in 0..200 {
        accumulator.add(ContextCategory::General, format!("item-{i}"));
    }

    assert!(accumulator.len() <= 50);
    assert_eq!(
        accumulator.items().last().unwrap().payload,
        "item-199"
    );
}

#[test]
fn test_should_flush_on_item_count() {
    let mut accumulator = ContextAccumulator::new();

    for i in 0..FLUSH_THRESHOLD - 1 {
        accumulator.add(ContextCategory::General, format!("item-{i}"));
        assert!(!accumulator.should_flush(false));
    }

    accumulator.add(ContextCategory::General, "the tenth item");
    assert!(accumulator.should_flush(false));
}

#[test]
fn test_critical_argument_forces_flush() {
    let accumulator = ContextAccumulator::new();
    assert!(accumulator.should_flush(true));
}

#[test]
fn test_buffered_critical_item_forces_flush() {
    let mut accumulator = ContextAccumulator::new();
    accumulator.add(ContextCategory::Critical, "must go out");
    assert!(accumulator.should_flush(false));
}

#[tokio::test(start_paused = true)]
async fn test_should_flush_after_interval() {
    let mut accumulator = ContextAccumulator::new();
    accumulator.add(ContextCategory::General, "a single item");
    assert!(!accumulator.should_flush(false));

    tokio::time::advance(Duration::from_secs(301)).await;
    assert!(accumulator.should_flush(false));
}

#[test]
fn test_build_batch_passes_through_on_empty_buffer() {
    let mut accumulator = ContextAccumulator::new();
    assert_eq!(accumulator.build_batch("plain request"), "plain request");
}

#[test]
fn test_build_batch_renders_and_drains() {
    let mut accumulator = ContextAccumulator::new();
    accumulator.add(ContextCategory::StrategyResult, "surveys paid $0.20");
    accumulator.add(ContextCategory::Earnings, "$0.20 today");
    accumulator.add(ContextCategory::Error, "freelance timed out");

    let prompt = accumulator.build_batch("what next?");

    assert!(prompt.contains("SESSION CONTEXT:"));
    assert!(prompt.contains("Strategy result: surveys paid $0.20"));
    assert!(prompt.contains("Earnings: $0.20 today"));
    assert!(prompt.contains("Error: freelance timed out"));
    assert!(prompt.contains("CURRENT REQUEST:\nwhat next?"));
    assert!(accumulator.is_empty());
}

#[test]
fn test_build_batch_summarizes_only_recent_items() {
    let mut accumulator = ContextAccumulator::with_flush_interval(Duration::from_secs(300));
    for i in 0..15 {
        accumulator.add(ContextCategory::General, format!("item-{i}"));
    }

    let prompt = accumulator.build_batch("current");

    // Only the last 10 buffered items make it into the summary
    assert!(!prompt.contains("Note: item-4\n"));
    assert!(prompt.contains("Note: item-5"));
    assert!(prompt.contains("Note: item-14"));
}

#[tokio::test(start_paused = true)]
async fn test_build_batch_resets_flush_timer() {
    let mut accumulator = ContextAccumulator::new();
    accumulator.add(ContextCategory::General, "first");

    tokio::time::advance(Duration::from_secs(301)).await;
    assert!(accumulator.should_flush(false));

    accumulator.build_batch("flushing");
    accumulator.add(ContextCategory::General, "second");
    assert!(!accumulator.should_flush(false));
}

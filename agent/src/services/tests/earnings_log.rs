//! Tests for the earnings journal

use shared::EarningsRecord;

use crate::services::EarningsLog;

#[tokio::test]
async fn test_missing_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let journal = EarningsLog::new(dir.path().join("earnings.jsonl"));

    assert!(journal.recent(10).await.unwrap().is_empty());
    assert_eq!(journal.total().await.unwrap(), 0.0);
}

#[tokio::test]
async fn test_append_and_read_back() {
    let dir = tempfile::tempdir().unwrap();
    let journal = EarningsLog::new(dir.path().join("earnings.jsonl"));

    journal
        .append(&EarningsRecord::new("surveys", 0.15, "one survey"))
        .await
        .unwrap();
    journal
        .append(&EarningsRecord::new("freelance", 0.6, "data entry"))
        .await
        .unwrap();

    let records = journal.recent(10).await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].strategy, "surveys");
    assert_eq!(records[1].strategy, "freelance");
    assert!((journal.total().await.unwrap() - 0.75).abs() < 1e-9);
}

#[tokio::test]
async fn test_recent_returns_newest_records() {
    let dir = tempfile::tempdir().unwrap();
    let journal = EarningsLog::new(dir.path().join("earnings.jsonl"));

    for i in 0..5 {
        journal
            .append(&EarningsRecord::new("surveys", 0.1, format!("round {i}")))
            .await
            .unwrap();
    }

    let records = journal.recent(2).await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].detail, "round 3");
    assert_eq!(records[1].detail, "round 4");
}

#[tokio::test]
async fn test_malformed_lines_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("earnings.jsonl");
    let journal = EarningsLog::new(&path);

    journal
        .append(&EarningsRecord::new("surveys", 0.2, "fine"))
        .await
        .unwrap();
    tokio::fs::write(
        &path,
        format!(
            "{}not json\n",
            tokio::fs::read_to_string(&path).await.unwrap()
        ),
    )
    .await
    .unwrap();

    let records = journal.recent(10).await.unwrap();
    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn test_append_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let journal = EarningsLog::new(dir.path().join("nested/dir/earnings.jsonl"));

    journal
        .append(&EarningsRecord::new("surveys", 0.1, "nested"))
        .await
        .unwrap();

    assert_eq!(journal.recent(10).await.unwrap().len(), 1);
}

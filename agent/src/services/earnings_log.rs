//! Append-only earnings journal (JSON lines)
//!
//! The journal is the only persisted state in the system. It exists for the
//! dashboard history view; nothing reads it back into agent state.

use std::path::PathBuf;

use tokio::io::AsyncWriteExt;

use shared::EarningsRecord;

use crate::error::AgentResult;

#[derive(Debug, Clone)]
pub struct EarningsLog {
    path: PathBuf,
}

impl EarningsLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Append one record, creating the file and parent directories on first
    /// use.
    pub async fn append(&self, record: &EarningsRecord) -> AgentResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;

        Ok(())
    }

    /// The most recent `n` records, oldest first. A missing file reads as
    /// empty.
    pub async fn recent(&self, n: usize) -> AgentResult<Vec<EarningsRecord>> {
        let records = self.read_all().await?;
        let start = records.len().saturating_sub(n);
        Ok(records[start..].to_vec())
    }

    /// Sum of all journaled amounts.
    pub async fn total(&self) -> AgentResult<f64> {
        let records = self.read_all().await?;
        Ok(records.iter().map(|record| record.amount).sum())
    }

    async fn read_all(&self) -> AgentResult<Vec<EarningsRecord>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut records = Vec::new();
        for line in content.lines().filter(|line| !line.trim().is_empty()) {
            match serde_json::from_str(line) {
                Ok(record) => records.push(record),
                Err(e) => tracing::debug!(error = %e, "skipping malformed journal line"),
            }
        }
        Ok(records)
    }
}

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use roster_core::{LoadError, Snapshot};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Result of a successful roster reload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshSummary {
    pub loaded_users: usize,
    pub skipped_rows: usize,
    pub generation: u64,
    pub loaded_at: Option<DateTime<Utc>>,
}

impl From<&Snapshot> for RefreshSummary {
    fn from(snapshot: &Snapshot) -> Self {
        Self {
            loaded_users: snapshot.len(),
            skipped_rows: snapshot.skipped(),
            generation: snapshot.generation(),
            loaded_at: snapshot.loaded_at(),
        }
    }
}

/// Source of roster data for the HTTP handlers.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Reloads the roster, keeping the previous one on failure.
    async fn refresh(&self) -> Result<RefreshSummary, LoadError>;

    /// The roster as of the latest successful refresh.
    async fn users(&self) -> Arc<Snapshot>;

    /// Where the roster is read from.
    fn source(&self) -> PathBuf;
}

//! In-memory snapshot storage for the roster.
//!
//! [`UserStore`] holds exactly one [`Snapshot`] at a time behind an
//! `Arc`. A refresh builds a complete new snapshot off the async executor and
//! swaps the reference under a write lock, so a reader holding an
//! `Arc<Snapshot>` keeps a consistent view of one generation for as long as
//! it needs it. Concurrent refreshes resolve last-writer-wins.

use crate::loader::{LoadError, UserLoader};
use chrono::Utc;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};

pub mod snapshot;

pub use snapshot::Snapshot;

/// Holder of the current roster snapshot.
pub struct UserStore {
    source: PathBuf,
    snapshot: RwLock<Arc<Snapshot>>,
}

impl UserStore {
    /// Creates an empty store reading from `source` on refresh.
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            snapshot: RwLock::new(Arc::new(Snapshot::default())),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Returns the current snapshot; empty until the first refresh succeeds.
    pub async fn current(&self) -> Arc<Snapshot> {
        self.snapshot.read().await.clone()
    }

    /// Reloads the source file and replaces the snapshot.
    ///
    /// On failure the previous snapshot stays in place and the error is
    /// returned to the caller.
    pub async fn refresh(&self) -> Result<Arc<Snapshot>, LoadError> {
        let source = self.source.clone();
        let loaded = tokio::task::spawn_blocking(move || UserLoader::load_users_from_file(source))
            .await
            .map_err(|e| LoadError::Task(e.to_string()))
            .and_then(|result| result);

        let report = match loaded {
            Ok(report) => report,
            Err(e) => {
                error!(path = %self.source.display(), error = %e, "users refresh failed");
                return Err(e);
            }
        };

        let mut current = self.snapshot.write().await;
        let snapshot = Arc::new(Snapshot::new(
            report.users,
            report.skipped.len(),
            current.generation() + 1,
            Utc::now(),
        ));
        *current = snapshot.clone();

        info!(
            generation = snapshot.generation(),
            users = snapshot.len(),
            skipped = snapshot.skipped(),
            "users snapshot replaced"
        );
        Ok(snapshot)
    }
}

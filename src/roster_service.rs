use crate::config::Settings;
use crate::directory::{RefreshSummary, UserDirectory};
use async_trait::async_trait;
use roster_core::{LoadError, Snapshot, UserStore};
use std::path::PathBuf;
use std::sync::Arc;

/// [`UserDirectory`] backed by the in-process CSV snapshot store.
pub struct RosterServiceImpl {
    store: UserStore,
}

impl RosterServiceImpl {
    pub fn new(settings: &Settings) -> Self {
        Self {
            store: UserStore::new(settings.data.path.clone()),
        }
    }
}

#[async_trait]
impl UserDirectory for RosterServiceImpl {
    async fn refresh(&self) -> Result<RefreshSummary, LoadError> {
        let snapshot = self.store.refresh().await?;
        Ok(RefreshSummary::from(snapshot.as_ref()))
    }

    async fn users(&self) -> Arc<Snapshot> {
        self.store.current().await
    }

    fn source(&self) -> PathBuf {
        self.store.source().to_path_buf()
    }
}

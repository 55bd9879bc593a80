use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use tracing::{error, info};

use crate::repository::MetadataRepository;

#[derive(Debug, Clone)]
pub struct MetadataConfig {
    pub sqlite_path: String,
    pub max_connections: u32,
    pub reconnect_interval: Duration,
}

#[derive(Debug, Default)]
struct Slot {
    repository: Option<MetadataRepository>,
    last_attempt: Option<Instant>,
}

/// Process-wide access to the metadata repository.
///
/// Starts degraded when the first connection fails and retries lazily, at
/// most once per `reconnect_interval`, when an operation needs the store.
#[derive(Debug, Clone)]
pub struct MetadataHandle {
    config: Arc<MetadataConfig>,
    slot: Arc<Mutex<Slot>>,
}

impl MetadataHandle {
    pub async fn open(config: MetadataConfig) -> Self {
        let handle = Self {
            config: Arc::new(config),
            slot: Arc::new(Mutex::new(Slot::default())),
        };
        {
            let mut slot = handle.slot.lock().await;
            handle.try_connect(&mut slot).await;
        }
        handle
    }

    /// Current repository, reconnecting first if the store is down and the
    /// retry interval has passed.
    pub async fn repository(&self) -> Option<MetadataRepository> {
        let mut slot = self.slot.lock().await;
        if slot.repository.is_none() {
            let due = slot
                .last_attempt
                .map_or(true, |at| at.elapsed() >= self.config.reconnect_interval);
            if due {
                self.try_connect(&mut slot).await;
            }
        }
        slot.repository.clone()
    }

    pub async fn is_connected(&self) -> bool {
        self.slot.lock().await.repository.is_some()
    }

    /// Closes the pool. A later `repository()` call reconnects.
    pub async fn close(&self) {
        let mut slot = self.slot.lock().await;
        if let Some(repository) = slot.repository.take() {
            repository.close().await;
            info!(sqlite_path = %self.config.sqlite_path, "metadata store closed");
        }
        slot.last_attempt = None;
    }

    async fn try_connect(&self, slot: &mut Slot) {
        slot.last_attempt = Some(Instant::now());
        match MetadataRepository::connect(&self.config.sqlite_path, self.config.max_connections)
            .await
        {
            Ok(repository) => {
                info!(sqlite_path = %self.config.sqlite_path, "metadata store connected");
                slot.repository = Some(repository);
            }
            Err(err) => {
                error!(
                    sqlite_path = %self.config.sqlite_path,
                    error = %format!("{err:#}"),
                    "metadata store connect failed"
                );
                slot.repository = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(path: &std::path::Path, reconnect_interval: Duration) -> MetadataConfig {
        MetadataConfig {
            sqlite_path: path.to_str().expect("utf-8 path").to_string(),
            max_connections: 1,
            reconnect_interval,
        }
    }

    #[tokio::test]
    async fn opens_connected_when_store_is_reachable() {
        let dir = tempfile::tempdir().expect("tempdir");
        let handle = MetadataHandle::open(config_for(&dir.path().join("m.db"), Duration::ZERO)).await;

        assert!(handle.is_connected().await);
        assert!(handle.repository().await.is_some());
    }

    #[tokio::test]
    async fn starts_degraded_and_recovers_once_store_appears() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing_parent = dir.path().join("not-yet");
        let handle =
            MetadataHandle::open(config_for(&missing_parent.join("m.db"), Duration::ZERO)).await;

        assert!(!handle.is_connected().await);
        assert!(handle.repository().await.is_none());

        std::fs::create_dir(&missing_parent).expect("create parent");
        assert!(handle.repository().await.is_some());
    }

    #[tokio::test]
    async fn waits_for_reconnect_interval() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing_parent = dir.path().join("not-yet");
        let handle = MetadataHandle::open(config_for(
            &missing_parent.join("m.db"),
            Duration::from_secs(3600),
        ))
        .await;

        std::fs::create_dir(&missing_parent).expect("create parent");
        assert!(handle.repository().await.is_none());
    }

    #[tokio::test]
    async fn close_then_reuse_reconnects() {
        let dir = tempfile::tempdir().expect("tempdir");
        let handle = MetadataHandle::open(config_for(&dir.path().join("m.db"), Duration::ZERO)).await;

        handle.close().await;
        assert!(!handle.is_connected().await);
        assert!(handle.repository().await.is_some());
    }
}

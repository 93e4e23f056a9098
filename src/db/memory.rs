use anyhow::{Context, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use tokio::sync::RwLock;
use tracing::info;

use super::backend::TrafficLogBackend;
use crate::models::TrafficLog;

/// Traffic logs held in process memory, keyed by identifier
#[derive(Default)]
pub struct InMemoryBackend {
    logs: RwLock<HashMap<String, TrafficLog>>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_logs(logs: Vec<TrafficLog>) -> Self {
        let logs = logs
            .into_iter()
            .map(|log| (log.identifier.clone(), log))
            .collect();
        Self {
            logs: RwLock::new(logs),
        }
    }

    /// Load a JSON array of traffic logs from `path`
    pub async fn from_seed_file(path: &Path) -> Result<Self> {
        let raw = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read seed file {}", path.display()))?;
        let logs: Vec<TrafficLog> = serde_json::from_slice(&raw).with_context(|| {
            format!(
                "Seed file {} is not a JSON array of traffic logs",
                path.display()
            )
        })?;

        info!("Loaded {} traffic logs from {}", logs.len(), path.display());
        Ok(Self::with_logs(logs))
    }
}

#[async_trait]
impl TrafficLogBackend for InMemoryBackend {
    async fn get_traffic_log(&self, identifier: &str) -> Result<Option<TrafficLog>> {
        Ok(self.logs.read().await.get(identifier).cloned())
    }

    async fn insert_traffic_logs(&self, logs: Vec<TrafficLog>) -> Result<()> {
        let mut stored = self.logs.write().await;
        for log in logs {
            stored.insert(log.identifier.clone(), log);
        }
        Ok(())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.logs.read().await.len())
    }
}

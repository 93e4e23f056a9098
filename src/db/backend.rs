use anyhow::Result;
use async_trait::async_trait;

use crate::models::TrafficLog;

/// Storage backend trait for traffic log lookups
#[async_trait]
pub trait TrafficLogBackend: Send + Sync {
    /// Get a traffic log by identifier
    async fn get_traffic_log(&self, identifier: &str) -> Result<Option<TrafficLog>>;

    /// Insert or replace a batch of traffic logs
    async fn insert_traffic_logs(&self, logs: Vec<TrafficLog>) -> Result<()>;

    /// Number of stored traffic logs
    async fn count(&self) -> Result<usize>;
}

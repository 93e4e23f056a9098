pub mod backend;
pub mod memory;

use anyhow::Result;
use std::sync::Arc;

pub use backend::TrafficLogBackend;
pub use memory::InMemoryBackend;

/// Traffic log storage - polymorphic over backends
pub type Database = Arc<dyn TrafficLogBackend>;

/// Initialize the traffic log backend, seeding it when a seed file is configured
pub async fn init_database(config: &crate::config::StorageConfig) -> Result<Database> {
    tracing::info!("Initializing in-memory traffic log backend");
    let backend = match &config.seed_file {
        Some(path) => InMemoryBackend::from_seed_file(path).await?,
        None => InMemoryBackend::new(),
    };
    Ok(Arc::new(backend) as Database)
}

use std::sync::Arc;

use tracing::warn;

use crate::config::AppConfig;
use crate::store::{MemoryStore, PgStore, Store};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init(config: AppConfig) -> anyhow::Result<Self> {
        let store = match config.database_url.as_deref() {
            Some(url) => {
                Arc::new(PgStore::connect(url, config.max_connections).await?) as Arc<dyn Store>
            }
            None => {
                warn!("DATABASE_URL not set; records are kept in memory and lost on restart");
                Arc::new(MemoryStore::new()) as Arc<dyn Store>
            }
        };

        Ok(Self::from_parts(store, Arc::new(config)))
    }

    pub fn from_parts(store: Arc<dyn Store>, config: Arc<AppConfig>) -> Self {
        Self { store, config }
    }

    #[cfg(test)]
    pub fn fake() -> Self {
        let config = Arc::new(AppConfig {
            database_url: None,
            host: "127.0.0.1".into(),
            port: 0,
            max_connections: 1,
        });
        Self::from_parts(Arc::new(MemoryStore::new()), config)
    }
}

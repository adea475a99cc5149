use std::net::SocketAddr;

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Postgres connection string. `None` runs the service on the in-memory store.
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").filter(|v| !v.trim().is_empty());
        let host = lookup("APP_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = match lookup("APP_PORT").or_else(|| lookup("PORT")) {
            Some(v) => v
                .parse::<u16>()
                .with_context(|| format!("invalid listen port {v:?}"))?,
            None => 8080,
        };
        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(v) => v
                .parse::<u32>()
                .with_context(|| format!("invalid DB_MAX_CONNECTIONS {v:?}"))?,
            None => 10,
        };
        Ok(Self {
            database_url,
            host,
            port,
            max_connections,
        })
    }

    pub fn listen_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}

use anyhow::Context;
use sqlx::{
    Pool, Postgres,
    postgres::{PgConnectOptions, PgPoolOptions, PgSslMode},
};
use std::{str::FromStr, time::Duration};
use tracing::info;

pub type ConnectionPool = Pool<Postgres>;

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub accept_invalid_certs: bool,
    pub min_connections: u32,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

pub struct ConnectionManager;

impl ConnectionManager {
    /// Builds a pool that connects on first use, so an unreachable database
    /// surfaces as a per-query error instead of a startup failure.
    pub fn new_pool(config: &DatabaseConfig) -> anyhow::Result<ConnectionPool> {
        let options = Self::connect_options(config)?;

        let pool = PgPoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect_lazy_with(options);

        info!(
            "🗄️  Database pool ready (min: {}, max: {}, relaxed tls: {})",
            config.min_connections, config.max_connections, config.accept_invalid_certs
        );

        Ok(pool)
    }

    pub fn connect_options(config: &DatabaseConfig) -> anyhow::Result<PgConnectOptions> {
        let options = PgConnectOptions::from_str(&config.url)
            .context("Failed to parse database connection string")?;

        // `require` encrypts the connection but skips certificate and
        // hostname verification, which hosted providers with self-signed
        // certificates need.
        if config.accept_invalid_certs {
            Ok(options.ssl_mode(PgSslMode::Require))
        } else {
            Ok(options)
        }
    }
}

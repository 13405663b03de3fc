use anyhow::{Context, Result, anyhow};
use shared::{config::DatabaseConfig, utils::LogOptions};
use std::time::Duration;

/// How `POST /submit` treats the incoming body before it reaches storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Forward every field as-is and let the column types decide.
    #[default]
    Passthrough,
    /// Reject missing names, oversized text and negative prices up front.
    Strict,
}

impl std::str::FromStr for ValidationMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "passthrough" => Ok(Self::Passthrough),
            "strict" => Ok(Self::Strict),
            other => Err(anyhow!(
                "ORDER_VALIDATION must be 'passthrough' or 'strict', got '{}'",
                other
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database: DatabaseConfig,
    pub validation: ValidationMode,
    pub otel_endpoint: Option<String>,
    pub log: LogOptions,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;

        let port = lookup("PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let accept_invalid_certs = parse_bool(&lookup, "DATABASE_ACCEPT_INVALID_CERTS", false)?;

        let max_connections = lookup("DB_MAX_CONNECTION")
            .unwrap_or_else(|| "5".to_string())
            .parse::<u32>()
            .context("Unable to parse DB_MAX_CONNECTION as u32")?;

        let min_connections = lookup("DB_MIN_CONNECTION")
            .unwrap_or_else(|| "0".to_string())
            .parse::<u32>()
            .context("Unable to parse DB_MIN_CONNECTION as u32")?;

        if min_connections > max_connections {
            return Err(anyhow!(
                "DB_MIN_CONNECTION ({}) must not exceed DB_MAX_CONNECTION ({})",
                min_connections,
                max_connections
            ));
        }

        let acquire_timeout_secs = lookup("DB_ACQUIRE_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".to_string())
            .parse::<u64>()
            .context("Unable to parse DB_ACQUIRE_TIMEOUT_SECS as u64")?;

        let validation = lookup("ORDER_VALIDATION")
            .map(|v| v.parse::<ValidationMode>())
            .transpose()?
            .unwrap_or_default();

        let otel_endpoint = lookup("OTEL_EXPORTER_OTLP_ENDPOINT").filter(|v| !v.is_empty());

        let log = LogOptions {
            is_dev: parse_bool(&lookup, "DEV_MODE", false)?,
            enable_file: parse_bool(&lookup, "ENABLE_FILE_LOG", false)?,
        };

        Ok(Self {
            port,
            database: DatabaseConfig {
                url: database_url,
                accept_invalid_certs,
                min_connections,
                max_connections,
                acquire_timeout: Duration::from_secs(acquire_timeout_secs),
            },
            validation,
            otel_endpoint,
            log,
        })
    }
}

fn parse_bool<F>(lookup: &F, key: &str, default: bool) -> Result<bool>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).as_deref() {
        None => Ok(default),
        Some("true") | Some("1") => Ok(true),
        Some("false") | Some("0") => Ok(false),
        Some(other) => Err(anyhow!(
            "{} must be 'true' or 'false', got '{}'",
            key,
            other
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let config = config_from(&[("DATABASE_URL", "postgres://localhost/orders")]).unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.database.min_connections, 0);
        assert_eq!(config.database.acquire_timeout, Duration::from_secs(30));
        assert!(!config.database.accept_invalid_certs);
        assert_eq!(config.validation, ValidationMode::Passthrough);
        assert!(config.otel_endpoint.is_none());
    }

    #[test]
    fn database_url_is_required() {
        let err = config_from(&[("PORT", "3000")]).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://db/orders"),
            ("PORT", "3000"),
            ("DATABASE_ACCEPT_INVALID_CERTS", "true"),
            ("DB_MAX_CONNECTION", "12"),
            ("DB_MIN_CONNECTION", "2"),
            ("ORDER_VALIDATION", "strict"),
            ("OTEL_EXPORTER_OTLP_ENDPOINT", "http://otel-collector:4317"),
        ])
        .unwrap();

        assert_eq!(config.port, 3000);
        assert!(config.database.accept_invalid_certs);
        assert_eq!(config.database.max_connections, 12);
        assert_eq!(config.database.min_connections, 2);
        assert_eq!(config.validation, ValidationMode::Strict);
        assert_eq!(
            config.otel_endpoint.as_deref(),
            Some("http://otel-collector:4317")
        );
    }

    #[test]
    fn rejects_malformed_values() {
        assert!(config_from(&[("DATABASE_URL", "x"), ("PORT", "eighty")]).is_err());
        assert!(
            config_from(&[("DATABASE_URL", "x"), ("DATABASE_ACCEPT_INVALID_CERTS", "yes")])
                .is_err()
        );
        assert!(config_from(&[("DATABASE_URL", "x"), ("ORDER_VALIDATION", "lenient")]).is_err());
        assert!(
            config_from(&[
                ("DATABASE_URL", "x"),
                ("DB_MIN_CONNECTION", "10"),
                ("DB_MAX_CONNECTION", "2"),
            ])
            .is_err()
        );
    }
}

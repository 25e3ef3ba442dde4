//! Configuration management for BAR Core

use anyhow::{Context, Result};
use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server host
    pub http_host: String,
    /// HTTP server port
    pub http_port: u16,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Logging, metrics and tracing configuration
    pub telemetry: TelemetryConfig,
    /// Allowed CORS origins; empty means any origin
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// "pretty" or "json"
    pub log_format: String,
    pub metrics_enabled: bool,
    pub tracing_enabled: bool,
    pub otlp_endpoint: Option<String>,
    pub service_name: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_format: "pretty".to_string(),
            metrics_enabled: true,
            tracing_enabled: false,
            otlp_endpoint: None,
            service_name: "bar-core".to_string(),
        }
    }
}

impl TelemetryConfig {
    /// Load telemetry settings from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            log_format: env::var("LOG_FORMAT").unwrap_or(defaults.log_format),
            metrics_enabled: env::var("METRICS_ENABLED")
                .map(|s| s.to_lowercase() != "false")
                .unwrap_or(defaults.metrics_enabled),
            tracing_enabled: env::var("OTEL_TRACING_ENABLED")
                .map(|s| s.to_lowercase() == "true")
                .unwrap_or(defaults.tracing_enabled),
            otlp_endpoint: env::var("OTEL_EXPORTER_OTLP_ENDPOINT").ok(),
            service_name: env::var("OTEL_SERVICE_NAME").unwrap_or(defaults.service_name),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            http_host: env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            http_port: env::var("HTTP_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("Invalid HTTP_PORT")?,
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").context("DATABASE_URL is required")?,
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .unwrap_or(10),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .unwrap_or_else(|_| "2".to_string())
                    .parse()
                    .unwrap_or(2),
                acquire_timeout_secs: env::var("DATABASE_ACQUIRE_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "5".to_string())
                    .parse()
                    .unwrap_or(5),
            },
            telemetry: TelemetryConfig::from_env(),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .map(|s| parse_origins(&s))
                .unwrap_or_default(),
        })
    }

    /// Get HTTP server address
    pub fn http_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}

/// Split a comma-separated origin list; `*` means any origin.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty() && *o != "*")
        .map(str::to_string)
        .collect()
}

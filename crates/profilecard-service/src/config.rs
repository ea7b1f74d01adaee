//! Service configuration
//!
//! Resolution order: built-in defaults, then an optional JSON config file,
//! then command-line flags and environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use profilecard_repository::ProfileStoreConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Address to listen on
    pub bind_addr: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Location of the profile data file
    pub data_file: PathBuf,
    /// `tracing` filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 5000,
            data_file: PathBuf::from("profileData.json"),
            log_filter: "profilecard_service=info,profilecard_repository=info,info".to_string(),
        }
    }
}

/// Values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Listen address
    pub bind_addr: Option<IpAddr>,
    /// Listen port
    pub port: Option<u16>,
    /// Data file location
    pub data_file: Option<PathBuf>,
    /// Log filter
    pub log_filter: Option<String>,
}

impl ServiceConfig {
    /// Load configuration from `path`, or defaults when no path is given
    ///
    /// A path that was given but cannot be read or parsed is an error.
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file: {path:?}"))?;

        let config: ServiceConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {path:?}"))?;

        debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Apply command-line and environment overrides
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(bind_addr) = overrides.bind_addr {
            self.bind_addr = bind_addr;
        }
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if let Some(data_file) = overrides.data_file {
            self.data_file = data_file;
        }
        if let Some(log_filter) = overrides.log_filter {
            self.log_filter = log_filter;
        }
        self
    }

    /// Socket address to bind
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }

    /// Store configuration derived from this service configuration
    pub fn store_config(&self) -> ProfileStoreConfig {
        ProfileStoreConfig::new(&self.data_file)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_without_path_gives_defaults() {
        let config = ServiceConfig::load(None).await.expect("defaults");
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.socket_addr().port(), 5000);
    }

    #[tokio::test]
    async fn test_load_partial_file_keeps_defaults() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("service.json");
        tokio::fs::write(&path, r#"{ "port": 8080, "data_file": "/var/lib/profile.json" }"#)
            .await
            .expect("write config");

        let config = ServiceConfig::load(Some(&path)).await.expect("load");
        assert_eq!(config.port, 8080);
        assert_eq!(config.data_file, PathBuf::from("/var/lib/profile.json"));
        assert_eq!(config.bind_addr, ServiceConfig::default().bind_addr);
    }

    #[tokio::test]
    async fn test_load_missing_file_is_error() {
        let temp_dir = TempDir::new().expect("temp dir");
        let result = ServiceConfig::load(Some(&temp_dir.path().join("absent.json"))).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_load_invalid_file_is_error() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("service.json");
        tokio::fs::write(&path, r#"{ "port": "not a number" }"#)
            .await
            .expect("write config");

        assert!(ServiceConfig::load(Some(&path)).await.is_err());
    }

    #[test]
    fn test_overrides_take_precedence() {
        let config = ServiceConfig::default().with_overrides(ConfigOverrides {
            bind_addr: Some(IpAddr::V4(Ipv4Addr::LOCALHOST)),
            port: Some(3000),
            data_file: None,
            log_filter: Some("debug".to_string()),
        });

        assert_eq!(config.socket_addr(), "127.0.0.1:3000".parse().expect("addr"));
        assert_eq!(config.data_file, PathBuf::from("profileData.json"));
        assert_eq!(config.log_filter, "debug");
        assert_eq!(
            config.store_config().data_file,
            PathBuf::from("profileData.json")
        );
    }
}

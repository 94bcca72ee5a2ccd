//! Configuration management for the dashboard service
//!
//! This module handles loading, validation and management of all service
//! configuration.

pub mod models;

pub use models::*;

use crate::utils::error::{DashboardError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the service
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Dashboard configuration
    pub dashboard: DashboardConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| DashboardError::config(format!("Failed to read config file: {}", e)))?;

        let dashboard: DashboardConfig = serde_yaml::from_str(&content)
            .map_err(|e| DashboardError::config(format!("Failed to parse config: {}", e)))?;

        let config = Self { dashboard };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let dashboard = DashboardConfig::from_env()?;
        let config = Self { dashboard };

        config.validate()?;
        Ok(config)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.dashboard.server
    }

    /// Get auth configuration
    pub fn auth(&self) -> &AuthConfig {
        &self.dashboard.auth
    }

    /// Get workspace configuration
    pub fn workspace(&self) -> &WorkspaceConfig {
        &self.dashboard.workspace
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.dashboard
            .server
            .validate()
            .map_err(|e| DashboardError::config(format!("Server config error: {}", e)))?;

        self.dashboard
            .auth
            .validate()
            .map_err(|e| DashboardError::config(format!("Auth config error: {}", e)))?;

        self.dashboard
            .workspace
            .validate()
            .map_err(|e| DashboardError::config(format!("Workspace config error: {}", e)))?;

        debug!("Configuration validation passed");
        Ok(())
    }
}

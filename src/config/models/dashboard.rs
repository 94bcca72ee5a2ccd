//! Top-level dashboard configuration

use super::{AuthConfig, ServerConfig, WorkspaceConfig};
use crate::utils::error::{DashboardError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::debug;

/// Dashboard configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Authentication settings
    #[serde(default)]
    pub auth: AuthConfig,
    /// Workspace settings
    #[serde(default)]
    pub workspace: WorkspaceConfig,
}

impl DashboardConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        debug!("Loading configuration from environment variables");

        let mut config = Self::default();

        // Server configuration
        if let Ok(host) = env::var("DASHBOARD_HOST") {
            config.server.host = host;
        }
        if let Ok(port) = env::var("DASHBOARD_PORT") {
            config.server.port = port
                .parse()
                .map_err(|e| DashboardError::config(format!("Invalid port: {}", e)))?;
        }
        if let Ok(workers) = env::var("DASHBOARD_WORKERS") {
            config.server.workers = Some(
                workers
                    .parse()
                    .map_err(|e| DashboardError::config(format!("Invalid workers count: {}", e)))?,
            );
        }

        // Auth configuration
        if let Ok(secret) = env::var("SESSION_SECRET") {
            config.auth.session_secret = secret;
        }
        if let Ok(ttl) = env::var("SESSION_TTL") {
            config.auth.session_ttl = ttl
                .parse()
                .map_err(|e| DashboardError::config(format!("Invalid session TTL: {}", e)))?;
        }
        if let Ok(path) = env::var("SESSION_MARKER_PATH") {
            config.auth.marker_path = path;
        }

        // Workspace configuration
        if let Ok(organization) = env::var("DASHBOARD_ORGANIZATION") {
            config.workspace.organization = organization;
        }
        if let Ok(seed) = env::var("DASHBOARD_SEED_DEMO_DATA") {
            config.workspace.seed_demo_data = seed
                .parse()
                .map_err(|e| DashboardError::config(format!("Invalid seed flag: {}", e)))?;
        }

        debug!("Configuration loaded from environment variables");
        Ok(config)
    }
}

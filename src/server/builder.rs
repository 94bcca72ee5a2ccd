//! Server builder and run_server function
//!
//! This module provides the ServerBuilder for easier server configuration
//! and the run_server function for automatic configuration loading.

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{DashboardError, Result};
use tracing::info;

/// Server builder for easier configuration
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| DashboardError::config("Configuration is required"))?;

        HttpServer::new(&config).await
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the server with automatic configuration loading
pub async fn run_server() -> Result<()> {
    info!("Starting TaskMaster dashboard service");

    let config_path = "config/dashboard.yaml";
    info!("Loading configuration file: {}", config_path);

    let config = match Config::from_file(config_path).await {
        Ok(config) => {
            info!("Configuration file loaded successfully");
            config
        }
        Err(e) => {
            info!(
                "Configuration file loading failed, using default config: {}",
                e
            );
            Config::default()
        }
    };

    let server = HttpServer::new(&config).await?;
    info!(
        "Server starting at: http://{}:{}",
        config.server().host,
        config.server().port
    );
    info!("API Endpoints:");
    info!("   GET   /health - Health check");
    info!("   POST  /auth/login - Sign in");
    info!("   POST  /auth/logout - Sign out");
    info!("   GET   /auth/me - Current session");
    info!("   GET   /api/navigation - Permission-filtered menu");
    info!("   GET   /api/dashboard - Overview");
    info!("   GET   /api/tasks - Task board");
    info!("   GET   /api/members - Team directory");
    info!("   GET   /api/calendar/{{date}} - Day view");
    info!("   GET   /api/analytics - Analytics report");

    server.start().await
}

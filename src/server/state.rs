//! Application state shared across HTTP handlers
//!
//! The composition root: owns the guard and the workspace stores and hands
//! them to whichever handler needs them.

use crate::auth::AuthSystem;
use crate::config::Config;
use crate::core::workspace::Workspace;
use std::sync::Arc;

/// HTTP server state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Session and authorization guard
    pub auth: Arc<AuthSystem>,
    /// In-memory workspace stores
    pub workspace: Arc<Workspace>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config, auth: AuthSystem, workspace: Workspace) -> Self {
        Self {
            config: Arc::new(config),
            auth: Arc::new(auth),
            workspace: Arc::new(workspace),
        }
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

//! Workspace configuration

use serde::{Deserialize, Serialize};

/// Workspace configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    /// Organization name shown on every session
    #[serde(default = "default_organization")]
    pub organization: String,
    /// Seed the in-memory stores with the demo organization on startup
    #[serde(default = "default_seed_demo_data")]
    pub seed_demo_data: bool,
    /// Password assigned to every seeded demo account
    #[serde(default = "default_demo_password")]
    pub demo_password: String,
    /// Base URL for generated invite links
    #[serde(default = "default_invite_base_url")]
    pub invite_base_url: String,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            organization: default_organization(),
            seed_demo_data: default_seed_demo_data(),
            demo_password: default_demo_password(),
            invite_base_url: default_invite_base_url(),
        }
    }
}

impl WorkspaceConfig {
    /// Validate workspace configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.organization.trim().is_empty() {
            return Err("Organization name cannot be empty".to_string());
        }
        if self.seed_demo_data && self.demo_password.is_empty() {
            return Err("Demo password cannot be empty when demo data is seeded".to_string());
        }
        if self.invite_base_url.trim().is_empty() {
            return Err("Invite base URL cannot be empty".to_string());
        }
        Ok(())
    }
}

fn default_organization() -> String {
    "Acme Corporation".to_string()
}

fn default_seed_demo_data() -> bool {
    true
}

fn default_demo_password() -> String {
    "taskmaster".to_string()
}

fn default_invite_base_url() -> String {
    "https://taskmaster-pro.com".to_string()
}

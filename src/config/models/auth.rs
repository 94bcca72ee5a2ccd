//! Authentication configuration

use crate::utils::crypto;
use serde::{Deserialize, Serialize};

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret used to sign the persisted session marker
    #[serde(default = "crypto::generate_session_secret")]
    pub session_secret: String,
    /// Marker lifetime in seconds
    #[serde(default = "default_session_ttl")]
    pub session_ttl: u64,
    /// Path of the session marker file
    #[serde(default = "default_marker_path")]
    pub marker_path: String,
    /// RBAC configuration
    #[serde(default)]
    pub rbac: RbacConfig,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_secret: crypto::generate_session_secret(),
            session_ttl: default_session_ttl(),
            marker_path: default_marker_path(),
            rbac: RbacConfig::default(),
        }
    }
}

impl AuthConfig {
    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.session_secret.len() < 32 {
            return Err(
                "Session secret must be at least 32 characters long for security".to_string(),
            );
        }

        if self.session_secret == "change-me" {
            return Err(
                "Session secret must not use default values. Please generate a secure random secret."
                    .to_string(),
            );
        }

        if self.session_ttl < 300 {
            return Err("Session TTL should be at least 5 minutes (300 seconds)".to_string());
        }

        if self.marker_path.is_empty() {
            return Err("Session marker path cannot be empty".to_string());
        }

        Ok(())
    }
}

/// RBAC configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RbacConfig {
    /// Default role for invited users
    #[serde(default = "default_role")]
    pub default_role: String,
    /// Roles that count as administrative
    #[serde(default = "default_admin_roles")]
    pub admin_roles: Vec<String>,
}

impl Default for RbacConfig {
    fn default() -> Self {
        Self {
            default_role: default_role(),
            admin_roles: default_admin_roles(),
        }
    }
}

fn default_session_ttl() -> u64 {
    60 * 60 * 24 * 7 // one week
}

fn default_marker_path() -> String {
    ".taskmaster/session".to_string()
}

fn default_role() -> String {
    "member".to_string()
}

fn default_admin_roles() -> Vec<String> {
    vec!["admin".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AuthConfig::default().validate().is_ok());
    }

    #[test]
    fn test_generated_secrets_differ() {
        let a = AuthConfig::default();
        let b = AuthConfig::default();
        assert_ne!(a.session_secret, b.session_secret);
    }

    #[test]
    fn test_short_secret_is_rejected() {
        let config = AuthConfig {
            session_secret: "short".to_string(),
            ..AuthConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_tiny_ttl_is_rejected() {
        let config = AuthConfig {
            session_ttl: 60,
            ..AuthConfig::default()
        };
        assert!(config.validate().is_err());
    }
}

//! HTTP route modules
//!
//! This module contains all HTTP route handlers organized by functionality.

pub mod analytics;
pub mod auth;
pub mod dashboard;
pub mod meetings;
pub mod members;
pub mod navigation;
pub mod notifications;
pub mod settings;
pub mod tasks;

use crate::auth::AuthzResult;
use crate::server::AppState;
use crate::utils::error::{DashboardError, Result};
use actix_web::web;

/// Standard API response structure
#[derive(Debug, Clone, serde::Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,
    /// Response data (if successful)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error message (if failed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Additional metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
}

impl<T> ApiResponse<T>
where
    T: serde::Serialize,
{
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            meta: None,
        }
    }

    /// Create a successful response with metadata
    pub fn success_with_meta(data: T, meta: serde_json::Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            meta: Some(meta),
        }
    }
}

/// Require every listed permission, mapping denial to a 403
///
/// Handlers check before acting; the guard itself never raises for an
/// ordinary denial.
pub fn require_permissions(state: &web::Data<AppState>, required: &[&str]) -> Result<()> {
    let AuthzResult {
        allowed, reason, ..
    } = state.auth.authorize(required);

    if allowed {
        Ok(())
    } else {
        let reason = reason.unwrap_or_else(|| "Insufficient permissions".to_string());
        Err(DashboardError::forbidden(format!(
            "{} (required: {})",
            reason,
            required.join(", ")
        )))
    }
}

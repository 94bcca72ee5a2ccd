//! Authentication endpoints
//!
//! Login, logout and current-session introspection.

use crate::auth::Session;
use crate::server::AppState;
use crate::server::routes::ApiResponse;
use crate::utils::error::{DashboardError, Result};
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Configure authentication routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/login", web::post().to(login))
            .route("/logout", web::post().to(logout))
            .route("/me", web::get().to(get_current_user))
            .route("/permissions", web::get().to(get_permissions)),
    );
}

/// User login request
#[derive(Debug, Deserialize)]
struct LoginRequest {
    email: String,
    password: String,
}

/// Session response (no sensitive data)
#[derive(Debug, Serialize)]
struct SessionResponse {
    id: uuid::Uuid,
    name: String,
    email: String,
    role: String,
    organization: String,
    avatar: Option<String>,
}

impl From<&Session> for SessionResponse {
    fn from(session: &Session) -> Self {
        Self {
            id: session.user_id,
            name: session.name.clone(),
            email: session.email.clone(),
            role: session.role.to_string(),
            organization: session.organization.clone(),
            avatar: session.avatar.clone(),
        }
    }
}

/// Permission listing for the current session
#[derive(Debug, Serialize)]
struct PermissionsResponse {
    role: String,
    permissions: Vec<String>,
}

async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    let session = state.auth.login(&request.email, &request.password).await?;

    info!("Session established for {}", session.email);
    Ok(HttpResponse::Ok().json(ApiResponse::success(SessionResponse::from(session.as_ref()))))
}

async fn logout(state: web::Data<AppState>) -> Result<HttpResponse> {
    state.auth.logout().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(serde_json::json!({
        "message": "Logged out"
    }))))
}

async fn get_current_user(state: web::Data<AppState>) -> Result<HttpResponse> {
    let session = state
        .auth
        .current_session()
        .ok_or_else(|| DashboardError::auth("No active session"))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(SessionResponse::from(session.as_ref()))))
}

async fn get_permissions(state: web::Data<AppState>) -> Result<HttpResponse> {
    let session = state
        .auth
        .current_session()
        .ok_or_else(|| DashboardError::auth("No active session"))?;

    let response = PermissionsResponse {
        role: session.role.to_string(),
        permissions: state.auth.rbac().role_permission_names(session.role),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}

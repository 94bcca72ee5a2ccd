//! Settings endpoints
//!
//! Profile edits write through to the directory; the guard then refreshes
//! the session so it reflects the change.

use crate::core::models::NotificationPreferences;
use crate::server::AppState;
use crate::server::routes::ApiResponse;
use crate::utils::error::{DashboardError, Result};
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use tracing::info;

/// Configure settings routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/settings")
            .route("/profile", web::get().to(get_profile))
            .route("/profile", web::put().to(update_profile))
            .route("/notifications", web::get().to(get_notification_prefs))
            .route("/notifications", web::put().to(update_notification_prefs)),
    );
}

/// Profile update request
#[derive(Debug, Deserialize)]
struct ProfileUpdate {
    name: Option<String>,
    avatar: Option<String>,
}

async fn get_profile(state: web::Data<AppState>) -> Result<HttpResponse> {
    let session = state
        .auth
        .current_session()
        .ok_or_else(|| DashboardError::auth("No active session"))?;

    let member = state
        .workspace
        .members
        .find_by_id(session.user_id)
        .ok_or_else(|| DashboardError::not_found("Member not found"))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(member)))
}

async fn update_profile(
    state: web::Data<AppState>,
    request: web::Json<ProfileUpdate>,
) -> Result<HttpResponse> {
    let session = state
        .auth
        .current_session()
        .ok_or_else(|| DashboardError::auth("No active session"))?;

    if let Some(name) = &request.name {
        if name.trim().is_empty() {
            return Err(DashboardError::validation("Display name cannot be empty"));
        }
    }

    let member = state.workspace.members.update_profile(
        session.user_id,
        request.name.clone(),
        request.avatar.clone(),
    )?;

    // The session snapshot must reflect the directory
    state.auth.refresh().await?;
    info!("Profile updated for {}", member.email);

    Ok(HttpResponse::Ok().json(ApiResponse::success(member)))
}

async fn get_notification_prefs(state: web::Data<AppState>) -> Result<HttpResponse> {
    let session = state
        .auth
        .current_session()
        .ok_or_else(|| DashboardError::auth("No active session"))?;

    let prefs = state.workspace.members.preferences(session.user_id);
    Ok(HttpResponse::Ok().json(ApiResponse::success(prefs)))
}

async fn update_notification_prefs(
    state: web::Data<AppState>,
    request: web::Json<NotificationPreferences>,
) -> Result<HttpResponse> {
    let session = state
        .auth
        .current_session()
        .ok_or_else(|| DashboardError::auth("No active session"))?;

    let prefs = request.into_inner();
    state
        .workspace
        .members
        .set_preferences(session.user_id, prefs.clone());

    Ok(HttpResponse::Ok().json(ApiResponse::success(prefs)))
}

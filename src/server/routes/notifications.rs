//! Notification feed endpoints

use crate::server::AppState;
use crate::server::routes::ApiResponse;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};
use uuid::Uuid;

/// Configure notification routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/notifications")
            .route("", web::get().to(list_notifications))
            .route("/{id}/read", web::post().to(mark_read))
            .route("/read-all", web::post().to(mark_all_read)),
    );
}

async fn list_notifications(state: web::Data<AppState>) -> Result<HttpResponse> {
    let feed = &state.workspace.notifications;

    Ok(HttpResponse::Ok().json(ApiResponse::success_with_meta(
        feed.list(),
        serde_json::json!({ "unread": feed.unread_count() }),
    )))
}

async fn mark_read(state: web::Data<AppState>, path: web::Path<Uuid>) -> Result<HttpResponse> {
    state.workspace.notifications.mark_read(path.into_inner())?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(serde_json::json!({
        "unread": state.workspace.notifications.unread_count()
    }))))
}

async fn mark_all_read(state: web::Data<AppState>) -> Result<HttpResponse> {
    let changed = state.workspace.notifications.mark_all_read();

    Ok(HttpResponse::Ok().json(ApiResponse::success(serde_json::json!({
        "marked_read": changed
    }))))
}

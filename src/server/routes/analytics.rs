//! Analytics endpoints

use crate::server::AppState;
use crate::server::routes::{ApiResponse, require_permissions};
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};

/// Configure analytics routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/analytics", web::get().to(get_report));
}

async fn get_report(state: web::Data<AppState>) -> Result<HttpResponse> {
    require_permissions(&state, &["view_analytics"])?;

    let today = chrono::Utc::now().date_naive();
    let report = state.workspace.analytics.report(today);

    Ok(HttpResponse::Ok().json(ApiResponse::success(report)))
}

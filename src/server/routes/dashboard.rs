//! Dashboard overview endpoint

use crate::server::AppState;
use crate::server::routes::ApiResponse;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};

/// Configure dashboard routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/dashboard", web::get().to(get_overview));
}

async fn get_overview(state: web::Data<AppState>) -> Result<HttpResponse> {
    let overview = state.workspace.analytics.overview();

    Ok(HttpResponse::Ok().json(ApiResponse::success(overview)))
}

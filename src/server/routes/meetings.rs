//! Calendar and meeting endpoints

use crate::core::workspace::NewMeeting;
use crate::server::AppState;
use crate::server::routes::{ApiResponse, require_permissions};
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};
use tracing::info;

/// Configure meeting routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/meetings")
            .route("", web::get().to(list_meetings))
            .route("", web::post().to(schedule_meeting)),
    )
    .route("/api/calendar/{date}", web::get().to(day_view));
}

async fn list_meetings(state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(state.workspace.meetings.list())))
}

/// Meetings plus tasks due on one date
async fn day_view(
    state: web::Data<AppState>,
    path: web::Path<chrono::NaiveDate>,
) -> Result<HttpResponse> {
    let date = path.into_inner();

    let meetings = state.workspace.meetings.on_date(date);
    let tasks_due = state.workspace.tasks.due_on(date);

    Ok(HttpResponse::Ok().json(ApiResponse::success(serde_json::json!({
        "date": date,
        "meetings": meetings,
        "tasks_due": tasks_due,
    }))))
}

async fn schedule_meeting(
    state: web::Data<AppState>,
    request: web::Json<NewMeeting>,
) -> Result<HttpResponse> {
    require_permissions(&state, &["schedule_meetings"])?;

    let meeting = state.workspace.meetings.schedule(request.into_inner())?;
    info!("Meeting scheduled: {} on {}", meeting.title, meeting.date);

    Ok(HttpResponse::Created().json(ApiResponse::success(meeting)))
}

//! Task board endpoints

use crate::core::models::TaskStatus;
use crate::core::workspace::{NewTask, TaskQuery};
use crate::server::AppState;
use crate::server::routes::{ApiResponse, require_permissions};
use crate::utils::error::{DashboardError, Result};
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

/// Configure task routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/tasks")
            .route("", web::get().to(list_tasks))
            .route("", web::post().to(create_task))
            .route("/{id}/status", web::patch().to(update_status)),
    );
}

/// Status change request
#[derive(Debug, Deserialize)]
struct UpdateStatusRequest {
    status: TaskStatus,
}

async fn list_tasks(
    state: web::Data<AppState>,
    query: web::Query<TaskQuery>,
) -> Result<HttpResponse> {
    // Everyone on the board may look at it; view_tasks is the floor
    require_permissions(&state, &["view_tasks"])?;

    let tasks = state.workspace.tasks.list(&query);
    let counts = state.workspace.tasks.counts();

    Ok(HttpResponse::Ok().json(ApiResponse::success_with_meta(
        tasks,
        serde_json::to_value(counts)?,
    )))
}

async fn create_task(
    state: web::Data<AppState>,
    request: web::Json<NewTask>,
) -> Result<HttpResponse> {
    require_permissions(&state, &["manage_tasks"])?;

    let mut new_task = request.into_inner();

    // Resolve the assignee against the directory when an ID is given
    if let Some(assignee_id) = new_task.assignee_id {
        let member = state
            .workspace
            .members
            .find_by_id(assignee_id)
            .ok_or_else(|| DashboardError::validation("Assignee is not in the directory"))?;
        new_task.assignee = member.name;
    }

    let task = state.workspace.tasks.create(new_task)?;
    info!("Task created: {}", task.title);

    Ok(HttpResponse::Created().json(ApiResponse::success(task)))
}

async fn update_status(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateStatusRequest>,
) -> Result<HttpResponse> {
    let id = path.into_inner();

    let task = state
        .workspace
        .tasks
        .get(id)
        .ok_or_else(|| DashboardError::not_found("Task not found"))?;

    // Managers may move any task; members only their own
    if !state.auth.has_permission("manage_tasks") {
        require_permissions(&state, &["update_own_tasks"])?;

        let session = state
            .auth
            .current_session()
            .ok_or_else(|| DashboardError::auth("No active session"))?;
        if task.assignee_id != Some(session.user_id) {
            return Err(DashboardError::forbidden(
                "update_own_tasks only covers tasks assigned to you",
            ));
        }
    }

    let updated = state.workspace.tasks.update_status(id, request.status)?;
    info!("Task {} moved to {}", updated.title, updated.status);

    Ok(HttpResponse::Ok().json(ApiResponse::success(updated)))
}

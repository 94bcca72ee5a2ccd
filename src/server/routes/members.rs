//! Team directory endpoints

use crate::auth::rbac::Role;
use crate::server::AppState;
use crate::server::routes::{ApiResponse, require_permissions};
use crate::utils::error::{DashboardError, Result};
use actix_web::{HttpResponse, web};
use serde::Deserialize;

/// Configure member routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/members")
            .route("", web::get().to(list_members))
            .route("/summary", web::get().to(directory_summary))
            .route("/invite", web::post().to(invite_member)),
    );
}

/// Directory search query
#[derive(Debug, Deserialize)]
struct MemberQuery {
    search: Option<String>,
    role: Option<Role>,
}

/// Invitation request, by email or shareable link
#[derive(Debug, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
enum InviteRequest {
    /// Send an invitation to an address
    Email {
        email: String,
        role: Option<Role>,
        message: Option<String>,
    },
    /// Generate a shareable link
    Link { role: Option<Role> },
}

async fn list_members(
    state: web::Data<AppState>,
    query: web::Query<MemberQuery>,
) -> Result<HttpResponse> {
    require_permissions(&state, &["manage_users"])?;

    let members = state
        .workspace
        .members
        .search(query.search.as_deref(), query.role);

    Ok(HttpResponse::Ok().json(ApiResponse::success(members)))
}

async fn directory_summary(state: web::Data<AppState>) -> Result<HttpResponse> {
    require_permissions(&state, &["manage_users"])?;

    let stats = state.workspace.members.stats();
    let departments = state.workspace.members.department_distribution();

    Ok(HttpResponse::Ok().json(ApiResponse::success(serde_json::json!({
        "stats": stats,
        "departments": departments,
    }))))
}

async fn invite_member(
    state: web::Data<AppState>,
    request: web::Json<InviteRequest>,
) -> Result<HttpResponse> {
    require_permissions(&state, &["manage_users"])?;

    let default_role: Role = state
        .config
        .auth()
        .rbac
        .default_role
        .parse()
        .map_err(DashboardError::config)?;

    match request.into_inner() {
        InviteRequest::Email {
            email,
            role,
            message,
        } => {
            let invitation = state.workspace.invites.invite_by_email(
                &email,
                role.unwrap_or(default_role),
                message,
            )?;
            Ok(HttpResponse::Created().json(ApiResponse::success(invitation)))
        }
        InviteRequest::Link { role } => {
            let link = state
                .workspace
                .invites
                .generate_link(role.unwrap_or(default_role));
            Ok(HttpResponse::Created().json(ApiResponse::success(link)))
        }
    }
}

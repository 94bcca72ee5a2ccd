//! Navigation menu endpoint
//!
//! The presentation surface asks which menu items to show; items carrying a
//! permission are filtered through the guard.

use crate::server::AppState;
use crate::server::routes::ApiResponse;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};
use serde::Serialize;

/// Configure navigation routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/navigation", web::get().to(get_navigation));
}

/// One sidebar menu entry
#[derive(Debug, Clone, Serialize)]
struct MenuItem {
    title: &'static str,
    path: &'static str,
    icon: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    badge: Option<String>,
}

/// Static menu definition: title, path, icon, required permission
const MENU: [(&str, &str, &str, Option<&str>); 6] = [
    ("Dashboard", "/", "home", None),
    ("Tasks", "/tasks", "list", None),
    ("Calendar", "/calendar", "calendar", None),
    ("Analytics", "/analytics", "bar-chart", Some("view_analytics")),
    ("Members", "/members", "users", Some("manage_users")),
    ("Settings", "/settings", "settings", None),
];

async fn get_navigation(state: web::Data<AppState>) -> Result<HttpResponse> {
    let task_count = state.workspace.tasks.counts().total;
    let member_count = state.workspace.members.len();

    let mut items = Vec::with_capacity(MENU.len());
    for (title, path, icon, permission) in MENU {
        if let Some(name) = permission {
            if !state.auth.has_permission(name) {
                continue;
            }
        }

        let badge = match path {
            "/tasks" => Some(task_count.to_string()),
            "/members" => Some(member_count.to_string()),
            _ => None,
        };

        items.push(MenuItem {
            title,
            path,
            icon,
            badge,
        });
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(items)))
}

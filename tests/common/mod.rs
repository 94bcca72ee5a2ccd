//! Common test utilities for taskmaster-rs
//!
//! Builds application state over a temporary session marker file and the
//! seeded demo workspace, plus the test application used by the HTTP tests.

use actix_web::{App, web};
use std::sync::Arc;
use taskmaster_rs::auth::{AuthSystem, DirectoryVerifier, FileMarkerStore};
use taskmaster_rs::config::Config;
use taskmaster_rs::core::workspace::Workspace;
use taskmaster_rs::server::middleware::SessionGuard;
use taskmaster_rs::server::{AppState, handlers, routes};

/// The password every seeded demo account accepts
pub const DEMO_PASSWORD: &str = "taskmaster";

/// Configuration pointing the marker at a temporary directory
pub fn test_config(dir: &tempfile::TempDir) -> Config {
    let mut config = Config::default();
    config.dashboard.auth.session_secret =
        "an-integration-test-secret-that-is-long-enough".to_string();
    config.dashboard.auth.marker_path = dir
        .path()
        .join("session")
        .to_string_lossy()
        .into_owned();
    config
}

/// Application state over a fresh guard and seeded workspace
pub async fn test_state(config: &Config) -> web::Data<AppState> {
    let workspace = Workspace::new(config.workspace()).expect("workspace seeds");

    let verifier = Arc::new(DirectoryVerifier::new(workspace.members.clone()));
    let marker = Arc::new(FileMarkerStore::new(config.auth().marker_path.clone()));
    let auth = AuthSystem::new(
        config.auth(),
        &config.workspace().organization,
        verifier,
        marker,
    )
    .await
    .expect("guard builds");

    web::Data::new(AppState::new(config.clone(), auth, workspace))
}

/// The application under test, wired like the real server
pub fn test_app(
    state: web::Data<AppState>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .wrap(SessionGuard)
        .route("/health", web::get().to(handlers::health_check))
        .configure(routes::auth::configure_routes)
        .configure(routes::navigation::configure_routes)
        .configure(routes::dashboard::configure_routes)
        .configure(routes::tasks::configure_routes)
        .configure(routes::members::configure_routes)
        .configure(routes::meetings::configure_routes)
        .configure(routes::notifications::configure_routes)
        .configure(routes::analytics::configure_routes)
        .configure(routes::settings::configure_routes)
}

//! HTTP server core implementation
//!
//! This module provides the HttpServer struct and its core methods.

use crate::auth::{AuthSystem, DirectoryVerifier, FileMarkerStore};
use crate::config::{Config, ServerConfig};
use crate::core::workspace::Workspace;
use crate::server::handlers::health_check;
use crate::server::middleware::SessionGuard;
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{DashboardError, Result};
use actix_cors::Cors;
use actix_web::{
    App, HttpServer as ActixHttpServer,
    middleware::DefaultHeaders,
    web,
};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server
    ///
    /// Builds the workspace, wires the guard to the directory-backed
    /// credential verifier and the file-backed marker store, and restores a
    /// persisted session if one is present.
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let workspace = Workspace::new(config.workspace())?;

        let verifier = Arc::new(DirectoryVerifier::new(workspace.members.clone()));
        let marker = Arc::new(FileMarkerStore::new(config.auth().marker_path.clone()));
        let auth = AuthSystem::new(
            config.auth(),
            &config.workspace().organization,
            verifier,
            marker,
        )
        .await?;

        if auth.initialize().await? {
            info!("Restored session from persisted marker");
        }

        let state = AppState::new(config.clone(), auth, workspace);

        Ok(Self {
            config: config.server().clone(),
            state,
        })
    }

    /// Create the Actix-web application
    fn create_app(
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
        let cors_config = &state.config.server().cors;
        let mut cors = Cors::default();

        if cors_config.enabled {
            if cors_config.allows_all_origins() {
                cors = cors.allow_any_origin();
            } else {
                for origin in &cors_config.allowed_origins {
                    cors = cors.allowed_origin(origin);
                }
            }

            let methods: Vec<actix_web::http::Method> = cors_config
                .allowed_methods
                .iter()
                .filter_map(|m| m.parse().ok())
                .collect();
            if !methods.is_empty() {
                cors = cors.allowed_methods(methods);
            }
            cors = cors.allow_any_header();
        }

        App::new()
            .app_data(state)
            .wrap(SessionGuard)
            .wrap(cors)
            .wrap(TracingLogger::default())
            .wrap(DefaultHeaders::new().add(("Server", "TaskMaster-RS")))
            .route("/health", web::get().to(health_check))
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

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();

        info!("Starting HTTP server on {}", bind_addr);

        let workers = self.config.workers;
        let state = web::Data::new(self.state);

        let mut server = ActixHttpServer::new(move || Self::create_app(state.clone()));
        if let Some(workers) = workers {
            server = server.workers(workers);
        }

        let server = server
            .bind(&bind_addr)
            .map_err(|e| {
                warn!("Failed to bind {}: {}", bind_addr, e);
                DashboardError::config(format!("Failed to bind {}: {}", bind_addr, e))
            })?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| DashboardError::internal(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

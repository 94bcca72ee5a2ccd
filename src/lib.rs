//! # TaskMaster-RS
//!
//! A team and task management dashboard service. The core is a session and
//! authorization guard: role-based permissions over a single active session,
//! restored across restarts from a signed marker file. Around it sit
//! in-memory workspace stores (tasks, team directory, meetings,
//! notifications, invitations, analytics) exposed over an HTTP API.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use taskmaster_rs::config::Config;
//! use taskmaster_rs::server::HttpServer;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/dashboard.yaml").await?;
//!     let server = HttpServer::new(&config).await?;
//!     server.start().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Guard usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use taskmaster_rs::auth::{AuthSystem, DirectoryVerifier, FileMarkerStore};
//! use taskmaster_rs::config::Config;
//! use taskmaster_rs::core::workspace::Workspace;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let workspace = Workspace::new(config.workspace())?;
//!
//!     let auth = AuthSystem::new(
//!         config.auth(),
//!         &config.workspace().organization,
//!         Arc::new(DirectoryVerifier::new(workspace.members.clone())),
//!         Arc::new(FileMarkerStore::new(config.auth().marker_path.clone())),
//!     )
//!     .await?;
//!
//!     auth.initialize().await?;
//!     if auth.has_permission("view_analytics") {
//!         // show the analytics entry
//!     }
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use auth::{AuthSystem, Role, Session};
pub use config::Config;
pub use server::HttpServer;
pub use utils::error::{DashboardError, Result};

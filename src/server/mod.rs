//! HTTP server layer
//!
//! Actix-web application exposing the guard and the workspace stores. The
//! routing layer owns redirection of unauthenticated callers; the guard only
//! answers questions.

pub mod builder;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use builder::{ServerBuilder, run_server};
pub use server::HttpServer;
pub use state::AppState;

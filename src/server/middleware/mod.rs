//! HTTP middleware

pub mod auth;
pub mod helpers;

pub use auth::SessionGuard;

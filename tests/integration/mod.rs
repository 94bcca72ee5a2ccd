//! Integration tests for taskmaster-rs
//!
//! These tests verify the interaction between the guard, the workspace
//! stores and the HTTP layer without mocking.

pub mod auth_flow_tests;
pub mod permission_gating_tests;
pub mod session_persistence_tests;

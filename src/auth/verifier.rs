//! Credential verification boundary
//!
//! Login is isolated behind this trait so a real identity-provider
//! integration can be substituted without touching the guard's state machine.

use crate::core::models::TeamMember;
use crate::core::workspace::MemberDirectory;
use crate::utils::crypto;
use crate::utils::error::{DashboardError, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Verifies credentials and resolves known identities
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Verify an email/password pair, returning the matching member
    ///
    /// Invalid credentials are a distinct, recoverable failure; the caller
    /// must keep the session unset on every error path.
    async fn verify(&self, email: &str, password: &str) -> Result<TeamMember>;

    /// Resolve a user ID to a member, for re-hydrating a restored session
    async fn resolve(&self, user_id: Uuid) -> Result<Option<TeamMember>>;
}

/// Verifier backed by the in-memory team directory
pub struct DirectoryVerifier {
    directory: Arc<MemberDirectory>,
}

impl DirectoryVerifier {
    /// Create a verifier over the given directory
    pub fn new(directory: Arc<MemberDirectory>) -> Self {
        Self { directory }
    }
}

#[async_trait]
impl CredentialVerifier for DirectoryVerifier {
    async fn verify(&self, email: &str, password: &str) -> Result<TeamMember> {
        let member = self
            .directory
            .find_by_email(email)
            .ok_or_else(|| DashboardError::auth("Invalid email or password"))?;

        if !crypto::verify_password(password, &member.password_hash)? {
            return Err(DashboardError::auth("Invalid email or password"));
        }

        debug!("Verified credentials for {}", member.email);
        Ok(member)
    }

    async fn resolve(&self, user_id: Uuid) -> Result<Option<TeamMember>> {
        Ok(self.directory.find_by_id(user_id))
    }
}

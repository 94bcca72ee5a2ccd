//! Session state
//!
//! The current session is held behind an atomically swapped pointer: readers
//! load an immutable snapshot, and the guard replaces the whole value on
//! login/logout so no reader ever observes a partially updated identity.

use crate::auth::rbac::Role;
use crate::core::models::TeamMember;
use arc_swap::ArcSwapOption;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

/// The authenticated identity and its attributes
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    /// User ID
    pub user_id: Uuid,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Role determining capabilities
    pub role: Role,
    /// Organization name
    pub organization: String,
    /// Avatar reference
    pub avatar: Option<String>,
    /// When this session was established
    pub issued_at: chrono::DateTime<chrono::Utc>,
}

impl Session {
    /// Build a session for a directory member
    pub fn for_member(member: &TeamMember, organization: &str) -> Self {
        Self {
            user_id: member.id,
            name: member.name.clone(),
            email: member.email.clone(),
            role: member.role,
            organization: organization.to_string(),
            avatar: member.avatar.clone(),
            issued_at: chrono::Utc::now(),
        }
    }
}

/// Holder of the single active session
///
/// Owned by the composition root and injected into whichever layer needs it;
/// the guard is its sole writer.
#[derive(Debug, Default)]
pub struct SessionStore {
    current: ArcSwapOption<Session>,
}

impl SessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current session, if any
    pub fn snapshot(&self) -> Option<Arc<Session>> {
        self.current.load_full()
    }

    /// Whether a session is currently held
    pub fn is_active(&self) -> bool {
        self.current.load().is_some()
    }

    /// Replace the session wholesale, returning the stored snapshot
    pub fn replace(&self, session: Session) -> Arc<Session> {
        let session = Arc::new(session);
        self.current.store(Some(session.clone()));
        session
    }

    /// Clear the session; a no-op when none is held
    pub fn clear(&self) {
        self.current.store(None);
    }
}

//! Domain data models
//!
//! Record types for everything the dashboard tracks: team members, tasks,
//! meetings, notifications and invitations.

pub mod invitation;
pub mod meeting;
pub mod member;
pub mod notification;
pub mod task;

pub use invitation::{InviteLink, Invitation};
pub use meeting::{Meeting, MeetingFormat, MeetingKind};
pub use member::{MemberStatus, NotificationPreferences, TeamMember};
pub use notification::{Notification, NotificationKind};
pub use task::{Task, TaskPriority, TaskStatus};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Common record metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    /// Unique identifier
    pub id: Uuid,
    /// Creation timestamp
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Last update timestamp
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Default for Metadata {
    fn default() -> Self {
        let now = chrono::Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl Metadata {
    /// Create new metadata
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the timestamp
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now();
    }
}

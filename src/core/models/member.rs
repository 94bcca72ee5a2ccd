//! Team member records

use crate::auth::rbac::Role;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A member of the organization's team directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    /// Member ID
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email address (unique within the directory)
    pub email: String,
    /// Password hash
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Assigned role
    pub role: Role,
    /// Department
    pub department: String,
    /// Avatar reference
    pub avatar: Option<String>,
    /// Phone number
    pub phone: Option<String>,
    /// Location
    pub location: Option<String>,
    /// Join date
    pub joined_at: chrono::NaiveDate,
    /// Presence status
    pub status: MemberStatus,
    /// Completed task counter
    pub tasks_completed: u32,
    /// Efficiency score (percent)
    pub efficiency: u32,
}

impl TeamMember {
    /// Initials shown when no avatar is set
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

/// Presence status of a team member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberStatus {
    /// Currently active
    Online,
    /// Signed in but idle
    Away,
    /// Not signed in
    Offline,
}

/// Per-member notification preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationPreferences {
    /// Email notifications
    pub email: bool,
    /// Push notifications
    pub push: bool,
    /// Task update notifications
    pub task_updates: bool,
    /// Meeting reminder notifications
    pub meeting_reminders: bool,
    /// Weekly summary report
    pub weekly_report: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email: true,
            push: true,
            task_updates: true,
            meeting_reminders: true,
            weekly_report: false,
        }
    }
}

//! Notification records

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An in-app notification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    /// Notification ID
    pub id: Uuid,
    /// Kind of event
    pub kind: NotificationKind,
    /// Short title
    pub title: String,
    /// Message body
    pub message: String,
    /// When the event happened
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Whether the user has seen it
    pub read: bool,
}

impl Notification {
    /// Create an unread notification stamped now
    pub fn new(kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            title: title.into(),
            message: message.into(),
            created_at: chrono::Utc::now(),
            read: false,
        }
    }
}

/// Kind of notification event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// A task passed its due date
    TaskOverdue,
    /// A task was completed
    TaskCompleted,
    /// A task was assigned to the user
    TaskAssigned,
    /// A meeting was scheduled
    MeetingScheduled,
    /// Someone joined the organization
    UserInvited,
}

//! In-memory notification feed
//!
//! Notifications are plain records with a read flag; nothing is delivered
//! anywhere.

use crate::core::models::Notification;
use crate::utils::error::{DashboardError, Result};
use parking_lot::RwLock;
use uuid::Uuid;

/// Feed of in-app notifications
#[derive(Debug, Default)]
pub struct NotificationFeed {
    items: RwLock<Vec<Notification>>,
}

impl NotificationFeed {
    /// Create an empty feed
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a notification
    pub fn push(&self, notification: Notification) {
        self.items.write().push(notification);
    }

    /// All notifications, newest first
    pub fn list(&self) -> Vec<Notification> {
        let mut items = self.items.read().clone();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        items
    }

    /// Number of unread notifications
    pub fn unread_count(&self) -> usize {
        self.items.read().iter().filter(|n| !n.read).count()
    }

    /// Mark one notification read
    pub fn mark_read(&self, id: Uuid) -> Result<()> {
        let mut items = self.items.write();
        let item = items
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| DashboardError::not_found("Notification not found"))?;
        item.read = true;
        Ok(())
    }

    /// Mark every notification read, returning how many changed
    pub fn mark_all_read(&self) -> usize {
        let mut items = self.items.write();
        let mut changed = 0;
        for item in items.iter_mut() {
            if !item.read {
                item.read = true;
                changed += 1;
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::NotificationKind;

    #[test]
    fn test_push_and_unread_count() {
        let feed = NotificationFeed::new();
        feed.push(Notification::new(
            NotificationKind::TaskOverdue,
            "Task Overdue",
            "Fix authentication bug is now overdue",
        ));
        feed.push(Notification::new(
            NotificationKind::TaskCompleted,
            "Task Completed",
            "Alex Chen completed \"Implement dark mode\"",
        ));

        assert_eq!(feed.unread_count(), 2);
        assert_eq!(feed.list().len(), 2);
    }

    #[test]
    fn test_mark_read() {
        let feed = NotificationFeed::new();
        let notification = Notification::new(
            NotificationKind::MeetingScheduled,
            "Meeting Scheduled",
            "Sprint Planning meeting scheduled for tomorrow at 10:00 AM",
        );
        let id = notification.id;
        feed.push(notification);

        feed.mark_read(id).unwrap();
        assert_eq!(feed.unread_count(), 0);

        let err = feed.mark_read(Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, DashboardError::NotFound(_)));
    }

    #[test]
    fn test_mark_all_read() {
        let feed = NotificationFeed::new();
        for i in 0..3 {
            feed.push(Notification::new(
                NotificationKind::TaskAssigned,
                "New Task Assigned",
                format!("Task {}", i),
            ));
        }

        assert_eq!(feed.mark_all_read(), 3);
        assert_eq!(feed.unread_count(), 0);
        // Second pass changes nothing
        assert_eq!(feed.mark_all_read(), 0);
    }
}

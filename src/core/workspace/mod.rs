//! In-memory workspace
//!
//! All dashboard data lives in these stores. Nothing here is durable; the
//! workspace is rebuilt (and optionally seeded with demo records) on every
//! start.

pub mod analytics;
pub mod invitations;
pub mod meetings;
pub mod members;
pub mod notifications;
pub mod tasks;

pub use analytics::{AnalyticsReport, AnalyticsService, DashboardOverview};
pub use invitations::InviteService;
pub use meetings::{MeetingCalendar, NewMeeting};
pub use members::{DepartmentCount, DirectoryStats, MemberDirectory};
pub use notifications::NotificationFeed;
pub use tasks::{NewTask, TaskBoard, TaskCounts, TaskQuery};

use crate::auth::rbac::Role;
use crate::config::WorkspaceConfig;
use crate::core::models::{
    Meeting, MeetingFormat, MeetingKind, MemberStatus, Metadata, Notification, NotificationKind,
    Task, TaskPriority, TaskStatus, TeamMember,
};
use crate::utils::crypto;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// The stores backing the dashboard
pub struct Workspace {
    /// Team directory
    pub members: Arc<MemberDirectory>,
    /// Task board
    pub tasks: Arc<TaskBoard>,
    /// Meeting calendar
    pub meetings: Arc<MeetingCalendar>,
    /// Notification feed
    pub notifications: Arc<NotificationFeed>,
    /// Invitation service
    pub invites: InviteService,
    /// Analytics read models
    pub analytics: AnalyticsService,
}

impl Workspace {
    /// Build the workspace, seeding demo data when configured
    pub fn new(config: &WorkspaceConfig) -> Result<Self> {
        let members = Arc::new(MemberDirectory::new());
        let tasks = Arc::new(TaskBoard::new());
        let meetings = Arc::new(MeetingCalendar::new());
        let notifications = Arc::new(NotificationFeed::new());

        if config.seed_demo_data {
            seed_demo_data(config, &members, &tasks, &meetings, &notifications)?;
            info!(
                "Seeded demo workspace: {} members, {} tasks, {} meetings",
                members.len(),
                tasks.counts().total,
                meetings.len()
            );
        }

        let invites = InviteService::new(
            members.clone(),
            notifications.clone(),
            config.invite_base_url.clone(),
        );
        let analytics = AnalyticsService::new(tasks.clone(), members.clone(), meetings.clone());

        Ok(Self {
            members,
            tasks,
            meetings,
            notifications,
            invites,
            analytics,
        })
    }
}

fn date(y: i32, m: u32, d: u32) -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

fn time(h: u32, m: u32) -> chrono::NaiveTime {
    chrono::NaiveTime::from_hms_opt(h, m, 0).expect("valid seed time")
}

/// Populate the stores with the demo organization
fn seed_demo_data(
    config: &WorkspaceConfig,
    members: &MemberDirectory,
    tasks: &TaskBoard,
    meetings: &MeetingCalendar,
    notifications: &NotificationFeed,
) -> Result<()> {
    // One hash shared by every demo account; real accounts get their own
    let password_hash = crypto::hash_password(&config.demo_password)?;

    let roster: [(&str, &str, Role, &str, &str, &str, (i32, u32, u32), MemberStatus, u32, u32); 7] = [
        (
            "John Doe",
            "john@acme.com",
            Role::Admin,
            "Engineering",
            "+1 (555) 000-0000",
            "San Francisco, CA",
            (2022, 11, 1),
            MemberStatus::Online,
            51,
            93,
        ),
        (
            "Sarah Wilson",
            "sarah.wilson@company.com",
            Role::Admin,
            "Engineering",
            "+1 (555) 123-4567",
            "San Francisco, CA",
            (2023, 1, 15),
            MemberStatus::Online,
            45,
            92,
        ),
        (
            "Mike Johnson",
            "mike.johnson@company.com",
            Role::Manager,
            "Marketing",
            "+1 (555) 234-5678",
            "New York, NY",
            (2023, 2, 20),
            MemberStatus::Online,
            38,
            88,
        ),
        (
            "Alex Chen",
            "alex.chen@company.com",
            Role::Member,
            "Engineering",
            "+1 (555) 345-6789",
            "Seattle, WA",
            (2023, 3, 10),
            MemberStatus::Away,
            52,
            95,
        ),
        (
            "Emma Davis",
            "emma.davis@company.com",
            Role::Manager,
            "Sales",
            "+1 (555) 456-7890",
            "Austin, TX",
            (2023, 1, 30),
            MemberStatus::Online,
            41,
            89,
        ),
        (
            "James Rodriguez",
            "james.rodriguez@company.com",
            Role::Member,
            "HR",
            "+1 (555) 567-8901",
            "Miami, FL",
            (2023, 4, 5),
            MemberStatus::Offline,
            29,
            85,
        ),
        (
            "Lisa Thompson",
            "lisa.thompson@company.com",
            Role::Member,
            "Marketing",
            "+1 (555) 678-9012",
            "Los Angeles, CA",
            (2023, 3, 25),
            MemberStatus::Online,
            33,
            87,
        ),
    ];

    for (name, email, role, department, phone, location, joined, status, done, efficiency) in roster
    {
        members.insert(TeamMember {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            password_hash: password_hash.clone(),
            role,
            department: department.to_string(),
            avatar: Some("/placeholder.svg".to_string()),
            phone: Some(phone.to_string()),
            location: Some(location.to_string()),
            joined_at: date(joined.0, joined.1, joined.2),
            status,
            tasks_completed: done,
            efficiency,
        });
    }

    let assignee_id = |name: &str| {
        members
            .search(Some(name), None)
            .first()
            .map(|member| member.id)
    };

    let seed_tasks = [
        (
            "Update user dashboard UI",
            "Redesign the user dashboard with new components and improved UX",
            "Sarah Wilson",
            "Development",
            TaskPriority::High,
            TaskStatus::InProgress,
            (2024, 1, 15),
            (2024, 1, 10),
        ),
        (
            "Review marketing campaign",
            "Review and approve the Q1 marketing campaign materials",
            "Mike Johnson",
            "Marketing",
            TaskPriority::Medium,
            TaskStatus::Todo,
            (2024, 1, 20),
            (2024, 1, 11),
        ),
        (
            "Database optimization",
            "Optimize database queries for better performance",
            "Alex Chen",
            "Development",
            TaskPriority::Critical,
            TaskStatus::Completed,
            (2024, 1, 12),
            (2024, 1, 8),
        ),
    ];

    for (title, description, assignee, category, priority, status, due, created) in seed_tasks {
        let created_at = date(created.0, created.1, created.2)
            .and_hms_opt(9, 0, 0)
            .expect("valid seed timestamp")
            .and_utc();
        tasks.insert(Task {
            metadata: Metadata {
                id: Uuid::new_v4(),
                created_at,
                updated_at: created_at,
            },
            title: title.to_string(),
            description: description.to_string(),
            assignee: assignee.to_string(),
            assignee_id: assignee_id(assignee),
            category: category.to_string(),
            priority,
            status,
            due_date: date(due.0, due.1, due.2),
        });
    }

    let seed_meetings = [
        (
            "Project Review Meeting",
            (2024, 1, 15),
            (10, 0),
            60,
            MeetingKind::Project,
            vec!["Sarah Wilson", "Mike Johnson", "Alex Chen"],
        ),
        (
            "Client Presentation",
            (2024, 1, 15),
            (14, 0),
            45,
            MeetingKind::Client,
            vec!["Sarah Wilson", "Emma Davis"],
        ),
        (
            "Team Standup",
            (2024, 1, 16),
            (9, 0),
            30,
            MeetingKind::Standup,
            vec!["All Team"],
        ),
    ];

    for (title, when, at, duration, kind, attendees) in seed_meetings {
        meetings.insert(Meeting {
            metadata: Metadata::new(),
            title: title.to_string(),
            description: None,
            date: date(when.0, when.1, when.2),
            start_time: time(at.0, at.1),
            duration_minutes: duration,
            kind,
            format: MeetingFormat::Video,
            location: None,
            attendees: attendees.into_iter().map(String::from).collect(),
        });
    }

    let now = chrono::Utc::now();
    let seed_notifications = [
        (
            NotificationKind::TaskOverdue,
            "Task Overdue",
            "Fix authentication bug is now overdue",
            2,
            false,
        ),
        (
            NotificationKind::TaskCompleted,
            "Task Completed",
            "Alex Chen completed \"Implement dark mode\"",
            4,
            false,
        ),
        (
            NotificationKind::TaskAssigned,
            "New Task Assigned",
            "You have been assigned \"Update landing page design\"",
            24,
            true,
        ),
        (
            NotificationKind::MeetingScheduled,
            "Meeting Scheduled",
            "Sprint Planning meeting scheduled for tomorrow at 10:00 AM",
            24,
            true,
        ),
        (
            NotificationKind::UserInvited,
            "New Team Member",
            "Jennifer Lopez has joined your organization",
            48,
            true,
        ),
    ];

    for (kind, title, message, hours_ago, read) in seed_notifications {
        notifications.push(Notification {
            id: Uuid::new_v4(),
            kind,
            title: title.to_string(),
            message: message.to_string(),
            created_at: now - chrono::Duration::hours(hours_ago),
            read,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorkspaceConfig;

    #[test]
    fn test_empty_workspace_without_seed() {
        let config = WorkspaceConfig {
            seed_demo_data: false,
            ..WorkspaceConfig::default()
        };
        let workspace = Workspace::new(&config).unwrap();

        assert!(workspace.members.is_empty());
        assert_eq!(workspace.tasks.counts().total, 0);
        assert!(workspace.meetings.is_empty());
    }

    #[test]
    fn test_seeded_workspace() {
        let workspace = Workspace::new(&WorkspaceConfig::default()).unwrap();

        assert_eq!(workspace.members.len(), 7);
        assert_eq!(workspace.tasks.counts().total, 3);
        assert_eq!(workspace.meetings.len(), 3);
        assert_eq!(workspace.notifications.list().len(), 5);
        assert_eq!(workspace.notifications.unread_count(), 2);

        // The demo admin can sign in
        let john = workspace.members.find_by_email("john@acme.com").unwrap();
        assert_eq!(john.role, Role::Admin);
        assert!(
            crypto::verify_password(
                &WorkspaceConfig::default().demo_password,
                &john.password_hash
            )
            .unwrap()
        );

        // Seed tasks are linked to directory members
        let tasks = workspace.tasks.list(&TaskQuery::default());
        assert!(tasks.iter().all(|t| t.assignee_id.is_some()));
    }
}

//! Task records

use super::Metadata;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A task on the board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Record metadata
    #[serde(flatten)]
    pub metadata: Metadata,
    /// Task title
    pub title: String,
    /// Task description
    pub description: String,
    /// Assignee display name
    pub assignee: String,
    /// Assignee member ID
    pub assignee_id: Option<Uuid>,
    /// Category label (Development, Marketing, ...)
    pub category: String,
    /// Priority
    pub priority: TaskPriority,
    /// Status
    pub status: TaskStatus,
    /// Due date
    pub due_date: chrono::NaiveDate,
}

impl Task {
    /// Whether the task is past due and not completed
    pub fn is_overdue(&self, today: chrono::NaiveDate) -> bool {
        self.status != TaskStatus::Completed && self.due_date < today
    }
}

/// Task status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Not started
    Todo,
    /// Being worked on
    InProgress,
    /// Done
    Completed,
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskStatus::Todo => write!(f, "todo"),
            TaskStatus::InProgress => write!(f, "in-progress"),
            TaskStatus::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(TaskStatus::Todo),
            "in-progress" => Ok(TaskStatus::InProgress),
            "completed" => Ok(TaskStatus::Completed),
            _ => Err(format!("Invalid task status: {}", s)),
        }
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    /// Can wait
    Low,
    /// Normal
    Medium,
    /// Needs attention soon
    High,
    /// Blocking
    Critical,
}

impl std::fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskPriority::Low => write!(f, "low"),
            TaskPriority::Medium => write!(f, "medium"),
            TaskPriority::High => write!(f, "high"),
            TaskPriority::Critical => write!(f, "critical"),
        }
    }
}

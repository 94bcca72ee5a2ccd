//! In-memory task board

use crate::core::models::{Metadata, Task, TaskPriority, TaskStatus};
use crate::utils::error::{DashboardError, Result};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Board holding every task
#[derive(Debug, Default)]
pub struct TaskBoard {
    tasks: RwLock<Vec<Task>>,
}

/// List filter: free-text search plus status
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskQuery {
    /// Matches against title and description
    pub search: Option<String>,
    /// Restrict to one status
    pub status: Option<TaskStatus>,
}

/// Fields for creating a task
#[derive(Debug, Clone, Deserialize)]
pub struct NewTask {
    /// Task title
    pub title: String,
    /// Task description
    #[serde(default)]
    pub description: String,
    /// Assignee display name
    pub assignee: String,
    /// Assignee member ID
    pub assignee_id: Option<Uuid>,
    /// Category label
    pub category: String,
    /// Priority
    pub priority: TaskPriority,
    /// Due date
    pub due_date: chrono::NaiveDate,
}

/// Per-status task counts
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TaskCounts {
    /// All tasks
    pub total: usize,
    /// Tasks not started
    pub todo: usize,
    /// Tasks being worked on
    pub in_progress: usize,
    /// Finished tasks
    pub completed: usize,
}

impl TaskBoard {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an existing task record
    pub fn insert(&self, task: Task) {
        self.tasks.write().push(task);
    }

    /// Create a task from the given fields
    pub fn create(&self, new_task: NewTask) -> Result<Task> {
        if new_task.title.trim().is_empty() {
            return Err(DashboardError::validation("Task title is required"));
        }

        let task = Task {
            metadata: Metadata::new(),
            title: new_task.title,
            description: new_task.description,
            assignee: new_task.assignee,
            assignee_id: new_task.assignee_id,
            category: new_task.category,
            priority: new_task.priority,
            status: TaskStatus::Todo,
            due_date: new_task.due_date,
        };

        self.tasks.write().push(task.clone());
        Ok(task)
    }

    /// List tasks matching a query, newest first
    pub fn list(&self, query: &TaskQuery) -> Vec<Task> {
        let search = query.search.as_deref().map(|s| s.to_lowercase());
        let mut tasks: Vec<Task> = self
            .tasks
            .read()
            .iter()
            .filter(|t| {
                let matches_search = search.as_deref().is_none_or(|s| {
                    t.title.to_lowercase().contains(s) || t.description.to_lowercase().contains(s)
                });
                let matches_status = query.status.is_none_or(|status| t.status == status);
                matches_search && matches_status
            })
            .cloned()
            .collect();
        tasks.sort_by(|a, b| b.metadata.created_at.cmp(&a.metadata.created_at));
        tasks
    }

    /// Look up a task by ID
    pub fn get(&self, id: Uuid) -> Option<Task> {
        self.tasks.read().iter().find(|t| t.metadata.id == id).cloned()
    }

    /// Move a task to a new status
    pub fn update_status(&self, id: Uuid, status: TaskStatus) -> Result<Task> {
        let mut tasks = self.tasks.write();
        let task = tasks
            .iter_mut()
            .find(|t| t.metadata.id == id)
            .ok_or_else(|| DashboardError::not_found("Task not found"))?;

        task.status = status;
        task.metadata.touch();
        Ok(task.clone())
    }

    /// The most recently created tasks
    pub fn recent(&self, limit: usize) -> Vec<Task> {
        let mut tasks = self.tasks.read().clone();
        tasks.sort_by(|a, b| b.metadata.created_at.cmp(&a.metadata.created_at));
        tasks.truncate(limit);
        tasks
    }

    /// Tasks due on a given date
    pub fn due_on(&self, date: chrono::NaiveDate) -> Vec<Task> {
        self.tasks
            .read()
            .iter()
            .filter(|t| t.due_date == date)
            .cloned()
            .collect()
    }

    /// Tasks past their due date and not completed
    pub fn overdue_count(&self, today: chrono::NaiveDate) -> usize {
        self.tasks
            .read()
            .iter()
            .filter(|t| t.is_overdue(today))
            .count()
    }

    /// Per-status counts
    pub fn counts(&self) -> TaskCounts {
        let tasks = self.tasks.read();
        TaskCounts {
            total: tasks.len(),
            todo: tasks.iter().filter(|t| t.status == TaskStatus::Todo).count(),
            in_progress: tasks
                .iter()
                .filter(|t| t.status == TaskStatus::InProgress)
                .count(),
            completed: tasks
                .iter()
                .filter(|t| t.status == TaskStatus::Completed)
                .count(),
        }
    }
}

//! In-memory team directory

use crate::auth::rbac::Role;
use crate::core::models::{MemberStatus, NotificationPreferences, TeamMember};
use crate::utils::error::{DashboardError, Result};
use parking_lot::RwLock;
use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

/// Directory of everyone in the organization
#[derive(Debug, Default)]
pub struct MemberDirectory {
    members: RwLock<Vec<TeamMember>>,
    preferences: RwLock<HashMap<Uuid, NotificationPreferences>>,
}

/// Member count for one department
#[derive(Debug, Clone, Serialize)]
pub struct DepartmentCount {
    /// Department name
    pub name: String,
    /// Members in the department
    pub members: usize,
}

/// Directory-wide summary numbers
#[derive(Debug, Clone, Serialize)]
pub struct DirectoryStats {
    /// Total members
    pub total_members: usize,
    /// Members currently online
    pub online_now: usize,
    /// Average efficiency across the team (percent)
    pub average_efficiency: u32,
    /// Number of departments
    pub departments: usize,
}

impl MemberDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a member
    pub fn insert(&self, member: TeamMember) {
        self.members.write().push(member);
    }

    /// All members
    pub fn list(&self) -> Vec<TeamMember> {
        self.members.read().clone()
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.members.read().len()
    }

    /// Whether the directory is empty
    pub fn is_empty(&self) -> bool {
        self.members.read().is_empty()
    }

    /// Search by name, email or department, optionally filtered by role
    pub fn search(&self, term: Option<&str>, role: Option<Role>) -> Vec<TeamMember> {
        let term = term.map(|t| t.to_lowercase());
        self.members
            .read()
            .iter()
            .filter(|m| {
                let matches_term = term.as_deref().is_none_or(|t| {
                    m.name.to_lowercase().contains(t)
                        || m.email.to_lowercase().contains(t)
                        || m.department.to_lowercase().contains(t)
                });
                let matches_role = role.is_none_or(|r| m.role == r);
                matches_term && matches_role
            })
            .cloned()
            .collect()
    }

    /// Look up a member by email, case-insensitively
    pub fn find_by_email(&self, email: &str) -> Option<TeamMember> {
        self.members
            .read()
            .iter()
            .find(|m| m.email.eq_ignore_ascii_case(email))
            .cloned()
    }

    /// Look up a member by ID
    pub fn find_by_id(&self, id: Uuid) -> Option<TeamMember> {
        self.members.read().iter().find(|m| m.id == id).cloned()
    }

    /// Update a member's profile fields
    pub fn update_profile(
        &self,
        id: Uuid,
        name: Option<String>,
        avatar: Option<String>,
    ) -> Result<TeamMember> {
        let mut members = self.members.write();
        let member = members
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| DashboardError::not_found("Member not found"))?;

        if let Some(name) = name {
            member.name = name;
        }
        if let Some(avatar) = avatar {
            member.avatar = Some(avatar);
        }
        Ok(member.clone())
    }

    /// Member counts per department
    pub fn department_distribution(&self) -> Vec<DepartmentCount> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for member in self.members.read().iter() {
            *counts.entry(member.department.clone()).or_insert(0) += 1;
        }

        let mut distribution: Vec<DepartmentCount> = counts
            .into_iter()
            .map(|(name, members)| DepartmentCount { name, members })
            .collect();
        distribution.sort_by(|a, b| b.members.cmp(&a.members).then(a.name.cmp(&b.name)));
        distribution
    }

    /// Directory-wide summary
    pub fn stats(&self) -> DirectoryStats {
        let members = self.members.read();
        let total_members = members.len();
        let online_now = members
            .iter()
            .filter(|m| m.status == MemberStatus::Online)
            .count();
        let average_efficiency = if total_members == 0 {
            0
        } else {
            let sum: u32 = members.iter().map(|m| m.efficiency).sum();
            (sum as f64 / total_members as f64).round() as u32
        };
        let departments = members
            .iter()
            .map(|m| m.department.as_str())
            .collect::<std::collections::HashSet<_>>()
            .len();

        DirectoryStats {
            total_members,
            online_now,
            average_efficiency,
            departments,
        }
    }

    /// Notification preferences for a member, defaults when never set
    pub fn preferences(&self, id: Uuid) -> NotificationPreferences {
        self.preferences.read().get(&id).cloned().unwrap_or_default()
    }

    /// Store notification preferences for a member
    pub fn set_preferences(&self, id: Uuid, prefs: NotificationPreferences) {
        self.preferences.write().insert(id, prefs);
    }
}

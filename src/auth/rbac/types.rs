//! RBAC type definitions

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Dashboard role
///
/// Closed enumeration; there is no dynamic role creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full organization access
    Admin,
    /// Team management and analytics
    Manager,
    /// Regular team member
    Member,
}

impl Role {
    /// All roles, most privileged first
    pub const ALL: [Role; 3] = [Role::Admin, Role::Manager, Role::Member];
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Manager => write!(f, "manager"),
            Role::Member => write!(f, "member"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "manager" => Ok(Role::Manager),
            "member" => Ok(Role::Member),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// Role definition
#[derive(Debug, Clone)]
pub struct RoleDefinition {
    /// The role being defined
    pub role: Role,
    /// Role description
    pub description: String,
    /// Full permission set, inherited permissions included
    pub permissions: HashSet<String>,
    /// Role this definition extends; its permissions are inherited, which
    /// keeps the privilege ordering a structural guarantee
    pub extends: Option<Role>,
}

/// Permission definition
#[derive(Debug, Clone)]
pub struct Permission {
    /// Permission name
    pub name: String,
    /// Permission description
    pub description: String,
    /// Resource this permission applies to
    pub resource: String,
    /// Action this permission allows
    pub action: String,
}

/// Permission check result
#[derive(Debug, Clone)]
pub struct PermissionCheck {
    /// Whether permission is granted
    pub granted: bool,
    /// Role that granted the permission
    pub granted_by_role: Option<Role>,
    /// Reason for denial (if not granted)
    pub denial_reason: Option<String>,
}

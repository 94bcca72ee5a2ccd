//! Permission checking methods

use std::collections::HashSet;

use super::system::RbacSystem;
use super::types::{PermissionCheck, Role};

impl RbacSystem {
    /// Whether a role holds a single named permission
    ///
    /// Unknown permission names are simply not found and return false.
    pub fn role_has_permission(&self, role: Role, permission: &str) -> bool {
        self.role_permissions(role)
            .map(|perms| perms.contains(permission))
            .unwrap_or(false)
    }

    /// Check that the held permissions cover all required ones
    pub fn check_permissions(&self, held: &[String], required: &[String]) -> bool {
        let held: HashSet<&String> = held.iter().collect();
        required.iter().all(|perm| held.contains(perm))
    }

    /// Check that the held permissions cover any of the required ones
    pub fn check_any_permission(&self, held: &[String], required: &[String]) -> bool {
        let held: HashSet<&String> = held.iter().collect();
        required.iter().any(|perm| held.contains(perm))
    }

    /// Detailed permission check for a role
    pub fn check_permission_detailed(&self, role: Role, required: &str) -> PermissionCheck {
        if self.role_has_permission(role, required) {
            PermissionCheck {
                granted: true,
                granted_by_role: Some(role),
                denial_reason: None,
            }
        } else {
            PermissionCheck {
                granted: false,
                granted_by_role: None,
                denial_reason: Some(format!("Missing permission: {}", required)),
            }
        }
    }

    /// Sorted permission names for a role, for API responses
    pub fn role_permission_names(&self, role: Role) -> Vec<String> {
        let mut names: Vec<String> = self
            .role_permissions(role)
            .map(|perms| perms.iter().cloned().collect())
            .unwrap_or_default();
        names.sort();
        names
    }
}

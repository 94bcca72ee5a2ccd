//! RBAC system core functionality

use crate::config::RbacConfig;
use crate::utils::error::Result;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

use super::types::{Permission, Role, RoleDefinition};

/// RBAC system mapping roles to permission sets
#[derive(Debug, Clone)]
pub struct RbacSystem {
    /// RBAC configuration
    pub(super) config: RbacConfig,
    /// Role definitions
    pub(super) roles: HashMap<Role, RoleDefinition>,
    /// Permission definitions
    pub(super) permissions: HashMap<String, Permission>,
}

impl RbacSystem {
    /// Create a new RBAC system
    pub async fn new(config: &RbacConfig) -> Result<Self> {
        info!("Initializing RBAC system");

        let mut rbac = Self {
            config: config.clone(),
            roles: HashMap::new(),
            permissions: HashMap::new(),
        };

        rbac.initialize_default_permissions();
        rbac.initialize_default_roles();

        info!("RBAC system initialized successfully");
        Ok(rbac)
    }

    /// Initialize the fixed permission set
    fn initialize_default_permissions(&mut self) {
        debug!("Initializing default permissions");

        let default_permissions = vec![
            Permission {
                name: "view_tasks".to_string(),
                description: "See the task board".to_string(),
                resource: "tasks".to_string(),
                action: "view".to_string(),
            },
            Permission {
                name: "update_own_tasks".to_string(),
                description: "Update tasks assigned to you".to_string(),
                resource: "tasks".to_string(),
                action: "update_own".to_string(),
            },
            Permission {
                name: "manage_tasks".to_string(),
                description: "Create and update any task".to_string(),
                resource: "tasks".to_string(),
                action: "manage".to_string(),
            },
            Permission {
                name: "view_analytics".to_string(),
                description: "Read analytics and usage data".to_string(),
                resource: "analytics".to_string(),
                action: "view".to_string(),
            },
            Permission {
                name: "schedule_meetings".to_string(),
                description: "Schedule meetings for the team".to_string(),
                resource: "meetings".to_string(),
                action: "schedule".to_string(),
            },
            Permission {
                name: "manage_users".to_string(),
                description: "Manage the team directory and invitations".to_string(),
                resource: "users".to_string(),
                action: "manage".to_string(),
            },
        ];

        for permission in default_permissions {
            self.permissions.insert(permission.name.clone(), permission);
        }

        debug!("Initialized {} default permissions", self.permissions.len());
    }

    /// Initialize the role definitions
    ///
    /// Definitions are expanded in privilege order so that each role inherits
    /// the full permission set of the role it extends. Admin therefore always
    /// holds a superset of manager, and manager of member.
    fn initialize_default_roles(&mut self) {
        debug!("Initializing default roles");

        let default_roles = vec![
            RoleDefinition {
                role: Role::Member,
                description: "Regular team member working their own tasks".to_string(),
                permissions: ["view_tasks", "update_own_tasks"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                extends: None,
            },
            RoleDefinition {
                role: Role::Manager,
                description: "Team manager with task, meeting and analytics access".to_string(),
                permissions: ["manage_tasks", "view_analytics", "schedule_meetings"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                extends: Some(Role::Member),
            },
            RoleDefinition {
                role: Role::Admin,
                description: "Administrator with full organization access".to_string(),
                permissions: ["manage_users"].iter().map(|s| s.to_string()).collect(),
                extends: Some(Role::Manager),
            },
        ];

        for mut definition in default_roles {
            if let Some(parent) = definition.extends {
                if let Some(parent_def) = self.roles.get(&parent) {
                    definition
                        .permissions
                        .extend(parent_def.permissions.iter().cloned());
                }
            }
            self.roles.insert(definition.role, definition);
        }

        debug!("Initialized {} default roles", self.roles.len());
    }

    /// Get a role definition
    pub fn get_role(&self, role: Role) -> Option<&RoleDefinition> {
        self.roles.get(&role)
    }

    /// Permission set for a role
    pub fn role_permissions(&self, role: Role) -> Option<&HashSet<String>> {
        self.roles.get(&role).map(|def| &def.permissions)
    }

    /// Get a permission definition by name
    pub fn get_permission(&self, permission_name: &str) -> Option<&Permission> {
        self.permissions.get(permission_name)
    }

    /// Whether a role counts as administrative
    pub fn is_admin(&self, role: Role) -> bool {
        self.config.admin_roles.contains(&role.to_string())
    }

    /// List all role definitions
    pub fn list_roles(&self) -> Vec<&RoleDefinition> {
        self.roles.values().collect()
    }

    /// List all permission definitions
    pub fn list_permissions(&self) -> Vec<&Permission> {
        self.permissions.values().collect()
    }
}

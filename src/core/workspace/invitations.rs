//! Team invitations
//!
//! Email invitations become pending records plus a feed notification; link
//! invitations produce a shareable URL. Nothing is sent anywhere.

use crate::auth::rbac::Role;
use crate::core::models::{Invitation, InviteLink, Notification, NotificationKind};
use crate::core::workspace::{MemberDirectory, NotificationFeed};
use crate::utils::crypto;
use crate::utils::error::{DashboardError, Result};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Issues and tracks invitations
pub struct InviteService {
    directory: Arc<MemberDirectory>,
    notifications: Arc<NotificationFeed>,
    invitations: RwLock<Vec<Invitation>>,
    base_url: String,
}

impl InviteService {
    /// Create the service over the shared stores
    pub fn new(
        directory: Arc<MemberDirectory>,
        notifications: Arc<NotificationFeed>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            directory,
            notifications,
            invitations: RwLock::new(Vec::new()),
            base_url: base_url.into(),
        }
    }

    /// Invite someone by email
    pub fn invite_by_email(
        &self,
        email: &str,
        role: Role,
        message: Option<String>,
    ) -> Result<Invitation> {
        let email = email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(DashboardError::validation("A valid email address is required"));
        }
        if self.directory.find_by_email(email).is_some() {
            return Err(DashboardError::conflict(format!(
                "{} is already a member of the organization",
                email
            )));
        }

        let invitation = Invitation {
            id: Uuid::new_v4(),
            email: email.to_string(),
            role,
            message,
            created_at: chrono::Utc::now(),
        };

        self.invitations.write().push(invitation.clone());
        self.notifications.push(Notification::new(
            NotificationKind::UserInvited,
            "Invitation Sent",
            format!("Invitation sent to {}", email),
        ));

        info!("Invitation sent to {} as {}", email, role);
        Ok(invitation)
    }

    /// Generate a shareable invite link
    pub fn generate_link(&self, role: Role) -> InviteLink {
        let token = crypto::generate_invite_token();
        let url = format!("{}/invite/{}", self.base_url.trim_end_matches('/'), token);

        info!("Generated invite link for role {}", role);
        InviteLink {
            token,
            url,
            role,
            created_at: chrono::Utc::now(),
        }
    }

    /// Pending invitations, newest first
    pub fn pending(&self) -> Vec<Invitation> {
        let mut invitations = self.invitations.read().clone();
        invitations.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        invitations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{MemberStatus, TeamMember};

    fn service() -> InviteService {
        let directory = Arc::new(MemberDirectory::new());
        directory.insert(TeamMember {
            id: Uuid::new_v4(),
            name: "Sarah Wilson".to_string(),
            email: "sarah.wilson@company.com".to_string(),
            password_hash: String::new(),
            role: Role::Admin,
            department: "Engineering".to_string(),
            avatar: None,
            phone: None,
            location: None,
            joined_at: chrono::NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
            status: MemberStatus::Online,
            tasks_completed: 45,
            efficiency: 92,
        });

        InviteService::new(
            directory,
            Arc::new(NotificationFeed::new()),
            "https://taskmaster-pro.example",
        )
    }

    #[test]
    fn test_invite_by_email() {
        let invites = service();

        let invitation = invites
            .invite_by_email("jennifer.lopez@company.com", Role::Member, None)
            .unwrap();

        assert_eq!(invitation.email, "jennifer.lopez@company.com");
        assert_eq!(invites.pending().len(), 1);
    }

    #[test]
    fn test_invite_rejects_invalid_email() {
        let invites = service();

        assert!(invites.invite_by_email("", Role::Member, None).is_err());
        assert!(invites.invite_by_email("not-an-email", Role::Member, None).is_err());
    }

    #[test]
    fn test_invite_rejects_existing_member() {
        let invites = service();

        let err = invites
            .invite_by_email("sarah.wilson@company.com", Role::Member, None)
            .unwrap_err();
        assert!(matches!(err, DashboardError::Conflict(_)));
    }

    #[test]
    fn test_generate_link() {
        let invites = service();

        let link = invites.generate_link(Role::Member);
        assert!(link.url.starts_with("https://taskmaster-pro.example/invite/"));
        assert!(link.url.ends_with(&link.token));

        let other = invites.generate_link(Role::Member);
        assert_ne!(link.token, other.token);
    }
}

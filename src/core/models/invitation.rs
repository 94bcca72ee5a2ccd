//! Invitation records

use crate::auth::rbac::Role;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A pending email invitation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invitation {
    /// Invitation ID
    pub id: Uuid,
    /// Invitee email address
    pub email: String,
    /// Role the invitee will receive
    pub role: Role,
    /// Optional personal message
    pub message: Option<String>,
    /// When the invitation was created
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// A shareable invite link
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InviteLink {
    /// Opaque link token
    pub token: String,
    /// Full shareable URL
    pub url: String,
    /// Role granted on redemption
    pub role: Role,
    /// When the link was generated
    pub created_at: chrono::DateTime<chrono::Utc>,
}

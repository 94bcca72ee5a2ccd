//! Session and authorization guard
//!
//! Owns the session lifecycle and answers two questions: "is someone
//! authenticated?" and "may the current identity perform capability X?".
//! The guard never renders anything and never raises for ordinary
//! "no permission" or "not logged in" conditions.

pub mod marker;
pub mod rbac;
pub mod session;
pub mod verifier;

pub use marker::{FileMarkerStore, MarkerClaims, MarkerCodec, MarkerStore};
pub use rbac::{Permission, PermissionCheck, RbacSystem, Role};
pub use session::{Session, SessionStore};
pub use verifier::{CredentialVerifier, DirectoryVerifier};

use crate::config::AuthConfig;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{debug, info};

/// The guard: session lifecycle plus permission evaluation
#[derive(Clone)]
pub struct AuthSystem {
    /// Organization shown on every session
    organization: String,
    /// RBAC system
    rbac: Arc<RbacSystem>,
    /// Holder of the single active session
    store: Arc<SessionStore>,
    /// Marker signing and verification
    codec: MarkerCodec,
    /// Credential verification boundary
    verifier: Arc<dyn CredentialVerifier>,
    /// Marker persistence boundary
    marker: Arc<dyn MarkerStore>,
}

/// Authorization result for a bulk permission check
#[derive(Debug, Clone)]
pub struct AuthzResult {
    /// Whether all required permissions are held
    pub allowed: bool,
    /// Permissions that were checked
    pub required_permissions: Vec<String>,
    /// Permissions the current identity holds
    pub held_permissions: Vec<String>,
    /// Reason for denial (if not allowed)
    pub reason: Option<String>,
}

impl AuthSystem {
    /// Create a new guard
    pub async fn new(
        config: &AuthConfig,
        organization: &str,
        verifier: Arc<dyn CredentialVerifier>,
        marker: Arc<dyn MarkerStore>,
    ) -> Result<Self> {
        info!("Initializing authentication system");

        let rbac = Arc::new(RbacSystem::new(&config.rbac).await?);
        let codec = MarkerCodec::new(config);

        Ok(Self {
            organization: organization.to_string(),
            rbac,
            store: Arc::new(SessionStore::new()),
            codec,
            verifier,
            marker,
        })
    }

    /// Restore a session from the persisted marker, if one is present
    ///
    /// Returns whether a session was restored. A missing, expired, tampered
    /// or unresolvable marker yields "not authenticated" without error; only
    /// infrastructure failures (unreadable marker storage, directory faults)
    /// surface as errors.
    pub async fn initialize(&self) -> Result<bool> {
        let Some(raw) = self.marker.read().await? else {
            debug!("No session marker present");
            return Ok(false);
        };

        let claims = match self.codec.decode(&raw) {
            Ok(claims) => claims,
            Err(e) => {
                debug!("Ignoring invalid session marker: {}", e);
                return Ok(false);
            }
        };

        match self.verifier.resolve(claims.sub).await? {
            Some(member) => {
                let session = self.store.replace(Session::for_member(&member, &self.organization));
                info!("Restored session for {}", session.email);
                Ok(true)
            }
            None => {
                debug!("Session marker subject {} is not in the directory", claims.sub);
                Ok(false)
            }
        }
    }

    /// Verify credentials and establish a session
    ///
    /// The session stays unset on every failure path: invalid credentials,
    /// verifier faults and marker persistence faults all leave the guard
    /// unauthenticated.
    pub async fn login(&self, email: &str, password: &str) -> Result<Arc<Session>> {
        info!("Login attempt for {}", email);

        let member = self.verifier.verify(email, password).await?;

        let marker = self.codec.encode(member.id, &member.email)?;
        self.marker.write(&marker).await?;

        let session = self.store.replace(Session::for_member(&member, &self.organization));
        info!("Login successful for {}", session.email);
        Ok(session)
    }

    /// Clear the session and remove the persisted marker
    ///
    /// Idempotent: logging out with no active session is a no-op.
    pub async fn logout(&self) -> Result<()> {
        if self.store.is_active() {
            info!("Logging out");
        }
        self.store.clear();
        self.marker.clear().await?;
        Ok(())
    }

    /// Whether a session is currently held
    pub fn is_authenticated(&self) -> bool {
        self.store.is_active()
    }

    /// Snapshot of the current session
    pub fn current_session(&self) -> Option<Arc<Session>> {
        self.store.snapshot()
    }

    /// Whether the current identity holds a named permission
    ///
    /// False without a session; unknown permission names are simply not
    /// found and return false, never an error.
    pub fn has_permission(&self, permission: &str) -> bool {
        match self.store.snapshot() {
            Some(session) => self.rbac.role_has_permission(session.role, permission),
            None => false,
        }
    }

    /// Bulk permission check for route handlers
    pub fn authorize(&self, required: &[&str]) -> AuthzResult {
        let required_permissions: Vec<String> = required.iter().map(|s| s.to_string()).collect();

        let Some(session) = self.store.snapshot() else {
            return AuthzResult {
                allowed: false,
                required_permissions,
                held_permissions: Vec::new(),
                reason: Some("Not authenticated".to_string()),
            };
        };

        let held_permissions = self.rbac.role_permission_names(session.role);
        let allowed = self
            .rbac
            .check_permissions(&held_permissions, &required_permissions);

        AuthzResult {
            allowed,
            required_permissions,
            held_permissions,
            reason: if allowed {
                None
            } else {
                Some("Insufficient permissions".to_string())
            },
        }
    }

    /// Re-resolve the current identity and swap in a fresh session
    ///
    /// Used after profile edits so the session reflects the directory.
    pub async fn refresh(&self) -> Result<Option<Arc<Session>>> {
        let Some(current) = self.store.snapshot() else {
            return Ok(None);
        };

        match self.verifier.resolve(current.user_id).await? {
            Some(member) => {
                let session = self.store.replace(Session::for_member(&member, &self.organization));
                Ok(Some(session))
            }
            None => Ok(Some(current)),
        }
    }

    /// Get the RBAC system
    pub fn rbac(&self) -> &RbacSystem {
        &self.rbac
    }
}

//! Persisted session marker
//!
//! One opaque value under one fixed path: presence means "was authenticated
//! in a previous run". The value is a signed, expiring token rather than a
//! placeholder constant, so a tampered or stale marker is rejected instead
//! of trusted.

use crate::config::AuthConfig;
use crate::utils::error::{DashboardError, Result};
use async_trait::async_trait;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};
use uuid::Uuid;

const MARKER_ISSUER: &str = "taskmaster-rs";

/// Claims carried by the session marker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerClaims {
    /// Subject (user ID)
    pub sub: Uuid,
    /// Subject email, for log context
    pub email: String,
    /// Issued at timestamp
    pub iat: u64,
    /// Expiration timestamp
    pub exp: u64,
    /// Issuer
    pub iss: String,
}

/// Signs and verifies session markers
#[derive(Clone)]
pub struct MarkerCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl: u64,
}

impl std::fmt::Debug for MarkerCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarkerCodec")
            .field("algorithm", &self.algorithm)
            .field("ttl", &self.ttl)
            .field("encoding_key", &"[REDACTED]")
            .field("decoding_key", &"[REDACTED]")
            .finish()
    }
}

impl MarkerCodec {
    /// Create a codec from the auth configuration
    pub fn new(config: &AuthConfig) -> Self {
        let secret = config.session_secret.as_bytes();

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            ttl: config.session_ttl,
        }
    }

    /// Sign a marker for a user
    pub fn encode(&self, user_id: Uuid, email: &str) -> Result<String> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| DashboardError::internal(format!("System time error: {}", e)))?
            .as_secs();

        let claims = MarkerClaims {
            sub: user_id,
            email: email.to_string(),
            iat: now,
            exp: now + self.ttl,
            iss: MARKER_ISSUER.to_string(),
        };

        let header = Header::new(self.algorithm);
        let token = encode(&header, &claims, &self.encoding_key).map_err(DashboardError::Jwt)?;

        debug!("Signed session marker for user: {}", user_id);
        Ok(token)
    }

    /// Verify and decode a marker
    pub fn decode(&self, token: &str) -> Result<MarkerClaims> {
        let mut validation = Validation::new(self.algorithm);
        validation.set_issuer(&[MARKER_ISSUER]);

        let token_data =
            decode::<MarkerClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                warn!("Session marker verification failed: {}", e);
                DashboardError::Jwt(e)
            })?;

        debug!("Session marker verified for user: {}", token_data.claims.sub);
        Ok(token_data.claims)
    }
}

/// Persistence boundary for the session marker
///
/// Absence is an ordinary outcome (not authenticated); only infrastructure
/// failures are errors.
#[async_trait]
pub trait MarkerStore: Send + Sync {
    /// Read the stored marker, `None` when absent
    async fn read(&self) -> Result<Option<String>>;
    /// Persist a marker
    async fn write(&self, marker: &str) -> Result<()>;
    /// Remove the marker; removing an absent marker is a no-op
    async fn clear(&self) -> Result<()>;
}

/// Marker store backed by a single file
#[derive(Debug, Clone)]
pub struct FileMarkerStore {
    path: PathBuf,
}

impl FileMarkerStore {
    /// Create a store at the configured path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl MarkerStore for FileMarkerStore {
    async fn read(&self) -> Result<Option<String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => {
                let trimmed = contents.trim();
                if trimmed.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(trimmed.to_string()))
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            // A present-but-unreadable marker is an environment problem, not
            // "logged out"; surface it
            Err(e) => Err(DashboardError::Io(e)),
        }
    }

    async fn write(&self, marker: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        tokio::fs::write(&self.path, marker).await?;
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DashboardError::Io(e)),
        }
    }
}

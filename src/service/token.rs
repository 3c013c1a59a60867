//! Token service for authentication.
//!
//! Implements two-tier authentication:
//! - Admin token: a service-account credential from configuration, required
//!   for the seeding and user lookup APIs.
//! - Session tokens: issued at signup, limited to the account's own data.
//!
//! Session tokens are 64 characters of URL-safe base64 and live in memory;
//! the upstream authentication provider owns durable credentials.

use std::collections::HashMap;
use std::time::Duration;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use rand::Rng;

use crate::config::AuthConfig;

/// Token length in bytes (48 bytes = 64 base64 chars).
const TOKEN_BYTES: usize = 48;

/// Token type for access control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    /// Admin service-account token.
    Admin,
    /// Per-account session token.
    Session,
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Session => write!(f, "session"),
        }
    }
}

/// Session token metadata.
#[derive(Debug, Clone)]
pub struct SessionInfo {
    /// The token string (64 characters).
    pub token: String,
    /// JanID of the account this session belongs to.
    pub jan_id: String,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
    /// When the session expires.
    pub expires_at: DateTime<Utc>,
}

impl SessionInfo {
    /// Check if the session is still valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        Utc::now() <= self.expires_at
    }
}

/// Token service.
pub struct TokenService {
    /// Admin token from configuration.
    admin_token: String,
    /// Session lifetime.
    session_ttl: Duration,
    /// Active sessions indexed by token string.
    sessions: RwLock<HashMap<String, SessionInfo>>,
}

impl TokenService {
    /// Create a new token service.
    #[must_use]
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            admin_token: config.admin_token.clone(),
            session_ttl: Duration::from_secs(config.session_expiration),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Issue a session token for an account.
    pub fn issue_session(&self, jan_id: &str) -> SessionInfo {
        let now = Utc::now();
        let info = SessionInfo {
            token: generate_token(),
            jan_id: jan_id.to_string(),
            created_at: now,
            expires_at: now + self.session_ttl,
        };

        let mut sessions = self.sessions.write();
        // Lazy purge keeps the map from accumulating dead sessions.
        sessions.retain(|_, session| session.is_valid());
        sessions.insert(info.token.clone(), info.clone());

        info
    }

    /// Validate a bearer token.
    ///
    /// Returns the token type and, for sessions, the account's JanID.
    pub fn validate(&self, token: &str) -> Option<(TokenType, Option<String>)> {
        if token == self.admin_token {
            return Some((TokenType::Admin, None));
        }

        let sessions = self.sessions.read();
        let info = sessions.get(token)?;
        if info.is_valid() {
            Some((TokenType::Session, Some(info.jan_id.clone())))
        } else {
            None
        }
    }

    /// Revoke a session token.
    pub fn revoke(&self, token: &str) -> bool {
        self.sessions.write().remove(token).is_some()
    }
}

/// Generate a random URL-safe base64 token.
fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rng().fill(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

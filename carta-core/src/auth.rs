//! Operator session gate.
//!
//! Single trusted operator: credentials come from configuration, sessions
//! are opaque bearer tokens in an in-memory expiring map. Storefront reads
//! never touch this module; every mutating entry point checks it first.

use std::collections::HashMap;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use crate::error::{CatalogError, Result};

/// Configured operator identity: email plus an argon2 PHC-format hash.
#[derive(Debug, Clone)]
pub struct OperatorCredentials {
    pub email: String,
    pub password_hash: String,
}

/// A live operator session.
#[derive(Debug, Clone)]
pub struct OperatorSession {
    pub token: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl OperatorSession {
    fn new(email: &str, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            token: Uuid::new_v4().simple().to_string(),
            email: email.to_string(),
            created_at: now,
            expires_at: now + ttl,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.expires_at > Utc::now()
    }
}

/// Outcome of a gate check.
#[derive(Debug, Clone)]
pub enum SessionState {
    Authorized(OperatorSession),
    Unauthorized,
}

#[derive(Debug)]
pub struct SessionGate {
    credentials: OperatorCredentials,
    ttl: Duration,
    sessions: Mutex<HashMap<String, OperatorSession>>,
}

impl SessionGate {
    pub fn new(credentials: OperatorCredentials) -> Self {
        Self::with_ttl(credentials, Duration::hours(24))
    }

    pub fn with_ttl(credentials: OperatorCredentials, ttl: Duration) -> Self {
        Self {
            credentials,
            ttl,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Verify the supplied credentials and open a new session.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<OperatorSession> {
        if !email.eq_ignore_ascii_case(&self.credentials.email) {
            return Err(CatalogError::AuthRequired);
        }

        let parsed = PasswordHash::new(&self.credentials.password_hash)
            .map_err(|_| CatalogError::Internal("malformed operator password hash".into()))?;
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .map_err(|_| CatalogError::AuthRequired)?;

        let session = OperatorSession::new(&self.credentials.email, self.ttl);
        let mut sessions = self.sessions.lock().await;
        sessions.retain(|_, s| s.is_valid());
        sessions.insert(session.token.clone(), session.clone());

        info!(operator = %session.email, "operator signed in");
        Ok(session)
    }

    /// Invalidate a session immediately. Unknown tokens are ignored.
    pub async fn sign_out(&self, token: &str) {
        let mut sessions = self.sessions.lock().await;
        if sessions.remove(token).is_some() {
            info!("operator signed out");
        }
    }

    /// Resolve a bearer token to a gate decision.
    pub async fn check(&self, token: Option<&str>) -> SessionState {
        let Some(token) = token else {
            return SessionState::Unauthorized;
        };
        let mut sessions = self.sessions.lock().await;
        match sessions.get(token) {
            Some(session) if session.is_valid() => {
                SessionState::Authorized(session.clone())
            }
            Some(_) => {
                sessions.remove(token);
                SessionState::Unauthorized
            }
            None => SessionState::Unauthorized,
        }
    }

    /// Gate a mutating call: authorized session or `AuthRequired`.
    pub async fn authorize(&self, token: Option<&str>) -> Result<OperatorSession> {
        match self.check(token).await {
            SessionState::Authorized(session) => Ok(session),
            SessionState::Unauthorized => Err(CatalogError::AuthRequired),
        }
    }
}

/// Hash a plaintext operator password into PHC format. Used when the
/// deployment supplies `OPERATOR_PASSWORD` instead of a precomputed hash.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| CatalogError::Internal("failed to hash password".into()))
}

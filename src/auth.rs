use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::models::Timestamp;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Proof of a successful login. Carried by the session gate for the lifetime
/// of the screen; nothing here is a security token.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Session {
    pub username: String,
    pub started_at: Timestamp,
}

#[derive(Debug)]
pub enum AuthError {
    InvalidCredentials,
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::InvalidCredentials => write!(f, "invalid username or password"),
        }
    }
}

impl std::error::Error for AuthError {}

/// Login capability in front of the sync controller. Swappable so a real
/// credential exchange can replace the fixed pair without touching the
/// controller.
pub trait Authenticator {
    fn authenticate(&self, credentials: &Credentials) -> Result<Session, AuthError>;
}

/// Accepts exactly one configured username/password pair via plain string
/// comparison.
pub struct StaticAuthenticator {
    username: String,
    password: String,
}

impl StaticAuthenticator {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Authenticator for StaticAuthenticator {
    fn authenticate(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        if credentials.username == self.username && credentials.password == self.password {
            Ok(Session {
                username: credentials.username.clone(),
                started_at: Utc::now().timestamp(),
            })
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

/// Holds the active session, if any. The embedding screen keeps one gate and
/// only reaches the sync controller while `is_authenticated` holds.
#[derive(Default)]
pub struct SessionGate {
    session: Option<Session>,
}

impl SessionGate {
    pub fn login(
        &mut self,
        authenticator: &impl Authenticator,
        credentials: &Credentials,
    ) -> Result<Session, AuthError> {
        let session = authenticator.authenticate(credentials)?;
        self.session = Some(session.clone());
        Ok(session)
    }

    pub fn logout(&mut self) {
        self.session = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }
}

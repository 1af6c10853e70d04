//! Authenticated session, injected into the component tree as a context
//! instead of living in a browser-global store.

use std::fmt;

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// Accounts named `admin_*` are administrators.
    pub fn for_username(username: &str) -> Self {
        if username.starts_with("admin_") {
            Role::Admin
        } else {
            Role::User
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub username: String,
    pub role: Role,
}

impl Session {
    pub fn new(token: impl Into<String>, username: impl Into<String>) -> Self {
        let username = username.into();
        Self {
            token: token.into(),
            role: Role::for_username(&username),
            username,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

// Keeps bearer tokens out of logs.
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("username", &self.username)
            .field("role", &self.role)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct SessionContext(pub Signal<Option<Session>>);

impl SessionContext {
    pub fn current(&self) -> Option<Session> {
        (self.0)()
    }

    pub fn sign_in(&mut self, session: Session) {
        if let Err(err) = storage::save_session(&session) {
            warn!(%err, "session not persisted; it will last until the app closes");
        }
        info!(username = %session.username, role = ?session.role, "signed in");
        self.0.set(Some(session));
    }

    pub fn sign_out(&mut self) {
        if let Err(err) = storage::clear_session() {
            warn!(%err, "could not clear persisted session");
        }
        info!("signed out");
        self.0.set(None);
    }
}

/// Install the session context at the app root, restoring any persisted session.
pub fn use_session_provider() -> SessionContext {
    let session = use_signal(|| match storage::load_session() {
        Ok(restored) => restored,
        Err(err) => {
            warn!(%err, "ignoring unreadable persisted session");
            None
        }
    });
    use_context_provider(|| SessionContext(session))
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_follows_username_prefix() {
        assert_eq!(Session::new("t", "admin_rosa").role, Role::Admin);
        assert!(Session::new("t", "admin_rosa").is_admin());
        assert_eq!(Session::new("t", "rosa_admin").role, Role::User);
    }

    #[test]
    fn debug_output_hides_token() {
        let rendered = format!("{:?}", Session::new("secret-jwt", "rosa"));
        assert!(rendered.contains("rosa"));
        assert!(!rendered.contains("secret-jwt"));
    }
}

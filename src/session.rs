//! Session/Identity
//!
//! Holds the currently authenticated actor for this application session.
//! Credentials are compared in plaintext against a fixed table; there is no
//! hashing, token issuance or expiry.
//!
//! There is exactly one current-actor slot per `Session`, and the HTTP server
//! shares one `Session` across every connection. A login or logout from any
//! client changes the identity seen by all clients. This is not per-client
//! authentication.

use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::error::AuthError;
use crate::models::Actor;

/// One row of the credential table.
#[derive(Debug, Clone)]
pub struct Credential {
    pub email: String,
    pub password: String,
    pub actor: Actor,
}

/// CredentialTable
///
/// The fixed set of accounts that may sign in. Lookup is an exact match on
/// both email and password.
#[derive(Debug, Clone, Default)]
pub struct CredentialTable {
    entries: Vec<Credential>,
}

impl CredentialTable {
    pub fn new(entries: Vec<Credential>) -> Self {
        Self { entries }
    }

    fn find(&self, email: &str, password: &str) -> Option<&Credential> {
        self.entries
            .iter()
            .find(|entry| entry.email == email && entry.password == password)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Session
///
/// The single current-actor slot. Constructed once per application session
/// and shared through `AppState`.
#[derive(Debug)]
pub struct Session {
    credentials: CredentialTable,
    current: RwLock<Option<Actor>>,
}

/// SessionState
///
/// The shared handle stored in the application state.
pub type SessionState = Arc<Session>;

impl Session {
    pub fn new(credentials: CredentialTable) -> Self {
        Self {
            credentials,
            current: RwLock::new(None),
        }
    }

    /// login
    ///
    /// Resolves the actor for `email`/`password`, stamps `last_login` and makes
    /// it the current actor. A failed attempt leaves the current slot as it was.
    pub async fn login(&self, email: &str, password: &str) -> Result<Actor, AuthError> {
        let Some(credential) = self.credentials.find(email, password) else {
            warn!(email = %email, "login rejected: invalid credentials");
            return Err(AuthError::InvalidCredentials);
        };

        if !credential.actor.is_active {
            warn!(email = %email, "login rejected: account disabled");
            return Err(AuthError::AccountDisabled);
        }

        let mut actor = credential.actor.clone();
        actor.last_login = Utc::now();

        *self.current.write().await = Some(actor.clone());
        info!(actor_id = %actor.id, role = %actor.role, "actor signed in");

        Ok(actor)
    }

    /// logout
    ///
    /// Clears the current actor. Calling it with nobody signed in is a no-op.
    pub async fn logout(&self) {
        if let Some(actor) = self.current.write().await.take() {
            info!(actor_id = %actor.id, "actor signed out");
        }
    }

    pub async fn current_actor(&self) -> Option<Actor> {
        self.current.read().await.clone()
    }
}

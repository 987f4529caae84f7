use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::debug;

use crate::{
    error::ApiError,
    models::{Actor, Section},
    policy,
    session::SessionState,
};

/// AuthUser Extractor Result
///
/// The actor behind an authenticated request, resolved from the session's
/// current-actor slot.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub actor: Actor,
}

impl AuthUser {
    /// require
    ///
    /// Section gate for admin handlers. Re-evaluated on every call from the
    /// actor's role; fails with `ApiError::Forbidden` (403).
    pub fn require(&self, section: Section) -> Result<(), ApiError> {
        if policy::can_access(self.actor.role, section) {
            Ok(())
        } else {
            debug!(
                actor_id = %self.actor.id,
                role = %self.actor.role,
                section = %section,
                "section access denied"
            );
            Err(ApiError::Forbidden)
        }
    }
}

/// AuthUser Extractor Implementation
///
/// Makes `AuthUser` usable as a handler argument. The session is pulled from
/// the application state through `FromRef`.
///
/// Rejection: `ApiError::Unauthorized` (401) when nobody is signed in.
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    SessionState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = SessionState::from_ref(state);

        session
            .current_actor()
            .await
            .map(|actor| AuthUser { actor })
            .ok_or(ApiError::Unauthorized)
    }
}

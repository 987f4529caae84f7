use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, post},
};

/// Authenticated Router Module
///
/// Session endpoints for whoever is signed in, regardless of role. The
/// router is wrapped in `auth_middleware`, so an anonymous request never
/// reaches these handlers.
pub fn authenticated_routes() -> Router<AppState> {
    Router::<AppState>::new()
        // GET /me
        // The current actor's profile.
        .route("/me", get(handlers::get_me))
        // POST /logout
        // Clears the current actor. Idempotent.
        .route("/logout", post(handlers::logout))
        // GET /dashboard
        // The dashboard sections the current role may open, in tab order.
        .route("/dashboard", get(handlers::get_dashboard))
}

use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, post},
};

/// Public Router Module
///
/// Read-only endpoints for the public site plus the login gateway. Article
/// handlers only ever return published articles.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // GET /health
        // Liveness probe for load balancers.
        .route("/health", get(|| async { "ok" }))
        // POST /login
        // Signs in against the fixed credential table.
        .route("/login", post(handlers::login))
        // GET /articles?query=...&category=...&sort=...
        // The news listing, run through the filter pipeline.
        .route("/articles", get(handlers::list_articles))
        .route("/articles/{id}", get(handlers::get_article))
        // GET /articles/{id}/related
        // Up to three articles from the same category.
        .route("/articles/{id}/related", get(handlers::get_related_articles))
        // GET /home
        // Popular and featured articles plus the breaking-news ticker.
        .route("/home", get(handlers::get_home))
        .route("/categories", get(handlers::get_categories))
        .route("/events", get(handlers::list_events))
        .route("/clubs", get(handlers::list_clubs))
        .route("/exam-schedules", get(handlers::list_exam_schedules))
}

use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, put},
};

/// Admin Router Module
///
/// The dashboard's management API, nested under `/admin`.
///
/// Access Control:
/// Every handler resolves the actor through `AuthUser` (401 when nobody is
/// signed in). Listing, overview and export handlers check the section with
/// `AuthUser::require`; mutations pass the actor to the repository, which
/// re-checks the policy before touching the store. Either way a role outside
/// the section gets 403.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        // GET /admin/overview
        // Counts for the overview tab.
        .route("/overview", get(handlers::get_overview))
        // GET /admin/export/{section}
        // Spreadsheet rows for one section.
        .route("/export/{section}", get(handlers::export_section))
        // --- Articles (articles section) ---
        .route(
            "/articles",
            get(handlers::admin_list_articles).post(handlers::create_article),
        )
        .route(
            "/articles/{id}",
            put(handlers::update_article).delete(handlers::delete_article),
        )
        // --- Events (events section) ---
        .route(
            "/events",
            get(handlers::admin_list_events).post(handlers::create_event),
        )
        .route(
            "/events/{id}",
            put(handlers::update_event).delete(handlers::delete_event),
        )
        // --- Exam Schedules (exams section) ---
        .route(
            "/exam-schedules",
            get(handlers::admin_list_exam_schedules).post(handlers::create_exam_schedule),
        )
        .route(
            "/exam-schedules/{id}",
            put(handlers::update_exam_schedule).delete(handlers::delete_exam_schedule),
        )
        // --- Clubs (clubs section) ---
        .route(
            "/clubs",
            get(handlers::admin_list_clubs).post(handlers::create_club),
        )
        .route(
            "/clubs/{id}",
            put(handlers::update_club).delete(handlers::delete_club),
        )
        // --- Academic Results (academics section) ---
        .route(
            "/academic-results",
            get(handlers::admin_list_academic_results).post(handlers::create_academic_result),
        )
        .route(
            "/academic-results/{id}",
            put(handlers::update_academic_result).delete(handlers::delete_academic_result),
        )
}

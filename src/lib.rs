use axum::{
    Router,
    extract::{FromRef, Request},
    http::HeaderName,
    middleware::{self, Next},
    response::Response,
};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

// Portal core: identity, access policy, content store and query pipeline.
pub mod content;
pub mod error;
pub mod export;
pub mod filter;
pub mod models;
pub mod policy;
pub mod repository;
pub mod seed;
pub mod session;
pub mod validation;

// HTTP surface and runtime configuration.
pub mod auth;
pub mod config;
pub mod handlers;

// Module for routing segregation (Public, Authenticated, Admin).
pub mod routes;
use auth::AuthUser;
use routes::{admin, authenticated, public};

// --- Public Re-exports ---

pub use config::AppConfig;
pub use repository::{InMemoryRepository, Repository, RepositoryState, SeedData};
pub use session::{Session, SessionState};

/// ApiDoc
///
/// The OpenAPI document for the portal, served at `/api-docs/openapi.json`
/// and rendered by the Swagger UI at `/swagger-ui`.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::list_articles, handlers::get_article, handlers::get_related_articles,
        handlers::get_home, handlers::get_categories, handlers::list_events,
        handlers::list_clubs, handlers::list_exam_schedules, handlers::login,
        handlers::logout, handlers::get_me, handlers::get_dashboard,
        handlers::get_overview, handlers::export_section,
        handlers::admin_list_articles, handlers::create_article, handlers::update_article,
        handlers::delete_article, handlers::admin_list_events, handlers::create_event,
        handlers::update_event, handlers::delete_event, handlers::admin_list_exam_schedules,
        handlers::create_exam_schedule, handlers::update_exam_schedule,
        handlers::delete_exam_schedule, handlers::admin_list_clubs, handlers::create_club,
        handlers::update_club, handlers::delete_club, handlers::admin_list_academic_results,
        handlers::create_academic_result, handlers::update_academic_result,
        handlers::delete_academic_result
    ),
    components(
        schemas(
            models::Role, models::Section, models::Actor, models::LoginRequest,
            models::DashboardView, models::ArticleCategory, models::CategorySummary,
            models::ArticleStatus, models::Article, models::ArticleRequest,
            models::EventCategory, models::EventStatus, models::Event, models::EventRequest,
            models::ExamType, models::ExamSubject, models::ExamSchedule,
            models::ExamScheduleRequest, models::ResultStatus, models::SubjectGrade,
            models::AcademicResult, models::AcademicResultRequest, models::ClubCategory,
            models::Club, models::ClubRequest, models::OverviewStats, models::HomeFeed,
            filter::SortOrder, export::Sheet,
        )
    ),
    tags(
        (name = "campus-portal", description = "University News & Events Portal API")
    )
)]
struct ApiDoc;

/// AppState
///
/// The single shared container handed to every handler. Built once at
/// startup (or per test) and cloned cheaply per request.
#[derive(Clone)]
pub struct AppState {
    /// Content Store behind the lifecycle operations.
    pub repo: RepositoryState,
    /// The process-wide current-actor slot (shared by every client) and the
    /// credential table it checks against.
    pub session: SessionState,
    /// The loaded, immutable environment configuration.
    pub config: AppConfig,
}

impl AppState {
    /// new
    ///
    /// Wires the store and session for `config`: the university's admin
    /// accounts, plus the demo content when `seed_demo_data` is set.
    pub fn new(config: AppConfig) -> Self {
        let repo = if config.seed_demo_data {
            InMemoryRepository::with_seed(seed::demo_seed())
        } else {
            InMemoryRepository::new()
        };

        Self {
            repo: Arc::new(repo) as RepositoryState,
            session: Arc::new(Session::new(seed::university_credentials())),
            config,
        }
    }
}

// --- Axum FromRef Extractor Implementations ---

impl FromRef<AppState> for RepositoryState {
    fn from_ref(app_state: &AppState) -> RepositoryState {
        app_state.repo.clone()
    }
}

impl FromRef<AppState> for SessionState {
    fn from_ref(app_state: &AppState) -> SessionState {
        app_state.session.clone()
    }
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

/// auth_middleware
///
/// Guards the authenticated routes. Extracting `AuthUser` rejects the request
/// with 401 when nobody is signed in; otherwise it passes straight through.
async fn auth_middleware(_auth_user: AuthUser, request: Request, next: Next) -> Response {
    next.run(request).await
}

/// create_router
///
/// Assembles the routing tree, the scoped auth layer, and the request-id,
/// tracing and CORS layers around it.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    let x_request_id = HeaderName::from_static("x-request-id");

    let base_router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(public::public_routes())
        .merge(
            authenticated::authenticated_routes().route_layer(middleware::from_fn_with_state(
                state.clone(),
                auth_middleware,
            )),
        )
        .nest("/admin", admin::admin_routes())
        .with_state(state);

    // Request id is set before the trace span opens so every log line of a
    // request carries it, and propagated back on the response.
    base_router
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(trace_span_logger)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(tower_http::LatencyUnit::Millis),
                        ),
                )
                .layer(PropagateRequestIdLayer::new(x_request_id)),
        )
        .layer(cors)
}

/// trace_span_logger
///
/// Opens the per-request span with method, URI and the `x-request-id`.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = ?request.method(),
        uri = ?request.uri(),
        req_id = %request_id,
    )
}

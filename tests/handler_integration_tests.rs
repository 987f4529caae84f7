use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use campus_portal::{
    AppState,
    auth::AuthUser,
    config::AppConfig,
    error::{ApiError, AuthError, ContentError},
    filter::{FilterSpec, SortOrder},
    handlers,
    models::{
        Actor, ArticleCategory, ArticleRequest, ArticleStatus, LoginRequest, Role, Section,
    },
    seed,
};
use chrono::Utc;
use tokio::test;
use uuid::Uuid;

// --- TEST UTILITIES ---

fn create_test_state() -> AppState {
    AppState::new(AppConfig::default())
}

fn empty_state() -> AppState {
    AppState::new(AppConfig {
        seed_demo_data: false,
        ..AppConfig::default()
    })
}

fn user(role: Role) -> AuthUser {
    AuthUser {
        actor: Actor {
            id: Uuid::from_u128(900),
            name: format!("{} tester", role),
            email: "tester@university.edu".to_string(),
            role,
            department: None,
            permissions: vec![],
            avatar: String::new(),
            is_active: true,
            last_login: Utc::now(),
            created_at: Utc::now(),
        },
    }
}

fn draft_request() -> ArticleRequest {
    ArticleRequest {
        title: "Convocation Rehearsal Schedule".to_string(),
        content: "Rehearsals run through the week.".to_string(),
        excerpt: "Rehearsal times".to_string(),
        author: "Registrar".to_string(),
        category: ArticleCategory::Events,
        status: ArticleStatus::Draft,
        ..ArticleRequest::default()
    }
}

// --- PUBLIC HANDLERS ---

#[test]
async fn test_list_articles_applies_filter_pipeline() {
    let state = create_test_state();

    let Json(articles) =
        handlers::list_articles(State(state), Query(FilterSpec::with_query("robotics"))).await;

    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].id, seed::article_id(5));
}

#[test]
async fn test_list_articles_hides_drafts() {
    let state = create_test_state();
    handlers::create_article(user(Role::NewsAdmin), State(state.clone()), Json(draft_request()))
        .await
        .unwrap();

    let Json(articles) = handlers::list_articles(
        State(state.clone()),
        Query(FilterSpec::with_sort(SortOrder::Oldest)),
    )
    .await;

    assert_eq!(articles.len(), 6);
    assert!(articles.iter().all(|a| a.status == ArticleStatus::Published));
    assert_eq!(articles[0].id, seed::article_id(6));
}

#[test]
async fn test_get_article_success() {
    let state = create_test_state();

    let Json(article) = handlers::get_article(State(state), Path(seed::article_id(1)))
        .await
        .unwrap();

    assert_eq!(article.views, 1245);
    assert_eq!(article.category, ArticleCategory::Research);
}

#[test]
async fn test_get_article_draft_is_not_found() {
    let state = create_test_state();
    let (_, Json(draft)) =
        handlers::create_article(user(Role::SuperAdmin), State(state.clone()), Json(draft_request()))
            .await
            .unwrap();

    let result = handlers::get_article(State(state), Path(draft.id)).await;

    let err = result.unwrap_err();
    assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
}

#[test]
async fn test_get_related_articles() {
    let state = create_test_state();

    let Json(related) = handlers::get_related_articles(State(state), Path(seed::article_id(4)))
        .await
        .unwrap();

    assert_eq!(related.len(), 1);
    assert_eq!(related[0].id, seed::article_id(5));
}

#[test]
async fn test_get_home_feed() {
    let state = create_test_state();

    let Json(feed) = handlers::get_home(State(state)).await;

    assert_eq!(feed.popular.len(), 4);
    assert!(feed.popular.windows(2).all(|w| w[0].views >= w[1].views));
    assert_eq!(feed.featured.len(), 3);
    assert!(feed.featured.iter().all(|a| a.featured));
    assert_eq!(feed.breaking.len(), 4);
}

#[test]
async fn test_get_categories_counts_published_articles() {
    let state = create_test_state();

    let Json(categories) = handlers::get_categories(State(state)).await;

    assert_eq!(categories.len(), 6);
    let count = |c: ArticleCategory| {
        categories
            .iter()
            .find(|s| s.category == c)
            .map(|s| s.count)
            .unwrap()
    };
    assert_eq!(count(ArticleCategory::Research), 2);
    assert_eq!(count(ArticleCategory::Academics), 2);
    assert_eq!(count(ArticleCategory::Sports), 0);

    let clubs = categories
        .iter()
        .find(|s| s.category == ArticleCategory::ClubsCulture)
        .unwrap();
    assert_eq!(clubs.name, "Clubs & Culture");
    assert_eq!(clubs.owner_role, Role::ClubAdmin);
}

#[test]
async fn test_public_listings_on_empty_store() {
    let state = empty_state();

    let Json(events) = handlers::list_events(State(state.clone())).await;
    let Json(clubs) = handlers::list_clubs(State(state.clone())).await;
    let Json(exams) = handlers::list_exam_schedules(State(state)).await;

    assert!(events.is_empty());
    assert!(clubs.is_empty());
    assert!(exams.is_empty());
}

// --- SESSION HANDLERS ---

#[test]
async fn test_login_success_sets_current_actor() {
    let state = create_test_state();
    let payload = LoginRequest {
        email: "news@university.edu".to_string(),
        password: "news123".to_string(),
    };

    let Json(actor) = handlers::login(State(state.clone()), Json(payload)).await.unwrap();

    assert_eq!(actor.role, Role::NewsAdmin);
    assert_eq!(state.session.current_actor().await.map(|a| a.id), Some(actor.id));
}

#[test]
async fn test_login_wrong_password_is_unauthorized() {
    let state = create_test_state();
    let payload = LoginRequest {
        email: "admin@university.edu".to_string(),
        password: "letmein".to_string(),
    };

    let result = handlers::login(State(state.clone()), Json(payload)).await;

    let err = result.unwrap_err();
    assert!(matches!(err, ApiError::Auth(AuthError::InvalidCredentials)));
    assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
    assert!(state.session.current_actor().await.is_none());
}

#[test]
async fn test_logout_returns_no_content() {
    let state = create_test_state();
    state.session.login("admin@university.edu", "admin123").await.unwrap();

    let status = handlers::logout(State(state.clone())).await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(state.session.current_actor().await.is_none());
}

#[test]
async fn test_get_dashboard_lists_sections() {
    let Json(view) = handlers::get_dashboard(user(Role::AcademicAdmin)).await.unwrap();

    assert_eq!(
        view.sections,
        vec![Section::Overview, Section::Academics, Section::Exams]
    );
}

#[test]
async fn test_get_dashboard_without_sections_is_unauthorized() {
    let result = handlers::get_dashboard(user(Role::User)).await;

    assert!(matches!(result, Err(ApiError::Unauthorized)));
}

// --- ADMIN HANDLERS ---

#[test]
async fn test_get_overview_for_any_admin() {
    let state = create_test_state();

    let Json(stats) = handlers::get_overview(user(Role::ClubAdmin), State(state))
        .await
        .unwrap();

    assert_eq!(stats.total_clubs, 2);
}

#[test]
async fn test_get_overview_forbidden_for_editor() {
    let state = create_test_state();

    let result = handlers::get_overview(user(Role::Editor), State(state)).await;

    assert!(matches!(result, Err(ApiError::Forbidden)));
}

#[test]
async fn test_admin_list_forbidden_outside_section() {
    let state = create_test_state();

    let result = handlers::admin_list_events(user(Role::NewsAdmin), State(state)).await;

    let err = result.unwrap_err();
    assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
}

#[test]
async fn test_admin_list_articles_includes_drafts() {
    let state = create_test_state();
    handlers::create_article(user(Role::NewsAdmin), State(state.clone()), Json(draft_request()))
        .await
        .unwrap();

    let Json(articles) = handlers::admin_list_articles(user(Role::NewsAdmin), State(state))
        .await
        .unwrap();

    assert_eq!(articles.len(), 7);
    assert_eq!(articles[0].status, ArticleStatus::Draft);
}

#[test]
async fn test_create_article_returns_created() {
    let state = empty_state();

    let (status, Json(article)) =
        handlers::create_article(user(Role::NewsAdmin), State(state), Json(draft_request()))
            .await
            .unwrap();

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(article.created_by, Uuid::from_u128(900));
}

#[test]
async fn test_create_club_forbidden_for_event_admin() {
    let state = create_test_state();

    let result = handlers::create_club(
        user(Role::EventAdmin),
        State(state),
        Json(Default::default()),
    )
    .await;

    let err = result.unwrap_err();
    assert!(matches!(err, ApiError::Content(ContentError::Forbidden { .. })));
    assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
}

#[test]
async fn test_update_missing_article_is_not_found() {
    let state = create_test_state();

    let result = handlers::update_article(
        user(Role::NewsAdmin),
        State(state),
        Path(Uuid::new_v4()),
        Json(draft_request()),
    )
    .await;

    assert_eq!(result.unwrap_err().status_code(), StatusCode::NOT_FOUND);
}

#[test]
async fn test_delete_club_then_not_found() {
    let state = create_test_state();
    let id = seed::club_id(2);

    let first = handlers::delete_club(user(Role::ClubAdmin), State(state.clone()), Path(id)).await;
    let second = handlers::delete_club(user(Role::ClubAdmin), State(state), Path(id)).await;

    assert_eq!(first.unwrap(), StatusCode::NO_CONTENT);
    assert_eq!(second.unwrap_err().status_code(), StatusCode::NOT_FOUND);
}

#[test]
async fn test_invalid_payload_maps_to_unprocessable() {
    let state = create_test_state();
    let mut req = draft_request();
    req.title = "   ".to_string();

    let result = handlers::create_article(user(Role::NewsAdmin), State(state), Json(req)).await;

    let response = result.unwrap_err().into_response();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["fields"][0]["field"], "title");
    assert_eq!(body["fields"][0]["message"], "Title is required");
}

#[test]
async fn test_export_section_for_permitted_role() {
    let state = create_test_state();

    let Json(sheet) = handlers::export_section(
        user(Role::AcademicAdmin),
        State(state),
        Path(Section::Exams),
    )
    .await
    .unwrap();

    assert_eq!(sheet.name, "Exam Schedules");
    assert_eq!(sheet.rows.len(), 2);
}

#[test]
async fn test_export_section_forbidden_and_overview_not_found() {
    let state = create_test_state();

    let forbidden = handlers::export_section(
        user(Role::ClubAdmin),
        State(state.clone()),
        Path(Section::Events),
    )
    .await;
    let overview = handlers::export_section(
        user(Role::SuperAdmin),
        State(state),
        Path(Section::Overview),
    )
    .await;

    assert!(matches!(forbidden, Err(ApiError::Forbidden)));
    assert!(matches!(overview, Err(ApiError::NotFound)));
}

use axum::{
    extract::FromRequestParts,
    http::{Method, Request, StatusCode, Uri, request::Parts},
    response::IntoResponse,
};
use campus_portal::{
    AppState,
    auth::AuthUser,
    config::AppConfig,
    error::ApiError,
    models::{Role, Section},
};

// --- Helper Functions ---

fn create_app_state() -> AppState {
    AppState::new(AppConfig::default())
}

fn get_request_parts(method: Method, uri: Uri) -> Parts {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();
    let (parts, _) = request.into_parts();
    parts
}

// --- Tests ---

#[tokio::test]
async fn test_auth_rejects_when_nobody_is_signed_in() {
    let state = create_app_state();
    let mut parts = get_request_parts(Method::GET, "/me".parse().unwrap());

    let result = AuthUser::from_request_parts(&mut parts, &state).await;

    let err = result.unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));
    assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_auth_resolves_signed_in_actor() {
    let state = create_app_state();
    let signed_in = state
        .session
        .login("academic@university.edu", "academic123")
        .await
        .unwrap();
    let mut parts = get_request_parts(Method::GET, "/me".parse().unwrap());

    let user = AuthUser::from_request_parts(&mut parts, &state).await.unwrap();

    assert_eq!(user.actor.id, signed_in.id);
    assert_eq!(user.actor.role, Role::AcademicAdmin);
}

#[tokio::test]
async fn test_auth_rejects_after_logout() {
    let state = create_app_state();
    state.session.login("clubs@university.edu", "clubs123").await.unwrap();
    state.session.logout().await;
    let mut parts = get_request_parts(Method::GET, "/dashboard".parse().unwrap());

    let result = AuthUser::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::Unauthorized)));
}

#[tokio::test]
async fn test_require_gates_by_section() {
    let state = create_app_state();
    let actor = state.session.login("clubs@university.edu", "clubs123").await.unwrap();
    let user = AuthUser { actor };

    assert!(user.require(Section::Clubs).is_ok());
    assert!(user.require(Section::Overview).is_ok());

    let denied = user.require(Section::Articles).unwrap_err();
    assert!(matches!(denied, ApiError::Forbidden));
    assert_eq!(denied.into_response().status(), StatusCode::FORBIDDEN);
}

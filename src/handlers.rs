use crate::{
    AppState,
    auth::AuthUser,
    error::{ApiError, ApiResult},
    export::{self, Sheet},
    filter::{self, FilterSpec},
    models::{
        AcademicResult, AcademicResultRequest, Actor, Article, ArticleCategory, ArticleRequest,
        ArticleStatus, CategorySummary, Club, ClubRequest, DashboardView, Event, EventRequest,
        ExamSchedule, ExamScheduleRequest, HomeFeed, LoginRequest, OverviewStats, Section,
    },
    policy::{self, DashboardAccess},
    seed::BREAKING_NEWS,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;

const POPULAR_LIMIT: usize = 4;
const FEATURED_LIMIT: usize = 3;
const RELATED_LIMIT: usize = 3;

async fn published_articles(state: &AppState) -> Vec<Article> {
    state
        .repo
        .list_articles()
        .await
        .into_iter()
        .filter(|a| a.status == ArticleStatus::Published)
        .collect()
}

async fn published_article(state: &AppState, id: Uuid) -> ApiResult<Article> {
    state
        .repo
        .get_article(id)
        .await
        .filter(|a| a.status == ArticleStatus::Published)
        .ok_or(ApiError::NotFound)
}

// --- Public: News ---

/// list_articles
///
/// [Public Route] Published articles run through the query/filter pipeline:
/// text query, category slug, then sort order.
#[utoipa::path(
    get,
    path = "/articles",
    params(FilterSpec),
    responses((status = 200, description = "Filtered articles", body = [Article]))
)]
pub async fn list_articles(
    State(state): State<AppState>,
    Query(spec): Query<FilterSpec>,
) -> Json<Vec<Article>> {
    let articles = published_articles(&state).await;
    Json(filter::filter(&articles, &spec))
}

/// get_article
///
/// [Public Route] A single published article. Drafts and archived articles
/// are reported as not found.
#[utoipa::path(
    get,
    path = "/articles/{id}",
    params(("id" = Uuid, Path, description = "Article ID")),
    responses(
        (status = 200, description = "Found", body = Article),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Article>> {
    published_article(&state, id).await.map(Json)
}

#[utoipa::path(
    get,
    path = "/articles/{id}/related",
    params(("id" = Uuid, Path, description = "Article ID")),
    responses(
        (status = 200, description = "Up to three articles from the same category", body = [Article]),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_related_articles(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Vec<Article>>> {
    let article = published_article(&state, id).await?;
    let articles = published_articles(&state).await;
    Ok(Json(filter::related(&articles, &article, RELATED_LIMIT)))
}

/// get_home
///
/// [Public Route] The landing page feed.
#[utoipa::path(
    get,
    path = "/home",
    responses((status = 200, description = "Home feed", body = HomeFeed))
)]
pub async fn get_home(State(state): State<AppState>) -> Json<HomeFeed> {
    let articles = published_articles(&state).await;

    Json(HomeFeed {
        popular: filter::popular(&articles, POPULAR_LIMIT),
        featured: filter::featured(&articles, FEATURED_LIMIT),
        breaking: BREAKING_NEWS.iter().map(|s| s.to_string()).collect(),
    })
}

/// get_categories
///
/// [Public Route] Every news category with its display metadata and the
/// number of published articles in it.
#[utoipa::path(
    get,
    path = "/categories",
    responses((status = 200, description = "Categories", body = [CategorySummary]))
)]
pub async fn get_categories(State(state): State<AppState>) -> Json<Vec<CategorySummary>> {
    let articles = published_articles(&state).await;

    let summaries = ArticleCategory::ALL
        .into_iter()
        .map(|category| CategorySummary {
            category,
            name: category.name().to_string(),
            color: category.color().to_string(),
            description: category.description().to_string(),
            owner_role: category.owner_role(),
            count: articles.iter().filter(|a| a.category == category).count(),
        })
        .collect();

    Json(summaries)
}

// --- Public: Campus Listings ---

#[utoipa::path(
    get,
    path = "/events",
    responses((status = 200, description = "Events", body = [Event]))
)]
pub async fn list_events(State(state): State<AppState>) -> Json<Vec<Event>> {
    Json(state.repo.list_events().await)
}

#[utoipa::path(
    get,
    path = "/clubs",
    responses((status = 200, description = "Clubs", body = [Club]))
)]
pub async fn list_clubs(State(state): State<AppState>) -> Json<Vec<Club>> {
    Json(state.repo.list_clubs().await)
}

#[utoipa::path(
    get,
    path = "/exam-schedules",
    responses((status = 200, description = "Exam schedules", body = [ExamSchedule]))
)]
pub async fn list_exam_schedules(State(state): State<AppState>) -> Json<Vec<ExamSchedule>> {
    Json(state.repo.list_exam_schedules().await)
}

// --- Session ---

/// login
///
/// [Public Route] Signs in against the fixed credential table. On success the
/// actor becomes the session's current actor.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in", body = Actor),
        (status = 401, description = "Invalid credentials or disabled account")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<Json<Actor>> {
    let actor = state.session.login(&payload.email, &payload.password).await?;
    Ok(Json(actor))
}

/// logout
///
/// [Authenticated Route] Clears the current actor.
#[utoipa::path(
    post,
    path = "/logout",
    responses((status = 204, description = "Signed out"))
)]
pub async fn logout(State(state): State<AppState>) -> StatusCode {
    state.session.logout().await;
    StatusCode::NO_CONTENT
}

#[utoipa::path(
    get,
    path = "/me",
    responses(
        (status = 200, description = "Current actor", body = Actor),
        (status = 401, description = "Not signed in")
    )
)]
pub async fn get_me(AuthUser { actor }: AuthUser) -> Json<Actor> {
    Json(actor)
}

/// get_dashboard
///
/// [Authenticated Route] The dashboard sections the current actor may open,
/// recomputed from the role on every request. A role without any section
/// is sent back to the login entry point (401).
#[utoipa::path(
    get,
    path = "/dashboard",
    responses(
        (status = 200, description = "Visible sections", body = DashboardView),
        (status = 401, description = "Not signed in, or no dashboard for this role")
    )
)]
pub async fn get_dashboard(AuthUser { actor }: AuthUser) -> ApiResult<Json<DashboardView>> {
    match policy::dashboard_access(Some(&actor)) {
        DashboardAccess::Granted(sections) => Ok(Json(DashboardView { actor, sections })),
        DashboardAccess::RedirectToLogin => Err(ApiError::Unauthorized),
    }
}

// --- Admin: Overview & Export ---

#[utoipa::path(
    get,
    path = "/admin/overview",
    responses(
        (status = 200, description = "Dashboard statistics", body = OverviewStats),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn get_overview(
    user: AuthUser,
    State(state): State<AppState>,
) -> ApiResult<Json<OverviewStats>> {
    user.require(Section::Overview)?;
    Ok(Json(state.repo.get_stats().await))
}

/// export_section
///
/// [Admin Route] Spreadsheet rows for one dashboard section. The overview
/// section has nothing to export.
#[utoipa::path(
    get,
    path = "/admin/export/{section}",
    params(("section" = Section, Path, description = "Dashboard section")),
    responses(
        (status = 200, description = "Export sheet", body = Sheet),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Nothing to export")
    )
)]
pub async fn export_section(
    user: AuthUser,
    State(state): State<AppState>,
    Path(section): Path<Section>,
) -> ApiResult<Json<Sheet>> {
    user.require(section)?;

    let sheet = match section {
        Section::Events => export::events_sheet(&state.repo.list_events().await),
        Section::Articles => export::articles_sheet(&state.repo.list_articles().await),
        Section::Exams => export::exam_schedules_sheet(&state.repo.list_exam_schedules().await),
        Section::Clubs => export::clubs_sheet(&state.repo.list_clubs().await),
        Section::Academics => {
            export::academic_results_sheet(&state.repo.list_academic_results().await)
        }
        Section::Overview => return Err(ApiError::NotFound),
    };

    Ok(Json(sheet))
}

// --- Admin: Articles ---

/// admin_list_articles
///
/// [Admin Route] Every article regardless of status, in storage order.
#[utoipa::path(
    get,
    path = "/admin/articles",
    responses((status = 200, description = "All articles", body = [Article]))
)]
pub async fn admin_list_articles(
    user: AuthUser,
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<Article>>> {
    user.require(Section::Articles)?;
    Ok(Json(state.repo.list_articles().await))
}

#[utoipa::path(
    post,
    path = "/admin/articles",
    request_body = ArticleRequest,
    responses(
        (status = 201, description = "Created", body = Article),
        (status = 403, description = "Forbidden"),
        (status = 409, description = "Id already in use"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn create_article(
    AuthUser { actor }: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<ArticleRequest>,
) -> ApiResult<(StatusCode, Json<Article>)> {
    let article = state.repo.create_article(&actor, payload).await?;
    Ok((StatusCode::CREATED, Json(article)))
}

#[utoipa::path(
    put,
    path = "/admin/articles/{id}",
    params(("id" = Uuid, Path, description = "Article ID")),
    request_body = ArticleRequest,
    responses(
        (status = 200, description = "Updated", body = Article),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn update_article(
    AuthUser { actor }: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ArticleRequest>,
) -> ApiResult<Json<Article>> {
    let article = state.repo.update_article(&actor, id, payload).await?;
    Ok(Json(article))
}

#[utoipa::path(
    delete,
    path = "/admin/articles/{id}",
    params(("id" = Uuid, Path, description = "Article ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_article(
    AuthUser { actor }: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state.repo.delete_article(&actor, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// --- Admin: Events ---

#[utoipa::path(
    get,
    path = "/admin/events",
    responses((status = 200, description = "All events", body = [Event]))
)]
pub async fn admin_list_events(
    user: AuthUser,
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<Event>>> {
    user.require(Section::Events)?;
    Ok(Json(state.repo.list_events().await))
}

#[utoipa::path(
    post,
    path = "/admin/events",
    request_body = EventRequest,
    responses(
        (status = 201, description = "Created", body = Event),
        (status = 403, description = "Forbidden"),
        (status = 409, description = "Id already in use"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn create_event(
    AuthUser { actor }: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<EventRequest>,
) -> ApiResult<(StatusCode, Json<Event>)> {
    let event = state.repo.create_event(&actor, payload).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

#[utoipa::path(
    put,
    path = "/admin/events/{id}",
    params(("id" = Uuid, Path, description = "Event ID")),
    request_body = EventRequest,
    responses(
        (status = 200, description = "Updated", body = Event),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn update_event(
    AuthUser { actor }: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<EventRequest>,
) -> ApiResult<Json<Event>> {
    let event = state.repo.update_event(&actor, id, payload).await?;
    Ok(Json(event))
}

#[utoipa::path(
    delete,
    path = "/admin/events/{id}",
    params(("id" = Uuid, Path, description = "Event ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_event(
    AuthUser { actor }: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state.repo.delete_event(&actor, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// --- Admin: Exam Schedules ---

#[utoipa::path(
    get,
    path = "/admin/exam-schedules",
    responses((status = 200, description = "All exam schedules", body = [ExamSchedule]))
)]
pub async fn admin_list_exam_schedules(
    user: AuthUser,
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ExamSchedule>>> {
    user.require(Section::Exams)?;
    Ok(Json(state.repo.list_exam_schedules().await))
}

#[utoipa::path(
    post,
    path = "/admin/exam-schedules",
    request_body = ExamScheduleRequest,
    responses(
        (status = 201, description = "Created", body = ExamSchedule),
        (status = 403, description = "Forbidden"),
        (status = 409, description = "Id already in use"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn create_exam_schedule(
    AuthUser { actor }: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<ExamScheduleRequest>,
) -> ApiResult<(StatusCode, Json<ExamSchedule>)> {
    let schedule = state.repo.create_exam_schedule(&actor, payload).await?;
    Ok((StatusCode::CREATED, Json(schedule)))
}

#[utoipa::path(
    put,
    path = "/admin/exam-schedules/{id}",
    params(("id" = Uuid, Path, description = "Exam schedule ID")),
    request_body = ExamScheduleRequest,
    responses(
        (status = 200, description = "Updated", body = ExamSchedule),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn update_exam_schedule(
    AuthUser { actor }: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ExamScheduleRequest>,
) -> ApiResult<Json<ExamSchedule>> {
    let schedule = state.repo.update_exam_schedule(&actor, id, payload).await?;
    Ok(Json(schedule))
}

#[utoipa::path(
    delete,
    path = "/admin/exam-schedules/{id}",
    params(("id" = Uuid, Path, description = "Exam schedule ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_exam_schedule(
    AuthUser { actor }: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state.repo.delete_exam_schedule(&actor, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// --- Admin: Clubs ---

#[utoipa::path(
    get,
    path = "/admin/clubs",
    responses((status = 200, description = "All clubs", body = [Club]))
)]
pub async fn admin_list_clubs(
    user: AuthUser,
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<Club>>> {
    user.require(Section::Clubs)?;
    Ok(Json(state.repo.list_clubs().await))
}

#[utoipa::path(
    post,
    path = "/admin/clubs",
    request_body = ClubRequest,
    responses(
        (status = 201, description = "Created", body = Club),
        (status = 403, description = "Forbidden"),
        (status = 409, description = "Id already in use"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn create_club(
    AuthUser { actor }: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<ClubRequest>,
) -> ApiResult<(StatusCode, Json<Club>)> {
    let club = state.repo.create_club(&actor, payload).await?;
    Ok((StatusCode::CREATED, Json(club)))
}

#[utoipa::path(
    put,
    path = "/admin/clubs/{id}",
    params(("id" = Uuid, Path, description = "Club ID")),
    request_body = ClubRequest,
    responses(
        (status = 200, description = "Updated", body = Club),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn update_club(
    AuthUser { actor }: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ClubRequest>,
) -> ApiResult<Json<Club>> {
    let club = state.repo.update_club(&actor, id, payload).await?;
    Ok(Json(club))
}

#[utoipa::path(
    delete,
    path = "/admin/clubs/{id}",
    params(("id" = Uuid, Path, description = "Club ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_club(
    AuthUser { actor }: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state.repo.delete_club(&actor, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// --- Admin: Academic Results ---

#[utoipa::path(
    get,
    path = "/admin/academic-results",
    responses((status = 200, description = "All academic results", body = [AcademicResult]))
)]
pub async fn admin_list_academic_results(
    user: AuthUser,
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<AcademicResult>>> {
    user.require(Section::Academics)?;
    Ok(Json(state.repo.list_academic_results().await))
}

#[utoipa::path(
    post,
    path = "/admin/academic-results",
    request_body = AcademicResultRequest,
    responses(
        (status = 201, description = "Created", body = AcademicResult),
        (status = 403, description = "Forbidden"),
        (status = 409, description = "Id already in use"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn create_academic_result(
    AuthUser { actor }: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<AcademicResultRequest>,
) -> ApiResult<(StatusCode, Json<AcademicResult>)> {
    let result = state.repo.create_academic_result(&actor, payload).await?;
    Ok((StatusCode::CREATED, Json(result)))
}

#[utoipa::path(
    put,
    path = "/admin/academic-results/{id}",
    params(("id" = Uuid, Path, description = "Academic result ID")),
    request_body = AcademicResultRequest,
    responses(
        (status = 200, description = "Updated", body = AcademicResult),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn update_academic_result(
    AuthUser { actor }: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AcademicResultRequest>,
) -> ApiResult<Json<AcademicResult>> {
    let result = state.repo.update_academic_result(&actor, id, payload).await?;
    Ok(Json(result))
}

#[utoipa::path(
    delete,
    path = "/admin/academic-results/{id}",
    params(("id" = Uuid, Path, description = "Academic result ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_academic_result(
    AuthUser { actor }: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state.repo.delete_academic_result(&actor, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

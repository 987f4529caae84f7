use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;

// --- Identity & Access ---

/// Role
///
/// The closed set of portal roles. The wire form is kebab-case (`super-admin`,
/// `news-admin`, ...) to match what the dashboard UI sends and displays.
/// Which dashboard sections a role may open is defined in `policy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum Role {
    SuperAdmin,
    AcademicAdmin,
    EventAdmin,
    ClubAdmin,
    NewsAdmin,
    Editor,
    User,
}

impl Role {
    pub const ALL: [Role; 7] = [
        Role::SuperAdmin,
        Role::AcademicAdmin,
        Role::EventAdmin,
        Role::ClubAdmin,
        Role::NewsAdmin,
        Role::Editor,
        Role::User,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super-admin",
            Role::AcademicAdmin => "academic-admin",
            Role::EventAdmin => "event-admin",
            Role::ClubAdmin => "club-admin",
            Role::NewsAdmin => "news-admin",
            Role::Editor => "editor",
            Role::User => "user",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Section
///
/// A named admin-dashboard area. Every dashboard affordance (tab, list, form,
/// export button) belongs to exactly one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Section {
    Overview,
    Events,
    Articles,
    Academics,
    Exams,
    Clubs,
}

impl Section {
    /// Dashboard tab order.
    pub const ALL: [Section; 6] = [
        Section::Overview,
        Section::Events,
        Section::Articles,
        Section::Academics,
        Section::Exams,
        Section::Clubs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Overview => "overview",
            Section::Events => "events",
            Section::Articles => "articles",
            Section::Academics => "academics",
            Section::Exams => "exams",
            Section::Clubs => "clubs",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Actor
///
/// The authenticated identity making a request. Resolved from the fixed
/// credential table at login and cleared at logout; only `last_login`
/// changes while a session is open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct Actor {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department: Option<String>,
    // Free-form permission tags shown on the profile page. Access decisions
    // never read these; they go through `policy::can_access`.
    pub permissions: Vec<String>,
    pub avatar: String,
    pub is_active: bool,
    #[ts(type = "string")]
    pub last_login: DateTime<Utc>,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
}

/// LoginRequest
///
/// Input payload for `POST /login`. The password is compared in plaintext and
/// is never logged.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// DashboardView
///
/// Output of `GET /dashboard`: the sections the current actor may open,
/// recomputed from the role on every request.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct DashboardView {
    pub actor: Actor,
    pub sections: Vec<Section>,
}

// --- Categories ---

/// ArticleCategory
///
/// The closed set of news categories. The serialized form is the URL slug
/// used by the news list (`/news?category=clubs-culture`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum ArticleCategory {
    #[default]
    Academics,
    Research,
    Events,
    Placements,
    ClubsCulture,
    Sports,
}

impl ArticleCategory {
    pub const ALL: [ArticleCategory; 6] = [
        ArticleCategory::Academics,
        ArticleCategory::Research,
        ArticleCategory::Events,
        ArticleCategory::Placements,
        ArticleCategory::ClubsCulture,
        ArticleCategory::Sports,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            ArticleCategory::Academics => "academics",
            ArticleCategory::Research => "research",
            ArticleCategory::Events => "events",
            ArticleCategory::Placements => "placements",
            ArticleCategory::ClubsCulture => "clubs-culture",
            ArticleCategory::Sports => "sports",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ArticleCategory::Academics => "Academics",
            ArticleCategory::Research => "Research",
            ArticleCategory::Events => "Events",
            ArticleCategory::Placements => "Placements",
            ArticleCategory::ClubsCulture => "Clubs & Culture",
            ArticleCategory::Sports => "Sports",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ArticleCategory::Academics => "#3B82F6",
            ArticleCategory::Research => "#10B981",
            ArticleCategory::Events => "#F59E0B",
            ArticleCategory::Placements => "#8B5CF6",
            ArticleCategory::ClubsCulture => "#EF4444",
            ArticleCategory::Sports => "#06B6D4",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ArticleCategory::Academics => "Academic news and updates",
            ArticleCategory::Research => "Research achievements and publications",
            ArticleCategory::Events => "University events and activities",
            ArticleCategory::Placements => "Placement drives and opportunities",
            ArticleCategory::ClubsCulture => "Club activities and cultural events",
            ArticleCategory::Sports => "Sports events and achievements",
        }
    }

    /// The role that curates this category.
    pub fn owner_role(&self) -> Role {
        match self {
            ArticleCategory::Academics | ArticleCategory::Research => Role::AcademicAdmin,
            ArticleCategory::Events | ArticleCategory::Sports => Role::EventAdmin,
            ArticleCategory::Placements => Role::SuperAdmin,
            ArticleCategory::ClubsCulture => Role::ClubAdmin,
        }
    }

    /// Resolves a URL slug. Unknown slugs resolve to `None`.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }
}

/// CategorySummary
///
/// Output schema for `GET /categories`. `count` is the number of published
/// articles currently in the category.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct CategorySummary {
    pub category: ArticleCategory,
    pub name: String,
    pub color: String,
    pub description: String,
    pub owner_role: Role,
    pub count: usize,
}

// --- Articles ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ArticleStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl ArticleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Draft => "draft",
            ArticleStatus::Published => "published",
            ArticleStatus::Archived => "archived",
        }
    }
}

/// Article
///
/// A news article. `read_time` (minutes) is derived from the content word
/// count whenever the article is saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct Article {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub author: String,
    pub category: ArticleCategory,
    pub tags: Vec<String>,
    #[ts(type = "string")]
    pub publish_date: DateTime<Utc>,
    pub views: u64,
    pub featured: bool,
    pub image: String,
    pub read_time: u32,
    pub status: ArticleStatus,
    pub created_by: Uuid,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

/// ArticleRequest
///
/// Full-record payload for creating or replacing an article. `id` is only
/// honoured on create; `publish_date` defaults to the save time on create and
/// to the stored value on update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct ArticleRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub author: String,
    pub category: ArticleCategory,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(type = "string | null")]
    pub publish_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub status: ArticleStatus,
}

// --- Events ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum EventCategory {
    #[default]
    Academic,
    Cultural,
    Sports,
    Technical,
    Workshop,
    Seminar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum EventStatus {
    #[default]
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "upcoming",
            EventStatus::Ongoing => "ongoing",
            EventStatus::Completed => "completed",
            EventStatus::Cancelled => "cancelled",
        }
    }
}

/// Event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: EventCategory,
    #[ts(type = "string")]
    pub start_date: DateTime<Utc>,
    #[ts(type = "string")]
    pub end_date: DateTime<Utc>,
    #[ts(type = "string")]
    pub registration_deadline: DateTime<Utc>,
    pub venue: String,
    pub max_participants: u32,
    pub registration_fee: u32,
    pub organizer: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub image: String,
    pub requirements: Vec<String>,
    pub prizes: Vec<String>,
    pub status: EventStatus,
    pub registration_open: bool,
    pub created_by: Uuid,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

/// EventRequest
///
/// Full-record payload for creating or replacing an event.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct EventRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub category: EventCategory,
    #[ts(type = "string")]
    pub start_date: DateTime<Utc>,
    #[ts(type = "string")]
    pub end_date: DateTime<Utc>,
    #[ts(type = "string")]
    pub registration_deadline: DateTime<Utc>,
    pub venue: String,
    pub max_participants: u32,
    #[serde(default)]
    pub registration_fee: u32,
    pub organizer: String,
    pub contact_email: String,
    pub contact_phone: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub prizes: Vec<String>,
    #[serde(default)]
    pub status: EventStatus,
    #[serde(default)]
    pub registration_open: bool,
}

// --- Exam Schedules & Results ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum ExamType {
    MidTerm,
    #[default]
    Final,
    Supplementary,
    Improvement,
}

impl ExamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExamType::MidTerm => "mid-term",
            ExamType::Final => "final",
            ExamType::Supplementary => "supplementary",
            ExamType::Improvement => "improvement",
        }
    }
}

/// ExamSubject
///
/// One sitting within an exam schedule. Date, time and duration are kept as
/// the free text the academic office publishes ("09:00 AM", "3 hours").
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct ExamSubject {
    pub subject_code: String,
    pub subject_name: String,
    pub date: String,
    pub time: String,
    pub duration: String,
    pub venue: String,
}

/// ExamSchedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct ExamSchedule {
    pub id: Uuid,
    pub exam_type: ExamType,
    pub department: String,
    pub semester: String,
    pub year: String,
    pub subjects: Vec<ExamSubject>,
    pub instructions: Vec<String>,
    #[ts(type = "string")]
    pub publish_date: DateTime<Utc>,
    pub created_by: Uuid,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct ExamScheduleRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub exam_type: ExamType,
    pub department: String,
    pub semester: String,
    pub year: String,
    #[serde(default)]
    pub subjects: Vec<ExamSubject>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(type = "string | null")]
    pub publish_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ResultStatus {
    Pass,
    Fail,
    #[default]
    Pending,
}

impl ResultStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultStatus::Pass => "pass",
            ResultStatus::Fail => "fail",
            ResultStatus::Pending => "pending",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct SubjectGrade {
    pub subject_code: String,
    pub subject_name: String,
    pub credits: u32,
    pub grade: String,
    pub marks: u32,
    pub max_marks: u32,
}

/// AcademicResult
///
/// A published semester result for one student. Managed from the
/// `academics` dashboard section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct AcademicResult {
    pub id: Uuid,
    pub student_id: String,
    pub student_name: String,
    pub department: String,
    pub semester: String,
    pub year: String,
    pub exam_type: ExamType,
    pub subjects: Vec<SubjectGrade>,
    pub cgpa: f32,
    pub sgpa: f32,
    pub status: ResultStatus,
    #[ts(type = "string")]
    pub publish_date: DateTime<Utc>,
    pub created_by: Uuid,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct AcademicResultRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub student_id: String,
    pub student_name: String,
    pub department: String,
    pub semester: String,
    pub year: String,
    #[serde(default)]
    pub exam_type: ExamType,
    #[serde(default)]
    pub subjects: Vec<SubjectGrade>,
    pub cgpa: f32,
    pub sgpa: f32,
    #[serde(default)]
    pub status: ResultStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(type = "string | null")]
    pub publish_date: Option<DateTime<Utc>>,
}

// --- Clubs ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ClubCategory {
    #[default]
    Technical,
    Cultural,
    Sports,
    Social,
    Academic,
}

impl ClubCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClubCategory::Technical => "technical",
            ClubCategory::Cultural => "cultural",
            ClubCategory::Sports => "sports",
            ClubCategory::Social => "social",
            ClubCategory::Academic => "academic",
        }
    }
}

/// Club
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct Club {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub category: ClubCategory,
    pub faculty: String,
    pub president: String,
    pub vice_president: String,
    pub secretary: String,
    pub contact_email: String,
    pub meeting_schedule: String,
    pub membership_fee: u32,
    pub max_members: u32,
    pub current_members: u32,
    pub image: String,
    pub achievements: Vec<String>,
    pub upcoming_events: Vec<String>,
    pub registration_open: bool,
    pub created_by: Uuid,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct ClubRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub category: ClubCategory,
    pub faculty: String,
    #[serde(default)]
    pub president: String,
    #[serde(default)]
    pub vice_president: String,
    #[serde(default)]
    pub secretary: String,
    pub contact_email: String,
    #[serde(default)]
    pub meeting_schedule: String,
    #[serde(default)]
    pub membership_fee: u32,
    pub max_members: u32,
    #[serde(default)]
    pub current_members: u32,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub upcoming_events: Vec<String>,
    #[serde(default)]
    pub registration_open: bool,
}

// --- Dashboard & Listing Schemas (Output) ---

/// OverviewStats
///
/// Output schema for the `overview` dashboard section (GET /admin/overview).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct OverviewStats {
    pub total_articles: usize,
    pub published_articles: usize,
    pub total_article_views: u64,
    pub total_events: usize,
    pub upcoming_events: usize,
    pub total_exam_schedules: usize,
    pub total_clubs: usize,
    pub total_academic_results: usize,
}

/// HomeFeed
///
/// Output schema for the landing page (GET /home): the most viewed articles,
/// the editors' picks and the breaking-news ticker.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct HomeFeed {
    pub popular: Vec<Article>,
    pub featured: Vec<Article>,
    pub breaking: Vec<String>,
}

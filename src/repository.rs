use crate::content::{Collection, ContentRecord};
use crate::error::{ContentError, ContentResult};
use crate::models::{
    AcademicResult, AcademicResultRequest, Actor, Article, ArticleRequest, ArticleStatus, Club,
    ClubRequest, Event, EventRequest, EventStatus, ExamSchedule, ExamScheduleRequest,
    OverviewStats,
};
use crate::policy;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

/// Repository Trait
///
/// The contract of the Content Store and its lifecycle operations. Handlers
/// only see this trait, so tests and alternative stores can slot in behind
/// `Arc<dyn Repository>`.
///
/// Every mutation takes the acting `Actor` and re-checks the access policy for
/// the record's section before touching the store; hiding a button in the UI
/// is not the enforcement point.
#[async_trait]
pub trait Repository: Send + Sync {
    // --- Articles ---
    async fn list_articles(&self) -> Vec<Article>;
    async fn get_article(&self, id: Uuid) -> Option<Article>;
    async fn create_article(&self, actor: &Actor, req: ArticleRequest) -> ContentResult<Article>;
    async fn update_article(&self, actor: &Actor, id: Uuid, req: ArticleRequest) -> ContentResult<Article>;
    async fn delete_article(&self, actor: &Actor, id: Uuid) -> ContentResult<()>;

    // --- Events ---
    async fn list_events(&self) -> Vec<Event>;
    async fn get_event(&self, id: Uuid) -> Option<Event>;
    async fn create_event(&self, actor: &Actor, req: EventRequest) -> ContentResult<Event>;
    async fn update_event(&self, actor: &Actor, id: Uuid, req: EventRequest) -> ContentResult<Event>;
    async fn delete_event(&self, actor: &Actor, id: Uuid) -> ContentResult<()>;

    // --- Exam Schedules ---
    async fn list_exam_schedules(&self) -> Vec<ExamSchedule>;
    async fn get_exam_schedule(&self, id: Uuid) -> Option<ExamSchedule>;
    async fn create_exam_schedule(&self, actor: &Actor, req: ExamScheduleRequest) -> ContentResult<ExamSchedule>;
    async fn update_exam_schedule(
        &self,
        actor: &Actor,
        id: Uuid,
        req: ExamScheduleRequest,
    ) -> ContentResult<ExamSchedule>;
    async fn delete_exam_schedule(&self, actor: &Actor, id: Uuid) -> ContentResult<()>;

    // --- Clubs ---
    async fn list_clubs(&self) -> Vec<Club>;
    async fn get_club(&self, id: Uuid) -> Option<Club>;
    async fn create_club(&self, actor: &Actor, req: ClubRequest) -> ContentResult<Club>;
    async fn update_club(&self, actor: &Actor, id: Uuid, req: ClubRequest) -> ContentResult<Club>;
    async fn delete_club(&self, actor: &Actor, id: Uuid) -> ContentResult<()>;

    // --- Academic Results ---
    async fn list_academic_results(&self) -> Vec<AcademicResult>;
    async fn get_academic_result(&self, id: Uuid) -> Option<AcademicResult>;
    async fn create_academic_result(
        &self,
        actor: &Actor,
        req: AcademicResultRequest,
    ) -> ContentResult<AcademicResult>;
    async fn update_academic_result(
        &self,
        actor: &Actor,
        id: Uuid,
        req: AcademicResultRequest,
    ) -> ContentResult<AcademicResult>;
    async fn delete_academic_result(&self, actor: &Actor, id: Uuid) -> ContentResult<()>;

    // --- Dashboard ---
    async fn get_stats(&self) -> OverviewStats;
}

/// RepositoryState
///
/// The concrete type used to share the store across the application state.
pub type RepositoryState = Arc<dyn Repository>;

/// SeedData
///
/// Initial contents for an `InMemoryRepository`, each list in display order
/// (most recent first).
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub articles: Vec<Article>,
    pub events: Vec<Event>,
    pub exam_schedules: Vec<ExamSchedule>,
    pub clubs: Vec<Club>,
    pub academic_results: Vec<AcademicResult>,
}

/// InMemoryRepository
///
/// The Content Store: one ordered collection per content variant, each behind
/// its own lock. Writes are last-write-wins; there is a single logical
/// mutator at a time.
#[derive(Default)]
pub struct InMemoryRepository {
    articles: RwLock<Collection<Article>>,
    events: RwLock<Collection<Event>>,
    exam_schedules: RwLock<Collection<ExamSchedule>>,
    clubs: RwLock<Collection<Club>>,
    academic_results: RwLock<Collection<AcademicResult>>,
}

impl InMemoryRepository {
    /// new
    ///
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// with_seed
    ///
    /// A store pre-populated with `seed`. Seeded records bypass validation and
    /// policy; they are the portal's resident data.
    pub fn with_seed(seed: SeedData) -> Self {
        Self {
            articles: RwLock::new(Collection::new(seed.articles)),
            events: RwLock::new(Collection::new(seed.events)),
            exam_schedules: RwLock::new(Collection::new(seed.exam_schedules)),
            clubs: RwLock::new(Collection::new(seed.clubs)),
            academic_results: RwLock::new(Collection::new(seed.academic_results)),
        }
    }
}

// --- Generic lifecycle helpers shared by every content variant ---

fn authorize<T: ContentRecord>(actor: &Actor) -> ContentResult<()> {
    let section = T::KIND.section();
    if policy::can_access(actor.role, section) {
        Ok(())
    } else {
        warn!(
            actor_id = %actor.id,
            role = %actor.role,
            section = %section,
            "content mutation denied by policy"
        );
        Err(ContentError::Forbidden {
            role: actor.role,
            section,
        })
    }
}

async fn list<T: ContentRecord>(slot: &RwLock<Collection<T>>) -> Vec<T> {
    slot.read().await.records().to_vec()
}

async fn get<T: ContentRecord>(slot: &RwLock<Collection<T>>, id: Uuid) -> Option<T> {
    slot.read().await.get(id).cloned()
}

async fn create<T: ContentRecord>(
    slot: &RwLock<Collection<T>>,
    actor: &Actor,
    req: T::Request,
) -> ContentResult<T> {
    authorize::<T>(actor)?;
    let record = slot.write().await.insert(req, actor.id, Utc::now())?;
    info!(kind = %T::KIND, id = %record.id(), actor_id = %actor.id, "content created");
    Ok(record)
}

async fn update<T: ContentRecord>(
    slot: &RwLock<Collection<T>>,
    actor: &Actor,
    id: Uuid,
    req: T::Request,
) -> ContentResult<T> {
    authorize::<T>(actor)?;
    let record = slot.write().await.replace(id, req, Utc::now())?;
    info!(kind = %T::KIND, id = %id, actor_id = %actor.id, "content updated");
    Ok(record)
}

async fn delete<T: ContentRecord>(
    slot: &RwLock<Collection<T>>,
    actor: &Actor,
    id: Uuid,
) -> ContentResult<()> {
    authorize::<T>(actor)?;
    slot.write().await.remove(id)?;
    info!(kind = %T::KIND, id = %id, actor_id = %actor.id, "content deleted");
    Ok(())
}

#[async_trait]
impl Repository for InMemoryRepository {
    // --- ARTICLES ---

    async fn list_articles(&self) -> Vec<Article> {
        list(&self.articles).await
    }

    async fn get_article(&self, id: Uuid) -> Option<Article> {
        get(&self.articles, id).await
    }

    async fn create_article(&self, actor: &Actor, req: ArticleRequest) -> ContentResult<Article> {
        create(&self.articles, actor, req).await
    }

    async fn update_article(&self, actor: &Actor, id: Uuid, req: ArticleRequest) -> ContentResult<Article> {
        update(&self.articles, actor, id, req).await
    }

    async fn delete_article(&self, actor: &Actor, id: Uuid) -> ContentResult<()> {
        delete(&self.articles, actor, id).await
    }

    // --- EVENTS ---

    async fn list_events(&self) -> Vec<Event> {
        list(&self.events).await
    }

    async fn get_event(&self, id: Uuid) -> Option<Event> {
        get(&self.events, id).await
    }

    async fn create_event(&self, actor: &Actor, req: EventRequest) -> ContentResult<Event> {
        create(&self.events, actor, req).await
    }

    async fn update_event(&self, actor: &Actor, id: Uuid, req: EventRequest) -> ContentResult<Event> {
        update(&self.events, actor, id, req).await
    }

    async fn delete_event(&self, actor: &Actor, id: Uuid) -> ContentResult<()> {
        delete(&self.events, actor, id).await
    }

    // --- EXAM SCHEDULES ---

    async fn list_exam_schedules(&self) -> Vec<ExamSchedule> {
        list(&self.exam_schedules).await
    }

    async fn get_exam_schedule(&self, id: Uuid) -> Option<ExamSchedule> {
        get(&self.exam_schedules, id).await
    }

    async fn create_exam_schedule(&self, actor: &Actor, req: ExamScheduleRequest) -> ContentResult<ExamSchedule> {
        create(&self.exam_schedules, actor, req).await
    }

    async fn update_exam_schedule(
        &self,
        actor: &Actor,
        id: Uuid,
        req: ExamScheduleRequest,
    ) -> ContentResult<ExamSchedule> {
        update(&self.exam_schedules, actor, id, req).await
    }

    async fn delete_exam_schedule(&self, actor: &Actor, id: Uuid) -> ContentResult<()> {
        delete(&self.exam_schedules, actor, id).await
    }

    // --- CLUBS ---

    async fn list_clubs(&self) -> Vec<Club> {
        list(&self.clubs).await
    }

    async fn get_club(&self, id: Uuid) -> Option<Club> {
        get(&self.clubs, id).await
    }

    async fn create_club(&self, actor: &Actor, req: ClubRequest) -> ContentResult<Club> {
        create(&self.clubs, actor, req).await
    }

    async fn update_club(&self, actor: &Actor, id: Uuid, req: ClubRequest) -> ContentResult<Club> {
        update(&self.clubs, actor, id, req).await
    }

    async fn delete_club(&self, actor: &Actor, id: Uuid) -> ContentResult<()> {
        delete(&self.clubs, actor, id).await
    }

    // --- ACADEMIC RESULTS ---

    async fn list_academic_results(&self) -> Vec<AcademicResult> {
        list(&self.academic_results).await
    }

    async fn get_academic_result(&self, id: Uuid) -> Option<AcademicResult> {
        get(&self.academic_results, id).await
    }

    async fn create_academic_result(
        &self,
        actor: &Actor,
        req: AcademicResultRequest,
    ) -> ContentResult<AcademicResult> {
        create(&self.academic_results, actor, req).await
    }

    async fn update_academic_result(
        &self,
        actor: &Actor,
        id: Uuid,
        req: AcademicResultRequest,
    ) -> ContentResult<AcademicResult> {
        update(&self.academic_results, actor, id, req).await
    }

    async fn delete_academic_result(&self, actor: &Actor, id: Uuid) -> ContentResult<()> {
        delete(&self.academic_results, actor, id).await
    }

    // --- DASHBOARD ---

    /// get_stats
    ///
    /// Counts for the overview section. Each collection is read under its own
    /// lock, so the numbers are per-collection consistent only. The view total
    /// saturates at `u64::MAX`.
    async fn get_stats(&self) -> OverviewStats {
        let articles = self.articles.read().await;
        let events = self.events.read().await;

        OverviewStats {
            total_articles: articles.len(),
            published_articles: articles
                .records()
                .iter()
                .filter(|a| a.status == ArticleStatus::Published)
                .count(),
            total_article_views: articles
                .records()
                .iter()
                .fold(0u64, |acc, a| acc.saturating_add(a.views)),
            total_events: events.len(),
            upcoming_events: events
                .records()
                .iter()
                .filter(|e| e.status == EventStatus::Upcoming)
                .count(),
            total_exam_schedules: self.exam_schedules.read().await.len(),
            total_clubs: self.clubs.read().await.len(),
            total_academic_results: self.academic_results.read().await.len(),
        }
    }
}

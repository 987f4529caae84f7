//! Content records and their in-memory collections.
//!
//! Each content variant implements `ContentRecord`, which tells a
//! `Collection` how to validate a request, build a stored record from it and
//! replace an existing record's data. The collection owns id assignment and
//! storage order; it knows nothing about actors or policy.

use chrono::{DateTime, Utc};
use std::collections::HashSet;
use uuid::Uuid;

use crate::error::{ContentError, ContentResult, ValidationErrors};
use crate::models::{
    AcademicResult, AcademicResultRequest, Article, ArticleRequest, Club, ClubRequest, Event,
    EventRequest, ExamSchedule, ExamScheduleRequest, Section,
};
use crate::validation;

/// The content variants held by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Article,
    Event,
    ExamSchedule,
    Club,
    AcademicResult,
}

impl ContentKind {
    /// The dashboard section that manages this kind of content.
    pub fn section(&self) -> Section {
        match self {
            ContentKind::Article => Section::Articles,
            ContentKind::Event => Section::Events,
            ContentKind::ExamSchedule => Section::Exams,
            ContentKind::Club => Section::Clubs,
            ContentKind::AcademicResult => Section::Academics,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Article => "article",
            ContentKind::Event => "event",
            ContentKind::ExamSchedule => "exam schedule",
            ContentKind::Club => "club",
            ContentKind::AcademicResult => "academic result",
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// ContentRecord
///
/// Implemented by every stored content variant. `create` and `replace`
/// receive an already validated request.
pub trait ContentRecord: Clone + Send + Sync + 'static {
    type Request: Send + Sync;

    const KIND: ContentKind;

    fn id(&self) -> Uuid;

    /// The id the caller asked for, if any.
    fn requested_id(req: &Self::Request) -> Option<Uuid>;

    fn validate(req: &Self::Request) -> Result<(), ValidationErrors>;

    fn create(id: Uuid, req: Self::Request, created_by: Uuid, now: DateTime<Utc>) -> Self;

    /// Builds the replacement for `self`. Identity, ownership and creation
    /// time carry over; `updated_at` becomes `now`.
    fn replace(&self, req: Self::Request, now: DateTime<Utc>) -> Self;
}

/// Collection
///
/// An insertion-ordered list of records of one kind, most recent first.
/// Ids of removed records are retired and never handed out again.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    records: Vec<T>,
    retired: HashSet<Uuid>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            retired: HashSet::new(),
        }
    }
}

impl<T: ContentRecord> Collection<T> {
    /// Wraps existing records, keeping their order.
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records,
            retired: HashSet::new(),
        }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    fn is_taken(&self, id: Uuid) -> bool {
        self.retired.contains(&id) || self.get(id).is_some()
    }

    fn fresh_id(&self) -> Uuid {
        loop {
            let id = Uuid::new_v4();
            if !self.is_taken(id) {
                return id;
            }
        }
    }

    /// insert
    ///
    /// Validates `req`, assigns an id and prepends the new record. A requested
    /// id is honoured only if it was never used in this collection; a missing
    /// or nil id gets a fresh one.
    pub fn insert(&mut self, req: T::Request, created_by: Uuid, now: DateTime<Utc>) -> ContentResult<T> {
        T::validate(&req)?;

        let id = match T::requested_id(&req) {
            Some(id) if id.is_nil() => self.fresh_id(),
            Some(id) if self.is_taken(id) => {
                return Err(ContentError::DuplicateId { kind: T::KIND, id });
            }
            Some(id) => id,
            None => self.fresh_id(),
        };

        let record = T::create(id, req, created_by, now);
        self.records.insert(0, record.clone());
        Ok(record)
    }

    /// replace
    ///
    /// Swaps the data of the record with `id` in place, keeping its position.
    pub fn replace(&mut self, id: Uuid, req: T::Request, now: DateTime<Utc>) -> ContentResult<T> {
        let Some(slot) = self.records.iter_mut().find(|r| r.id() == id) else {
            return Err(ContentError::NotFound { kind: T::KIND, id });
        };
        T::validate(&req)?;

        let updated = T::replace(slot, req, now);
        *slot = updated.clone();
        Ok(updated)
    }

    /// remove
    ///
    /// Removes exactly one record. Removing an id that is not present (including
    /// one removed earlier) is `NotFound`.
    pub fn remove(&mut self, id: Uuid) -> ContentResult<T> {
        let Some(index) = self.records.iter().position(|r| r.id() == id) else {
            return Err(ContentError::NotFound { kind: T::KIND, id });
        };

        self.retired.insert(id);
        Ok(self.records.remove(index))
    }
}

// --- Variants ---

impl Article {
    fn from_request(
        id: Uuid,
        req: ArticleRequest,
        created_by: Uuid,
        created_at: DateTime<Utc>,
        publish_date: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Self {
        let read_time = validation::read_time(&req.content);
        Article {
            id,
            title: req.title,
            content: req.content,
            excerpt: req.excerpt,
            author: req.author,
            category: req.category,
            tags: validation::normalize_tags(req.tags),
            publish_date: req.publish_date.unwrap_or(publish_date),
            views: req.views,
            featured: req.featured,
            image: req.image,
            read_time,
            status: req.status,
            created_by,
            created_at,
            updated_at: now,
        }
    }
}

impl ContentRecord for Article {
    type Request = ArticleRequest;

    const KIND: ContentKind = ContentKind::Article;

    fn id(&self) -> Uuid {
        self.id
    }

    fn requested_id(req: &ArticleRequest) -> Option<Uuid> {
        req.id
    }

    fn validate(req: &ArticleRequest) -> Result<(), ValidationErrors> {
        validation::validate_article(req)
    }

    fn create(id: Uuid, req: ArticleRequest, created_by: Uuid, now: DateTime<Utc>) -> Self {
        Article::from_request(id, req, created_by, now, now, now)
    }

    fn replace(&self, req: ArticleRequest, now: DateTime<Utc>) -> Self {
        Article::from_request(self.id, req, self.created_by, self.created_at, self.publish_date, now)
    }
}

impl Event {
    fn from_request(
        id: Uuid,
        req: EventRequest,
        created_by: Uuid,
        created_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Self {
        Event {
            id,
            title: req.title,
            description: req.description,
            category: req.category,
            start_date: req.start_date,
            end_date: req.end_date,
            registration_deadline: req.registration_deadline,
            venue: req.venue,
            max_participants: req.max_participants,
            registration_fee: req.registration_fee,
            organizer: req.organizer,
            contact_email: req.contact_email,
            contact_phone: req.contact_phone,
            image: req.image,
            requirements: validation::non_blank(req.requirements),
            prizes: validation::non_blank(req.prizes),
            status: req.status,
            registration_open: req.registration_open,
            created_by,
            created_at,
            updated_at: now,
        }
    }
}

impl ContentRecord for Event {
    type Request = EventRequest;

    const KIND: ContentKind = ContentKind::Event;

    fn id(&self) -> Uuid {
        self.id
    }

    fn requested_id(req: &EventRequest) -> Option<Uuid> {
        req.id
    }

    fn validate(req: &EventRequest) -> Result<(), ValidationErrors> {
        validation::validate_event(req)
    }

    fn create(id: Uuid, req: EventRequest, created_by: Uuid, now: DateTime<Utc>) -> Self {
        Event::from_request(id, req, created_by, now, now)
    }

    fn replace(&self, req: EventRequest, now: DateTime<Utc>) -> Self {
        Event::from_request(self.id, req, self.created_by, self.created_at, now)
    }
}

impl ExamSchedule {
    fn from_request(
        id: Uuid,
        req: ExamScheduleRequest,
        created_by: Uuid,
        created_at: DateTime<Utc>,
        publish_date: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Self {
        ExamSchedule {
            id,
            exam_type: req.exam_type,
            department: req.department,
            semester: req.semester,
            year: req.year,
            subjects: validation::complete_subjects(req.subjects),
            instructions: validation::non_blank(req.instructions),
            publish_date: req.publish_date.unwrap_or(publish_date),
            created_by,
            created_at,
            updated_at: now,
        }
    }
}

impl ContentRecord for ExamSchedule {
    type Request = ExamScheduleRequest;

    const KIND: ContentKind = ContentKind::ExamSchedule;

    fn id(&self) -> Uuid {
        self.id
    }

    fn requested_id(req: &ExamScheduleRequest) -> Option<Uuid> {
        req.id
    }

    fn validate(req: &ExamScheduleRequest) -> Result<(), ValidationErrors> {
        validation::validate_exam_schedule(req)
    }

    fn create(id: Uuid, req: ExamScheduleRequest, created_by: Uuid, now: DateTime<Utc>) -> Self {
        ExamSchedule::from_request(id, req, created_by, now, now, now)
    }

    fn replace(&self, req: ExamScheduleRequest, now: DateTime<Utc>) -> Self {
        ExamSchedule::from_request(self.id, req, self.created_by, self.created_at, self.publish_date, now)
    }
}

impl Club {
    fn from_request(
        id: Uuid,
        req: ClubRequest,
        created_by: Uuid,
        created_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Self {
        Club {
            id,
            name: req.name,
            description: req.description,
            category: req.category,
            faculty: req.faculty,
            president: req.president,
            vice_president: req.vice_president,
            secretary: req.secretary,
            contact_email: req.contact_email,
            meeting_schedule: req.meeting_schedule,
            membership_fee: req.membership_fee,
            max_members: req.max_members,
            current_members: req.current_members,
            image: req.image,
            achievements: validation::non_blank(req.achievements),
            upcoming_events: validation::non_blank(req.upcoming_events),
            registration_open: req.registration_open,
            created_by,
            created_at,
            updated_at: now,
        }
    }
}

impl ContentRecord for Club {
    type Request = ClubRequest;

    const KIND: ContentKind = ContentKind::Club;

    fn id(&self) -> Uuid {
        self.id
    }

    fn requested_id(req: &ClubRequest) -> Option<Uuid> {
        req.id
    }

    fn validate(req: &ClubRequest) -> Result<(), ValidationErrors> {
        validation::validate_club(req)
    }

    fn create(id: Uuid, req: ClubRequest, created_by: Uuid, now: DateTime<Utc>) -> Self {
        Club::from_request(id, req, created_by, now, now)
    }

    fn replace(&self, req: ClubRequest, now: DateTime<Utc>) -> Self {
        Club::from_request(self.id, req, self.created_by, self.created_at, now)
    }
}

impl AcademicResult {
    fn from_request(
        id: Uuid,
        req: AcademicResultRequest,
        created_by: Uuid,
        created_at: DateTime<Utc>,
        publish_date: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Self {
        AcademicResult {
            id,
            student_id: req.student_id,
            student_name: req.student_name,
            department: req.department,
            semester: req.semester,
            year: req.year,
            exam_type: req.exam_type,
            subjects: req.subjects,
            cgpa: req.cgpa,
            sgpa: req.sgpa,
            status: req.status,
            publish_date: req.publish_date.unwrap_or(publish_date),
            created_by,
            created_at,
            updated_at: now,
        }
    }
}

impl ContentRecord for AcademicResult {
    type Request = AcademicResultRequest;

    const KIND: ContentKind = ContentKind::AcademicResult;

    fn id(&self) -> Uuid {
        self.id
    }

    fn requested_id(req: &AcademicResultRequest) -> Option<Uuid> {
        req.id
    }

    fn validate(req: &AcademicResultRequest) -> Result<(), ValidationErrors> {
        validation::validate_academic_result(req)
    }

    fn create(id: Uuid, req: AcademicResultRequest, created_by: Uuid, now: DateTime<Utc>) -> Self {
        AcademicResult::from_request(id, req, created_by, now, now, now)
    }

    fn replace(&self, req: AcademicResultRequest, now: DateTime<Utc>) -> Self {
        AcademicResult::from_request(
            self.id,
            req,
            self.created_by,
            self.created_at,
            self.publish_date,
            now,
        )
    }
}

//! Input validation and normalization for content payloads.
//!
//! Every check runs and all failures are reported together, so a form can
//! mark each offending field in one round trip.

use regex::Regex;
use std::sync::OnceLock;

use crate::error::ValidationErrors;
use crate::models::{
    AcademicResultRequest, ArticleRequest, ClubRequest, EventRequest, ExamScheduleRequest,
    ExamSubject,
};

const WORDS_PER_MINUTE: usize = 200;
const MAX_GRADE_POINT: f32 = 10.0;

fn require(errors: &mut ValidationErrors, field: &'static str, label: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(field, format!("{} is required", label));
    }
}

/// Validate an email address field. Empty values are reported as missing.
pub fn validate_email(errors: &mut ValidationErrors, field: &'static str, email: &str) {
    let email = email.trim();
    if email.is_empty() {
        errors.push(field, "Contact email is required");
        return;
    }

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        errors.push(field, "Invalid email format");
    }
}

pub fn validate_article(req: &ArticleRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    require(&mut errors, "title", "Title", &req.title);
    require(&mut errors, "author", "Author", &req.author);
    require(&mut errors, "excerpt", "Excerpt", &req.excerpt);
    require(&mut errors, "content", "Content", &req.content);
    errors.into_result()
}

pub fn validate_event(req: &EventRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    require(&mut errors, "title", "Title", &req.title);
    require(&mut errors, "description", "Description", &req.description);
    require(&mut errors, "venue", "Venue", &req.venue);
    require(&mut errors, "organizer", "Organizer", &req.organizer);
    require(&mut errors, "contact_phone", "Contact phone", &req.contact_phone);
    validate_email(&mut errors, "contact_email", &req.contact_email);

    if req.max_participants < 1 {
        errors.push("max_participants", "Max participants must be at least 1");
    }
    if req.end_date < req.start_date {
        errors.push("end_date", "End date must not precede the start date");
    }
    errors.into_result()
}

pub fn validate_exam_schedule(req: &ExamScheduleRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    require(&mut errors, "department", "Department", &req.department);
    require(&mut errors, "semester", "Semester", &req.semester);
    require(&mut errors, "year", "Year", &req.year);
    errors.into_result()
}

pub fn validate_club(req: &ClubRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    require(&mut errors, "name", "Name", &req.name);
    require(&mut errors, "description", "Description", &req.description);
    require(&mut errors, "faculty", "Faculty", &req.faculty);
    validate_email(&mut errors, "contact_email", &req.contact_email);

    if req.max_members < 1 {
        errors.push("max_members", "Max members must be at least 1");
    }
    if req.current_members > req.max_members {
        errors.push("current_members", "Current members cannot exceed max members");
    }
    errors.into_result()
}

pub fn validate_academic_result(req: &AcademicResultRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    require(&mut errors, "student_id", "Student ID", &req.student_id);
    require(&mut errors, "student_name", "Student name", &req.student_name);
    require(&mut errors, "department", "Department", &req.department);
    require(&mut errors, "semester", "Semester", &req.semester);
    require(&mut errors, "year", "Year", &req.year);

    if !(0.0..=MAX_GRADE_POINT).contains(&req.cgpa) {
        errors.push("cgpa", "CGPA must be between 0 and 10");
    }
    if !(0.0..=MAX_GRADE_POINT).contains(&req.sgpa) {
        errors.push("sgpa", "SGPA must be between 0 and 10");
    }
    for subject in &req.subjects {
        if subject.marks > subject.max_marks {
            errors.push(
                "subjects",
                format!("Marks for {} exceed the maximum", subject.subject_code),
            );
        }
    }
    errors.into_result()
}

// --- Normalization ---

/// Trims tags, drops empty ones and removes duplicates, keeping first
/// occurrence order.
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !out.iter().any(|t| t == tag) {
            out.push(tag.to_string());
        }
    }
    out
}

/// Drops blank entries from a free-text list (requirements, prizes,
/// instructions, achievements).
pub fn non_blank(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

/// Keeps only exam sittings that name both a subject code and a subject name.
pub fn complete_subjects(subjects: Vec<ExamSubject>) -> Vec<ExamSubject> {
    subjects
        .into_iter()
        .filter(|s| !s.subject_code.trim().is_empty() && !s.subject_name.trim().is_empty())
        .collect()
}

/// Reading time in whole minutes at 200 words per minute, never below one.
pub fn read_time(content: &str) -> u32 {
    let words = content.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    u32::try_from(minutes).unwrap_or(u32::MAX)
}

//! Tabular export rows for the dashboard's spreadsheet download.
//!
//! The spreadsheet writer itself lives in the UI; this module only hands it
//! one ordered header→value mapping per row, with the column names the
//! dashboard has always used.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;

use crate::models::{AcademicResult, Article, Club, Event, ExamSchedule};

/// One exported row: `(header, value)` pairs in column order.
pub type Row = Vec<(&'static str, String)>;

/// Sheet
///
/// A named table ready for the spreadsheet writer. Every row carries exactly
/// the `headers`, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct Sheet {
    pub name: String,
    pub file_name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    /// Builds a sheet from rows sharing the header set `headers`.
    pub fn from_rows(name: &str, file_name: &str, headers: &[&'static str], rows: Vec<Row>) -> Self {
        Sheet {
            name: name.to_string(),
            file_name: file_name.to_string(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(|(_, value)| value).collect())
                .collect(),
        }
    }
}

fn date(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%d").to_string()
}

fn yes_no(value: bool) -> String {
    if value { "Yes" } else { "No" }.to_string()
}

pub const EVENT_HEADERS: [&str; 8] = [
    "Event Name",
    "Start Date",
    "End Date",
    "Venue",
    "Max Participants",
    "Status",
    "Registration Fee",
    "Organizer",
];

pub fn event_row(event: &Event) -> Row {
    let fee = if event.registration_fee == 0 {
        "Free".to_string()
    } else {
        event.registration_fee.to_string()
    };

    vec![
        ("Event Name", event.title.clone()),
        ("Start Date", date(&event.start_date)),
        ("End Date", date(&event.end_date)),
        ("Venue", event.venue.clone()),
        ("Max Participants", event.max_participants.to_string()),
        ("Status", event.status.as_str().to_string()),
        ("Registration Fee", fee),
        ("Organizer", event.organizer.clone()),
    ]
}

pub const ARTICLE_HEADERS: [&str; 7] = [
    "Title",
    "Author",
    "Category",
    "Status",
    "Views",
    "Publish Date",
    "Featured",
];

pub fn article_row(article: &Article) -> Row {

    vec![
        ("Title", article.title.clone()),
        ("Author", article.author.clone()),
        ("Category", article.category.name().to_string()),
        ("Status", article.status.as_str().to_string()),
        ("Views", article.views.to_string()),
        ("Publish Date", date(&article.publish_date)),
        ("Featured", yes_no(article.featured)),
    ]
}

pub const EXAM_HEADERS: [&str; 10] = [
    "Department",
    "Semester",
    "Year",
    "Exam Type",
    "Subject Code",
    "Subject Name",
    "Date",
    "Time",
    "Duration",
    "Venue",
];

/// One row per subject sitting; a schedule without subjects exports nothing.
pub fn exam_schedule_rows(schedule: &ExamSchedule) -> Vec<Row> {
    schedule
        .subjects
        .iter()
        .map(|subject| {
            vec![
                ("Department", schedule.department.clone()),
                ("Semester", schedule.semester.clone()),
                ("Year", schedule.year.clone()),
                ("Exam Type", schedule.exam_type.as_str().to_string()),
                ("Subject Code", subject.subject_code.clone()),
                ("Subject Name", subject.subject_name.clone()),
                ("Date", subject.date.clone()),
                ("Time", subject.time.clone()),
                ("Duration", subject.duration.clone()),
                ("Venue", subject.venue.clone()),
            ]
        })
        .collect()
}

pub const CLUB_HEADERS: [&str; 8] = [
    "Club Name",
    "Category",
    "Faculty",
    "President",
    "Current Members",
    "Max Members",
    "Membership Fee",
    "Registration Open",
];

pub fn club_row(club: &Club) -> Row {

    vec![
        ("Club Name", club.name.clone()),
        ("Category", club.category.as_str().to_string()),
        ("Faculty", club.faculty.clone()),
        ("President", club.president.clone()),
        ("Current Members", club.current_members.to_string()),
        ("Max Members", club.max_members.to_string()),
        ("Membership Fee", club.membership_fee.to_string()),
        ("Registration Open", yes_no(club.registration_open)),
    ]
}

pub const RESULT_HEADERS: [&str; 10] = [
    "Student ID",
    "Student Name",
    "Department",
    "Semester",
    "Year",
    "Exam Type",
    "CGPA",
    "SGPA",
    "Status",
    "Publish Date",
];

pub fn academic_result_row(result: &AcademicResult) -> Row {

    vec![
        ("Student ID", result.student_id.clone()),
        ("Student Name", result.student_name.clone()),
        ("Department", result.department.clone()),
        ("Semester", result.semester.clone()),
        ("Year", result.year.clone()),
        ("Exam Type", result.exam_type.as_str().to_string()),
        ("CGPA", format!("{:.2}", result.cgpa)),
        ("SGPA", format!("{:.2}", result.sgpa)),
        ("Status", result.status.as_str().to_string()),
        ("Publish Date", date(&result.publish_date)),
    ]
}

pub fn events_sheet(events: &[Event]) -> Sheet {
    Sheet::from_rows("Events", "events_list", &EVENT_HEADERS, events.iter().map(event_row).collect())
}

pub fn articles_sheet(articles: &[Article]) -> Sheet {
    Sheet::from_rows(
        "Articles",
        "articles_list",
        &ARTICLE_HEADERS,
        articles.iter().map(article_row).collect(),
    )
}

pub fn exam_schedules_sheet(schedules: &[ExamSchedule]) -> Sheet {
    Sheet::from_rows(
        "Exam Schedules",
        "exam_schedules",
        &EXAM_HEADERS,
        schedules.iter().flat_map(exam_schedule_rows).collect(),
    )
}

pub fn clubs_sheet(clubs: &[Club]) -> Sheet {
    Sheet::from_rows("Clubs", "clubs_list", &CLUB_HEADERS, clubs.iter().map(club_row).collect())
}

pub fn academic_results_sheet(results: &[AcademicResult]) -> Sheet {
    Sheet::from_rows(
        "Results",
        "academic_results",
        &RESULT_HEADERS,
        results.iter().map(academic_result_row).collect(),
    )
}

use campus_portal::{
    export::{self, ARTICLE_HEADERS, CLUB_HEADERS, EVENT_HEADERS, EXAM_HEADERS, RESULT_HEADERS},
    seed,
};

fn headers(row: &export::Row) -> Vec<&'static str> {
    row.iter().map(|(header, _)| *header).collect()
}

fn value<'a>(row: &'a export::Row, header: &str) -> &'a str {
    row.iter()
        .find(|(h, _)| *h == header)
        .map(|(_, v)| v.as_str())
        .unwrap_or_else(|| panic!("missing column {}", header))
}

#[test]
fn test_event_row_uses_dashboard_headers() {
    let events = seed::demo_seed().events;

    let row = export::event_row(&events[0]);

    assert_eq!(headers(&row), EVENT_HEADERS.to_vec());
    assert_eq!(value(&row, "Event Name"), "Annual Tech Fest 2024");
    assert_eq!(value(&row, "Start Date"), "2024-03-15");
    assert_eq!(value(&row, "End Date"), "2024-03-17");
    assert_eq!(value(&row, "Status"), "upcoming");
    assert_eq!(value(&row, "Registration Fee"), "200");
}

#[test]
fn test_free_event_fee_is_labelled() {
    let mut event = seed::demo_seed().events.remove(1);
    event.registration_fee = 0;

    let row = export::event_row(&event);

    assert_eq!(value(&row, "Registration Fee"), "Free");
}

#[test]
fn test_article_row_formats_flags_and_category() {
    let articles = seed::demo_seed().articles;

    let featured = export::article_row(&articles[0]);
    let regular = export::article_row(&articles[3]);

    assert_eq!(headers(&featured), ARTICLE_HEADERS.to_vec());
    assert_eq!(value(&featured, "Featured"), "Yes");
    assert_eq!(value(&featured, "Views"), "1245");
    assert_eq!(value(&featured, "Publish Date"), "2024-01-15");
    assert_eq!(value(&regular, "Featured"), "No");
    assert_eq!(value(&regular, "Category"), "Academics");
}

#[test]
fn test_exam_schedule_exports_one_row_per_subject() {
    let schedules = seed::demo_seed().exam_schedules;

    let rows = export::exam_schedule_rows(&schedules[0]);

    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| headers(r) == EXAM_HEADERS.to_vec()));
    assert_eq!(value(&rows[0], "Subject Code"), "CS601");
    assert_eq!(value(&rows[1], "Subject Name"), "Software Engineering");
    assert_eq!(value(&rows[1], "Exam Type"), "final");
}

#[test]
fn test_club_and_result_rows() {
    let seed = seed::demo_seed();

    let club = export::club_row(&seed.clubs[1]);
    let result = export::academic_result_row(&seed.academic_results[0]);

    assert_eq!(headers(&club), CLUB_HEADERS.to_vec());
    assert_eq!(value(&club, "Club Name"), "Drama Society");
    assert_eq!(value(&club, "Category"), "cultural");
    assert_eq!(value(&club, "Registration Open"), "Yes");
    assert_eq!(headers(&result), RESULT_HEADERS.to_vec());
    assert_eq!(value(&result, "CGPA"), "8.50");
    assert_eq!(value(&result, "Status"), "pass");
}

#[test]
fn test_sheets_keep_rows_aligned_with_headers() {
    let seed = seed::demo_seed();

    let sheets = [
        export::events_sheet(&seed.events),
        export::articles_sheet(&seed.articles),
        export::exam_schedules_sheet(&seed.exam_schedules),
        export::clubs_sheet(&seed.clubs),
        export::academic_results_sheet(&seed.academic_results),
    ];

    for sheet in &sheets {
        assert!(!sheet.rows.is_empty(), "{} should have rows", sheet.name);
        assert!(sheet.rows.iter().all(|row| row.len() == sheet.headers.len()));
    }
    assert_eq!(sheets[0].file_name, "events_list");
    assert_eq!(sheets[2].rows.len(), 2);
}

//! Resident portal data: the university's fixed admin accounts and the demo
//! content the public pages open with.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::{
    AcademicResult, Actor, Article, ArticleCategory, ArticleStatus, Club, ClubCategory, Event,
    EventCategory, EventStatus, ExamSchedule, ExamSubject, ExamType, ResultStatus, Role,
    SubjectGrade,
};
use crate::repository::SeedData;
use crate::session::{Credential, CredentialTable};
use crate::validation;

/// Headlines for the breaking-news ticker on the home page.
pub const BREAKING_NEWS: [&str; 4] = [
    "University ranked among top 50 institutions globally",
    "New scholarship program announced for underprivileged students",
    "Campus wifi upgrade completed - 10x faster speeds now available",
    "International collaboration signed with MIT and Oxford",
];

// Seeded ids live in per-kind ranges so they never collide across
// collections or with the v4 ids minted at runtime.
const ARTICLE_IDS: u128 = 0x100;
const EVENT_IDS: u128 = 0x200;
const EXAM_IDS: u128 = 0x300;
const CLUB_IDS: u128 = 0x400;
const RESULT_IDS: u128 = 0x500;

/// Id of the n-th seeded admin account (1-based, credential table order).
pub fn actor_id(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

pub fn article_id(n: u128) -> Uuid {
    Uuid::from_u128(ARTICLE_IDS + n)
}

pub fn event_id(n: u128) -> Uuid {
    Uuid::from_u128(EVENT_IDS + n)
}

pub fn exam_schedule_id(n: u128) -> Uuid {
    Uuid::from_u128(EXAM_IDS + n)
}

pub fn club_id(n: u128) -> Uuid {
    Uuid::from_u128(CLUB_IDS + n)
}

pub fn academic_result_id(n: u128) -> Uuid {
    Uuid::from_u128(RESULT_IDS + n)
}

/// Parses a fixed RFC 3339 seed literal. Panics on a malformed one.
fn ts(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|e| panic!("invalid seed timestamp {value:?}: {e}"))
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

struct Account {
    n: u128,
    name: &'static str,
    email: &'static str,
    password: &'static str,
    role: Role,
    department: Option<&'static str>,
    permissions: &'static [&'static str],
    avatar: &'static str,
    last_login: &'static str,
}

const ACCOUNTS: [Account; 5] = [
    Account {
        n: 1,
        name: "Super Admin",
        email: "admin@university.edu",
        password: "admin123",
        role: Role::SuperAdmin,
        department: None,
        permissions: &["all"],
        avatar: "https://images.pexels.com/photos/1300402/pexels-photo-1300402.jpeg",
        last_login: "2024-01-15T10:00:00Z",
    },
    Account {
        n: 2,
        name: "Academic Admin",
        email: "academic@university.edu",
        password: "academic123",
        role: Role::AcademicAdmin,
        department: Some("Academic Affairs"),
        permissions: &["academic", "results", "exams"],
        avatar: "https://images.pexels.com/photos/1043471/pexels-photo-1043471.jpeg",
        last_login: "2024-01-14T15:30:00Z",
    },
    Account {
        n: 3,
        name: "Event Admin",
        email: "events@university.edu",
        password: "events123",
        role: Role::EventAdmin,
        department: Some("Student Affairs"),
        permissions: &["events", "registrations"],
        avatar: "https://images.pexels.com/photos/1181690/pexels-photo-1181690.jpeg",
        last_login: "2024-01-14T12:00:00Z",
    },
    Account {
        n: 4,
        name: "Club Admin",
        email: "clubs@university.edu",
        password: "clubs123",
        role: Role::ClubAdmin,
        department: Some("Student Activities"),
        permissions: &["clubs", "memberships"],
        avatar: "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg",
        last_login: "2024-01-13T09:45:00Z",
    },
    Account {
        n: 5,
        name: "News Admin",
        email: "news@university.edu",
        password: "news123",
        role: Role::NewsAdmin,
        department: Some("Communications"),
        permissions: &["articles", "news"],
        avatar: "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg",
        last_login: "2024-01-15T08:00:00Z",
    },
];

/// university_credentials
///
/// The five dashboard accounts, one per admin role.
pub fn university_credentials() -> CredentialTable {
    let entries = ACCOUNTS
        .iter()
        .map(|account| Credential {
            email: account.email.to_string(),
            password: account.password.to_string(),
            actor: Actor {
                id: actor_id(account.n),
                name: account.name.to_string(),
                email: account.email.to_string(),
                role: account.role,
                department: account.department.map(str::to_string),
                permissions: strings(account.permissions),
                avatar: account.avatar.to_string(),
                is_active: true,
                last_login: ts(account.last_login),
                created_at: ts("2024-01-01T00:00:00Z"),
            },
        })
        .collect();

    CredentialTable::new(entries)
}

#[allow(clippy::too_many_arguments)]
fn article(
    n: u128,
    title: &str,
    content: &str,
    excerpt: &str,
    author: &str,
    category: ArticleCategory,
    tags: &[&str],
    publish_date: &str,
    views: u64,
    featured: bool,
    image: &str,
    created_by: u128,
    updated_at: &str,
) -> Article {
    Article {
        id: article_id(n),
        title: title.to_string(),
        content: content.to_string(),
        excerpt: excerpt.to_string(),
        author: author.to_string(),
        category,
        tags: strings(tags),
        publish_date: ts(publish_date),
        views,
        featured,
        image: image.to_string(),
        read_time: validation::read_time(content),
        status: ArticleStatus::Published,
        created_by: actor_id(created_by),
        created_at: ts(publish_date),
        updated_at: ts(updated_at),
    }
}

fn demo_articles() -> Vec<Article> {
    vec![
        article(
            1,
            "University Announces New Research Center for Artificial Intelligence",
            "The university has announced the establishment of a state-of-the-art research center dedicated to artificial intelligence and machine learning. This new facility will house cutting-edge equipment and provide opportunities for both undergraduate and graduate students to engage in groundbreaking research.",
            "New AI research center to foster innovation and provide advanced learning opportunities for students.",
            "Dr. Sarah Johnson",
            ArticleCategory::Research,
            &["AI", "Research", "Technology", "Innovation"],
            "2024-01-15T10:00:00Z",
            1245,
            true,
            "https://images.pexels.com/photos/8439093/pexels-photo-8439093.jpeg",
            2,
            "2024-01-15T10:30:00Z",
        ),
        article(
            2,
            "Record-Breaking Placement Season: 95% Students Placed",
            "This year marks a milestone achievement with 95% of graduating students securing placements in top-tier companies. The placement cell worked tirelessly to bring renowned organizations to campus.",
            "Exceptional placement results showcase the quality of education and industry readiness of our students.",
            "Prof. Michael Chen",
            ArticleCategory::Placements,
            &["Placements", "Career", "Success", "Students"],
            "2024-01-14T14:30:00Z",
            2150,
            true,
            "https://images.pexels.com/photos/7688336/pexels-photo-7688336.jpeg",
            1,
            "2024-01-14T15:00:00Z",
        ),
        article(
            3,
            "Annual Cultural Festival \"Spectrum 2024\" Begins Tomorrow",
            "The much-awaited annual cultural festival Spectrum 2024 kicks off tomorrow with three days of music, dance, theater, and art exhibitions. Students from various colleges will participate in this grand celebration.",
            "Three-day cultural extravaganza featuring performances, competitions, and exhibitions.",
            "Lisa Rodriguez",
            ArticleCategory::Events,
            &["Culture", "Festival", "Arts", "Students"],
            "2024-01-13T16:15:00Z",
            892,
            true,
            "https://images.pexels.com/photos/1190298/pexels-photo-1190298.jpeg",
            3,
            "2024-01-13T16:45:00Z",
        ),
        article(
            4,
            "New Curriculum Updates for Engineering Programs",
            "The engineering department has introduced significant updates to the curriculum, incorporating latest industry trends and emerging technologies to better prepare students for the evolving job market.",
            "Engineering curriculum gets a modern makeover with industry-relevant updates.",
            "Dr. Robert Kim",
            ArticleCategory::Academics,
            &["Curriculum", "Engineering", "Education", "Innovation"],
            "2024-01-12T09:45:00Z",
            756,
            false,
            "https://images.pexels.com/photos/3862132/pexels-photo-3862132.jpeg",
            2,
            "2024-01-12T10:15:00Z",
        ),
        article(
            5,
            "Students Win National Robotics Competition",
            "Our robotics team has secured first place in the National Robotics Championship, beating 150+ teams from across the country. The winning project focused on autonomous navigation systems.",
            "Robotics team brings home national championship trophy with innovative project.",
            "Tech News Desk",
            ArticleCategory::Academics,
            &["Robotics", "Competition", "Technology", "Achievement"],
            "2024-01-11T11:20:00Z",
            1340,
            false,
            "https://images.pexels.com/photos/2599244/pexels-photo-2599244.jpeg",
            2,
            "2024-01-11T11:50:00Z",
        ),
        article(
            6,
            "Campus Sustainability Initiative Reduces Carbon Footprint by 30%",
            "The university's comprehensive sustainability program has achieved remarkable results, reducing the campus carbon footprint by 30% through renewable energy adoption and waste reduction programs.",
            "Green initiatives show impressive environmental impact with significant carbon reduction.",
            "Environmental Committee",
            ArticleCategory::Research,
            &["Sustainability", "Environment", "Green", "Innovation"],
            "2024-01-10T13:00:00Z",
            623,
            false,
            "https://images.pexels.com/photos/9875414/pexels-photo-9875414.jpeg",
            2,
            "2024-01-10T13:30:00Z",
        ),
    ]
}

fn demo_events() -> Vec<Event> {
    vec![
        Event {
            id: event_id(1),
            title: "Annual Tech Fest 2024".to_string(),
            description: "Join us for the biggest technical festival of the year featuring coding competitions, robotics challenges, and tech talks by industry experts.".to_string(),
            category: EventCategory::Technical,
            start_date: ts("2024-03-15T09:00:00Z"),
            end_date: ts("2024-03-17T18:00:00Z"),
            registration_deadline: ts("2024-03-10T23:59:59Z"),
            venue: "Main Auditorium & Tech Labs".to_string(),
            max_participants: 500,
            registration_fee: 200,
            organizer: "Computer Science Department".to_string(),
            contact_email: "techfest@university.edu".to_string(),
            contact_phone: "+91-9876543210".to_string(),
            image: "https://images.pexels.com/photos/1181263/pexels-photo-1181263.jpeg".to_string(),
            requirements: strings(&["Laptop", "Student ID", "Registration Confirmation"]),
            prizes: strings(&[
                "₹50,000 for 1st Prize",
                "₹30,000 for 2nd Prize",
                "₹20,000 for 3rd Prize",
            ]),
            status: EventStatus::Upcoming,
            registration_open: true,
            created_by: actor_id(3),
            created_at: ts("2024-01-10T10:00:00Z"),
            updated_at: ts("2024-01-15T14:30:00Z"),
        },
        Event {
            id: event_id(2),
            title: "Cultural Night 2024".to_string(),
            description: "Experience the vibrant cultural diversity of our university through dance, music, drama, and art performances.".to_string(),
            category: EventCategory::Cultural,
            start_date: ts("2024-02-20T18:00:00Z"),
            end_date: ts("2024-02-20T22:00:00Z"),
            registration_deadline: ts("2024-02-15T23:59:59Z"),
            venue: "Open Air Theatre".to_string(),
            max_participants: 1000,
            registration_fee: 100,
            organizer: "Cultural Committee".to_string(),
            contact_email: "cultural@university.edu".to_string(),
            contact_phone: "+91-9876543211".to_string(),
            image: "https://images.pexels.com/photos/1190298/pexels-photo-1190298.jpeg".to_string(),
            requirements: strings(&["Student ID", "Registration Confirmation"]),
            prizes: strings(&["Best Performance Award", "Audience Choice Award"]),
            status: EventStatus::Upcoming,
            registration_open: true,
            created_by: actor_id(3),
            created_at: ts("2024-01-08T15:00:00Z"),
            updated_at: ts("2024-01-12T09:15:00Z"),
        },
    ]
}

fn demo_exam_schedules() -> Vec<ExamSchedule> {
    let sitting = |code: &str, name: &str, date: &str, venue: &str| ExamSubject {
        subject_code: code.to_string(),
        subject_name: name.to_string(),
        date: date.to_string(),
        time: "09:00 AM".to_string(),
        duration: "3 hours".to_string(),
        venue: venue.to_string(),
    };

    vec![ExamSchedule {
        id: exam_schedule_id(1),
        exam_type: ExamType::Final,
        department: "Computer Science".to_string(),
        semester: "6th".to_string(),
        year: "2024".to_string(),
        subjects: vec![
            sitting("CS601", "Machine Learning", "2024-05-15", "Exam Hall A"),
            sitting("CS602", "Software Engineering", "2024-05-17", "Exam Hall B"),
        ],
        instructions: strings(&[
            "Bring your student ID card",
            "No electronic devices allowed",
            "Report 30 minutes before exam time",
        ]),
        publish_date: ts("2024-04-15T10:00:00Z"),
        created_by: actor_id(2),
        created_at: ts("2024-04-15T10:00:00Z"),
        updated_at: ts("2024-04-20T15:30:00Z"),
    }]
}

fn demo_clubs() -> Vec<Club> {
    vec![
        Club {
            id: club_id(1),
            name: "Coding Club".to_string(),
            description: "A community of passionate programmers and developers working on exciting projects and participating in coding competitions.".to_string(),
            category: ClubCategory::Technical,
            faculty: "Dr. Sarah Johnson".to_string(),
            president: "Alex Kumar".to_string(),
            vice_president: "Priya Sharma".to_string(),
            secretary: "Rahul Patel".to_string(),
            contact_email: "codingclub@university.edu".to_string(),
            meeting_schedule: "Every Friday 4:00 PM".to_string(),
            membership_fee: 500,
            max_members: 100,
            current_members: 75,
            image: "https://images.pexels.com/photos/1181263/pexels-photo-1181263.jpeg".to_string(),
            achievements: strings(&[
                "Won Inter-University Hackathon 2023",
                "Published 5 Open Source Projects",
            ]),
            upcoming_events: strings(&["Weekly Coding Contest", "Git Workshop"]),
            registration_open: true,
            created_by: actor_id(4),
            created_at: ts("2024-01-01T00:00:00Z"),
            updated_at: ts("2024-01-01T00:00:00Z"),
        },
        Club {
            id: club_id(2),
            name: "Drama Society".to_string(),
            description: "Express yourself through the art of theater and drama. Join us for workshops, performances, and creative collaborations.".to_string(),
            category: ClubCategory::Cultural,
            faculty: "Prof. Michael Chen".to_string(),
            president: "Sneha Reddy".to_string(),
            vice_president: "Arjun Singh".to_string(),
            secretary: "Kavya Nair".to_string(),
            contact_email: "drama@university.edu".to_string(),
            meeting_schedule: "Every Tuesday & Thursday 5:00 PM".to_string(),
            membership_fee: 300,
            max_members: 50,
            current_members: 35,
            image: "https://images.pexels.com/photos/1190298/pexels-photo-1190298.jpeg".to_string(),
            achievements: strings(&["Best Drama Award 2023", "3 Successful Productions"]),
            upcoming_events: strings(&["Shakespeare Workshop", "Annual Play Auditions"]),
            registration_open: true,
            created_by: actor_id(4),
            created_at: ts("2024-01-01T00:00:00Z"),
            updated_at: ts("2024-01-01T00:00:00Z"),
        },
    ]
}

fn demo_academic_results() -> Vec<AcademicResult> {
    let grade = |code: &str, name: &str, grade: &str, marks: u32| SubjectGrade {
        subject_code: code.to_string(),
        subject_name: name.to_string(),
        credits: 4,
        grade: grade.to_string(),
        marks,
        max_marks: 100,
    };

    vec![AcademicResult {
        id: academic_result_id(1),
        student_id: "CS2021001".to_string(),
        student_name: "John Doe".to_string(),
        department: "Computer Science".to_string(),
        semester: "5th".to_string(),
        year: "2023".to_string(),
        exam_type: ExamType::Final,
        subjects: vec![
            grade("CS501", "Database Management Systems", "A", 85),
            grade("CS502", "Computer Networks", "A-", 78),
        ],
        cgpa: 8.5,
        sgpa: 8.2,
        status: ResultStatus::Pass,
        publish_date: ts("2024-01-10T10:00:00Z"),
        created_by: actor_id(2),
        created_at: ts("2024-01-10T10:00:00Z"),
        updated_at: ts("2024-01-10T10:00:00Z"),
    }]
}

/// demo_seed
///
/// The content the portal ships with when `SEED_DEMO_DATA` is on.
pub fn demo_seed() -> SeedData {
    SeedData {
        articles: demo_articles(),
        events: demo_events(),
        exam_schedules: demo_exam_schedules(),
        clubs: demo_clubs(),
        academic_results: demo_academic_results(),
    }
}

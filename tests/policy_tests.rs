use campus_portal::{
    models::{Actor, Role, Section},
    policy::{self, DashboardAccess},
};
use chrono::Utc;
use uuid::Uuid;

fn actor(role: Role) -> Actor {
    Actor {
        id: Uuid::new_v4(),
        name: format!("{} tester", role),
        email: "tester@university.edu".to_string(),
        role,
        department: None,
        permissions: vec![],
        avatar: String::new(),
        is_active: true,
        last_login: Utc::now(),
        created_at: Utc::now(),
    }
}

fn expected(role: Role) -> Vec<Section> {
    use Section::*;
    match role {
        Role::SuperAdmin => vec![Overview, Events, Articles, Academics, Exams, Clubs],
        Role::AcademicAdmin => vec![Overview, Academics, Exams],
        Role::EventAdmin => vec![Overview, Events],
        Role::ClubAdmin => vec![Overview, Clubs],
        Role::NewsAdmin => vec![Overview, Articles],
        Role::Editor | Role::User => vec![],
    }
}

#[test]
fn test_can_access_matches_table_for_every_pair() {
    for role in Role::ALL {
        let allowed = expected(role);
        for section in Section::ALL {
            assert_eq!(
                policy::can_access(role, section),
                allowed.contains(&section),
                "unexpected decision for {} on {}",
                role,
                section
            );
        }
    }
}

#[test]
fn test_can_access_is_deterministic() {
    for role in Role::ALL {
        for section in Section::ALL {
            let first = policy::can_access(role, section);
            for _ in 0..10 {
                assert_eq!(policy::can_access(role, section), first);
            }
        }
    }
}

#[test]
fn test_visible_sections_follow_tab_order() {
    for role in Role::ALL {
        assert_eq!(policy::visible_sections(role), expected(role));
    }
}

#[test]
fn test_news_admin_sees_overview_and_articles_only() {
    assert_eq!(
        policy::visible_sections(Role::NewsAdmin),
        vec![Section::Overview, Section::Articles]
    );
    assert!(!policy::can_access(Role::NewsAdmin, Section::Events));
    assert!(!policy::can_access(Role::NewsAdmin, Section::Clubs));
}

#[test]
fn test_only_dashboard_roles_are_admin() {
    assert!(Role::SuperAdmin.is_admin());
    assert!(Role::ClubAdmin.is_admin());
    assert!(!Role::Editor.is_admin());
    assert!(!Role::User.is_admin());
}

#[test]
fn test_dashboard_access_without_actor_redirects() {
    assert_eq!(policy::dashboard_access(None), DashboardAccess::RedirectToLogin);
}

#[test]
fn test_dashboard_access_for_role_without_sections_redirects() {
    let editor = actor(Role::Editor);
    let user = actor(Role::User);

    assert_eq!(policy::dashboard_access(Some(&editor)), DashboardAccess::RedirectToLogin);
    assert_eq!(policy::dashboard_access(Some(&user)), DashboardAccess::RedirectToLogin);
}

#[test]
fn test_dashboard_access_follows_role_change() {
    let mut acting = actor(Role::EventAdmin);
    assert_eq!(
        policy::dashboard_access(Some(&acting)),
        DashboardAccess::Granted(vec![Section::Overview, Section::Events])
    );

    acting.role = Role::AcademicAdmin;
    assert_eq!(
        policy::dashboard_access(Some(&acting)),
        DashboardAccess::Granted(vec![Section::Overview, Section::Academics, Section::Exams])
    );
}

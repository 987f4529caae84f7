use campus_portal::{
    error::AuthError,
    models::{Actor, Role, Section},
    policy, seed,
    session::{Credential, CredentialTable, Session},
};
use chrono::Utc;
use uuid::Uuid;

fn university_session() -> Session {
    Session::new(seed::university_credentials())
}

#[test]
fn test_credential_table_has_one_account_per_admin_role() {
    let table = seed::university_credentials();
    assert_eq!(table.len(), 5);
    assert!(!table.is_empty());
}

#[tokio::test]
async fn test_login_super_admin_sees_all_sections() {
    let session = university_session();

    let actor = session
        .login("admin@university.edu", "admin123")
        .await
        .expect("admin login should succeed");

    assert_eq!(actor.role, Role::SuperAdmin);
    assert_eq!(actor.permissions, vec!["all".to_string()]);
    assert_eq!(policy::visible_sections(actor.role), Section::ALL.to_vec());
    assert_eq!(session.current_actor().await, Some(actor));
}

#[tokio::test]
async fn test_login_resolves_each_account_to_its_role() {
    let accounts = [
        ("academic@university.edu", "academic123", Role::AcademicAdmin, Some("Academic Affairs")),
        ("events@university.edu", "events123", Role::EventAdmin, Some("Student Affairs")),
        ("clubs@university.edu", "clubs123", Role::ClubAdmin, Some("Student Activities")),
        ("news@university.edu", "news123", Role::NewsAdmin, Some("Communications")),
    ];

    for (email, password, role, department) in accounts {
        let session = university_session();
        let actor = session.login(email, password).await.unwrap();
        assert_eq!(actor.role, role);
        assert_eq!(actor.email, email);
        assert_eq!(actor.department.as_deref(), department);
    }
}

#[tokio::test]
async fn test_login_stamps_last_login() {
    let session = university_session();
    let before = Utc::now();

    let actor = session.login("news@university.edu", "news123").await.unwrap();

    assert!(actor.last_login >= before);
}

#[tokio::test]
async fn test_wrong_password_is_rejected_and_no_actor_is_set() {
    let session = university_session();

    let result = session.login("admin@university.edu", "admin1234").await;

    assert_eq!(result, Err(AuthError::InvalidCredentials));
    assert_eq!(session.current_actor().await, None);
}

#[tokio::test]
async fn test_unknown_email_and_case_mismatch_are_rejected() {
    let session = university_session();

    assert_eq!(
        session.login("nobody@university.edu", "admin123").await,
        Err(AuthError::InvalidCredentials)
    );
    assert_eq!(
        session.login("Admin@University.edu", "admin123").await,
        Err(AuthError::InvalidCredentials)
    );
}

#[tokio::test]
async fn test_failed_login_keeps_current_actor() {
    let session = university_session();
    let news = session.login("news@university.edu", "news123").await.unwrap();

    let result = session.login("admin@university.edu", "wrong").await;

    assert!(result.is_err());
    assert_eq!(session.current_actor().await.map(|a| a.id), Some(news.id));
}

#[tokio::test]
async fn test_second_login_replaces_current_actor() {
    let session = university_session();
    session.login("news@university.edu", "news123").await.unwrap();

    let clubs = session.login("clubs@university.edu", "clubs123").await.unwrap();

    assert_eq!(session.current_actor().await.map(|a| a.role), Some(Role::ClubAdmin));
    assert_eq!(clubs.role, Role::ClubAdmin);
}

#[tokio::test]
async fn test_logout_clears_actor_and_is_idempotent() {
    let session = university_session();
    session.login("events@university.edu", "events123").await.unwrap();

    session.logout().await;
    assert_eq!(session.current_actor().await, None);

    session.logout().await;
    assert_eq!(session.current_actor().await, None);
}

#[tokio::test]
async fn test_disabled_account_cannot_sign_in() {
    let actor = Actor {
        id: Uuid::from_u128(42),
        name: "Former Admin".to_string(),
        email: "former@university.edu".to_string(),
        role: Role::ClubAdmin,
        department: None,
        permissions: vec![],
        avatar: String::new(),
        is_active: false,
        last_login: Utc::now(),
        created_at: Utc::now(),
    };
    let session = Session::new(CredentialTable::new(vec![Credential {
        email: actor.email.clone(),
        password: "former123".to_string(),
        actor,
    }]));

    let result = session.login("former@university.edu", "former123").await;

    assert_eq!(result, Err(AuthError::AccountDisabled));
    assert_eq!(session.current_actor().await, None);
}

use super::*;
use test_utils::factory::session::SessionFactory;

fn user(user_id: &str, session_id: &str) -> SessionUserParam {
    SessionUserParam {
        user_id: user_id.to_string(),
        session_id: session_id.to_string(),
    }
}

/// Tests loading a live session by user and session ID.
///
/// Expected: Ok(Some(session)) with the stored server snapshot
#[tokio::test]
async fn finds_live_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_session_store().build().await.unwrap();
    let store = test.session_store().await.unwrap();

    let session_id = SessionFactory::new(store)
        .user_id("42")
        .server(fixture::session::managed_server("1"))
        .server(fixture::session::botless_server("2"))
        .build()
        .await
        .unwrap();

    let repo = DashboardSessionRepository::new(store);
    let session = repo.find(&user("42", &session_id)).await?.unwrap();

    assert_eq!(session.user_id, "42");
    assert_eq!(session.session_id, session_id);
    assert_eq!(session.servers.len(), 2);
    assert!(session.server("1").unwrap().can_manage());
    assert!(!session.server("2").unwrap().can_manage());

    Ok(())
}

/// Tests that the session ID alone is not enough: the user ID must match the record.
///
/// Expected: Ok(None)
#[tokio::test]
async fn rejects_session_of_other_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_session_store().build().await.unwrap();
    let store = test.session_store().await.unwrap();

    let session_id = factory::create_session(store, "42", "1").await.unwrap();

    let repo = DashboardSessionRepository::new(store);
    let session = repo.find(&user("43", &session_id)).await?;

    assert!(session.is_none());

    Ok(())
}

/// Tests that expired records are treated as absent.
///
/// Expected: Ok(None)
#[tokio::test]
async fn rejects_expired_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_session_store().build().await.unwrap();
    let store = test.session_store().await.unwrap();

    let session_id = SessionFactory::new(store)
        .user_id("42")
        .expires_in(time::Duration::seconds(-1))
        .build()
        .await
        .unwrap();

    let repo = DashboardSessionRepository::new(store);
    let session = repo.find(&user("42", &session_id)).await?;

    assert!(session.is_none());

    Ok(())
}

/// Tests that garbage and unknown session IDs are treated as absent.
///
/// Expected: Ok(None) for both
#[tokio::test]
async fn rejects_unknown_session_ids() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_session_store().build().await.unwrap();
    let store = test.session_store().await.unwrap();

    factory::create_session(store, "42", "1").await.unwrap();

    let repo = DashboardSessionRepository::new(store);

    assert!(repo.find(&user("42", "not-a-session")).await?.is_none());
    assert!(repo
        .find(&user("42", "AAAAAAAAAAAAAAAAAAAAAA"))
        .await?
        .is_none());

    Ok(())
}

use super::*;

/// Tests the happy path: live session, managed server, bot in the guild.
///
/// Expected: Ok with the parsed guild ID
#[tokio::test]
async fn grants_access_to_managed_guild() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_session_store().build().await.unwrap();
    let store = test.session_store().await.unwrap();
    let cache = cache_with(&[123]);

    let session_id = SessionFactory::new(store)
        .user_id("42")
        .server(fixture::session::managed_server("123"))
        .build()
        .await
        .unwrap();

    let guild = GuildAccessGuard::new(store, &cache)
        .require(&user("42", &session_id), "123", &[Permission::ManageGuild])
        .await?;

    assert_eq!(guild.guild_id, 123);
    assert_eq!(guild.session.user_id, "42");

    Ok(())
}

/// Tests that an unknown session short-circuits before anything else.
///
/// Expected: err-session-expired
#[tokio::test]
async fn rejects_missing_session() {
    let mut test = TestBuilder::new().with_session_store().build().await.unwrap();
    let store = test.session_store().await.unwrap();
    let cache = cache_with(&[123]);

    let result = GuildAccessGuard::new(store, &cache)
        .require(&user("42", "nope"), "123", &[Permission::ManageGuild])
        .await;

    assert_eq!(sentinel_of(result), Sentinel::SessionExpired);
}

/// Tests a guild that is not in the session's server snapshot.
///
/// Expected: err-server-not-found
#[tokio::test]
async fn rejects_guild_missing_from_session() {
    let mut test = TestBuilder::new().with_session_store().build().await.unwrap();
    let store = test.session_store().await.unwrap();
    let cache = cache_with(&[123, 456]);

    let session_id = SessionFactory::new(store)
        .user_id("42")
        .server(fixture::session::managed_server("123"))
        .build()
        .await
        .unwrap();

    let result = GuildAccessGuard::new(store, &cache)
        .require(&user("42", &session_id), "456", &[Permission::ManageGuild])
        .await;

    assert_eq!(sentinel_of(result), Sentinel::ServerNotFound);
}

/// Tests a user without MANAGE_GUILD and a guild the bot had not joined at login.
///
/// Expected: err-no-permissions for both
#[tokio::test]
async fn rejects_without_manage_permission() {
    let mut test = TestBuilder::new().with_session_store().build().await.unwrap();
    let store = test.session_store().await.unwrap();
    let cache = cache_with(&[1, 2]);

    let session_id = SessionFactory::new(store)
        .user_id("42")
        .server(fixture::session::member_server("1"))
        .server(fixture::session::botless_server("2"))
        .build()
        .await
        .unwrap();

    let guard = GuildAccessGuard::new(store, &cache);
    let user = user("42", &session_id);

    for server in ["1", "2"] {
        let result = guard.require(&user, server, &[Permission::ManageGuild]).await;
        assert_eq!(sentinel_of(result), Sentinel::NoPermissions);
    }
}

/// Tests that permission is checked before the live cache, so a missing guild does
/// not reveal itself to users without access.
///
/// Expected: err-no-permissions
#[tokio::test]
async fn checks_permission_before_cache() {
    let mut test = TestBuilder::new().with_session_store().build().await.unwrap();
    let store = test.session_store().await.unwrap();
    let cache = cache_with(&[]);

    let session_id = SessionFactory::new(store)
        .user_id("42")
        .server(fixture::session::member_server("1"))
        .build()
        .await
        .unwrap();

    let result = GuildAccessGuard::new(store, &cache)
        .require(&user("42", &session_id), "1", &[Permission::ManageGuild])
        .await;

    assert_eq!(sentinel_of(result), Sentinel::NoPermissions);
}

/// Tests a guild the bot left after the session snapshot was taken.
///
/// Expected: err-server-not-found
#[tokio::test]
async fn rejects_guild_missing_from_cache() {
    let mut test = TestBuilder::new().with_session_store().build().await.unwrap();
    let store = test.session_store().await.unwrap();
    let cache = cache_with(&[]);

    let session_id = SessionFactory::new(store)
        .user_id("42")
        .server(fixture::session::managed_server("123"))
        .build()
        .await
        .unwrap();

    let result = GuildAccessGuard::new(store, &cache)
        .require(&user("42", &session_id), "123", &[Permission::ManageGuild])
        .await;

    assert_eq!(sentinel_of(result), Sentinel::ServerNotFound);
}

/// Tests that a snapshot entry with a non-numeric ID can never match a cached guild.
///
/// Expected: err-server-not-found
#[tokio::test]
async fn rejects_non_numeric_guild_id() {
    let mut test = TestBuilder::new().with_session_store().build().await.unwrap();
    let store = test.session_store().await.unwrap();
    let cache = cache_with(&[123]);

    let session_id = SessionFactory::new(store)
        .user_id("42")
        .server(fixture::session::managed_server("guild"))
        .build()
        .await
        .unwrap();

    let result = GuildAccessGuard::new(store, &cache)
        .require(&user("42", &session_id), "guild", &[Permission::ManageGuild])
        .await;

    assert_eq!(sentinel_of(result), Sentinel::ServerNotFound);
}

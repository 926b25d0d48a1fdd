use super::*;

/// Tests matching on user name and nickname, case-insensitively.
///
/// Expected: bob matched through his nickname, alice through her name
#[test]
fn matches_names_and_nicknames() -> Result<(), AppError> {
    let cache = cache_of(vec![guild()]);
    let service = SearchService::new(&cache);

    let options = service.users(100, "MODERATOR")?;
    assert_eq!(labels(&options), vec!["bob"]);
    assert_eq!(options[0].id, 21);

    let options = service.users(100, "Li")?;
    assert_eq!(labels(&options), vec!["alice"]);

    Ok(())
}

/// Tests that results are sorted by label and capped.
///
/// Expected: 25 entries in label order
#[test]
fn sorts_and_caps_results() -> Result<(), AppError> {
    let mut builder = TestGuildBuilder::new(100, "Big Guild");
    for i in 0..40u64 {
        builder = builder.member(1000 + i, &format!("user{:02}", 39 - i), None);
    }
    let cache = cache_of(vec![builder.build()]);

    let options = SearchService::new(&cache).users(100, "user")?;

    assert_eq!(options.len(), 25);
    assert_eq!(options[0].label, "user00");
    assert_eq!(options[24].label, "user24");

    Ok(())
}

/// Tests searching a guild the bot is not on.
///
/// Expected: err-server-not-found
#[test]
fn rejects_uncached_guild() {
    let cache = cache_of(vec![guild()]);

    match SearchService::new(&cache).users(101, "a") {
        Err(AppError::DashboardErr(err)) => assert_eq!(err.sentinel(), Sentinel::ServerNotFound),
        other => panic!("expected server not found, got {:?}", other),
    }
}

use super::*;
use test_utils::serenity::create_test_guild;

/// Tests that only guilds the bot is on are kept, in input order.
///
/// Expected: the intersection with the cache, ordered like the input
#[tokio::test]
async fn keeps_cached_guilds_in_input_order() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = cache_of(vec![
        create_test_guild(1, "One", None),
        create_test_guild(3, "Three", None),
    ]);

    let servers = ServerService::new(db, &cache).list(vec![
        "3".to_string(),
        "2".to_string(),
        "1".to_string(),
    ]);

    assert_eq!(servers, vec!["3".to_string(), "1".to_string()]);
}

/// Tests that an empty input and garbage IDs produce an empty list.
///
/// Expected: empty list
#[tokio::test]
async fn drops_unknown_and_malformed_ids() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = cache_of(vec![create_test_guild(1, "One", None)]);
    let service = ServerService::new(db, &cache);

    assert!(service.list(Vec::new()).is_empty());
    assert!(service
        .list(vec!["one".to_string(), "".to_string(), "01x".to_string()])
        .is_empty());
}

use super::*;

/// Tests reading a guild with a stored config.
///
/// Expected: config from the store, info from the cache
#[tokio::test]
async fn returns_config_and_live_info() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = TestGuildBuilder::new(123, "Cached Guild")
        .member_count(42)
        .owner_id(7)
        .role(123, "@everyone")
        .text_channel(1, "general")
        .build();
    let cache = cache_of(vec![guild]);

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("123")
        .prefix("?")
        .build()
        .await?;

    let (config, info) = ServerService::new(db, &cache).info(123).await?;

    assert_eq!(config.guild_id, 123);
    assert_eq!(config.prefix, "?");
    assert_eq!(info.guild_id, 123);
    assert_eq!(info.name, "Cached Guild");
    assert_eq!(info.member_count, 42);
    assert_eq!(info.owner_id, 7);
    assert_eq!(info.channel_count, 1);
    assert_eq!(info.role_count, 1);

    Ok(())
}

/// Tests a cached guild without a stored config.
///
/// Expected: err-server-not-found
#[tokio::test]
async fn rejects_guild_without_config() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = cache_of(vec![TestGuildBuilder::new(123, "Guild").build()]);

    let result = ServerService::new(db, &cache).info(123).await;

    assert_eq!(sentinel_of(result), Sentinel::ServerNotFound);
}

/// Tests a stored config for a guild the bot is no longer on.
///
/// Expected: err-server-not-found
#[tokio::test]
async fn rejects_guild_missing_from_cache() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = cache_of(Vec::new());

    factory::create_guild_config(db, "123").await.unwrap();

    let result = ServerService::new(db, &cache).info(123).await;

    assert_eq!(sentinel_of(result), Sentinel::ServerNotFound);
}

use super::*;
use test_utils::factory::guild_config::GuildConfigFactory;

/// Tests finding the config of a guild that has one.
///
/// Expected: Ok(Some(config)) with parsed IDs
#[tokio::test]
async fn finds_existing_config() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    GuildConfigFactory::new(db)
        .guild_id("123456789")
        .prefix("?")
        .trusted_users(vec!["11".to_string(), "12".to_string()])
        .mute_role(Some("21".to_string()))
        .mod_log_channel(Some("31".to_string()))
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    let config = repo.find_by_guild_id(123456789).await?.unwrap();

    assert_eq!(config.guild_id, 123456789);
    assert_eq!(config.prefix, "?");
    assert_eq!(config.trusted_users, vec![11, 12]);
    assert_eq!(config.mute_role, Some(21));
    assert_eq!(config.join_log_channel, None);
    assert_eq!(config.mod_log_channel, Some(31));

    Ok(())
}

/// Tests finding the config of a guild without one.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_guild_config(db, "1").await?;

    let repo = GuildConfigRepository::new(db);
    let result = repo.find_by_guild_id(2).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that a corrupt stored ID surfaces as an error instead of a partial config.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_corrupt_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    GuildConfigFactory::new(db)
        .guild_id("5")
        .join_log_channel(Some("general".to_string()))
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    let result = repo.find_by_guild_id(5).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}

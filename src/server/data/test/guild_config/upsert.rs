use super::*;

/// Tests that upserting a guild without a config inserts a row.
///
/// Expected: Ok with the stored config and one row in the table
#[tokio::test]
async fn inserts_new_config() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut config = GuildConfigParam::default_for(777);
    config.prefix = "$".to_string();
    config.trusted_users = vec![1, 2];

    let repo = GuildConfigRepository::new(db);
    let stored = repo.upsert(&config).await?;

    assert_eq!(stored, config);
    assert_eq!(entity::prelude::GuildConfig::find().count(db).await?, 1);

    Ok(())
}

/// Tests that upserting an existing guild overwrites every column in place.
///
/// Expected: Ok with the new values, still one row, same primary key
#[tokio::test]
async fn replaces_existing_config() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("777")
        .mute_role(Some("9".to_string()))
        .build()
        .await?;

    let mut config = GuildConfigParam::default_for(777);
    config.prefix = ">".to_string();
    config.exit_log_channel = Some(44);

    let repo = GuildConfigRepository::new(db);
    let stored = repo.upsert(&config).await?;

    assert_eq!(stored, config);
    assert_eq!(stored.mute_role, None);

    let rows = entity::prelude::GuildConfig::find().all(db).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, existing.id);
    assert_eq!(rows[0].prefix, ">");

    Ok(())
}

/// Tests that upserts only touch the targeted guild.
///
/// Expected: other guild's config unchanged
#[tokio::test]
async fn leaves_other_guilds_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("1")
        .prefix("%")
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    let mut config = GuildConfigParam::default_for(2);
    config.prefix = "&".to_string();
    repo.upsert(&config).await?;

    let other = repo.find_by_guild_id(1).await?.unwrap();
    assert_eq!(other.prefix, "%");

    Ok(())
}

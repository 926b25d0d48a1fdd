use super::*;

/// Tests seeding a default config for a guild without one.
///
/// Expected: Ok(true) and a config with the default prefix
#[tokio::test]
async fn creates_default_config() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    let created = repo.create_default_if_missing(55).await?;

    assert!(created);
    assert_eq!(
        repo.find_by_guild_id(55).await?,
        Some(GuildConfigParam::default_for(55))
    );

    Ok(())
}

/// Tests that an existing config is never reset.
///
/// Expected: Ok(false) and the stored prefix unchanged
#[tokio::test]
async fn keeps_existing_config() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("55")
        .prefix("?")
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    let created = repo.create_default_if_missing(55).await?;

    assert!(!created);
    assert_eq!(repo.find_by_guild_id(55).await?.unwrap().prefix, "?");
    assert_eq!(entity::prelude::GuildConfig::find().count(db).await?, 1);

    Ok(())
}

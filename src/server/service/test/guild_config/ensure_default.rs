use super::*;

/// Tests that seeding creates the default config once.
///
/// Expected: one row with the default prefix after two calls
#[tokio::test]
async fn seeds_default_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GuildConfigService::new(db);
    service.ensure_default(99).await?;
    service.ensure_default(99).await?;

    assert_eq!(entity::prelude::GuildConfig::find().count(db).await?, 1);
    assert_eq!(
        service.get(99).await?,
        Some(GuildConfigParam::default_for(99))
    );

    Ok(())
}

/// Tests that seeding never overwrites a saved config.
///
/// Expected: stored prefix kept
#[tokio::test]
async fn keeps_saved_config() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("99")
        .prefix(">>")
        .build()
        .await?;

    let service = GuildConfigService::new(db);
    service.ensure_default(99).await?;

    assert_eq!(service.get(99).await?.unwrap().prefix, ">>");

    Ok(())
}

use super::*;
use serde_json::json;

/// Tests that a save replaces only the sections named by the patch.
///
/// Expected: patched prefix, untouched trusted users and mute role
#[tokio::test]
async fn replaces_named_sections() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("10")
        .trusted_users(vec!["1".to_string()])
        .mute_role(Some("2".to_string()))
        .build()
        .await?;

    let patch = GuildConfigPatchParam::from_value(&json!({ "Prefix": "?" }))?;
    let stored = GuildConfigService::new(db).save(10, patch).await?;

    assert_eq!(stored.prefix, "?");
    assert_eq!(stored.trusted_users, vec![1]);
    assert_eq!(stored.mute_role, Some(2));

    Ok(())
}

/// Tests saving for a guild whose config has not been seeded yet.
///
/// Expected: the patch applied over the defaults
#[tokio::test]
async fn patches_defaults_when_missing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let patch = GuildConfigPatchParam::from_value(&json!({
        "Channels": { "JoinLog": "5", "ExitLog": "6", "ModLog": null },
    }))?;
    let stored = GuildConfigService::new(db).save(10, patch).await?;

    let mut expected = GuildConfigParam::default_for(10);
    expected.join_log_channel = Some(5);
    expected.exit_log_channel = Some(6);
    assert_eq!(stored, expected);

    Ok(())
}

/// Tests that a failing write surfaces as the save failure sentinel.
///
/// The config table is missing, so both the read and the write fail; the read happens
/// first and is reported as an internal error.
///
/// Expected: err-internal-error
#[tokio::test]
async fn reports_unreadable_store_as_internal() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GuildConfigService::new(db)
        .save(10, GuildConfigPatchParam::default())
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
}

/// Tests a config store that rejects writes while reads still succeed.
///
/// Expected: err-save-failed and the stored config unchanged
#[tokio::test]
async fn reports_rejected_write_as_save_failed() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("10")
        .build()
        .await?;

    db.execute_unprepared(
        "CREATE TRIGGER reject_writes BEFORE UPDATE ON guild_config \
         BEGIN SELECT RAISE(ABORT, 'read only'); END;",
    )
    .await?;

    let patch = GuildConfigPatchParam::from_value(&json!({ "Prefix": "?" }))?;
    let result = GuildConfigService::new(db).save(10, patch).await;

    match result {
        Err(AppError::DashboardErr(err)) => assert_eq!(err.sentinel(), Sentinel::SaveFailed),
        other => panic!("expected save failure, got {:?}", other),
    }

    let stored = GuildConfigService::new(db).get(10).await?.unwrap();
    assert_eq!(stored.prefix, "!");

    Ok(())
}

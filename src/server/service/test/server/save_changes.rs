use super::*;
use serde_json::json;

/// Tests that a save persists and returns the stored document.
///
/// Expected: patched config, readable through `info` afterwards
#[tokio::test]
async fn persists_patch() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = cache_of(vec![TestGuildBuilder::new(123, "Guild").build()]);

    factory::create_guild_config(db, "123").await?;

    let service = ServerService::new(db, &cache);
    let patch = GuildConfigPatchParam::from_value(&json!({
        "Users": { "Trusted": ["5", "6"] },
        "Roles": { "MuteRole": "7" },
    }))?;
    let stored = service.save_changes(123, patch).await?;

    assert_eq!(stored.trusted_users, vec![5, 6]);
    assert_eq!(stored.mute_role, Some(7));
    assert_eq!(stored.prefix, "!");

    let (config, _) = service.info(123).await?;
    assert_eq!(config, stored);

    Ok(())
}

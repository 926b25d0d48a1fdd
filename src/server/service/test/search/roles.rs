use super::*;

/// Tests role search by name with `@everyone` excluded.
///
/// Expected: matching roles in label order
#[test]
fn matches_roles_without_everyone() -> Result<(), AppError> {
    let cache = cache_of(vec![guild()]);
    let service = SearchService::new(&cache);

    let options = service.roles(100, "m")?;
    assert_eq!(labels(&options), vec!["Admin", "Moderator", "Muted"]);

    let options = service.roles(100, "every")?;
    assert!(options.is_empty());

    Ok(())
}

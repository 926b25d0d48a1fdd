use super::*;

/// Tests resolving trusted user IDs into options.
///
/// Expected: known members resolved, unknown and malformed IDs skipped
#[test]
fn resolves_known_members() -> Result<(), AppError> {
    let cache = cache_of(vec![guild()]);

    let options = SearchService::new(&cache).resolve_users(
        100,
        &[
            "22".to_string(),
            "20".to_string(),
            "999".to_string(),
            "abc".to_string(),
        ],
    )?;

    assert_eq!(labels(&options), vec!["alice", "carol"]);

    Ok(())
}

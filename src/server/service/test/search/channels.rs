use super::*;

/// Tests channel search returns text channels labelled with `#`.
///
/// Expected: the voice channel is skipped
#[test]
fn matches_text_channels_only() -> Result<(), AppError> {
    let cache = cache_of(vec![guild()]);
    let service = SearchService::new(&cache);

    let options = service.channels(100, "mod")?;
    assert_eq!(labels(&options), vec!["#mod-log"]);
    assert_eq!(options[0].id, 10);

    let options = service.channels(100, "#LOG")?;
    assert_eq!(labels(&options), vec!["#join-log", "#mod-log"]);

    Ok(())
}

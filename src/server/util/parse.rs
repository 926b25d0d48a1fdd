/// Parses a Discord snowflake supplied by a client.
///
/// The value is untrusted input, so a failure is returned as `None` and the caller picks
/// the matching rejection.
pub fn parse_snowflake(value: &str) -> Option<u64> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    value.parse::<u64>().ok().filter(|id| *id != 0)
}

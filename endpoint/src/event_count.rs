use log::*;

/// Event limit used when the client does not supply a usable `max_count`.
pub const DEFAULT_MAX_COUNT: usize = 3600;

/// Resolves the raw `max_count` query value into an effective event limit.
///
/// Absent, empty, non-numeric, zero, and negative values all normalize to
/// [`DEFAULT_MAX_COUNT`]. A bad value is a client mistake we tolerate, not an
/// error we surface, so it is only logged at debug level.
pub fn resolve(raw: Option<&str>) -> usize {
    let Some(raw) = raw else {
        return DEFAULT_MAX_COUNT;
    };

    match raw.parse::<i64>() {
        Ok(count) if count > 0 => count as usize,
        Ok(_) | Err(_) => {
            debug!("Invalid max_count parameter: {raw:?}");
            DEFAULT_MAX_COUNT
        }
    }
}

//! Storage key layout.

pub const LAST_VISIT_DATE: &str = "last_visit_date";
pub const STREAK_COUNT: &str = "streak_count";
pub const ADHKAR_STREAK_STATE: &str = "adhkar_streak_state";
pub const SCHEMA_VERSION: &str = "schema_version";

/// Pre-versioning adhkar keys, read only by the migration.
pub const LEGACY_ADHKAR_STREAK: &str = "adhkar_streak";
pub const LEGACY_ADHKAR_DATE: &str = "last_adhkar_date";

pub const FAVORITES_PREFIX: &str = "favorites/";
pub const HISTORY_PREFIX: &str = "history/";

const TALLY_PREFIX: &str = "ihsan_tasbeeh_";

pub fn tally_key(domain: &str) -> String {
    format!("{TALLY_PREFIX}{domain}")
}

pub fn favorite_key(id: &str) -> String {
    format!("{FAVORITES_PREFIX}{id}")
}

pub fn history_key(id: &str) -> String {
    format!("{HISTORY_PREFIX}{id}")
}

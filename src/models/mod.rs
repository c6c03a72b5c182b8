mod content;
mod engagement;

pub use content::{AdhkarItem, AdhkarTime, ContentItem, ContentType};
pub use engagement::{
    HistoryRecord, StreakChange, StreakState, TallyRecord, TallyStats, VisitOutcome,
};

use serde::{Deserialize, Deserializer};

/// Content ids from remote sources may be numbers; stored as strings.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Signed(i64),
        Unsigned(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Signed(n) => n.to_string(),
        RawId::Unsigned(n) => n.to_string(),
    })
}

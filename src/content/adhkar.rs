//! Parsing of the morning/evening adhkar resource.

use serde::Deserialize;
use tracing::warn;

use crate::models::{AdhkarItem, AdhkarTime, ContentItem, ContentType};

/// Resource marker: recited both morning and evening.
const TYPE_BOTH: u8 = 0;
const TYPE_MORNING: u8 = 1;
const TYPE_EVENING: u8 = 2;

#[derive(Debug, Deserialize)]
struct RawAdhkar {
    order: u32,
    #[serde(rename = "type")]
    kind: u8,
    #[serde(default)]
    count: Option<u32>,
    #[serde(default)]
    content: String,
    #[serde(default)]
    translation: String,
    #[serde(default)]
    transliteration: Option<String>,
    #[serde(default)]
    source: String,
    #[serde(default)]
    fadl: Option<String>,
    #[serde(default)]
    audio: Option<String>,
}

impl RawAdhkar {
    fn recited_in(&self, time: AdhkarTime) -> bool {
        match time {
            AdhkarTime::Morning => matches!(self.kind, TYPE_BOTH | TYPE_MORNING),
            AdhkarTime::Evening => matches!(self.kind, TYPE_BOTH | TYPE_EVENING),
            AdhkarTime::Both => true,
        }
    }

    fn into_item(self, time: AdhkarTime) -> AdhkarItem {
        let mut item = ContentItem::new(
            format!("adhkar-{}", self.order),
            ContentType::Adhkar,
            self.content,
            self.translation,
            "",
            self.source,
        );
        item.audio_url = self.audio.filter(|url| !url.is_empty());
        AdhkarItem {
            item,
            // a zero or missing count still means one recitation
            target_count: self.count.filter(|&c| c > 0).unwrap_or(1),
            time,
            benefit: self.fadl.filter(|s| !s.is_empty()),
            transliteration: self.transliteration.filter(|s| !s.is_empty()),
        }
    }
}

/// Suggested session for a local hour of day.
pub fn suggested_time(hour: u32) -> AdhkarTime {
    AdhkarTime::suggested_for_hour(hour)
}

/// Entries of `json` recited at `time`, in resource order.
///
/// Malformed JSON yields an empty list.
pub fn adhkar_for(time: AdhkarTime, json: &str) -> Vec<AdhkarItem> {
    let raw: Vec<RawAdhkar> = match serde_json::from_str(json) {
        Ok(raw) => raw,
        Err(e) => {
            warn!(error = %e, "Unreadable adhkar resource");
            return Vec::new();
        }
    };
    raw.into_iter()
        .filter(|entry| entry.recited_in(time))
        .map(|entry| entry.into_item(time))
        .collect()
}

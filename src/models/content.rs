//! Content items shown on reminder cards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of reminder content. Serialized with the label shown on the card badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    #[serde(rename = "Quran")]
    Quran,
    #[serde(rename = "Hadith")]
    Hadith,
    #[serde(rename = "Dua")]
    Dua,
    #[serde(rename = "99 Names")]
    NamesOfAllah,
    #[serde(rename = "Adhkar")]
    Adhkar,
    #[serde(rename = "Tasbeeh")]
    Tasbeeh,
}

impl ContentType {
    /// Every content type, in tab order.
    pub const ALL: [ContentType; 6] = [
        ContentType::Quran,
        ContentType::Hadith,
        ContentType::Dua,
        ContentType::NamesOfAllah,
        ContentType::Adhkar,
        ContentType::Tasbeeh,
    ];

    /// Badge label for this type.
    pub fn label(&self) -> &'static str {
        match self {
            ContentType::Quran => "Quran",
            ContentType::Hadith => "Hadith",
            ContentType::Dua => "Dua",
            ContentType::NamesOfAllah => "99 Names",
            ContentType::Adhkar => "Adhkar",
            ContentType::Tasbeeh => "Tasbeeh",
        }
    }

    /// Counter-style types are driven by their own views and never enter
    /// the viewing history.
    pub fn is_counter(&self) -> bool {
        matches!(self, ContentType::Adhkar | ContentType::Tasbeeh)
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single reminder: verse, saying, supplication, name or phrase.
///
/// Immutable once fetched or generated; identity is `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    #[serde(deserialize_with = "super::deserialize_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub arabic_text: String,
    pub english_translation: String,
    /// Second translation line (Urdu in the stock content).
    #[serde(alias = "urduTranslation")]
    pub secondary_translation: String,
    pub reference: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ContentItem {
    pub fn new(
        id: impl Into<String>,
        content_type: ContentType,
        arabic_text: impl Into<String>,
        english_translation: impl Into<String>,
        secondary_translation: impl Into<String>,
        reference: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            content_type,
            arabic_text: arabic_text.into(),
            english_translation: english_translation.into(),
            secondary_translation: secondary_translation.into(),
            reference: reference.into(),
            audio_url: None,
            tags: Vec::new(),
            description: None,
        }
    }

    pub fn with_audio_url(mut self, url: impl Into<String>) -> Self {
        self.audio_url = Some(url.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Check whether this item carries the given feeling tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Which part of the day an adhkar entry is recited in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdhkarTime {
    Morning,
    Evening,
    Both,
}

impl AdhkarTime {
    /// Suggested recitation time for a local hour of day.
    ///
    /// Evening runs from 18:00 until 05:00.
    pub fn suggested_for_hour(hour: u32) -> AdhkarTime {
        if hour >= 18 || hour < 5 {
            AdhkarTime::Evening
        } else {
            AdhkarTime::Morning
        }
    }
}

/// An adhkar entry: content plus how many times it is repeated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdhkarItem {
    #[serde(flatten)]
    pub item: ContentItem,
    pub target_count: u32,
    pub time: AdhkarTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transliteration: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_id_is_read_as_string() {
        let json = r#"{"id":286,"type":"Quran","arabicText":"a","englishTranslation":"b","secondaryTranslation":"c","reference":"2:286"}"#;
        let item: ContentItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, "286");
    }

    #[test]
    fn test_content_type_serializes_as_badge_label() {
        let json = serde_json::to_string(&ContentType::NamesOfAllah).unwrap();
        assert_eq!(json, "\"99 Names\"");
        let parsed: ContentType = serde_json::from_str("\"Hadith\"").unwrap();
        assert_eq!(parsed, ContentType::Hadith);
    }

    #[test]
    fn test_counter_types() {
        assert!(ContentType::Adhkar.is_counter());
        assert!(ContentType::Tasbeeh.is_counter());
        assert!(!ContentType::Quran.is_counter());
        assert!(!ContentType::NamesOfAllah.is_counter());
    }

    #[test]
    fn test_content_item_json_shape() {
        let item = ContentItem::new("d1", ContentType::Dua, "ar", "en", "ur", "Taha 20:25")
            .with_tags(["Anxious"]);
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["type"], "Dua");
        assert_eq!(value["englishTranslation"], "en");
        assert_eq!(value["secondaryTranslation"], "ur");
        assert!(value.get("audioUrl").is_none());
        assert_eq!(value["tags"][0], "Anxious");
    }

    #[test]
    fn test_content_item_accepts_legacy_translation_field() {
        let json = r#"{
            "id": "q-1",
            "type": "Quran",
            "arabicText": "ar",
            "englishTranslation": "en",
            "urduTranslation": "ur",
            "reference": "Al-Fatiha 1:1"
        }"#;
        let item: ContentItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.secondary_translation, "ur");
        assert!(item.tags.is_empty());
    }

    #[test]
    fn test_suggested_adhkar_time() {
        assert_eq!(AdhkarTime::suggested_for_hour(4), AdhkarTime::Evening);
        assert_eq!(AdhkarTime::suggested_for_hour(5), AdhkarTime::Morning);
        assert_eq!(AdhkarTime::suggested_for_hour(17), AdhkarTime::Morning);
        assert_eq!(AdhkarTime::suggested_for_hour(18), AdhkarTime::Evening);
        assert_eq!(AdhkarTime::suggested_for_hour(23), AdhkarTime::Evening);
    }

    #[test]
    fn test_has_tag() {
        let item = ContentItem::new("d1", ContentType::Dua, "", "", "", "")
            .with_tags(["Exam", "Stress"]);
        assert!(item.has_tag("Exam"));
        assert!(!item.has_tag("exam"));
    }
}

//! Tasbeeh phrases. Each phrase id is its own tally domain.

use serde::Serialize;

use crate::models::{ContentItem, ContentType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TasbeehPhrase {
    pub id: &'static str,
    pub label: &'static str,
    pub arabic: &'static str,
    pub transliteration: &'static str,
    pub meaning: &'static str,
}

impl TasbeehPhrase {
    pub fn to_item(&self) -> ContentItem {
        ContentItem::new(
            format!("tasbeeh-{}", self.id),
            ContentType::Tasbeeh,
            self.arabic,
            self.meaning,
            self.transliteration,
            self.label,
        )
    }
}

pub const TASBEEH_PHRASES: [TasbeehPhrase; 6] = [
    TasbeehPhrase {
        id: "subhanallah",
        label: "SubhanAllah",
        arabic: "سُبْحَانَ ٱللَّٰهِ",
        transliteration: "SubhanAllah",
        meaning: "Glory be to Allah",
    },
    TasbeehPhrase {
        id: "alhamdulillah",
        label: "Alhamdulillah",
        arabic: "ٱلْحَمْدُ لِلَّٰهِ",
        transliteration: "Alhamdulillah",
        meaning: "All praise is due to Allah",
    },
    TasbeehPhrase {
        id: "allahuakbar",
        label: "Allahu Akbar",
        arabic: "ٱللَّٰهُ أَكْبَرُ",
        transliteration: "Allahu Akbar",
        meaning: "Allah is the Greatest",
    },
    TasbeehPhrase {
        id: "lailahaillallah",
        label: "La ilaha illallah",
        arabic: "لَا إِلَٰهَ إِلَّا ٱللَّٰهُ",
        transliteration: "La ilaha illallah",
        meaning: "There is no god but Allah",
    },
    TasbeehPhrase {
        id: "astaghfirullah",
        label: "Astaghfirullah",
        arabic: "أَسْتَغْفِرُ ٱللَّٰهَ",
        transliteration: "Astaghfirullah",
        meaning: "I seek forgiveness from Allah",
    },
    TasbeehPhrase {
        id: "salawat",
        label: "Salawat",
        arabic: "ٱللَّٰهُمَّ صَلِّ عَلَىٰ مُحَمَّدٍ",
        transliteration: "Allahumma salli 'ala Muhammad",
        meaning: "Blessings upon Muhammad",
    },
];

/// Phrase by id, case-insensitive.
pub fn tasbeeh_phrase(id: &str) -> Option<&'static TasbeehPhrase> {
    TASBEEH_PHRASES
        .iter()
        .find(|phrase| phrase.id.eq_ignore_ascii_case(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(tasbeeh_phrase("salawat").map(|p| p.label), Some("Salawat"));
        assert_eq!(tasbeeh_phrase("SubhanAllah").map(|p| p.id), Some("subhanallah"));
        assert!(tasbeeh_phrase("unknown").is_none());
    }

    #[test]
    fn test_phrase_as_item_is_counter_type() {
        let item = TASBEEH_PHRASES[0].to_item();
        assert!(item.content_type.is_counter());
        assert_eq!(item.english_translation, "Glory be to Allah");
    }
}

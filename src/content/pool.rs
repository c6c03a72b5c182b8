//! Local content pools and reflection picking.

use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use super::names::NAME_ITEMS;
use crate::models::{ContentItem, ContentType};
use crate::traits::ContentSource;

/// Feeling filter meaning "no filter".
pub const ALL_FEELINGS: &str = "All";

/// Feeling chips offered on the Dua tab, with their emoji.
pub const FEELINGS: [(&str, &str); 10] = [
    (ALL_FEELINGS, "✨"),
    ("Anxious", "🌧️"),
    ("Sad", "💔"),
    ("Happy", "☀️"),
    ("Grateful", "🤲"),
    ("Lost", "🧭"),
    ("Travel", "✈️"),
    ("Morning", "🌅"),
    ("Family", "🏡"),
    ("Stress", "⚡"),
];

/// Bundled supplications.
pub static DUAS: Lazy<Vec<ContentItem>> = Lazy::new(|| {
    vec![
        ContentItem::new(
            "d1",
            ContentType::Dua,
            "رَبِّ اشْرَحْ لِي صَدْرِي وَيَسِّرْ لِي أَمْرِي",
            "My Lord, expand for me my breast [with assurance] and ease for me my task.",
            "اے میرے رب! میرا سینہ کھول دے اور میرا کام آسان کر دے۔",
            "Surah Taha 20:25-26",
        )
        .with_tags(["Anxious", "Exam", "Stress", "Public Speaking"]),
        ContentItem::new(
            "d2",
            ContentType::Dua,
            "رَبَّنَا آتِنَا فِي الدُّنْيَا حَسَنَةً وَفِي الآخِرَةِ حَسَنَةً وَقِنَا عَذَابَ النَّارِ",
            "Our Lord! Give us in this world that which is good and in the Hereafter that which is good, and save us from the torment of the Fire.",
            "اے ہمارے رب! ہمیں دنیا میں بھی بھلائی دے اور آخرت میں بھی بھلائی عطا فرما اور ہمیں آگ کے عذاب سے بچا۔",
            "Surah Al-Baqarah 2:201",
        )
        .with_tags(["General", "Happy", "Grateful"]),
    ]
});

/// Local items of one type. Remote-only and counter types have none.
pub fn content_by_type(content_type: ContentType) -> &'static [ContentItem] {
    match content_type {
        ContentType::NamesOfAllah => NAME_ITEMS.as_slice(),
        ContentType::Dua => DUAS.as_slice(),
        _ => &[],
    }
}

/// Duas carrying `tag`.
pub fn duas_by_tag(tag: &str) -> Vec<&'static ContentItem> {
    DUAS.iter().filter(|item| item.has_tag(tag)).collect()
}

/// Look up a bundled item by id.
pub fn find_local(id: &str) -> Option<&'static ContentItem> {
    NAME_ITEMS.iter().chain(DUAS.iter()).find(|item| item.id == id)
}

/// Names whose transliteration contains `query` (case-insensitive) or
/// whose Arabic contains it verbatim. An empty query matches everything.
pub fn search_names(query: &str) -> Vec<&'static ContentItem> {
    let needle = query.to_lowercase();
    NAME_ITEMS
        .iter()
        .filter(|item| {
            item.english_translation.to_lowercase().contains(&needle)
                || item.arabic_text.contains(query)
        })
        .collect()
}

/// Pick a local item of `content_type`.
///
/// For duas with a feeling other than [`ALL_FEELINGS`], the tagged pool is
/// used when non-empty, else the whole type pool.
pub fn pick_reflection<R: Rng + ?Sized>(
    content_type: ContentType,
    feeling: Option<&str>,
    rng: &mut R,
) -> Option<&'static ContentItem> {
    let tagged = match (content_type, feeling) {
        (ContentType::Dua, Some(tag)) if tag != ALL_FEELINGS => duas_by_tag(tag),
        _ => Vec::new(),
    };
    if !tagged.is_empty() {
        return tagged.choose(rng).copied();
    }
    let pool = content_by_type(content_type);
    match pool {
        [only] => Some(only),
        _ => pool.choose(rng),
    }
}

fn pick_local(content_type: ContentType, feeling: Option<&str>) -> Option<ContentItem> {
    pick_reflection(content_type, feeling, &mut rand::thread_rng()).cloned()
}

/// Next reminder for a tab: remote for Quran and Hadith, local otherwise.
///
/// `None` means keep showing the current card (failed fetch, counter tab,
/// empty pool).
pub async fn next_reflection(
    source: &dyn ContentSource,
    content_type: ContentType,
    feeling: Option<&str>,
) -> Option<ContentItem> {
    let item = match content_type {
        ContentType::Quran => source.random_verse().await,
        ContentType::Hadith => source.random_hadith().await,
        ContentType::Adhkar | ContentType::Tasbeeh => return None,
        _ => pick_local(content_type, feeling),
    };
    if item.is_none() {
        debug!(%content_type, "No new reflection; keeping current card");
    }
    item
}

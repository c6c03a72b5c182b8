//! Reminder card document tree.
//!
//! A [`CardNode`] is the renderable fragment handed to a rasterizer. The
//! host's renderer owns styling; this tree carries structure, text and the
//! attributes the pipeline cares about (notably the exclusion marker).

use std::collections::BTreeMap;

use crate::models::{ContentItem, ContentType};

/// Attribute marking nodes that must not appear in a capture.
pub const DEFAULT_EXCLUDE_MARKER: &str = "data-html2canvas-ignore";

/// Watermark printed at the bottom of every card.
pub const WATERMARK: &str = "Ihsan App | Daily Reminder";

/// One element of a card: tag, attributes, optional text and children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardNode {
    pub tag: String,
    pub attributes: BTreeMap<String, String>,
    pub text: Option<String>,
    pub children: Vec<CardNode>,
}

impl CardNode {
    pub fn element(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Element holding a run of text.
    pub fn text(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_class(self, class: &str) -> Self {
        self.with_attr("class", class)
    }

    pub fn with_child(mut self, child: CardNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = CardNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Mark this node as left out of captures.
    pub fn excluded(self, marker: &str) -> Self {
        self.with_attr(marker, "true")
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Build the reminder card layout for `item`, marking interactive
    /// controls with [`DEFAULT_EXCLUDE_MARKER`].
    pub fn reminder_card(item: &ContentItem) -> Self {
        Self::reminder_card_marked(item, DEFAULT_EXCLUDE_MARKER)
    }

    /// Build the reminder card layout, marking controls with `marker`.
    pub fn reminder_card_marked(item: &ContentItem, marker: &str) -> Self {
        let is_name = item.content_type == ContentType::NamesOfAllah;

        let actions = CardNode::element("div").with_class("actions").with_child(
            CardNode::text("button", "♥")
                .with_class("favorite")
                .excluded(marker),
        );

        let mut arabic = CardNode::element("div")
            .with_class("arabic")
            .with_attr("dir", "rtl")
            .with_child(CardNode::text("p", item.arabic_text.clone()));
        if let Some(url) = &item.audio_url {
            arabic = arabic.with_child(
                CardNode::text("button", "Play Recitation")
                    .with_class("audio")
                    .with_attr("data-src", url.clone())
                    .excluded(marker),
            );
        }

        let mut body = CardNode::element("div").with_class("content");
        if !is_name {
            body = body.with_child(
                CardNode::text("span", item.content_type.label()).with_class("badge"),
            );
        }
        body = body
            .with_child(arabic)
            .with_child(
                CardNode::element("div")
                    .with_class("secondary")
                    .with_attr("dir", "rtl")
                    .with_child(CardNode::text("p", item.secondary_translation.clone())),
            )
            .with_child(
                CardNode::element("div")
                    .with_class("english")
                    .with_child(CardNode::text(
                        "p",
                        format!("\"{}\"", item.english_translation),
                    )),
            );

        if let Some(description) = &item.description {
            body = body.with_child(
                CardNode::element("div")
                    .with_class("description")
                    .with_child(CardNode::text("span", "Benefit & Meaning"))
                    .with_child(CardNode::text("p", description.clone())),
            );
        }

        let mut footer = CardNode::element("div")
            .with_class("footer")
            .with_child(CardNode::text("p", item.reference.clone()));
        if !item.tags.is_empty() {
            footer = footer.with_child(
                CardNode::element("div").with_class("tags").with_children(
                    item.tags
                        .iter()
                        .map(|tag| CardNode::text("span", format!("#{tag}"))),
                ),
            );
        }
        if is_name {
            footer = footer.with_child(
                CardNode::text("button", "View All Names")
                    .with_class("view-list")
                    .excluded(marker),
            );
        }

        body = body
            .with_child(footer)
            .with_child(CardNode::text("p", WATERMARK).with_class("watermark"));

        CardNode::element("div")
            .with_attr("id", "card-capture-area")
            .with_attr("data-content-id", item.id.clone())
            .with_child(actions)
            .with_child(body)
    }

    /// Copy of the tree with every subtree carrying `marker` removed.
    /// The root itself is kept even when marked.
    pub fn without_excluded(&self, marker: &str) -> CardNode {
        CardNode {
            tag: self.tag.clone(),
            attributes: self.attributes.clone(),
            text: self.text.clone(),
            children: self
                .children
                .iter()
                .filter(|child| !child.has_attr(marker))
                .map(|child| child.without_excluded(marker))
                .collect(),
        }
    }

    /// Non-empty text runs in document order, joined by newlines.
    pub fn text_content(&self) -> String {
        let mut runs = Vec::new();
        self.collect_text(&mut runs);
        runs.join("\n")
    }

    fn collect_text<'a>(&'a self, runs: &mut Vec<&'a str>) {
        if let Some(text) = self.text.as_deref().filter(|t| !t.is_empty()) {
            runs.push(text);
        }
        for child in &self.children {
            child.collect_text(runs);
        }
    }

    /// Number of nodes in the tree, root included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(CardNode::node_count).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verse() -> ContentItem {
        ContentItem::new(
            "q-2-286",
            ContentType::Quran,
            "لَا يُكَلِّفُ ٱللَّهُ نَفْسًا إِلَّا وُسْعَهَا",
            "Allah does not burden a soul beyond that it can bear.",
            "اللہ کسی جان پر اس کی طاقت سے زیادہ بوجھ نہیں ڈالتا",
            "Al-Baqarah 2:286",
        )
        .with_audio_url("https://cdn.example/2_286.mp3")
        .with_tags(["Anxious", "Sad"])
    }

    #[test]
    fn test_card_layout_text_order() {
        let card = CardNode::reminder_card(&verse());
        let text = card.without_excluded(DEFAULT_EXCLUDE_MARKER).text_content();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Quran");
        assert_eq!(
            lines[3],
            "\"Allah does not burden a soul beyond that it can bear.\""
        );
        assert!(lines.contains(&"#Anxious"));
        assert_eq!(lines.last(), Some(&WATERMARK));
    }

    #[test]
    fn test_controls_are_pruned() {
        let card = CardNode::reminder_card(&verse());
        let full = card.text_content();
        assert!(full.contains("Play Recitation"));
        assert!(full.contains('♥'));

        let pruned = card.without_excluded(DEFAULT_EXCLUDE_MARKER);
        let text = pruned.text_content();
        assert!(!text.contains("Play Recitation"));
        assert!(!text.contains('♥'));
        assert!(pruned.node_count() < card.node_count());
    }

    #[test]
    fn test_name_card_has_no_badge_and_a_list_button() {
        let name = ContentItem::new("name-1", ContentType::NamesOfAllah, "ٱلرَّحْمَٰنُ", "The Most Gracious", "", "Name #1")
            .with_description("He who wills goodness for all creation.");
        let card = CardNode::reminder_card(&name);
        let text = card.text_content();
        assert!(!text.contains("99 Names"));
        assert!(text.contains("View All Names"));
        assert!(text.contains("Benefit & Meaning"));

        let pruned = card.without_excluded(DEFAULT_EXCLUDE_MARKER).text_content();
        assert!(!pruned.contains("View All Names"));
    }

    #[test]
    fn test_custom_marker() {
        let card = CardNode::reminder_card_marked(&verse(), "data-no-capture");
        let pruned = card.without_excluded("data-no-capture");
        assert!(!pruned.text_content().contains("Play Recitation"));
        // A different marker leaves the controls alone.
        let untouched = card.without_excluded(DEFAULT_EXCLUDE_MARKER);
        assert_eq!(untouched, card);
    }
}

//! Share caption, messaging deep links and file names.

use crate::models::ContentItem;

const MOBILE_SHARE_BASE: &str = "https://wa.me/?text=";
const DESKTOP_SHARE_BASE: &str = "https://web.whatsapp.com/send?text=";

/// Caption copied to the clipboard and attached to shares.
pub fn share_caption(item: &ContentItem, app_url: &str) -> String {
    format!(
        "*Daily Islamic Reminder via Ihsan App*\n\n\"{}\"\n\nRead more at: {}",
        item.english_translation, app_url
    )
}

/// Characters `encodeURIComponent` leaves alone but `urlencoding` escapes.
const UNRESERVED_MARKS: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
];

/// Percent-encode a URI component the way browsers' `encodeURIComponent` does.
pub fn encode_uri_component(value: &str) -> String {
    UNRESERVED_MARKS
        .iter()
        .fold(urlencoding::encode(value).into_owned(), |acc, &(escaped, mark)| {
            acc.replace(escaped, mark)
        })
}

/// Messaging deep link for touch devices.
pub fn mobile_share_link(caption: &str) -> String {
    format!("{}{}", MOBILE_SHARE_BASE, encode_uri_component(caption))
}

/// Messaging web link for desktops.
pub fn desktop_share_link(caption: &str) -> String {
    format!("{}{}", DESKTOP_SHARE_BASE, encode_uri_component(caption))
}

/// `<prefix>-<epoch-millis>.png`
pub fn image_file_name(prefix: &str, epoch_millis: i64) -> String {
    format!("{prefix}-{epoch_millis}.png")
}

//! Bundled reminder content and the adhkar resource parser.
//!
//! Remote verses and sayings come through [`crate::traits::ContentSource`];
//! everything here is static and available offline.

pub mod adhkar;
pub mod names;
pub mod pool;
pub mod tasbeeh;

pub use adhkar::{adhkar_for, suggested_time};
pub use names::{NameEntry, NAMES, NAME_ITEMS};
pub use pool::{
    content_by_type, duas_by_tag, find_local, next_reflection, pick_reflection, search_names,
    ALL_FEELINGS, DUAS, FEELINGS,
};
pub use tasbeeh::{tasbeeh_phrase, TasbeehPhrase, TASBEEH_PHRASES};

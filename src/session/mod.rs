//! Interactive counting sessions backed by the engagement store.

pub mod adhkar;
pub mod tasbeeh;

pub use adhkar::{AdhkarSession, AdhkarTap};
pub use tasbeeh::TasbeehCounter;

//! Ihsan - daily reminders with streaks, tallies and shareable cards
//!
//! This library exposes modules for use in integration tests and hosts.
//!
//! - [`engagement`] keeps visit streaks, tasbeeh tallies, favorites and
//!   history in an injected key-value store.
//! - [`capture`] renders a reminder card to PNG and delivers it through the
//!   best channel the platform offers.
//! - [`facade::Ihsan`] wires both to user-facing notices.

pub mod adapters;
pub mod capture;
pub mod cli;
pub mod config;
pub mod content;
pub mod engagement;
pub mod error;
pub mod facade;
pub mod models;
pub mod session;
pub mod traits;

pub use config::IhsanConfig;
pub use error::{IhsanError, IhsanResult};
pub use facade::Ihsan;

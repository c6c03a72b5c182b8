//! Command handlers for the Ihsan CLI.
//!
//! Each handler builds the production adapters from [`IhsanConfig`] and
//! prints plain text to stdout. Toasts and alerts go through
//! [`LogNotices`].

use chrono::{DateTime, Local, Utc};
use color_eyre::eyre::{eyre, Result, WrapErr};
use std::sync::Arc;

use super::args::{CaptureArgs, CliCommand, USAGE};
use super::version::version_line;
use crate::adapters::{
    ArboardClipboard, DirectoryDownloader, FileStore, LogNotices, NoShareSheet,
    SnapshotRasterizer, SystemBrowser, SystemClock,
};
use crate::capture::{
    CaptureOutcome, CapturePipeline, CaptureServices, CaptureSettings, CardNode, Delivery,
};
use crate::config::IhsanConfig;
use crate::content::{find_local, search_names, tasbeeh_phrase, TasbeehPhrase, DUAS, TASBEEH_PHRASES};
use crate::engagement::EngagementStore;
use crate::facade::Ihsan;
use crate::models::{ContentItem, TallyStats};
use crate::traits::{Clock, NoticeSink, RasterStrategy};

/// Run a parsed command to completion.
pub async fn run_cli_command(command: CliCommand) -> Result<()> {
    match command {
        CliCommand::Version => {
            println!("{}", version_line());
            Ok(())
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            Ok(())
        }
        CliCommand::Invalid(message) => Err(eyre!("{}\n\n{}", message, USAGE)),
        command => {
            let config = IhsanConfig::load().wrap_err("Failed to load configuration")?;
            Session::new(config).run(command).await
        }
    }
}

struct Session {
    config: IhsanConfig,
    clock: Arc<dyn Clock>,
    notices: Arc<dyn NoticeSink>,
    app: Ihsan,
}

impl Session {
    fn new(config: IhsanConfig) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock::new(config.day_boundary));
        let notices: Arc<dyn NoticeSink> = Arc::new(LogNotices::new());
        let store = Arc::new(FileStore::new(config.store_path()));
        let engagement = EngagementStore::from_config(store, clock.clone(), &config);
        let app = Ihsan::new(engagement, notices.clone());
        Self {
            config,
            clock,
            notices,
            app,
        }
    }

    async fn run(self, command: CliCommand) -> Result<()> {
        self.app.engagement().open().await;
        match command {
            CliCommand::Visit => {
                let outcome = self.app.on_startup().await;
                println!("Streak: {}", days(outcome.streak));
            }
            CliCommand::Tally { phrase } => {
                let phrase = find_phrase(&phrase)?;
                let stats = self.app.engagement().increment_tally(phrase.id).await;
                print_stats(phrase, stats);
            }
            CliCommand::Stats { phrase } => {
                let phrase = find_phrase(&phrase)?;
                let stats = self.app.engagement().tally_stats(phrase.id).await;
                print_stats(phrase, stats);
            }
            CliCommand::Favorite { id } => {
                let item = self.lookup(&id).await?;
                self.app.toggle_favorite(&item).await;
            }
            CliCommand::Favorites => {
                let favorites = self.app.engagement().favorites().await;
                if favorites.is_empty() {
                    println!("No favorites yet.");
                }
                for item in favorites {
                    println!("{:<12} {:<28} {}", item.id, item.reference, item.english_translation);
                }
            }
            CliCommand::History => {
                let history = self.app.engagement().history().await;
                if history.is_empty() {
                    println!("Nothing viewed yet.");
                }
                for record in history {
                    println!(
                        "{}  {:<12} {}",
                        format_millis(record.viewed_at),
                        record.item.id,
                        record.item.reference
                    );
                }
            }
            CliCommand::View { id } => {
                let item = self.lookup(&id).await?;
                let favorite = self.app.view(&item).await;
                let card = CardNode::reminder_card_marked(&item, &self.config.exclude_marker)
                    .without_excluded(&self.config.exclude_marker);
                println!("{}", card.text_content());
                if favorite {
                    println!("\n❤️ In your favorites");
                }
            }
            CliCommand::Names { query } => {
                let names = search_names(query.as_deref().unwrap_or(""));
                if names.is_empty() {
                    println!("No names match.");
                }
                for item in names {
                    println!(
                        "{:>3}. {} ({}) - {}",
                        item.id.trim_start_matches("name-"),
                        item.english_translation,
                        item.arabic_text,
                        item.secondary_translation
                    );
                }
            }
            CliCommand::Save(args) => {
                let item = match &args.id {
                    Some(id) => self.lookup(id).await?,
                    None => DUAS
                        .first()
                        .cloned()
                        .ok_or_else(|| eyre!("no bundled content"))?,
                };
                let clipboard = ArboardClipboard::new();
                let outcome = self.pipeline(&args, clipboard)?.save(&item).await;
                report(outcome)?;
            }
            CliCommand::Share(args) => {
                let id = args.id.as_deref().unwrap_or_default();
                let item = self.lookup(id).await?;
                let clipboard = ArboardClipboard::new();
                let outcome = self.pipeline(&args, clipboard.clone())?.share(&item).await;
                if clipboard.is_holding() {
                    eprintln!(
                        "Caption copied. Holding the clipboard for up to {}s so it can be pasted.",
                        clipboard.hold().as_secs()
                    );
                    clipboard.settle().await;
                }
                report(outcome)?;
            }
            CliCommand::Version | CliCommand::Help | CliCommand::Invalid(_) => {}
        }
        Ok(())
    }

    /// Bundled content first, then anything favorited or viewed before.
    async fn lookup(&self, id: &str) -> Result<ContentItem> {
        if let Some(item) = find_local(id) {
            return Ok(item.clone());
        }
        let engagement = self.app.engagement();
        if let Some(item) = engagement.favorites().await.into_iter().find(|i| i.id == id) {
            return Ok(item);
        }
        engagement
            .history()
            .await
            .into_iter()
            .find(|r| r.item.id == id)
            .map(|r| r.item)
            .ok_or_else(|| eyre!("unknown content id '{}'", id))
    }

    fn pipeline(
        &self,
        args: &CaptureArgs,
        clipboard: ArboardClipboard,
    ) -> Result<CapturePipeline> {
        if !args.image.exists() {
            return Err(eyre!("snapshot {} does not exist", args.image.display()));
        }
        let settings =
            CaptureSettings::from_config(&self.config).wrap_err("Invalid capture settings")?;
        let scratch = std::env::temp_dir().join("ihsan");
        let services = CaptureServices {
            capabilities: args.platform.capabilities(),
            foreign_object: Arc::new(SnapshotRasterizer::new(
                &args.image,
                RasterStrategy::ForeignObject,
            )),
            canvas: Arc::new(SnapshotRasterizer::new(&args.image, RasterStrategy::Canvas)),
            share_sheet: Arc::new(NoShareSheet),
            clipboard: Arc::new(clipboard),
            downloader: Arc::new(DirectoryDownloader::new(&self.config.download_dir)),
            browser: Arc::new(SystemBrowser::new(scratch, &settings.background_hex)),
            notices: self.notices.clone(),
            clock: self.clock.clone(),
        };
        Ok(CapturePipeline::new(services, settings))
    }
}

fn find_phrase(id: &str) -> Result<&'static TasbeehPhrase> {
    tasbeeh_phrase(id).ok_or_else(|| {
        let known: Vec<_> = TASBEEH_PHRASES.iter().map(|p| p.id).collect();
        eyre!("unknown phrase '{}' (known: {})", id, known.join(", "))
    })
}

fn print_stats(phrase: &TasbeehPhrase, stats: TallyStats) {
    println!("{} ({})", phrase.label, phrase.arabic);
    println!(
        "today {}  streak {}  month {}",
        stats.today,
        days(stats.streak),
        stats.month
    );
}

fn days(n: u32) -> String {
    if n == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", n)
    }
}

fn format_millis(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "????-??-?? ??:??".to_string())
}

fn report(outcome: CaptureOutcome) -> Result<()> {
    match outcome {
        CaptureOutcome::Done(delivery) => {
            match delivery {
                Delivery::Downloaded { location }
                | Delivery::DownloadedAfterShareFailure { location }
                | Delivery::DownloadedUnsupported { location } => println!("{}", location),
                Delivery::DownloadedWithLink { location, url } => {
                    println!("{}", location);
                    println!("{}", url);
                }
                Delivery::MessagingLink { url } => println!("{}", url),
                Delivery::Shared | Delivery::ImageTab | Delivery::InlineImage => {}
            }
            Ok(())
        }
        CaptureOutcome::Busy | CaptureOutcome::Cancelled => Ok(()),
        CaptureOutcome::Failed => Err(eyre!("capture failed")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_pluralization() {
        assert_eq!(days(0), "0 days");
        assert_eq!(days(1), "1 day");
        assert_eq!(days(12), "12 days");
    }

    #[test]
    fn test_unknown_phrase_lists_known() {
        let err = find_phrase("hello").unwrap_err().to_string();
        assert!(err.contains("subhanallah"));
        assert!(find_phrase("salawat").is_ok());
    }

    #[test]
    fn test_report_failure_is_error() {
        assert!(report(CaptureOutcome::Failed).is_err());
        assert!(report(CaptureOutcome::Cancelled).is_ok());
        assert!(report(CaptureOutcome::Done(Delivery::Shared)).is_ok());
    }

    #[tokio::test]
    async fn test_invalid_command_is_error() {
        let result = run_cli_command(CliCommand::Invalid("nope".to_string())).await;
        assert!(result.is_err());
    }
}

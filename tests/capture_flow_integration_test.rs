// Integration tests for the capture-and-share pipeline.
// Every collaborator is mocked and logs into one shared EventLog so the
// tests can check step order as well as the final delivery.

mod common;

use std::time::Duration;

use common::*;
use ihsan::capture::{
    share_caption, CaptureOutcome, CaptureSettings, CaptureState, CardNode, Delivery, ImageFormat,
    PlatformCapabilities,
};
use ihsan::config::Timeouts;
use ihsan::content::NAME_ITEMS;

#[tokio::test]
async fn test_rasterization_failure_alerts_once_and_delivers_nothing() {
    let rig = CaptureRig::new(PlatformCapabilities::file_share_sheet(true));
    rig.canvas.set_should_fail(Some("tainted canvas"));

    let outcome = rig.pipeline.share(&sample_item()).await;

    assert_eq!(outcome, CaptureOutcome::Failed);
    assert_eq!(rig.log.events(), vec!["clipboard", "rasterize:canvas"]);
    assert_eq!(rig.share_sheet.call_count(), 0);
    assert_eq!(rig.downloader.count(), 0);
    assert!(rig.browser.calls().is_empty());

    let alerts = rig.notices.alerts();
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].starts_with("Generation failed"));
    assert!(alerts[0].contains("tainted canvas"));
    assert_eq!(rig.pipeline.state(), CaptureState::Failed);
}

#[tokio::test]
async fn test_font_failure_counts_as_rendering_failure() {
    let rig = CaptureRig::new(PlatformCapabilities::desktop());
    rig.canvas.set_fonts_should_fail(true);

    assert_eq!(rig.pipeline.save(&sample_item()).await, CaptureOutcome::Failed);
    assert_eq!(rig.canvas.call_count(), 0);
    assert_eq!(rig.downloader.count(), 0);
    assert_eq!(rig.notices.alerts().len(), 1);
}

#[tokio::test]
async fn test_dismissed_share_stops_silently() {
    let rig = CaptureRig::new(PlatformCapabilities::file_share_sheet(true));
    script_share(&rig.share_sheet, vec![share_dismissed()]);

    let outcome = rig.pipeline.share(&sample_item()).await;

    assert_eq!(outcome, CaptureOutcome::Cancelled);
    assert_eq!(rig.share_sheet.call_count(), 1);
    assert_eq!(rig.downloader.count(), 0);
    assert!(rig.notices.alerts().is_empty());
    assert_eq!(rig.notices.toasts(), vec!["Preparing..."]);
    assert_eq!(rig.pipeline.state(), CaptureState::Cancelled);
}

#[tokio::test]
async fn test_clipboard_runs_before_rasterization() {
    let rig = CaptureRig::new(PlatformCapabilities::file_share_sheet(true));
    let item = sample_item();

    rig.pipeline.share(&item).await;

    let events = rig.log.events();
    let clip = events.iter().position(|e| e == "clipboard").unwrap();
    let raster = events.iter().position(|e| e.starts_with("rasterize")).unwrap();
    assert!(clip < raster);
    assert_eq!(
        rig.clipboard.last_text(),
        Some(share_caption(&item, "https://ihsan.app"))
    );
}

#[tokio::test]
async fn test_clipboard_failure_does_not_stop_share() {
    let rig = CaptureRig::new(PlatformCapabilities::file_share_sheet(true));
    rig.clipboard.set_should_fail(true);

    let outcome = rig.pipeline.share(&sample_item()).await;

    assert_eq!(outcome, CaptureOutcome::Done(Delivery::Shared));
    assert!(rig.notices.alerts().is_empty());
}

// ---- File share sheet chain ----

#[tokio::test]
async fn test_file_share_with_text_succeeds() {
    let rig = CaptureRig::new(PlatformCapabilities::file_share_sheet(true));
    let item = sample_item();

    let outcome = rig.pipeline.share(&item).await;

    assert_eq!(outcome, CaptureOutcome::Done(Delivery::Shared));
    let calls = rig.share_sheet.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].has_text());
    assert_eq!(calls[0].title.as_deref(), Some("Ihsan Reminder"));
    assert_eq!(calls[0].files[0].name, "ihsan-share-1717200000000.png");
    assert_eq!(rig.notices.toasts(), vec!["Preparing...", "Shared!"]);
}

#[tokio::test]
async fn test_file_share_retries_without_text() {
    let rig = CaptureRig::new(PlatformCapabilities::file_share_sheet(true));
    script_share(&rig.share_sheet, vec![share_rejected()]);

    let outcome = rig.pipeline.share(&sample_item()).await;

    assert_eq!(outcome, CaptureOutcome::Done(Delivery::Shared));
    let calls = rig.share_sheet.calls();
    assert_eq!(calls.len(), 2);
    assert!(!calls[1].has_text());
    assert_eq!(rig.downloader.count(), 0);
    assert_eq!(rig.notices.toasts(), vec!["Preparing..."]);
}

#[tokio::test]
async fn test_file_share_dismissed_on_retry_stops() {
    let rig = CaptureRig::new(PlatformCapabilities::file_share_sheet(true));
    script_share(&rig.share_sheet, vec![share_rejected(), share_dismissed()]);

    assert_eq!(rig.pipeline.share(&sample_item()).await, CaptureOutcome::Cancelled);
    assert_eq!(rig.downloader.count(), 0);
    assert!(rig.notices.alerts().is_empty());
}

#[tokio::test]
async fn test_file_share_exhausted_downloads_and_alerts() {
    let rig = CaptureRig::new(PlatformCapabilities::file_share_sheet(true));
    script_share(&rig.share_sheet, vec![share_rejected(), share_rejected()]);

    let outcome = rig.pipeline.share(&sample_item()).await;

    assert_eq!(
        outcome,
        CaptureOutcome::Done(Delivery::DownloadedAfterShareFailure {
            location: "/mock/downloads/ihsan-share-1717200000000.png".to_string()
        })
    );
    assert_eq!(
        rig.log.events(),
        vec![
            "clipboard",
            "rasterize:canvas",
            "share:files+text",
            "share:files",
            "download"
        ]
    );
    assert_eq!(rig.notices.alerts(), vec!["Share failed. Image downloaded."]);
}

#[tokio::test]
async fn test_without_file_share_downloads_instead() {
    let rig = CaptureRig::new(PlatformCapabilities::file_share_sheet(false));

    let outcome = rig.pipeline.share(&sample_item()).await;

    assert!(matches!(
        outcome,
        CaptureOutcome::Done(Delivery::DownloadedUnsupported { .. })
    ));
    assert_eq!(rig.share_sheet.call_count(), 0);
    assert_eq!(
        rig.notices.alerts(),
        vec!["Sharing unavailable. Downloaded instead."]
    );
}

#[tokio::test]
async fn test_fallback_download_failure_alerts_once() {
    let rig = CaptureRig::new(PlatformCapabilities::file_share_sheet(false));
    rig.downloader.set_should_fail(true);

    assert_eq!(rig.pipeline.share(&sample_item()).await, CaptureOutcome::Failed);
    let alerts = rig.notices.alerts();
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].starts_with("Share failed"));
}

// ---- Image-only share chain ----

#[tokio::test]
async fn test_image_only_share_uses_foreign_object_and_no_text() {
    let rig = CaptureRig::new(PlatformCapabilities::image_only_share(true));

    let outcome = rig.pipeline.share(&sample_item()).await;

    assert_eq!(outcome, CaptureOutcome::Done(Delivery::Shared));
    assert_eq!(rig.canvas.call_count(), 0);
    let captures = rig.foreign_object.captures();
    assert_eq!(captures.len(), 1);
    assert_eq!(captures[0].options.pixel_ratio, 2);
    assert!(!rig.share_sheet.calls()[0].has_text());
    assert_eq!(
        rig.notices.toasts(),
        vec!["Preparing...", "Paste caption in chat!"]
    );
}

#[tokio::test]
async fn test_image_only_share_rejected_opens_messaging_link() {
    let rig = CaptureRig::new(PlatformCapabilities::image_only_share(true));
    script_share(&rig.share_sheet, vec![share_rejected()]);

    let outcome = rig.pipeline.share(&sample_item()).await;

    let CaptureOutcome::Done(Delivery::MessagingLink { url }) = outcome else {
        panic!("expected messaging link, got {outcome:?}");
    };
    assert!(url.starts_with("https://wa.me/?text="));
    assert!(url.contains("Daily%20Islamic%20Reminder"));
    assert_eq!(rig.browser.calls(), vec![BrowserCall::Navigate(url)]);
    assert_eq!(rig.downloader.count(), 0);
}

#[tokio::test]
async fn test_image_only_without_share_goes_straight_to_link() {
    let rig = CaptureRig::new(PlatformCapabilities::image_only_share(false));

    let outcome = rig.pipeline.share(&sample_item()).await;

    assert!(matches!(
        outcome,
        CaptureOutcome::Done(Delivery::MessagingLink { .. })
    ));
    assert_eq!(rig.share_sheet.call_count(), 0);
}

#[tokio::test]
async fn test_image_only_share_dismissed_opens_nothing() {
    let rig = CaptureRig::new(PlatformCapabilities::image_only_share(true));
    script_share(&rig.share_sheet, vec![share_dismissed()]);

    assert_eq!(rig.pipeline.share(&sample_item()).await, CaptureOutcome::Cancelled);
    assert!(rig.browser.calls().is_empty());
}

#[tokio::test]
async fn test_image_only_save_opens_image_tab() {
    let rig = CaptureRig::new(PlatformCapabilities::image_only_share(true));

    let outcome = rig.pipeline.save(&sample_item()).await;

    assert_eq!(outcome, CaptureOutcome::Done(Delivery::ImageTab));
    let calls = rig.browser.calls();
    assert!(matches!(&calls[0], BrowserCall::ImageTab(uri) if uri.starts_with("data:image/png;base64,")));
    assert_eq!(rig.notices.toasts(), vec!["Generating...", "Image Ready"]);
    assert!(rig.clipboard.texts().is_empty());
}

#[tokio::test]
async fn test_image_only_save_with_popup_blocked_shows_inline() {
    let rig = CaptureRig::new(PlatformCapabilities::image_only_share(true));
    rig.browser.set_popup_blocked(true);

    let outcome = rig.pipeline.save(&sample_item()).await;

    assert_eq!(outcome, CaptureOutcome::Done(Delivery::InlineImage));
    assert_eq!(rig.log.events(), vec![
        "rasterize:foreign_object",
        "browser:image_tab",
        "browser:navigate"
    ]);
    assert_eq!(rig.notices.toasts(), vec!["Generating...", "Long Press to Save"]);
}

// ---- Desktop ----

#[tokio::test]
async fn test_desktop_save_downloads_card() {
    let rig = CaptureRig::new(PlatformCapabilities::desktop());

    rig.pipeline.save(&sample_item()).await;

    assert_eq!(rig.downloader.file_names(), vec!["ihsan-card-1717200000000.png"]);
    let (_, bytes) = &rig.downloader.downloads()[0];
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    assert_eq!(rig.notices.toasts(), vec!["Generating...", "Downloaded!"]);
}

#[tokio::test(start_paused = true)]
async fn test_desktop_share_waits_before_opening_link() {
    let rig = CaptureRig::new(PlatformCapabilities::desktop());
    let item = sample_item();
    let started = tokio::time::Instant::now();

    let outcome = rig.pipeline.share(&item).await;

    assert!(started.elapsed() >= Duration::from_millis(1000));
    let CaptureOutcome::Done(Delivery::DownloadedWithLink { location, url }) = outcome else {
        panic!("expected download with link, got {outcome:?}");
    };
    assert_eq!(location, "/mock/downloads/ihsan-share-1717200000000.png");
    assert!(url.starts_with("https://web.whatsapp.com/send?text="));
    assert_eq!(
        rig.log.events(),
        vec!["clipboard", "rasterize:canvas", "download", "browser:new_tab"]
    );
    assert_eq!(rig.notices.toasts(), vec!["Preparing...", "Image saved!"]);
}

#[tokio::test(start_paused = true)]
async fn test_cancel_during_link_delay_skips_link() {
    let rig = CaptureRig::new(PlatformCapabilities::desktop());
    let item = sample_item();

    let (outcome, _) = tokio::join!(rig.pipeline.share(&item), async {
        tokio::time::sleep(Duration::from_millis(500)).await;
        rig.pipeline.cancel();
    });

    assert_eq!(outcome, CaptureOutcome::Cancelled);
    assert_eq!(rig.downloader.count(), 1);
    assert!(rig.browser.calls().is_empty());
    assert!(rig.notices.alerts().is_empty());
    assert!(!rig.pipeline.is_busy());
}

// ---- Invocation guard and timeouts ----

#[tokio::test(start_paused = true)]
async fn test_second_trigger_while_busy_is_ignored() {
    let rig = CaptureRig::new(PlatformCapabilities::desktop());
    rig.canvas.set_delay(Some(Duration::from_millis(200)));
    let item = sample_item();

    let (first, second) = tokio::join!(rig.pipeline.save(&item), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        rig.pipeline.save(&item).await
    });

    assert!(matches!(first, CaptureOutcome::Done(_)));
    assert_eq!(second, CaptureOutcome::Busy);
    assert_eq!(rig.canvas.call_count(), 1);
    assert_eq!(rig.downloader.count(), 1);

    // released afterwards
    assert!(matches!(rig.pipeline.save(&item).await, CaptureOutcome::Done(_)));
}

#[tokio::test(start_paused = true)]
async fn test_stalled_rasterizer_times_out_as_failure() {
    let settings = CaptureSettings {
        timeouts: Timeouts {
            rasterize: Duration::from_secs(1),
            ..Timeouts::default()
        },
        ..CaptureSettings::default()
    };
    let rig = CaptureRig::with_settings(PlatformCapabilities::desktop(), settings);
    rig.canvas.set_delay(Some(Duration::from_secs(3600)));

    assert_eq!(rig.pipeline.save(&sample_item()).await, CaptureOutcome::Failed);
    let alerts = rig.notices.alerts();
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].starts_with("Generation failed"));
    assert_eq!(rig.downloader.count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_stalled_share_sheet_falls_back_like_a_rejection() {
    let rig = CaptureRig::new(PlatformCapabilities::file_share_sheet(true));
    rig.share_sheet.set_delay(Some(Duration::from_secs(3600)));

    let outcome = rig.pipeline.share(&sample_item()).await;

    assert!(matches!(
        outcome,
        CaptureOutcome::Done(Delivery::DownloadedAfterShareFailure { .. })
    ));
    assert_eq!(rig.share_sheet.call_count(), 2);
}

#[tokio::test]
async fn test_excluded_controls_never_reach_rasterizer() {
    let rig = CaptureRig::new(PlatformCapabilities::desktop());
    let name = NAME_ITEMS[0].clone().with_audio_url("https://example.org/a.mp3");

    rig.pipeline.save(&name).await;

    let text = &rig.canvas.captures()[0].text;
    assert!(text.contains("Ar-Rahman"));
    assert!(text.contains("Ihsan App | Daily Reminder"));
    assert!(!text.contains("View All Names"));
    assert!(!text.contains("Play Recitation"));
    assert!(!text.contains("99 Names"));
}

#[tokio::test]
async fn test_render_to_image_reports_failure_without_state_change() {
    let rig = CaptureRig::new(PlatformCapabilities::desktop());
    rig.canvas.set_should_fail(Some("boom"));

    let card = CardNode::reminder_card(&sample_item());
    let image = rig.pipeline.render_to_image(&card, ImageFormat::DataUri).await;

    assert!(image.is_none());
    assert_eq!(rig.notices.alerts(), vec!["Generation failed: boom"]);
    assert_eq!(rig.pipeline.state(), CaptureState::Idle);
}

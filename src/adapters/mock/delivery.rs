//! Mock delivery channels for testing.

use async_trait::async_trait;
use bytes::Bytes;
use std::sync::{Arc, Mutex};

use super::{lock, EventLog};
use crate::traits::{Browser, DeliveryError, Downloader};

/// Downloader that keeps downloads in memory.
#[derive(Debug, Clone, Default)]
pub struct MockDownloader {
    downloads: Arc<Mutex<Vec<(String, Bytes)>>>,
    should_fail: Arc<Mutex<bool>>,
    log: Option<EventLog>,
}

impl MockDownloader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `download` to `log` on every call.
    pub fn with_event_log(mut self, log: EventLog) -> Self {
        self.log = Some(log);
        self
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        *lock(&self.should_fail) = should_fail;
    }

    /// `(file_name, bytes)` of every download.
    pub fn downloads(&self) -> Vec<(String, Bytes)> {
        lock(&self.downloads).clone()
    }

    pub fn file_names(&self) -> Vec<String> {
        lock(&self.downloads).iter().map(|(n, _)| n.clone()).collect()
    }

    pub fn count(&self) -> usize {
        lock(&self.downloads).len()
    }
}

#[async_trait]
impl Downloader for MockDownloader {
    async fn download(&self, bytes: &Bytes, file_name: &str) -> Result<String, DeliveryError> {
        if let Some(log) = &self.log {
            log.push("download");
        }
        if *lock(&self.should_fail) {
            return Err(DeliveryError::Io("Mock download failure".to_string()));
        }
        lock(&self.downloads).push((file_name.to_string(), bytes.clone()));
        Ok(format!("/mock/downloads/{file_name}"))
    }
}

/// A recorded browser call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserCall {
    ImageTab(String),
    Navigate(String),
    NewTab(String),
}

impl BrowserCall {
    pub fn url(&self) -> &str {
        match self {
            BrowserCall::ImageTab(u) | BrowserCall::Navigate(u) | BrowserCall::NewTab(u) => u,
        }
    }
}

/// Browser that records navigation instead of performing it.
#[derive(Debug, Clone, Default)]
pub struct MockBrowser {
    calls: Arc<Mutex<Vec<BrowserCall>>>,
    popup_blocked: Arc<Mutex<bool>>,
    navigate_should_fail: Arc<Mutex<bool>>,
    log: Option<EventLog>,
}

impl MockBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `browser:<call>` to `log` on every call.
    pub fn with_event_log(mut self, log: EventLog) -> Self {
        self.log = Some(log);
        self
    }

    /// Make `open_image_tab` fail with [`DeliveryError::PopupBlocked`].
    pub fn set_popup_blocked(&self, blocked: bool) {
        *lock(&self.popup_blocked) = blocked;
    }

    pub fn set_navigate_should_fail(&self, should_fail: bool) {
        *lock(&self.navigate_should_fail) = should_fail;
    }

    pub fn calls(&self) -> Vec<BrowserCall> {
        lock(&self.calls).clone()
    }

    fn record(&self, call: BrowserCall) {
        if let Some(log) = &self.log {
            let name = match call {
                BrowserCall::ImageTab(_) => "browser:image_tab",
                BrowserCall::Navigate(_) => "browser:navigate",
                BrowserCall::NewTab(_) => "browser:new_tab",
            };
            log.push(name);
        }
        lock(&self.calls).push(call);
    }
}

#[async_trait]
impl Browser for MockBrowser {
    async fn open_image_tab(&self, data_uri: &str) -> Result<(), DeliveryError> {
        self.record(BrowserCall::ImageTab(data_uri.to_string()));
        if *lock(&self.popup_blocked) {
            return Err(DeliveryError::PopupBlocked);
        }
        Ok(())
    }

    async fn navigate(&self, url: &str) -> Result<(), DeliveryError> {
        self.record(BrowserCall::Navigate(url.to_string()));
        if *lock(&self.navigate_should_fail) {
            return Err(DeliveryError::OpenFailed {
                target: url.to_string(),
                message: "Mock navigation failure".to_string(),
            });
        }
        Ok(())
    }

    async fn open_new_tab(&self, url: &str) -> Result<(), DeliveryError> {
        self.record(BrowserCall::NewTab(url.to_string()));
        Ok(())
    }
}

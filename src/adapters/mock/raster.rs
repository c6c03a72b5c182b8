//! Mock rasterizer for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::{lock, EventLog};
use crate::capture::CardNode;
use crate::traits::{RasterError, RasterImage, RasterOptions, RasterStrategy, Rasterizer};

/// A recorded rasterize call.
#[derive(Debug, Clone)]
pub struct RecordedCapture {
    /// Flattened text of the card as received (after pruning).
    pub text: String,
    pub options: RasterOptions,
}

/// Rasterizer returning a fixed image, or a scripted failure.
#[derive(Debug, Clone)]
pub struct MockRasterizer {
    strategy: RasterStrategy,
    image: Arc<Mutex<RasterImage>>,
    error: Arc<Mutex<Option<RasterError>>>,
    fonts_error: Arc<Mutex<Option<RasterError>>>,
    delay: Arc<Mutex<Option<Duration>>>,
    captures: Arc<Mutex<Vec<RecordedCapture>>>,
    log: Option<EventLog>,
}

impl MockRasterizer {
    /// Rasterizer producing a small transparent image.
    pub fn new(strategy: RasterStrategy) -> Self {
        Self {
            strategy,
            image: Arc::new(Mutex::new(RasterImage::solid(4, 4, [255, 255, 255, 0]))),
            error: Arc::new(Mutex::new(None)),
            fonts_error: Arc::new(Mutex::new(None)),
            delay: Arc::new(Mutex::new(None)),
            captures: Arc::new(Mutex::new(Vec::new())),
            log: None,
        }
    }

    /// Append `rasterize:<strategy>` to `log` on every call.
    pub fn with_event_log(mut self, log: EventLog) -> Self {
        self.log = Some(log);
        self
    }

    pub fn set_image(&self, image: RasterImage) {
        *lock(&self.image) = image;
    }

    /// Make `rasterize` fail with `RasterError::Failed(message)`.
    pub fn set_should_fail(&self, message: Option<&str>) {
        *lock(&self.error) = message.map(|m| RasterError::Failed(m.to_string()));
    }

    pub fn set_fonts_should_fail(&self, should_fail: bool) {
        *lock(&self.fonts_error) =
            should_fail.then(|| RasterError::Fonts("font load rejected".to_string()));
    }

    /// Delay `rasterize`, to exercise timeouts and cancellation.
    pub fn set_delay(&self, delay: Option<Duration>) {
        *lock(&self.delay) = delay;
    }

    pub fn captures(&self) -> Vec<RecordedCapture> {
        lock(&self.captures).clone()
    }

    pub fn call_count(&self) -> usize {
        lock(&self.captures).len()
    }
}

#[async_trait]
impl Rasterizer for MockRasterizer {
    fn strategy(&self) -> RasterStrategy {
        self.strategy
    }

    async fn fonts_ready(&self) -> Result<(), RasterError> {
        match lock(&self.fonts_error).clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn rasterize(
        &self,
        card: &CardNode,
        options: &RasterOptions,
    ) -> Result<RasterImage, RasterError> {
        if let Some(log) = &self.log {
            log.push(format!("rasterize:{}", self.strategy.as_str()));
        }
        lock(&self.captures).push(RecordedCapture {
            text: card.text_content(),
            options: options.clone(),
        });

        let delay = *lock(&self.delay);
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(err) = lock(&self.error).clone() {
            return Err(err);
        }
        Ok(lock(&self.image).clone())
    }
}

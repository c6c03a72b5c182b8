//! Image capture and delivery.
//!
//! Turns a reminder card into a PNG and gets it to the user through the
//! best channel the platform offers:
//!
//! | Class | Save | Share |
//! |-------|------|-------|
//! | `ImageOnlyShare` | image tab, else in place | image-only share, else messaging link |
//! | `FileShareSheet` | download | share with text, image only, else download |
//! | `Desktop` | download | download, then messaging web link |
//!
//! Share invocations copy the caption to the clipboard before rendering.
//! A dismissed share dialog ends the chain silently.

pub mod cancel;
pub mod caption;
pub mod card;
pub mod deliver;
pub mod pipeline;
pub mod platform;
pub mod render;
pub mod services;

pub use cancel::{cancellable_sleep, guard_step, CancelToken};
pub use caption::{desktop_share_link, image_file_name, mobile_share_link, share_caption};
pub use card::{CardNode, DEFAULT_EXCLUDE_MARKER};
pub use deliver::{CaptureIntent, Deliverer, Delivery};
pub use pipeline::{CaptureOutcome, CapturePipeline, CaptureState};
pub use platform::{PlatformCapabilities, PlatformClass};
pub use render::{render_card, ImageArtifact, ImageFormat};
pub use services::{CaptureServices, CaptureSettings};

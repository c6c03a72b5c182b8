//! Share sheet for hosts without a native share dialog.

use async_trait::async_trait;

use crate::traits::{ShareData, ShareError, ShareSheet};

/// [`ShareSheet`] that refuses every payload.
///
/// Desktop hosts never reach the share sheet, but the pipeline still needs
/// one injected.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoShareSheet;

#[async_trait]
impl ShareSheet for NoShareSheet {
    async fn share(&self, _data: &ShareData) -> Result<(), ShareError> {
        Err(ShareError::Unsupported(
            "no native share dialog on this host".to_string(),
        ))
    }
}

//! Download adapter writing into a directory.

use async_trait::async_trait;
use bytes::Bytes;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::traits::{DeliveryError, Downloader};

/// [`Downloader`] that writes files into a fixed directory, normally the
/// user's download folder.
#[derive(Debug, Clone)]
pub struct DirectoryDownloader {
    dir: PathBuf,
}

impl DirectoryDownloader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// Strip path separators so a file name cannot escape the directory.
fn sanitize_file_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if matches!(c, '/' | '\\' | '\0') { '_' } else { c })
        .collect();
    match cleaned.trim_start_matches('.') {
        "" => "download.png".to_string(),
        rest => rest.to_string(),
    }
}

#[async_trait]
impl Downloader for DirectoryDownloader {
    async fn download(&self, bytes: &Bytes, file_name: &str) -> Result<String, DeliveryError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.dir.join(sanitize_file_name(file_name));
        tokio::fs::write(&path, bytes).await?;
        debug!(path = %path.display(), size = bytes.len(), "Download written");
        Ok(path.display().to_string())
    }
}

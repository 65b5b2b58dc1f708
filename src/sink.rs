use crate::error::PersistError;
use crate::utils::sanitize_filename;
use async_trait::async_trait;
use std::path::PathBuf;

/// Destination for cleaned page text
#[async_trait]
pub trait PageSink: Send + Sync {
    /// Store `text` for `url`, replacing anything stored earlier under the same key
    async fn save(&self, url: &str, text: &str) -> Result<(), PersistError>;
}

/// Writes one `<sanitized url>.txt` file per page into a directory
///
/// The directory must already exist.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path the text for `url` is written to
    pub fn path_for(&self, url: &str) -> PathBuf {
        self.dir.join(format!("{}.txt", sanitize_filename(url)))
    }
}

#[async_trait]
impl PageSink for FileSink {
    async fn save(&self, url: &str, text: &str) -> Result<(), PersistError> {
        let path = self.path_for(url);
        tokio::fs::write(&path, text.as_bytes())
            .await
            .map_err(|source| PersistError {
                path: path.clone(),
                source,
            })?;
        ::log::debug!("Saved {} bytes to {}", text.len(), path.display());
        Ok(())
    }
}

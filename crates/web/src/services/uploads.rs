//! Local disk storage for uploaded product images.
//!
//! Uploaded files land in a configured directory under a generated name:
//! the current unix-millis timestamp plus the original file extension.
//! Only the generated filename is persisted on the product row; the files
//! themselves are served via `ServeDir` under `/uploads`.

use std::path::{Path, PathBuf};

use chrono::Utc;
use thiserror::Error;

/// Errors that can occur while storing an upload.
#[derive(Debug, Error)]
pub enum UploadError {
    /// Filesystem write failed.
    #[error("failed to write upload: {0}")]
    Io(#[from] std::io::Error),

    /// The multipart field carried no file data.
    #[error("no file was uploaded")]
    MissingFile,
}

/// Stores uploaded files in a local directory.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    /// Create a store rooted at `dir`. The directory is created on first
    /// use via [`UploadStore::ensure_dir`].
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory uploads are written to.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the upload directory if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `UploadError::Io` if the directory cannot be created.
    pub async fn ensure_dir(&self) -> Result<(), UploadError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        Ok(())
    }

    /// Write an uploaded file to disk and return its generated filename.
    ///
    /// Empty payloads are rejected as [`UploadError::MissingFile`].
    ///
    /// # Errors
    ///
    /// Returns `UploadError::Io` if the file cannot be written.
    pub async fn store(
        &self,
        original_name: &str,
        data: &[u8],
    ) -> Result<String, UploadError> {
        if data.is_empty() {
            return Err(UploadError::MissingFile);
        }

        let filename = generate_filename(original_name, Utc::now().timestamp_millis());
        tokio::fs::write(self.dir.join(&filename), data).await?;
        Ok(filename)
    }
}

/// Build a stored filename from a timestamp and the original extension.
///
/// Mirrors the classic multer disk-storage scheme: `{millis}{ext}`. Files
/// without an extension get the bare timestamp.
fn generate_filename(original_name: &str, millis: i64) -> String {
    match Path::new(original_name).extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{millis}.{ext}"),
        None => millis.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_filename_keeps_extension() {
        assert_eq!(generate_filename("photo.png", 1756500000000), "1756500000000.png");
        assert_eq!(generate_filename("archive.tar.gz", 1), "1.gz");
    }

    #[test]
    fn test_generate_filename_without_extension() {
        assert_eq!(generate_filename("photo", 99), "99");
        assert_eq!(generate_filename("", 99), "99");
    }

    #[tokio::test]
    async fn test_store_writes_file_and_rejects_empty() {
        let dir = std::env::temp_dir().join(format!(
            "brandrack-uploads-test-{}",
            Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ));
        let store = UploadStore::new(&dir);
        store.ensure_dir().await.expect("create dir");

        let name = store.store("phone.jpg", b"fake image bytes").await.expect("store");
        assert!(name.ends_with(".jpg"));
        let on_disk = tokio::fs::read(dir.join(&name)).await.expect("read back");
        assert_eq!(on_disk, b"fake image bytes");

        assert!(matches!(
            store.store("empty.jpg", &[]).await,
            Err(UploadError::MissingFile)
        ));

        let _ = tokio::fs::remove_dir_all(&dir).await;
    }
}

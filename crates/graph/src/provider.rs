use crate::error::Result;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Source of file contents for the two analysis passes.
///
/// `Ok(None)` means the path does not exist or cannot be decoded; the
/// analyzer degrades it to an empty record. Implementations over remote
/// repository hosts plug in here.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    async fn fetch(&self, path: &str) -> Result<Option<String>>;
}

/// Filesystem-backed provider rooted at a project directory
pub struct FsProvider {
    root: PathBuf,
}

impl FsProvider {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl ContentProvider for FsProvider {
    async fn fetch(&self, path: &str) -> Result<Option<String>> {
        let full = self.root.join(path);
        let bytes = match tokio::fs::read(&full).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        match String::from_utf8(bytes) {
            Ok(text) => Ok(Some(text)),
            Err(_) => {
                log::warn!("skipping undecodable file {}", full.display());
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let provider = FsProvider::new(dir.path());
        assert_eq!(provider.fetch("nope.rs").await.unwrap(), None);
    }

    #[tokio::test]
    async fn undecodable_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("blob.rs"), [0xff, 0xfe, 0x00, 0x80]).unwrap();
        let provider = FsProvider::new(dir.path());
        assert_eq!(provider.fetch("blob.rs").await.unwrap(), None);
    }

    #[tokio::test]
    async fn readable_file_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("ok.rs"), "pub struct Thing;").unwrap();
        let provider = FsProvider::new(dir.path());
        assert_eq!(
            provider.fetch("ok.rs").await.unwrap().as_deref(),
            Some("pub struct Thing;")
        );
    }
}

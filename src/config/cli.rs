use crate::core::ContentSource;
use crate::utils::error::LoadError;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Reads resources from a directory on disk.
#[derive(Debug, Clone)]
pub struct LocalSource {
    base_path: PathBuf,
}

impl LocalSource {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

#[async_trait]
impl ContentSource for LocalSource {
    async fn fetch(&self, name: &str) -> Result<Vec<u8>, LoadError> {
        let full_path = self.base_path.join(name);
        tokio::fs::read(&full_path)
            .await
            .map_err(|e| LoadError::Unreachable {
                name: name.to_string(),
                reason: format!("{}: {}", full_path.display(), e),
            })
    }

    fn describe(&self) -> String {
        self.base_path.display().to_string()
    }
}

use crate::config::{resource_names, source_from_config};
use crate::core::controller::ContentController;
use crate::core::document::{Document, DEFAULT_SHELL};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Runs the startup pass once and writes the composed page.
pub struct ShowcaseEngine<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> ShowcaseEngine<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub async fn run(&self) -> Result<PathBuf> {
        let source = source_from_config(&self.config)?;
        let mut controller =
            ContentController::with_resources(source, resource_names(&self.config));
        controller.initialize().await;

        let host_html = self.host_page().await?;
        let page = controller.document().compose(&host_html)?;
        self.write_output(&page).await
    }

    /// Renders without touching the output path.
    pub async fn render_document(&self) -> Result<Document> {
        let source = source_from_config(&self.config)?;
        let mut controller =
            ContentController::with_resources(source, resource_names(&self.config));
        controller.initialize().await;
        Ok(controller.into_document())
    }

    async fn host_page(&self) -> Result<String> {
        match self.config.host_page() {
            Some(path) => {
                tracing::debug!("Reading host page {}", path);
                Ok(tokio::fs::read_to_string(path).await?)
            }
            None => Ok(DEFAULT_SHELL.to_string()),
        }
    }

    async fn write_output(&self, page: &str) -> Result<PathBuf> {
        let output_path = Path::new(self.config.output_path()).to_path_buf();

        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        tokio::fs::write(&output_path, page).await?;
        tracing::info!("📁 Output saved to: {}", output_path.display());
        Ok(output_path)
    }
}

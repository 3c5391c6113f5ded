use crate::utils::error::LoadError;
use async_trait::async_trait;

/// A static provider of named JSON resources.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch(&self, name: &str) -> Result<Vec<u8>, LoadError>;

    /// Human-readable location, used in logs.
    fn describe(&self) -> String;
}

#[async_trait]
impl<S: ContentSource + ?Sized> ContentSource for Box<S> {
    async fn fetch(&self, name: &str) -> Result<Vec<u8>, LoadError> {
        (**self).fetch(name).await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

pub trait ConfigProvider: Send + Sync {
    fn source_location(&self) -> &str;
    fn projects_resource(&self) -> &str;
    fn certificates_resource(&self) -> &str;
    fn experiences_resource(&self) -> &str;
    fn host_page(&self) -> Option<&str>;
    fn output_path(&self) -> &str;
    fn request_timeout_secs(&self) -> u64;
}

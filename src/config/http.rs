use crate::core::ContentSource;
use crate::utils::error::{LoadError, Result, ShowcaseError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Fetches resources relative to a base URL.
#[derive(Debug, Clone)]
pub struct HttpSource {
    base_url: Url,
    client: Client,
}

impl HttpSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let mut parsed = Url::parse(base_url).map_err(|e| ShowcaseError::InvalidConfigValueError {
            field: "source".to_string(),
            value: base_url.to_string(),
            reason: format!("not a valid URL: {}", e),
        })?;

        // `Url::join` drops the last segment unless the path ends in '/'
        if !parsed.path().ends_with('/') {
            let path = format!("{}/", parsed.path());
            parsed.set_path(&path);
        }
        parsed.set_fragment(None);
        let base_url = parsed;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ShowcaseError::ConfigError {
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self { base_url, client })
    }

    /// Resolves `name` under the base path, keeping the base query string.
    pub fn resolve(&self, name: &str) -> std::result::Result<Url, LoadError> {
        let mut url = self.base_url.join(name).map_err(|e| LoadError::Unreachable {
            name: name.to_string(),
            reason: format!("cannot resolve against {}: {}", self.base_url, e),
        })?;
        if url.query().is_none() {
            url.set_query(self.base_url.query());
        }
        Ok(url)
    }
}

#[async_trait]
impl ContentSource for HttpSource {
    async fn fetch(&self, name: &str) -> std::result::Result<Vec<u8>, LoadError> {
        let url = self.resolve(name)?;
        tracing::debug!("Making request to: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LoadError::Unreachable {
                name: name.to_string(),
                reason: e.to_string(),
            })?;

        tracing::debug!("Response status for '{}': {}", name, response.status());
        if !response.status().is_success() {
            return Err(LoadError::Status {
                name: name.to_string(),
                status: response.status().as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| LoadError::Unreachable {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        Ok(body.to_vec())
    }

    fn describe(&self) -> String {
        self.base_url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_names_under_base_path() {
        let source = HttpSource::new("https://cdn.example.com/data", Duration::from_secs(5)).unwrap();
        assert_eq!(
            source.resolve("projects.json").unwrap().as_str(),
            "https://cdn.example.com/data/projects.json"
        );
    }

    #[test]
    fn test_base_query_survives_resolution() {
        let source =
            HttpSource::new("https://cdn.example.com/data?v=1", Duration::from_secs(5)).unwrap();
        assert_eq!(
            source.resolve("projects.json").unwrap().as_str(),
            "https://cdn.example.com/data/projects.json?v=1"
        );

        let source =
            HttpSource::new("https://cdn.example.com/data#top", Duration::from_secs(5)).unwrap();
        assert_eq!(
            source.resolve("experiences.json").unwrap().as_str(),
            "https://cdn.example.com/data/experiences.json"
        );
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        assert!(HttpSource::new("not a url", Duration::from_secs(5)).is_err());
    }
}

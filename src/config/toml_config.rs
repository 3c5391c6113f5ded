use crate::config::Settings;
use crate::utils::error::{Result, ShowcaseError};
use crate::utils::logger::LogFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub document: DocumentConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub location: Option<String>,
    pub projects: Option<String>,
    pub certificates: Option<String>,
    pub experiences: Option<String>,
    pub request_timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentConfig {
    pub host_page: Option<String>,
    pub output_path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub format: Option<String>,
    pub verbose: Option<bool>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| ShowcaseError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ShowcaseError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn log_format(&self) -> Result<Option<LogFormat>> {
        self.logging
            .format
            .as_deref()
            .map(|f| {
                f.parse::<LogFormat>()
                    .map_err(|reason| ShowcaseError::InvalidConfigValueError {
                        field: "logging.format".to_string(),
                        value: f.to_string(),
                        reason,
                    })
            })
            .transpose()
    }

    /// Applies the file's values on top of `settings`.
    pub fn apply_to(&self, settings: &mut Settings) -> Result<()> {
        if let Some(location) = &self.source.location {
            settings.source_location = location.clone();
        }
        if let Some(name) = &self.source.projects {
            settings.resources.projects = name.clone();
        }
        if let Some(name) = &self.source.certificates {
            settings.resources.certificates = name.clone();
        }
        if let Some(name) = &self.source.experiences {
            settings.resources.experiences = name.clone();
        }
        if let Some(timeout) = self.source.request_timeout_seconds {
            settings.request_timeout_secs = timeout;
        }
        if let Some(host_page) = &self.document.host_page {
            settings.host_page = Some(host_page.clone());
        }
        if let Some(output_path) = &self.document.output_path {
            settings.output_path = output_path.clone();
        }
        if let Some(format) = self.log_format()? {
            settings.log_format = format;
        }
        if let Some(verbose) = self.logging.verbose {
            settings.verbose = verbose;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_all_tables() {
        let config = TomlConfig::from_toml_str(
            r#"
[source]
location = "https://cdn.example.com/data"
projects = "work.json"
request_timeout_seconds = 3

[document]
host_page = "site/index.html"
output_path = "public/index.html"

[logging]
format = "json"
verbose = true
"#,
        )
        .unwrap();

        let mut settings = Settings::default();
        config.apply_to(&mut settings).unwrap();

        assert_eq!(settings.source_location, "https://cdn.example.com/data");
        assert_eq!(settings.resources.projects, "work.json");
        assert_eq!(settings.resources.certificates, "certificates.json");
        assert_eq!(settings.request_timeout_secs, 3);
        assert_eq!(settings.host_page.as_deref(), Some("site/index.html"));
        assert_eq!(settings.output_path, "public/index.html");
        assert_eq!(settings.log_format, LogFormat::Json);
        assert!(settings.verbose);
    }

    #[test]
    fn test_empty_file_keeps_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        let mut settings = Settings::default();
        config.apply_to(&mut settings).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_substitutes_environment_variables() {
        std::env::set_var("SHOWCASE_TEST_DATA_DIR", "/srv/content");
        let config = TomlConfig::from_toml_str(
            r#"
[source]
location = "${SHOWCASE_TEST_DATA_DIR}"
experiences = "${SHOWCASE_TEST_UNSET_VAR}.json"
"#,
        )
        .unwrap();

        assert_eq!(config.source.location.as_deref(), Some("/srv/content"));
        assert_eq!(
            config.source.experiences.as_deref(),
            Some("${SHOWCASE_TEST_UNSET_VAR}.json")
        );
    }

    #[test]
    fn test_rejects_unknown_log_format() {
        let config = TomlConfig::from_toml_str("[logging]\nformat = \"xml\"\n").unwrap();
        let mut settings = Settings::default();
        assert!(config.apply_to(&mut settings).is_err());
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(matches!(
            TomlConfig::from_toml_str("[source\nlocation = 1"),
            Err(ShowcaseError::TomlError(_))
        ));
    }
}

pub mod cli;
pub mod http;
pub mod toml_config;

use crate::core::controller::ResourceNames;
use crate::core::{ConfigProvider, ContentSource};
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{self, Validate};
use std::time::Duration;

use self::cli::LocalSource;
use self::http::HttpSource;

/// Fully resolved settings: defaults, then the TOML file, then CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub source_location: String,
    pub resources: ResourceNames,
    pub host_page: Option<String>,
    pub output_path: String,
    pub request_timeout_secs: u64,
    pub log_format: LogFormat,
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source_location: ".".to_string(),
            resources: ResourceNames::default(),
            host_page: None,
            output_path: "./dist/index.html".to_string(),
            request_timeout_secs: 10,
            log_format: LogFormat::Compact,
            verbose: false,
        }
    }
}

impl ConfigProvider for Settings {
    fn source_location(&self) -> &str {
        &self.source_location
    }

    fn projects_resource(&self) -> &str {
        &self.resources.projects
    }

    fn certificates_resource(&self) -> &str {
        &self.resources.certificates
    }

    fn experiences_resource(&self) -> &str {
        &self.resources.experiences
    }

    fn host_page(&self) -> Option<&str> {
        self.host_page.as_deref()
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_source_location("source", &self.source_location)?;
        validation::validate_resource_name("projects", &self.resources.projects)?;
        validation::validate_resource_name("certificates", &self.resources.certificates)?;
        validation::validate_resource_name("experiences", &self.resources.experiences)?;
        if let Some(host_page) = &self.host_page {
            validation::validate_path("host_page", host_page)?;
        }
        validation::validate_path("output", &self.output_path)?;
        validation::validate_range("request_timeout", self.request_timeout_secs, 1, 300)?;
        Ok(())
    }
}

/// Picks the source implementation for a configured location.
pub fn source_from_config<C: ConfigProvider>(config: &C) -> Result<Box<dyn ContentSource>> {
    let location = config.source_location();
    if validation::is_remote_location(location) {
        let timeout = Duration::from_secs(config.request_timeout_secs());
        Ok(Box::new(HttpSource::new(location, timeout)?))
    } else {
        Ok(Box::new(LocalSource::new(location)))
    }
}

pub fn resource_names<C: ConfigProvider>(config: &C) -> ResourceNames {
    ResourceNames {
        projects: config.projects_resource().to_string(),
        certificates: config.certificates_resource().to_string(),
        experiences: config.experiences_resource().to_string(),
    }
}

#[cfg(feature = "cli")]
pub use self::cli_args::CliConfig;

#[cfg(feature = "cli")]
mod cli_args {
    use super::toml_config::TomlConfig;
    use super::Settings;
    use crate::utils::error::Result;
    use crate::utils::logger::LogFormat;
    use clap::Parser;

    #[derive(Debug, Clone, Default, Parser)]
    #[command(name = "showcase")]
    #[command(about = "Render project, certificate and experience collections into an HTML page")]
    pub struct CliConfig {
        /// Directory or http(s) base URL holding the JSON collections
        #[arg(long)]
        pub source: Option<String>,

        /// HTML page containing the mount point elements
        #[arg(long)]
        pub host_page: Option<String>,

        /// Where to write the rendered page
        #[arg(short, long)]
        pub output: Option<String>,

        #[arg(long)]
        pub projects: Option<String>,

        #[arg(long)]
        pub certificates: Option<String>,

        #[arg(long)]
        pub experiences: Option<String>,

        /// HTTP request timeout in seconds
        #[arg(long)]
        pub request_timeout: Option<u64>,

        /// Path to a TOML configuration file
        #[arg(short, long)]
        pub config: Option<String>,

        #[arg(long, value_enum)]
        pub log_format: Option<LogFormat>,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl CliConfig {
        /// Merges defaults, the optional TOML file and explicit flags.
        pub fn resolve(&self) -> Result<Settings> {
            let mut settings = Settings::default();

            if let Some(path) = &self.config {
                TomlConfig::from_file(path)?.apply_to(&mut settings)?;
            }

            if let Some(source) = &self.source {
                settings.source_location = source.clone();
            }
            if let Some(host_page) = &self.host_page {
                settings.host_page = Some(host_page.clone());
            }
            if let Some(output) = &self.output {
                settings.output_path = output.clone();
            }
            if let Some(name) = &self.projects {
                settings.resources.projects = name.clone();
            }
            if let Some(name) = &self.certificates {
                settings.resources.certificates = name.clone();
            }
            if let Some(name) = &self.experiences {
                settings.resources.experiences = name.clone();
            }
            if let Some(timeout) = self.request_timeout {
                settings.request_timeout_secs = timeout;
            }
            if let Some(format) = self.log_format {
                settings.log_format = format;
            }
            if self.verbose {
                settings.verbose = true;
            }

            Ok(settings)
        }
    }

}

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{cli::LocalSource, http::HttpSource, Settings};
pub use crate::core::{
    controller::{ContentController, ResourceNames},
    document::{Document, MountPoint},
    engine::ShowcaseEngine,
};
pub use crate::domain::model::{Certificate, Experience, ExperienceType, Project, RecordKind};
pub use crate::utils::error::{LoadError, Result, ShowcaseError};

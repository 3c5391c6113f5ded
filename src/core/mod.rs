pub mod controller;
pub mod document;
pub mod engine;
pub mod loader;
pub mod render;

pub use crate::domain::model::{Certificate, Experience, ExperienceType, Project, RecordKind};
pub use crate::domain::ports::{ConfigProvider, ContentSource};
pub use crate::utils::error::Result;

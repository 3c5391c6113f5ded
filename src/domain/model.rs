use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievements: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
}

impl Project {
    /// Achievements, or an empty slice when absent.
    pub fn achievements(&self) -> &[String] {
        self.achievements.as_deref().unwrap_or_default()
    }

    pub fn github(&self) -> Option<&str> {
        non_empty(self.github.as_deref())
    }

    pub fn demo(&self) -> Option<&str> {
        non_empty(self.demo.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub description: String,
    pub badge_image: String,
    pub credly_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub position: String,
    pub company: String,
    pub location: String,
    pub period: String,
    #[serde(rename = "type")]
    pub kind: ExperienceType,
    pub description: String,
    pub highlights: Vec<String>,
    pub technologies: Vec<String>,
}

/// Engagement type of an experience. Any label other than the two known
/// ones is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExperienceType {
    Current,
    Contract,
    Other(String),
}

impl ExperienceType {
    pub fn label(&self) -> &str {
        match self {
            ExperienceType::Current => "Current",
            ExperienceType::Contract => "Contract",
            ExperienceType::Other(label) => label,
        }
    }
}

impl From<String> for ExperienceType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Current" => ExperienceType::Current,
            "Contract" => ExperienceType::Contract,
            _ => ExperienceType::Other(value),
        }
    }
}

impl From<ExperienceType> for String {
    fn from(value: ExperienceType) -> Self {
        match value {
            ExperienceType::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for ExperienceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The three collection kinds the system knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordKind {
    Project,
    Certificate,
    Experience,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Project => "project",
            RecordKind::Certificate => "certificate",
            RecordKind::Experience => "experience",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

use crate::core::document::{Document, MountPoint};
use crate::core::{loader, render, ContentSource};
use crate::domain::model::{Certificate, Experience, Project};
use std::time::Instant;

/// Resource names of the three collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceNames {
    pub projects: String,
    pub certificates: String,
    pub experiences: String,
}

impl Default for ResourceNames {
    fn default() -> Self {
        Self {
            projects: "projects.json".to_string(),
            certificates: "certificates.json".to_string(),
            experiences: "experiences.json".to_string(),
        }
    }
}

/// Owns the three collections and drives the one-shot startup pass.
pub struct ContentController<S: ContentSource> {
    source: S,
    resources: ResourceNames,
    projects: Vec<Project>,
    certificates: Vec<Certificate>,
    experiences: Vec<Experience>,
    document: Document,
}

impl<S: ContentSource> ContentController<S> {
    pub fn new(source: S) -> Self {
        Self::with_resources(source, ResourceNames::default())
    }

    pub fn with_resources(source: S, resources: ResourceNames) -> Self {
        Self {
            source,
            resources,
            projects: Vec::new(),
            certificates: Vec::new(),
            experiences: Vec::new(),
            document: Document::new(),
        }
    }

    /// Loads all collections, then renders every section.
    ///
    /// Never fails: an unavailable collection renders as its empty state.
    pub async fn initialize(&mut self) {
        let started = Instant::now();
        tracing::info!("🚀 Loading content from {}", self.source.describe());

        let (projects, certificates, experiences) = tokio::join!(
            loader::load::<Project, _>(&self.source, &self.resources.projects),
            loader::load::<Certificate, _>(&self.source, &self.resources.certificates),
            loader::load::<Experience, _>(&self.source, &self.resources.experiences),
        );
        self.projects = projects;
        self.certificates = certificates;
        self.experiences = experiences;

        tracing::info!(
            "📦 Loaded {} projects, {} certificates, {} experiences",
            self.projects.len(),
            self.certificates.len(),
            self.experiences.len()
        );

        self.render_projects();
        self.render_certificates();
        self.render_experiences();

        tracing::info!("✅ Rendered all sections in {:?}", started.elapsed());
    }

    pub fn render_projects(&mut self) {
        let html = render::render_projects(&self.projects);
        self.document.mount(MountPoint::Projects, html);
    }

    pub fn render_certificates(&mut self) {
        let html = render::render_certificates(&self.certificates);
        self.document.mount(MountPoint::Certificates, html);
    }

    pub fn render_experiences(&mut self) {
        let html = render::render_experiences(&self.experiences);
        self.document.mount(MountPoint::Experience, html);
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn certificates(&self) -> &[Certificate] {
        &self.certificates
    }

    pub fn experiences(&self) -> &[Experience] {
        &self.experiences
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }
}

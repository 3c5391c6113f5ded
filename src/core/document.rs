use crate::utils::error::{Result, ShowcaseError};
use lol_html::html_content::ContentType;
use lol_html::{element, rewrite_str, RewriteStrSettings};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::rc::Rc;

/// Addressable regions of the output document, one per record kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MountPoint {
    Projects,
    Certificates,
    Experience,
}

impl MountPoint {
    pub const ALL: [MountPoint; 3] = [
        MountPoint::Projects,
        MountPoint::Certificates,
        MountPoint::Experience,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            MountPoint::Projects => "projects-grid",
            MountPoint::Certificates => "certificates-grid",
            MountPoint::Experience => "experience-grid",
        }
    }
}

impl fmt::Display for MountPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Host page used when none is configured.
pub const DEFAULT_SHELL: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Portfolio</title>
<script src="https://cdn.tailwindcss.com"></script>
</head>
<body class="bg-gradient-to-br from-slate-50 to-blue-50 min-h-screen">
<main class="max-w-6xl mx-auto px-4 py-12 space-y-16">
<section>
<h2 class="text-3xl font-bold text-slate-800 mb-8">Projects</h2>
<div id="projects-grid" class="grid gap-8 md:grid-cols-2"></div>
</section>
<section>
<h2 class="text-3xl font-bold text-slate-800 mb-8">Certificates</h2>
<div id="certificates-grid" class="grid gap-8 md:grid-cols-3"></div>
</section>
<section>
<h2 class="text-3xl font-bold text-slate-800 mb-8">Experience</h2>
<div id="experience-grid" class="space-y-8"></div>
</section>
</main>
</body>
</html>
"#;

/// Rendered content per mount point.
///
/// Mounting replaces a region wholesale; nothing is ever appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    regions: BTreeMap<MountPoint, String>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount(&mut self, point: MountPoint, html: String) {
        tracing::debug!("Mounting {} bytes into #{}", html.len(), point);
        self.regions.insert(point, html);
    }

    pub fn content(&self, point: MountPoint) -> Option<&str> {
        self.regions.get(&point).map(String::as_str)
    }

    pub fn is_mounted(&self, point: MountPoint) -> bool {
        self.regions.contains_key(&point)
    }

    /// Writes every mounted region into the element with the matching id
    /// of `host_html`, replacing that element's children.
    pub fn compose(&self, host_html: &str) -> Result<String> {
        let found = Rc::new(RefCell::new(BTreeSet::new()));

        let handlers = self
            .regions
            .iter()
            .map(|(point, html)| {
                let point = *point;
                let found = Rc::clone(&found);
                let selector = format!("#{}", point.id());
                element!(selector, move |el| {
                    el.set_inner_content(html, ContentType::Html);
                    found.borrow_mut().insert(point);
                    Ok(())
                })
            })
            .collect();

        let composed = rewrite_str(
            host_html,
            RewriteStrSettings {
                element_content_handlers: handlers,
                ..RewriteStrSettings::default()
            },
        )
        .map_err(|err| ShowcaseError::RenderError {
            message: err.to_string(),
        })?;

        let found = found.borrow();
        for point in self.regions.keys() {
            if !found.contains(point) {
                tracing::warn!("⚠️ Host page has no element with id '{}'", point.id());
            }
        }

        Ok(composed)
    }
}

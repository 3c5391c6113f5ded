//! Markup templates for the three sections.
//!
//! Every function here is pure: the same records always produce the same
//! bytes. Mounting the result is the caller's job (see
//! [`Document`](crate::core::document::Document)).

use crate::domain::model::{Certificate, Experience, ExperienceType, Project, RecordKind};
use std::borrow::Cow;

const PROJECT_TAG_CLASS: &str = "bg-gradient-to-r from-blue-50 to-indigo-50 border border-blue-200 text-blue-700 text-sm px-3 py-1.5 rounded-lg font-medium hover:from-blue-100 hover:to-indigo-100 transition-all duration-200";
const EXPERIENCE_TAG_CLASS: &str = "bg-gradient-to-r from-green-50 to-teal-50 border border-green-200 text-green-700 text-sm px-3 py-1.5 rounded-lg font-medium hover:from-green-100 hover:to-teal-100 transition-all duration-200";
const LINK_CLASS: &str = "inline-flex items-center px-4 py-2.5 text-white rounded-lg transition-all duration-200 shadow-md hover:shadow-lg font-medium text-sm";

const GITHUB_ICON: &str = r#"<svg class="w-4 h-4 mr-2" fill="currentColor" viewBox="0 0 24 24"><path d="M12 0c-6.626 0-12 5.373-12 12 0 5.302 3.438 9.8 8.207 11.387.599.111.793-.261.793-.577v-2.234c-3.338.726-4.033-1.416-4.033-1.416-.546-1.387-1.333-1.756-1.333-1.756-1.089-.745.083-.729.083-.729 1.205.084 1.839 1.237 1.839 1.237 1.07 1.834 2.807 1.304 3.492.997.107-.775.418-1.305.762-1.604-2.665-.305-5.467-1.334-5.467-5.931 0-1.311.469-2.381 1.236-3.221-.124-.303-.535-1.524.117-3.176 0 0 1.008-.322 3.301 1.23.957-.266 1.983-.399 3.003-.404 1.02.005 2.047.138 3.006.404 2.291-1.552 3.297-1.23 3.297-1.23.653 1.653.242 2.874.118 3.176.77.84 1.235 1.911 1.235 3.221 0 4.609-2.807 5.624-5.479 5.921.43.372.823 1.102.823 2.222v3.293c0 .319.192.694.801.576 4.765-1.589 8.199-6.086 8.199-11.386 0-6.627-5.373-12-12-12z"/></svg>"#;
const DEMO_ICON: &str = r#"<svg class="w-4 h-4 mr-2" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M10 6H6a2 2 0 00-2 2v10a2 2 0 002 2h10a2 2 0 002-2v-4M14 4h6m0 0v6m0-6L10 14"/></svg>"#;
const STAR_ICON: &str = r#"<svg class="w-4 h-4 mr-2" fill="currentColor" viewBox="0 0 24 24"><path d="M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z"/></svg>"#;

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

/// Concatenates fragments with no separator.
pub fn join_fragments<I>(fragments: I) -> String
where
    I: IntoIterator<Item = String>,
{
    fragments.into_iter().collect()
}

/// Placeholder shown when a collection is empty.
pub fn empty_state(kind: RecordKind) -> String {
    let (wrapper, icon, icon_color, message, message_color) = match kind {
        RecordKind::Project => (
            "col-span-full text-center py-12",
            "📁",
            "text-zinc-400",
            "No projects available",
            "text-zinc-500",
        ),
        RecordKind::Certificate => (
            "col-span-full text-center py-12",
            "🏆",
            "text-gray-400",
            "No certificates available",
            "text-gray-300",
        ),
        RecordKind::Experience => (
            "text-center py-12",
            "💼",
            "text-gray-400",
            "No experience data available",
            "text-gray-300",
        ),
    };

    format!(
        r#"<div class="{wrapper}" data-empty-state="{kind}">
<div class="{icon_color} text-6xl mb-4">{icon}</div>
<h3 class="text-xl font-medium {message_color} mb-2">{message}</h3>
</div>
"#
    )
}

pub fn render_projects(projects: &[Project]) -> String {
    if projects.is_empty() {
        return empty_state(RecordKind::Project);
    }
    join_fragments(projects.iter().map(project_fragment))
}

pub fn render_certificates(certificates: &[Certificate]) -> String {
    if certificates.is_empty() {
        return empty_state(RecordKind::Certificate);
    }
    join_fragments(certificates.iter().map(certificate_fragment))
}

pub fn render_experiences(experiences: &[Experience]) -> String {
    if experiences.is_empty() {
        return empty_state(RecordKind::Experience);
    }
    join_fragments(experiences.iter().map(experience_fragment))
}

fn inline_tags(items: &[String], class: &str) -> String {
    items
        .iter()
        .map(|item| format!(r#"<span class="{}">{}</span>"#, class, escape_html(item)))
        .collect()
}

fn bullet_lines(items: &[String], dot_gradient: &str, extra: &str) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                r#"<div class="flex items-start{extra}">
<div class="w-2 h-2 bg-gradient-to-r {dot_gradient} rounded-full mt-2 mr-3 flex-shrink-0"></div>
<p class="text-slate-600 text-sm leading-relaxed">{}</p>
</div>
"#,
                escape_html(item)
            )
        })
        .collect()
}

pub fn project_fragment(project: &Project) -> String {
    let achievements = project.achievements();
    let achievements_block = if achievements.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div class="mb-8" data-block="achievements">
<h4 class="text-sm font-semibold text-slate-700 mb-4 uppercase tracking-wide">Key Achievements</h4>
<div class="space-y-3">
{}</div>
</div>
"#,
            bullet_lines(
                achievements,
                "from-blue-500 to-indigo-500",
                " group-hover:translate-x-1 transition-transform duration-200"
            )
        )
    };

    let mut actions = String::new();
    if let Some(github) = project.github() {
        actions.push_str(&format!(
            r#"<a href="{}" target="_blank" rel="noopener" data-link="code" class="{LINK_CLASS} bg-gradient-to-r from-slate-800 to-slate-700 hover:from-slate-700 hover:to-slate-600">{GITHUB_ICON}View Code</a>
"#,
            escape_html(github)
        ));
    }
    if let Some(demo) = project.demo() {
        actions.push_str(&format!(
            r#"<a href="{}" target="_blank" rel="noopener" data-link="demo" class="{LINK_CLASS} bg-gradient-to-r from-blue-500 to-indigo-500 hover:from-blue-600 hover:to-indigo-600">{DEMO_ICON}Live Demo</a>
"#,
            escape_html(demo)
        ));
    }

    format!(
        r#"<div class="group bg-white/90 backdrop-blur-sm rounded-2xl shadow-lg border border-white/20 p-8 hover:shadow-2xl hover:scale-[1.02] transition-all duration-300 hover:bg-white/95" data-record="project">
<div class="flex items-start justify-between mb-6">
<div class="flex-1">
<h3 class="text-2xl font-bold text-slate-800 mb-2 group-hover:text-blue-600 transition-colors duration-200">{name}</h3>
<div class="w-16 h-1 bg-gradient-to-r from-blue-500 to-indigo-500 rounded-full"></div>
</div>
</div>
<p class="text-slate-600 mb-8 leading-relaxed text-base">{description}</p>
<div class="mb-8">
<h4 class="text-sm font-semibold text-slate-700 mb-3 uppercase tracking-wide">Technologies</h4>
<div class="flex flex-wrap gap-2">{technologies}</div>
</div>
{achievements_block}<div class="flex flex-wrap gap-4 pt-4 border-t border-slate-100" data-block="actions">{actions}</div>
</div>
"#,
        name = escape_html(&project.name),
        description = escape_html(&project.description),
        technologies = inline_tags(&project.technologies, PROJECT_TAG_CLASS),
    )
}

pub fn certificate_fragment(certificate: &Certificate) -> String {
    format!(
        r#"<div class="group bg-white/90 backdrop-blur-sm rounded-2xl shadow-lg border border-white/20 p-6 hover:shadow-2xl hover:scale-[1.02] transition-all duration-300 hover:bg-white/95 text-center" data-record="certificate">
<div class="mb-6">
<img src="{badge}" alt="{name}" class="w-24 h-24 mx-auto rounded-lg shadow-md">
</div>
<h3 class="text-xl font-bold text-slate-800 mb-2 group-hover:text-amber-600 transition-colors duration-200">{name}</h3>
<p class="text-slate-600 mb-2 font-medium">{issuer}</p>
<p class="text-slate-500 mb-4 text-sm">{date}</p>
<p class="text-slate-600 mb-6 text-sm leading-relaxed">{description}</p>
<div class="pt-4 border-t border-slate-100">
<a href="{url}" target="_blank" rel="noopener" data-link="credential" class="{LINK_CLASS} bg-gradient-to-r from-amber-500 to-yellow-500 hover:from-amber-600 hover:to-yellow-600">{STAR_ICON}View Certificate</a>
</div>
</div>
"#,
        badge = escape_html(&certificate.badge_image),
        name = escape_html(&certificate.name),
        issuer = escape_html(&certificate.issuer),
        date = escape_html(&certificate.date),
        description = escape_html(&certificate.description),
        url = escape_html(&certificate.credly_url),
    )
}

/// Badge classes for the status tag; exactly one bucket per type.
pub fn status_class(kind: &ExperienceType) -> &'static str {
    match kind {
        ExperienceType::Current => "bg-green-100 text-green-800",
        ExperienceType::Contract => "bg-blue-100 text-blue-800",
        ExperienceType::Other(_) => "bg-gray-100 text-gray-800",
    }
}

pub fn experience_fragment(experience: &Experience) -> String {
    format!(
        r#"<div class="group bg-white/90 backdrop-blur-sm rounded-2xl shadow-lg border border-white/20 p-8 hover:shadow-2xl transition-all duration-300 hover:bg-white/95" data-record="experience">
<div class="flex flex-col md:flex-row md:justify-between md:items-start mb-6">
<div class="flex-1 mb-4 md:mb-0">
<h3 class="text-2xl font-bold text-slate-800 mb-2 group-hover:text-green-600 transition-colors duration-200">{position}</h3>
<h4 class="text-xl font-semibold text-slate-600 mb-2">{company}</h4>
<p class="text-slate-500 text-sm">{location}</p>
</div>
<div class="flex flex-col items-start md:items-end">
<span class="text-slate-600 font-medium mb-2">{period}</span>
<span class="inline-flex items-center px-3 py-1 rounded-full text-xs font-medium {status_class}" data-status>{label}</span>
</div>
</div>
<p class="text-slate-600 mb-6 leading-relaxed">{description}</p>
<div class="mb-6">
<h5 class="text-sm font-semibold text-slate-700 mb-3 uppercase tracking-wide">Key Highlights</h5>
<div class="space-y-2">
{highlights}</div>
</div>
<div>
<h5 class="text-sm font-semibold text-slate-700 mb-3 uppercase tracking-wide">Technologies Used</h5>
<div class="flex flex-wrap gap-2">{technologies}</div>
</div>
</div>
"#,
        position = escape_html(&experience.position),
        company = escape_html(&experience.company),
        location = escape_html(&experience.location),
        period = escape_html(&experience.period),
        status_class = status_class(&experience.kind),
        label = escape_html(experience.kind.label()),
        description = escape_html(&experience.description),
        highlights = bullet_lines(&experience.highlights, "from-green-500 to-teal-500", ""),
        technologies = inline_tags(&experience.technologies, EXPERIENCE_TAG_CLASS),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(name: &str) -> Project {
        Project {
            name: name.to_string(),
            description: format!("{} description", name),
            technologies: vec!["Go".to_string(), "Rust".to_string()],
            achievements: None,
            github: None,
            demo: None,
        }
    }

    fn experience(kind: &str) -> Experience {
        Experience {
            position: "Engineer".to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            period: "2022 - 2024".to_string(),
            kind: ExperienceType::from(kind.to_string()),
            description: "Built things".to_string(),
            highlights: vec!["Shipped v1".to_string(), "Cut latency".to_string()],
            technologies: vec!["Rust".to_string()],
        }
    }

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn test_empty_collections_render_placeholder_only() {
        let projects = render_projects(&[]);
        assert_eq!(projects, empty_state(RecordKind::Project));
        assert!(projects.contains("No projects available"));
        assert_eq!(count(&projects, "data-record="), 0);

        let certificates = render_certificates(&[]);
        assert!(certificates.contains("No certificates available"));
        assert!(certificates.contains("🏆"));
        assert_eq!(count(&certificates, "data-record="), 0);

        let experiences = render_experiences(&[]);
        assert!(experiences.contains("No experience data available"));
        assert!(experiences.contains("💼"));
        assert_eq!(count(&experiences, "data-record="), 0);
    }

    #[test]
    fn test_fragment_count_and_order_follow_input() {
        let projects = vec![project("Alpha"), project("Beta"), project("Gamma")];
        let html = render_projects(&projects);

        assert_eq!(count(&html, r#"data-record="project""#), 3);
        let alpha = html.find("Alpha").unwrap();
        let beta = html.find("Beta").unwrap();
        let gamma = html.find("Gamma").unwrap();
        assert!(alpha < beta && beta < gamma);
        assert!(!html.contains("data-empty-state"));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let projects = vec![project("Alpha")];
        assert_eq!(render_projects(&projects), render_projects(&projects));

        let experiences = vec![experience("Current"), experience("Other")];
        assert_eq!(render_experiences(&experiences), render_experiences(&experiences));
    }

    #[test]
    fn test_technologies_only_project_has_empty_action_row() {
        let html = project_fragment(&project("Solo"));

        assert_eq!(count(&html, PROJECT_TAG_CLASS), 2);
        let go = html.find(">Go</span>").unwrap();
        let rust = html.find(">Rust</span>").unwrap();
        assert!(go < rust);

        assert!(html.contains(r#"data-block="actions"></div>"#));
        assert!(!html.contains("data-link="));
        assert!(!html.contains("Key Achievements"));
    }

    #[test]
    fn test_project_links_follow_field_presence() {
        let mut with_github = project("Code");
        with_github.github = Some("https://github.com/acme/code".to_string());
        let html = project_fragment(&with_github);
        assert!(html.contains(r#"href="https://github.com/acme/code""#));
        assert_eq!(count(&html, r#"data-link="code""#), 1);
        assert_eq!(count(&html, r#"data-link="demo""#), 0);

        let mut with_demo = project("Demo");
        with_demo.demo = Some("https://demo.acme.dev".to_string());
        let html = project_fragment(&with_demo);
        assert_eq!(count(&html, r#"data-link="code""#), 0);
        assert_eq!(count(&html, r#"data-link="demo""#), 1);
        assert!(html.contains("Live Demo"));
    }

    #[test]
    fn test_achievements_block_presence() {
        let mut empty = project("Empty");
        empty.achievements = Some(vec![]);
        assert!(!project_fragment(&empty).contains(r#"data-block="achievements""#));

        let mut two = project("Two");
        two.achievements = Some(vec!["First".to_string(), "Second".to_string()]);
        let html = project_fragment(&two);
        assert!(html.contains("Key Achievements"));
        assert_eq!(count(&html, "group-hover:translate-x-1"), 2);
        assert!(html.find("First").unwrap() < html.find("Second").unwrap());
    }

    #[test]
    fn test_certificate_fragment_contents() {
        let certificate = Certificate {
            name: "X".to_string(),
            issuer: "Y".to_string(),
            date: "2024".to_string(),
            description: "Z".to_string(),
            badge_image: "a.png".to_string(),
            credly_url: "https://example/x".to_string(),
        };
        let html = render_certificates(&[certificate]);

        assert_eq!(count(&html, r#"data-record="certificate""#), 1);
        assert!(html.contains(r#"<img src="a.png" alt="X""#));
        assert!(html.contains(">X</h3>"));
        assert!(html.contains(">Y</p>"));
        assert!(html.contains(">2024</p>"));
        assert!(html.contains(r#"href="https://example/x""#));
    }

    #[test]
    fn test_experience_status_buckets() {
        let current = experience_fragment(&experience("Current"));
        assert!(current.contains("bg-green-100 text-green-800"));
        assert!(!current.contains("bg-blue-100") && !current.contains("bg-gray-100"));

        let contract = experience_fragment(&experience("Contract"));
        assert!(contract.contains("bg-blue-100 text-blue-800"));
        assert!(!contract.contains("bg-green-100") && !contract.contains("bg-gray-100"));

        let freelance = experience_fragment(&experience("Freelance"));
        assert!(freelance.contains("bg-gray-100 text-gray-800"));
        assert!(!freelance.contains("bg-green-100") && !freelance.contains("bg-blue-100"));
        assert!(freelance.contains(">Freelance</span>"));
    }

    #[test]
    fn test_experience_lists_keep_order() {
        let html = experience_fragment(&experience("Current"));
        assert!(html.contains("Key Highlights"));
        assert!(html.contains("Technologies Used"));
        assert!(html.find("Shipped v1").unwrap() < html.find("Cut latency").unwrap());
        assert_eq!(count(&html, EXPERIENCE_TAG_CLASS), 1);
    }

    #[test]
    fn test_field_text_is_escaped() {
        let mut tricky = project("<script>alert('x')</script>");
        tricky.description = "R&D \"lab\"".to_string();
        let html = project_fragment(&tricky);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(html.contains("R&amp;D &quot;lab&quot;"));
        assert!(!html.contains("undefined"));
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let certificate = Certificate {
            name: "Cloud \"Pro\" <Level 2>".to_string(),
            issuer: "Y".to_string(),
            date: "2024".to_string(),
            description: "Z".to_string(),
            badge_image: "badge.png\" onerror=\"x".to_string(),
            credly_url: "https://example/x?a=1&b=\"2\"".to_string(),
        };
        let html = certificate_fragment(&certificate);

        assert!(html.contains(r#"href="https://example/x?a=1&amp;b=&quot;2&quot;""#));
        assert!(html.contains(r#"src="badge.png&quot; onerror=&quot;x""#));
        assert!(html.contains(r#"alt="Cloud &quot;Pro&quot; &lt;Level 2&gt;""#));
        assert!(!html.contains(r#"onerror="x"#));

        let mut project = project("Linked");
        project.github = Some("https://github.com/a\"b".to_string());
        assert!(project_fragment(&project).contains(r#"href="https://github.com/a&quot;b""#));
    }

    #[test]
    fn test_escape_html_borrows_plain_text() {
        assert!(matches!(escape_html("plain"), Cow::Borrowed("plain")));
    }
}

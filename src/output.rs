//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. Every page leads with
//! its positional index and navigation label; the content file it comes from
//! and its sections are indented context lines. The output reads as a content
//! inventory while still pointing back to the file to edit.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Pages
//! 001 Inicio → /
//!     Source: home.toml
//!     Nuestra Misión (3)
//!     Nuestros Servicios (6)
//! 003 Equipo → /equipo/
//!     Source: team.toml
//!     Estructura Organizacional (3)
//!     Integrantes de la Directiva: empty, shows "Próximamente presentaremos..."
//!
//! Config
//!     config.toml (stock defaults)
//! ```
//!
//! ## Build
//!
//! ```text
//! 001 home → index.html
//! 002 about → nosotros/index.html
//!
//! Assets
//!     assets/style-3f9a1c07d2.css
//!     assets/site-8b21e4f0aa.js
//!     8 public files
//!
//! Generated 8 pages
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.

use crate::content::{Content, Section};
use crate::generate::GenerateReport;
use crate::types::Route;
use std::path::Path;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut)
    }
}

/// One section summary: title and item count, or the placeholder it falls
/// back to when empty.
struct SectionLine {
    title: String,
    items: usize,
    placeholder: Option<String>,
}

impl SectionLine {
    fn of<T>(section: &Section<T>, content: &Content) -> Self {
        Self {
            title: section.title.clone(),
            items: section.items.len(),
            placeholder: Some(
                section
                    .placeholder
                    .clone()
                    .unwrap_or_else(|| content.site.labels.coming_soon.clone()),
            ),
        }
    }

    fn fixed(title: &str, items: usize) -> Self {
        Self {
            title: title.to_string(),
            items,
            placeholder: None,
        }
    }

    fn render(&self) -> String {
        match &self.placeholder {
            Some(text) if self.items == 0 => {
                format!("{}: empty, shows \"{}\"", self.title, truncate_desc(text, 40))
            }
            _ => format!("{} ({})", self.title, self.items),
        }
    }
}

/// Content file and section summaries of one route.
fn page_summary(route: Route, content: &Content) -> (&'static str, Vec<SectionLine>) {
    match route {
        Route::Home => {
            let home = &content.home;
            (
                "home.toml",
                vec![
                    SectionLine::of(&home.mission, content),
                    SectionLine::of(&home.services, content),
                    SectionLine::fixed(&home.events.title, home.events.membership.pricing.len()),
                ],
            )
        }
        Route::About => {
            let about = &content.about;
            (
                "about.toml",
                vec![
                    SectionLine::of(&about.history, content),
                    SectionLine::of(&about.objectives, content),
                    SectionLine::of(&about.values, content),
                    SectionLine::of(&about.partnerships, content),
                ],
            )
        }
        Route::Team => {
            let team = &content.team;
            (
                "team.toml",
                vec![
                    SectionLine::of(&team.structure, content),
                    SectionLine::of(&team.board, content),
                    SectionLine::of(&team.gallery, content),
                    SectionLine::of(&team.values, content),
                ],
            )
        }
        Route::Services => {
            let services = &content.services;
            (
                "services.toml",
                vec![
                    SectionLine::of(&services.services, content),
                    SectionLine::of(&services.process, content),
                ],
            )
        }
        Route::Events => {
            let events = &content.events;
            (
                "events.toml",
                vec![
                    SectionLine::of(&events.formats, content),
                    SectionLine::of(&events.upcoming, content),
                ],
            )
        }
        Route::Contact => (
            "contact.toml",
            vec![SectionLine::of(&content.contact.channels, content)],
        ),
        Route::CountryInitiative => {
            let country = &content.country;
            (
                "country.toml",
                vec![
                    SectionLine::fixed(
                        &country.initiative.thematic_areas.title,
                        country.initiative.thematic_areas.items.len(),
                    ),
                    SectionLine::of(&country.objectives, content),
                    SectionLine::of(&country.documents, content),
                ],
            )
        }
        Route::PortalLogin => (
            "portal.toml",
            vec![SectionLine::of(&content.portal.features, content)],
        ),
    }
}

/// Navigation label of `route`, falling back to its key when not in the navbar.
fn route_label(route: Route, content: &Content) -> String {
    content
        .site
        .nav
        .iter()
        .find(|link| link.route == route)
        .map(|link| link.label.clone())
        .unwrap_or_else(|| route.key().to_string())
}

// ============================================================================
// Check
// ============================================================================

/// Format the content inventory printed by `check`.
///
/// `config_path` is the site config file when present, `None` when stock
/// defaults apply.
pub fn format_check_output(content: &Content, config_path: Option<&Path>) -> Vec<String> {
    let mut lines = vec!["Pages".to_string()];

    for (i, route) in Route::ALL.iter().enumerate() {
        let (file, sections) = page_summary(*route, content);
        lines.push(format!(
            "{} {} → {}",
            format_index(i + 1),
            route_label(*route, content),
            route.href()
        ));
        lines.push(format!("{}Source: {}", indent(1), file));
        for section in &sections {
            lines.push(format!("{}{}", indent(1), section.render()));
        }
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    match config_path {
        Some(path) => lines.push(format!("{}{}", indent(1), path.display())),
        None => lines.push(format!("{}config.toml (stock defaults)", indent(1))),
    }

    lines
}

pub fn print_check_output(content: &Content, config_path: Option<&Path>) {
    for line in format_check_output(content, config_path) {
        println!("{}", line);
    }
}

// ============================================================================
// Build
// ============================================================================

/// Format the summary printed by `build`.
pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = Vec::new();

    for (i, (route, path)) in report.pages.iter().enumerate() {
        lines.push(format!(
            "{} {} → {}",
            format_index(i + 1),
            route.key(),
            path.display()
        ));
    }

    lines.push(String::new());
    lines.push("Assets".to_string());
    lines.push(format!("{}{}", indent(1), report.stylesheet.display()));
    lines.push(format!("{}{}", indent(1), report.script.display()));
    let noun = if report.public_files == 1 { "file" } else { "files" };
    lines.push(format!("{}{} public {}", indent(1), report.public_files, noun));

    lines.push(String::new());
    let noun = if report.pages.len() == 1 { "page" } else { "pages" };
    lines.push(format!("Generated {} {}", report.pages.len(), noun));

    lines
}

pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use std::path::PathBuf;

    // =========================================================================
    // Helper tests
    // =========================================================================

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
    }

    #[test]
    fn truncate_desc_short() {
        assert_eq!(truncate_desc("Short text", 40), "Short text");
    }

    #[test]
    fn truncate_desc_counts_chars_not_bytes() {
        assert_eq!(truncate_desc("Próximamente", 4), "Próx...");
    }

    #[test]
    fn truncate_desc_exact() {
        let text = "a".repeat(40);
        assert_eq!(truncate_desc(&text, 40), text);
    }

    // =========================================================================
    // Check
    // =========================================================================

    #[test]
    fn check_lists_every_route_in_order() {
        let lines = format_check_output(&bundled_content(), None);
        assert_eq!(lines[0], "Pages");
        assert_eq!(lines[1], "001 Inicio → /");
        assert_eq!(lines[2], "    Source: home.toml");
        let headers: Vec<&String> = lines
            .iter()
            .filter(|l| l.chars().next().is_some_and(|c| c.is_ascii_digit()))
            .collect();
        assert_eq!(headers.len(), Route::ALL.len());
        assert_eq!(headers[7], "008 Aula Virtual → /aulavirtual/");
    }

    #[test]
    fn check_counts_items() {
        let lines = format_check_output(&bundled_content(), None);
        assert!(lines.contains(&"    Nuestro Camino (5)".to_string()));
        assert!(lines.contains(&"    Próximos 4 Eventos (4)".to_string()));
    }

    #[test]
    fn check_marks_empty_collections() {
        let lines = format_check_output(&bundled_content(), None);
        let empty: Vec<&String> = lines.iter().filter(|l| l.contains(": empty, shows")).collect();
        assert_eq!(empty.len(), 2);
        assert!(empty[1].starts_with("    Documentos y Materiales: empty"));
    }

    #[test]
    fn check_reports_config_source() {
        let lines = format_check_output(&bundled_content(), None);
        assert_eq!(lines.last().unwrap(), "    config.toml (stock defaults)");

        let path = PathBuf::from("content/config.toml");
        let lines = format_check_output(&bundled_content(), Some(path.as_path()));
        assert_eq!(lines.last().unwrap(), "    content/config.toml");
    }

    // =========================================================================
    // Build
    // =========================================================================

    fn report() -> GenerateReport {
        GenerateReport {
            pages: vec![
                (Route::Home, PathBuf::from("index.html")),
                (Route::Events, PathBuf::from("eventos/index.html")),
            ],
            stylesheet: PathBuf::from("assets/style-0123456789.css"),
            script: PathBuf::from("assets/site-abcdef0123.js"),
            public_files: 1,
        }
    }

    #[test]
    fn generate_lists_pages_and_assets() {
        let lines = format_generate_output(&report());
        assert_eq!(
            lines,
            vec![
                "001 home → index.html",
                "002 events → eventos/index.html",
                "",
                "Assets",
                "    assets/style-0123456789.css",
                "    assets/site-abcdef0123.js",
                "    1 public file",
                "",
                "Generated 2 pages",
            ]
        );
    }
}

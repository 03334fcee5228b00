//! Shared test utilities for the supap-site test suite.
//!
//! Provides content fixtures (the bundled `content/` directory, loaded or
//! copied to a temp dir), small record builders, and HTML assertions used by
//! the page renderer tests.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_helpers::*;
//!
//! let content = bundled_content();
//! let html = render(Route::Team, &content);
//! assert_eq!(count(&html, "board-card"), 0);
//! ```

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::config::SiteConfig;
use crate::content::{self, BoardMember, Content, Document};
use crate::generate::Site;
use crate::pages;
use crate::types::Route;

// =========================================================================
// Fixture setup
// =========================================================================

/// The content directory shipped with the repository.
pub fn bundled_content_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("content")
}

/// Load and validate the bundled content.
pub fn bundled_content() -> Content {
    content::load(&bundled_content_dir()).unwrap()
}

/// Copy the bundled content to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests.
pub fn setup_content() -> TempDir {
    let tmp = TempDir::new().unwrap();
    for entry in std::fs::read_dir(bundled_content_dir()).unwrap() {
        let path = entry.unwrap().path();
        if path.is_file() {
            std::fs::copy(&path, tmp.path().join(path.file_name().unwrap())).unwrap();
        }
    }
    tmp
}

/// Append raw TOML to a content file.
pub fn append(root: &Path, file: &str, text: &str) {
    let path = root.join(file);
    let mut existing = std::fs::read_to_string(&path).unwrap();
    existing.push_str(text);
    std::fs::write(&path, existing).unwrap();
}

// =========================================================================
// Builders
// =========================================================================

pub fn board_member(name: &str, image: Option<&str>) -> BoardMember {
    BoardMember {
        name: name.to_string(),
        role: "Vocal".to_string(),
        bio: "Psicóloga clínica.".to_string(),
        image: image.map(str::to_string),
    }
}

pub fn document(title: &str) -> Document {
    Document {
        title: title.to_string(),
        description: "Propuesta de marco regulatorio.".to_string(),
        date: "2025-05-01".to_string(),
        file: format!("/docs/{}.pdf", title.to_lowercase().replace(' ', "-")),
        kind: "PDF".to_string(),
    }
}

// =========================================================================
// Rendering
// =========================================================================

/// Render one route with default config and asset names.
pub fn render(route: Route, content: &Content) -> String {
    let config = SiteConfig::default();
    let site = Site::new(content, &config, "/assets/style.css", "/assets/site.js");
    pages::render_page(route, &site).into_string()
}

// =========================================================================
// HTML assertions
// =========================================================================

/// Count occurrences of a class token in `class="..."` attributes.
pub fn count(html: &str, class: &str) -> usize {
    html.split("class=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .filter(|classes| classes.split_whitespace().any(|c| c == class))
        .count()
}

/// Assert `needles` appear in `html` in the given order.
pub fn assert_in_order(html: &str, needles: &[&str]) {
    let mut from = 0;
    for needle in needles {
        match html[from..].find(needle) {
            Some(pos) => from += pos + needle.len(),
            None => panic!("{needle:?} missing or out of order"),
        }
    }
}

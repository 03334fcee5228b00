//! HTML site generation.
//!
//! Takes the loaded content records and the site config and writes the final
//! static site.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html                     # Home
//! ├── nosotros/index.html            # About
//! ├── equipo/index.html              # Team
//! ├── servicios/index.html           # Services
//! ├── eventos/index.html             # Events
//! ├── contacto/index.html            # Contact
//! ├── accionpais/index.html          # Country initiative
//! ├── aulavirtual/index.html         # Learning-portal login
//! ├── assets/
//! │   ├── style-3f9a1c07d2.css       # Config CSS + static/style.css
//! │   └── site-8b21e4f0aa.js         # static/site.js
//! └── images/...                     # Copied verbatim from the public root
//! ```
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: Base styles (colors and theme injected from config)
//! - `static/site.js`: Reveal observer, transition overlay, contact form,
//!   placeholder notices
//!
//! Both are written under a content-hashed file name, so a deploy never
//! serves a stale stylesheet or script from a browser cache.

use crate::config::{self, SiteConfig};
use crate::content::Content;
use crate::pages;
use crate::reveal::Threshold;
use crate::types::Route;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error walking public assets: {0}")]
    Walk(#[from] walkdir::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/site.js");

/// Everything a page renderer needs: content, config and asset URLs.
pub struct Site<'a> {
    pub content: &'a Content,
    pub config: &'a SiteConfig,
    /// Absolute URL of the stylesheet.
    pub stylesheet: String,
    /// Absolute URL of the site script.
    pub script: String,
}

impl<'a> Site<'a> {
    pub fn new(content: &'a Content, config: &'a SiteConfig, stylesheet: &str, script: &str) -> Self {
        Self {
            content,
            config,
            stylesheet: stylesheet.to_string(),
            script: script.to_string(),
        }
    }

    /// Site-wide reveal threshold.
    pub fn threshold(&self) -> Threshold {
        self.config.animation.threshold
    }
}

/// What a generation run wrote.
#[derive(Debug)]
pub struct GenerateReport {
    /// Every route with its output file, relative to the output root.
    pub pages: Vec<(Route, PathBuf)>,
    /// Stylesheet path relative to the output root.
    pub stylesheet: PathBuf,
    /// Script path relative to the output root.
    pub script: PathBuf,
    /// Files copied from the public root.
    pub public_files: usize,
}

pub fn generate(
    content: &Content,
    config: &SiteConfig,
    public_dir: &Path,
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    fs::create_dir_all(output_dir)?;

    // Public assets first, so generated files win on a name clash
    let public_files = if public_dir.is_dir() {
        copy_public_assets(public_dir, output_dir)?
    } else {
        0
    };

    let css = stylesheet(config);
    let stylesheet = write_hashed_asset(output_dir, "style", "css", &css)?;
    let script = write_hashed_asset(output_dir, "site", "js", JS)?;

    let site = Site::new(
        content,
        config,
        &asset_url(&stylesheet),
        &asset_url(&script),
    );

    let mut pages = Vec::with_capacity(Route::ALL.len());
    for route in Route::ALL {
        let markup = pages::render_page(route, &site);
        let relative = route.output_path();
        let path = output_dir.join(&relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, markup.into_string())?;
        pages.push((route, relative));
    }

    Ok(GenerateReport {
        pages,
        stylesheet,
        script,
        public_files,
    })
}

/// Full stylesheet: config-derived custom properties, then the static rules.
pub fn stylesheet(config: &SiteConfig) -> String {
    let color_css = config::generate_color_css(&config.colors);
    let theme_css = config::generate_theme_css(&config.theme, &config.animation);
    format!("{}\n\n{}\n\n{}", color_css, theme_css, CSS_STATIC)
}

/// First 10 hex characters of the SHA-256 of `contents`.
pub fn content_hash(contents: &str) -> String {
    let digest = Sha256::digest(contents.as_bytes());
    digest
        .iter()
        .take(5)
        .map(|b| format!("{:02x}", b))
        .collect()
}

/// Write `assets/<stem>-<hash>.<ext>` and return its path relative to the output root.
fn write_hashed_asset(
    output_dir: &Path,
    stem: &str,
    ext: &str,
    contents: &str,
) -> Result<PathBuf, GenerateError> {
    let relative = PathBuf::from("assets").join(format!("{stem}-{}.{ext}", content_hash(contents)));
    let path = output_dir.join(&relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, contents)?;
    Ok(relative)
}

/// Root-relative URL for a path relative to the output root.
fn asset_url(relative: &Path) -> String {
    let parts: Vec<_> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    format!("/{}", parts.join("/"))
}

/// Copy every file under `public_dir` into `output_dir`, keeping the layout.
fn copy_public_assets(public_dir: &Path, output_dir: &Path) -> Result<usize, GenerateError> {
    let mut copied = 0;
    for entry in WalkDir::new(public_dir).min_depth(1) {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(public_dir)
            .unwrap_or(entry.path());
        let target = output_dir.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else if entry.file_type().is_file() {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    fn generate_into(public: &Path) -> (TempDir, GenerateReport) {
        let out = TempDir::new().unwrap();
        let content = bundled_content();
        let report = generate(&content, &SiteConfig::default(), public, out.path()).unwrap();
        (out, report)
    }

    #[test]
    fn writes_every_route() {
        let public = TempDir::new().unwrap();
        let (out, report) = generate_into(public.path());
        assert_eq!(report.pages.len(), Route::ALL.len());
        for route in Route::ALL {
            let path = out.path().join(route.output_path());
            assert!(path.is_file(), "missing {}", path.display());
        }
    }

    #[test]
    fn pages_reference_hashed_assets() {
        let public = TempDir::new().unwrap();
        let (out, report) = generate_into(public.path());
        assert!(out.path().join(&report.stylesheet).is_file());
        assert!(out.path().join(&report.script).is_file());

        let index = fs::read_to_string(out.path().join("index.html")).unwrap();
        assert!(index.contains(&asset_url(&report.stylesheet)));
        assert!(index.contains(&asset_url(&report.script)));
    }

    #[test]
    fn copies_public_tree() {
        let public = TempDir::new().unwrap();
        fs::create_dir_all(public.path().join("images")).unwrap();
        fs::write(public.path().join("images/logo.svg"), "<svg/>").unwrap();
        fs::write(public.path().join("robots.txt"), "User-agent: *").unwrap();

        let (out, report) = generate_into(public.path());
        assert_eq!(report.public_files, 2);
        assert!(out.path().join("images/logo.svg").is_file());
        assert!(out.path().join("robots.txt").is_file());
    }

    #[test]
    fn missing_public_dir_is_fine() {
        let tmp = TempDir::new().unwrap();
        let (_out, report) = generate_into(&tmp.path().join("nope"));
        assert_eq!(report.public_files, 0);
    }

    #[test]
    fn content_hash_is_stable_and_content_sensitive() {
        assert_eq!(content_hash("a"), content_hash("a"));
        assert_ne!(content_hash("a"), content_hash("b"));
        assert_eq!(content_hash("a").len(), 10);
    }

    #[test]
    fn stylesheet_changes_with_config() {
        let mut config = SiteConfig::default();
        let before = content_hash(&stylesheet(&config));
        config.colors.light.primary = "#000000".to_string();
        let after = content_hash(&stylesheet(&config));
        assert_ne!(before, after);
    }

    #[test]
    fn stylesheet_contains_reveal_rules() {
        let css = stylesheet(&SiteConfig::default());
        assert!(css.contains(".opacity-0-start"));
        assert!(css.contains(".animate-fade-in-up"));
        assert!(css.contains(".delay-600"));
    }

    #[test]
    fn stylesheet_hides_overlay_without_script() {
        let css = stylesheet(&SiteConfig::default());
        assert!(css.contains(
            "animation: page-transition-out 0s linear var(--transition-duration) forwards;"
        ));
        assert!(css.contains("@keyframes page-transition-out"));
        assert!(css.contains("--transition-duration: 100ms;"));
        assert!(!css.contains(".page-transition.done"));
    }

    #[test]
    fn asset_url_is_root_relative() {
        assert_eq!(
            asset_url(&PathBuf::from("assets").join("site-0123456789.js")),
            "/assets/site-0123456789.js"
        );
    }
}

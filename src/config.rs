//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. The file lives in
//! the content directory next to the page content files and holds
//! presentation settings only; words and links belong in the content files.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! lang = "es"                # <html lang> attribute
//!
//! [theme]
//! container_width = "72rem"  # Max width of page sections
//! radius = "0.75rem"         # Corner radius of cards and buttons
//!
//! [animation]
//! threshold = 0.1            # Visible fraction that triggers a reveal (0-1)
//! transition_ms = 100        # Route-transition overlay duration
//!
//! [colors.light]
//! background = "#ffffff"
//! foreground = "#1f2433"
//! muted = "#5f6675"          # Secondary text, captions
//! primary = "#2f5d8a"
//! secondary = "#2e8b7a"
//! accent = "#c9774d"
//! border = "#e3e6ec"
//!
//! [colors.dark]
//! background = "#10131a"
//! foreground = "#eef0f4"
//! muted = "#a0a6b3"
//! primary = "#7fb0de"
//! secondary = "#6cc6b4"
//! accent = "#e5a07c"
//! border = "#2a2f3a"
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse: override just the values you want:
//!
//! ```toml
//! [animation]
//! threshold = 0.25
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::reveal::Threshold;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Language tag for the `<html lang>` attribute.
    pub lang: String,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
    /// Layout settings.
    pub theme: ThemeConfig,
    /// Reveal and route-transition timing.
    pub animation: AnimationConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            lang: "es".to_string(),
            colors: ColorConfig::default(),
            theme: ThemeConfig::default(),
            animation: AnimationConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lang.trim().is_empty() {
            return Err(ConfigError::Validation("lang must not be empty".into()));
        }
        if self.animation.transition_ms > AnimationConfig::MAX_TRANSITION_MS {
            return Err(ConfigError::Validation(format!(
                "animation.transition_ms must be at most {}",
                AnimationConfig::MAX_TRANSITION_MS
            )));
        }
        for (mode, scheme) in [("light", &self.colors.light), ("dark", &self.colors.dark)] {
            if let Some(key) = scheme.first_empty() {
                return Err(ConfigError::Validation(format!(
                    "colors.{mode}.{key} must not be empty"
                )));
            }
        }
        Ok(())
    }
}

/// Reveal and route-transition timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationConfig {
    /// Visible fraction of an element that triggers its reveal.
    /// Out-of-range values fail to parse.
    pub threshold: Threshold,
    /// How long the overlay masking a route change stays up, in milliseconds.
    pub transition_ms: u64,
}

impl AnimationConfig {
    pub const MAX_TRANSITION_MS: u64 = 2000;

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            threshold: Threshold::DEFAULT,
            transition_ms: 100,
        }
    }
}

/// Layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Max width of the centered section container (CSS value).
    pub container_width: String,
    /// Corner radius for cards, buttons and inputs (CSS value).
    pub radius: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            container_width: "72rem".to_string(),
            radius: "0.75rem".to_string(),
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Light mode color scheme.
    pub light: ColorScheme,
    /// Dark mode color scheme.
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    /// Page background.
    pub background: String,
    /// Primary text color.
    pub foreground: String,
    /// Secondary text (descriptions, captions, footer links).
    pub muted: String,
    /// Brand color: hero gradient start, buttons, badges.
    pub primary: String,
    /// Second brand color: hero gradient end, secondary buttons.
    pub secondary: String,
    /// Highlight color for accents.
    pub accent: String,
    /// Border color.
    pub border: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            foreground: "#1f2433".to_string(),
            muted: "#5f6675".to_string(),
            primary: "#2f5d8a".to_string(),
            secondary: "#2e8b7a".to_string(),
            accent: "#c9774d".to_string(),
            border: "#e3e6ec".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#10131a".to_string(),
            foreground: "#eef0f4".to_string(),
            muted: "#a0a6b3".to_string(),
            primary: "#7fb0de".to_string(),
            secondary: "#6cc6b4".to_string(),
            accent: "#e5a07c".to_string(),
            border: "#2a2f3a".to_string(),
        }
    }

    fn first_empty(&self) -> Option<&'static str> {
        [
            ("background", &self.background),
            ("foreground", &self.foreground),
            ("muted", &self.muted),
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("accent", &self.accent),
            ("border", &self.border),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(key, _)| key)
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# SUPAP Site Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file in the content directory (content/config.toml).
# Unknown keys will cause an error.

# Language tag for the <html lang> attribute.
lang = "es"

# ---------------------------------------------------------------------------
# Layout
# ---------------------------------------------------------------------------
[theme]
# Max width of the centered section container (CSS value).
container_width = "72rem"

# Corner radius for cards, buttons and inputs (CSS value).
radius = "0.75rem"

# ---------------------------------------------------------------------------
# Animation
# ---------------------------------------------------------------------------
[animation]
# Fraction of an element that must be visible before its entrance animation
# starts (0 = as soon as one pixel shows, 1 = fully visible).
threshold = 0.1

# How long the overlay that masks route changes stays up, in milliseconds.
# At most 2000.
transition_ms = 100

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
foreground = "#1f2433"
muted = "#5f6675"         # Descriptions, captions, footer links
primary = "#2f5d8a"
secondary = "#2e8b7a"
accent = "#c9774d"
border = "#e3e6ec"

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#10131a"
foreground = "#eef0f4"
muted = "#a0a6b3"
primary = "#7fb0de"
secondary = "#6cc6b4"
accent = "#e5a07c"
border = "#2a2f3a"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
{light}
}}

@media (prefers-color-scheme: dark) {{
    :root {{
{dark}
    }}
}}"#,
        light = color_variables(&colors.light, "    "),
        dark = color_variables(&colors.dark, "        "),
    )
}

fn color_variables(scheme: &ColorScheme, indent: &str) -> String {
    [
        ("--color-bg", &scheme.background),
        ("--color-fg", &scheme.foreground),
        ("--color-muted", &scheme.muted),
        ("--color-primary", &scheme.primary),
        ("--color-secondary", &scheme.secondary),
        ("--color-accent", &scheme.accent),
        ("--color-border", &scheme.border),
    ]
    .iter()
    .map(|(name, value)| format!("{indent}{name}: {value};"))
    .collect::<Vec<_>>()
    .join("\n")
}

/// Generate CSS custom properties from theme and animation config.
pub fn generate_theme_css(theme: &ThemeConfig, animation: &AnimationConfig) -> String {
    format!(
        r#":root {{
    --container-width: {container_width};
    --radius: {radius};
    --transition-duration: {transition_ms}ms;
}}"#,
        container_width = theme.container_width,
        radius = theme.radius,
        transition_ms = animation.transition_ms,
    )
}

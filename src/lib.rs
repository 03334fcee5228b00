//! # SUPAP Site
//!
//! Static site generator for the SUPAP website (Sociedad Uruguaya de
//! Psicoterapias Asistidas con Psicodélicos): eight informational pages
//! rendered from TOML content records into plain HTML, one stylesheet and
//! one small script.
//!
//! # Pipeline
//!
//! ```text
//! content/*.toml  →  Content (typed, validated)  →  dist/<route>/index.html
//! content/config.toml  →  SiteConfig            →  dist/assets/style-<hash>.css
//! public/              →  copied verbatim       →  dist/...
//! ```
//!
//! Generation is a single sequential pass. The only runtime behaviour lives in
//! the embedded `static/site.js`: scroll reveals, the route-transition overlay,
//! the contact form's `mailto:` link and the "coming soon" notices.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | Page content records, loading and cross-record validation |
//! | [`config`] | `config.toml` loading, merging over stock defaults, CSS generation |
//! | [`types`] | Routes and navigation entries |
//! | [`icons`] | Fixed icon identifier → inline SVG lookup |
//! | [`reveal`] | One-shot scroll reveal: visibility state machine and wrapper markup |
//! | [`mailto`] | `mailto:` link construction and parsing for the contact form |
//! | [`layout`] | Document shell, navbar, footer, transition overlay |
//! | [`pages`] | One renderer per route plus shared building blocks |
//! | [`generate`] | Writes pages, fingerprinted assets and public files |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Content As Data
//!
//! Every word on the site lives in `content/`. Renderers never hard-code copy,
//! so editing text or adding an event, board member or document is a TOML
//! change. Empty collections render a placeholder notice instead of an empty
//! grid.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/): templates are
//! checked at compile time and every interpolation is escaped.
//!
//! ## No Backend
//!
//! Nothing is ever posted. The contact form hands off to the visitor's mail
//! client and the learning-portal login only answers with a notice.

pub mod config;
pub mod content;
pub mod generate;
pub mod icons;
pub mod layout;
pub mod mailto;
pub mod output;
pub mod pages;
pub mod reveal;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;

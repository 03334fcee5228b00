//! Routes and navigation entries shared by content, layout and generation.
//!
//! Every page of the site is a static path with no parameters. A [`Route`] is
//! the single source of truth for where a page lives: its URL, the directory
//! it is written to, and the key content files use to link to it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// One page of the site.
///
/// Content files refer to routes by their snake_case key
/// (`route = "country_initiative"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Home,
    About,
    Team,
    Services,
    Events,
    Contact,
    CountryInitiative,
    PortalLogin,
}

impl Route {
    /// All routes, in generation order.
    pub const ALL: [Route; 8] = [
        Route::Home,
        Route::About,
        Route::Team,
        Route::Services,
        Route::Events,
        Route::Contact,
        Route::CountryInitiative,
        Route::PortalLogin,
    ];

    /// Directory name under the output root. Empty for the home page.
    pub fn slug(self) -> &'static str {
        match self {
            Route::Home => "",
            Route::About => "nosotros",
            Route::Team => "equipo",
            Route::Services => "servicios",
            Route::Events => "eventos",
            Route::Contact => "contacto",
            Route::CountryInitiative => "accionpais",
            Route::PortalLogin => "aulavirtual",
        }
    }

    /// Absolute URL path, always with a trailing slash.
    pub fn href(self) -> String {
        match self.slug() {
            "" => "/".to_string(),
            slug => format!("/{slug}/"),
        }
    }

    /// Output file relative to the site root (`eventos/index.html`).
    pub fn output_path(self) -> PathBuf {
        match self.slug() {
            "" => PathBuf::from("index.html"),
            slug => PathBuf::from(slug).join("index.html"),
        }
    }

    /// Key used in content files and CLI output.
    pub fn key(self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::About => "about",
            Route::Team => "team",
            Route::Services => "services",
            Route::Events => "events",
            Route::Contact => "contact",
            Route::CountryInitiative => "country_initiative",
            Route::PortalLogin => "portal_login",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Navigation entry shown in the navbar and the footer links list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavLink {
    pub label: String,
    pub route: Route,
}

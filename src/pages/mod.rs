//! Page renderers, one module per route.
//!
//! Each module exposes `render(site) -> Markup` producing the route's `<main>`
//! content; [`render_page`] wraps it in the shared document shell.

pub mod about;
pub mod blocks;
pub mod contact;
pub mod country;
pub mod events;
pub mod home;
pub mod portal;
pub mod services;
pub mod team;

use crate::generate::Site;
use crate::layout;
use crate::types::Route;
use maud::Markup;

/// Render the complete HTML document for `route`.
pub fn render_page(route: Route, site: &Site) -> Markup {
    let content = match route {
        Route::Home => home::render(site),
        Route::About => about::render(site),
        Route::Team => team::render(site),
        Route::Services => services::render(site),
        Route::Events => events::render(site),
        Route::Contact => contact::render(site),
        Route::CountryInitiative => country::render(site),
        Route::PortalLogin => portal::render(site),
    };
    layout::page_shell(site, route, page_title(route, site), content)
}

/// Title shown in the browser tab: the page hero's heading.
pub fn page_title<'a>(route: Route, site: &'a Site) -> &'a str {
    let content = site.content;
    match route {
        Route::Home => &content.home.hero.title,
        Route::About => &content.about.hero.title,
        Route::Team => &content.team.hero.title,
        Route::Services => &content.services.hero.title,
        Route::Events => &content.events.hero.title,
        Route::Contact => &content.contact.hero.title,
        Route::CountryInitiative => &content.country.hero.title,
        Route::PortalLogin => &content.portal.hero.title,
    }
}

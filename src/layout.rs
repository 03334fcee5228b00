//! Page chrome shared by every route: document shell, navbar, footer and the
//! route-transition overlay.

use crate::generate::Site;
use crate::mailto::MailtoLink;
use crate::types::Route;
use maud::{DOCTYPE, Markup, html};
use std::time::Duration;

/// Without the site script nothing would ever reveal, so show every wrapper.
const NOSCRIPT_CSS: &str = ".opacity-0-start { opacity: 1; }";

/// Full-screen overlay that masks the flash of a route change.
///
/// Every page renders with the overlay up; the site script removes it once
/// `duration` has elapsed after load, whatever the route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionOverlay {
    duration: Duration,
}

impl TransitionOverlay {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Whether the overlay still covers the page `elapsed` after navigation.
    pub fn is_visible(&self, elapsed: Duration) -> bool {
        elapsed < self.duration
    }

    pub fn render(&self) -> Markup {
        html! {
            div.page-transition
                data-duration=(self.duration.as_millis().to_string())
                aria-hidden="true" {}
        }
    }
}

/// Renders the complete HTML document for one route.
pub fn page_shell(site: &Site, route: Route, title: &str, content: Markup) -> Markup {
    let org = &site.content.site.organization;
    let full_title = if route == Route::Home {
        format!("{} | {}", org.name, org.full_name)
    } else {
        format!("{} | {}", title, org.name)
    };
    let overlay = TransitionOverlay::new(site.config.animation.transition());

    html! {
        (DOCTYPE)
        html lang=(site.config.lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(org.description);
                title { (full_title) }
                link rel="icon" href=(org.logo);
                link rel="stylesheet" href=(site.stylesheet);
                script src=(site.script) defer {}
                noscript {
                    style { (NOSCRIPT_CSS) }
                }
            }
            body data-route=(route.key()) {
                (overlay.render())
                (navbar(site, route))
                main id="content" class="page-content" {
                    (content)
                }
                (footer(site))
            }
        }
    }
}

/// Renders the site header: logo, organization name and the route links.
///
/// The menu collapses behind a checkbox toggle on narrow screens, no script needed.
pub fn navbar(site: &Site, current: Route) -> Markup {
    let site_content = &site.content.site;
    let org = &site_content.organization;

    html! {
        header.navbar {
            div.container.navbar-inner {
                a.brand href=(Route::Home.href()) {
                    img.brand-logo src=(org.logo) alt=(org.name) width="40" height="40";
                    span.brand-text {
                        span.brand-name { (org.name) }
                        span.brand-tagline { (org.tagline) }
                    }
                }
                input.nav-toggle type="checkbox" id="nav-toggle";
                label.nav-hamburger for="nav-toggle" aria-label=(site_content.labels.menu) {
                    span.hamburger-line {}
                    span.hamburger-line {}
                    span.hamburger-line {}
                }
                nav.nav-links {
                    ul {
                        @for link in &site_content.nav {
                            @let is_current = link.route == current;
                            li class=[is_current.then_some("current")] {
                                a href=(link.route.href())
                                    aria-current=[is_current.then_some("page")] {
                                    (link.label)
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Renders the footer: organization blurb, links, contact channels, copyright.
pub fn footer(site: &Site) -> Markup {
    let site_content = &site.content.site;
    let org = &site_content.organization;
    let footer = &site_content.footer;

    html! {
        footer.site-footer {
            div.container {
                div.footer-grid {
                    div.footer-about {
                        div.footer-brand {
                            img.footer-logo src=(org.logo) alt=(org.name) width="40" height="40";
                            div {
                                h3 { (org.name) }
                                p.footer-tagline { (org.tagline) }
                            }
                        }
                        p { (org.description) }
                    }
                    div.footer-links {
                        h4 { (footer.links_title) }
                        ul {
                            @for link in &site_content.nav {
                                li { a href=(link.route.href()) { (link.label) } }
                            }
                        }
                    }
                    div.footer-contact {
                        h4 { (footer.contact_title) }
                        p {
                            a href=(MailtoLink::to_address(&footer.email).to_uri()) { (footer.email) }
                        }
                        p {
                            a href=(footer.instagram_url) target="_blank" rel="noopener noreferrer" {
                                (footer.instagram)
                            }
                        }
                        p { (footer.country) }
                    }
                }
                div.footer-bottom {
                    p { (footer.copyright) }
                }
            }
        }
    }
}

//! Home page (`/`).

use super::blocks::{self, reveal};
use crate::content::{HomeEvents, ServiceHighlight};
use crate::generate::Site;
use crate::icons::Icon;
use crate::reveal::{Delay, Reveal};
use maud::{Markup, html};

pub fn render(site: &Site) -> Markup {
    let home = &site.content.home;

    // Mission cards enter after the header: 100, 200, 300 ms.
    let mission = html! {
        (blocks::header_for(site, &home.mission))
        (blocks::collection(site, &home.mission, "cols-3", |i, feature| {
            reveal(
                site,
                Reveal::fade_in_up().with_delay(Delay::staggered(i + 1, 4)),
                blocks::feature_card(feature),
            )
        }))
        div.section-link { (blocks::action(&home.mission_link, "button-outline")) }
    };

    let services = html! {
        (blocks::header_for(site, &home.services))
        (blocks::collection(site, &home.services, "cols-3", |i, service| {
            reveal(
                site,
                Reveal::fade_in_up().with_delay(Delay::staggered(i, 3)),
                highlight_card(service),
            )
        }))
        div.section-link { (blocks::action(&home.services_link, "button-outline")) }
    };

    html! {
        (blocks::hero(&home.hero))
        (blocks::page_section("tone-plain", Some("mision"), mission))
        (blocks::page_section("tone-muted", Some("servicios"), services))
        (blocks::page_section("tone-plain", Some("eventos"), events(site, &home.events)))
        (blocks::cta(site, &home.cta))
    }
}

fn highlight_card(service: &ServiceHighlight) -> Markup {
    html! {
        article class=(format!("card highlight-card {}", service.accent.class_name())) {
            h3 { (service.title) }
            p { (service.description) }
        }
    }
}

fn events(site: &Site, events: &HomeEvents) -> Markup {
    let next = &events.next;
    let membership = &events.membership;

    let next_card = html! {
        article.card.next-event-card {
            header.next-event-header {
                span.next-event-badge { (Icon::Calendar.glyph()) (next.badge) }
                h3 { (next.title) }
            }
            ul.detail-list {
                li { (Icon::Calendar.glyph()) span { (next.date) } }
                li { (Icon::MapPin.glyph()) span { (next.location) } }
            }
            p.speakers { (next.speakers) }
        }
    };

    let membership_card = html! {
        article.card.membership-card {
            h3 { (membership.title) }
            ul.price-list {
                @for price in &membership.pricing {
                    li.price-row {
                        span { (price.label) }
                        span class=(if price.featured { "price featured" } else { "price" }) {
                            (price.value)
                        }
                    }
                }
            }
            p.note { strong { (membership.registration.label) } " " (membership.registration.value) }
            p.note { strong { (membership.inquiries.label) } " " (membership.inquiries.value) }
        }
    };

    html! {
        (reveal(
            site,
            Reveal::fade_in_up(),
            blocks::section_header(None, &events.title, Some(events.description.as_str())),
        ))
        div.grid.cols-2.narrow {
            (reveal(site, Reveal::fade_in_up().with_delay(Delay::staggered(1, 4)), next_card))
            (reveal(site, Reveal::fade_in_up().with_delay(Delay::staggered(2, 4)), membership_card))
        }
        div.section-link { (blocks::action(&events.link, "button-outline")) }
    }
}

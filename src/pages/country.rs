//! Country initiative page (`/accionpais/`).

use super::blocks::{self, inline_markdown, reveal};
use crate::content::{Document, Initiative, padded_date};
use crate::generate::Site;
use crate::icons::Icon;
use crate::reveal::{Delay, Reveal};
use maud::{Markup, html};

pub fn render(site: &Site) -> Markup {
    let page = &site.content.country;

    let intro = html! {
        (blocks::header_for(site, &page.intro))
        @for paragraph in &page.intro.items {
            p.prose { (inline_markdown(paragraph)) }
        }
    };

    let objectives = html! {
        (blocks::header_for(site, &page.objectives))
        (blocks::feature_grid(site, &page.objectives, "cols-2 narrow", 2))
    };

    let documents = html! {
        (blocks::header_for(site, &page.documents))
        (blocks::collection(site, &page.documents, "cols-3", |i, document| {
            reveal(
                site,
                Reveal::fade_in_up().with_delay(Delay::staggered(i, 3)),
                document_card(document),
            )
        }))
    };

    html! {
        (blocks::hero(&page.hero))
        (blocks::page_section("tone-plain", None, intro))
        (blocks::page_section("tone-muted", Some("iniciativa"), initiative(site, &page.initiative)))
        (blocks::page_section("tone-plain", Some("objetivos"), objectives))
        (blocks::page_section("tone-muted", Some("documentos"), documents))
        (blocks::cta(site, &page.cta))
    }
}

fn initiative(site: &Site, initiative: &Initiative) -> Markup {
    let areas = &initiative.thematic_areas;
    let contact = &initiative.contact;

    html! {
        (reveal(
            site,
            Reveal::fade_in_up(),
            blocks::section_header(Some(initiative.badge.as_str()), &initiative.title, Some(initiative.description.as_str())),
        ))
        div.grid.cols-2.initiative {
            (reveal(site, Reveal::fade_in_up(), blocks::feature_card(&initiative.legal_framework)))
            (reveal(site, Reveal::fade_in_up().with_delay(Delay::staggered(1, 2)), html! {
                article.card.areas-card {
                    h3 { (areas.title) }
                    @if let Some(description) = &areas.description {
                        p { (description) }
                    }
                    ol.area-list {
                        @for area in &areas.items {
                            li { (area) }
                        }
                    }
                }
            }))
        }
        (reveal(site, Reveal::fade_in_up(), html! {
            article.card.ministry-card {
                h3 { (contact.title) }
                ul.detail-list {
                    li { (Icon::Shield.glyph()) span { (contact.ministry) } }
                    li { (Icon::MapPin.glyph()) span { (contact.address) } }
                    li { span.detail-label { (contact.phone_label) } span { (contact.phone) } }
                    li { (Icon::Clock.glyph()) span { (contact.hours) } }
                }
            }
        }))
    }
}

/// Downloadable document, opened in a new tab.
fn document_card(document: &Document) -> Markup {
    html! {
        article.card.document-card {
            (blocks::icon_badge(Icon::FileText))
            h3 { (document.title) }
            p { (document.description) }
            div.document-meta {
                span { (document.kind) }
                time datetime=(document.date) { (padded_date(&document.date)) }
            }
            a.button.button-outline href=(document.file) target="_blank" rel="noopener noreferrer" {
                (Icon::Download.glyph())
                span { (document.title) }
            }
        }
    }
}

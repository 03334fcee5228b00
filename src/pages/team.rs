//! Team page (`/equipo/`): structure, board, gallery and values.

use super::blocks::{self, reveal};
use crate::content::{BoardMember, Committee, GalleryImage, padded_date};
use crate::generate::Site;
use crate::reveal::{Delay, Reveal};
use maud::{Markup, html};

pub fn render(site: &Site) -> Markup {
    let team = &site.content.team;

    let structure = html! {
        (blocks::header_for(site, &team.structure))
        (blocks::collection(site, &team.structure, "cols-3", |i, committee| {
            reveal(
                site,
                Reveal::fade_in_up().with_delay(Delay::staggered(i, usize::MAX)),
                committee_card(committee),
            )
        }))
    };

    let board = html! {
        (blocks::header_for(site, &team.board))
        (blocks::collection(site, &team.board, "cols-3", |_, member| board_card(member)))
    };

    let gallery = html! {
        (blocks::header_for(site, &team.gallery))
        (blocks::collection(site, &team.gallery, "cols-3 gallery", |_, image| gallery_item(image)))
    };

    let values = html! {
        (blocks::header_for(site, &team.values))
        (blocks::feature_grid(site, &team.values, "cols-4", 4))
    };

    html! {
        (blocks::hero(&team.hero))
        (blocks::page_section("tone-plain", Some("estructura"), structure))
        (blocks::page_section("tone-muted", Some("comision"), board))
        (blocks::page_section("tone-muted", Some("galeria"), gallery))
        (blocks::page_section("tone-plain", None, values))
        (blocks::cta(site, &team.cta))
    }
}

fn committee_card(committee: &Committee) -> Markup {
    html! {
        article class=(format!("card committee-card {}", committee.accent.class_name())) {
            (blocks::icon_badge(committee.icon))
            h3 { (committee.title) }
            p { (committee.description) }
            p.members { (committee.members) }
        }
    }
}

/// Portrait, or the name's initial when there is none.
fn board_card(member: &BoardMember) -> Markup {
    html! {
        article.card.board-card {
            div.portrait {
                @match &member.image {
                    Some(src) => {
                        img src=(src) alt=(member.name) loading="lazy";
                    }
                    None => {
                        span.portrait-initial aria-hidden="true" { (member.initial()) }
                    }
                }
            }
            h3 { (member.name) }
            span.badge { (member.role) }
            p { (member.bio) }
        }
    }
}

fn gallery_item(image: &GalleryImage) -> Markup {
    html! {
        figure.gallery-item data-id=(image.id.to_string()) {
            img src=(image.src) alt=(image.alt) loading="lazy";
            figcaption {
                span.caption { (image.caption) }
                time datetime=(image.date) { (padded_date(&image.date)) }
            }
        }
    }
}

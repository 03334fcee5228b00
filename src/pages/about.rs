//! About page (`/nosotros/`): mission, vision, history and alliances.

use super::blocks::{self, inline_markdown, reveal};
use crate::content::{Milestone, PartnerCategory, Statement};
use crate::generate::Site;
use crate::icons::Icon;
use crate::reveal::{Delay, Reveal};
use maud::{Markup, html};

pub fn render(site: &Site) -> Markup {
    let about = &site.content.about;

    let statements = html! {
        div.grid.cols-2 {
            (reveal(site, Reveal::fade_in_up().with_delay(Delay::staggered(1, 4)), statement_card(&about.mission)))
            (reveal(site, Reveal::fade_in_up().with_delay(Delay::staggered(2, 4)), statement_card(&about.vision)))
        }
    };

    let history = html! {
        (blocks::header_for(site, &about.history))
        (blocks::collection(site, &about.history, "timeline", |_, milestone| {
            reveal(site, Reveal::fade_in_up(), milestone_item(milestone))
        }))
    };

    let objectives = html! {
        (blocks::header_for(site, &about.objectives))
        (blocks::feature_grid(site, &about.objectives, "cols-3", 3))
    };

    let values = html! {
        (blocks::header_for(site, &about.values))
        (blocks::collection(site, &about.values, "cols-2", |i, value| {
            reveal(
                site,
                Reveal::fade_in_up().with_delay(Delay::staggered(i, 2)),
                html! {
                    article.card.value-card {
                        (Icon::CheckCircle.glyph())
                        div {
                            h3 { (value.title) }
                            p { (value.description) }
                        }
                    }
                },
            )
        }))
    };

    let partnerships = html! {
        (blocks::header_for(site, &about.partnerships))
        (blocks::collection(site, &about.partnerships, "cols-3", |_, category| {
            partner_card(category)
        }))
    };

    html! {
        (blocks::hero(&about.hero))
        (blocks::page_section("tone-plain", None, statements))
        (blocks::page_section("tone-muted", Some("historia"), history))
        (blocks::page_section("tone-plain", Some("objetivos"), objectives))
        (blocks::page_section("tone-muted", None, values))
        (blocks::page_section("tone-plain", Some("alianzas"), partnerships))
        (blocks::cta(site, &about.cta))
    }
}

fn statement_card(statement: &Statement) -> Markup {
    html! {
        article.card.statement-card {
            (blocks::icon_badge(statement.icon))
            h2 { (statement.title) }
            p.lead { (inline_markdown(&statement.primary_text)) }
            p { (inline_markdown(&statement.secondary_text)) }
        }
    }
}

fn milestone_item(milestone: &Milestone) -> Markup {
    html! {
        article.milestone {
            span.milestone-year { (milestone.year) }
            div.milestone-body {
                h3 { (milestone.title) }
                p { (milestone.description) }
            }
        }
    }
}

fn partner_card(category: &PartnerCategory) -> Markup {
    html! {
        article.card.partner-card {
            h3 { (category.title) }
            ul.check-list {
                @for item in &category.items {
                    li { (Icon::CheckCircle.glyph()) span { (item) } }
                }
            }
        }
    }
}

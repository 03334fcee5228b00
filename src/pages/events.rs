//! Events page (`/eventos/`): formats, calendar and newsletter.

use super::blocks::{self, reveal};
use crate::content::{Event, EventLabels, Newsletter};
use crate::generate::Site;
use crate::icons::Icon;
use crate::reveal::Reveal;
use maud::{Markup, html};

pub fn render(site: &Site) -> Markup {
    let page = &site.content.events;

    let formats = html! {
        (blocks::header_for(site, &page.formats))
        (blocks::feature_grid(site, &page.formats, "cols-4", 4))
    };

    let upcoming = html! {
        (blocks::header_for(site, &page.upcoming))
        (blocks::collection(site, &page.upcoming, "cols-1 event-list", |_, event| {
            reveal(site, Reveal::fade_in_up(), event_card(event, &page.labels))
        }))
    };

    html! {
        (blocks::hero(&page.hero))
        (blocks::page_section("tone-plain", Some("formatos"), formats))
        (blocks::page_section("tone-muted", Some("calendario"), upcoming))
        (blocks::page_section("tone-plain", Some("newsletter"), reveal(site, Reveal::scale_in(), newsletter(&page.newsletter))))
        (blocks::cta(site, &page.cta))
    }
}

/// One calendar entry: date block, description and labelled details.
fn event_card(event: &Event, labels: &EventLabels) -> Markup {
    html! {
        article.card.event-card id=(format!("evento-{}", event.id)) {
            div.event-date {
                (Icon::Calendar.glyph())
                time datetime=(event.date) { (event.display_date()) }
            }
            div.event-body {
                h3 { (event.title) }
                p { (event.description) }
                dl.event-details {
                    div {
                        dt { (Icon::Clock.glyph()) (labels.time) }
                        dd { (event.time) }
                    }
                    div {
                        dt { (Icon::MapPin.glyph()) (labels.location) }
                        dd { (event.location) }
                    }
                    div {
                        dt { (Icon::Users.glyph()) (labels.capacity) }
                        dd { (event.capacity) }
                    }
                    div {
                        dt { (labels.speakers) }
                        dd {
                            ul.speakers {
                                @for speaker in &event.speakers {
                                    li { (speaker) }
                                }
                            }
                        }
                    }
                    div {
                        dt { (Icon::Ticket.glyph()) (labels.tickets) }
                        dd { (event.ticket_price) }
                    }
                }
                (blocks::action(&labels.register, "button-secondary"))
            }
        }
    }
}

/// Subscription form. Subscriptions are not handled yet: submitting shows
/// the notice and sends nothing.
fn newsletter(newsletter: &Newsletter) -> Markup {
    html! {
        div.newsletter {
            span.badge { (newsletter.badge) }
            h2 { (newsletter.title) }
            p.lead { (newsletter.description) }
            form.newsletter-form data-notice=(newsletter.notice) {
                input type="email" name="email" placeholder=(newsletter.email_placeholder) required;
                button.button.button-primary type="submit" { (newsletter.button) }
            }
        }
    }
}

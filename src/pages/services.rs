//! Services page (`/servicios/`).

use super::blocks::{self, inline_markdown, reveal};
use crate::content::{ProcessStep, Service, Testimonial};
use crate::generate::Site;
use crate::icons::Icon;
use crate::reveal::{Delay, Reveal};
use maud::{Markup, html};

pub fn render(site: &Site) -> Markup {
    let page = &site.content.services;

    let services = html! {
        (blocks::header_for(site, &page.services))
        (blocks::collection(site, &page.services, "cols-3", |i, service| {
            reveal(
                site,
                Reveal::fade_in_up().with_delay(Delay::staggered(i, 3)),
                service_card(service),
            )
        }))
    };

    let process = html! {
        (blocks::header_for(site, &page.process))
        (blocks::collection(site, &page.process, "cols-4 steps", |i, step| {
            reveal(
                site,
                Reveal::fade_in_up().with_delay(Delay::staggered(i, 4)),
                step_card(step),
            )
        }))
    };

    html! {
        (blocks::hero(&page.hero))
        (blocks::page_section("tone-plain", Some("servicios"), services))
        (blocks::page_section("tone-muted", Some("proceso"), process))
        (blocks::page_section("tone-plain", None, reveal(site, Reveal::fade_in_up(), testimonial(&page.testimonial))))
        (blocks::cta(site, &page.cta))
    }
}

fn service_card(service: &Service) -> Markup {
    html! {
        article.card.service-card {
            (blocks::icon_badge(service.icon))
            h3 { (service.title) }
            p { (service.description) }
            ul.check-list {
                @for detail in &service.details {
                    li { (Icon::CheckCircle.glyph()) span { (detail) } }
                }
            }
        }
    }
}

fn step_card(step: &ProcessStep) -> Markup {
    html! {
        article.process-step {
            span.step-number { (step.step.to_string()) }
            h3 { (step.title) }
            p { (step.description) }
        }
    }
}

fn testimonial(testimonial: &Testimonial) -> Markup {
    html! {
        div.testimonial {
            div.testimonial-text {
                span.badge { (testimonial.badge) }
                h2 { (testimonial.title) }
                p.lead { (inline_markdown(&testimonial.description)) }
            }
            ul.check-list.benefits {
                @for benefit in &testimonial.benefits {
                    li { (Icon::Award.glyph()) span { (benefit) } }
                }
            }
        }
    }
}

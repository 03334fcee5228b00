//! Contact page (`/contacto/`).
//!
//! The form never posts anywhere. On submit the site script assembles a
//! `mailto:` link from the four fields (see [`crate::mailto`]) and opens the
//! visitor's mail client; missing fields are caught by native validation.

use super::blocks::{self, reveal};
use crate::content::{ContactChannel, ContactForm, FormField};
use crate::generate::Site;
use crate::reveal::{Delay, Reveal};
use maud::{Markup, html};

pub fn render(site: &Site) -> Markup {
    let page = &site.content.contact;

    let body = html! {
        div.grid.cols-2.contact-layout {
            (reveal(site, Reveal::fade_in_up(), form(&page.form)))
            div.contact-channels {
                (blocks::section_header(
                    page.channels.badge.as_deref(),
                    &page.channels.title,
                    page.channels.description.as_deref(),
                ))
                (blocks::collection(site, &page.channels, "cols-1", |i, channel| {
                    reveal(
                        site,
                        Reveal::fade_in_up().with_delay(Delay::staggered(i + 1, 4)),
                        channel_card(channel),
                    )
                }))
            }
        }
    };

    html! {
        (blocks::hero(&page.hero))
        (blocks::page_section("tone-plain", Some("formulario"), body))
        (blocks::cta(site, &page.cta))
    }
}

fn form(form: &ContactForm) -> Markup {
    html! {
        article.card.contact-form-card {
            h2 { (form.title) }
            p { (form.description) }
            form id="contact-form" data-recipient=(form.recipient) {
                (field("name", "text", &form.name))
                (field("email", "email", &form.email))
                (field("subject", "text", &form.subject))
                div.field {
                    label for="contact-message" { (form.message.label) }
                    textarea id="contact-message" name="message" rows="6"
                        placeholder=(form.message.placeholder) required {}
                }
                button.button.button-primary type="submit" { (form.button) }
            }
        }
    }
}

fn field(name: &str, kind: &str, field: &FormField) -> Markup {
    let id = format!("contact-{name}");
    html! {
        div.field {
            label for=(id) { (field.label) }
            input id=(id) type=(kind) name=(name) placeholder=(field.placeholder) required;
        }
    }
}

/// Channel card: linked when `href` is set, plain text otherwise.
fn channel_card(channel: &ContactChannel) -> Markup {
    let value = html! {
        @match channel.href.as_deref() {
            Some(href) if href.starts_with("mailto:") => {
                a href=(href) { (channel.value) }
            }
            Some(href) => {
                a href=(href) target="_blank" rel="noopener noreferrer" { (channel.value) }
            }
            None => {
                span { (channel.value) }
            }
        }
    };
    html! {
        div.channel-card {
            (blocks::icon_badge(channel.icon))
            div {
                h3 { (channel.label) }
                p { (value) }
            }
        }
    }
}

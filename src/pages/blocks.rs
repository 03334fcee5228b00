//! Building blocks shared by the page renderers.
//!
//! Every page is a hero, a run of sections and a closing call to action; the
//! functions here render those pieces so the per-route modules only decide
//! order and card shape.

use crate::content::{Action, Cta, Feature, Hero, Section, Target};
use crate::generate::Site;
use crate::icons::Icon;
use crate::mailto::MailtoLink;
use crate::reveal::{Delay, Reveal};
use maud::{Markup, PreEscaped, html};
use pulldown_cmark::{Event, Parser, html as md_html};

/// Render Markdown to HTML. Raw HTML in the source is shown as text.
pub fn markdown(text: &str) -> Markup {
    let parser = Parser::new(text).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    PreEscaped(out)
}

/// Render a single line of Markdown without the wrapping paragraph.
pub fn inline_markdown(text: &str) -> Markup {
    let PreEscaped(html) = markdown(text);
    let trimmed = html.trim_end();
    let inner = trimmed
        .strip_prefix("<p>")
        .and_then(|rest| rest.strip_suffix("</p>"))
        .filter(|inner| !inner.contains("<p>"))
        .unwrap_or(trimmed);
    PreEscaped(inner.to_string())
}

/// Wrap `content` in a one-shot reveal at the site threshold.
pub fn reveal(site: &Site, reveal: Reveal, content: Markup) -> Markup {
    reveal.wrap(site.threshold(), content)
}

/// Top-of-page banner.
pub fn hero(hero: &Hero) -> Markup {
    html! {
        section.hero {
            div.container.hero-inner {
                @if let Some(icon) = hero.icon {
                    div.hero-icon { (icon.glyph()) }
                }
                h1 { (hero.title) }
                p.hero-description { (inline_markdown(&hero.description)) }
                @if !hero.actions.is_empty() {
                    div.hero-actions {
                        @for (i, item) in hero.actions.iter().enumerate() {
                            (action(item, if i == 0 { "button-light" } else { "button-ghost" }))
                        }
                    }
                }
            }
        }
    }
}

/// A full-width page section.
pub fn page_section(tone: &str, id: Option<&str>, body: Markup) -> Markup {
    html! {
        section class=(format!("page-section {tone}")) id=[id] {
            div.container { (body) }
        }
    }
}

/// Centered badge, heading and lead paragraph.
pub fn section_header(badge: Option<&str>, title: &str, description: Option<&str>) -> Markup {
    html! {
        div.section-header {
            @if let Some(badge) = badge {
                span.badge { (badge) }
            }
            h2 { (title) }
            @if let Some(description) = description {
                p.lead { (inline_markdown(description)) }
            }
        }
    }
}

/// Header of a content section, revealed on scroll.
pub fn header_for<T>(site: &Site, section: &Section<T>) -> Markup {
    reveal(
        site,
        Reveal::fade_in_up(),
        section_header(
            section.badge.as_deref(),
            &section.title,
            section.description.as_deref(),
        ),
    )
}

/// Round icon holder used on cards.
pub fn icon_badge(icon: Icon) -> Markup {
    html! {
        div.icon-badge { (icon.glyph()) }
    }
}

/// Icon, title and description card.
pub fn feature_card(feature: &Feature) -> Markup {
    html! {
        article.card.feature-card {
            @if let Some(icon) = feature.icon {
                (icon_badge(icon))
            }
            h3 { (feature.title) }
            p { (inline_markdown(&feature.description)) }
        }
    }
}

/// Message shown in place of an empty collection.
pub fn placeholder(text: &str) -> Markup {
    html! {
        div.placeholder-notice role="status" {
            p { (text) }
        }
    }
}

/// Body of an emptiable collection: one card per item in declaration order,
/// or a single placeholder notice when there are none.
///
/// The notice is the section's own `placeholder` text when set, otherwise the
/// site-wide "coming soon" label.
pub fn collection<T>(
    site: &Site,
    section: &Section<T>,
    grid: &str,
    card: impl Fn(usize, &T) -> Markup,
) -> Markup {
    if section.items.is_empty() {
        let text = section
            .placeholder
            .as_deref()
            .unwrap_or(&site.content.site.labels.coming_soon);
        return reveal(site, Reveal::fade_in_up(), placeholder(text));
    }
    html! {
        div class=(format!("grid {grid}")) {
            @for (i, item) in section.items.iter().enumerate() {
                (card(i, item))
            }
        }
    }
}

/// Grid of feature cards staggered `per_row` to a row.
pub fn feature_grid(site: &Site, section: &Section<Feature>, grid: &str, per_row: usize) -> Markup {
    collection(site, section, grid, |i, feature| {
        reveal(
            site,
            Reveal::fade_in_up().with_delay(Delay::staggered(i, per_row)),
            feature_card(feature),
        )
    })
}

/// Render a button or link for `action`.
///
/// Routes stay in the current tab, URLs open a new tab, emails open the mail
/// client and notices render a button the site script answers with an alert.
pub fn action(action: &Action, variant: &str) -> Markup {
    let class = format!("button {variant}");
    let label = html! {
        @if let Some(icon) = action.icon {
            (icon.glyph())
        }
        span { (action.label) }
    };
    match &action.target {
        Target::Route(route) => html! {
            a class=(class) href=(route.href()) { (label) }
        },
        Target::Url(url) => html! {
            a class=(class) href=(url) target="_blank" rel="noopener noreferrer" { (label) }
        },
        Target::Email(address) => html! {
            a class=(class) href=(MailtoLink::to_address(address).to_uri()) { (label) }
        },
        Target::Notice(message) => html! {
            button class=(class) type="button" data-notice=(message) { (label) }
        },
    }
}

/// Centered row of actions, first one primary.
pub fn action_row(actions: &[Action]) -> Markup {
    html! {
        div.action-row {
            @for (i, item) in actions.iter().enumerate() {
                (action(item, if i == 0 { "button-primary" } else { "button-outline" }))
            }
        }
    }
}

/// Closing call to action, scaled in on scroll.
pub fn cta(site: &Site, cta: &Cta) -> Markup {
    let body = html! {
        div.cta {
            h2 { (cta.title) }
            p.lead { (inline_markdown(&cta.description)) }
            @if !cta.actions.is_empty() {
                (action_row(&cta.actions))
            }
        }
    };
    page_section("tone-gradient", None, reveal(site, Reveal::scale_in(), body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::Document;
    use crate::test_helpers::*;
    use crate::types::Route;

    fn with_site<R>(f: impl FnOnce(&Site) -> R) -> R {
        let content = bundled_content();
        let config = SiteConfig::default();
        let site = Site::new(&content, &config, "/s.css", "/s.js");
        f(&site)
    }

    fn act(label: &str, target: Target) -> Action {
        Action {
            label: label.to_string(),
            icon: None,
            target,
        }
    }

    fn section<T>(items: Vec<T>, placeholder: Option<&str>) -> Section<T> {
        Section {
            badge: None,
            title: "Documentos".to_string(),
            description: None,
            placeholder: placeholder.map(str::to_string),
            items,
        }
    }

    #[test]
    fn route_action_stays_in_tab() {
        let html = action(&act("Equipo", Target::Route(Route::Team)), "button-primary").into_string();
        assert!(html.contains(r#"href="/equipo/""#));
        assert!(!html.contains("target="));
    }

    #[test]
    fn url_action_opens_new_tab() {
        let html = action(
            &act("Instagram", Target::Url("https://instagram.com/supap.uy".into())),
            "button-outline",
        )
        .into_string();
        assert!(html.contains(r#"target="_blank" rel="noopener noreferrer""#));
    }

    #[test]
    fn email_action_is_mailto() {
        let html = action(&act("Escribir", Target::Email("a@b.uy".into())), "x").into_string();
        assert!(html.contains(r#"href="mailto:a@b.uy""#));
    }

    #[test]
    fn notice_action_is_button_without_navigation() {
        let html = action(&act("Registrarse", Target::Notice("Pronto".into())), "x").into_string();
        assert!(html.starts_with("<button"));
        assert!(html.contains(r#"type="button""#));
        assert!(html.contains(r#"data-notice="Pronto""#));
        assert!(!html.contains("href="));
    }

    #[test]
    fn empty_collection_uses_section_placeholder() {
        let html = with_site(|site| {
            collection(site, &section::<Document>(vec![], Some("Nada aún")), "cols-2", |_, _| {
                html! { div.document-card {} }
            })
            .into_string()
        });
        assert_eq!(count(&html, "placeholder-notice"), 1);
        assert_eq!(count(&html, "document-card"), 0);
        assert!(html.contains("Nada aún"));
    }

    #[test]
    fn empty_collection_falls_back_to_site_label() {
        let (html, label) = with_site(|site| {
            let html = collection(site, &section::<Document>(vec![], None), "cols-2", |_, _| {
                html! { div.document-card {} }
            })
            .into_string();
            (html, site.content.site.labels.coming_soon.clone())
        });
        assert!(html.contains(&label));
    }

    #[test]
    fn collection_renders_cards_in_order() {
        let docs = vec![document("Primero"), document("Segundo"), document("Tercero")];
        let html = with_site(|site| {
            collection(site, &section(docs, None), "cols-2", |_, doc| {
                html! { div.document-card { (doc.title) } }
            })
            .into_string()
        });
        assert_eq!(count(&html, "document-card"), 3);
        assert_eq!(count(&html, "placeholder-notice"), 0);
        assert_in_order(&html, &["Primero", "Segundo", "Tercero"]);
    }

    #[test]
    fn feature_grid_staggers_columns() {
        let features: Vec<Feature> = (0..4)
            .map(|i| Feature {
                title: format!("F{i}"),
                description: "d".to_string(),
                icon: Some(Icon::Target),
            })
            .collect();
        let html = with_site(|site| feature_grid(site, &section(features, None), "cols-3", 3).into_string());
        assert_in_order(
            &html,
            &[
                r#"data-reveal="opacity-0-start animate-fade-in-up""#,
                "delay-100",
                "delay-200",
                r#"data-reveal="opacity-0-start animate-fade-in-up""#,
            ],
        );
        assert_eq!(count(&html, "feature-card"), 4);
    }

    #[test]
    fn cta_scales_in() {
        let html = with_site(|site| cta(site, &site.content.home.cta).into_string());
        assert!(html.contains(r#"data-reveal="opacity-0-start animate-scale-in""#));
        assert_eq!(count(&html, "cta"), 1);
    }

    #[test]
    fn inline_markdown_strips_paragraph() {
        assert_eq!(
            inline_markdown("Hola **mundo**").into_string(),
            "Hola <strong>mundo</strong>"
        );
    }

    #[test]
    fn markdown_escapes_raw_html() {
        let html = markdown("<script>alert(1)</script>").into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}

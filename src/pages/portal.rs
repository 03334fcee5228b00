//! Learning-portal login (`/aulavirtual/`).
//!
//! The portal is not live. The login form has no `action` and no credential
//! ever leaves the page: every submit answers with the same static notice.

use super::blocks::{self, reveal};
use crate::content::Login;
use crate::generate::Site;
use crate::icons::Icon;
use crate::reveal::{Delay, Reveal};
use maud::{Markup, html};

pub fn render(site: &Site) -> Markup {
    let page = &site.content.portal;

    let login = html! {
        div.login-column {
            (reveal(site, Reveal::scale_in(), login_card(&page.login)))
            div.signup {
                p { (page.signup.prompt) }
                (blocks::action(&page.signup.action, "button-outline"))
            }
        }
    };

    let features = html! {
        (blocks::header_for(site, &page.features))
        (blocks::collection(site, &page.features, "cols-3", |i, feature| {
            reveal(
                site,
                Reveal::fade_in_up().with_delay(Delay::staggered(i, 3)),
                blocks::feature_card(feature),
            )
        }))
    };

    html! {
        (blocks::hero(&page.hero))
        (blocks::page_section("tone-plain", Some("acceso"), login))
        (blocks::page_section("tone-muted", Some("contenido"), features))
        (blocks::cta(site, &page.cta))
    }
}

fn login_card(login: &Login) -> Markup {
    html! {
        article.card.login-card {
            div.login-header {
                (blocks::icon_badge(Icon::Lock))
                h2 { (login.title) }
                p { (login.description) }
                span.badge.badge-soon { (login.badge) }
            }
            form id="portal-login" data-notice=(login.notice) {
                div.field {
                    label for="portal-email" { (login.email.label) }
                    div.input-icon {
                        (Icon::Mail.glyph())
                        input id="portal-email" type="email" name="email"
                            placeholder=(login.email.placeholder) autocomplete="username" required;
                    }
                }
                div.field {
                    label for="portal-password" { (login.password.label) }
                    div.input-icon {
                        (Icon::Lock.glyph())
                        input id="portal-password" type="password" name="password"
                            placeholder=(login.password.placeholder) autocomplete="current-password" required;
                    }
                }
                button.button.button-primary.button-block type="submit" { (login.button) }
                div.forgot-password {
                    (blocks::action(&login.forgot_password, "button-link"))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helpers::*;
    use crate::types::Route;

    const LOGIN_NOTICE: &str =
        "El aula virtual estará disponible próximamente. Gracias por tu interés.";

    fn login_form(html: &str) -> &str {
        html.split(r#"<form id="portal-login""#)
            .nth(1)
            .and_then(|rest| rest.split("</form>").next())
            .unwrap()
    }

    #[test]
    fn login_form_never_submits_anywhere() {
        let html = render(Route::PortalLogin, &bundled_content());
        let form = login_form(&html);
        let open_tag = form.split('>').next().unwrap();
        assert!(!open_tag.contains("action="));
        assert!(!open_tag.contains("method="));
        assert!(open_tag.contains(&format!(r#"data-notice="{LOGIN_NOTICE}""#)));
    }

    #[test]
    fn login_fields_required() {
        let html = render(Route::PortalLogin, &bundled_content());
        let form = login_form(&html);
        assert!(form.contains(r#"type="email" name="email""#));
        assert!(form.contains(r#"type="password" name="password""#));
        assert_eq!(form.matches("required").count(), 2);
    }

    #[test]
    fn request_access_shows_registration_notice() {
        let html = render(Route::PortalLogin, &bundled_content());
        assert!(html.contains(r#"data-notice="El registro estará disponible próximamente.""#));
    }

    #[test]
    fn features_listed() {
        let content = bundled_content();
        let html = render(Route::PortalLogin, &content);
        assert_eq!(count(&html, "feature-card"), content.portal.features.items.len());
    }
}

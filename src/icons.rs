//! Icon identifiers and their glyphs.
//!
//! Content files name icons with a kebab-case identifier (`icon = "book-open"`).
//! Rendering goes through one fixed lookup table, so content stays plain data
//! and every glyph in the site comes from the same place.
//!
//! Glyphs are 24×24 stroke outlines in the style of the Lucide icon set,
//! inlined as SVG so the published site needs no icon font.

use maud::{Markup, PreEscaped, html};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Award,
    BookOpen,
    Briefcase,
    Calendar,
    CheckCircle,
    Clock,
    Download,
    FileText,
    GraduationCap,
    Handshake,
    Heart,
    Instagram,
    Lightbulb,
    Lock,
    Mail,
    MapPin,
    Network,
    Shield,
    Target,
    Ticket,
    Users,
    Video,
    Zap,
}

/// SVG drawing instructions for each icon, as inner SVG markup.
const GLYPHS: &[(Icon, &str)] = &[
    (
        Icon::Award,
        r#"<circle cx="12" cy="8" r="6"/><path d="M15.5 12.9 17 22l-5-3-5 3 1.5-9.1"/>"#,
    ),
    (
        Icon::BookOpen,
        r#"<path d="M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z"/><path d="M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z"/>"#,
    ),
    (
        Icon::Briefcase,
        r#"<rect x="2" y="7" width="20" height="14" rx="2"/><path d="M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"/>"#,
    ),
    (
        Icon::Calendar,
        r#"<rect x="3" y="4" width="18" height="18" rx="2"/><path d="M16 2v4M8 2v4M3 10h18"/>"#,
    ),
    (
        Icon::CheckCircle,
        r#"<path d="M22 11.1V12a10 10 0 1 1-5.9-9.1"/><path d="m9 11 3 3L22 4"/>"#,
    ),
    (
        Icon::Clock,
        r#"<circle cx="12" cy="12" r="10"/><path d="M12 6v6l4 2"/>"#,
    ),
    (
        Icon::Download,
        r#"<path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/><path d="m7 10 5 5 5-5M12 15V3"/>"#,
    ),
    (
        Icon::FileText,
        r#"<path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z"/><path d="M14 2v6h6M16 13H8M16 17H8M10 9H8"/>"#,
    ),
    (
        Icon::GraduationCap,
        r#"<path d="M22 10 12 5 2 10l10 5z"/><path d="M6 12v5c3 3 9 3 12 0v-5"/>"#,
    ),
    (
        Icon::Handshake,
        r#"<path d="m11 17 2 2a1 1 0 1 0 3-3"/><path d="m14 14 2.5 2.5a1 1 0 1 0 3-3l-3.9-3.9a3 3 0 0 0-4.2 0l-.9.9a1 1 0 1 1-3-3l2.8-2.8a5.8 5.8 0 0 1 7.1-.9l.5.3a4 4 0 0 0 2.7.5L21 4"/><path d="m21 3 1 11h-2M3 3 2 14l6.5 6.5a1 1 0 1 0 3-3M3 4h8"/>"#,
    ),
    (
        Icon::Heart,
        r#"<path d="M19 14c1.5-1.5 3-3.2 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.8 0-3 .5-4.5 2-1.5-1.5-2.7-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4 3 5.5l7 7z"/>"#,
    ),
    (
        Icon::Instagram,
        r#"<rect x="2" y="2" width="20" height="20" rx="5"/><path d="M16 11.4A4 4 0 1 1 12.6 8 4 4 0 0 1 16 11.4zM17.5 6.5h.01"/>"#,
    ),
    (
        Icon::Lightbulb,
        r#"<path d="M15 14c.2-1 .7-1.7 1.5-2.5 1-.9 1.5-2.2 1.5-3.5A6 6 0 0 0 6 8c0 1 .2 2.2 1.5 3.5.7.7 1.3 1.5 1.5 2.5"/><path d="M9 18h6M10 22h4"/>"#,
    ),
    (
        Icon::Lock,
        r#"<rect x="3" y="11" width="18" height="11" rx="2"/><path d="M7 11V7a5 5 0 0 1 10 0v4"/>"#,
    ),
    (
        Icon::Mail,
        r#"<rect x="2" y="4" width="20" height="16" rx="2"/><path d="m22 7-10 6L2 7"/>"#,
    ),
    (
        Icon::MapPin,
        r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z"/><circle cx="12" cy="10" r="3"/>"#,
    ),
    (
        Icon::Network,
        r#"<rect x="16" y="16" width="6" height="6" rx="1"/><rect x="2" y="16" width="6" height="6" rx="1"/><rect x="9" y="2" width="6" height="6" rx="1"/><path d="M5 16v-3a1 1 0 0 1 1-1h12a1 1 0 0 1 1 1v3M12 12V8"/>"#,
    ),
    (
        Icon::Shield,
        r#"<path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"/>"#,
    ),
    (
        Icon::Target,
        r#"<circle cx="12" cy="12" r="10"/><circle cx="12" cy="12" r="6"/><circle cx="12" cy="12" r="2"/>"#,
    ),
    (
        Icon::Ticket,
        r#"<path d="M2 9a3 3 0 0 1 0 6v2a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2v-2a3 3 0 0 1 0-6V7a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2z"/><path d="M13 5v2M13 17v2M13 11v2"/>"#,
    ),
    (
        Icon::Users,
        r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M22 21v-2a4 4 0 0 0-3-3.9M16 3.1a4 4 0 0 1 0 7.8"/>"#,
    ),
    (
        Icon::Video,
        r#"<path d="m22 8-6 4 6 4z"/><rect x="2" y="6" width="14" height="12" rx="2"/>"#,
    ),
    (
        Icon::Zap,
        r#"<path d="M13 2 3 14h9l-1 8 10-12h-9z"/>"#,
    ),
];

impl Icon {
    /// Inner SVG markup for this icon.
    pub fn paths(self) -> &'static str {
        GLYPHS
            .iter()
            .find(|(icon, _)| *icon == self)
            .map(|(_, paths)| *paths)
            .unwrap_or("")
    }

    /// Kebab-case identifier, as written in content files.
    pub fn name(self) -> &'static str {
        match self {
            Icon::Award => "award",
            Icon::BookOpen => "book-open",
            Icon::Briefcase => "briefcase",
            Icon::Calendar => "calendar",
            Icon::CheckCircle => "check-circle",
            Icon::Clock => "clock",
            Icon::Download => "download",
            Icon::FileText => "file-text",
            Icon::GraduationCap => "graduation-cap",
            Icon::Handshake => "handshake",
            Icon::Heart => "heart",
            Icon::Instagram => "instagram",
            Icon::Lightbulb => "lightbulb",
            Icon::Lock => "lock",
            Icon::Mail => "mail",
            Icon::MapPin => "map-pin",
            Icon::Network => "network",
            Icon::Shield => "shield",
            Icon::Target => "target",
            Icon::Ticket => "ticket",
            Icon::Users => "users",
            Icon::Video => "video",
            Icon::Zap => "zap",
        }
    }

    /// Render the icon as an inline, decorative SVG element.
    pub fn glyph(self) -> Markup {
        html! {
            svg class={ "icon icon-" (self.name()) }
                xmlns="http://www.w3.org/2000/svg"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                aria-hidden="true" {
                (PreEscaped(self.paths()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Icon; 23] = [
        Icon::Award,
        Icon::BookOpen,
        Icon::Briefcase,
        Icon::Calendar,
        Icon::CheckCircle,
        Icon::Clock,
        Icon::Download,
        Icon::FileText,
        Icon::GraduationCap,
        Icon::Handshake,
        Icon::Heart,
        Icon::Instagram,
        Icon::Lightbulb,
        Icon::Lock,
        Icon::Mail,
        Icon::MapPin,
        Icon::Network,
        Icon::Shield,
        Icon::Target,
        Icon::Ticket,
        Icon::Users,
        Icon::Video,
        Icon::Zap,
    ];

    #[test]
    fn every_icon_has_a_glyph() {
        for icon in ALL {
            assert!(!icon.paths().is_empty(), "{:?} has no glyph", icon);
        }
        assert_eq!(GLYPHS.len(), ALL.len());
    }

    #[test]
    fn names_match_serde_identifiers() {
        for icon in ALL {
            let json = serde_json::to_string(&icon).unwrap();
            assert_eq!(json, format!("\"{}\"", icon.name()));
        }
    }

    #[test]
    fn glyph_is_decorative_svg() {
        let svg = Icon::MapPin.glyph().into_string();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("icon-map-pin"));
        assert!(svg.contains(r#"aria-hidden="true""#));
        assert!(svg.contains("<circle"));
    }

    #[test]
    fn parses_kebab_case() {
        #[derive(Deserialize)]
        struct Item {
            icon: Icon,
        }
        let item: Item = toml::from_str(r#"icon = "graduation-cap""#).unwrap();
        assert_eq!(item.icon, Icon::GraduationCap);
    }
}

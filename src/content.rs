//! Page content records.
//!
//! Every page of the site is driven by one TOML file in the content
//! directory. Files are deserialized once into the immutable records below
//! and passed by reference into the page renderers; nothing mutates them
//! after [`load`] returns.
//!
//! ```text
//! content/
//! ├── config.toml     # Presentation settings (see config module)
//! ├── site.toml       # Organization, navigation, footer, shared labels
//! ├── home.toml
//! ├── about.toml
//! ├── team.toml       # Includes board members and the community gallery
//! ├── services.toml
//! ├── events.toml
//! ├── contact.toml
//! ├── country.toml    # Country-level initiative
//! └── portal.toml     # Learning-portal login placeholder
//! ```
//!
//! ## Shapes
//!
//! Most pages are built from the same few pieces: a [`Hero`], a run of
//! [`Section`]s (badge, title, description and an ordered list of items) and
//! a closing [`Cta`]. Buttons and links are [`Action`]s: one label plus
//! exactly one target (`route`, `url`, `email` or `notice`).
//!
//! ## Validation
//!
//! Unknown keys are rejected, including inside actions. After parsing, [`Content::validate`] checks:
//! - gallery image ids and event ids are unique
//! - event dates parse as `YYYY-MM-DD`
//! - board members have a name (their placeholder glyph is its first letter)
//! - `mailto:` hrefs are well-formed
//! - navigation lists each route at most once

use crate::icons::Icon;
use crate::mailto::MailtoLink;
use crate::types::{NavLink, Route};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error reading {file}: {source}")]
    Io {
        file: String,
        source: std::io::Error,
    },
    #[error("{file}: {source}")]
    Parse {
        file: String,
        source: toml::de::Error,
    },
    #[error("Invalid content: {0}")]
    Invalid(String),
}

/// Date format used by content files.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Content date as shown on gallery and document cards (`2025-04-26` →
/// `26/04/2025`). Falls back to the raw string.
pub fn padded_date(raw: &str) -> String {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map(|date| date.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

// ============================================================================
// Shared building blocks
// ============================================================================

/// Full-width banner at the top of every page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Hero {
    pub title: String,
    /// Inline Markdown allowed.
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(default = "Vec::new", skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<Action>,
}

/// A titled page section with an ordered list of items.
///
/// Items render in declaration order. When `items` is empty and the section
/// is emptiable, the renderer shows `placeholder` (or the site-wide
/// "coming soon" label) instead of an empty grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Section<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// Icon + title + description card, the most common item shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Feature {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
}

/// Where an action leads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// Navigate the current tab to another page of the site.
    Route(Route),
    /// Open an external resource in a new tab.
    Url(String),
    /// Open the mail client addressed to this recipient.
    Email(String),
    /// Feature not available yet: show this message in a blocking alert.
    Notice(String),
}

/// A button or link.
///
/// Parsed through [`RawAction`] so unknown keys are rejected and exactly one
/// target key must be present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawAction")]
pub struct Action {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(flatten)]
    pub target: Target,
}

/// Action as written in content files: every target key optional.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawAction {
    label: String,
    #[serde(default)]
    icon: Option<Icon>,
    #[serde(default)]
    route: Option<Route>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    notice: Option<String>,
}

impl TryFrom<RawAction> for Action {
    type Error = String;

    fn try_from(raw: RawAction) -> Result<Self, Self::Error> {
        let mut targets: Vec<Target> = [
            raw.route.map(Target::Route),
            raw.url.map(Target::Url),
            raw.email.map(Target::Email),
            raw.notice.map(Target::Notice),
        ]
        .into_iter()
        .flatten()
        .collect();
        match targets.len() {
            1 => Ok(Action {
                label: raw.label,
                icon: raw.icon,
                target: targets.remove(0),
            }),
            0 => Err(format!(
                "action {:?} needs one of route, url, email or notice",
                raw.label
            )),
            _ => Err(format!(
                "action {:?} has more than one of route, url, email and notice",
                raw.label
            )),
        }
    }
}

/// Closing call-to-action block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Cta {
    pub title: String,
    pub description: String,
    #[serde(default = "Vec::new", skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<Action>,
}

/// `label: value` pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LabeledValue {
    pub label: String,
    pub value: String,
}

/// Labelled form input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormField {
    pub label: String,
    pub placeholder: String,
}

// ============================================================================
// site.toml
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteContent {
    pub organization: Organization,
    pub nav: Vec<NavLink>,
    pub footer: Footer,
    pub labels: Labels,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Organization {
    pub name: String,
    pub full_name: String,
    pub tagline: String,
    pub description: String,
    /// Logo path under the public asset root.
    pub logo: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Footer {
    pub links_title: String,
    pub contact_title: String,
    pub email: String,
    pub instagram: String,
    pub instagram_url: String,
    pub country: String,
    pub copyright: String,
}

/// Words reused across pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Labels {
    /// Shown in place of an empty collection.
    pub coming_soon: String,
    /// Accessible label of the mobile menu toggle.
    pub menu: String,
}

// ============================================================================
// home.toml
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HomePage {
    pub hero: Hero,
    pub mission: Section<Feature>,
    pub mission_link: Action,
    pub services: Section<ServiceHighlight>,
    pub services_link: Action,
    pub events: HomeEvents,
    pub cta: Cta,
}

/// Left-bordered service summary card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceHighlight {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub accent: Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accent {
    #[default]
    Primary,
    Secondary,
    Accent,
}

impl Accent {
    pub fn class_name(self) -> &'static str {
        match self {
            Accent::Primary => "accent-primary",
            Accent::Secondary => "accent-secondary",
            Accent::Accent => "accent-accent",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HomeEvents {
    pub title: String,
    pub description: String,
    pub next: NextEvent,
    pub membership: Membership,
    pub link: Action,
}

/// Free-text highlight of the next event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NextEvent {
    pub badge: String,
    pub title: String,
    pub date: String,
    pub location: String,
    pub speakers: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Membership {
    pub title: String,
    pub pricing: Vec<Price>,
    pub registration: LabeledValue,
    pub inquiries: LabeledValue,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Price {
    pub label: String,
    pub value: String,
    /// Highlighted badge instead of an outlined one.
    #[serde(default)]
    pub featured: bool,
}

// ============================================================================
// about.toml
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AboutPage {
    pub hero: Hero,
    pub mission: Statement,
    pub vision: Statement,
    pub history: Section<Milestone>,
    pub objectives: Section<Feature>,
    pub values: Section<Feature>,
    pub partnerships: Section<PartnerCategory>,
    pub cta: Cta,
}

/// Two-paragraph statement card (mission, vision).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Statement {
    pub title: String,
    pub icon: Icon,
    /// Inline Markdown allowed.
    pub primary_text: String,
    /// Inline Markdown allowed.
    pub secondary_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Milestone {
    pub year: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartnerCategory {
    pub title: String,
    pub items: Vec<String>,
}

// ============================================================================
// team.toml
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TeamPage {
    pub hero: Hero,
    pub structure: Section<Committee>,
    pub board: Section<BoardMember>,
    pub gallery: Section<GalleryImage>,
    pub values: Section<Feature>,
    pub cta: Cta,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Committee {
    pub title: String,
    pub icon: Icon,
    pub description: String,
    pub members: String,
    #[serde(default)]
    pub accent: Accent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoardMember {
    pub name: String,
    pub role: String,
    pub bio: String,
    /// Portrait path under the public asset root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl BoardMember {
    /// Placeholder glyph shown without a portrait: the uppercased first
    /// character of the name.
    pub fn initial(&self) -> String {
        self.name
            .trim()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GalleryImage {
    pub id: u32,
    /// Image path under the public asset root.
    pub src: String,
    pub alt: String,
    pub caption: String,
    pub date: String,
}

// ============================================================================
// services.toml
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServicesPage {
    pub hero: Hero,
    pub services: Section<Service>,
    pub process: Section<ProcessStep>,
    pub testimonial: Testimonial,
    pub cta: Cta,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Service {
    pub title: String,
    pub description: String,
    pub icon: Icon,
    pub details: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProcessStep {
    pub step: u32,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Testimonial {
    pub badge: String,
    pub title: String,
    /// Inline Markdown allowed.
    pub description: String,
    pub benefits: Vec<String>,
}

// ============================================================================
// events.toml
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventsPage {
    pub hero: Hero,
    pub formats: Section<Feature>,
    pub upcoming: Section<Event>,
    pub labels: EventLabels,
    pub newsletter: Newsletter,
    pub cta: Cta,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Event {
    pub id: u32,
    pub title: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    pub time: String,
    pub location: String,
    pub speakers: Vec<String>,
    pub description: String,
    pub capacity: String,
    pub ticket_price: String,
}

impl Event {
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }

    /// Date as shown on the event card: day/month/year, no zero padding
    /// (`2025-08-16` → `16/8/2025`). Falls back to the raw string.
    pub fn display_date(&self) -> String {
        match self.parsed_date() {
            Some(date) => format!("{}/{}/{}", date.day(), date.month(), date.year()),
            None => self.date.clone(),
        }
    }
}

/// Headings of the per-event detail blocks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventLabels {
    pub time: String,
    pub location: String,
    pub capacity: String,
    pub speakers: String,
    pub tickets: String,
    /// Registration button on every event card.
    pub register: Action,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Newsletter {
    pub badge: String,
    pub title: String,
    pub description: String,
    pub email_placeholder: String,
    pub button: String,
    /// Shown on submit: subscriptions are not handled yet.
    pub notice: String,
}

// ============================================================================
// contact.toml
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactPage {
    pub hero: Hero,
    pub form: ContactForm,
    pub channels: Section<ContactChannel>,
    pub cta: Cta,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactForm {
    pub title: String,
    pub description: String,
    /// Address the generated `mailto:` link is sent to.
    pub recipient: String,
    pub name: FormField,
    pub email: FormField,
    pub subject: FormField,
    pub message: FormField,
    pub button: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactChannel {
    pub icon: Icon,
    pub label: String,
    pub value: String,
    /// `mailto:` opens the mail client, `http(s)` opens a new tab, absent
    /// renders plain text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

// ============================================================================
// country.toml
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CountryPage {
    pub hero: Hero,
    pub intro: Section<String>,
    pub initiative: Initiative,
    pub objectives: Section<Feature>,
    pub documents: Section<Document>,
    pub cta: Cta,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Initiative {
    pub badge: String,
    pub title: String,
    pub description: String,
    pub legal_framework: Feature,
    pub thematic_areas: Section<String>,
    pub contact: InitiativeContact,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InitiativeContact {
    pub title: String,
    pub ministry: String,
    pub address: String,
    pub phone_label: String,
    pub phone: String,
    pub hours: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Document {
    pub title: String,
    pub description: String,
    pub date: String,
    /// Path under the public asset root or external URL; opens in a new tab.
    pub file: String,
    pub kind: String,
}

// ============================================================================
// portal.toml
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PortalPage {
    pub hero: Hero,
    pub login: Login,
    pub signup: Signup,
    pub features: Section<Feature>,
    pub cta: Cta,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Login {
    pub title: String,
    pub description: String,
    pub badge: String,
    pub email: FormField,
    pub password: FormField,
    pub button: String,
    pub forgot_password: Action,
    /// The only outcome of submitting the form.
    pub notice: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Signup {
    pub prompt: String,
    pub action: Action,
}

// ============================================================================
// Loading
// ============================================================================

/// All content records of the site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub site: SiteContent,
    pub home: HomePage,
    pub about: AboutPage,
    pub team: TeamPage,
    pub services: ServicesPage,
    pub events: EventsPage,
    pub contact: ContactPage,
    pub country: CountryPage,
    pub portal: PortalPage,
}

/// Load and validate every content file under `root`.
pub fn load(root: &Path) -> Result<Content, ContentError> {
    let content = Content {
        site: read_record(root, "site.toml")?,
        home: read_record(root, "home.toml")?,
        about: read_record(root, "about.toml")?,
        team: read_record(root, "team.toml")?,
        services: read_record(root, "services.toml")?,
        events: read_record(root, "events.toml")?,
        contact: read_record(root, "contact.toml")?,
        country: read_record(root, "country.toml")?,
        portal: read_record(root, "portal.toml")?,
    };
    content.validate()?;
    Ok(content)
}

/// Parse one content file.
pub fn read_record<T: serde::de::DeserializeOwned>(
    root: &Path,
    file: &str,
) -> Result<T, ContentError> {
    let path = root.join(file);
    let text = fs::read_to_string(&path).map_err(|source| ContentError::Io {
        file: path.display().to_string(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ContentError::Parse {
        file: file.to_string(),
        source,
    })
}

impl Content {
    /// Cross-record checks that TOML parsing cannot express.
    pub fn validate(&self) -> Result<(), ContentError> {
        let mut routes = HashSet::new();
        for link in &self.site.nav {
            if !routes.insert(link.route) {
                return Err(ContentError::Invalid(format!(
                    "navigation lists route {} twice",
                    link.route
                )));
            }
        }

        let mut gallery_ids = HashSet::new();
        for image in &self.team.gallery.items {
            if !gallery_ids.insert(image.id) {
                return Err(ContentError::Invalid(format!(
                    "duplicate gallery image id {}",
                    image.id
                )));
            }
        }

        for member in &self.team.board.items {
            if member.name.trim().is_empty() {
                return Err(ContentError::Invalid(
                    "board member without a name".to_string(),
                ));
            }
        }

        let mut event_ids = HashSet::new();
        for event in &self.events.upcoming.items {
            if !event_ids.insert(event.id) {
                return Err(ContentError::Invalid(format!(
                    "duplicate event id {}",
                    event.id
                )));
            }
            if event.parsed_date().is_none() {
                return Err(ContentError::Invalid(format!(
                    "event {} has date {:?}, expected YYYY-MM-DD",
                    event.id, event.date
                )));
            }
        }

        let hrefs = self
            .contact
            .channels
            .items
            .iter()
            .filter_map(|channel| channel.href.as_deref());
        for href in hrefs.filter(|href| href.starts_with("mailto:")) {
            MailtoLink::parse(href).map_err(|e| ContentError::Invalid(e.to_string()))?;
        }

        Ok(())
    }
}

//! Scroll-triggered reveal animations.
//!
//! A reveal is a one-shot entrance animation: content renders invisible and,
//! the first time enough of it scrolls into the viewport, gets an animation
//! class (and optionally a delay class). After that it stays revealed, even if
//! it leaves and re-enters the viewport.
//!
//! The split between build time and run time:
//!
//! - [`Reveal`] decides, at build time, which classes an element carries while
//!   hidden and which it gains once revealed. Both lists are baked into the
//!   markup (`class` and `data-reveal`).
//! - The embedded site script watches every `[data-reveal]` element with an
//!   `IntersectionObserver` at the rendered `data-threshold`, applies the
//!   `data-reveal` classes on the first crossing and stops observing.
//! - [`VisibilityObserver`] is the same state machine in Rust. It pins down
//!   the contract the script implements: `Hidden → Revealed`, at most once,
//!   with the watch released on the first trigger or on detach.

use maud::{Markup, html};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum RevealError {
    #[error("visibility threshold must be within [0, 1], got {0}")]
    ThresholdOutOfRange(f32),
    #[error("reveal delay must be one of 100, 200, 300, 400, 500, 600 ms, got {0}")]
    UnsupportedDelay(u32),
}

/// Class every reveal wrapper starts with: zero opacity until animated.
pub const HIDDEN_CLASS: &str = "opacity-0-start";

/// Fraction of an element's area that must be visible before it counts as
/// having entered the viewport.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct Threshold(f32);

impl Threshold {
    /// Elements start animating as soon as they peek in.
    pub const DEFAULT: Threshold = Threshold(0.1);

    pub fn new(fraction: f32) -> Result<Self, RevealError> {
        if (0.0..=1.0).contains(&fraction) {
            Ok(Self(fraction))
        } else {
            Err(RevealError::ThresholdOutOfRange(fraction))
        }
    }

    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f32> for Threshold {
    type Error = RevealError;

    fn try_from(fraction: f32) -> Result<Self, Self::Error> {
        Self::new(fraction)
    }
}

impl From<Threshold> for f32 {
    fn from(threshold: Threshold) -> f32 {
        threshold.0
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether an observed element has been revealed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Revealed,
}

/// One-shot viewport watch for a single element.
///
/// Lifecycle: construct (hidden, not watching) → [`attach`](Self::attach)
/// registers the watch → [`notify`](Self::notify) delivers visible fractions →
/// the first fraction at or above the threshold reveals and releases the watch.
/// [`detach`](Self::detach) models unmount and releases the watch early.
#[derive(Debug, Clone)]
pub struct VisibilityObserver {
    threshold: Threshold,
    state: Visibility,
    watching: bool,
}

impl VisibilityObserver {
    pub fn new(threshold: Threshold) -> Self {
        Self {
            threshold,
            state: Visibility::Hidden,
            watching: false,
        }
    }

    /// Register the viewport watch. No effect once revealed.
    pub fn attach(&mut self) {
        if self.state == Visibility::Hidden {
            self.watching = true;
        }
    }

    /// Release the watch without changing the flag.
    pub fn detach(&mut self) {
        self.watching = false;
    }

    /// Deliver an intersection notification.
    ///
    /// Returns `true` only for the call that flips `Hidden` to `Revealed`.
    /// Notifications are ignored while no watch is registered.
    pub fn notify(&mut self, visible_fraction: f32) -> bool {
        if !self.watching || self.state == Visibility::Revealed {
            return false;
        }
        if visible_fraction >= self.threshold.value() {
            self.state = Visibility::Revealed;
            self.watching = false;
            return true;
        }
        false
    }

    pub fn state(&self) -> Visibility {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == Visibility::Revealed
    }

    pub fn is_watching(&self) -> bool {
        self.watching
    }
}

/// Entrance animation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Animation {
    #[default]
    FadeInUp,
    FadeIn,
    ScaleIn,
}

impl Animation {
    pub fn class_name(self) -> &'static str {
        match self {
            Animation::FadeInUp => "animate-fade-in-up",
            Animation::FadeIn => "animate-fade-in",
            Animation::ScaleIn => "animate-scale-in",
        }
    }
}

/// Animation start delay, from a fixed set of 100 ms steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delay {
    Ms100,
    Ms200,
    Ms300,
    Ms400,
    Ms500,
    Ms600,
}

impl Delay {
    const STEP_MS: u32 = 100;

    /// `0` means no delay.
    pub fn from_millis(ms: u32) -> Result<Option<Self>, RevealError> {
        Ok(Some(match ms {
            0 => return Ok(None),
            100 => Delay::Ms100,
            200 => Delay::Ms200,
            300 => Delay::Ms300,
            400 => Delay::Ms400,
            500 => Delay::Ms500,
            600 => Delay::Ms600,
            other => return Err(RevealError::UnsupportedDelay(other)),
        }))
    }

    /// Stagger siblings laid out `per_row` to a row: the first column starts
    /// immediately, each following column 100 ms later. Capped at 600 ms.
    pub fn staggered(index: usize, per_row: usize) -> Option<Self> {
        let column = index % per_row.max(1);
        let ms = (column as u32).saturating_mul(Self::STEP_MS).min(600);
        // ms is a multiple of STEP_MS within 0..=600
        Self::from_millis(ms).ok().flatten()
    }

    pub fn millis(self) -> u32 {
        match self {
            Delay::Ms100 => 100,
            Delay::Ms200 => 200,
            Delay::Ms300 => 300,
            Delay::Ms400 => 400,
            Delay::Ms500 => 500,
            Delay::Ms600 => 600,
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Delay::Ms100 => "delay-100",
            Delay::Ms200 => "delay-200",
            Delay::Ms300 => "delay-300",
            Delay::Ms400 => "delay-400",
            Delay::Ms500 => "delay-500",
            Delay::Ms600 => "delay-600",
        }
    }
}

/// Reveal wrapper settings for one element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Reveal {
    pub animation: Animation,
    pub delay: Option<Delay>,
    pub threshold: Option<Threshold>,
}

impl Reveal {
    pub fn new(animation: Animation) -> Self {
        Self {
            animation,
            ..Self::default()
        }
    }

    pub fn fade_in_up() -> Self {
        Self::new(Animation::FadeInUp)
    }

    pub fn scale_in() -> Self {
        Self::new(Animation::ScaleIn)
    }

    pub fn with_delay(mut self, delay: Option<Delay>) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_threshold(mut self, threshold: Threshold) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Classes the wrapper carries in the given state.
    pub fn classes(&self, state: Visibility) -> Vec<&'static str> {
        let mut classes = vec![HIDDEN_CLASS];
        if state == Visibility::Revealed {
            classes.push(self.animation.class_name());
            if let Some(delay) = self.delay {
                classes.push(delay.class_name());
            }
        }
        classes
    }

    /// Wrap `content` in a hidden container that the site script reveals once.
    ///
    /// `site_threshold` applies unless this reveal overrides it.
    pub fn wrap(&self, site_threshold: Threshold, content: Markup) -> Markup {
        let threshold = self.threshold.unwrap_or(site_threshold);
        let revealed = self.classes(Visibility::Revealed).join(" ");
        html! {
            div class=(self.classes(Visibility::Hidden).join(" "))
                data-reveal=(revealed)
                data-threshold=(threshold.to_string()) {
                (content)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Threshold
    // =========================================================================

    #[test]
    fn threshold_accepts_bounds() {
        assert!(Threshold::new(0.0).is_ok());
        assert!(Threshold::new(1.0).is_ok());
        assert_eq!(Threshold::default().value(), 0.1);
    }

    #[test]
    fn threshold_rejects_out_of_range() {
        assert_eq!(
            Threshold::new(1.5),
            Err(RevealError::ThresholdOutOfRange(1.5))
        );
        assert!(Threshold::new(-0.1).is_err());
        assert!(Threshold::new(f32::NAN).is_err());
    }

    #[test]
    fn threshold_deserialization_validates() {
        #[derive(Deserialize, Debug)]
        struct Wrapper {
            #[allow(dead_code)]
            threshold: Threshold,
        }
        assert!(toml::from_str::<Wrapper>("threshold = 0.25").is_ok());
        assert!(toml::from_str::<Wrapper>("threshold = 2.0").is_err());
    }

    // =========================================================================
    // VisibilityObserver
    // =========================================================================

    #[test]
    fn starts_hidden_and_unwatched() {
        let observer = VisibilityObserver::new(Threshold::DEFAULT);
        assert_eq!(observer.state(), Visibility::Hidden);
        assert!(!observer.is_watching());
    }

    #[test]
    fn reveals_once_threshold_crossed() {
        let mut observer = VisibilityObserver::new(Threshold::DEFAULT);
        observer.attach();
        assert!(!observer.notify(0.05));
        assert!(!observer.is_visible());
        assert!(observer.notify(0.1));
        assert!(observer.is_visible());
    }

    #[test]
    fn watch_released_after_trigger() {
        let mut observer = VisibilityObserver::new(Threshold::DEFAULT);
        observer.attach();
        observer.notify(0.5);
        assert!(!observer.is_watching());
        // Re-attaching a revealed observer does not register a new watch
        observer.attach();
        assert!(!observer.is_watching());
    }

    #[test]
    fn never_flickers_back_to_hidden() {
        let mut observer = VisibilityObserver::new(Threshold::DEFAULT);
        observer.attach();
        let transitions = [0.0, 0.3, 0.0, 1.0, 0.0, 0.2]
            .into_iter()
            .filter(|f| observer.notify(*f))
            .count();
        assert_eq!(transitions, 1);
        assert_eq!(observer.state(), Visibility::Revealed);
    }

    #[test]
    fn never_attached_stays_hidden() {
        let mut observer = VisibilityObserver::new(Threshold::DEFAULT);
        assert!(!observer.notify(1.0));
        assert!(!observer.is_visible());
    }

    #[test]
    fn detach_stops_observation() {
        let mut observer = VisibilityObserver::new(Threshold::DEFAULT);
        observer.attach();
        observer.detach();
        assert!(!observer.notify(1.0));
        assert_eq!(observer.state(), Visibility::Hidden);
    }

    #[test]
    fn detach_keeps_revealed_flag() {
        let mut observer = VisibilityObserver::new(Threshold::DEFAULT);
        observer.attach();
        observer.notify(1.0);
        observer.detach();
        assert!(observer.is_visible());
    }

    #[test]
    fn zero_threshold_reveals_on_first_notification() {
        let mut observer = VisibilityObserver::new(Threshold::new(0.0).unwrap());
        observer.attach();
        assert!(observer.notify(0.0));
    }

    // =========================================================================
    // Delay
    // =========================================================================

    #[test]
    fn delay_from_millis() {
        assert_eq!(Delay::from_millis(0), Ok(None));
        assert_eq!(Delay::from_millis(300), Ok(Some(Delay::Ms300)));
        assert_eq!(
            Delay::from_millis(250),
            Err(RevealError::UnsupportedDelay(250))
        );
    }

    #[test]
    fn stagger_by_column() {
        assert_eq!(Delay::staggered(0, 3), None);
        assert_eq!(Delay::staggered(1, 3), Some(Delay::Ms100));
        assert_eq!(Delay::staggered(2, 3), Some(Delay::Ms200));
        assert_eq!(Delay::staggered(3, 3), None);
        assert_eq!(Delay::staggered(5, 3), Some(Delay::Ms200));
    }

    #[test]
    fn stagger_caps_at_six_hundred() {
        assert_eq!(Delay::staggered(9, 12), Some(Delay::Ms600));
    }

    #[test]
    fn stagger_with_zero_columns_does_not_panic() {
        assert_eq!(Delay::staggered(4, 0), None);
    }

    // =========================================================================
    // Reveal wrapper
    // =========================================================================

    #[test]
    fn hidden_classes_only_start_state() {
        let reveal = Reveal::fade_in_up().with_delay(Some(Delay::Ms200));
        assert_eq!(reveal.classes(Visibility::Hidden), vec![HIDDEN_CLASS]);
    }

    #[test]
    fn revealed_classes_include_animation_and_delay() {
        let reveal = Reveal::fade_in_up().with_delay(Some(Delay::Ms200));
        assert_eq!(
            reveal.classes(Visibility::Revealed),
            vec![HIDDEN_CLASS, "animate-fade-in-up", "delay-200"]
        );
    }

    #[test]
    fn revealed_without_delay_has_no_delay_class() {
        let reveal = Reveal::scale_in();
        let classes = reveal.classes(Visibility::Revealed);
        assert_eq!(classes, vec![HIDDEN_CLASS, "animate-scale-in"]);
    }

    #[test]
    fn wrap_renders_hidden_with_pending_classes() {
        let reveal = Reveal::new(Animation::FadeIn).with_delay(Some(Delay::Ms100));
        let html = reveal
            .wrap(Threshold::DEFAULT, html! { p { "hola" } })
            .into_string();
        assert!(html.contains(r#"class="opacity-0-start""#));
        assert!(html.contains(r#"data-reveal="opacity-0-start animate-fade-in delay-100""#));
        assert!(html.contains(r#"data-threshold="0.1""#));
        assert!(html.contains("<p>hola</p>"));
    }

    #[test]
    fn wrap_prefers_override_threshold() {
        let reveal = Reveal::fade_in_up().with_threshold(Threshold::new(0.5).unwrap());
        let html = reveal.wrap(Threshold::DEFAULT, html! {}).into_string();
        assert!(html.contains(r#"data-threshold="0.5""#));
    }

    #[test]
    fn wrap_is_stable_across_renders() {
        let reveal = Reveal::scale_in().with_delay(Delay::staggered(2, 3));
        let first = reveal.wrap(Threshold::DEFAULT, html! { "x" }).into_string();
        let second = reveal.wrap(Threshold::DEFAULT, html! { "x" }).into_string();
        assert_eq!(first, second);
    }
}

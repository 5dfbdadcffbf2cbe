//! UI chrome state.
//!
//! The navigation menu, back-to-top button and scroll-reveal animations
//! are plain state machines here; the embedder forwards input events and
//! applies the resulting state to the document. Keeping them IO-free is
//! what makes them testable at all.

use chrono::Datelike;

/// Mobile navigation menu state.
///
/// The menu closes on link activation, clicks outside it, and Escape;
/// Escape additionally returns focus to the toggle button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    TogglePressed,
    LinkActivated,
    OutsideClick,
    EscapePressed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEffect {
    /// Move keyboard focus back to the toggle button.
    FocusToggle,
}

impl NavMenu {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        self.open
    }

    /// Value for the toggle's `aria-expanded` attribute.
    #[must_use]
    pub const fn aria_expanded(self) -> &'static str {
        if self.open { "true" } else { "false" }
    }

    pub fn handle(&mut self, event: NavEvent) -> Option<NavEffect> {
        match event {
            NavEvent::TogglePressed => {
                self.open = !self.open;
                None
            }
            NavEvent::LinkActivated | NavEvent::OutsideClick => {
                self.open = false;
                None
            }
            NavEvent::EscapePressed => {
                if self.open {
                    self.open = false;
                    Some(NavEffect::FocusToggle)
                } else {
                    None
                }
            }
        }
    }
}

/// Back-to-top button visibility.
#[derive(Debug, Clone, Copy)]
pub struct BackToTop;

impl BackToTop {
    /// Scroll offset (px) past which the button shows.
    pub const THRESHOLD: f64 = 300.0;

    #[must_use]
    pub fn visible(scroll_offset: f64) -> bool {
        scroll_offset > Self::THRESHOLD
    }
}

/// One-way fade-in state for a card observed by an intersection observer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollReveal {
    revealed: bool,
}

impl ScrollReveal {
    /// Intersection ratio at which an element reveals.
    pub const THRESHOLD: f64 = 0.1;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn is_revealed(self) -> bool {
        self.revealed
    }

    /// Feed an observed intersection ratio; reveals once and stays.
    pub fn observe(&mut self, intersection_ratio: f64) -> bool {
        if intersection_ratio >= Self::THRESHOLD {
            self.revealed = true;
        }
        self.revealed
    }
}

/// Year for the auto-updating footer copyright.
#[must_use]
pub fn copyright_year() -> i32 {
    chrono::Local::now().year()
}

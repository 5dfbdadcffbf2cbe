//! Core domain types for Prospectus.
//!
//! This crate contains pure domain types with no IO, no async, and minimal
//! dependencies. Everything here can be used from any layer: the content
//! sections of the site, the update events loaders emit, the form
//! identifiers, and the HTML-escaping barrier for untrusted text.

mod escape;
pub use escape::escape_html;

mod records;
pub use records::{Contact, FooterContact, ImportantDate, QuickLink, VisitingHour};

use std::time::Duration;

use serde::{Deserialize, Serialize};

// ============================================================================
// Sections
// ============================================================================

/// A dynamically loaded content section of the site.
///
/// Each section maps to one backend endpoint and one page container. The
/// slug doubles as the retry token embedded in error markup, so it must
/// round-trip through [`Section::from_slug`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    AdmissionRequirements,
    ApplicationProcess,
    ImportantDates,
    Contacts,
    VisitingHours,
    QuickContact,
    FooterContact,
}

impl Section {
    /// All sections, in page order.
    pub const ALL: [Self; 7] = [
        Self::AdmissionRequirements,
        Self::ApplicationProcess,
        Self::ImportantDates,
        Self::Contacts,
        Self::VisitingHours,
        Self::QuickContact,
        Self::FooterContact,
    ];

    /// Stable identifier used in retry markup and configuration.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::AdmissionRequirements => "admission-requirements",
            Self::ApplicationProcess => "application-process",
            Self::ImportantDates => "important-dates",
            Self::Contacts => "contacts",
            Self::VisitingHours => "visiting-hours",
            Self::QuickContact => "quick-contact",
            Self::FooterContact => "footer-contact",
        }
    }

    /// Resolve a slug back to its section.
    ///
    /// This is the typed replacement for dispatching retries by function
    /// name: error markup carries the slug, the embedder hands it back here.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.slug() == slug)
    }

    /// The container id the section renders into by default.
    ///
    /// The contacts section is the one exception with two hosts; descriptors
    /// may override the container per page.
    #[must_use]
    pub const fn default_container(self) -> &'static str {
        match self {
            Self::AdmissionRequirements => "admission-requirements",
            Self::ApplicationProcess => "application-process",
            Self::ImportantDates => "important-dates",
            Self::Contacts => "contact-info-grid",
            Self::VisitingHours => "visiting-hours",
            Self::QuickContact => "quick-contact-grid",
            Self::FooterContact => "footer-contact-info",
        }
    }

    /// Message shown in the loading placeholder.
    #[must_use]
    pub const fn loading_message(self) -> &'static str {
        match self {
            Self::AdmissionRequirements => "Loading admission requirements...",
            Self::ApplicationProcess => "Loading application process...",
            Self::ImportantDates => "Loading important dates...",
            Self::Contacts => "Loading contact information...",
            Self::VisitingHours => "Loading visiting hours...",
            Self::QuickContact => "Loading quick contact options...",
            Self::FooterContact => "Loading footer contact information...",
        }
    }

    /// Whether the section tolerates API failure by keeping static markup.
    ///
    /// Fail-open sections ship fallback content in the page; on failure the
    /// loader leaves it untouched instead of rendering a retry state.
    #[must_use]
    pub const fn fail_open(self) -> bool {
        matches!(self, Self::Contacts | Self::FooterContact)
    }

    /// Scheduling tier the section belongs to on a default page.
    #[must_use]
    pub const fn default_priority(self) -> Priority {
        match self {
            Self::AdmissionRequirements
            | Self::ApplicationProcess
            | Self::ImportantDates
            | Self::Contacts => Priority::High,
            Self::VisitingHours | Self::QuickContact => Priority::Medium,
            Self::FooterContact => Priority::Low,
        }
    }
}

/// Scheduling tier for content loaders.
///
/// High runs at page load, medium after a short delay, low last. This is a
/// perceived-contention knob, not a fairness guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Tiers in execution order.
    pub const TIERS: [Self; 3] = [Self::High, Self::Medium, Self::Low];
}

// ============================================================================
// Loader update events
// ============================================================================

/// An update emitted by a section loader as it progresses.
///
/// Loaders never touch the page directly; they describe what the container
/// should show and the embedder applies it. `Failed` implies a retry
/// affordance keyed by the section slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionUpdate {
    /// Show the loading placeholder.
    Loading { container: String, message: String },
    /// Replace the container content with rendered HTML.
    Rendered { container: String, html: String },
    /// The API failed but static fallback content is present; leave it.
    FallbackRetained { container: String },
    /// The API failed and there is nothing to fall back to.
    Failed {
        container: String,
        section: Section,
        message: String,
    },
}

impl SectionUpdate {
    /// The container this update targets.
    #[must_use]
    pub fn container(&self) -> &str {
        match self {
            Self::Loading { container, .. }
            | Self::Rendered { container, .. }
            | Self::FallbackRetained { container }
            | Self::Failed { container, .. } => container,
        }
    }

    /// Whether this update ends the loader's run.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Loading { .. })
    }
}

// ============================================================================
// Forms
// ============================================================================

/// The three submission forms the site carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormKind {
    Admission,
    Shs1Admission,
    Contact,
}

impl FormKind {
    pub const ALL: [Self; 3] = [Self::Admission, Self::Shs1Admission, Self::Contact];

    /// Default endpoint path the form posts to.
    #[must_use]
    pub const fn endpoint_path(self) -> &'static str {
        match self {
            Self::Admission => "/api/admissions",
            Self::Shs1Admission => "/api/shs1-admissions",
            Self::Contact => "/api/contact",
        }
    }

    /// Submit button label at rest.
    #[must_use]
    pub const fn submit_label(self) -> &'static str {
        match self {
            Self::Admission => "Submit Application",
            Self::Shs1Admission => "Submit SHS 1 Application",
            Self::Contact => "Send Message",
        }
    }

    /// Submit button label while the request is in flight.
    #[must_use]
    pub const fn submitting_label(self) -> &'static str {
        match self {
            Self::Admission | Self::Shs1Admission => "Submitting...",
            Self::Contact => "Sending...",
        }
    }

    /// Banner shown when the backend accepts the submission.
    #[must_use]
    pub const fn success_message(self) -> &'static str {
        match self {
            Self::Admission => "Application submitted successfully! We will contact you soon.",
            Self::Shs1Admission => {
                "SHS 1 Application submitted successfully! We will contact you soon."
            }
            Self::Contact => "Message sent successfully! We will get back to you soon.",
        }
    }

    /// Generic failure banner when the backend gives no message of its own.
    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::Admission => "Failed to submit application. Please try again.",
            Self::Shs1Admission => "Failed to submit SHS 1 application. Please try again.",
            Self::Contact => "Failed to send message. Please try again.",
        }
    }
}

// ============================================================================
// Banners
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// A transient page-level message shown after a form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
}

impl Banner {
    /// How long a banner stays up before the embedder hides it.
    pub const AUTO_HIDE: Duration = Duration::from_secs(5);

    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Success,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Error,
            message: message.into(),
        }
    }
}

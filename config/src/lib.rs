//! Site configuration for the content and form layers.
//!
//! All endpoints, user-facing failure messages, and tuning knobs live in one
//! [`SiteConfig`] value that callers construct once and inject into the
//! fetch layer and the loaders. Nothing in this workspace reads global
//! state: tests swap in a config pointing at a mock server, production wires
//! the real base URL.
//!
//! Configuration is optional by design. `SiteConfig::default()` reproduces
//! the site's built-in wiring; a TOML file can override any subset of it,
//! and a missing or malformed file falls back to the defaults with a
//! warning rather than failing the page.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use url::Url;

use prospectus_types::{FormKind, Section};

const DEFAULT_BASE_URL: &str = "http://localhost/";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("endpoint path {path:?} does not join onto {base}")]
    InvalidEndpoint { base: Url, path: String },
}

/// Top-level configuration injected into the fetch layer and loaders.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Base URL all endpoint paths are joined onto.
    pub base_url: Url,
    pub endpoints: Endpoints,
    pub messages: Messages,
    pub fetch: FetchSettings,
    pub schedule: ScheduleSettings,
    /// Anti-forgery token sent as `X-CSRFToken` when present.
    pub csrf_token: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url parses"),
            endpoints: Endpoints::default(),
            messages: Messages::default(),
            fetch: FetchSettings::default(),
            schedule: ScheduleSettings::default(),
            csrf_token: None,
        }
    }
}

impl SiteConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from `path`, falling back to defaults.
    ///
    /// A missing or unparsable file is not fatal to the page; it is logged
    /// and the built-in wiring is used instead.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path).map_err(ConfigError::from) {
            Ok(text) => match Self::from_toml_str(&text) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "invalid site config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "unreadable site config, using defaults");
                Self::default()
            }
        }
    }

    /// Full URL for a section's GET endpoint.
    pub fn endpoint_url(&self, section: Section) -> Result<Url, ConfigError> {
        self.join(self.endpoints.section_path(section))
    }

    /// Full URL for a form's POST endpoint.
    pub fn form_url(&self, form: FormKind) -> Result<Url, ConfigError> {
        self.join(self.endpoints.form_path(form))
    }

    fn join(&self, path: &str) -> Result<Url, ConfigError> {
        self.base_url
            .join(path)
            .map_err(|_| ConfigError::InvalidEndpoint {
                base: self.base_url.clone(),
                path: path.to_string(),
            })
    }
}

/// Endpoint paths, relative to [`SiteConfig::base_url`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub admission_requirements: String,
    pub application_process: String,
    pub important_dates: String,
    pub contacts: String,
    pub visiting_hours: String,
    pub quick_contact: String,
    pub footer_contact: String,
    pub admission_form: String,
    pub shs1_form: String,
    pub contact_form: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            admission_requirements: "/api/admissions/requirements".to_string(),
            application_process: "/api/admissions/process".to_string(),
            important_dates: "/api/admissions/dates".to_string(),
            contacts: "/api/contacts".to_string(),
            visiting_hours: "/api/visiting-hours".to_string(),
            quick_contact: "/api/quick-contact".to_string(),
            footer_contact: "/api/footer-contact".to_string(),
            admission_form: FormKind::Admission.endpoint_path().to_string(),
            shs1_form: FormKind::Shs1Admission.endpoint_path().to_string(),
            contact_form: FormKind::Contact.endpoint_path().to_string(),
        }
    }
}

impl Endpoints {
    #[must_use]
    pub fn section_path(&self, section: Section) -> &str {
        match section {
            Section::AdmissionRequirements => &self.admission_requirements,
            Section::ApplicationProcess => &self.application_process,
            Section::ImportantDates => &self.important_dates,
            Section::Contacts => &self.contacts,
            Section::VisitingHours => &self.visiting_hours,
            Section::QuickContact => &self.quick_contact,
            Section::FooterContact => &self.footer_contact,
        }
    }

    #[must_use]
    pub fn form_path(&self, form: FormKind) -> &str {
        match form {
            FormKind::Admission => &self.admission_form,
            FormKind::Shs1Admission => &self.shs1_form,
            FormKind::Contact => &self.contact_form,
        }
    }
}

/// User-facing failure messages, one per section plus the generic trio.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub admission_requirements: String,
    pub application_process: String,
    pub important_dates: String,
    pub contacts: String,
    pub visiting_hours: String,
    pub quick_contact: String,
    pub footer_contact: String,
    pub network: String,
    pub server: String,
    pub timeout: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            admission_requirements:
                "Unable to load admission requirements. Please refresh the page.".to_string(),
            application_process: "Unable to load application process. Please refresh the page."
                .to_string(),
            important_dates: "Unable to load important dates. Please refresh the page.".to_string(),
            contacts: "Unable to load contact information. Please refresh the page.".to_string(),
            visiting_hours: "Unable to load visiting hours. Please refresh the page.".to_string(),
            quick_contact: "Unable to load quick contact options. Please refresh the page."
                .to_string(),
            footer_contact: "Unable to load footer contact information. Please refresh the page."
                .to_string(),
            network: "Network error. Please check your connection and try again.".to_string(),
            server: "Server error. Please try again later.".to_string(),
            timeout: "Request timed out. Please try again.".to_string(),
        }
    }
}

impl Messages {
    #[must_use]
    pub fn for_section(&self, section: Section) -> &str {
        match section {
            Section::AdmissionRequirements => &self.admission_requirements,
            Section::ApplicationProcess => &self.application_process,
            Section::ImportantDates => &self.important_dates,
            Section::Contacts => &self.contacts,
            Section::VisitingHours => &self.visiting_hours,
            Section::QuickContact => &self.quick_contact,
            Section::FooterContact => &self.footer_contact,
        }
    }
}

/// Fetch layer tuning. Durations are declared in milliseconds in TOML.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchSettings {
    pub timeout_ms: u64,
    pub connect_timeout_ms: u64,
    /// Retries after the initial attempt, for retryable errors only.
    pub retry_attempts: u32,
    /// Base backoff; attempt `n` sleeps `n × retry_backoff`.
    pub retry_backoff_ms: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            timeout_ms: 10_000,
            connect_timeout_ms: 10_000,
            retry_attempts: 2,
            retry_backoff_ms: 1_000,
        }
    }
}

impl FetchSettings {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    #[must_use]
    pub const fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }
}

/// Tier delays for the batch scheduler.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScheduleSettings {
    pub medium_delay_ms: u64,
    pub low_delay_ms: u64,
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self {
            medium_delay_ms: 100,
            low_delay_ms: 500,
        }
    }
}

impl ScheduleSettings {
    #[must_use]
    pub const fn medium_delay(&self) -> Duration {
        Duration::from_millis(self.medium_delay_ms)
    }

    #[must_use]
    pub const fn low_delay(&self) -> Duration {
        Duration::from_millis(self.low_delay_ms)
    }
}

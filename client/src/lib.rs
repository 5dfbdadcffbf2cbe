//! HTTP client for the site's content and form endpoints.
//!
//! # Architecture
//!
//! [`ApiClient`] wraps one `reqwest::Client` plus an injected
//! [`SiteConfig`]. Endpoint URLs are resolved once at construction, so a
//! bad base URL or endpoint path fails fast instead of surfacing as a
//! runtime fetch error.
//!
//! Two operations cover the whole surface:
//!
//! - [`ApiClient::get_json`] - content GETs with a per-attempt deadline,
//!   response validation, and bounded automatic retry of retryable errors
//!   (linear backoff).
//! - [`ApiClient::submit_form`] - multipart form POSTs, single attempt,
//!   with server-provided error messages resolved from the JSON body.
//!
//! # Error Handling
//!
//! All failures are classified into [`FetchError`]; see the [`error`]
//! module for the taxonomy and retry rules.

pub mod error;
pub use error::{FetchError, error_body_message, http_status_message};

mod submit;

use std::sync::Arc;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderValue};
use serde_json::Value;
use thiserror::Error;
use url::Url;

use prospectus_config::{ConfigError, SiteConfig};
use prospectus_types::{FormKind, Section};

/// Header carrying the anti-forgery token, when configured.
pub const CSRF_HEADER: &str = "X-CSRFToken";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// HTTP client with resolved endpoints and injected configuration.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: Arc<SiteConfig>,
    section_urls: Arc<[Url; Section::ALL.len()]>,
    form_urls: Arc<[Url; FormKind::ALL.len()]>,
}

impl ApiClient {
    /// Build a client from the injected configuration.
    ///
    /// Resolves every section and form endpoint eagerly; an endpoint path
    /// that does not join onto the base URL is a construction error.
    pub fn new(config: Arc<SiteConfig>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.fetch.connect_timeout())
            .build()
            .map_err(ClientError::Build)?;

        let mut section_urls = Vec::with_capacity(Section::ALL.len());
        for section in Section::ALL {
            section_urls.push(config.endpoint_url(section)?);
        }
        let mut form_urls = Vec::with_capacity(FormKind::ALL.len());
        for form in FormKind::ALL {
            form_urls.push(config.form_url(form)?);
        }

        Ok(Self {
            http,
            config,
            section_urls: Arc::new(
                section_urls
                    .try_into()
                    .unwrap_or_else(|_| unreachable!("one URL per section")),
            ),
            form_urls: Arc::new(
                form_urls
                    .try_into()
                    .unwrap_or_else(|_| unreachable!("one URL per form")),
            ),
        })
    }

    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Resolved URL for a section's GET endpoint.
    #[must_use]
    pub fn section_url(&self, section: Section) -> &Url {
        &self.section_urls[section_index(section)]
    }

    /// Resolved URL for a form's POST endpoint.
    #[must_use]
    pub fn form_url(&self, form: FormKind) -> &Url {
        &self.form_urls[form_index(form)]
    }

    /// Fetch a section's JSON payload.
    ///
    /// Each attempt is bounded by the configured timeout. Retryable
    /// failures (timeouts, transport errors) are retried up to the
    /// configured count with linear backoff: attempt `n` sleeps
    /// `n × retry_backoff` first. Status and format errors propagate
    /// immediately.
    pub async fn get_json(&self, section: Section) -> Result<Value, FetchError> {
        self.get_json_url(self.section_url(section).clone()).await
    }

    /// Fetch an arbitrary JSON endpoint with the same policy as
    /// [`ApiClient::get_json`].
    pub async fn get_json_url(&self, url: Url) -> Result<Value, FetchError> {
        let max_retries = self.config.fetch.retry_attempts;
        let mut attempt: u32 = 0;

        loop {
            match self.attempt_get(&url).await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_retryable() && attempt < max_retries => {
                    attempt += 1;
                    let delay = self.config.fetch.retry_backoff() * attempt;
                    tracing::warn!(
                        url = %url,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "retrying request"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// One GET attempt: deadline, status handling, response validation.
    async fn attempt_get(&self, url: &Url) -> Result<Value, FetchError> {
        let timeout = self.config.fetch.timeout();
        // The deadline covers the whole attempt, body included; expiry
        // drops the future and with it the in-flight request.
        tokio::time::timeout(timeout, self.execute_get(url))
            .await
            .map_err(|_| FetchError::Timeout { timeout })?
    }

    async fn execute_get(&self, url: &Url) -> Result<Value, FetchError> {
        let mut request = self
            .http
            .get(url.clone())
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = &self.config.csrf_token {
            request = request.header(CSRF_HEADER, token);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .json::<Value>()
                .await
                .ok()
                .as_ref()
                .and_then(error_body_message)
                .unwrap_or_else(|| http_status_message(status.as_u16()).to_string());
            return Err(FetchError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let json_content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.contains("application/json"));
        if !json_content_type {
            return Err(FetchError::Format {
                detail: "response is not application/json".to_string(),
            });
        }

        let body: Value = response.json().await.map_err(|e| FetchError::Format {
            detail: format!("invalid JSON body: {e}"),
        })?;
        if !body.is_object() {
            return Err(FetchError::Format {
                detail: "response body is not a JSON object".to_string(),
            });
        }

        Ok(body)
    }
}

const fn section_index(section: Section) -> usize {
    match section {
        Section::AdmissionRequirements => 0,
        Section::ApplicationProcess => 1,
        Section::ImportantDates => 2,
        Section::Contacts => 3,
        Section::VisitingHours => 4,
        Section::QuickContact => 5,
        Section::FooterContact => 6,
    }
}

const fn form_index(form: FormKind) -> usize {
    match form {
        FormKind::Admission => 0,
        FormKind::Shs1Admission => 1,
        FormKind::Contact => 2,
    }
}

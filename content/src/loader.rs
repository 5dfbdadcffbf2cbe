//! Section loaders.
//!
//! One pipeline drives every section: skip absent containers, show the
//! loading placeholder (unless fallback content is already on screen),
//! fetch, validate the payload shape, render, and report the outcome as
//! [`SectionUpdate`] events. Failures are contained per loader: a section
//! either keeps its fallback markup (fail-open) or shows a retry state.

use thiserror::Error;
use tokio::sync::mpsc;

use prospectus_client::{ApiClient, FetchError};
use prospectus_types::{Priority, Section, SectionUpdate};

use crate::page::PageModel;
use crate::payload::{self, PayloadError};
use crate::render;

/// Everything a loader needs, shared across the whole schedule.
#[derive(Debug, Clone)]
pub struct LoaderContext {
    pub client: ApiClient,
    pub page: PageModel,
    pub updates: mpsc::Sender<SectionUpdate>,
}

impl LoaderContext {
    #[must_use]
    pub fn new(client: ApiClient, page: PageModel, updates: mpsc::Sender<SectionUpdate>) -> Self {
        Self {
            client,
            page,
            updates,
        }
    }

    async fn send(&self, update: SectionUpdate) {
        // A dropped receiver means the page is gone; nothing left to do.
        let _ = self.updates.send(update).await;
    }
}

/// Binds a section to a container and a scheduling tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderDescriptor {
    pub section: Section,
    pub container: String,
    pub priority: Priority,
}

impl LoaderDescriptor {
    /// Descriptor with the section's default container and tier.
    #[must_use]
    pub fn new(section: Section) -> Self {
        Self {
            section,
            container: section.default_container().to_string(),
            priority: section.default_priority(),
        }
    }

    /// Same section, different host container.
    #[must_use]
    pub fn with_container(mut self, container: impl Into<String>) -> Self {
        self.container = container.into();
        self
    }

    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}

#[derive(Debug, Error)]
enum LoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Payload(#[from] PayloadError),
}

/// Run one section loader to completion.
///
/// Never returns an error: every failure is converted into the
/// appropriate terminal [`SectionUpdate`], which is what keeps failures
/// isolated inside a scheduler tier.
pub async fn load_section(ctx: &LoaderContext, descriptor: &LoaderDescriptor) {
    let container = descriptor.container.as_str();
    if !ctx.page.contains(container) {
        return;
    }
    let has_fallback = ctx.page.has_fallback(container);

    if !has_fallback {
        ctx.send(SectionUpdate::Loading {
            container: container.to_string(),
            message: descriptor.section.loading_message().to_string(),
        })
        .await;
    }

    match fetch_and_render(ctx, descriptor.section).await {
        Ok(html) => {
            ctx.send(SectionUpdate::Rendered {
                container: container.to_string(),
                html,
            })
            .await;
        }
        Err(error) if has_fallback => {
            tracing::warn!(
                section = descriptor.section.slug(),
                container,
                error = %error,
                "section data unavailable, keeping fallback content"
            );
            ctx.send(SectionUpdate::FallbackRetained {
                container: container.to_string(),
            })
            .await;
        }
        Err(error) => {
            tracing::warn!(
                section = descriptor.section.slug(),
                container,
                error = %error,
                "section load failed"
            );
            let message = ctx
                .client
                .config()
                .messages
                .for_section(descriptor.section)
                .to_string();
            ctx.send(SectionUpdate::Failed {
                container: container.to_string(),
                section: descriptor.section,
                message,
            })
            .await;
        }
    }
}

async fn fetch_and_render(ctx: &LoaderContext, section: Section) -> Result<String, LoadError> {
    let value = ctx.client.get_json(section).await?;
    let html = match section {
        Section::AdmissionRequirements => {
            render::requirements_list(&payload::parse_requirements(&value)?)
        }
        Section::ApplicationProcess => {
            render::process_steps(&payload::parse_process_steps(&value)?)
        }
        Section::ImportantDates => {
            render::important_dates(&payload::parse_important_dates(&value)?)
        }
        Section::Contacts => render::contact_cards(&payload::parse_contacts(&value)?),
        Section::VisitingHours => render::visiting_hours(&payload::parse_visiting_hours(&value)?),
        Section::QuickContact => render::quick_contact(&payload::parse_quick_links(&value)?),
        Section::FooterContact => render::footer_contact(&payload::parse_footer_contact(&value)?),
    };
    Ok(html)
}

//! Priority-batched loader scheduling.
//!
//! Loaders are grouped into three tiers. The high tier starts immediately;
//! the medium and low tiers start at fixed offsets from schedule start
//! (100 ms and 500 ms by default). This staggers first-paint contention;
//! it is not a fairness scheduler. Within a tier all active loaders run
//! concurrently and are joined, and because [`load_section`] converts
//! every failure into an update event, one loader's failure can never
//! stop its siblings.

use futures_util::future::join_all;
use tokio::time::Instant;

use prospectus_types::{Priority, Section};

use crate::loader::{LoaderContext, LoaderDescriptor, load_section};

/// The default page wiring: which sections load where, at which tier.
///
/// The contacts loader appears twice, once per grid; pages simply lack the
/// containers they do not use, and those descriptors deactivate.
#[must_use]
pub fn default_plan() -> Vec<LoaderDescriptor> {
    vec![
        // Admissions page
        LoaderDescriptor::new(Section::AdmissionRequirements),
        LoaderDescriptor::new(Section::ApplicationProcess),
        LoaderDescriptor::new(Section::ImportantDates),
        LoaderDescriptor::new(Section::Contacts)
            .with_container("admissions-contact-grid")
            .with_priority(Priority::Medium),
        // Contact page
        LoaderDescriptor::new(Section::Contacts),
        LoaderDescriptor::new(Section::VisitingHours),
        LoaderDescriptor::new(Section::QuickContact),
        // Footer, shared by every page
        LoaderDescriptor::new(Section::FooterContact),
    ]
}

/// Run one tier's active loaders concurrently.
pub async fn run_batch(ctx: &LoaderContext, descriptors: &[&LoaderDescriptor]) {
    let active: Vec<_> = descriptors
        .iter()
        .filter(|d| ctx.page.contains(&d.container))
        .collect();
    if active.is_empty() {
        return;
    }
    tracing::debug!(count = active.len(), "running loader batch");
    join_all(active.into_iter().map(|d| load_section(ctx, d))).await;
}

/// Run a full plan: high tier now, medium and low tiers at their
/// configured offsets from schedule start.
pub async fn run_schedule(ctx: &LoaderContext, plan: &[LoaderDescriptor]) {
    let schedule = &ctx.client.config().schedule;
    let start = Instant::now();

    for tier in Priority::TIERS {
        match tier {
            Priority::High => {}
            Priority::Medium => tokio::time::sleep_until(start + schedule.medium_delay()).await,
            Priority::Low => tokio::time::sleep_until(start + schedule.low_delay()).await,
        }
        let batch: Vec<&LoaderDescriptor> =
            plan.iter().filter(|d| d.priority == tier).collect();
        run_batch(ctx, &batch).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plan_covers_every_section() {
        let plan = default_plan();
        for section in Section::ALL {
            assert!(
                plan.iter().any(|d| d.section == section),
                "{section:?} missing from the default plan"
            );
        }
    }

    #[test]
    fn contacts_load_into_both_grids_at_different_tiers() {
        let plan = default_plan();
        let contacts: Vec<_> = plan
            .iter()
            .filter(|d| d.section == Section::Contacts)
            .collect();
        assert_eq!(contacts.len(), 2);
        assert!(
            contacts
                .iter()
                .any(|d| d.container == "admissions-contact-grid" && d.priority == Priority::Medium)
        );
        assert!(
            contacts
                .iter()
                .any(|d| d.container == "contact-info-grid" && d.priority == Priority::High)
        );
    }

    #[test]
    fn footer_sits_alone_in_the_low_tier() {
        let plan = default_plan();
        let low: Vec<_> = plan.iter().filter(|d| d.priority == Priority::Low).collect();
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].section, Section::FooterContact);
    }
}

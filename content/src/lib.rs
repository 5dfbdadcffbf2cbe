//! Content pipeline: from endpoint payloads to page fragments.
//!
//! # Architecture
//!
//! Data flows one way:
//!
//! ```text
//! run_schedule -> load_section -> ApiClient::get_json
//!                              -> payload::parse_*   (shape validation)
//!                              -> render::*          (pure HTML templates)
//!                              -> SectionUpdate      (event to the embedder)
//! ```
//!
//! - [`payload`] - per-section shape validation over raw JSON; malformed
//!   entries are filtered, empty payloads are errors.
//! - [`render`] - pure data-to-markup templates, including the loading and
//!   retry states.
//! - [`page`] - the embedder's snapshot of containers and fallback markers.
//! - [`loader`] - the per-section pipeline emitting [`SectionUpdate`]s.
//! - [`schedule`] - the three-tier priority scheduler over loader
//!   descriptors.
//! - [`chrome`] - IO-free state for the navigation menu, back-to-top
//!   button and scroll-reveal animations.
//!
//! # Failure model
//!
//! Loaders are fail-open where the page ships fallback markup (contacts,
//! footer) and fail-visible everywhere else (a retry state keyed by the
//! section slug). A loader can fail only into an event, so tier siblings
//! are never affected.

pub mod chrome;
pub mod loader;
pub mod page;
pub mod payload;
pub mod render;
pub mod schedule;

pub use loader::{LoaderContext, LoaderDescriptor, load_section};
pub use page::{PageModel, SlotState};
pub use schedule::{default_plan, run_batch, run_schedule};

pub use prospectus_types::SectionUpdate;

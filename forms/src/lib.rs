//! Form validation and submission for the site's three forms.
//!
//! # Architecture
//!
//! The crate is layered so that everything except the final POST is pure
//! and synchronously testable:
//!
//! - [`validate`] - the field predicates (name, email, phone, date of
//!   birth, BECE aggregate and index, address, message).
//! - [`fields`] - per-form field tables binding each submitted field name
//!   to a predicate and its inline error messages.
//! - [`controller`] - the submission state machine; consumes values,
//!   returns [`controller::FormEffect`]s for the page to apply.
//! - [`format`] - live input formatting (phone grouping).
//! - [`driver`] - the async step: posts accepted submissions through
//!   [`prospectus_client::ApiClient`] and folds the result back into the
//!   controller.
//!
//! Validation runs twice with the same predicates: on field blur (single
//! field, lenient about emptiness) and on submit (every field, strict).
//! A failed submission keeps the user's input; only success resets.

pub mod controller;
pub mod driver;
pub mod fields;
pub mod format;
pub mod validate;

pub use controller::{FieldError, FormController, FormEffect, FormPhase, SubmitDecision};
pub use fields::{FieldKind, FieldSpec};

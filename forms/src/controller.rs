//! Form submission state machine.
//!
//! The controller is pure: it consumes field values and emits
//! [`FormEffect`]s describing what the page should do (show an inline
//! error, disable the submit button, show a banner). The async glue that
//! actually posts the form lives in [`crate::driver`].
//!
//! States: `Idle -> (validate) -> Idle` on validation failure, or
//! `Idle -> Submitting -> Idle` around a network submission. User input is
//! never cleared except on a successful submission.

use std::collections::HashMap;

use chrono::NaiveDate;

use prospectus_types::{Banner, FormKind};

use crate::fields::{self, FieldSpec};

/// Where a form currently is in its submission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Submitting,
}

/// An inline validation failure for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Instructions for the embedding page. The controller never performs
/// side effects itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEffect {
    ShowFieldError(FieldError),
    ClearFieldError { field: &'static str },
    ClearAllFieldErrors,
    /// Bring the first failed field into view.
    ScrollToFirstError,
    /// Disable or re-enable the submit button and swap its label.
    SetSubmitButton { label: &'static str, enabled: bool },
    ShowBanner(Banner),
    /// Clear every field; only ever emitted after a successful submission.
    ResetForm,
}

/// Outcome of a submit request.
#[derive(Debug)]
pub enum SubmitDecision {
    /// Validation failed (or a submission is already in flight); stay idle
    /// and apply the effects.
    Rejected(Vec<FormEffect>),
    /// Validation passed; the caller must post `fields` and then feed the
    /// result to [`FormController::submission_completed`].
    Accepted {
        fields: Vec<(String, String)>,
        effects: Vec<FormEffect>,
    },
}

/// Pure submission state for one form instance.
#[derive(Debug)]
pub struct FormController {
    form: FormKind,
    phase: FormPhase,
    today: NaiveDate,
}

impl FormController {
    /// `today` anchors date-of-birth validation; pass the current local
    /// date in production.
    #[must_use]
    pub fn new(form: FormKind, today: NaiveDate) -> Self {
        Self {
            form,
            phase: FormPhase::Idle,
            today,
        }
    }

    #[must_use]
    pub const fn form(&self) -> FormKind {
        self.form
    }

    #[must_use]
    pub const fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Blur-time validation of a single field.
    ///
    /// Unknown fields produce no effects, so pages can host extra inputs
    /// the controller does not manage.
    #[must_use]
    pub fn field_blurred(&self, field_name: &str, value: &str) -> Vec<FormEffect> {
        let Some(spec) = fields::field(self.form, field_name) else {
            return Vec::new();
        };
        match spec.validate_on_blur(value, self.today) {
            Some(message) => vec![FormEffect::ShowFieldError(FieldError {
                field: spec.name,
                message,
            })],
            None => vec![FormEffect::ClearFieldError { field: spec.name }],
        }
    }

    /// Full-form validation on submit.
    ///
    /// On success the returned field list preserves the form's declared
    /// field order and the controller moves to `Submitting`.
    #[must_use]
    pub fn submit_requested(&mut self, values: &HashMap<String, String>) -> SubmitDecision {
        if self.phase == FormPhase::Submitting {
            // Double-click guard: the in-flight submission owns the form.
            return SubmitDecision::Rejected(Vec::new());
        }

        let specs = fields::fields(self.form);
        let errors: Vec<FieldError> = specs
            .iter()
            .filter_map(|spec| {
                spec.validate(field_value(values, spec), self.today)
                    .map(|message| FieldError {
                        field: spec.name,
                        message,
                    })
            })
            .collect();

        if !errors.is_empty() {
            let mut effects = vec![FormEffect::ClearAllFieldErrors];
            effects.extend(errors.into_iter().map(FormEffect::ShowFieldError));
            effects.push(FormEffect::ScrollToFirstError);
            return SubmitDecision::Rejected(effects);
        }

        self.phase = FormPhase::Submitting;
        let fields = specs
            .iter()
            .map(|spec| {
                (
                    spec.name.to_string(),
                    field_value(values, spec).trim().to_string(),
                )
            })
            .collect();
        SubmitDecision::Accepted {
            fields,
            effects: vec![
                FormEffect::ClearAllFieldErrors,
                FormEffect::SetSubmitButton {
                    label: self.form.submitting_label(),
                    enabled: false,
                },
            ],
        }
    }

    /// Feed back the network result of an accepted submission.
    ///
    /// `result` carries the user-facing failure message on `Err`. The
    /// button is always restored; the form only resets on success.
    #[must_use]
    pub fn submission_completed(&mut self, result: Result<(), String>) -> Vec<FormEffect> {
        self.phase = FormPhase::Idle;
        let mut effects = match result {
            Ok(()) => vec![
                FormEffect::ShowBanner(Banner::success(self.form.success_message())),
                FormEffect::ResetForm,
            ],
            Err(message) => vec![FormEffect::ShowBanner(Banner::error(message))],
        };
        effects.push(FormEffect::SetSubmitButton {
            label: self.form.submit_label(),
            enabled: true,
        });
        effects
    }
}

fn field_value<'a>(values: &'a HashMap<String, String>, spec: &FieldSpec) -> &'a str {
    values.get(spec.name).map_or("", String::as_str)
}

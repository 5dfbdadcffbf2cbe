//! Async glue between the form controller and the fetch layer.

use std::collections::HashMap;

use prospectus_client::{ApiClient, FetchError};

use crate::controller::{FormController, FormEffect, SubmitDecision};

/// Validate and, if valid, submit a form.
///
/// Returns the full effect list for the page: either the validation
/// failures, or the submitting/result effects around the network call.
/// Field values are never cleared on failure.
pub async fn submit(
    controller: &mut FormController,
    client: &ApiClient,
    values: &HashMap<String, String>,
) -> Vec<FormEffect> {
    match controller.submit_requested(values) {
        SubmitDecision::Rejected(effects) => effects,
        SubmitDecision::Accepted {
            fields,
            mut effects,
        } => {
            let result = client.submit_form(controller.form(), &fields).await;
            if let Err(error) = &result {
                tracing::warn!(form = ?controller.form(), error = %error, "form submission failed");
            }
            let result = result.map_err(|error| failure_message(client, &error));
            effects.extend(controller.submission_completed(result));
            effects
        }
    }
}

/// Resolve the banner message for a failed submission.
///
/// Status errors already carry the server-provided (or generic) message;
/// everything else collapses to the network message.
fn failure_message(client: &ApiClient, error: &FetchError) -> String {
    match error {
        FetchError::Status { message, .. } => message.clone(),
        FetchError::Timeout { .. } | FetchError::Network { .. } | FetchError::Format { .. } => {
            client.config().messages.network.clone()
        }
    }
}

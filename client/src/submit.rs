//! Form submission.
//!
//! Submissions post `multipart/form-data` and are never retried
//! automatically: a duplicate application is worse than a failed one. The
//! caller decides what to do with the classified error (in practice: show
//! an error banner and leave the user's input untouched).

use serde_json::Value;

use prospectus_types::FormKind;

use crate::{ApiClient, CSRF_HEADER, FetchError, error_body_message};

impl ApiClient {
    /// Post one form's field values to its endpoint.
    ///
    /// On a non-success status the error message is resolved from the JSON
    /// `{message}` body when present, otherwise from the form's generic
    /// failure message.
    pub async fn submit_form(
        &self,
        form: FormKind,
        fields: &[(String, String)],
    ) -> Result<(), FetchError> {
        let url = self.form_url(form).clone();

        let mut multipart = reqwest::multipart::Form::new();
        for (name, value) in fields {
            multipart = multipart.text(name.clone(), value.clone());
        }

        let mut request = self.http.post(url.clone()).multipart(multipart);
        if let Some(token) = &self.config.csrf_token {
            request = request.header(CSRF_HEADER, token);
        }

        let timeout = self.config.fetch.timeout();
        let response = tokio::time::timeout(timeout, request.send())
            .await
            .map_err(|_| FetchError::Timeout { timeout })??;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(form = ?form, "form submission accepted");
            return Ok(());
        }

        let message = response
            .json::<Value>()
            .await
            .ok()
            .as_ref()
            .and_then(error_body_message)
            .unwrap_or_else(|| form.failure_message().to_string());
        Err(FetchError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

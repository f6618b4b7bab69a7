use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::form::FormState;

/// Why a submission attempt failed. `Display` is the text shown under the
/// Book button.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Could not reach the server ({0}). Please try again.")]
    NetworkFailure(String),
    #[error("{0}")]
    ServerRejection(String),
    #[error("The contact form is not available right now ({0} is not configured).")]
    ConfigurationMissing(&'static str),
}

/// Body of `POST /api/contact`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company_name: String,
    pub budget: String,
    pub services: Vec<String>,
    pub project_description: String,
    pub selected_date: String,
    pub selected_time: String,
}

impl From<&FormState> for ContactPayload {
    fn from(form: &FormState) -> Self {
        Self {
            name: form.contact_name.clone(),
            email: form.contact_email.clone(),
            phone: form.contact_phone.clone(),
            company_name: form.company_name.clone(),
            budget: form.budget.label().to_string(),
            services: form
                .selected_services
                .iter()
                .map(|s| s.label().to_string())
                .collect(),
            project_description: form.project_description.clone(),
            selected_date: form
                .selected_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            selected_time: form
                .selected_time
                .map(|t| t.label().to_string())
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RelayReply {
    #[serde(default)]
    success: bool,
    error: Option<String>,
    message: Option<String>,
}

/// Classifies a relay response. Only a 2xx JSON reply with `success: true`
/// and no `error` field counts as accepted.
pub fn interpret_reply(status: u16, body: &str) -> Result<(), SubmitError> {
    let reply = serde_json::from_str::<RelayReply>(body).ok();

    if let Some(error) = reply.as_ref().and_then(|r| r.error.clone()) {
        return Err(SubmitError::ServerRejection(error));
    }
    if !(200..300).contains(&status) {
        return Err(SubmitError::ServerRejection(format!(
            "Failed to submit form (HTTP {}). Please try again.",
            status
        )));
    }
    match reply {
        Some(reply) if reply.success => Ok(()),
        Some(reply) => Err(SubmitError::ServerRejection(reply.message.unwrap_or_else(|| {
            "The server did not accept the form. Please try again.".to_string()
        }))),
        None => Err(SubmitError::ServerRejection(
            "Unexpected response from the server. Please try again.".to_string(),
        )),
    }
}

/// Booking page pre-filled with who is booking.
pub fn booking_link(base: &str, name: &str, email: &str) -> String {
    let separator = if base.contains('?') { '&' } else { '?' };
    format!(
        "{}{}name={}&email={}",
        base,
        separator,
        urlencoding::encode(name),
        urlencoding::encode(email)
    )
}

pub async fn send_contact_request(
    endpoint: &str,
    payload: &ContactPayload,
) -> Result<(), SubmitError> {
    let request = Request::post(endpoint)
        .json(payload)
        .map_err(|e| SubmitError::NetworkFailure(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| SubmitError::NetworkFailure(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| SubmitError::NetworkFailure(e.to_string()))?;

    interpret_reply(status, &body)
}

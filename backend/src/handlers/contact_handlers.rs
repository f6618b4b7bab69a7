use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::{error, info, warn};

use crate::error::RelayError;
use crate::handlers::contact_dtos::{ContactRequest, ContactResponse};
use crate::utils::email_templates::{confirmation_email, notification_email};
use crate::AppState;

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<ContactResponse>, RelayError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected contact submission: {}", rejection.body_text());
        RelayError::InvalidRequest(rejection.body_text())
    })?;

    let mailer = state.mailer.as_ref().ok_or_else(|| {
        error!("Contact submission received but RESEND_API_KEY is not set");
        RelayError::ConfigurationMissing("RESEND_API_KEY")
    })?;

    info!(
        services = request.services.len(),
        has_appointment = request.has_appointment(),
        "Relaying contact submission"
    );

    mailer
        .send(notification_email(&state.config, &request))
        .await
        .map_err(|e| {
            error!("Failed to send contact notification: {}", e);
            RelayError::SendFailed(e)
        })?;

    if request.email.trim().is_empty() {
        warn!("Skipping confirmation email, submission has no address");
    } else if let Err(e) = mailer.send(confirmation_email(&state.config, &request)).await {
        warn!("Failed to send confirmation email: {}", e);
    }

    info!("Contact submission relayed");
    Ok(Json(ContactResponse::submitted()))
}

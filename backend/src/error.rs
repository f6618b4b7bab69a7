use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::api::mailer::MailError;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Email service is not configured ({0} is missing)")]
    ConfigurationMissing(&'static str),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Failed to send email")]
    SendFailed(#[source] MailError),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::ConfigurationMissing(_) => StatusCode::SERVICE_UNAVAILABLE,
            RelayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            RelayError::SendFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({"error": self.to_string()}))).into_response()
    }
}

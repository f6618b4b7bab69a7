use async_trait::async_trait;
use resend_rs::types::CreateEmailBaseOptions;
use resend_rs::Resend;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

#[derive(Debug, Error)]
#[error("email provider error: {0}")]
pub struct MailError(pub String);

/// Outbound email transport used by the contact relay.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError>;
}

pub struct ResendMailer {
    client: Resend,
}

impl ResendMailer {
    pub fn new(api_key: &str) -> Self {
        Self {
            client: Resend::new(api_key),
        }
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError> {
        let options = CreateEmailBaseOptions::new(email.from, [email.to], email.subject)
            .with_html(&email.html);

        self.client
            .emails
            .send(options)
            .await
            .map(|_| ())
            .map_err(|e| MailError(e.to_string()))
    }
}

//! Email notification delivery.
//!
//! One transient authenticated STARTTLS session per send; call volume is
//! at most a few messages per hour, so no connection reuse.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message as MailMessage, Tokio1Executor};
use tracing::{debug, info};

use crate::error::MailError;

/// A rendered notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub subject: String,
    pub body: String,
}

impl Email {
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
        }
    }
}

/// Delivers notifications.
#[async_trait]
pub trait Notify: Send + Sync {
    /// Deliver one email. Errors are for the caller to log; the monitor
    /// loop never lets a failed send abort a tick.
    async fn notify(&self, email: &Email) -> Result<(), MailError>;
}

/// SMTP relay options.
#[derive(Debug, Clone)]
pub struct SmtpOptions {
    pub server: String,
    pub port: u16,
    pub from: String,
    pub password: String,
    pub to: String,
}

/// Notifier that sends mail through an authenticated SMTP relay.
pub struct SmtpNotifier {
    options: SmtpOptions,
}

impl SmtpNotifier {
    pub fn new(options: SmtpOptions) -> Self {
        Self { options }
    }
}

#[async_trait]
impl Notify for SmtpNotifier {
    async fn notify(&self, email: &Email) -> Result<(), MailError> {
        let message = MailMessage::builder()
            .from(self.options.from.parse()?)
            .to(self.options.to.parse()?)
            .subject(&email.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(email.body.clone())?;

        debug!(
            server = %self.options.server,
            port = self.options.port,
            "Opening SMTP session"
        );

        let transport: AsyncSmtpTransport<Tokio1Executor> =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.options.server)?
                .port(self.options.port)
                .credentials(Credentials::new(
                    self.options.from.clone(),
                    self.options.password.clone(),
                ))
                .build();

        transport.send(message).await?;

        info!(to = %self.options.to, subject = %email.subject, "Email sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_constructor() {
        let email = Email::new("Subject", "Body");
        assert_eq!(email.subject, "Subject");
        assert_eq!(email.body, "Body");
    }
}

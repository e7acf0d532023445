use crate::config::SmtpConfig;
use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use log::debug;
use thiserror::Error;

pub const ALERT_SUBJECT: &str = "uptimecheck alert";

#[derive(Error, Debug)]
pub enum SendError {
    #[error("Invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("Failed to build email: {0}")]
    Message(#[from] lettre::error::Error),
    #[error("Failed to send email: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Delivers a one-shot notification about a failed check.
#[async_trait]
pub trait AlertSink {
    async fn send(&self, message: &str) -> Result<(), SendError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlertMessage {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

/// Sends alerts by email over SMTP with STARTTLS.
pub struct EmailAlertSink {
    smtp: SmtpConfig,
    recipient: String,
}

impl EmailAlertSink {
    pub fn new(smtp: SmtpConfig, recipient: impl Into<String>) -> Self {
        Self {
            smtp,
            recipient: recipient.into(),
        }
    }

    pub fn compose(&self, body: &str) -> AlertMessage {
        AlertMessage {
            recipient: self.recipient.clone(),
            subject: ALERT_SUBJECT.to_string(),
            body: body.to_string(),
        }
    }

    fn to_email(&self, alert: AlertMessage) -> Result<Message, SendError> {
        let from: Mailbox = self.smtp.username.parse()?;
        let to: Mailbox = alert.recipient.parse()?;
        let email = Message::builder()
            .from(from)
            .to(to)
            .subject(alert.subject)
            .body(alert.body)?;
        Ok(email)
    }
}

#[async_trait]
impl AlertSink for EmailAlertSink {
    async fn send(&self, message: &str) -> Result<(), SendError> {
        let email = self.to_email(self.compose(message))?;
        debug!(
            "Sending alert to {} via {}:{}",
            self.recipient, self.smtp.host, self.smtp.port
        );
        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.smtp.host)?
            .port(self.smtp.port)
            .credentials(Credentials::new(
                self.smtp.username.clone(),
                self.smtp.password.clone(),
            ))
            .build();
        mailer.send(email).await?;
        Ok(())
    }
}

//! Outbound mail transport.
//!
//! `Mailer` is the seam between the confirmation notifier and the mail relay. Production
//! uses `SmtpMailer`; tests substitute an in-memory recorder.

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::server::{config::SmtpConfig, error::mail::MailError};

/// A rendered email ready for delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    /// Delivers one email.
    ///
    /// # Returns
    /// - `Ok(())` - The relay accepted the message
    /// - `Err(MailError)` - The message could not be built or the relay rejected it
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError>;
}

/// Mailer delivering through an authenticated SMTP relay over implicit TLS.
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    /// Builds the relay transport from configuration.
    ///
    /// No connection is opened until the first message is sent.
    ///
    /// # Arguments
    /// - `config` - Relay host, port, credentials and From header
    ///
    /// # Returns
    /// - `Ok(SmtpMailer)` - Transport ready for use
    /// - `Err(MailError::InvalidAddress)` - The From header does not parse
    /// - `Err(MailError::Transport)` - The relay host is not usable
    pub fn from_config(config: &SmtpConfig) -> Result<Self, MailError> {
        let from = config
            .from
            .parse::<Mailbox>()
            .map_err(|e| MailError::InvalidAddress {
                address: config.from.clone(),
                reason: e.to_string(),
            })?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
            .map_err(|e| MailError::Transport(format!("SMTP relay error: {e}")))?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self { transport, from })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError> {
        let to = email
            .to
            .trim()
            .parse::<Mailbox>()
            .map_err(|e| MailError::InvalidAddress {
                address: email.to.clone(),
                reason: e.to_string(),
            })?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(email.subject)
            .header(ContentType::TEXT_HTML)
            .body(email.html_body)
            .map_err(|e| MailError::Build(e.to_string()))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;

        Ok(())
    }
}

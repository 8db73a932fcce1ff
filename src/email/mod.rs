pub mod templates;

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::{SmtpConfig, TlsMode};
use crate::contact::model::Submission;

/// A fully rendered message, ready for a [`Mailer`].
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundEmail {
    pub from_name: Option<String>,
    pub reply_to: Option<String>,
    pub to: String,
    pub subject: String,
    pub html: String,
    pub text: String,
}

impl OutboundEmail {
    /// Notification for the site owner about one contact-form submission.
    pub fn contact(
        submission: &Submission,
        to: &str,
        received_at: DateTime<Utc>,
    ) -> Result<Self, MailError> {
        let name = submission.name.trim();
        let html = templates::render_contact_html(submission, received_at)
            .map_err(|e| MailError::Build(format!("HTML template: {e}")))?;
        let text = templates::render_contact_text(submission, received_at)
            .map_err(|e| MailError::Build(format!("text template: {e}")))?;

        Ok(Self {
            from_name: Some(name.to_string()),
            reply_to: Some(submission.email.trim().to_string()),
            to: to.to_string(),
            subject: format!("New message from {name}"),
            html,
            text,
        })
    }
}

#[derive(Debug)]
pub enum MailError {
    Address(String),
    Build(String),
    Transport(String),
    Timeout(Duration),
}

impl std::fmt::Display for MailError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MailError::Address(msg) => write!(f, "Invalid address: {msg}"),
            MailError::Build(msg) => write!(f, "Failed to build email: {msg}"),
            MailError::Transport(msg) => write!(f, "SMTP transport error: {msg}"),
            MailError::Timeout(d) => write!(f, "Mail delivery timed out after {}s", d.as_secs()),
        }
    }
}

impl std::error::Error for MailError {}

/// The outbound mail capability. One call is one delivery attempt.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: OutboundEmail) -> Result<(), MailError>;
}

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Address,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig, timeout: Duration) -> Result<Self, MailError> {
        let creds = Credentials::new(config.user.clone(), config.pass.clone());

        let builder = match config.tls {
            TlsMode::Tls => AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
                .map_err(|e| MailError::Transport(format!("SMTP relay error: {e}")))?,
            TlsMode::None => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host),
            TlsMode::StartTls => AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
                .map_err(|e| MailError::Transport(format!("SMTP starttls error: {e}")))?,
        };

        let transport = builder
            .port(config.port)
            .credentials(creds)
            .timeout(Some(timeout))
            .build();

        let from = config
            .from
            .parse()
            .map_err(|e| MailError::Address(format!("from {}: {e}", config.from)))?;

        Ok(Self { transport, from })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: OutboundEmail) -> Result<(), MailError> {
        let to: Mailbox = email
            .to
            .parse()
            .map_err(|e| MailError::Address(format!("to {}: {e}", email.to)))?;

        let mut builder = Message::builder()
            .from(Mailbox::new(email.from_name, self.from.clone()))
            .to(to)
            .subject(email.subject);

        if let Some(reply_to) = email.reply_to {
            let reply_to: Mailbox = reply_to
                .parse()
                .map_err(|e| MailError::Address(format!("reply-to {reply_to}: {e}")))?;
            builder = builder.reply_to(reply_to);
        }

        let message = builder
            .multipart(MultiPart::alternative_plain_html(email.text, email.html))
            .map_err(|e| MailError::Build(e.to_string()))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;

        Ok(())
    }
}

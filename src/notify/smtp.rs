use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};

use super::{Notifier, NotifyError};
use crate::config::NotificationConfig;

/// SMTP-backed notifier: one plain-text message per sweep, with fixed
/// sender, recipients, and subject from configuration. Uses implicit TLS on
/// the configured submission port.
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    recipients: Vec<Mailbox>,
    subject: String,
}

impl SmtpNotifier {
    /// Build the notifier from configuration. Address parsing happens here so
    /// bad settings surface before any partition is touched; no connection is
    /// made until a message is sent.
    pub fn from_config(config: &NotificationConfig) -> Result<Self, NotifyError> {
        let from: Mailbox = config.username.parse()?;
        let recipients = parse_recipients(&config.recipients)?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            from,
            recipients,
            subject: config.subject.clone(),
        })
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn notify(&self, body: &str) -> Result<(), NotifyError> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .subject(self.subject.clone());
        for recipient in &self.recipients {
            builder = builder.to(recipient.clone());
        }
        let message = builder
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())?;

        self.transport.send(message).await?;
        tracing::info!(recipients = self.recipients.len(), "Drop notification sent");
        Ok(())
    }
}

fn parse_recipients(raw: &str) -> Result<Vec<Mailbox>, NotifyError> {
    raw.split(',')
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(|r| r.parse::<Mailbox>().map_err(NotifyError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> NotificationConfig {
        toml::from_str(
            r#"
            host = "smtp.example.com"
            username = "alerts@example.com"
            password = "secret"
            recipients = "dba@example.com, oncall@example.com"
        "#,
        )
        .unwrap()
    }

    #[test]
    fn test_parse_recipients_splits_and_trims() {
        let recipients = parse_recipients("dba@example.com, oncall@example.com ,").unwrap();
        assert_eq!(recipients.len(), 2);
        assert_eq!(recipients[0].email.to_string(), "dba@example.com");
        assert_eq!(recipients[1].email.to_string(), "oncall@example.com");
    }

    #[test]
    fn test_parse_recipients_rejects_bad_address() {
        assert!(matches!(
            parse_recipients("dba@example.com, not-an-address"),
            Err(NotifyError::Address(_))
        ));
    }

    #[test]
    fn test_from_config_builds_without_connecting() {
        let notifier = SmtpNotifier::from_config(&config()).unwrap();
        assert_eq!(notifier.recipients.len(), 2);
        assert_eq!(notifier.subject, "partsweep: expired partitions dropped");
        assert_eq!(notifier.from.email.to_string(), "alerts@example.com");
    }

    #[test]
    fn test_from_config_rejects_bad_username() {
        let mut bad = config();
        bad.username = "not an address".to_string();
        assert!(matches!(
            SmtpNotifier::from_config(&bad),
            Err(NotifyError::Address(_))
        ));
    }
}

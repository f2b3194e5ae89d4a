use awaazein_email_contracts::{Email, EmailService};
use awaazein_models::email_address::EmailAddress;
use lettre::{
    message::{Mailbox, MultiPart},
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

#[derive(Debug, Clone)]
pub struct EmailServiceImpl {
    from: EmailAddress,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailServiceImpl {
    pub async fn new(url: &str, from: EmailAddress) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::from_url(url)?.build();

        Ok(Self { from, transport })
    }

    fn build_message(&self, email: Email) -> anyhow::Result<Message> {
        let mut builder = Message::builder()
            .from(Mailbox::new(None, self.from.0.clone()))
            .to(Mailbox::new(None, email.recipient.0))
            .subject(email.subject);

        if let Some(reply_to) = email.reply_to {
            builder = builder.reply_to(reply_to.0);
        }

        builder
            .multipart(MultiPart::alternative_plain_html(
                email.text_body,
                email.html_body,
            ))
            .map_err(Into::into)
    }
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> anyhow::Result<bool> {
        let message = self.build_message(email)?;

        self.transport
            .send(message)
            .await
            .map(|response| response.is_positive())
            .map_err(Into::into)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.transport
            .test_connection()
            .await?
            .then_some(())
            .ok_or_else(|| anyhow::anyhow!("Failed to ping smtp server"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn service() -> EmailServiceImpl {
        EmailServiceImpl::new("smtp://localhost:25", "noreply@awaazein.org".parse().unwrap())
            .await
            .unwrap()
    }

    fn email() -> Email {
        Email {
            recipient: "exec@awaazein.org".parse().unwrap(),
            subject: "Contact Form: Hello".into(),
            html_body: "<h1>Hello World!</h1>".into(),
            text_body: "Hello World!".into(),
            reply_to: Some("jane@example.com".parse().unwrap()),
        }
    }

    #[tokio::test]
    async fn message_headers() {
        let message = service().await.build_message(email()).unwrap();

        let formatted = String::from_utf8(message.formatted()).unwrap();
        assert!(formatted.contains("From: noreply@awaazein.org"));
        assert!(formatted.contains("To: exec@awaazein.org"));
        assert!(formatted.contains("Reply-To: jane@example.com"));
        assert!(formatted.contains("Subject: Contact Form: Hello"));
    }

    #[tokio::test]
    async fn message_bodies() {
        let message = service().await.build_message(email()).unwrap();

        let formatted = String::from_utf8(message.formatted()).unwrap();
        assert!(formatted.contains("multipart/alternative"));
        assert!(formatted.contains("<h1>Hello World!</h1>"));
        assert!(formatted.contains("Hello World!"));
    }

    #[tokio::test]
    async fn message_without_reply_to() {
        let message = service()
            .await
            .build_message(Email {
                reply_to: None,
                ..email()
            })
            .unwrap();

        let formatted = String::from_utf8(message.formatted()).unwrap();
        assert!(!formatted.contains("Reply-To:"));
    }
}

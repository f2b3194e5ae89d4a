use std::sync::Arc;

use awaazein_core_contact_contracts::{ContactSendMessageError, ContactService};
use awaazein_email_contracts::{Email, EmailService};
use awaazein_models::{
    contact::{ContactMessage, ContactMessageAuthor, ContactMessageContent},
    email_address::EmailAddress,
};
use awaazein_utils::html;

/// Subject used when the submitter left the subject field empty.
const DEFAULT_SUBJECT: &str = "New message";

#[derive(Debug, Clone)]
pub struct ContactServiceImpl<Email> {
    email: Option<Email>,
    config: ContactServiceConfig,
}

#[derive(Debug, Clone)]
pub struct ContactServiceConfig {
    pub recipient: Arc<EmailAddress>,
}

impl<Email> ContactServiceImpl<Email> {
    pub fn new(email: Option<Email>, config: ContactServiceConfig) -> Self {
        Self { email, config }
    }
}

impl<EmailS> ContactService for ContactServiceImpl<EmailS>
where
    EmailS: EmailService,
{
    async fn send_message(&self, message: ContactMessage) -> Result<(), ContactSendMessageError> {
        let Some(email_service) = &self.email else {
            return Err(ContactSendMessageError::NotConfigured);
        };

        let subject = message
            .subject
            .as_ref()
            .map(|subject| subject.as_str())
            .unwrap_or(DEFAULT_SUBJECT);

        let email = Email {
            recipient: (*self.config.recipient).clone(),
            subject: format!("Contact Form: {subject}"),
            html_body: html_body(&message.author, subject, &message.content),
            text_body: text_body(&message.author, subject, &message.content),
            reply_to: Some(
                message
                    .author
                    .email
                    .clone()
                    .with_name((*message.author.name).clone()),
            ),
        };

        if !email_service.send(email).await? {
            return Err(ContactSendMessageError::Send);
        }

        Ok(())
    }
}

fn html_body(author: &ContactMessageAuthor, subject: &str, content: &ContactMessageContent) -> String {
    format!(
        "<div style=\"font-family: system-ui, sans-serif; line-height: 1.6;\">\
         <h2>New Awaazein Contact Form Message</h2>\
         <p><strong>From:</strong> {name} &lt;{email}&gt;</p>\
         <p><strong>Subject:</strong> {subject}</p>\
         <hr />\
         <pre style=\"white-space: pre-wrap; font: inherit;\">{content}</pre>\
         </div>",
        name = html::escape(&author.name),
        email = html::escape(author.email.as_str()),
        subject = html::escape(subject),
        content = html::escape(content),
    )
}

fn text_body(author: &ContactMessageAuthor, subject: &str, content: &ContactMessageContent) -> String {
    format!(
        "Message from {} ({}):\n\nSubject: {}\n\n{}",
        *author.name, author.email, subject, **content
    )
}

use awaazein_models::{
    contact::{
        ContactMessage, ContactMessageAuthor, ContactMessageAuthorName, ContactMessageContent,
        ContactMessageSubject,
    },
    email_address::EmailAddress,
};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ApiContactMessage {
    /// Full name of the submitter
    pub name: ContactMessageAuthorName,
    /// Email address of the submitter
    pub email: EmailAddress,
    /// Subject of the message
    #[serde(default)]
    pub subject: Option<ContactMessageSubject>,
    /// Content of the message
    pub message: ContactMessageContent,
    /// Honeypot field, hidden on the website and left empty by humans
    #[serde(default)]
    pub token: String,
}

impl From<ApiContactMessage> for ContactMessage {
    fn from(value: ApiContactMessage) -> Self {
        Self {
            author: ContactMessageAuthor {
                name: value.name,
                email: value.email,
            },
            subject: value.subject,
            content: value.message,
        }
    }
}

use nutype::nutype;

use crate::email_address::EmailAddress;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub author: ContactMessageAuthor,
    /// Falls back to a fixed default subject when omitted by the submitter.
    pub subject: Option<ContactMessageSubject>,
    pub content: ContactMessageContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessageAuthor {
    pub name: ContactMessageAuthorName,
    pub email: EmailAddress,
}

#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 120),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageAuthorName(String);

#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 200),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageSubject(String);

#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 5000),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageContent(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_whitespace() {
        let name = ContactMessageAuthorName::try_new("  Jane Doe \n").unwrap();
        assert_eq!(*name, "Jane Doe");
    }

    #[test]
    fn rejects_empty_after_trim() {
        ContactMessageAuthorName::try_new("").unwrap_err();
        ContactMessageAuthorName::try_new(" \t ").unwrap_err();
        ContactMessageSubject::try_new("   ").unwrap_err();
        ContactMessageContent::try_new("\n").unwrap_err();
    }

    #[test]
    fn enforces_length_caps() {
        ContactMessageAuthorName::try_new("x".repeat(120)).unwrap();
        ContactMessageAuthorName::try_new("x".repeat(121)).unwrap_err();
        ContactMessageSubject::try_new("x".repeat(200)).unwrap();
        ContactMessageSubject::try_new("x".repeat(201)).unwrap_err();
        ContactMessageContent::try_new("x".repeat(5000)).unwrap();
        ContactMessageContent::try_new("x".repeat(5001)).unwrap_err();
    }

    #[test]
    fn deserialize_applies_validation() {
        serde_json::from_value::<ContactMessageContent>(serde_json::json!("Hi there")).unwrap();
        serde_json::from_value::<ContactMessageContent>(serde_json::json!("   ")).unwrap_err();
    }
}

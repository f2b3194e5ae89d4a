use std::{str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shape check applied on top of the mailbox address syntax: exactly one `@`
/// separating non-whitespace halves, with at least one dot in the domain.
static EMAIL_SHAPE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// A bare email address (`user@domain.tld`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(pub lettre::Address);

/// An email address with an optional display name (`Name <user@domain.tld>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddressWithName(pub lettre::message::Mailbox);

#[derive(Debug, Error)]
pub enum EmailAddressError {
    #[error("Invalid email address")]
    Shape,
    #[error(transparent)]
    Address(#[from] lettre::address::AddressError),
}

impl EmailAddress {
    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }

    pub fn with_name(self, name: String) -> EmailAddressWithName {
        EmailAddressWithName(lettre::message::Mailbox {
            name: Some(name),
            email: self.0,
        })
    }
}

impl EmailAddressWithName {
    pub fn into_email_address(self) -> EmailAddress {
        EmailAddress(self.0.email)
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.as_str().fmt(f)
    }
}

impl std::fmt::Display for EmailAddressWithName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for EmailAddress {
    type Err = EmailAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !EMAIL_SHAPE_REGEX.is_match(s) {
            return Err(EmailAddressError::Shape);
        }
        s.parse().map(Self).map_err(Into::into)
    }
}

impl FromStr for EmailAddressWithName {
    type Err = <lettre::message::Mailbox as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = <Self as FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plausible_addresses() {
        for input in [
            "jane@example.com",
            "jane.doe+contact@mail.example.co.uk",
            "x@y.z",
        ] {
            let address = input.parse::<EmailAddress>().unwrap();
            assert_eq!(address.as_str(), input);
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for input in [
            "",
            "jane",
            "jane@example",
            "@example.com",
            "jane@",
            "jane doe@example.com",
            "jane@exa mple.com",
            "jane@@example.com",
        ] {
            input.parse::<EmailAddress>().unwrap_err();
        }
    }

    #[test]
    fn deserialize_validates_shape() {
        serde_json::from_value::<EmailAddress>(serde_json::json!("jane@example.com")).unwrap();
        serde_json::from_value::<EmailAddress>(serde_json::json!("jane@example")).unwrap_err();
    }

    #[test]
    fn with_name() {
        let address = "jane@example.com".parse::<EmailAddress>().unwrap();
        let mailbox = address.with_name("Jane Doe".into());
        assert_eq!(mailbox.0.name.as_deref(), Some("Jane Doe"));
        assert_eq!(mailbox.into_email_address().as_str(), "jane@example.com");
    }
}

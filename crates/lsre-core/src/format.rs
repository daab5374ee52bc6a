//! Registry of the supported formats.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    errors::RuleError,
    guard::{enforce_str, Argument},
    rules,
};

/// How much of the input a pattern has to cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchoring {
    /// The whole string must match.
    Full,
    /// Only the beginning of the string must match.
    Prefix,
}

/// A named validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    Alphanumeric,
    Email,
    Url,
    Ipv4,
    Ipv6,
    PhoneNumber,
    CreditCard,
    IsoDate,
    Time,
    HexColor,
    Uuid,
    Slug,
    StrongPassword,
}

impl Format {
    pub const ALL: [Format; 13] = [
        Format::Alphanumeric,
        Format::Email,
        Format::Url,
        Format::Ipv4,
        Format::Ipv6,
        Format::PhoneNumber,
        Format::CreditCard,
        Format::IsoDate,
        Format::Time,
        Format::HexColor,
        Format::Uuid,
        Format::Slug,
        Format::StrongPassword,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Format::Alphanumeric => "alphanumeric",
            Format::Email => "email",
            Format::Url => "url",
            Format::Ipv4 => "ipv4",
            Format::Ipv6 => "ipv6",
            Format::PhoneNumber => "phone_number",
            Format::CreditCard => "credit_card",
            Format::IsoDate => "iso_date",
            Format::Time => "time",
            Format::HexColor => "hex_color",
            Format::Uuid => "uuid",
            Format::Slug => "slug",
            Format::StrongPassword => "strong_password",
        }
    }

    /// One-line description, used by `lsre list`.
    pub fn description(self) -> &'static str {
        match self {
            Format::Alphanumeric => "ASCII letters and digits",
            Format::Email => "local-part@domain.tld",
            Format::Url => "http, https or ftp URL",
            Format::Ipv4 => "dotted-decimal IPv4 address",
            Format::Ipv6 => "colon-hex IPv6 address, one :: allowed",
            Format::PhoneNumber => "7 to 15 digits with optional + and separators",
            Format::CreditCard => "15 or 16 digits, space grouped",
            Format::IsoDate => "YYYY-MM-DD",
            Format::Time => "24-hour HH:MM or HH:MM:SS",
            Format::HexColor => "#RGB or #RRGGBB",
            Format::Uuid => "lowercase 8-4-4-4-12 hex",
            Format::Slug => "lowercase words joined by single hyphens",
            Format::StrongPassword => "8+ chars with lower, upper, digit and one of !@#$%&",
        }
    }

    pub fn anchoring(self) -> Anchoring {
        match self {
            Format::Url => Anchoring::Prefix,
            _ => Anchoring::Full,
        }
    }

    pub fn is_case_sensitive(self) -> bool {
        !matches!(self, Format::HexColor)
    }

    /// Whether checked values must be kept out of logs.
    pub fn is_sensitive(self) -> bool {
        matches!(self, Format::StrongPassword | Format::CreditCard)
    }

    /// The unguarded predicate for this format.
    pub fn predicate(self) -> fn(&str) -> bool {
        match self {
            Format::Alphanumeric => rules::alphanumeric,
            Format::Email => rules::email,
            Format::Url => rules::url,
            Format::Ipv4 => rules::ipv4,
            Format::Ipv6 => rules::ipv6,
            Format::PhoneNumber => rules::phone_number,
            Format::CreditCard => rules::credit_card,
            Format::IsoDate => rules::iso_date,
            Format::Time => rules::time,
            Format::HexColor => rules::hex_color,
            Format::Uuid => rules::uuid,
            Format::Slug => rules::slug,
            Format::StrongPassword => rules::strong_password,
        }
    }

    /// Checks a string against this format.
    pub fn matches(self, text: &str) -> bool {
        let matched = (self.predicate())(text);
        if self.is_sensitive() {
            debug!(format = self.name(), text = "<redacted>", matched, "checked format");
        } else {
            debug!(format = self.name(), text, matched, "checked format");
        }
        matched
    }

    /// Checks any argument against this format, rejecting non-strings.
    pub fn validate<A: Argument + ?Sized>(self, text: &A) -> Result<bool, RuleError> {
        enforce_str::<A, _>(|text: &str| self.matches(text))(text)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = RuleError;

    /// Accepts both `email` and `is_email` spellings, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        let name = normalized.strip_prefix("is_").unwrap_or(&normalized);
        Format::ALL
            .into_iter()
            .find(|f| f.name() == name)
            .ok_or_else(|| RuleError::UnknownFormat(s.to_string()))
    }
}

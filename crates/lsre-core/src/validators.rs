//! Guarded entry points, one per format.
//!
//! Each function accepts any [`Argument`] and fails with
//! [`RuleError::InvalidArgumentType`] when it is not a string.

use crate::{errors::RuleError, format::Format, guard::Argument};

/// Checks that `text` holds only ASCII letters and digits.
///
/// ```
/// use lsre_core::is_alphanumeric;
///
/// assert_eq!(is_alphanumeric("abc123"), Ok(true));
/// assert_eq!(is_alphanumeric("123@"), Ok(false));
/// ```
pub fn is_alphanumeric<A: Argument + ?Sized>(text: &A) -> Result<bool, RuleError> {
    Format::Alphanumeric.validate(text)
}

/// Checks that `text` is an email address.
///
/// ```
/// use lsre_core::is_email;
///
/// assert_eq!(is_email("user.name+tag@sub.domain.co"), Ok(true));
/// assert_eq!(is_email("user..name@example.com"), Ok(false));
/// ```
pub fn is_email<A: Argument + ?Sized>(text: &A) -> Result<bool, RuleError> {
    Format::Email.validate(text)
}

/// Checks that `text` starts with an `http`, `https` or `ftp` URL.
///
/// This is a prefix match: `"http://example.com and more"` is accepted.
pub fn is_url<A: Argument + ?Sized>(text: &A) -> Result<bool, RuleError> {
    Format::Url.validate(text)
}

/// Checks that `text` is a dotted-decimal IPv4 address.
pub fn is_ipv4<A: Argument + ?Sized>(text: &A) -> Result<bool, RuleError> {
    Format::Ipv4.validate(text)
}

/// Checks that `text` is an IPv6 address.
///
/// ```
/// use lsre_core::is_ipv6;
///
/// assert_eq!(is_ipv6("fe80::1"), Ok(true));
/// assert_eq!(is_ipv6("2001::85a3::8a2e"), Ok(false));
/// ```
pub fn is_ipv6<A: Argument + ?Sized>(text: &A) -> Result<bool, RuleError> {
    Format::Ipv6.validate(text)
}

/// Checks that `text` is a phone number with 7 to 15 digits.
pub fn is_phone_number<A: Argument + ?Sized>(text: &A) -> Result<bool, RuleError> {
    Format::PhoneNumber.validate(text)
}

/// Checks that `text` is a 15 or 16 digit card number. No Luhn check.
pub fn is_credit_card<A: Argument + ?Sized>(text: &A) -> Result<bool, RuleError> {
    Format::CreditCard.validate(text)
}

/// Checks that `text` is a `YYYY-MM-DD` date.
pub fn is_iso_date<A: Argument + ?Sized>(text: &A) -> Result<bool, RuleError> {
    Format::IsoDate.validate(text)
}

pub fn is_time<A: Argument + ?Sized>(text: &A) -> Result<bool, RuleError> {
    Format::Time.validate(text)
}

/// Checks that `text` is a `#RGB` or `#RRGGBB` color, in any case.
pub fn is_hex_color<A: Argument + ?Sized>(text: &A) -> Result<bool, RuleError> {
    Format::HexColor.validate(text)
}

/// Checks that `text` is a lowercase hyphenated UUID.
///
/// ```
/// use lsre_core::is_uuid;
///
/// assert_eq!(is_uuid("123e4567-e89b-12d3-a456-426614174000"), Ok(true));
/// assert_eq!(is_uuid("123E4567-E89B-12D3-A456-426614174000"), Ok(false));
/// ```
pub fn is_uuid<A: Argument + ?Sized>(text: &A) -> Result<bool, RuleError> {
    Format::Uuid.validate(text)
}

pub fn is_slug<A: Argument + ?Sized>(text: &A) -> Result<bool, RuleError> {
    Format::Slug.validate(text)
}

/// Checks that `text` satisfies the strong password policy.
pub fn is_strong_password<A: Argument + ?Sized>(text: &A) -> Result<bool, RuleError> {
    Format::StrongPassword.validate(text)
}

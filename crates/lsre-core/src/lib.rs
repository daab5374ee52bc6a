//! Lexical format validators.
//!
//! Every validator answers whether a value is a string in one specific format.
//! Non-string values are rejected by the input guard with
//! [`RuleError::InvalidArgumentType`]; strings that do not match simply yield
//! `Ok(false)`.
//!
//! ```
//! use lsre_core::{is_email, is_ipv4, RuleError};
//!
//! assert_eq!(is_email("user@example.com"), Ok(true));
//! assert_eq!(is_ipv4("256.0.0.1"), Ok(false));
//! assert!(matches!(is_ipv4(&42), Err(RuleError::InvalidArgumentType { .. })));
//! ```

pub mod errors;
pub mod format;
pub mod guard;
pub mod results;
pub mod rules;
pub mod validator;
mod validators;

pub use errors::RuleError;
pub use format::{Anchoring, Format};
pub use guard::{enforce_str, require_str, Argument};
pub use results::RuleResult;
pub use validator::Validator;
pub use validators::{
    is_alphanumeric, is_credit_card, is_email, is_hex_color, is_ipv4, is_ipv6, is_iso_date,
    is_phone_number, is_slug, is_strong_password, is_time, is_url, is_uuid,
};

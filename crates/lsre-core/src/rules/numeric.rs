use once_cell::sync::Lazy;
use regex::Regex;

static PHONE_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[\d\-()\s]+$").expect("phone pattern is valid"));

static CREDIT_CARD_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9\s]+$").expect("credit card pattern is valid"));

static DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").expect("digit pattern is valid"));

pub const PHONE_MIN_DIGITS: usize = 7;
pub const PHONE_MAX_DIGITS: usize = 15;

/// Digits, whitespace, hyphens and parentheses after an optional leading `+`,
/// with 7 to 15 digits overall.
///
/// Separator placement is not checked.
pub fn phone_number(text: &str) -> bool {
    if !PHONE_CHARS.is_match(text) {
        return false;
    }
    let digits = DIGIT.find_iter(text).count();
    (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits)
}

/// 15 or 16 digits, optionally grouped with whitespace, ending in a digit.
///
/// No Luhn checksum, no hyphenated groups.
pub fn credit_card(text: &str) -> bool {
    if !CREDIT_CARD_CHARS.is_match(text) {
        return false;
    }
    let digits = text.chars().filter(char::is_ascii_digit).count();
    (digits == 15 || digits == 16) && text.ends_with(|c: char| c.is_ascii_digit())
}

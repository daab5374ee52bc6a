use once_cell::sync::Lazy;
use regex::Regex;

static ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9]+$").expect("alphanumeric pattern is valid"));

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^#(?:[0-9a-f]{3}|[0-9a-f]{6})$").expect("hex color pattern is valid")
});

static UUID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
        .expect("uuid pattern is valid")
});

static SLUG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug pattern is valid"));

// `.` excludes line breaks, so a password spanning lines never matches.
static PASSWORD_LENGTH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^.{8,}$").expect("password length pattern is valid"));

/// Characters accepted as the "special" class of a strong password.
pub const PASSWORD_SPECIAL_CHARS: [char; 6] = ['!', '@', '#', '$', '%', '&'];

/// ASCII letters and digits only, at least one character.
pub fn alphanumeric(text: &str) -> bool {
    ALPHANUMERIC.is_match(text)
}

/// `#` followed by exactly 3 or 6 hex digits, any case.
pub fn hex_color(text: &str) -> bool {
    HEX_COLOR.is_match(text)
}

/// Hyphenated `8-4-4-4-12` layout, lowercase hex digits only.
pub fn uuid(text: &str) -> bool {
    UUID.is_match(text)
}

/// Lowercase alphanumeric runs joined by single hyphens.
pub fn slug(text: &str) -> bool {
    SLUG.is_match(text)
}

/// At least 8 characters with a lowercase letter, an uppercase letter, a digit
/// and one of [`PASSWORD_SPECIAL_CHARS`].
pub fn strong_password(text: &str) -> bool {
    PASSWORD_LENGTH.is_match(text)
        && text.chars().any(|c| c.is_ascii_lowercase())
        && text.chars().any(|c| c.is_ascii_uppercase())
        && text.chars().any(|c| c.is_ascii_digit())
        && text.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(&c))
}

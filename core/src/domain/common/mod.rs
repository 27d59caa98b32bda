use chrono::{DateTime, Utc};

pub mod entities;

/// Formats a timestamp at second precision with a literal `Z` designator,
/// e.g. `2024-06-11T14:23:45Z`.
///
/// This exact shape is a boundary contract: it is embedded in the
/// chronological sort key of persisted like records and read back by API
/// consumers, so it must not drift to full RFC 3339 output.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_format_timestamp_second_precision_with_z() {
        let at = Utc.with_ymd_and_hms(2024, 6, 11, 14, 23, 45).unwrap();
        assert_eq!(format_timestamp(at), "2024-06-11T14:23:45Z");
    }

    #[test]
    fn test_format_timestamp_drops_subsecond_precision() {
        let at = Utc
            .with_ymd_and_hms(2025, 8, 8, 12, 0, 0)
            .unwrap()
            .checked_add_signed(chrono::Duration::milliseconds(999))
            .unwrap();
        assert_eq!(format_timestamp(at), "2025-08-08T12:00:00Z");
    }
}

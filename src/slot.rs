// 🕐 Boundary Formats - Slot timestamps and national IDs
//
// Everything that crosses a text boundary (TUI field, CLI argument, CSV cell,
// JSON body) goes through here before the registry sees it. The registry only
// ever receives parsed `NaiveDateTime` values and already-checked IDs.

use chrono::NaiveDateTime;
use thiserror::Error;

/// Canonical text form of a slot: date + time, minute precision
pub const SLOT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// National IDs are fixed-length digit strings
pub const NATIONAL_ID_LEN: usize = 11;

// ============================================================================
// FORMAT ERRORS
// ============================================================================

/// Boundary-layer failures. These never reach `RegistryError`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Timestamp must be formatted as YYYY-MM-DD HH:MM (got {0:?})")]
    Timestamp(String),

    #[error("National ID must be exactly 11 digits (got {0:?})")]
    NationalId(String),
}

// ============================================================================
// SLOT TIMESTAMPS
// ============================================================================

/// Parse `YYYY-MM-DD HH:MM` into a slot timestamp
///
/// Surrounding whitespace is ignored; anything else (seconds, `T` separator,
/// missing leading zeros on the date) is rejected.
pub fn parse_slot(text: &str) -> Result<NaiveDateTime, FormatError> {
    let trimmed = text.trim();

    // chrono's pattern is looser than the field (signs, single digits,
    // any whitespace run), so pin the exact shape first
    if !has_slot_shape(trimmed) {
        return Err(FormatError::Timestamp(text.to_string()));
    }

    NaiveDateTime::parse_from_str(trimmed, SLOT_FORMAT)
        .map_err(|_| FormatError::Timestamp(text.to_string()))
}

/// `DDDD-DD-DD DD:DD` with ASCII digits and exactly one space
fn has_slot_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 16
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            10 => *b == b' ',
            13 => *b == b':',
            _ => b.is_ascii_digit(),
        })
}

/// Render a slot timestamp in the canonical text form
pub fn format_slot(at: &NaiveDateTime) -> String {
    at.format(SLOT_FORMAT).to_string()
}

/// Serde adapter so JSON bodies carry slots in the canonical text form
pub mod serde_slot {
    use super::{format_slot, parse_slot};
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(at: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_slot(at))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        parse_slot(&text).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// NATIONAL ID
// ============================================================================

/// Check the shape of a national ID (11 ASCII digits)
///
/// Returns the trimmed ID on success.
pub fn validate_national_id(text: &str) -> Result<String, FormatError> {
    let trimmed = text.trim();

    if trimmed.len() == NATIONAL_ID_LEN && trimmed.chars().all(|c| c.is_ascii_digit()) {
        Ok(trimmed.to_string())
    } else {
        Err(FormatError::NationalId(text.to_string()))
    }
}

/// Keystroke filter for a partially typed national ID
///
/// Empty is accepted so the field can be cleared.
pub fn is_partial_national_id(text: &str) -> bool {
    text.len() <= NATIONAL_ID_LEN && text.chars().all(|c| c.is_ascii_digit())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_slot() {
        assert_eq!(parse_slot("2025-05-01 10:00").unwrap(), at(2025, 5, 1, 10, 0));
        assert_eq!(parse_slot("  2025-05-03 14:30 ").unwrap(), at(2025, 5, 3, 14, 30));
    }

    #[test]
    fn test_parse_slot_rejects_other_shapes() {
        for bad in [
            "",
            "2025-05-01",
            "2025-05-01T10:00",
            "2025-05-01 10:00:00",
            "2025-5-1 10:00",
            "01.05.2025 10:00",
            "2025-13-01 10:00",
            "2025-05-01 25:00",
            "2025-05-01  9:00",
            "+2025-05-01 10:0",
            "2025-05-01\t10:00",
            "2025-05-01 1:000",
            "2025/05/01 10:00",
            "2025-05-01 10.00",
        ] {
            let err = parse_slot(bad).unwrap_err();
            assert_eq!(err, FormatError::Timestamp(bad.to_string()), "input {:?}", bad);
        }
    }

    #[test]
    fn test_format_slot() {
        assert_eq!(format_slot(&at(2025, 5, 7, 9, 0)), "2025-05-07 09:00");

        let text = "2025-05-06 14:00";
        assert_eq!(format_slot(&parse_slot(text).unwrap()), text);
    }

    #[test]
    fn test_validate_national_id() {
        assert_eq!(validate_national_id("12345678901").unwrap(), "12345678901");
        assert_eq!(validate_national_id(" 12345678901 ").unwrap(), "12345678901");

        assert!(validate_national_id("1234567890").is_err()); // 10 digits
        assert!(validate_national_id("123456789012").is_err()); // 12 digits
        assert!(validate_national_id("1234567890a").is_err());
        assert!(validate_national_id("").is_err());
    }

    #[test]
    fn test_partial_national_id_filter() {
        assert!(is_partial_national_id(""));
        assert!(is_partial_national_id("123"));
        assert!(is_partial_national_id("12345678901"));
        assert!(!is_partial_national_id("123456789012"));
        assert!(!is_partial_national_id("12a"));
    }

    #[test]
    fn test_format_error_messages() {
        let err = FormatError::Timestamp("tomorrow".to_string());
        assert!(err.to_string().contains("YYYY-MM-DD HH:MM"));

        let err = FormatError::NationalId("42".to_string());
        assert!(err.to_string().contains("11 digits"));
    }
}

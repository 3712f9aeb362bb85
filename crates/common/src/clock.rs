//! Game-clock utilities.
//!
//! Event feeds report time as the clock reading (time *remaining*) inside a
//! numbered period. This module provides the primitives for:
//! - Parsing `MM:SS` clock readings
//! - Labelling periods (regulation vs overtime)
//! - Formatting an absolute game second back into a readout

use crate::error::ClockParseError;

/// Length of one period in seconds (20 minutes).
pub const PERIOD_LENGTH_SECS: u32 = 1200;

/// Number of regulation periods. Anything beyond is overtime.
pub const REGULATION_PERIODS: u32 = 3;

/// Parse a `MM:SS` clock reading into seconds remaining in the period.
///
/// Surrounding whitespace is ignored. Both fields must be unsigned decimal
/// digits and the seconds field must be below 60.
pub fn parse_clock(clock: &str) -> Result<u32, ClockParseError> {
    let trimmed = clock.trim();
    let mut fields = trimmed.split(':');

    let (Some(min_str), Some(sec_str), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(ClockParseError::Malformed {
            clock: clock.to_string(),
        });
    };

    let minutes = parse_field(min_str).ok_or_else(|| ClockParseError::NonNumeric {
        clock: clock.to_string(),
    })?;
    let seconds = parse_field(sec_str).ok_or_else(|| ClockParseError::NonNumeric {
        clock: clock.to_string(),
    })?;

    if seconds >= 60 {
        return Err(ClockParseError::SecondsOutOfRange {
            clock: clock.to_string(),
        });
    }

    minutes
        .checked_mul(60)
        .and_then(|m| m.checked_add(seconds))
        .ok_or_else(|| ClockParseError::NonNumeric {
            clock: clock.to_string(),
        })
}

fn parse_field(field: &str) -> Option<u32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

/// Display label for a period: `P1`..`P3`, then `OT` for every overtime.
pub fn period_label(period: u32) -> String {
    if period <= REGULATION_PERIODS {
        format!("P{period}")
    } else {
        "OT".to_string()
    }
}

/// Format an absolute game second as `"{label} MM:SS"` of elapsed period time.
pub fn format_game_time(absolute_secs: u32) -> String {
    let period = absolute_secs / PERIOD_LENGTH_SECS + 1;
    let in_period = absolute_secs % PERIOD_LENGTH_SECS;
    format!(
        "{} {:02}:{:02}",
        period_label(period),
        in_period / 60,
        in_period % 60
    )
}

/// Format seconds as a bare `MM:SS` clock reading.
pub fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_clock() {
        assert_eq!(parse_clock("20:00"), Ok(1200));
        assert_eq!(parse_clock("19:43"), Ok(1183));
        assert_eq!(parse_clock("00:01"), Ok(1));
        assert_eq!(parse_clock(" 5:07 "), Ok(307));
    }

    #[test]
    fn test_parse_clock_rejects_garbage() {
        assert!(matches!(
            parse_clock("1200"),
            Err(ClockParseError::Malformed { .. })
        ));
        assert!(matches!(
            parse_clock("1:2:3"),
            Err(ClockParseError::Malformed { .. })
        ));
        assert!(matches!(
            parse_clock("ab:cd"),
            Err(ClockParseError::NonNumeric { .. })
        ));
        assert!(matches!(
            parse_clock("+5:00"),
            Err(ClockParseError::NonNumeric { .. })
        ));
        assert!(matches!(
            parse_clock(":30"),
            Err(ClockParseError::NonNumeric { .. })
        ));
        assert!(matches!(
            parse_clock("10:75"),
            Err(ClockParseError::SecondsOutOfRange { .. })
        ));
    }

    #[test]
    fn test_period_label() {
        assert_eq!(period_label(1), "P1");
        assert_eq!(period_label(3), "P3");
        assert_eq!(period_label(4), "OT");
        assert_eq!(period_label(7), "OT");
    }

    #[test]
    fn test_format_game_time() {
        assert_eq!(format_game_time(0), "P1 00:00");
        assert_eq!(format_game_time(61), "P1 01:01");
        assert_eq!(format_game_time(1200), "P2 00:00");
        assert_eq!(format_game_time(3 * 1200 + 125), "OT 02:05");
        assert_eq!(format_clock(1183), "19:43");
    }

    proptest! {
        #[test]
        fn prop_parse_clock_reads_minutes_and_seconds(minutes in 0u32..100, seconds in 0u32..60) {
            let clock = format!("{minutes}:{seconds:02}");
            prop_assert_eq!(parse_clock(&clock), Ok(minutes * 60 + seconds));
        }
    }
}

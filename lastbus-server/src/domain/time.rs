//! Departure time handling.
//!
//! Datasets store departure times as decimal clock readings (`7.30` is
//! 7:30) alongside an AM/PM marker. Filter bounds arrive from the client as
//! "HH:MM" strings and are converted to fractional hours.

use chrono::{NaiveTime, Timelike};

use super::TimePart;

/// PM readings above this are treated as 24-hour values and shifted back.
const PM_NORMALIZE_THRESHOLD: f64 = 12.999;

/// Error returned when a filter time bound cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time bound {input:?}: expected HH:MM")]
pub struct ValidationError {
    input: String,
}

impl ValidationError {
    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Format a stored departure time for display as "HH:MM".
///
/// PM readings stored on a 24-hour clock (13.xx and up) are brought back
/// onto the 12-hour dial. AM readings are never shifted.
///
/// # Examples
///
/// ```
/// use lastbus_server::domain::{TimePart, format_time};
///
/// assert_eq!(format_time(7.3, TimePart::Am), "07:30");
/// assert_eq!(format_time(13.15, TimePart::Pm), "01:15");
/// assert_eq!(format_time(12.0, TimePart::Pm), "12:00");
/// ```
pub fn format_time(time: f64, time_part: TimePart) -> String {
    let mut value = round_to_hundredths(time);
    if time_part == TimePart::Pm && value > PM_NORMALIZE_THRESHOLD {
        value = round_to_hundredths(value - 12.0);
    }

    let text = format!("{value:.2}");
    let padded = if value < 10.0 {
        format!("0{text}")
    } else {
        text
    };

    padded.replace('.', ":")
}

/// Parse an "HH:MM" filter bound into fractional hours (`hours + minutes / 60`).
///
/// The result is on a 24-hour scale, so "13:30" becomes 13.5. "24:00" is
/// accepted as the end of the day and parses to 24.
///
/// # Examples
///
/// ```
/// use lastbus_server::domain::parse_time_bound;
///
/// assert_eq!(parse_time_bound("09:00").unwrap(), 9.0);
/// assert_eq!(parse_time_bound("10:30").unwrap(), 10.5);
/// assert!(parse_time_bound("9 o'clock").is_err());
/// ```
pub fn parse_time_bound(s: &str) -> Result<f64, ValidationError> {
    if s.trim() == END_OF_DAY {
        return Ok(24.0);
    }

    let time = NaiveTime::parse_from_str(s.trim(), "%H:%M").map_err(|_| ValidationError {
        input: s.to_string(),
    })?;

    Ok(f64::from(time.hour()) + f64::from(time.minute()) / 60.0)
}

const END_OF_DAY: &str = "24:00";

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_pads_single_digit_hours() {
        assert_eq!(format_time(7.3, TimePart::Am), "07:30");
        assert_eq!(format_time(9.05, TimePart::Am), "09:05");
        assert_eq!(format_time(1.0, TimePart::Pm), "01:00");
    }

    #[test]
    fn format_keeps_two_digit_hours() {
        assert_eq!(format_time(10.45, TimePart::Am), "10:45");
        assert_eq!(format_time(11.59, TimePart::Pm), "11:59");
        assert_eq!(format_time(12.0, TimePart::Pm), "12:00");
        assert_eq!(format_time(12.3, TimePart::Am), "12:30");
    }

    #[test]
    fn format_normalizes_24_hour_pm_readings() {
        assert_eq!(format_time(13.15, TimePart::Pm), "01:15");
        assert_eq!(format_time(18.0, TimePart::Pm), "06:00");
        assert_eq!(format_time(22.45, TimePart::Pm), "10:45");
        assert_eq!(format_time(23.59, TimePart::Pm), "11:59");
    }

    #[test]
    fn format_does_not_shift_am_readings() {
        assert_eq!(format_time(13.15, TimePart::Am), "13:15");
    }

    #[test]
    fn format_rounds_to_minutes() {
        assert_eq!(format_time(7.304, TimePart::Am), "07:30");
        assert_eq!(format_time(7.306, TimePart::Am), "07:31");
    }

    #[test]
    fn format_threshold_uses_rounded_value() {
        // 12.996 rounds to 13.00 before the PM check
        assert_eq!(format_time(12.996, TimePart::Pm), "01:00");
    }

    #[test]
    fn parse_valid_bounds() {
        assert_eq!(parse_time_bound("00:00").unwrap(), 0.0);
        assert_eq!(parse_time_bound("09:00").unwrap(), 9.0);
        assert_eq!(parse_time_bound("10:30").unwrap(), 10.5);
        assert_eq!(parse_time_bound("23:45").unwrap(), 23.75);
        assert_eq!(parse_time_bound(" 06:15 ").unwrap(), 6.25);
    }

    #[test]
    fn parse_end_of_day() {
        assert_eq!(parse_time_bound("24:00").unwrap(), 24.0);
        assert!(parse_time_bound("24:01").is_err());
    }

    #[test]
    fn parse_invalid_bounds() {
        assert!(parse_time_bound("").is_err());
        assert!(parse_time_bound("25:00").is_err());
        assert!(parse_time_bound("10:60").is_err());
        assert!(parse_time_bound("1030").is_err());
        assert!(parse_time_bound("ten thirty").is_err());
    }

    #[test]
    fn validation_error_keeps_input() {
        let err = parse_time_bound("noon").unwrap_err();
        assert_eq!(err.input(), "noon");
        assert_eq!(err.to_string(), "invalid time bound \"noon\": expected HH:MM");
    }
}

use chrono::{Duration, NaiveTime};

const CLOCK_FORMAT: &str = "%H:%M";
const MINUTES_PER_DAY: i64 = 24 * 60;

/// Parse a wall-clock `HH:MM` string.
pub fn parse_hhmm(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), CLOCK_FORMAT).ok()
}

pub fn format_hhmm(time: NaiveTime) -> String {
    time.format(CLOCK_FORMAT).to_string()
}

/// Add `minutes` to an `HH:MM` string, wrapping around midnight.
///
/// Input that does not parse as `HH:MM` is returned unchanged.
pub fn add_minutes(time: &str, minutes: i64) -> String {
    match parse_hhmm(time) {
        Some(parsed) => {
            let offset = Duration::minutes(minutes.rem_euclid(MINUTES_PER_DAY));
            let (shifted, _) = parsed.overflowing_add_signed(offset);
            format_hhmm(shifted)
        }
        None => {
            tracing::debug!(time, minutes, "not an HH:MM time, leaving unchanged");
            time.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_within_the_same_hour() {
        assert_eq!(add_minutes("10:00", 30), "10:30");
    }

    #[test]
    fn wraps_past_midnight() {
        assert_eq!(add_minutes("23:30", 45), "00:15");
        assert_eq!(add_minutes("00:10", -20), "23:50");
    }

    #[test]
    fn extreme_offsets_reduce_modulo_one_day() {
        assert_eq!(add_minutes("10:00", 3 * MINUTES_PER_DAY + 5), "10:05");
        assert_eq!(add_minutes("10:00", i64::MAX), "04:07");
        assert_eq!(add_minutes("10:00", i64::MIN), "15:52");
    }

    #[test]
    fn zero_pads_single_digit_hours() {
        assert_eq!(add_minutes("7:00", 30), "07:30");
    }

    #[test]
    fn invalid_input_passes_through() {
        assert_eq!(add_minutes("breakfast", 30), "breakfast");
        assert_eq!(add_minutes("25:00", 30), "25:00");
        assert_eq!(add_minutes("", 30), "");
    }
}

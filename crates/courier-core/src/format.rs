use chrono::{DateTime, Local, Timelike};

/// Format a time as `H:MM` on a 24-hour clock. The hour is deliberately not
/// zero-padded while the minute is; the contact list's last-active labels
/// have always looked like `9:05` and `14:05`, and changing that would break
/// anything comparing them.
pub fn format_clock_time<Tz: chrono::TimeZone>(time: &DateTime<Tz>) -> String {
    format!("{}:{:02}", time.hour(), time.minute())
}

/// Last-active label for a contact touched right now.
pub fn now_label() -> String {
    format_clock_time(&Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_minute_padded_hour_not() {
        let t = Utc.with_ymd_and_hms(2024, 5, 1, 14, 5, 0).unwrap();
        assert_eq!(format_clock_time(&t), "14:05");

        let t = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        assert_eq!(format_clock_time(&t), "9:00");
    }

    #[test]
    fn test_midnight() {
        let t = Utc.with_ymd_and_hms(2024, 5, 1, 0, 59, 0).unwrap();
        assert_eq!(format_clock_time(&t), "0:59");
    }
}

//! Reminder due-time matching for the minute-resolution scheduler tick.

use chrono::{Datelike, NaiveDateTime, NaiveTime, Timelike};

/// Parse a weekday csv ("0,2,4") into day numbers, Monday = 0.
///
/// Returns `Err` on any token that is not an integer in 0..=6.
pub fn parse_weekdays(csv: &str) -> Result<Vec<u32>, String> {
    csv.split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|s| {
            let day: u32 = s
                .trim()
                .parse()
                .map_err(|_| format!("Invalid weekday token: {s:?}"))?;
            if day > 6 {
                return Err(format!("Weekday out of range (0-6): {day}"));
            }
            Ok(day)
        })
        .collect()
}

/// Whether a reminder fires on this tick.
///
/// A reminder is due when `now` falls in the same hour:minute as
/// `when_time` and, if a weekday filter is set, today (Monday = 0) is in
/// it. An unparseable filter never matches, so a corrupt row cannot fire
/// every day.
pub fn reminder_is_due(when_time: NaiveTime, weekdays: Option<&str>, now: NaiveDateTime) -> bool {
    if let Some(csv) = weekdays {
        let today = now.weekday().num_days_from_monday();
        match parse_weekdays(csv) {
            Ok(allowed) if allowed.contains(&today) => {}
            _ => return false,
        }
    }
    now.hour() == when_time.hour() && now.minute() == when_time.minute()
}

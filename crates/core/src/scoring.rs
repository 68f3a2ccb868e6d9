//! Daily-score arithmetic and color banding.
//!
//! A day's score is do_points (0-4) + dont_points (0-4) + journal_point
//! (0-1) + learning_point (0-1), for a maximum of 10.

use serde::Serialize;

/// Upper bound for the do/don't components.
pub const MAX_LIST_POINTS: i32 = 4;
/// Upper bound for the journal/learning components.
pub const MAX_BONUS_POINT: i32 = 1;

/// Calendar color band for a day's total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreColor {
    Green,
    Yellow,
    Red,
}

/// Sum the four score components.
pub fn total_points(do_points: i32, dont_points: i32, journal_point: i32, learning_point: i32) -> i32 {
    do_points + dont_points + journal_point + learning_point
}

/// Band a total into a calendar color: green at 7+, yellow at 4-6, red below.
pub fn score_color(total: i32) -> ScoreColor {
    if total >= 7 {
        ScoreColor::Green
    } else if total >= 4 {
        ScoreColor::Yellow
    } else {
        ScoreColor::Red
    }
}

/// Validate that each component is within its allowed range.
pub fn validate_components(
    do_points: i32,
    dont_points: i32,
    journal_point: i32,
    learning_point: i32,
) -> Result<(), String> {
    for (name, value, max) in [
        ("do_points", do_points, MAX_LIST_POINTS),
        ("dont_points", dont_points, MAX_LIST_POINTS),
        ("journal_point", journal_point, MAX_BONUS_POINT),
        ("learning_point", learning_point, MAX_BONUS_POINT),
    ] {
        if !(0..=max).contains(&value) {
            return Err(format!("{name} must be between 0 and {max}"));
        }
    }
    Ok(())
}

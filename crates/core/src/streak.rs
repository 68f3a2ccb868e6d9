//! Consecutive-day habit streak counting.

use std::collections::HashSet;

use chrono::NaiveDate;

/// Count the unbroken run of completed days ending at `today`.
///
/// Walks backwards one day at a time while a completed log exists; the
/// streak is 0 when today itself has no log. `completed` may contain
/// duplicates and any ordering; only membership matters.
pub fn current_streak(today: NaiveDate, completed: &[NaiveDate]) -> u32 {
    let set: HashSet<NaiveDate> = completed.iter().copied().collect();
    let mut streak = 0;
    let mut cursor = today;
    while set.contains(&cursor) {
        streak += 1;
        match cursor.pred_opt() {
            Some(prev) => cursor = prev,
            None => break,
        }
    }
    streak
}

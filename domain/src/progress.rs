//! Daily progress tracking shared by challenge, fitness plan and meal plan
//! participation.

use crate::error::Error;
use chrono::{Days, NaiveDate};
pub use entity_api::progress::Progress;

/// The days a participant may tick for one plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProgressWindow {
    /// Day `n` falls on `start_date + (n - 1)`. Ticking is only allowed while the
    /// challenge runs.
    Challenge {
        start_date: NaiveDate,
        end_date: NaiveDate,
        max_days: i32,
    },
    /// Days `1..=total_days` with no calendar attached.
    Plan { total_days: i32 },
}

impl ProgressWindow {
    pub fn challenge(start_date: NaiveDate, end_date: NaiveDate, max_days: i32) -> Self {
        ProgressWindow::Challenge {
            start_date,
            end_date,
            max_days,
        }
    }

    pub fn weeks(duration_weeks: i32) -> Self {
        ProgressWindow::Plan {
            total_days: duration_weeks.max(0).saturating_mul(7),
        }
    }

    pub fn total_days(&self) -> i32 {
        match *self {
            ProgressWindow::Challenge {
                start_date,
                end_date,
                max_days,
            } => {
                let span = (end_date - start_date).num_days() + 1;
                span.clamp(0, max_days as i64) as i32
            }
            ProgressWindow::Plan { total_days } => total_days,
        }
    }

    fn contains(&self, day: i32) -> bool {
        if day < 1 {
            return false;
        }
        match *self {
            ProgressWindow::Challenge {
                start_date,
                end_date,
                max_days,
            } => {
                day <= max_days
                    && start_date
                        .checked_add_days(Days::new(day as u64 - 1))
                        .is_some_and(|date| date <= end_date)
            }
            ProgressWindow::Plan { total_days } => day <= total_days,
        }
    }

    fn outside_message(&self) -> &'static str {
        match self {
            ProgressWindow::Challenge { .. } => "Day is outside the challenge duration.",
            ProgressWindow::Plan { .. } => "Day is outside the plan duration.",
        }
    }
}

/// Returns `progress` with `day` added.
///
/// Fails when the day lies outside `window`, when a challenge is not running on
/// `today`, or when the day was already ticked.
pub fn tick_day(
    progress: &Progress,
    day: i32,
    window: &ProgressWindow,
    today: NaiveDate,
) -> Result<Progress, Error> {
    if !window.contains(day) {
        return Err(Error::validation(window.outside_message()));
    }

    if let ProgressWindow::Challenge {
        start_date,
        end_date,
        ..
    } = *window
    {
        if today < start_date || today > end_date {
            return Err(Error::validation("Challenge is not active."));
        }
    }

    if progress.contains(day) {
        return Err(Error::validation("Day is already ticked."));
    }

    let mut days = progress.days().to_vec();
    days.push(day);
    Ok(Progress(days))
}

/// Share of the window's days that have been ticked, as a whole percentage.
pub fn completion_percent(progress: &Progress, window: &ProgressWindow) -> u8 {
    let total = window.total_days();
    if total <= 0 {
        return 0;
    }
    let ticked = progress
        .days()
        .iter()
        .filter(|day| window.contains(**day))
        .count() as f64;
    (ticked / total as f64 * 100.0).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainErrorKind;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn june_challenge() -> ProgressWindow {
        ProgressWindow::challenge(date(2024, 6, 1), date(2024, 6, 30), 30)
    }

    fn message(err: Error) -> String {
        match err.error_kind {
            DomainErrorKind::Validation(message) => message,
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn tick_day_appends_a_new_day() {
        let progress = Progress(vec![3, 1]);
        let ticked = tick_day(&progress, 2, &june_challenge(), date(2024, 6, 10)).unwrap();
        assert_eq!(ticked, Progress(vec![3, 1, 2]));
    }

    #[test]
    fn tick_day_rejects_a_repeated_day() {
        let progress = Progress(vec![5]);
        let err = tick_day(&progress, 5, &june_challenge(), date(2024, 6, 10)).unwrap_err();
        assert_eq!(message(err), "Day is already ticked.");
    }

    #[test]
    fn tick_day_rejects_days_outside_the_challenge() {
        let window = june_challenge();
        for day in [0, -1, 31] {
            let err = tick_day(&Progress::default(), day, &window, date(2024, 6, 10)).unwrap_err();
            assert_eq!(message(err), "Day is outside the challenge duration.");
        }
    }

    #[test]
    fn tick_day_rejects_days_past_a_short_challenge_end() {
        let window = ProgressWindow::challenge(date(2024, 6, 1), date(2024, 6, 7), 30);
        let err = tick_day(&Progress::default(), 8, &window, date(2024, 6, 3)).unwrap_err();
        assert_eq!(message(err), "Day is outside the challenge duration.");
    }

    #[test]
    fn tick_day_requires_an_active_challenge() {
        let before = tick_day(&Progress::default(), 1, &june_challenge(), date(2024, 5, 31));
        let after = tick_day(&Progress::default(), 1, &june_challenge(), date(2024, 7, 1));
        assert_eq!(message(before.unwrap_err()), "Challenge is not active.");
        assert_eq!(message(after.unwrap_err()), "Challenge is not active.");
    }

    #[test]
    fn tick_day_accepts_the_first_and_last_challenge_days() {
        let window = june_challenge();
        let first = tick_day(&Progress::default(), 1, &window, date(2024, 6, 1)).unwrap();
        let last = tick_day(&first, 30, &window, date(2024, 6, 30)).unwrap();
        assert_eq!(last, Progress(vec![1, 30]));
    }

    #[test]
    fn plan_windows_saturate_for_huge_durations() {
        let window = ProgressWindow::weeks(i32::MAX);
        assert_eq!(window.total_days(), i32::MAX);
        assert!(tick_day(&Progress::default(), 400, &window, date(2020, 1, 1)).is_ok());
        assert_eq!(completion_percent(&Progress(vec![1]), &window), 0);
    }

    #[test]
    fn plan_windows_span_whole_weeks() {
        let window = ProgressWindow::weeks(2);
        assert_eq!(window.total_days(), 14);
        assert!(tick_day(&Progress::default(), 14, &window, date(2020, 1, 1)).is_ok());
        let err = tick_day(&Progress::default(), 15, &window, date(2020, 1, 1)).unwrap_err();
        assert_eq!(message(err), "Day is outside the plan duration.");
    }

    #[test]
    fn completion_percent_rounds_and_ignores_out_of_range_days() {
        let window = ProgressWindow::weeks(1);
        assert_eq!(completion_percent(&Progress(vec![1, 2]), &window), 29);
        assert_eq!(completion_percent(&Progress(vec![1, 2, 99]), &window), 29);
        assert_eq!(
            completion_percent(&Progress((1..=7).collect()), &window),
            100
        );
    }

    #[test]
    fn completion_percent_of_an_empty_window_is_zero() {
        assert_eq!(completion_percent(&Progress(vec![1]), &ProgressWindow::weeks(0)), 0);
    }

    #[test]
    fn challenge_total_days_is_capped() {
        let window = ProgressWindow::challenge(date(2024, 1, 1), date(2024, 3, 1), 30);
        assert_eq!(window.total_days(), 30);
        assert_eq!(june_challenge().total_days(), 30);
    }
}

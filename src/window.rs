use chrono::{Datelike, Duration, Months, NaiveDate};

/// Number of days shown on the planning board.
pub const WINDOW_DAYS: usize = 14;

/// Monday of the week containing `date`. Sunday counts toward the week
/// before, so the result is always on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// The visible dates for an anchor: two full weeks from the anchor's Monday.
pub fn build_window(anchor: NaiveDate) -> Vec<NaiveDate> {
    let start = week_start(anchor);
    (0..WINDOW_DAYS as i64)
        .map(|offset| start + Duration::days(offset))
        .collect()
}

/// Navigable range for the window anchor. Both bounds are Mondays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowBounds {
    pub min_start: NaiveDate,
    pub max_start: NaiveDate,
}

impl WindowBounds {
    /// From the current week up to the window whose second week is the final
    /// week of next month.
    pub fn for_today(today: NaiveDate) -> Self {
        let min_start = week_start(today);
        let max_start = week_start(last_day_of_next_month(today)) - Duration::weeks(1);
        Self {
            min_start,
            max_start,
        }
    }

    /// Normalizes an anchor to its week start, then clamps it into bounds.
    pub fn clamp(&self, anchor: NaiveDate) -> NaiveDate {
        week_start(anchor).clamp(self.min_start, self.max_start)
    }
}

fn last_day_of_next_month(today: NaiveDate) -> NaiveDate {
    let first_of_month = today - Duration::days(today.day0() as i64);
    first_of_month + Months::new(2) - Duration::days(1)
}

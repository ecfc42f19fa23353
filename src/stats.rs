use crate::models::{AttendanceStatus, OverrideMap, StatusCount, TeamMember, WeekStats};
use chrono::NaiveDate;

/// Leading slice of the window covered by the statistics panel.
const STATS_DAYS: usize = 7;

/// Tallies effective statuses over the first week of the window. Slots
/// without an override count as office.
pub fn build_week_stats(
    users: &[TeamMember],
    days: &[NaiveDate],
    overrides: &OverrideMap,
) -> WeekStats {
    let week_days = &days[..days.len().min(STATS_DAYS)];

    let mut office = 0u32;
    let mut smart = 0u32;
    let mut away = 0u32;

    for day in week_days {
        for user in users {
            let status = overrides
                .get(&(user.id, *day))
                .copied()
                .unwrap_or(AttendanceStatus::Office);
            match status {
                AttendanceStatus::Office => office += 1,
                AttendanceStatus::Smart => smart += 1,
                AttendanceStatus::Away => away += 1,
            }
        }
    }

    let total = (users.len() * week_days.len()) as u32;
    WeekStats {
        office: to_count(office, total),
        smart: to_count(smart, total),
        away: to_count(away, total),
    }
}

fn to_count(count: u32, total: u32) -> StatusCount {
    let percent = if total == 0 {
        0
    } else {
        (f64::from(count) * 100.0 / f64::from(total)).round() as u32
    };
    StatusCount { count, percent }
}

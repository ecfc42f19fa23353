use crate::models::{
    AttendanceStatus, DayColumn, OverrideMap, PlanningCell, PlanningRow, PlanningView, TeamMember,
    WindowNav,
};
use crate::stats::build_week_stats;
use crate::window::{self, WindowBounds};
use chrono::{Duration, NaiveDate};

/// Builds the complete view model for one visible window: day columns, one
/// row per member with effective statuses, week statistics, and navigation
/// state. Pure function of its inputs; the page script renders it without
/// further computation.
pub fn build_view(
    users: &[TeamMember],
    anchor: NaiveDate,
    overrides: &OverrideMap,
    bounds: &WindowBounds,
) -> PlanningView {
    let start = bounds.clamp(anchor);
    let dates = window::build_window(start);
    let end = start + Duration::days(window::WINDOW_DAYS as i64 - 1);

    let mut roster = users.to_vec();
    roster.sort_by(|a, b| a.name.cmp(&b.name));

    let days = dates
        .iter()
        .map(|date| DayColumn {
            date: *date,
            label: day_label(*date),
        })
        .collect();

    let rows = roster
        .iter()
        .map(|user| PlanningRow {
            user_id: user.id,
            name: user.name.clone(),
            cells: dates
                .iter()
                .map(|date| {
                    let status = overrides
                        .get(&(user.id, *date))
                        .copied()
                        .unwrap_or(AttendanceStatus::Office);
                    PlanningCell {
                        day: *date,
                        status,
                        glyph: status.glyph(),
                        class: status.css_class(),
                    }
                })
                .collect(),
        })
        .collect();

    let stats = build_week_stats(&roster, &dates, overrides);

    let nav = WindowNav {
        prev_anchor: bounds.clamp(start - Duration::weeks(1)),
        prev_enabled: start > bounds.min_start,
        next_anchor: bounds.clamp(start + Duration::weeks(1)),
        next_enabled: start < bounds.max_start,
    };

    PlanningView {
        start,
        end,
        range_label: range_label(start, end),
        days,
        rows,
        stats,
        nav,
    }
}

fn day_label(date: NaiveDate) -> String {
    date.format("%a %b %-d").to_string()
}

fn range_label(start: NaiveDate, end: NaiveDate) -> String {
    format!(
        "{} to {}",
        start.format("%b %-d"),
        end.format("%b %-d, %Y")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(text: &str) -> NaiveDate {
        text.parse().unwrap()
    }

    fn roster() -> Vec<TeamMember> {
        vec![
            TeamMember {
                id: 1,
                name: "Sam Lee".to_string(),
                email: "sam@example.com".to_string(),
            },
            TeamMember {
                id: 2,
                name: "Alex Doe".to_string(),
                email: "alex@example.com".to_string(),
            },
        ]
    }

    #[test]
    fn view_covers_two_weeks_with_labels() {
        let bounds = WindowBounds::for_today(day("2024-01-02"));
        let view = build_view(&roster(), day("2024-01-02"), &OverrideMap::new(), &bounds);

        assert_eq!(view.start, day("2024-01-01"));
        assert_eq!(view.end, day("2024-01-14"));
        assert_eq!(view.days.len(), 14);
        assert_eq!(view.days[0].label, "Mon Jan 1");
        assert_eq!(view.range_label, "Jan 1 to Jan 14, 2024");
    }

    #[test]
    fn rows_are_ordered_by_name() {
        let bounds = WindowBounds::for_today(day("2024-01-02"));
        let view = build_view(&roster(), day("2024-01-02"), &OverrideMap::new(), &bounds);

        assert_eq!(view.rows[0].name, "Alex Doe");
        assert_eq!(view.rows[1].name, "Sam Lee");
    }

    #[test]
    fn override_shows_its_glyph_and_absence_means_office() {
        let mut overrides = OverrideMap::new();
        overrides.insert((1, day("2024-01-02")), AttendanceStatus::Away);

        let bounds = WindowBounds::for_today(day("2024-01-02"));
        let view = build_view(&roster(), day("2024-01-02"), &overrides, &bounds);

        let sam = &view.rows[1];
        assert_eq!(sam.cells[1].day, day("2024-01-02"));
        assert_eq!(sam.cells[1].status, AttendanceStatus::Away);
        assert_eq!(sam.cells[1].glyph, "A");
        assert_eq!(sam.cells[1].class, "status-away");

        assert_eq!(sam.cells[0].status, AttendanceStatus::Office);
        assert_eq!(sam.cells[0].glyph, "");
    }

    #[test]
    fn stats_reflect_the_first_week() {
        let mut overrides = OverrideMap::new();
        overrides.insert((1, day("2024-01-02")), AttendanceStatus::Smart);

        let bounds = WindowBounds::for_today(day("2024-01-02"));
        let view = build_view(&roster(), day("2024-01-02"), &overrides, &bounds);

        assert_eq!(view.stats.smart.count, 1);
        assert_eq!(view.stats.office.count, 13);
    }

    #[test]
    fn navigation_is_disabled_at_the_lower_bound() {
        let bounds = WindowBounds::for_today(day("2024-01-02"));
        let view = build_view(&roster(), day("2024-01-02"), &OverrideMap::new(), &bounds);

        assert!(!view.nav.prev_enabled);
        assert_eq!(view.nav.prev_anchor, view.start);
        assert!(view.nav.next_enabled);
        assert_eq!(view.nav.next_anchor, day("2024-01-08"));
    }

    #[test]
    fn navigation_is_disabled_at_the_upper_bound() {
        let bounds = WindowBounds::for_today(day("2024-01-02"));
        let view = build_view(
            &roster(),
            bounds.max_start,
            &OverrideMap::new(),
            &bounds,
        );

        assert!(view.nav.prev_enabled);
        assert!(!view.nav.next_enabled);
        assert_eq!(view.nav.next_anchor, bounds.max_start);
    }

    #[test]
    fn out_of_bounds_anchor_is_clamped() {
        let bounds = WindowBounds::for_today(day("2024-01-02"));
        let view = build_view(&roster(), day("2020-06-15"), &OverrideMap::new(), &bounds);

        assert_eq!(view.start, bounds.min_start);
    }
}

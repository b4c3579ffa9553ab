//! Tests for month grid construction.

use chrono::Weekday;
use datepick_core::{build_month_grid, build_month_grid_with, CalendarDate, Gregorian};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn d(s: &str) -> CalendarDate {
    CalendarDate::parse(s).unwrap()
}

fn in_month_count(grid: &datepick_core::MonthGrid) -> usize {
    grid.cells().filter(|c| c.belongs_to_displayed_month).count()
}

// ── Shape ───────────────────────────────────────────────────────────────────

#[test]
fn march_2025_needs_six_weeks() {
    // Mar 1 2025 is a Saturday, Mar 31 a Monday.
    let grid = build_month_grid(d("2025-03-18"), false);

    assert_eq!(grid.week_count(), 6);
    assert_eq!(grid.first_day(), d("2025-02-23"));
    assert_eq!(grid.last_day(), d("2025-04-05"));
    assert_eq!(grid.reference(), d("2025-03-01"));
    assert_eq!(in_month_count(&grid), 31);
}

#[test]
fn february_2026_fits_in_four_weeks() {
    // Feb 1 2026 is a Sunday and Feb 28 a Saturday.
    let grid = build_month_grid(d("2026-02-10"), false);

    assert_eq!(grid.week_count(), 4);
    assert_eq!(grid.first_day(), d("2026-02-01"));
    assert_eq!(grid.last_day(), d("2026-02-28"));
    assert!(grid.cells().all(|c| c.belongs_to_displayed_month));
}

#[test]
fn leap_february_covers_the_29th() {
    let grid = build_month_grid(d("2024-02-01"), false);

    assert_eq!(grid.week_count(), 5);
    assert_eq!(grid.first_day(), d("2024-01-28"));
    assert_eq!(in_month_count(&grid), 29);
    let leap_day = grid.cell_for(d("2024-02-29")).unwrap();
    assert!(leap_day.belongs_to_displayed_month);
    assert!(leap_day.is_month_end());
}

#[test]
fn december_grid_spills_into_next_year() {
    let grid = build_month_grid(d("2025-12-25"), false);

    assert_eq!(grid.week_count(), 5);
    assert_eq!(grid.first_day(), d("2025-11-30"));
    assert_eq!(grid.last_day(), d("2026-01-03"));

    let spill = grid.cell_for(d("2026-01-01")).unwrap();
    assert!(!spill.belongs_to_displayed_month);
}

#[test]
fn padding_cells_never_count_as_month_boundaries() {
    let grid = build_month_grid(d("2025-03-01"), false);

    // Feb 28 is the last day of February but only padding here.
    let feb_end = grid.cell_for(d("2025-02-28")).unwrap();
    assert!(!feb_end.is_month_end());

    let boundaries: Vec<_> = grid
        .cells()
        .filter(|c| c.is_month_start() || c.is_month_end())
        .map(|c| c.date)
        .collect();
    assert_eq!(boundaries, vec![d("2025-03-01"), d("2025-03-31")]);
}

#[test]
fn cells_are_consecutive_days() {
    let grid = build_month_grid(d("2025-06-15"), true);
    let dates: Vec<_> = grid.cells().map(|c| c.date).collect();

    for pair in dates.windows(2) {
        assert_eq!(pair[0].succ(), pair[1]);
    }
}

// ── Normalized height ───────────────────────────────────────────────────────

#[test]
fn normalize_height_pads_four_week_month_to_six() {
    let grid = build_month_grid(d("2026-02-01"), true);

    assert_eq!(grid.week_count(), 6);
    assert_eq!(grid.cells().count(), 42);
    assert_eq!(grid.first_day(), d("2026-02-01"));
    assert_eq!(grid.last_day(), d("2026-03-14"));
    assert_eq!(in_month_count(&grid), 28);
}

#[test]
fn normalize_height_leaves_six_week_month_alone() {
    let plain = build_month_grid(d("2025-03-01"), false);
    let normalized = build_month_grid(d("2025-03-01"), true);

    assert_eq!(plain, normalized);
}

// ── Week start ──────────────────────────────────────────────────────────────

#[test]
fn monday_first_grid_shifts_columns() {
    let grid = build_month_grid_with(&Gregorian::monday_first(), d("2026-02-01"), false);

    assert_eq!(grid.week_start(), Weekday::Mon);
    assert_eq!(grid.week_count(), 5);
    assert_eq!(grid.first_day(), d("2026-01-26"));
    assert_eq!(grid.last_day(), d("2026-03-01"));
    for week in grid.weeks() {
        assert_eq!(week[0].date.weekday(), Weekday::Mon);
        assert_eq!(week[6].date.weekday(), Weekday::Sun);
    }
}

#[test]
fn columns_group_cells_by_weekday() {
    let grid = build_month_grid(d("2025-03-01"), false);
    let columns = grid.columns();

    assert_eq!(columns.len(), 7);
    for (i, column) in columns.iter().enumerate() {
        assert_eq!(column.len(), grid.week_count());
        assert!(column
            .iter()
            .all(|c| c.date.weekday_number() as usize == i));
    }
    // Saturday column starts with Mar 1.
    assert_eq!(columns[6][0].date, d("2025-03-01"));
}

#[test]
fn weekend_flag_follows_date() {
    let grid = build_month_grid(d("2025-03-01"), false);
    let weekend: Vec<_> = grid.weeks()[1].iter().map(|c| c.is_weekend()).collect();

    assert_eq!(weekend, vec![true, false, false, false, false, false, true]);
}

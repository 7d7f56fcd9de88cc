use chrono::NaiveDate;

use leavecal::time::calendar::holidaycalendar::HolidayCalendar;
use leavecal::time::calendar::jurisdictioncalendar::JurisdictionCalendar;
use leavecal::{easter, holidays_for_year, working_days};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn easter_fixed_points() {
    assert_eq!(easter(2024), Some(ymd(2024, 3, 31)));
    assert_eq!(easter(2025), Some(ymd(2025, 4, 20)));
    assert_eq!(easter(2026), Some(ymd(2026, 4, 5)));
}

#[test]
fn mashujaa_day_fortnight_has_nine_working_days() {
    // Oct 11-12 and 18-19 are weekends, Oct 20 is Mashujaa Day.
    assert_eq!(working_days(ymd(2025, 10, 10), ymd(2025, 10, 23)), 9);
}

#[test]
fn mazingira_day_variant_removes_one_more_day() {
    let calendar = JurisdictionCalendar::kenya_with_mazingira_day();
    assert_eq!(calendar.working_days(ymd(2025, 10, 10), ymd(2025, 10, 23)), 8);
}

#[test]
fn new_year_crossing_uses_both_years() {
    // Dec 28 2025 (Sun) .. Jan 3 2026 (Sat): Jan 1 is a holiday of 2026.
    assert_eq!(working_days(ymd(2025, 12, 28), ymd(2026, 1, 3)), 4);
    // Christmas and Boxing Day come from 2025.
    assert_eq!(working_days(ymd(2025, 12, 22), ymd(2026, 1, 2)), 7);
}

#[test]
fn three_year_span_includes_middle_year_holidays() {
    assert_eq!(working_days(ymd(2024, 12, 31), ymd(2026, 1, 2)), 255);
}

#[test]
fn whole_years() {
    assert_eq!(working_days(ymd(2025, 1, 1), ymd(2025, 12, 31)), 253);
    assert_eq!(working_days(ymd(2026, 1, 1), ymd(2026, 12, 31)), 254);
}

#[test]
fn easter_week() {
    // Good Friday Apr 18 and Easter Monday Apr 21 2025.
    assert_eq!(working_days(ymd(2025, 4, 14), ymd(2025, 4, 25)), 8);
}

#[test]
fn single_days() {
    assert_eq!(working_days(ymd(2025, 10, 21), ymd(2025, 10, 21)), 1);
    assert_eq!(working_days(ymd(2025, 10, 20), ymd(2025, 10, 20)), 0);
    assert_eq!(working_days(ymd(2025, 10, 11), ymd(2025, 10, 11)), 0);
}

#[test]
fn inverted_range_counts_zero() {
    assert_eq!(working_days(ymd(2025, 10, 23), ymd(2025, 10, 10)), 0);
    assert_eq!(working_days(ymd(2026, 1, 1), ymd(2025, 1, 1)), 0);
}

#[test]
fn holiday_set_shape() {
    let set = holidays_for_year(2026);
    assert_eq!(set.year(), 2026);
    assert_eq!(set.len(), 9);
    assert_eq!(set.name_of(&ymd(2026, 4, 3)), Some("Good Friday"));
    assert_eq!(set.name_of(&ymd(2026, 4, 6)), Some("Easter Monday"));
}

#[test]
fn return_to_work_skips_easter_weekend() {
    let calendar = JurisdictionCalendar::kenya();
    assert_eq!(calendar.return_to_work_date(ymd(2025, 4, 17)), Some(ymd(2025, 4, 22)));
    assert_eq!(calendar.previous_business_day(ymd(2025, 4, 22)), Some(ymd(2025, 4, 17)));
    assert_eq!(calendar.shift_n_business_day(ymd(2025, 10, 17), 2), Some(ymd(2025, 10, 22)));
}

#[test]
fn shifting_stops_at_the_edge_of_the_calendar() {
    let calendar = JurisdictionCalendar::kenya();
    assert_eq!(calendar.next_business_day(NaiveDate::MAX), None);
    assert_eq!(calendar.previous_business_day(NaiveDate::MIN), None);
    assert_eq!(calendar.shift_n_business_day(ymd(2025, 10, 17), 0), Some(ymd(2025, 10, 17)));
}

#[test]
fn holidays_between_lists_weekend_holidays_too() {
    let calendar = JurisdictionCalendar::kenya();
    let holidays = calendar.holidays_between(ymd(2026, 12, 1), ymd(2027, 1, 5));
    let names: Vec<&str> = holidays.iter().map(|h| h.name()).collect();
    assert_eq!(names, vec!["Jamhuri Day", "Christmas Day", "Boxing Day", "New Year's Day"]);
}

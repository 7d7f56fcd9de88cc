use std::collections::HashSet;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use proptest::prelude::*;

use leavecal::time::calendar::cachedcalendar::CachedCalendar;
use leavecal::time::calendar::holidaycalendar::HolidayCalendar;
use leavecal::time::calendar::jurisdictioncalendar::JurisdictionCalendar;
use leavecal::time::holiday::HolidayKind;
use leavecal::{easter, holidays_for_year, working_days};

fn date_from_offset(days: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap() + Days::new(days as u64)
}

proptest! {
    #[test]
    fn easter_is_a_sunday_in_march_or_april(year in 1583i32..10000) {
        let d = easter(year).unwrap();
        prop_assert_eq!(d.year(), year);
        prop_assert!(d.month() == 3 || d.month() == 4, "easter({}) = {}", year, d);
        prop_assert_eq!(d.weekday(), Weekday::Sun);
    }

    #[test]
    fn holiday_set_invariants(year in 1583i32..5000, mazingira in any::<bool>()) {
        let calendar = JurisdictionCalendar::kenya().with_mazingira_day(mazingira);
        let set = calendar.holidays_for_year(year);
        let fixed = if mazingira { 8 } else { 7 };

        prop_assert_eq!(set.of_kind(HolidayKind::Fixed).count(), fixed);
        prop_assert_eq!(set.of_kind(HolidayKind::EasterRelated).count(), 2);
        prop_assert!(set.iter().all(|h| h.date().year() == year));

        let unique: HashSet<NaiveDate> = set.iter().map(|h| h.date()).collect();
        prop_assert_eq!(unique.len(), set.len());

        let sunday = easter(year).unwrap();
        prop_assert_eq!(set.name_of(&(sunday - Days::new(2))), Some("Good Friday"));
        prop_assert_eq!(set.name_of(&(sunday + Days::new(1))), Some("Easter Monday"));
    }

    #[test]
    fn single_day_count(offset in 0u32..80000) {
        let d = date_from_offset(offset);
        let is_working = !matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
            && !holidays_for_year(d.year()).contains(&d);
        prop_assert_eq!(working_days(d, d), is_working as u32);
    }

    #[test]
    fn never_exceeds_calendar_days(offset in 0u32..80000, len in 0u32..1200) {
        let start = date_from_offset(offset);
        let end = start + Days::new(len as u64);
        let count = working_days(start, end);
        prop_assert!(count as i64 <= (end - start).num_days() + 1);
        prop_assert_eq!(working_days(start, end), count);
    }

    #[test]
    fn inverted_ranges_count_zero(offset in 1u32..80000, back in 1u32..1000) {
        let end = date_from_offset(offset);
        let start = end + Days::new(back as u64);
        prop_assert_eq!(working_days(start, end), 0);
    }

    #[test]
    fn splitting_a_range_adds_up(offset in 0u32..80000, left in 0u32..400, right in 1u32..400) {
        let start = date_from_offset(offset);
        let middle = start + Days::new(left as u64);
        let end = middle + Days::new(right as u64);
        let next = middle + Days::new(1);
        prop_assert_eq!(
            working_days(start, end),
            working_days(start, middle) + working_days(next, end)
        );
    }

    #[test]
    fn cache_is_transparent(offset in 0u32..80000, len in 0u32..800) {
        let raw = JurisdictionCalendar::kenya_with_mazingira_day();
        let cached = CachedCalendar::new(raw.clone());
        let start = date_from_offset(offset);
        let end = start + Days::new(len as u64);
        prop_assert_eq!(cached.working_days(start, end), raw.working_days(start, end));
    }
}

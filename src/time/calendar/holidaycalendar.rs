use std::collections::HashSet;

use chrono::{
    Datelike, 
    Days, 
    NaiveDate
};
use tracing::{
    debug, 
    warn
};

use crate::time::holiday::Holiday;
use crate::time::holidayset::HolidaySet;
use crate::time::rangeofdates::RangeOfDates;

const ONE_DAY: Days = Days::new(1);

pub const MAX_NON_BUSINESS_RUN: u32 = 2 * 366;

/// A working-day calendar: which weekdays are weekends, and which dates are
/// public holidays in a given year.
///
/// Implementors supply the per-year holiday set and the weekend rule; the
/// range arithmetic is shared.
pub trait HolidayCalendar: Send + Sync {
    /// Jurisdiction label, used in reports and logs.
    fn name(&self) -> &str;

    fn holidays_for_year(&self, year: i32) -> HolidaySet;

    fn is_weekend(&self, d: NaiveDate) -> bool;

    fn is_holiday(&self, d: NaiveDate) -> bool {
        self.holidays_for_year(d.year()).contains(&d)
    }

    fn is_business_day(&self, d: NaiveDate) -> bool {
        !self.is_weekend(d) && !self.is_holiday(d)
    }

    /// Union of the holiday dates of every year `range` touches.
    fn holiday_dates(&self, range: &RangeOfDates) -> HashSet<NaiveDate> {
        let mut dates = HashSet::new();
        for year in range.years() {
            dates.extend(self.holidays_for_year(year).iter().map(|h| h.date()));
        }
        dates
    }

    /// Number of days in `[start, end]` that are neither weekend days nor
    /// holidays. An inverted range counts zero.
    fn working_days(&self, start: NaiveDate, end: NaiveDate) -> u32 {
        let range = RangeOfDates::new(start, end);
        let holiday_dates = self.holiday_dates(&range);
        let count = range
            .iter()
            .filter(|d| !self.is_weekend(*d) && !holiday_dates.contains(d))
            .count() as u32;
        debug!(
            calendar = self.name(),
            %start,
            %end,
            calendar_days = range.len(),
            working_days = count,
            "counted working days"
        );
        count
    }

    /// Holidays falling inside `[start, end]`, in date order.
    fn holidays_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<Holiday> {
        let range = RangeOfDates::new(start, end);
        let mut holidays: Vec<Holiday> = range
            .years()
            .flat_map(|year| self.holidays_for_year(year).holidays().to_vec())
            .filter(|h| range.contain(h.date()))
            .collect();
        holidays.sort_by_key(|h| h.date());
        holidays
    }

    /// Moves `n` business days away from `horizon` (backwards for negative
    /// `n`). `horizon` itself is never counted.
    ///
    /// `None` when the walk leaves chrono's date range, or when it meets more
    /// than `MAX_NON_BUSINESS_RUN` non-business days in a row.
    fn shift_n_business_day(&self, horizon: NaiveDate, n: i32) -> Option<NaiveDate> {
        let mut m = n.unsigned_abs();
        let mut d = horizon;
        let mut run = 0;
        while m > 0 {
            d = if n >= 0 {
                d.checked_add_days(ONE_DAY)?
            } else {
                d.checked_sub_days(ONE_DAY)?
            };
            if self.is_business_day(d) {
                m -= 1;
                run = 0;
            } else {
                run += 1;
                if run > MAX_NON_BUSINESS_RUN {
                    warn!(calendar = self.name(), %horizon, n, "no business day found");
                    return None;
                }
            }
        }
        Some(d)
    }

    fn next_business_day(&self, d: NaiveDate) -> Option<NaiveDate> {
        self.shift_n_business_day(d, 1)
    }

    fn previous_business_day(&self, d: NaiveDate) -> Option<NaiveDate> {
        self.shift_n_business_day(d, -1)
    }

    /// First business day after the last day of leave.
    fn return_to_work_date(&self, last_leave_day: NaiveDate) -> Option<NaiveDate> {
        self.next_business_day(last_leave_day)
    }
}

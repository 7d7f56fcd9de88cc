//! Entry points for the default jurisdiction (Kenya, without Mazingira Day).
//!
//! Each call is independent and allocates only local data, so these are safe
//! to call from any thread. Services that count many ranges can hold a
//! `CachedCalendar` instead.

use chrono::NaiveDate;

use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::jurisdictioncalendar::JurisdictionCalendar;
use crate::time::holidayset::HolidaySet;

pub use crate::time::easter::easter;

/// Kenya's public holidays in `year`: the fixed table, then Good Friday and
/// Easter Monday.
pub fn holidays_for_year(year: i32) -> HolidaySet {
    JurisdictionCalendar::kenya().holidays_for_year(year)
}

/// Working days in `[start, end]` under the Kenyan calendar.
pub fn working_days(start: NaiveDate, end: NaiveDate) -> u32 {
    JurisdictionCalendar::kenya().working_days(start, end)
}

use chrono::{Datelike, NaiveDate};

use crate::time::holiday::{
    Holiday, 
    HolidayKind
};


/// A rule producing at most one holiday per calendar year.
pub trait RecurringHoliday: Send + Sync {

    fn name(&self) -> &str;

    fn kind(&self) -> HolidayKind;

    /// The date the holiday falls on in `year`, or `None` when the rule has no
    /// occurrence that year (Feb 29 outside leap years, unrepresentable years,
    /// or an offset that leaves the year).
    fn get_holiday_date(&self, year: i32) -> Option<NaiveDate>;

    fn get_holiday(&self, year: i32) -> Option<Holiday> {
        self.get_holiday_date(year)
            .map(|d| Holiday::new(d, self.name(), self.kind()))
    }

    fn is_holiday(&self, d: &NaiveDate) -> bool {
        self.get_holiday_date(d.year()) == Some(*d)
    }
}

use chrono::NaiveDate;
use serde::Serialize;

use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::holiday::Holiday;
use crate::time::rangeofdates::RangeOfDates;

/// Day breakdown of a leave request, ready to be embedded in a leave form,
/// notification or API response.
///
/// `working_days` equals `calendar_days - weekend_days` minus the holidays in
/// `holidays` that fall on a weekday.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LeaveSummary {
    jurisdiction: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    calendar_days: u32,
    weekend_days: u32,
    holidays: Vec<Holiday>,
    working_days: u32,
    return_date: Option<NaiveDate>
}

impl LeaveSummary {
    pub fn compute<C: HolidayCalendar + ?Sized>(calendar: &C, start_date: NaiveDate, end_date: NaiveDate) -> LeaveSummary {
        let range = RangeOfDates::new(start_date, end_date);
        let weekend_days = range.iter().filter(|d| calendar.is_weekend(*d)).count() as u32;
        let return_date = if range.is_empty() {
            None
        } else {
            calendar.return_to_work_date(end_date)
        };

        LeaveSummary {
            jurisdiction: calendar.name().to_owned(),
            start_date,
            end_date,
            calendar_days: range.len() as u32,
            weekend_days,
            holidays: calendar.holidays_between(start_date, end_date),
            working_days: calendar.working_days(start_date, end_date),
            return_date
        }
    }

    pub fn jurisdiction(&self) -> &str {
        &self.jurisdiction
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn calendar_days(&self) -> u32 {
        self.calendar_days
    }

    pub fn weekend_days(&self) -> u32 {
        self.weekend_days
    }

    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    pub fn working_days(&self) -> u32 {
        self.working_days
    }

    /// `None` for an empty request, or when no business day follows it.
    pub fn return_date(&self) -> Option<NaiveDate> {
        self.return_date
    }
}

use chrono::{
    Datelike, 
    NaiveDate
};
use serde::{
    Serialize,
    Deserialize
};

use crate::time::holiday::HolidayKind;
use crate::time::utility::max_days_of_month;
use super::holidayruleerror::HolidayRuleError;
use super::recurringholiday::RecurringHoliday;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedDateHoliday {
    month: u32,
    day: u32,
    name: String
}

impl FixedDateHoliday {
    /// Validates against the longest form of the month, so Feb 29 is accepted
    /// and simply has no occurrence in common years.
    pub fn new(month: u32, day: u32, name: impl Into<String>) -> Result<FixedDateHoliday, HolidayRuleError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(HolidayRuleError::EmptyName);
        }
        if !(1..=12).contains(&month) {
            return Err(HolidayRuleError::InvalidMonth { name, month });
        }
        if day == 0 || day > max_days_of_month(month) {
            return Err(HolidayRuleError::InvalidDay { name, month, day });
        }
        Ok(FixedDateHoliday { month, day, name })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> HolidayKind {
        HolidayKind::Fixed
    }

    fn get_holiday_date(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
            .filter(|d| d.year() == year)
    }
}

use chrono::{
    Datelike, 
    NaiveDate,
    TimeDelta
};
use serde::{
    Serialize,
    Deserialize
};

use crate::time::easter::easter;
use crate::time::holiday::HolidayKind;
use super::holidayruleerror::HolidayRuleError;
use super::recurringholiday::RecurringHoliday;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EasterRelatedHoliday {
    shift_days: i64,
    name: String
}

impl EasterRelatedHoliday {
    pub fn new(shift_days: i64, name: impl Into<String>) -> Result<EasterRelatedHoliday, HolidayRuleError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(HolidayRuleError::EmptyName);
        }
        Ok(EasterRelatedHoliday { shift_days, name })
    }

    pub fn good_friday() -> EasterRelatedHoliday {
        EasterRelatedHoliday { 
            shift_days: -2, 
            name: "Good Friday".to_owned() 
        }
    }

    pub fn easter_monday() -> EasterRelatedHoliday {
        EasterRelatedHoliday { 
            shift_days: 1, 
            name: "Easter Monday".to_owned() 
        }
    }

    pub fn shift_days(&self) -> i64 {
        self.shift_days
    }
}

impl RecurringHoliday for EasterRelatedHoliday {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> HolidayKind {
        HolidayKind::EasterRelated
    }

    fn get_holiday_date(&self, year: i32) -> Option<NaiveDate> {
        let shift = TimeDelta::try_days(self.shift_days)?;
        easter(year)?
            .checked_add_signed(shift)
            .filter(|d| d.year() == year)
    }
}

use std::collections::HashSet;

use chrono::{
    Datelike, 
    NaiveDate, 
    Weekday
};

use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::weekendmask::WeekendMask;
use crate::time::holidayset::HolidaySet;
use crate::time::recurringholiday::easterrelatedholiday::EasterRelatedHoliday;
use crate::time::recurringholiday::fixedholidaytable::FixedHolidayTable;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;

pub const KENYA: &str = "Kenya";

/// A single national holiday calendar: a weekend rule, a table of fixed-date
/// holidays and a list of Easter-relative holidays.
///
/// Holiday sets list the fixed table first, in table order, followed by the
/// Easter-relative holidays in the order given.
#[derive(Clone, Debug)]
pub struct JurisdictionCalendar {
    name: String,
    weekends: WeekendMask,
    fixed_holidays: FixedHolidayTable,
    easter_holidays: Vec<EasterRelatedHoliday>
}

impl JurisdictionCalendar {
    pub fn new(
        name: impl Into<String>,
        weekends: HashSet<Weekday>,
        fixed_holidays: FixedHolidayTable,
        easter_holidays: Vec<EasterRelatedHoliday>
    ) -> JurisdictionCalendar {
        JurisdictionCalendar {
            name: name.into(),
            weekends: WeekendMask::new(&weekends),
            fixed_holidays,
            easter_holidays
        }
    }

    /// Kenyan public holidays over a Saturday/Sunday weekend, without
    /// Mazingira Day.
    pub fn kenya() -> JurisdictionCalendar {
        JurisdictionCalendar {
            name: KENYA.to_owned(),
            weekends: WeekendMask::saturday_sunday(),
            fixed_holidays: FixedHolidayTable::kenya(),
            easter_holidays: vec![
                EasterRelatedHoliday::good_friday(), 
                EasterRelatedHoliday::easter_monday()
            ]
        }
    }

    pub fn kenya_with_mazingira_day() -> JurisdictionCalendar {
        Self::kenya().with_mazingira_day(true)
    }

    pub fn with_mazingira_day(mut self, include: bool) -> JurisdictionCalendar {
        self.fixed_holidays = self.fixed_holidays.with_mazingira_day(include);
        self
    }

    pub fn business_days_per_week(&self) -> u32 {
        self.weekends.business_days_per_week()
    }

    pub fn weekends(&self) -> HashSet<Weekday> {
        self.weekends.to_hashset()
    }

    pub fn fixed_holidays(&self) -> &FixedHolidayTable {
        &self.fixed_holidays
    }

    pub fn easter_holidays(&self) -> &[EasterRelatedHoliday] {
        &self.easter_holidays
    }
}

impl Default for JurisdictionCalendar {
    fn default() -> Self {
        JurisdictionCalendar::kenya()
    }
}

impl HolidayCalendar for JurisdictionCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn holidays_for_year(&self, year: i32) -> HolidaySet {
        let mut holiday_set = HolidaySet::new(year);

        for fixed in self.fixed_holidays.iter() {
            if let Some(holiday) = fixed.get_holiday(year) {
                holiday_set.insert(holiday);
            }
        }

        for movable in self.easter_holidays.iter() {
            if let Some(holiday) = movable.get_holiday(year) {
                holiday_set.insert(holiday);
            }
        }

        holiday_set
    }

    #[inline]
    fn is_weekend(&self, d: NaiveDate) -> bool {
        self.weekends.is_weekend(d.weekday())
    }

    // Cheaper than building the whole year.
    fn is_holiday(&self, d: NaiveDate) -> bool {
        self.fixed_holidays.iter().any(|h| h.is_holiday(&d))
            || self.easter_holidays.iter().any(|h| h.is_holiday(&d))
    }
}

use std::slice::Iter;

use serde::{
    Serialize,
    Deserialize
};

use super::fixeddateholiday::FixedDateHoliday;
use super::holidayruleerror::HolidayRuleError;
use super::recurringholiday::RecurringHoliday;

const KENYA_FIXED_HOLIDAYS: [(u32, u32, &str); 7] = [
    (1, 1, "New Year's Day"),
    (5, 1, "Labour Day"),
    (6, 1, "Madaraka Day"),
    (10, 20, "Mashujaa Day"),
    (12, 12, "Jamhuri Day"),
    (12, 25, "Christmas Day"),
    (12, 26, "Boxing Day")
];

const MAZINGIRA_DAY: (u32, u32, &str) = (10, 10, "Mazingira Day");

/// One row of a fixed-holiday table as it appears in configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedHolidayEntry {
    pub month: u32,
    pub day: u32,
    pub name: String
}

/// The jurisdiction's fixed-date holidays, in listing order, with no two
/// entries on the same month/day.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedHolidayTable {
    holidays: Vec<FixedDateHoliday>
}

impl FixedHolidayTable {
    pub fn new(entries: Vec<FixedHolidayEntry>) -> Result<FixedHolidayTable, HolidayRuleError> {
        let mut table = FixedHolidayTable { 
            holidays: Vec::with_capacity(entries.len()) 
        };
        for entry in entries {
            table.push(FixedDateHoliday::new(entry.month, entry.day, entry.name)?)?;
        }
        Ok(table)
    }

    /// Kenya's statutory fixed holidays without Mazingira Day.
    pub fn kenya() -> FixedHolidayTable {
        FixedHolidayTable { 
            holidays: KENYA_FIXED_HOLIDAYS
                .iter()
                .map(|&(month, day, name)| Self::known(month, day, name))
                .collect()
        }
    }

    /// Kenya's fixed holidays with Mazingira Day (Oct 10) placed in date order.
    pub fn kenya_with_mazingira_day() -> FixedHolidayTable {
        Self::kenya().with_mazingira_day(true)
    }

    /// Adds or removes Mazingira Day. Adding it twice is a no-op.
    pub fn with_mazingira_day(mut self, include: bool) -> FixedHolidayTable {
        let (month, day, name) = MAZINGIRA_DAY;
        let position = self.holidays
            .iter()
            .position(|h| h.month() == month && h.day() == day);
        match (include, position) {
            (true, None) => {
                let at = self.holidays
                    .iter()
                    .position(|h| (h.month(), h.day()) > (month, day))
                    .unwrap_or(self.holidays.len());
                self.holidays.insert(at, Self::known(month, day, name));
            },
            (false, Some(index)) => {
                self.holidays.remove(index);
            },
            _ => {}
        }
        self
    }

    pub fn push(&mut self, holiday: FixedDateHoliday) -> Result<(), HolidayRuleError> {
        if let Some(existing) = self.holidays
            .iter()
            .find(|h| h.month() == holiday.month() && h.day() == holiday.day()) {
            return Err(HolidayRuleError::DuplicateDate { 
                month: holiday.month(), 
                day: holiday.day(), 
                first: existing.name().to_owned(), 
                second: holiday.name().to_owned() 
            });
        }
        self.holidays.push(holiday);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, FixedDateHoliday> {
        self.holidays.iter()
    }

    pub fn entries(&self) -> Vec<FixedHolidayEntry> {
        self.holidays
            .iter()
            .map(|h| FixedHolidayEntry { 
                month: h.month(), 
                day: h.day(), 
                name: h.name().to_owned() 
            })
            .collect()
    }

    // Constant tables above are valid by construction.
    fn known(month: u32, day: u32, name: &str) -> FixedDateHoliday {
        match FixedDateHoliday::new(month, day, name) {
            Ok(holiday) => holiday,
            Err(error) => unreachable!("built-in holiday table is invalid: {error}")
        }
    }
}

impl Default for FixedHolidayTable {
    fn default() -> Self {
        FixedHolidayTable::kenya()
    }
}

use std::collections::HashSet;
use std::slice::Iter;

use chrono::{
    Datelike, 
    NaiveDate
};
use serde::Serialize;
use tracing::warn;

use super::holiday::{
    Holiday, 
    HolidayKind
};

/// The public holidays of a single calendar year, in insertion order.
///
/// Every holiday in the set falls inside `year` and no two share a date.
/// Insertion order is kept so that listings and serialized output are stable.
#[derive(PartialEq, Eq, Clone, Debug, Serialize)]
pub struct HolidaySet {
    year: i32,
    holidays: Vec<Holiday>
}

impl HolidaySet {
    pub fn new(year: i32) -> HolidaySet {
        HolidaySet { 
            year, 
            holidays: Vec::with_capacity(10) 
        }
    }

    /// Appends `holiday`, returning `false` if it was rejected because it
    /// belongs to another year or its date is already taken.
    pub fn insert(&mut self, holiday: Holiday) -> bool {
        if holiday.date().year() != self.year {
            warn!(
                year = self.year,
                date = %holiday.date(),
                name = holiday.name(),
                "holiday falls outside its year, dropped"
            );
            return false;
        }

        if let Some(existing) = self.get(&holiday.date()) {
            warn!(
                date = %holiday.date(),
                kept = existing.name(),
                dropped = holiday.name(),
                "two holidays share a date, keeping the first"
            );
            return false;
        }

        self.holidays.push(holiday);
        true
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    pub fn iter(&self) -> Iter<'_, Holiday> {
        self.holidays.iter()
    }

    pub fn contains(&self, d: &NaiveDate) -> bool {
        self.holidays.iter().any(|h| h.date() == *d)
    }

    pub fn get(&self, d: &NaiveDate) -> Option<&Holiday> {
        self.holidays.iter().find(|h| h.date() == *d)
    }

    pub fn name_of(&self, d: &NaiveDate) -> Option<&str> {
        self.get(d).map(|h| h.name())
    }

    pub fn dates(&self) -> HashSet<NaiveDate> {
        self.holidays.iter().map(|h| h.date()).collect()
    }

    pub fn of_kind(&self, kind: HolidayKind) -> impl Iterator<Item = &Holiday> {
        self.holidays.iter().filter(move |h| h.kind() == kind)
    }
}

impl<'a> IntoIterator for &'a HolidaySet {
    type Item = &'a Holiday;
    type IntoIter = Iter<'a, Holiday>;

    fn into_iter(self) -> Self::IntoIter {
        self.holidays.iter()
    }
}

use std::ops::RangeInclusive;

use chrono::{
    Datelike,
    Days, 
    NaiveDate
};

/// Inclusive span of calendar dates.
///
/// A range whose start lies after its end is empty: it yields no dates and
/// touches no years. Callers asking for "leave from Friday to Thursday" get
/// zero days back rather than an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeOfDates {
    start_date: NaiveDate,
    end_date: NaiveDate
}

impl RangeOfDates {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> RangeOfDates {
        RangeOfDates { start_date, end_date }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn is_empty(&self) -> bool {
        self.start_date > self.end_date
    }

    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            ((self.end_date - self.start_date).num_days() + 1) as usize
        }
    }

    pub fn contain(&self, d: NaiveDate) -> bool {
        (d >= self.start_date) && (d <= self.end_date)
    }

    /// Every calendar year the range touches, in ascending order.
    pub fn years(&self) -> RangeInclusive<i32> {
        let (first, last) = if self.is_empty() {
            (1, 0)
        } else {
            (self.start_date.year(), self.end_date.year())
        };
        first..=last
    }

    pub fn iter(&self) -> RangeOfDatesIterator<'_> {
        RangeOfDatesIterator {
            range_of_dates: self,
            index: 0,
            len: self.len()
        }
    }

    pub fn to_vec(&self) -> Vec<NaiveDate> {
        self.iter().collect()
    }
}

impl<'a> IntoIterator for &'a RangeOfDates {
    type Item = NaiveDate;
    type IntoIter = RangeOfDatesIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct RangeOfDatesIterator<'a> {
    range_of_dates: &'a RangeOfDates,
    index: usize,
    len: usize
}

impl<'a> Iterator for RangeOfDatesIterator<'a> {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.len {
            let result = self.range_of_dates.start_date + Days::new(self.index as u64);
            self.index += 1;
            Some(result)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for RangeOfDatesIterator<'a> {}


#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn inclusive_range_yields_every_day() {
        let range = RangeOfDates::new(ymd(2025, 10, 10), ymd(2025, 10, 23));
        assert_eq!(range.len(), 14);
        let dates = range.to_vec();
        assert_eq!(dates.first(), Some(&ymd(2025, 10, 10)));
        assert_eq!(dates.last(), Some(&ymd(2025, 10, 23)));
    }

    #[test]
    fn single_day_range() {
        let d = ymd(2025, 3, 3);
        let range = RangeOfDates::new(d, d);
        assert_eq!(range.to_vec(), vec![d]);
        assert_eq!(range.years(), 2025..=2025);
    }

    #[test]
    fn inverted_range_is_empty() {
        let range = RangeOfDates::new(ymd(2025, 10, 23), ymd(2025, 10, 10));
        assert!(range.is_empty());
        assert_eq!(range.len(), 0);
        assert_eq!(range.iter().count(), 0);
        assert_eq!(range.years().count(), 0);
    }

    #[test]
    fn years_cover_every_intervening_year() {
        let range = RangeOfDates::new(ymd(2023, 12, 30), ymd(2026, 1, 2));
        assert_eq!(range.years().collect::<Vec<_>>(), vec![2023, 2024, 2025, 2026]);
    }

    #[test]
    fn range_crosses_leap_day() {
        let range = RangeOfDates::new(ymd(2024, 2, 28), ymd(2024, 3, 1));
        assert_eq!(range.to_vec(), vec![ymd(2024, 2, 28), ymd(2024, 2, 29), ymd(2024, 3, 1)]);
        assert!(range.contain(ymd(2024, 2, 29)));
        assert!(!range.contain(ymd(2024, 3, 2)));
    }
}

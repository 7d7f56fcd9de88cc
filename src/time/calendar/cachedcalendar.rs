use std::collections::HashMap;
use std::sync::{
    PoisonError, 
    RwLock
};

use chrono::NaiveDate;
use tracing::trace;

use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::holidayset::HolidaySet;

/// Memoizes another calendar's holiday sets per year.
///
/// Holiday sets are pure functions of the year, so the cache never needs
/// invalidation. Two threads missing on the same year may both compute it;
/// the second write stores an identical set.
pub struct CachedCalendar<C: HolidayCalendar> {
    raw_calendar: C,
    cache: RwLock<HashMap<i32, HolidaySet>>
}

impl<C: HolidayCalendar> CachedCalendar<C> {
    pub fn new(raw_calendar: C) -> CachedCalendar<C> {
        CachedCalendar {
            raw_calendar,
            cache: RwLock::new(HashMap::new())
        }
    }

    /// Builds the cache and fills it for `[start_year, end_year]` up front.
    pub fn precomputed(raw_calendar: C, start_year: i32, end_year: i32) -> CachedCalendar<C> {
        let calendar = CachedCalendar::new(raw_calendar);
        {
            let mut cache = calendar.cache.write().unwrap_or_else(PoisonError::into_inner);
            for year in start_year..=end_year {
                cache.insert(year, calendar.raw_calendar.holidays_for_year(year));
            }
        }
        calendar
    }

    pub fn raw_calendar(&self) -> &C {
        &self.raw_calendar
    }

    pub fn cached_years(&self) -> usize {
        self.cache.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn clear(&self) {
        self.cache.write().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl<C: HolidayCalendar> HolidayCalendar for CachedCalendar<C> {
    fn name(&self) -> &str {
        self.raw_calendar.name()
    }

    fn holidays_for_year(&self, year: i32) -> HolidaySet {
        if let Some(set) = self.cache.read().unwrap_or_else(PoisonError::into_inner).get(&year) {
            trace!(calendar = self.name(), year, "holiday cache hit");
            return set.clone();
        }

        // 持鎖外計算，允許其他執行緒並發讀取
        trace!(calendar = self.name(), year, "holiday cache miss");
        let set = self.raw_calendar.holidays_for_year(year);
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(year, set.clone());
        set
    }

    #[inline]
    fn is_weekend(&self, d: NaiveDate) -> bool {
        self.raw_calendar.is_weekend(d)
    }
}

use std::collections::HashSet;

use chrono::Weekday;

/// Weekend days as a bitmask: Mon(0), Tue(1), ..., Sun(6).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeekendMask(u8);

impl WeekendMask {
    pub fn new(weekends: &HashSet<Weekday>) -> Self {
        let mut mask = 0u8;
        for &weekday in weekends {
            mask |= 1u8 << weekday.num_days_from_monday();
        }
        WeekendMask(mask)
    }

    pub const fn saturday_sunday() -> Self {
        WeekendMask((1u8 << 5) | (1u8 << 6))
    }

    #[inline]
    pub fn is_weekend(&self, weekday: Weekday) -> bool {
        let bit = 1u8 << weekday.num_days_from_monday();
        (self.0 & bit) != 0
    }

    /// Weekdays left over for work, 0 when every day is a weekend day.
    pub fn business_days_per_week(&self) -> u32 {
        7 - (self.0 & 0b0111_1111).count_ones()
    }

    pub fn has_business_days(&self) -> bool {
        self.business_days_per_week() > 0
    }

    pub fn to_hashset(&self) -> HashSet<Weekday> {
        let mut set = HashSet::new();
        for day in 0..7u8 {
            if (self.0 & (1u8 << day)) != 0 {
                if let Ok(weekday) = Weekday::try_from(day) {
                    set.insert(weekday);
                }
            }
        }
        set
    }
}

impl Default for WeekendMask {
    fn default() -> Self {
        WeekendMask::saturday_sunday()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weekend_is_saturday_and_sunday() {
        let mask = WeekendMask::default();
        assert!(mask.is_weekend(Weekday::Sat));
        assert!(mask.is_weekend(Weekday::Sun));
        assert!(!mask.is_weekend(Weekday::Fri));
        assert!(!mask.is_weekend(Weekday::Mon));
    }

    #[test]
    fn counts_business_days() {
        assert_eq!(WeekendMask::default().business_days_per_week(), 5);
        assert_eq!(WeekendMask::new(&HashSet::new()).business_days_per_week(), 7);

        let every_day: HashSet<Weekday> = (0..7u8).filter_map(|d| Weekday::try_from(d).ok()).collect();
        let mask = WeekendMask::new(&every_day);
        assert_eq!(mask.business_days_per_week(), 0);
        assert!(!mask.has_business_days());
    }

    #[test]
    fn hashset_round_trip() {
        let weekends: HashSet<Weekday> = [Weekday::Fri, Weekday::Sat].into_iter().collect();
        let mask = WeekendMask::new(&weekends);
        assert_eq!(mask.to_hashset(), weekends);
        assert_eq!(WeekendMask::new(&mask.to_hashset()), mask);
    }
}

use std::fmt;

use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::holiday::{
    Holiday, 
    HolidayKind
};
use crate::time::holidayset::HolidaySet;

/// A holiday set listed under its jurisdiction, fixed holidays first.
///
/// ```text
/// Kenya Public Holidays:
/// Fixed Holidays:
/// - 01 January 2025 (Wednesday): New Year's Day
/// ...
///
/// Variable Religious Holidays:
/// - 18 April 2025 (Friday): Good Friday
/// - 21 April 2025 (Monday): Easter Monday
/// ```
pub struct HolidayReport<'a> {
    jurisdiction: &'a str,
    holiday_set: &'a HolidaySet
}

impl<'a> HolidayReport<'a> {
    pub fn new(jurisdiction: &'a str, holiday_set: &'a HolidaySet) -> HolidayReport<'a> {
        HolidayReport { jurisdiction, holiday_set }
    }
}

impl fmt::Display for HolidayReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Public Holidays:", self.jurisdiction)?;
        writeln!(f, "Fixed Holidays:")?;
        for holiday in self.holiday_set.of_kind(HolidayKind::Fixed) {
            writeln!(f, "{}", render_holiday_line(holiday))?;
        }
        writeln!(f)?;
        writeln!(f, "Variable Religious Holidays:")?;
        for holiday in self.holiday_set.of_kind(HolidayKind::EasterRelated) {
            writeln!(f, "{}", render_holiday_line(holiday))?;
        }
        Ok(())
    }
}

pub fn render_holiday_report(jurisdiction: &str, holiday_set: &HolidaySet) -> String {
    HolidayReport::new(jurisdiction, holiday_set).to_string()
}

pub fn render_holiday_line(holiday: &Holiday) -> String {
    let date = holiday.date();
    format!("- {} ({}): {}", date.format("%d %B %Y"), date.format("%A"), holiday.name())
}

pub fn report_for_year<C: HolidayCalendar + ?Sized>(calendar: &C, year: i32) -> String {
    render_holiday_report(calendar.name(), &calendar.holidays_for_year(year))
}


#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::time::calendar::jurisdictioncalendar::JurisdictionCalendar;

    #[test]
    fn single_line_format() {
        let holiday = Holiday::new(
            NaiveDate::from_ymd_opt(2025, 10, 20).unwrap(),
            "Mashujaa Day",
            HolidayKind::Fixed
        );
        assert_eq!(render_holiday_line(&holiday), "- 20 October 2025 (Monday): Mashujaa Day");
    }

    #[test]
    fn report_writes_straight_into_a_formatter() {
        let set = JurisdictionCalendar::kenya_with_mazingira_day().holidays_for_year(2026);
        let report = format!("{}", HolidayReport::new("Kenya", &set));
        assert_eq!(report, render_holiday_report("Kenya", &set));
        assert!(report.contains("- 10 October 2026 (Saturday): Mazingira Day\n"));
        assert_eq!(report.lines().filter(|l| l.starts_with("- ")).count(), set.len());
    }

    #[test]
    fn kenya_2025_report() {
        let report = report_for_year(&JurisdictionCalendar::kenya(), 2025);
        let expected = "\
Kenya Public Holidays:
Fixed Holidays:
- 01 January 2025 (Wednesday): New Year's Day
- 01 May 2025 (Thursday): Labour Day
- 01 June 2025 (Sunday): Madaraka Day
- 20 October 2025 (Monday): Mashujaa Day
- 12 December 2025 (Friday): Jamhuri Day
- 25 December 2025 (Thursday): Christmas Day
- 26 December 2025 (Friday): Boxing Day

Variable Religious Holidays:
- 18 April 2025 (Friday): Good Friday
- 21 April 2025 (Monday): Easter Monday
";
        assert_eq!(report, expected);
    }
}

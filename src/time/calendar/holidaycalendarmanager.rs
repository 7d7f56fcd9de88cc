use std::collections::HashSet;
use std::sync::Arc;

use chrono::Weekday;
use serde::Deserialize;
use tracing::debug;

use crate::manager::manager::Manager;
use crate::manager::managererror::{
    ManagerError, 
    parse_json_value
};
use crate::time::calendar::cachedcalendar::CachedCalendar;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::weekendmask::WeekendMask;
use crate::time::calendar::jurisdictioncalendar::{
    JurisdictionCalendar,
    KENYA
};
use crate::time::recurringholiday::easterrelatedholiday::EasterRelatedHoliday;
use crate::time::recurringholiday::fixedholidaytable::{
    FixedHolidayEntry,
    FixedHolidayTable
};

pub const KENYA_WITH_MAZINGIRA_DAY: &str = "KenyaWithMazingiraDay";

#[derive(Deserialize)]
struct EasterRelatedHolidayJsonProp {
    shift_days: i64,
    name: String
}

#[derive(Deserialize)]
struct CacheJsonProp {
    apply: bool,
    #[serde(default)]
    start_year: Option<i32>,
    #[serde(default)]
    end_year: Option<i32>
}

fn default_weekends() -> HashSet<Weekday> {
    [Weekday::Sat, Weekday::Sun].into_iter().collect()
}

/// A calendar definition. Omitted holiday lists fall back to Kenya's.
#[derive(Deserialize)]
struct JurisdictionCalendarJsonProp {
    name: String,
    #[serde(default)]
    jurisdiction: Option<String>,
    #[serde(default = "default_weekends")]
    weekends: HashSet<Weekday>,
    #[serde(default)]
    fixed_holidays: Option<Vec<FixedHolidayEntry>>,
    /// Only touches the table when present; an explicit table is otherwise
    /// taken as written.
    #[serde(default)]
    include_mazingira_day: Option<bool>,
    #[serde(default)]
    easter_holidays: Option<Vec<EasterRelatedHolidayJsonProp>>,
    #[serde(default)]
    cache: Option<CacheJsonProp>
}

pub fn calendar_from_json(json_value: serde_json::Value) -> Result<(String, Arc<dyn HolidayCalendar>), ManagerError> {
    let json_prop: JurisdictionCalendarJsonProp = parse_json_value(json_value)?;

    let mut fixed_holidays = match json_prop.fixed_holidays {
        Some(entries) => FixedHolidayTable::new(entries)?,
        None => FixedHolidayTable::kenya()
    };
    if let Some(include) = json_prop.include_mazingira_day {
        fixed_holidays = fixed_holidays.with_mazingira_day(include);
    }

    let weekends = WeekendMask::new(&json_prop.weekends);
    if !weekends.has_business_days() {
        return Err(ManagerError::NoBusinessDays(json_prop.name));
    }

    let easter_holidays = match json_prop.easter_holidays {
        Some(props) => props
            .into_iter()
            .map(|p| EasterRelatedHoliday::new(p.shift_days, p.name))
            .collect::<Result<Vec<_>, _>>()?,
        None => vec![
            EasterRelatedHoliday::good_friday(), 
            EasterRelatedHoliday::easter_monday()
        ]
    };

    let calendar = JurisdictionCalendar::new(
        json_prop.jurisdiction.unwrap_or_else(|| KENYA.to_owned()),
        json_prop.weekends,
        fixed_holidays,
        easter_holidays
    );
    debug!(
        name = json_prop.name.as_str(),
        fixed = calendar.fixed_holidays().len(),
        movable = calendar.easter_holidays().len(),
        "parsed holiday calendar"
    );

    let calendar: Arc<dyn HolidayCalendar> = match json_prop.cache {
        Some(CacheJsonProp { apply: true, start_year: Some(start_year), end_year: Some(end_year) }) => {
            if start_year > end_year {
                return Err(ManagerError::InvalidCacheRange { 
                    name: json_prop.name, 
                    start_year, 
                    end_year 
                });
            }
            Arc::new(CachedCalendar::precomputed(calendar, start_year, end_year))
        },
        Some(CacheJsonProp { apply: true, .. }) => Arc::new(CachedCalendar::new(calendar)),
        _ => Arc::new(calendar)
    };
    Ok((json_prop.name, calendar))
}

pub struct HolidayCalendarManager;

impl HolidayCalendarManager {
    pub fn new() -> Manager<Arc<dyn HolidayCalendar>> {
        Manager::new(calendar_from_json)
    }

    /// Registry preloaded with `Kenya` and `KenyaWithMazingiraDay`.
    pub fn with_builtin_calendars() -> Manager<Arc<dyn HolidayCalendar>> {
        let mut manager = Self::new();
        manager.insert(KENYA, Arc::new(JurisdictionCalendar::kenya()) as Arc<dyn HolidayCalendar>);
        manager.insert(
            KENYA_WITH_MAZINGIRA_DAY, 
            Arc::new(JurisdictionCalendar::kenya_with_mazingira_day()) as Arc<dyn HolidayCalendar>
        );
        manager
    }
}

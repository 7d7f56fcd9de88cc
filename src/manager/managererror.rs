use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::time::recurringholiday::holidayruleerror::HolidayRuleError;

#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("cannot read configuration: {0}")]
    IOError(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("key '{0}' not found")]
    NameNotFoundError(String),

    #[error(transparent)]
    HolidayRuleError(#[from] HolidayRuleError),

    #[error("calendar '{0}' has no business days: every weekday is a weekend day")]
    NoBusinessDays(String),

    #[error("calendar '{name}': cache start year {start_year} is after end year {end_year}")]
    InvalidCacheRange { name: String, start_year: i32, end_year: i32 }
}

pub fn parse_json_value<T>(json_value: serde_json::Value) -> Result<T, ManagerError> 
    where T: DeserializeOwned {
    Ok(serde_json::from_value(json_value)?)
}

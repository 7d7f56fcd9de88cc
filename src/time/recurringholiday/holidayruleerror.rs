use thiserror::Error;

/// Rejected holiday rule definitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HolidayRuleError {
    #[error("holiday '{name}': month {month} is not in 1..=12")]
    InvalidMonth { name: String, month: u32 },

    #[error("holiday '{name}': day {day} does not exist in month {month}")]
    InvalidDay { name: String, month: u32, day: u32 },

    #[error("holiday name must not be empty")]
    EmptyName,

    #[error("'{first}' and '{second}' are both on {month:02}-{day:02}")]
    DuplicateDate { month: u32, day: u32, first: String, second: String }
}

use chrono::NaiveDate;
use serde::{
    Serialize,
    Deserialize
};

/// How a holiday's date is derived each year.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash, Serialize, Deserialize)]
pub enum HolidayKind {
    /// Same month and day every year.
    Fixed,
    /// A day offset from Easter Sunday.
    EasterRelated
}

/// A public holiday observed on one concrete date.
#[derive(PartialEq, Eq, Clone, Debug, Hash, Serialize, Deserialize)]
pub struct Holiday {
    date: NaiveDate,
    name: String,
    kind: HolidayKind
}

impl Holiday {
    pub fn new(date: NaiveDate, name: impl Into<String>, kind: HolidayKind) -> Holiday {
        Holiday { 
            date, 
            name: name.into(), 
            kind 
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> HolidayKind {
        self.kind
    }
}

pub mod configuration;

pub mod leave {
    pub mod leavesummary;
}

pub mod manager {
    pub mod managererror;
    pub mod manager;
}

pub mod time {
    pub mod utility;
    pub mod rangeofdates;
    pub mod easter;
    pub mod holiday;
    pub mod holidayset;
    pub mod holidayreport;
    pub mod kenya;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod holidayruleerror;
        pub mod fixeddateholiday;
        pub mod fixedholidaytable;
        pub mod easterrelatedholiday;
    }

    pub mod calendar {
        pub mod weekendmask;
        pub mod holidaycalendar;
        pub mod jurisdictioncalendar;
        pub mod cachedcalendar;
        pub mod holidaycalendarmanager;
    }
}

pub use time::kenya::{
    easter,
    holidays_for_year,
    working_days
};

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use crate::manager::managererror::ManagerError;
use crate::manager::manager::Manager;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::holidaycalendarmanager::HolidayCalendarManager;


#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    holiday_calendar: Vec<serde_json::Value>
}

/// Named holiday calendars available to the application.
///
/// Starts with the built-in `Kenya` and `KenyaWithMazingiraDay` calendars;
/// definitions loaded from JSON are added alongside them and replace built-ins
/// of the same name.
pub struct Configuration {
    holiday_calendar_manager: Manager<Arc<dyn HolidayCalendar>>
}


impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            holiday_calendar_manager: HolidayCalendarManager::with_builtin_calendars()
        }
    }

    pub fn holiday_calendar_manager(&self) -> &Manager<Arc<dyn HolidayCalendar>> {
        &self.holiday_calendar_manager
    }

    pub fn holiday_calendar(&self, name: &str) -> Result<Arc<dyn HolidayCalendar>, ManagerError> {
        self.holiday_calendar_manager.get(name)
    }

    pub fn from_reader(&mut self, file_path: impl AsRef<Path>) -> Result<(), ManagerError> {
        let file_path = file_path.as_ref();
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        let names = self.holiday_calendar_manager.insert_obj_from_json_vec(&json_prop.holiday_calendar)?;
        info!(path = %file_path.display(), calendars = ?names, "loaded holiday calendars");
        Ok(())
    }

    pub fn from_json_str(&mut self, json: &str) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(json)?;
        let names = self.holiday_calendar_manager.insert_obj_from_json_vec(&json_prop.holiday_calendar)?;
        info!(calendars = ?names, "loaded holiday calendars");
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}

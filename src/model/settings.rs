use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// Organization-wide configuration. Read-only for this crate: it feeds
/// punch-status derivation but is never mutated here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub work_start: NaiveTime,
    pub grace_minutes: u32,
    pub working_days: Vec<Weekday>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            work_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            grace_minutes: 15,
            working_days: vec![
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
            ],
        }
    }
}

impl Settings {
    pub fn is_working_day(&self, day: Weekday) -> bool {
        self.working_days.contains(&day)
    }
}

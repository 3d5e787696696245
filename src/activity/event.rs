use super::{ActivityCore, LongDisplayRow, ShortDisplayRow};
use crate::conflict::{self, Conflict, ConflictError};
use crate::meeting::{DayAlphabet, MeetingDays, TimeRange};
use crate::validation::{self, ActivityError};
use crate::Activity;
use serde::Serialize;
use std::fmt;

/// A user-defined activity that repeats every `weekly_repeat` weeks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Event {
    #[serde(flatten)]
    core: ActivityCore,
    weekly_repeat: i32,
    event_details: String,
}

impl Event {
    pub fn new(
        title: impl Into<String>,
        meeting_days: &str,
        start_time: i32,
        end_time: i32,
        weekly_repeat: i32,
        event_details: impl Into<String>,
    ) -> Result<Self, ActivityError> {
        let core = ActivityCore::new(title, meeting_days, start_time, end_time, DayAlphabet::Event)?;
        validation::validate_weekly_repeat(weekly_repeat)?;
        Ok(Self {
            core,
            weekly_repeat,
            event_details: event_details.into(),
        })
    }

    pub(crate) fn core(&self) -> &ActivityCore {
        &self.core
    }

    pub fn title(&self) -> &str {
        self.core.title()
    }

    pub fn meeting_days(&self) -> &MeetingDays {
        self.core.meeting_days()
    }

    pub fn time_range(&self) -> TimeRange {
        self.core.time_range()
    }

    pub fn weekly_repeat(&self) -> i32 {
        self.weekly_repeat
    }

    pub fn event_details(&self) -> &str {
        &self.event_details
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), ActivityError> {
        self.core.set_title(title)
    }

    pub fn set_meeting(
        &mut self,
        meeting_days: &str,
        start_time: i32,
        end_time: i32,
    ) -> Result<(), ActivityError> {
        self.core
            .set_meeting(meeting_days, start_time, end_time, DayAlphabet::Event)
    }

    pub fn set_activity_time(&mut self, start_time: i32, end_time: i32) -> Result<(), ActivityError> {
        self.core.set_time(start_time, end_time)
    }

    pub fn set_weekly_repeat(&mut self, weekly_repeat: i32) -> Result<(), ActivityError> {
        validation::validate_weekly_repeat(weekly_repeat)?;
        self.weekly_repeat = weekly_repeat;
        Ok(())
    }

    pub fn set_event_details(&mut self, event_details: impl Into<String>) {
        self.event_details = event_details.into();
    }

    pub fn meeting_string(&self) -> String {
        format!(
            "{} (every {} weeks)",
            self.core.meeting_string(),
            self.weekly_repeat
        )
    }

    pub fn short_display(&self) -> ShortDisplayRow {
        [
            String::new(),
            String::new(),
            self.title().to_string(),
            self.meeting_string(),
        ]
    }

    pub fn long_display(&self) -> LongDisplayRow {
        [
            String::new(),
            String::new(),
            self.title().to_string(),
            String::new(),
            String::new(),
            self.meeting_string(),
            self.event_details.clone(),
        ]
    }

    pub fn is_duplicate(&self, other: &Event) -> bool {
        self.title() == other.title()
    }

    /// `title,meetingDays,start,end,weeklyRepeat,eventDetails`
    pub fn to_record(&self) -> Vec<String> {
        let time = self.time_range();
        vec![
            self.title().to_string(),
            self.meeting_days().to_string(),
            time.start().to_string(),
            time.end().to_string(),
            self.weekly_repeat.to_string(),
            self.event_details.clone(),
        ]
    }
}

impl Conflict for Event {
    fn check_conflict(&self, other: &Activity) -> Result<(), ConflictError> {
        conflict::check_meeting_conflict(
            self.meeting_days(),
            &self.time_range(),
            other.meeting_days(),
            &other.time_range(),
        )
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_record().join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekend_codes_are_allowed_but_arranged_is_not() {
        assert!(Event::new("Hike", "SU", 800, 1200, 2, "").is_ok());
        assert_eq!(
            Event::new("Hike", "A", 0, 0, 1, "").unwrap_err(),
            ActivityError::InvalidDays {
                days: "A".to_string()
            }
        );
    }

    #[test]
    fn meeting_string_carries_repeat_interval() {
        let event = Event::new("Exercise", "MWF", 800, 900, 1, "Gym").unwrap();
        assert_eq!(event.meeting_string(), "MWF 8:00AM-9:00AM (every 1 weeks)");
        assert_eq!(event.to_string(), "Exercise,MWF,800,900,1,Gym");
    }

    #[test]
    fn weekly_repeat_setter_validates() {
        let mut event = Event::new("Exercise", "MWF", 800, 900, 1, "").unwrap();
        assert!(event.set_weekly_repeat(5).is_err());
        assert_eq!(event.weekly_repeat(), 1);
        event.set_weekly_repeat(4).unwrap();
        assert_eq!(event.weekly_repeat(), 4);
    }
}

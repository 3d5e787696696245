mod course;
mod event;

pub use course::Course;
pub use event::Event;

use crate::conflict::{self, Conflict, ConflictError};
use crate::meeting::{self, DayAlphabet, MeetingDays, TimeRange};
use crate::validation::{self, ActivityError};
use serde::Serialize;
use std::fmt;

pub const SHORT_DISPLAY_LEN: usize = 4;
pub const LONG_DISPLAY_LEN: usize = 7;

/// Name, section, title, meeting string.
pub type ShortDisplayRow = [String; SHORT_DISPLAY_LEN];
/// Name, section, title, credits, instructor, meeting string, event details.
pub type LongDisplayRow = [String; LONG_DISPLAY_LEN];

/// Title and meeting slot shared by every activity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ActivityCore {
    title: String,
    meeting_days: MeetingDays,
    time_range: TimeRange,
}

impl ActivityCore {
    pub(crate) fn new(
        title: impl Into<String>,
        meeting_days: &str,
        start: i32,
        end: i32,
        alphabet: DayAlphabet,
    ) -> Result<Self, ActivityError> {
        let title = title.into();
        validation::validate_title(&title)?;
        let (meeting_days, time_range) = Self::meeting_slot(meeting_days, start, end, alphabet)?;
        Ok(Self {
            title,
            meeting_days,
            time_range,
        })
    }

    fn meeting_slot(
        meeting_days: &str,
        start: i32,
        end: i32,
        alphabet: DayAlphabet,
    ) -> Result<(MeetingDays, TimeRange), ActivityError> {
        let days = MeetingDays::parse(meeting_days, alphabet)?;
        let time = TimeRange::new(start, end, days.is_arranged())?;
        Ok((days, time))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn meeting_days(&self) -> &MeetingDays {
        &self.meeting_days
    }

    pub fn time_range(&self) -> TimeRange {
        self.time_range
    }

    pub fn meeting_string(&self) -> String {
        meeting::render_meeting_string(&self.meeting_days, &self.time_range)
    }

    pub(crate) fn set_title(&mut self, title: impl Into<String>) -> Result<(), ActivityError> {
        let title = title.into();
        validation::validate_title(&title)?;
        self.title = title;
        Ok(())
    }

    /// Days and times are replaced together so an arranged slot can never carry a clock time.
    pub(crate) fn set_meeting(
        &mut self,
        meeting_days: &str,
        start: i32,
        end: i32,
        alphabet: DayAlphabet,
    ) -> Result<(), ActivityError> {
        let (days, time) = Self::meeting_slot(meeting_days, start, end, alphabet)?;
        self.meeting_days = days;
        self.time_range = time;
        Ok(())
    }

    pub(crate) fn set_time(&mut self, start: i32, end: i32) -> Result<(), ActivityError> {
        self.time_range = TimeRange::new(start, end, self.meeting_days.is_arranged())?;
        Ok(())
    }
}

/// A scheduled item: either a catalog course or a user-defined event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Activity {
    Course(Course),
    Event(Event),
}

impl Activity {
    fn core(&self) -> &ActivityCore {
        match self {
            Activity::Course(course) => course.core(),
            Activity::Event(event) => event.core(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Activity::Course(_) => "course",
            Activity::Event(_) => "event",
        }
    }

    pub fn title(&self) -> &str {
        self.core().title()
    }

    pub fn meeting_days(&self) -> &MeetingDays {
        self.core().meeting_days()
    }

    pub fn time_range(&self) -> TimeRange {
        self.core().time_range()
    }

    pub fn meeting_string(&self) -> String {
        match self {
            Activity::Course(course) => course.meeting_string(),
            Activity::Event(event) => event.meeting_string(),
        }
    }

    pub fn short_display(&self) -> ShortDisplayRow {
        match self {
            Activity::Course(course) => course.short_display(),
            Activity::Event(event) => event.short_display(),
        }
    }

    pub fn long_display(&self) -> LongDisplayRow {
        match self {
            Activity::Course(course) => course.long_display(),
            Activity::Event(event) => event.long_display(),
        }
    }

    /// Courses match on name, events on title; a course never duplicates an event.
    pub fn is_duplicate(&self, other: &Activity) -> bool {
        match (self, other) {
            (Activity::Course(a), Activity::Course(b)) => a.is_duplicate(b),
            (Activity::Event(a), Activity::Event(b)) => a.is_duplicate(b),
            _ => false,
        }
    }

    /// Fields in export order.
    pub fn to_record(&self) -> Vec<String> {
        match self {
            Activity::Course(course) => course.to_record(),
            Activity::Event(event) => event.to_record(),
        }
    }

    pub fn as_course(&self) -> Option<&Course> {
        match self {
            Activity::Course(course) => Some(course),
            Activity::Event(_) => None,
        }
    }

    pub fn as_event(&self) -> Option<&Event> {
        match self {
            Activity::Event(event) => Some(event),
            Activity::Course(_) => None,
        }
    }
}

impl Conflict for Activity {
    fn check_conflict(&self, other: &Activity) -> Result<(), ConflictError> {
        conflict::check_meeting_conflict(
            self.meeting_days(),
            &self.time_range(),
            other.meeting_days(),
            &other.time_range(),
        )
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Activity::Course(course) => fmt::Display::fmt(course, f),
            Activity::Event(event) => fmt::Display::fmt(event, f),
        }
    }
}

impl From<Course> for Activity {
    fn from(value: Course) -> Self {
        Activity::Course(value)
    }
}

impl From<Event> for Activity {
    fn from(value: Event) -> Self {
        Activity::Event(value)
    }
}

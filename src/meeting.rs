use crate::validation::{self, ARRANGED, ActivityError, HOUR_FACTOR};
use chrono::{NaiveTime, Weekday};
use serde::Serialize;
use std::fmt;

const NOON: i32 = 1200;
const LAST_NOON_MINUTE: i32 = 1259;

/// Day codes a variant may use when describing when it meets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayAlphabet {
    /// `M T W H F`, plus the standalone arranged sentinel `A`.
    Course,
    /// `M T W H F S U`; events always meet at a fixed time.
    Event,
}

impl DayAlphabet {
    pub fn codes(self) -> &'static str {
        match self {
            DayAlphabet::Course => "MTWHF",
            DayAlphabet::Event => "MTWHFSU",
        }
    }

    pub fn allows_arranged(self) -> bool {
        matches!(self, DayAlphabet::Course)
    }
}

/// A validated, non-empty string of meeting day codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MeetingDays(String);

impl MeetingDays {
    pub fn parse(days: &str, alphabet: DayAlphabet) -> Result<Self, ActivityError> {
        validation::validate_meeting_days(days, alphabet.codes(), alphabet.allows_arranged())?;
        Ok(Self(days.to_string()))
    }

    pub fn arranged() -> Self {
        Self(ARRANGED.to_string())
    }

    pub fn is_arranged(&self) -> bool {
        self.0.starts_with(ARRANGED)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn codes(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }

    /// Calendar weekdays covered by these codes, in code order. Arranged maps to nothing.
    pub fn weekdays(&self) -> Vec<Weekday> {
        self.codes().filter_map(weekday_for_code).collect()
    }

    pub fn meets_on(&self, weekday: Weekday) -> bool {
        self.codes()
            .any(|code| weekday_for_code(code) == Some(weekday))
    }
}

impl fmt::Display for MeetingDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn weekday_for_code(code: char) -> Option<Weekday> {
    match code {
        'M' => Some(Weekday::Mon),
        'T' => Some(Weekday::Tue),
        'W' => Some(Weekday::Wed),
        'H' => Some(Weekday::Thu),
        'F' => Some(Weekday::Fri),
        'S' => Some(Weekday::Sat),
        'U' => Some(Weekday::Sun),
        _ => None,
    }
}

pub fn code_for_weekday(weekday: Weekday) -> char {
    match weekday {
        Weekday::Mon => 'M',
        Weekday::Tue => 'T',
        Weekday::Wed => 'W',
        Weekday::Thu => 'H',
        Weekday::Fri => 'F',
        Weekday::Sat => 'S',
        Weekday::Sun => 'U',
    }
}

/// Start and end of a meeting in 24-hour `HHMM` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TimeRange {
    start: i32,
    end: i32,
}

impl TimeRange {
    pub fn new(start: i32, end: i32, is_arranged: bool) -> Result<Self, ActivityError> {
        validation::validate_time(start, end, is_arranged)?;
        Ok(Self { start, end })
    }

    pub const fn arranged() -> Self {
        Self { start: 0, end: 0 }
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn end(&self) -> i32 {
        self.end
    }

    /// Inclusive on both ends: ranges that only touch at an endpoint still overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        let within = |value: i32, range: &TimeRange| value >= range.start && value <= range.end;
        within(other.start, self)
            || within(other.end, self)
            || within(self.start, other)
            || within(self.end, other)
    }

    pub fn start_time(&self) -> Option<NaiveTime> {
        to_naive_time(self.start)
    }

    pub fn end_time(&self) -> Option<NaiveTime> {
        to_naive_time(self.end)
    }
}

fn to_naive_time(value: i32) -> Option<NaiveTime> {
    let hour = u32::try_from(value / HOUR_FACTOR).ok()?;
    let minute = u32::try_from(value % HOUR_FACTOR).ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Renders an `HHMM` value as `H:MMAM` / `H:MMPM`.
///
/// Values from 1200 through 1259 keep an hour digit of `0`: `1230` renders as `0:30PM`.
pub fn format_clock(value: i32) -> String {
    let hour = if value > LAST_NOON_MINUTE {
        (value - NOON) / HOUR_FACTOR
    } else if value >= NOON {
        0
    } else {
        value / HOUR_FACTOR
    };
    let suffix = if value < NOON { "AM" } else { "PM" };
    format!("{hour}:{:02}{suffix}", value % HOUR_FACTOR)
}

pub fn render_meeting_string(days: &MeetingDays, time: &TimeRange) -> String {
    if days.is_arranged() {
        return "Arranged".to_string();
    }
    format!(
        "{days} {}-{}",
        format_clock(time.start),
        format_clock(time.end)
    )
}

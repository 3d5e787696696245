use super::{ActivityCore, LongDisplayRow, ShortDisplayRow};
use crate::conflict::{self, Conflict, ConflictError};
use crate::meeting::{DayAlphabet, MeetingDays, TimeRange};
use crate::validation::{self, ActivityError};
use crate::Activity;
use serde::Serialize;
use std::fmt;

/// A catalog course offering: one section of a course, with its meeting slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Course {
    name: String,
    #[serde(flatten)]
    core: ActivityCore,
    section: String,
    credits: i32,
    instructor_id: String,
}

impl Course {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        section: impl Into<String>,
        credits: i32,
        instructor_id: impl Into<String>,
        meeting_days: &str,
        start_time: i32,
        end_time: i32,
    ) -> Result<Self, ActivityError> {
        let core = ActivityCore::new(title, meeting_days, start_time, end_time, DayAlphabet::Course)?;

        let name = name.into();
        let section = section.into();
        let instructor_id = instructor_id.into();
        validation::validate_course_name(&name)?;
        validation::validate_section(&section)?;
        validation::validate_credits(credits)?;
        validation::validate_instructor_id(&instructor_id)?;

        Ok(Self {
            name,
            core,
            section,
            credits,
            instructor_id,
        })
    }

    /// Builds a course with no fixed meeting time; start and end are pinned to zero.
    pub fn arranged(
        name: impl Into<String>,
        title: impl Into<String>,
        section: impl Into<String>,
        credits: i32,
        instructor_id: impl Into<String>,
        meeting_days: &str,
    ) -> Result<Self, ActivityError> {
        Self::new(name, title, section, credits, instructor_id, meeting_days, 0, 0)
    }

    pub(crate) fn core(&self) -> &ActivityCore {
        &self.core
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        self.core.title()
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn credits(&self) -> i32 {
        self.credits
    }

    pub fn instructor_id(&self) -> &str {
        &self.instructor_id
    }

    pub fn meeting_days(&self) -> &MeetingDays {
        self.core.meeting_days()
    }

    pub fn time_range(&self) -> TimeRange {
        self.core.time_range()
    }

    pub fn start_time(&self) -> i32 {
        self.core.time_range().start()
    }

    pub fn end_time(&self) -> i32 {
        self.core.time_range().end()
    }

    pub fn is_arranged(&self) -> bool {
        self.core.meeting_days().is_arranged()
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
            .set_meeting(meeting_days, start_time, end_time, DayAlphabet::Course)
    }

    pub fn set_activity_time(&mut self, start_time: i32, end_time: i32) -> Result<(), ActivityError> {
        self.core.set_time(start_time, end_time)
    }

    pub fn set_section(&mut self, section: impl Into<String>) -> Result<(), ActivityError> {
        let section = section.into();
        validation::validate_section(&section)?;
        self.section = section;
        Ok(())
    }

    pub fn set_credits(&mut self, credits: i32) -> Result<(), ActivityError> {
        validation::validate_credits(credits)?;
        self.credits = credits;
        Ok(())
    }

    pub fn set_instructor_id(&mut self, instructor_id: impl Into<String>) -> Result<(), ActivityError> {
        let instructor_id = instructor_id.into();
        validation::validate_instructor_id(&instructor_id)?;
        self.instructor_id = instructor_id;
        Ok(())
    }

    pub fn meeting_string(&self) -> String {
        self.core.meeting_string()
    }

    pub fn short_display(&self) -> ShortDisplayRow {
        [
            self.name.clone(),
            self.section.clone(),
            self.title().to_string(),
            self.meeting_string(),
        ]
    }

    pub fn long_display(&self) -> LongDisplayRow {
        [
            self.name.clone(),
            self.section.clone(),
            self.title().to_string(),
            self.credits.to_string(),
            self.instructor_id.clone(),
            self.meeting_string(),
            String::new(),
        ]
    }

    pub fn is_duplicate(&self, other: &Course) -> bool {
        self.name == other.name
    }

    /// `name,title,section,credits,instructorId,meetingDays[,start,end]`; arranged courses omit
    /// the times.
    pub fn to_record(&self) -> Vec<String> {
        let mut record = vec![
            self.name.clone(),
            self.title().to_string(),
            self.section.clone(),
            self.credits.to_string(),
            self.instructor_id.clone(),
            self.meeting_days().to_string(),
        ];
        if !self.is_arranged() {
            record.push(self.start_time().to_string());
            record.push(self.end_time().to_string());
        }
        record
    }
}

impl Conflict for Course {
    fn check_conflict(&self, other: &Activity) -> Result<(), ConflictError> {
        conflict::check_meeting_conflict(
            self.meeting_days(),
            &self.time_range(),
            other.meeting_days(),
            &other.time_range(),
        )
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_record().join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn csc216() -> Course {
        Course::new(
            "CSC216",
            "Software Development Fundamentals",
            "001",
            3,
            "sesmith5",
            "MW",
            1330,
            1445,
        )
        .unwrap()
    }

    #[test]
    fn setters_keep_prior_state_on_failure() {
        let mut course = csc216();
        let before = course.clone();

        assert!(course.set_section("01").is_err());
        assert!(course.set_credits(9).is_err());
        assert!(course.set_instructor_id("").is_err());
        assert!(course.set_title("").is_err());
        assert!(course.set_meeting("A", 1330, 1445).is_err());
        assert!(course.set_meeting("MX", 1330, 1445).is_err());
        assert!(course.set_activity_time(1500, 1400).is_err());
        assert_eq!(course, before);
    }

    #[test]
    fn switching_to_arranged_requires_zero_times() {
        let mut course = csc216();
        course.set_meeting("A", 0, 0).unwrap();
        assert!(course.is_arranged());
        assert_eq!(course.meeting_string(), "Arranged");
        assert!(course.set_activity_time(800, 900).is_err());
    }

    #[test]
    fn record_omits_times_only_when_arranged() {
        assert_eq!(
            csc216().to_string(),
            "CSC216,Software Development Fundamentals,001,3,sesmith5,MW,1330,1445"
        );
        let arranged =
            Course::arranged("CSC290", "Special Topics", "001", 3, "jdyoung2", "A").unwrap();
        assert_eq!(arranged.to_string(), "CSC290,Special Topics,001,3,jdyoung2,A");
    }
}

use crate::activity::{Activity, Course, Event, LongDisplayRow, ShortDisplayRow};
use crate::conflict::{Conflict, ConflictError};
use crate::persistence::{self, PersistenceResult};
use crate::validation::ActivityError;
use chrono::Weekday;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_SCHEDULE_TITLE: &str = "My Schedule";

/// Reasons an add or title change was refused. Every variant leaves the schedule untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulerError {
    #[error("You are already enrolled in {0}")]
    AlreadyEnrolled(String),
    #[error("You have already created an event called {0}")]
    DuplicateEvent(String),
    #[error("The {kind} cannot be added due to a conflict.")]
    Conflict {
        kind: &'static str,
        #[source]
        source: ConflictError,
    },
    #[error("Title cannot be null.")]
    InvalidTitle,
    #[error(transparent)]
    Activity(#[from] ActivityError),
}

/// Holds the read-only course catalog and the user's working schedule.
///
/// Every insertion keeps the schedule free of duplicates and time conflicts.
#[derive(Debug, Clone)]
pub struct Scheduler {
    title: String,
    course_catalog: Vec<Course>,
    schedule: Vec<Activity>,
}

impl Scheduler {
    /// Wraps an already de-duplicated catalog; lookups return the first `name`+`section` match.
    pub fn new(course_catalog: Vec<Course>) -> Self {
        Self {
            title: DEFAULT_SCHEDULE_TITLE.to_string(),
            course_catalog,
            schedule: Vec::new(),
        }
    }

    pub fn from_catalog_file<P: AsRef<Path>>(path: P) -> PersistenceResult<Self> {
        let catalog = persistence::read_course_records(path)?;
        Ok(Self::new(catalog))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// A missing title is rejected; an empty one is fine.
    pub fn set_title(&mut self, title: Option<&str>) -> Result<(), SchedulerError> {
        let title = title.ok_or(SchedulerError::InvalidTitle)?;
        self.title = title.to_string();
        Ok(())
    }

    pub fn course_catalog(&self) -> &[Course] {
        &self.course_catalog
    }

    pub fn schedule(&self) -> &[Activity] {
        &self.schedule
    }

    pub fn find_course_in_catalog(&self, name: &str, section: &str) -> Option<&Course> {
        self.course_catalog
            .iter()
            .find(|course| course.name() == name && course.section() == section)
    }

    /// Returns `Ok(false)` when the catalog has no such course.
    pub fn add_course(&mut self, name: &str, section: &str) -> Result<bool, SchedulerError> {
        let Some(course) = self.find_course_in_catalog(name, section) else {
            debug!(name, section, "course not found in catalog");
            return Ok(false);
        };
        let candidate = Activity::Course(course.clone());
        self.ensure_schedulable(&candidate)?;
        debug!(name, section, "added course to schedule");
        self.schedule.push(candidate);
        Ok(true)
    }

    pub fn add_event(
        &mut self,
        title: &str,
        meeting_days: &str,
        start_time: i32,
        end_time: i32,
        weekly_repeat: i32,
        event_details: &str,
    ) -> Result<(), SchedulerError> {
        let event = Event::new(
            title,
            meeting_days,
            start_time,
            end_time,
            weekly_repeat,
            event_details,
        )?;
        let candidate = Activity::Event(event);
        self.ensure_schedulable(&candidate)?;
        debug!(title, "added event to schedule");
        self.schedule.push(candidate);
        Ok(())
    }

    /// Scans the whole schedule before anything is appended.
    fn ensure_schedulable(&self, candidate: &Activity) -> Result<(), SchedulerError> {
        for existing in &self.schedule {
            if candidate.is_duplicate(existing) {
                debug!(title = candidate.title(), "rejected duplicate activity");
                return Err(match candidate {
                    Activity::Course(course) => SchedulerError::AlreadyEnrolled(course.name().to_string()),
                    Activity::Event(event) => SchedulerError::DuplicateEvent(event.title().to_string()),
                });
            }
            candidate
                .check_conflict(existing)
                .and_then(|()| existing.check_conflict(candidate))
                .map_err(|source| {
                    debug!(
                        title = candidate.title(),
                        conflicts_with = existing.title(),
                        "rejected conflicting activity"
                    );
                    SchedulerError::Conflict {
                        kind: candidate.kind(),
                        source,
                    }
                })?;
        }
        Ok(())
    }

    /// Removes by display position; out-of-range positions return `false`.
    pub fn remove_activity(&mut self, index: usize) -> bool {
        if index >= self.schedule.len() {
            return false;
        }
        self.schedule.remove(index);
        true
    }

    pub fn reset_schedule(&mut self) {
        self.schedule = Vec::new();
    }

    pub fn course_catalog_view(&self) -> Vec<ShortDisplayRow> {
        self.course_catalog
            .iter()
            .map(Course::short_display)
            .collect()
    }

    pub fn schedule_view(&self) -> Vec<ShortDisplayRow> {
        self.schedule.iter().map(Activity::short_display).collect()
    }

    pub fn full_schedule_view(&self) -> Vec<LongDisplayRow> {
        self.schedule.iter().map(Activity::long_display).collect()
    }

    /// Scheduled activities that meet on `weekday`; arranged courses never do.
    pub fn activities_on(&self, weekday: Weekday) -> Vec<&Activity> {
        self.schedule
            .iter()
            .filter(|activity| activity.meeting_days().meets_on(weekday))
            .collect()
    }

    pub fn export_schedule<P: AsRef<Path>>(&self, path: P) -> PersistenceResult<()> {
        persistence::write_activity_records(path, &self.schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Course> {
        vec![
            Course::new("CSC216", "Programming Concepts", "001", 4, "sesmith5", "MW", 1330, 1445)
                .unwrap(),
            Course::new("CSC216", "Programming Concepts", "002", 4, "jctetter", "TH", 1330, 1445)
                .unwrap(),
            Course::arranged("CSC290", "Special Topics", "001", 3, "jdyoung2", "A").unwrap(),
        ]
    }

    #[test]
    fn new_scheduler_has_default_title_and_empty_schedule() {
        let scheduler = Scheduler::new(catalog());
        assert_eq!(scheduler.title(), DEFAULT_SCHEDULE_TITLE);
        assert!(scheduler.schedule().is_empty());
        assert_eq!(scheduler.course_catalog().len(), 3);
    }

    #[test]
    fn second_section_of_enrolled_course_is_a_duplicate() {
        let mut scheduler = Scheduler::new(catalog());
        assert_eq!(scheduler.add_course("CSC216", "001"), Ok(true));
        assert_eq!(
            scheduler.add_course("CSC216", "002"),
            Err(SchedulerError::AlreadyEnrolled("CSC216".to_string()))
        );
        assert_eq!(scheduler.schedule().len(), 1);
    }

    #[test]
    fn unknown_course_is_not_an_error() {
        let mut scheduler = Scheduler::new(catalog());
        assert_eq!(scheduler.add_course("CSC999", "001"), Ok(false));
        assert!(scheduler.schedule().is_empty());
    }

    #[test]
    fn set_title_rejects_only_missing_titles() {
        let mut scheduler = Scheduler::new(catalog());
        assert_eq!(scheduler.set_title(None), Err(SchedulerError::InvalidTitle));
        assert_eq!(scheduler.title(), DEFAULT_SCHEDULE_TITLE);
        scheduler.set_title(Some("")).unwrap();
        assert_eq!(scheduler.title(), "");
    }
}

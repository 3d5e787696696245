use crate::Activity;
use crate::meeting::{MeetingDays, TimeRange};
use crate::validation::ARRANGED;
use thiserror::Error;

/// Raised when two activities meet on a common day at overlapping times.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ConflictError {
    message: String,
}

impl ConflictError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for ConflictError {
    fn default() -> Self {
        Self::new("Schedule conflict.")
    }
}

pub trait Conflict {
    /// Fails when `other` shares a meeting day with `self` at an overlapping time. Neither side is
    /// modified; callers that need a symmetric answer check both directions.
    fn check_conflict(&self, other: &Activity) -> Result<(), ConflictError>;
}

/// True when some code appears on both sides, ignoring a pair where both codes are the arranged
/// sentinel.
pub fn shares_meeting_day(this: &MeetingDays, other: &MeetingDays) -> bool {
    this.codes().any(|this_code| {
        other
            .codes()
            .any(|other_code| this_code == other_code && (this_code != ARRANGED || other_code != ARRANGED))
    })
}

pub fn check_meeting_conflict(
    this_days: &MeetingDays,
    this_time: &TimeRange,
    other_days: &MeetingDays,
    other_time: &TimeRange,
) -> Result<(), ConflictError> {
    if shares_meeting_day(this_days, other_days) && this_time.overlaps(other_time) {
        return Err(ConflictError::default());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meeting::DayAlphabet;

    fn days(codes: &str) -> MeetingDays {
        MeetingDays::parse(codes, DayAlphabet::Event).unwrap()
    }

    #[test]
    fn shared_day_detection() {
        assert!(shares_meeting_day(&days("MWF"), &days("F")));
        assert!(!shares_meeting_day(&days("MW"), &days("TH")));
        assert!(!shares_meeting_day(
            &MeetingDays::arranged(),
            &MeetingDays::arranged()
        ));
    }

    #[test]
    fn default_message() {
        assert_eq!(ConflictError::default().to_string(), "Schedule conflict.");
        assert_eq!(ConflictError::new("Custom").to_string(), "Custom");
    }
}

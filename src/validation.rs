use thiserror::Error;

pub const UPPER_TIME: i32 = 2359;
pub const UPPER_MINUTE: i32 = 59;
pub const HOUR_FACTOR: i32 = 100;
pub const MIN_NAME_LENGTH: usize = 4;
pub const MAX_NAME_LENGTH: usize = 6;
pub const SECTION_LENGTH: usize = 3;
pub const MIN_CREDITS: i32 = 1;
pub const MAX_CREDITS: i32 = 5;
pub const MIN_WEEKLY_REPEAT: i32 = 1;
pub const MAX_WEEKLY_REPEAT: i32 = 4;

/// Sentinel day code for a course without a fixed meeting time.
pub const ARRANGED: char = 'A';

/// Field-level validation failures raised while constructing or updating an activity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivityError {
    #[error("invalid title: must not be empty")]
    InvalidTitle,
    #[error("invalid meeting days '{days}'")]
    InvalidDays { days: String },
    #[error("invalid meeting time {start}-{end}")]
    InvalidTime { start: i32, end: i32 },
    #[error("invalid course name '{name}' (must be 4-6 characters)")]
    InvalidName { name: String },
    #[error("invalid section '{section}' (must be exactly 3 characters)")]
    InvalidSection { section: String },
    #[error("invalid credits {credits} (must be between 1 and 5)")]
    InvalidCredits { credits: i32 },
    #[error("invalid instructor id: must not be empty")]
    InvalidInstructorId,
    #[error("invalid weekly repeat {weekly_repeat} (must be between 1 and 4)")]
    InvalidWeeklyRepeat { weekly_repeat: i32 },
}

pub fn validate_title(title: &str) -> Result<(), ActivityError> {
    if title.is_empty() {
        return Err(ActivityError::InvalidTitle);
    }
    Ok(())
}

pub fn validate_time(start: i32, end: i32, is_arranged: bool) -> Result<(), ActivityError> {
    let invalid = || ActivityError::InvalidTime { start, end };

    if !(0..=UPPER_TIME).contains(&start) || !(0..=UPPER_TIME).contains(&end) {
        return Err(invalid());
    }
    if end < start {
        return Err(invalid());
    }
    if is_arranged && (start != 0 || end != 0) {
        return Err(invalid());
    }
    if start % HOUR_FACTOR > UPPER_MINUTE || end % HOUR_FACTOR > UPPER_MINUTE {
        return Err(invalid());
    }
    Ok(())
}

/// Checks every code against `alphabet`; the arranged sentinel is only accepted alone and only
/// when `allow_arranged` is set.
pub fn validate_meeting_days(
    days: &str,
    alphabet: &str,
    allow_arranged: bool,
) -> Result<(), ActivityError> {
    let invalid = || ActivityError::InvalidDays {
        days: days.to_string(),
    };

    if days.is_empty() {
        return Err(invalid());
    }
    let standalone = days.chars().count() == 1;
    for code in days.chars() {
        let allowed = alphabet.contains(code) || (allow_arranged && code == ARRANGED && standalone);
        if !allowed {
            return Err(invalid());
        }
    }
    Ok(())
}

pub fn validate_course_name(name: &str) -> Result<(), ActivityError> {
    let len = name.chars().count();
    if !(MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&len) {
        return Err(ActivityError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}

pub fn validate_section(section: &str) -> Result<(), ActivityError> {
    if section.chars().count() != SECTION_LENGTH {
        return Err(ActivityError::InvalidSection {
            section: section.to_string(),
        });
    }
    Ok(())
}

pub fn validate_credits(credits: i32) -> Result<(), ActivityError> {
    if !(MIN_CREDITS..=MAX_CREDITS).contains(&credits) {
        return Err(ActivityError::InvalidCredits { credits });
    }
    Ok(())
}

pub fn validate_instructor_id(instructor_id: &str) -> Result<(), ActivityError> {
    if instructor_id.is_empty() {
        return Err(ActivityError::InvalidInstructorId);
    }
    Ok(())
}

pub fn validate_weekly_repeat(weekly_repeat: i32) -> Result<(), ActivityError> {
    if !(MIN_WEEKLY_REPEAT..=MAX_WEEKLY_REPEAT).contains(&weekly_repeat) {
        return Err(ActivityError::InvalidWeeklyRepeat { weekly_repeat });
    }
    Ok(())
}

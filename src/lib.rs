pub mod activity;
pub mod config;
pub mod conflict;
#[cfg(feature = "http_api")]
pub mod http_api;
pub mod logging;
pub mod meeting;
pub mod persistence;
pub mod scheduler;
pub mod table;
pub mod validation;

pub use activity::{Activity, Course, Event, LongDisplayRow, ShortDisplayRow};
pub use config::{ConfigError, SchedulerConfig};
pub use conflict::{Conflict, ConflictError};
pub use logging::{LoggingError, init_logging};
pub use meeting::{DayAlphabet, MeetingDays, TimeRange};
pub use persistence::{
    PersistenceError, PersistenceResult, read_course_records, write_activity_records,
};
pub use scheduler::{DEFAULT_SCHEDULE_TITLE, Scheduler, SchedulerError};
pub use validation::ActivityError;

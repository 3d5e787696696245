use super::{PersistenceError, PersistenceResult};
use crate::validation::ARRANGED;
use crate::{Activity, Course};
use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, info};

const ARRANGED_FIELD_COUNT: usize = 6;
const TIMED_FIELD_COUNT: usize = 8;

/// Reads a course catalog, skipping every line that does not describe a valid course and every
/// repeat of a `name`+`section` pair already read.
pub fn read_course_records<P: AsRef<Path>>(path: P) -> PersistenceResult<Vec<Course>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let courses = read_course_records_from(file)?;
    info!(path = %path.display(), courses = courses.len(), "loaded course catalog");
    Ok(courses)
}

pub fn read_course_records_from<R: Read>(input: R) -> PersistenceResult<Vec<Course>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(input);

    let mut courses: Vec<Course> = Vec::new();
    for (line_idx, record) in reader.records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(err) if err.is_io_error() => return Err(err.into()),
            Err(err) => {
                debug!(line = line_idx + 1, error = %err, "skipping unreadable catalog line");
                continue;
            }
        };
        let course = match parse_course_record(&record) {
            Ok(course) => course,
            Err(err) => {
                debug!(line = line_idx + 1, error = %err, "skipping invalid catalog line");
                continue;
            }
        };
        let duplicate = courses
            .iter()
            .any(|c| c.name() == course.name() && c.section() == course.section());
        if duplicate {
            debug!(
                line = line_idx + 1,
                name = course.name(),
                section = course.section(),
                "skipping duplicate catalog entry"
            );
            continue;
        }
        courses.push(course);
    }
    Ok(courses)
}

/// Parses `name,title,section,credits,instructorId,meetingDays[,start,end]`.
pub fn parse_course_record(record: &StringRecord) -> PersistenceResult<Course> {
    let field = |idx: usize| record.get(idx).unwrap_or_default();
    let name = field(0);
    let title = field(1);
    let section = field(2);
    let credits = parse_i32(field(3))?;
    let instructor_id = field(4);
    let meeting_days = field(5);

    let course = match record.len() {
        ARRANGED_FIELD_COUNT if meeting_days.contains(ARRANGED) => {
            Course::arranged(name, title, section, credits, instructor_id, meeting_days)
        }
        TIMED_FIELD_COUNT => {
            let start = parse_i32(field(6))?;
            let end = parse_i32(field(7))?;
            Course::new(
                name,
                title,
                section,
                credits,
                instructor_id,
                meeting_days,
                start,
                end,
            )
        }
        other => {
            return Err(PersistenceError::InvalidData(format!(
                "course record has {other} fields"
            )));
        }
    };
    course.map_err(|err| PersistenceError::InvalidData(err.to_string()))
}

/// Writes one line per activity in schedule order.
pub fn write_activity_records<P: AsRef<Path>>(
    path: P,
    activities: &[Activity],
) -> PersistenceResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_activity_records_to(file, activities)?;
    info!(path = %path.display(), activities = activities.len(), "exported schedule");
    Ok(())
}

pub fn write_activity_records_to<W: Write>(
    output: W,
    activities: &[Activity],
) -> PersistenceResult<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(output);
    for activity in activities {
        writer.write_record(activity.to_record())?;
    }
    writer.flush()?;
    Ok(())
}

fn parse_i32(input: &str) -> PersistenceResult<i32> {
    input
        .parse::<i32>()
        .map_err(|e| PersistenceError::InvalidData(format!("invalid integer '{input}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(line: &str) -> StringRecord {
        StringRecord::from(line.split(',').collect::<Vec<_>>())
    }

    #[test]
    fn arranged_line_needs_sentinel_days() {
        assert!(parse_course_record(&record("CSC290,Topics,001,3,jdyoung2,A")).is_ok());
        assert!(parse_course_record(&record("CSC290,Topics,001,3,jdyoung2,MW")).is_err());
        assert!(parse_course_record(&record("CSC290,Topics,001,3,jdyoung2,A,0,0")).is_ok());
        assert!(parse_course_record(&record("CSC290,Topics,001,3,jdyoung2,A,800,900")).is_err());
    }

    #[test]
    fn non_numeric_fields_are_rejected() {
        assert!(parse_course_record(&record("CSC216,Title,001,three,sesmith5,MW,1330,1445")).is_err());
        assert!(parse_course_record(&record("CSC216,Title,001,3,sesmith5,MW,1330,end")).is_err());
        assert!(parse_course_record(&record("CSC216,Title,001,3,sesmith5,MW,1330")).is_err());
    }
}

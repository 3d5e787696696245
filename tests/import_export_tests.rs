use course_scheduler::persistence::{read_course_records_from, write_activity_records_to};
use course_scheduler::{
    read_course_records, Activity, Course, Event, PersistenceError, Scheduler,
};
use std::fs;
use tempfile::{tempdir, NamedTempFile};

const CATALOG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/course_records.txt");

fn sample_schedule() -> Scheduler {
    let mut scheduler = Scheduler::from_catalog_file(CATALOG).unwrap();
    scheduler.add_course("CSC216", "002").unwrap();
    scheduler.add_course("CSC116", "003").unwrap();
    scheduler
        .add_event("Exercise", "SU", 800, 930, 2, "Gym with friends")
        .unwrap();
    scheduler
}

#[test]
fn export_writes_one_line_per_activity() {
    let scheduler = sample_schedule();
    let file = NamedTempFile::new().unwrap();
    scheduler.export_schedule(file.path()).unwrap();

    let written = fs::read_to_string(file.path()).unwrap();
    assert_eq!(
        written,
        "CSC216,Software Development Fundamentals,002,3,ixdoming,MW,1330,1445\n\
         CSC116,Intro to Programming - Java,003,3,tbdimitr,TH,1120,1310\n\
         Exercise,SU,800,930,2,Gym with friends\n"
    );
}

#[test]
fn exported_courses_read_back_as_catalog() {
    let mut scheduler = Scheduler::from_catalog_file(CATALOG).unwrap();
    scheduler.add_course("CSC216", "601").unwrap();
    scheduler.add_course("CSC316", "001").unwrap();

    let file = NamedTempFile::new().unwrap();
    scheduler.export_schedule(file.path()).unwrap();

    let reloaded = read_course_records(file.path()).unwrap();
    let original: Vec<Course> = scheduler
        .schedule()
        .iter()
        .filter_map(Activity::as_course)
        .cloned()
        .collect();
    assert_eq!(reloaded, original);
    assert!(reloaded[0].is_arranged());
    assert_eq!(reloaded[0].to_string(), "CSC216,Software Development Fundamentals,601,3,jctetter,A");
}

#[test]
fn empty_schedule_exports_empty_file() {
    let scheduler = Scheduler::from_catalog_file(CATALOG).unwrap();
    let file = NamedTempFile::new().unwrap();
    scheduler.export_schedule(file.path()).unwrap();
    assert_eq!(fs::read_to_string(file.path()).unwrap(), "");
}

#[test]
fn export_to_unwritable_path_fails() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("missing").join("schedule.txt");
    let err = sample_schedule().export_schedule(&target).unwrap_err();
    assert!(matches!(err, PersistenceError::Io(_)));
}

#[test]
fn missing_catalog_is_an_io_error() {
    let dir = tempdir().unwrap();
    let err = read_course_records(dir.path().join("nope.txt")).unwrap_err();
    assert!(matches!(err, PersistenceError::Io(_)));
    assert!(Scheduler::from_catalog_file(dir.path().join("nope.txt")).is_err());
}

#[test]
fn reader_skips_blank_and_short_lines() {
    let input = "CSC216,Software Development Fundamentals,001,3,sesmith5,TH,1330,1445\n\
                 \n\
                 garbage\n\
                 CSC216,Software Development Fundamentals,002,3,ixdoming,MW,1330,1445,extra\n\
                 CSC316,Data Structures and Algorithms,001,3,jtking,MW,830,945\n";
    let courses = read_course_records_from(input.as_bytes()).unwrap();
    let keys: Vec<_> = courses
        .iter()
        .map(|c| format!("{}-{}", c.name(), c.section()))
        .collect();
    assert_eq!(keys, vec!["CSC216-001", "CSC316-001"]);
}

#[test]
fn event_record_keeps_details_verbatim() {
    let activities = vec![Activity::from(
        Event::new("Study", "MTWHF", 1900, 2100, 1, "").unwrap(),
    )];
    let mut buf = Vec::new();
    write_activity_records_to(&mut buf, &activities).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "Study,MTWHF,1900,2100,1,\n");
}

use course_scheduler::{Activity, Conflict, ConflictError, Course, Event};

fn course(days: &str, start: i32, end: i32) -> Course {
    Course::new(
        "CSC216",
        "Programming Concepts - Java",
        "001",
        4,
        "sesmith5",
        days,
        start,
        end,
    )
    .unwrap()
}

fn check_both(a: &Course, b: &Course) -> (Result<(), ConflictError>, Result<(), ConflictError>) {
    let a_activity = Activity::from(a.clone());
    let b_activity = Activity::from(b.clone());
    (a.check_conflict(&b_activity), b.check_conflict(&a_activity))
}

#[test]
fn same_time_on_distinct_days_does_not_conflict() {
    let a1 = course("MW", 1330, 1445);
    let a2 = course("TH", 1330, 1445);
    let (forward, backward) = check_both(&a1, &a2);
    assert!(forward.is_ok());
    assert!(backward.is_ok());
    assert_eq!(a1.meeting_string(), "MW 1:30PM-2:45PM");
    assert_eq!(a2.meeting_string(), "TH 1:30PM-2:45PM");
}

#[test]
fn shared_endpoint_conflicts_in_both_directions() {
    let mut a1 = course("MW", 1330, 1445);
    let a2 = course("TH", 1330, 1445);
    a1.set_meeting("TH", 1445, 1530).unwrap();

    let (forward, backward) = check_both(&a1, &a2);
    assert_eq!(forward, Err(ConflictError::default()));
    assert_eq!(backward, Err(ConflictError::default()));
    assert_eq!(a1.meeting_string(), "TH 2:45PM-3:30PM");
    assert_eq!(a2.meeting_string(), "TH 1:30PM-2:45PM");
}

#[test]
fn start_inside_other_range_conflicts() {
    let a1 = course("TH", 1400, 1500);
    let a2 = course("TH", 1330, 1445);
    let (forward, backward) = check_both(&a1, &a2);
    assert!(forward.is_err());
    assert!(backward.is_err());
}

#[test]
fn end_inside_other_range_conflicts() {
    let a1 = course("TH", 1200, 1400);
    let a2 = course("TH", 1330, 1445);
    let (forward, backward) = check_both(&a1, &a2);
    assert!(forward.is_err());
    assert!(backward.is_err());
}

#[test]
fn containing_range_conflicts() {
    let a1 = course("H", 800, 1700);
    let a2 = course("TH", 1330, 1445);
    let (forward, backward) = check_both(&a1, &a2);
    assert!(forward.is_err());
    assert!(backward.is_err());
}

#[test]
fn back_to_back_minutes_do_not_conflict() {
    let a1 = course("MW", 1330, 1445);
    let a2 = course("MW", 1446, 1600);
    let (forward, backward) = check_both(&a1, &a2);
    assert!(forward.is_ok());
    assert!(backward.is_ok());
}

#[test]
fn arranged_courses_never_conflict() {
    let a1 = Course::arranged("CSC216", "Programming", "601", 3, "inst", "A").unwrap();
    let a2 = Course::arranged("CSC316", "Data Structures", "601", 3, "inst", "A").unwrap();
    let (forward, backward) = check_both(&a1, &a2);
    assert!(forward.is_ok());
    assert!(backward.is_ok());

    let timed = course("MWF", 0, 30);
    let (forward, backward) = check_both(&a1, &timed);
    assert!(forward.is_ok());
    assert!(backward.is_ok());
}

#[test]
fn events_conflict_with_courses_on_shared_days() {
    let class = Activity::from(course("MW", 1330, 1445));
    let meeting = Activity::from(Event::new("Club", "W", 1400, 1500, 1, "").unwrap());
    let weekend = Activity::from(Event::new("Hike", "SU", 1330, 1445, 1, "").unwrap());

    assert!(class.check_conflict(&meeting).is_err());
    assert!(meeting.check_conflict(&class).is_err());
    assert!(class.check_conflict(&weekend).is_ok());
    assert!(weekend.check_conflict(&class).is_ok());
}

#[test]
fn conflict_check_leaves_operands_untouched() {
    let class = Activity::from(course("TH", 1330, 1445));
    let overlap = Activity::from(course("TH", 1400, 1500));
    let before = (class.clone(), overlap.clone());
    let _ = class.check_conflict(&overlap);
    let _ = overlap.check_conflict(&class);
    assert_eq!((class, overlap), before);
}

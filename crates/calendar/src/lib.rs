//! Expansion of a weekly timetable into dated semester events, skipping
//! holidays and walking each course's syllabus in order.

pub mod holidays;

pub use holidays::HolidayCalendar;

use chrono::{Datelike, Duration, NaiveDate};
use std::collections::HashMap;
use thiserror::Error;
use timetable_core::{grid, validate_expand, ValidationError};
use tracing::info;
use types::{
    CalendarEvent, Course, CourseId, DayOfWeek, EventKind, Frequency, GroupId, SlotId, WeeklyClass,
    WorkloadKind,
};
use uuid::Uuid;

pub const FALLBACK_ROOM: &str = "Room TBA";
pub const FALLBACK_PROFESSOR: &str = "TBA";

#[derive(Debug, Error)]
pub enum ExpandError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("event timestamp out of range for class {0}")]
    TimestampOverflow(CourseId),
}

/// Walks every date in `start..=end` and emits a CLASS event for each weekly
/// class that fires that day. Holidays produce nothing and consume no
/// syllabus progress. Events come out in date order, caller order within a
/// date.
pub fn expand(
    classes: &[WeeklyClass],
    start: NaiveDate,
    end: NaiveDate,
    holidays: &HolidayCalendar,
) -> Result<Vec<CalendarEvent>, ExpandError> {
    validate_expand(classes, start, end)?;

    let mut progress: HashMap<(CourseId, GroupId), u32> = HashMap::new();
    let mut events: Vec<CalendarEvent> = Vec::new();

    let mut date = start;
    while date <= end {
        if !holidays.is_holiday(date) {
            let weekday = DayOfWeek::from(date.weekday());
            let week_index = date.signed_duration_since(start).num_days() / 7;
            for class in classes {
                if class.day != weekday {
                    continue;
                }
                if class.frequency == Frequency::Biweekly
                    && week_index % 2 != i64::from(class.week_offset.unwrap_or(0))
                {
                    continue;
                }
                events.push(fire(class, date, &mut progress)?);
            }
        }
        date = match date.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    info!(
        classes = classes.len(),
        events = events.len(),
        %start,
        %end,
        "expanded semester calendar"
    );
    Ok(events)
}

/// Consumes the next syllabus position for the class and builds its event.
/// Past the last lesson the title falls back to a generic session label.
fn fire(
    class: &WeeklyClass,
    date: NaiveDate,
    progress: &mut HashMap<(CourseId, GroupId), u32>,
) -> Result<CalendarEvent, ExpandError> {
    let seen = progress
        .entry((class.course_id.clone(), class.group.clone()))
        .or_insert(0);
    let index = *seen as usize;
    *seen += 1;
    let ordinal = index as u32 + 1;

    let lesson = class.lessons.get(index);
    let title = match lesson {
        Some(l) => format!("{}. {}", l.order, l.name),
        None => format!("{} (Session {ordinal})", class.course_name),
    };
    let room = lesson
        .and_then(|l| l.default_room.clone())
        .unwrap_or_else(|| FALLBACK_ROOM.to_string());
    let professor = lesson
        .and_then(|l| l.default_professor.clone())
        .unwrap_or_else(|| FALLBACK_PROFESSOR.to_string());

    let start = date.and_time(class.start_time);
    let end = start
        .checked_add_signed(Duration::hours(i64::from(class.hours)))
        .ok_or_else(|| ExpandError::TimestampOverflow(class.course_id.clone()))?;

    Ok(CalendarEvent {
        id: Uuid::new_v4().to_string(),
        course_id: class.course_id.clone(),
        title,
        start,
        end,
        kind: EventKind::Class,
        group: class.group.clone(),
        lesson_order: ordinal,
        room,
        professor,
    })
}

/// Reshapes a resolved timetable into expander input. Courses without an
/// assignment are skipped; BIWEEKLY workloads keep their cadence, every other
/// workload folds to weekly.
pub fn weekly_classes(courses: &[Course]) -> Vec<WeeklyClass> {
    courses
        .iter()
        .filter_map(|course| {
            let (day, start) = course.assigned_slot.as_ref().and_then(SlotId::parse)?;
            let start_time = grid::start_time(start)?;
            Some(WeeklyClass {
                course_id: course.id.clone(),
                course_name: course.name.clone(),
                day,
                start_time,
                hours: course.slot_span(),
                group: course.group_or_default(),
                frequency: if course.workload == WorkloadKind::Biweekly {
                    Frequency::Biweekly
                } else {
                    Frequency::Weekly
                },
                week_offset: Some(0),
                lessons: course.lessons.clone(),
            })
        })
        .collect()
}

pub mod grid;

use chrono::NaiveDate;
use std::collections::HashSet;
use thiserror::Error;

pub use types::{
    CalendarEvent, Course, Holiday, SchedulerConfig, SlotId, SolveOutcome, SolveRequest,
    WeeklyClass,
};

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("invalid input: {0}")]
    Msg(String),
}

fn chk_unique<I: ToString>(name: &str, ids: impl Iterator<Item = I>, errors: &mut Vec<String>) {
    let mut seen = HashSet::new();
    for id in ids {
        let s = id.to_string();
        if !seen.insert(s.clone()) {
            errors.push(format!("duplicate {name} id: {s}"));
        }
    }
}

fn chk_lesson_orders(owner: &str, lessons: &[types::Lesson], errors: &mut Vec<String>) {
    let mut orders: Vec<u32> = lessons.iter().map(|l| l.order).collect();
    orders.sort_unstable();
    let dense = orders.iter().copied().eq(1..=lessons.len() as u32);
    if !dense {
        errors.push(format!("{owner} has non-dense lesson orders {orders:?}"));
    }
}

/// Checks a whole solve request up front. Any problem fails the run; an
/// unplaceable course is not a problem here, the allocator reports those.
pub fn validate_solve(req: &SolveRequest) -> Result<(), ValidationError> {
    let mut errors: Vec<String> = Vec::new();

    chk_unique("course", req.courses.iter().map(|c| &c.id.0), &mut errors);
    chk_unique(
        "group policy",
        req.config.groups.iter().map(|g| &g.id.0),
        &mut errors,
    );

    if req.config.max_rooms == 0 {
        errors.push("maxRooms must be positive".into());
    }

    for c in &req.courses {
        if c.name.trim().is_empty() {
            errors.push(format!("course {} has empty name", c.id.0));
        }
        let span = c.slot_span();
        if !(1..=6).contains(&span) {
            errors.push(format!("course {} has invalid slots {span}", c.id.0));
        }
        if let Some(slot) = &c.assigned_slot {
            match slot.parse() {
                None => errors.push(format!("course {} has malformed slot {}", c.id.0, slot.0)),
                Some((day, index)) => {
                    if !grid::is_teaching_day(day) {
                        errors.push(format!(
                            "course {} is locked to non-teaching day {day}",
                            c.id.0
                        ));
                    } else if grid::block_shift(index, span as usize).is_none() {
                        errors.push(format!(
                            "course {} slot {} does not fit inside one shift",
                            c.id.0, slot.0
                        ));
                    }
                }
            }
        }
        chk_lesson_orders(&format!("course {}", c.id.0), &c.lessons, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::Msg(errors.join("; ")))
    }
}

/// Checks an expansion request. An empty class list is valid and expands to
/// an empty calendar.
pub fn validate_expand(
    classes: &[WeeklyClass],
    start: NaiveDate,
    end: NaiveDate,
) -> Result<(), ValidationError> {
    let mut errors: Vec<String> = Vec::new();

    if end < start {
        errors.push(format!("end date {end} precedes start date {start}"));
    }

    for class in classes {
        if class.hours == 0 {
            errors.push(format!("class {} has zero hours", class.course_id.0));
        }
        if let Some(offset) = class.week_offset {
            if offset > 1 {
                errors.push(format!(
                    "class {} has invalid week offset {offset}",
                    class.course_id.0
                ));
            }
        }
        chk_lesson_orders(
            &format!("class {}", class.course_id.0),
            &class.lessons,
            &mut errors,
        );
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::Msg(errors.join("; ")))
    }
}

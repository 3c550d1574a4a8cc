//! Greedy slot allocator. Single pass, no backtracking: locked courses are
//! registered first, pending courses are tried longest-block-first, and each
//! one takes the least-loaded feasible start or becomes a conflict entry.

mod tracker;

pub use tracker::{Cell, Tracker};

use timetable_core::{grid, validate_solve, ValidationError};
use tracing::{debug, info};
use types::{
    Course, DayOfWeek, GroupId, SchedulerConfig, ShiftSet, SlotId, SolveOutcome, SolveRequest,
};

pub fn solve(req: SolveRequest) -> Result<SolveOutcome, ValidationError> {
    validate_solve(&req)?;
    let SolveRequest {
        mut courses,
        config,
    } = req;

    let mut tracker = Tracker::new();
    for course in courses.iter().filter(|c| c.is_locked()) {
        if let Some((day, start)) = course.assigned_slot.as_ref().and_then(SlotId::parse) {
            tracker.register(course, day, start);
        }
    }

    let mut pending: Vec<usize> = (0..courses.len())
        .filter(|&i| !courses[i].is_locked())
        .collect();
    // stable, so equal spans keep their input order
    pending.sort_by_key(|&i| std::cmp::Reverse(courses[i].slot_span()));

    info!(
        courses = courses.len(),
        locked = courses.len() - pending.len(),
        pending = pending.len(),
        max_rooms = config.max_rooms,
        "allocating weekly slots"
    );

    let mut conflicts: Vec<String> = Vec::new();
    for i in pending {
        match best_start(&courses[i], &config, &tracker) {
            Some((day, start)) => {
                tracker.register(&courses[i], day, start);
                let slot = SlotId::new(day, start);
                debug!(course = %courses[i].id, slot = %slot, "placed");
                courses[i].assigned_slot = Some(slot);
            }
            None => {
                let course = &courses[i];
                debug!(course = %course.id, "no feasible slot");
                conflicts.push(format!(
                    "could not schedule: {} ({})",
                    course.name,
                    course.group_or_default()
                ));
            }
        }
    }

    info!(conflicts = conflicts.len(), "allocation finished");
    Ok(SolveOutcome { courses, conflicts })
}

/// Shifts this course may occupy: an explicit course list wins, otherwise the
/// per-group policy (groups without one get every shift).
fn permitted_shifts(course: &Course, config: &SchedulerConfig) -> ShiftSet {
    match &course.allowed_shifts {
        Some(shifts) => shifts.iter().copied().collect(),
        None => config.shifts_for(&course.group_or_default()),
    }
}

fn block_is_free(
    course: &Course,
    group: &GroupId,
    config: &SchedulerConfig,
    tracker: &Tracker,
    day: DayOfWeek,
    start: usize,
    span: usize,
) -> bool {
    (start..start + span).all(|index| {
        let cell = (day, index);
        tracker.occupancy_of(cell) < config.max_rooms
            && !tracker.is_group_busy(group, cell)
            && !course
                .professors
                .iter()
                .any(|p| tracker.is_professor_busy(p, cell))
    })
}

/// Scans Mon..Fri in slot order and keeps the feasible start with the lowest
/// summed occupancy. Strict comparison, so ties go to the earliest candidate.
fn best_start(
    course: &Course,
    config: &SchedulerConfig,
    tracker: &Tracker,
) -> Option<(DayOfWeek, usize)> {
    let span = course.slot_span() as usize;
    let group = course.group_or_default();
    let shifts = permitted_shifts(course, config);

    let mut best: Option<(DayOfWeek, usize, u32)> = None;
    for day in grid::DAYS {
        for start in 0..grid::SLOTS_PER_DAY {
            let Some(shift) = grid::block_shift(start, span) else {
                continue;
            };
            if !shifts.permits(shift) {
                continue;
            }
            if !block_is_free(course, &group, config, tracker, day, start, span) {
                continue;
            }
            let load: u32 = (start..start + span)
                .map(|index| tracker.occupancy_of((day, index)))
                .sum();
            if best.map_or(true, |(_, _, best_load)| load < best_load) {
                best = Some((day, start, load));
            }
        }
    }
    best.map(|(day, start, _)| (day, start))
}

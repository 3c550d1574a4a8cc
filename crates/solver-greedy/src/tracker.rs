use std::collections::{HashMap, HashSet};
use types::{Course, DayOfWeek, GroupId, ProfessorId};

/// One grid cell: weekday plus slot index within the day.
pub type Cell = (DayOfWeek, usize);

/// Occupancy state accumulated while placing courses. A registration marks
/// every cell of the block for the course's group and its whole professor
/// pool, and bumps the per-cell room counter.
#[derive(Debug, Default)]
pub struct Tracker {
    professor_busy: HashMap<ProfessorId, HashSet<Cell>>,
    group_busy: HashMap<GroupId, HashSet<Cell>>,
    occupancy: HashMap<Cell, u32>,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.professor_busy.clear();
        self.group_busy.clear();
        self.occupancy.clear();
    }

    pub fn register(&mut self, course: &Course, day: DayOfWeek, start: usize) {
        let group = course.group_or_default();
        for index in start..start + course.slot_span() as usize {
            let cell = (day, index);
            self.group_busy
                .entry(group.clone())
                .or_default()
                .insert(cell);
            for professor in &course.professors {
                self.professor_busy
                    .entry(professor.clone())
                    .or_default()
                    .insert(cell);
            }
            *self.occupancy.entry(cell).or_insert(0) += 1;
        }
    }

    pub fn is_group_busy(&self, group: &GroupId, cell: Cell) -> bool {
        self.group_busy
            .get(group)
            .is_some_and(|cells| cells.contains(&cell))
    }

    pub fn is_professor_busy(&self, professor: &ProfessorId, cell: Cell) -> bool {
        self.professor_busy
            .get(professor)
            .is_some_and(|cells| cells.contains(&cell))
    }

    pub fn occupancy_of(&self, cell: Cell) -> u32 {
        self.occupancy.get(&cell).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::CourseId;

    fn course(group: Option<&str>, professors: &[&str], slots: u32) -> Course {
        Course {
            id: CourseId("c1".into()),
            code: String::new(),
            name: "Course".into(),
            kind: Default::default(),
            workload: Default::default(),
            total_load: 0,
            room_kind: String::new(),
            group: group.map(|g| GroupId(g.into())),
            professors: professors.iter().map(|p| ProfessorId((*p).into())).collect(),
            lessons: vec![],
            allowed_shifts: None,
            assigned_slot: None,
            slots: Some(slots),
        }
    }

    #[test]
    fn register_marks_whole_block() {
        let mut tracker = Tracker::new();
        tracker.register(&course(Some("g1"), &["p1", "p2"], 3), DayOfWeek::Tue, 6);

        for index in 6..9 {
            let cell = (DayOfWeek::Tue, index);
            assert!(tracker.is_group_busy(&GroupId("g1".into()), cell));
            assert!(tracker.is_professor_busy(&ProfessorId("p1".into()), cell));
            assert!(tracker.is_professor_busy(&ProfessorId("p2".into()), cell));
            assert_eq!(tracker.occupancy_of(cell), 1);
        }
        assert!(!tracker.is_group_busy(&GroupId("g1".into()), (DayOfWeek::Tue, 9)));
        assert!(!tracker.is_group_busy(&GroupId("g2".into()), (DayOfWeek::Tue, 6)));
        assert!(!tracker.is_professor_busy(&ProfessorId("p3".into()), (DayOfWeek::Tue, 6)));
        assert_eq!(tracker.occupancy_of((DayOfWeek::Wed, 6)), 0);
    }

    #[test]
    fn groupless_courses_share_the_generic_group() {
        let mut tracker = Tracker::new();
        tracker.register(&course(None, &[], 2), DayOfWeek::Mon, 0);
        assert!(tracker.is_group_busy(&GroupId::general(), (DayOfWeek::Mon, 1)));
    }

    #[test]
    fn occupancy_counts_stack() {
        let mut tracker = Tracker::new();
        let mut a = course(Some("g1"), &[], 2);
        let mut b = course(Some("g2"), &[], 2);
        a.id = CourseId("a".into());
        b.id = CourseId("b".into());
        tracker.register(&a, DayOfWeek::Mon, 0);
        tracker.register(&b, DayOfWeek::Mon, 1);
        assert_eq!(tracker.occupancy_of((DayOfWeek::Mon, 0)), 1);
        assert_eq!(tracker.occupancy_of((DayOfWeek::Mon, 1)), 2);
        assert_eq!(tracker.occupancy_of((DayOfWeek::Mon, 2)), 1);
    }

    #[test]
    fn reset_clears_everything() {
        let mut tracker = Tracker::new();
        tracker.register(&course(Some("g1"), &["p1"], 2), DayOfWeek::Fri, 10);
        tracker.reset();
        assert!(!tracker.is_group_busy(&GroupId("g1".into()), (DayOfWeek::Fri, 10)));
        assert!(!tracker.is_professor_busy(&ProfessorId("p1".into()), (DayOfWeek::Fri, 10)));
        assert_eq!(tracker.occupancy_of((DayOfWeek::Fri, 10)), 0);
    }
}

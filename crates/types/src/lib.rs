use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(
            Clone, Debug, Serialize, Deserialize, ToSchema, JsonSchema, Eq, PartialEq, Hash,
        )]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}
id_newtype!(ProfessorId);
id_newtype!(CourseId);
id_newtype!(LessonId);
id_newtype!(GroupId);

/// Group key used when a course declares no student group.
pub const GENERAL_GROUP: &str = "general";

impl GroupId {
    pub fn general() -> Self {
        GroupId(GENERAL_GROUP.to_string())
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema, JsonSchema, Eq, PartialEq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl DayOfWeek {
    pub fn token(self) -> &'static str {
        match self {
            DayOfWeek::Mon => "mon",
            DayOfWeek::Tue => "tue",
            DayOfWeek::Wed => "wed",
            DayOfWeek::Thu => "thu",
            DayOfWeek::Fri => "fri",
            DayOfWeek::Sat => "sat",
            DayOfWeek::Sun => "sun",
        }
    }

    pub fn from_token(s: &str) -> Option<Self> {
        match s {
            "mon" => Some(DayOfWeek::Mon),
            "tue" => Some(DayOfWeek::Tue),
            "wed" => Some(DayOfWeek::Wed),
            "thu" => Some(DayOfWeek::Thu),
            "fri" => Some(DayOfWeek::Fri),
            "sat" => Some(DayOfWeek::Sat),
            "sun" => Some(DayOfWeek::Sun),
            _ => None,
        }
    }
}

impl From<chrono::Weekday> for DayOfWeek {
    fn from(w: chrono::Weekday) -> Self {
        match w {
            chrono::Weekday::Mon => DayOfWeek::Mon,
            chrono::Weekday::Tue => DayOfWeek::Tue,
            chrono::Weekday::Wed => DayOfWeek::Wed,
            chrono::Weekday::Thu => DayOfWeek::Thu,
            chrono::Weekday::Fri => DayOfWeek::Fri,
            chrono::Weekday::Sat => DayOfWeek::Sat,
            chrono::Weekday::Sun => DayOfWeek::Sun,
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema, JsonSchema, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Shift {
    Morning,
    Afternoon,
    Night,
}

#[derive(
    Clone, Copy, Debug, Serialize, Deserialize, ToSchema, JsonSchema, Eq, PartialEq, Hash, Default,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourseKind {
    #[default]
    Theoretical,
    Practical,
}

#[derive(
    Clone, Copy, Debug, Serialize, Deserialize, ToSchema, JsonSchema, Eq, PartialEq, Hash, Default,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkloadKind {
    #[default]
    Weekly,
    Biweekly,
    Monthly,
    Total,
}

#[derive(
    Clone, Copy, Debug, Serialize, Deserialize, ToSchema, JsonSchema, Eq, PartialEq, Hash, Default,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Frequency {
    #[default]
    Weekly,
    Biweekly,
}

#[derive(
    Clone, Copy, Debug, Serialize, Deserialize, ToSchema, JsonSchema, Eq, PartialEq, Hash, Default,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriorityTier {
    Fixed,
    High,
    #[default]
    Medium,
    Low,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema, JsonSchema, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    Class,
    Holiday,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema, JsonSchema, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HolidayKind {
    National,
    Custom,
}

/// One cell of the weekly grid, encoded as `"<day>.<index>"` (`mon.0` … `fri.11`).
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, JsonSchema, Eq, PartialEq, Hash)]
#[serde(transparent)]
pub struct SlotId(pub String);

impl SlotId {
    pub fn new(day: DayOfWeek, index: usize) -> Self {
        SlotId(format!("{}.{}", day.token(), index))
    }

    pub fn parse(&self) -> Option<(DayOfWeek, usize)> {
        let (day, index) = self.0.split_once('.')?;
        Some((DayOfWeek::from_token(day)?, index.parse().ok()?))
    }

    pub fn is_valid_format(&self) -> bool {
        self.parse().is_some()
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Professor {
    pub id: ProfessorId,
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Maximum weekly load, in hours.
    #[serde(default)]
    pub max_load: u32,
    #[serde(default)]
    pub cost_per_hour: f64,
    /// Advisory tier; preserved in the data model but never consulted by the allocator.
    #[serde(default)]
    pub priority: PriorityTier,
    /// Course ids this professor is able to teach.
    #[serde(default)]
    pub skills: Vec<CourseId>,
}

fn default_lesson_hours() -> u32 {
    2
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, JsonSchema, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: LessonId,
    pub course_id: CourseId,
    /// 1-based position in the syllabus; dense within a course.
    pub order: u32,
    pub name: String,
    #[serde(default)]
    pub kind: CourseKind,
    #[serde(default = "default_lesson_hours")]
    pub hours: u32,
    #[serde(default)]
    pub default_room: Option<String>,
    #[serde(default)]
    pub default_professor: Option<String>,
}

/// Scheduling duration when a course does not specify one, in grid slots.
pub const DEFAULT_SLOT_SPAN: u32 = 2;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    #[serde(default)]
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub kind: CourseKind,
    #[serde(default)]
    pub workload: WorkloadKind,
    /// Total load over the semester, in hours. Independent of `slots`.
    #[serde(default)]
    pub total_load: u32,
    #[serde(default)]
    pub room_kind: String,
    #[serde(default)]
    pub group: Option<GroupId>,
    /// Pool of professors eligible to teach this course.
    #[serde(default)]
    pub professors: Vec<ProfessorId>,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
    /// Explicit shift exceptions; overrides the per-group policy when present.
    #[serde(default)]
    pub allowed_shifts: Option<Vec<Shift>>,
    /// Present means the course is locked to this slot and never reassigned.
    #[serde(default)]
    pub assigned_slot: Option<SlotId>,
    /// Scheduling duration in contiguous grid slots (default 2).
    #[serde(default)]
    pub slots: Option<u32>,
}

impl Course {
    pub fn slot_span(&self) -> u32 {
        self.slots.unwrap_or(DEFAULT_SLOT_SPAN)
    }

    pub fn group_or_default(&self) -> GroupId {
        self.group.clone().unwrap_or_else(GroupId::general)
    }

    pub fn is_locked(&self) -> bool {
        self.assigned_slot.is_some()
    }

    /// Appends a lesson at the end of the syllabus, renumbering it to the next order.
    pub fn push_lesson(&mut self, mut lesson: Lesson) {
        lesson.course_id = self.id.clone();
        lesson.order = self.lessons.len() as u32 + 1;
        self.lessons.push(lesson);
    }

    /// Removes a lesson and re-indexes the remainder so orders stay dense 1..n.
    pub fn remove_lesson(&mut self, id: &LessonId) -> bool {
        let before = self.lessons.len();
        self.lessons.retain(|l| &l.id != id);
        if self.lessons.len() == before {
            return false;
        }
        for (i, l) in self.lessons.iter_mut().enumerate() {
            l.order = i as u32 + 1;
        }
        true
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, JsonSchema, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudentGroup {
    pub id: GroupId,
    pub name: String,
    #[serde(default)]
    pub capacity: u32,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema, JsonSchema, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShiftSet {
    pub morning: bool,
    pub afternoon: bool,
    pub night: bool,
}

impl ShiftSet {
    pub fn all() -> Self {
        ShiftSet {
            morning: true,
            afternoon: true,
            night: true,
        }
    }

    pub fn permits(&self, shift: Shift) -> bool {
        match shift {
            Shift::Morning => self.morning,
            Shift::Afternoon => self.afternoon,
            Shift::Night => self.night,
        }
    }
}

/// Default group policy: day shifts only, matching the settings screen defaults.
impl Default for ShiftSet {
    fn default() -> Self {
        ShiftSet {
            morning: true,
            afternoon: true,
            night: false,
        }
    }
}

impl FromIterator<Shift> for ShiftSet {
    fn from_iter<I: IntoIterator<Item = Shift>>(iter: I) -> Self {
        let mut set = ShiftSet {
            morning: false,
            afternoon: false,
            night: false,
        };
        for shift in iter {
            match shift {
                Shift::Morning => set.morning = true,
                Shift::Afternoon => set.afternoon = true,
                Shift::Night => set.night = true,
            }
        }
        set
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, JsonSchema, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GroupPolicy {
    pub id: GroupId,
    /// Display color; irrelevant to the allocator.
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub shifts: ShiftSet,
}

fn default_max_rooms() -> u32 {
    6
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, JsonSchema, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SchedulerConfig {
    /// Global ceiling on courses occupying one slot simultaneously.
    #[serde(default = "default_max_rooms")]
    pub max_rooms: u32,
    #[serde(default)]
    pub groups: Vec<GroupPolicy>,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        SchedulerConfig {
            max_rooms: default_max_rooms(),
            groups: Vec::new(),
        }
    }
}

impl SchedulerConfig {
    /// Shifts a group may use; groups without a policy entry may use every shift.
    pub fn shifts_for(&self, group: &GroupId) -> ShiftSet {
        self.groups
            .iter()
            .find(|g| &g.id == group)
            .map(|g| g.shifts)
            .unwrap_or_else(ShiftSet::all)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, JsonSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct SolveRequest {
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub config: SchedulerConfig,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SolveOutcome {
    /// Every input course: locked ones untouched, pending ones assigned or left unresolved.
    pub courses: Vec<Course>,
    pub conflicts: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, JsonSchema, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyClass {
    pub course_id: CourseId,
    pub course_name: String,
    pub day: DayOfWeek,
    pub start_time: NaiveTime,
    pub hours: u32,
    pub group: GroupId,
    #[serde(default)]
    pub frequency: Frequency,
    /// Week parity for BIWEEKLY classes: 0 fires on the semester's first week, 1 on the second.
    #[serde(default)]
    pub week_offset: Option<u8>,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, JsonSchema, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub course_id: CourseId,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub kind: EventKind,
    pub group: GroupId,
    /// 1-based occurrence number for this (course, group) pair.
    pub lesson_order: u32,
    pub room: String,
    pub professor: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, JsonSchema, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: String,
    pub kind: HolidayKind,
}

//! Fixed weekly teaching grid: five days, twelve start times per day.
//!
//! Indices 0..6 are the morning block, 6..12 the afternoon block. A night
//! shift exists as a permission flag but owns no grid indices.

use chrono::NaiveTime;
use types::{DayOfWeek, Shift};

pub const DAYS: [DayOfWeek; 5] = [
    DayOfWeek::Mon,
    DayOfWeek::Tue,
    DayOfWeek::Wed,
    DayOfWeek::Thu,
    DayOfWeek::Fri,
];

pub const SLOTS_PER_DAY: usize = 12;

/// Lecture start times, 50-minute cadence with a lunch gap after index 5.
const START_TIMES: [(u32, u32); SLOTS_PER_DAY] = [
    (7, 30),
    (8, 20),
    (9, 10),
    (10, 0),
    (10, 50),
    (11, 40),
    (13, 30),
    (14, 20),
    (15, 10),
    (16, 0),
    (16, 50),
    (17, 40),
];

pub fn start_time(index: usize) -> Option<NaiveTime> {
    let (h, m) = *START_TIMES.get(index)?;
    NaiveTime::from_hms_opt(h, m, 0)
}

pub fn is_teaching_day(day: DayOfWeek) -> bool {
    DAYS.contains(&day)
}

pub fn shift_of(index: usize) -> Option<Shift> {
    match index {
        0..=5 => Some(Shift::Morning),
        6..=11 => Some(Shift::Afternoon),
        _ => None,
    }
}

pub fn shift_range(shift: Shift) -> std::ops::Range<usize> {
    match shift {
        Shift::Morning => 0..6,
        Shift::Afternoon => 6..12,
        Shift::Night => 0..0,
    }
}

/// Shift holding the whole block `[index, index + span)`, or `None` when the
/// block leaves the grid or straddles the lunch boundary.
pub fn block_shift(index: usize, span: usize) -> Option<Shift> {
    if span == 0 || index + span > SLOTS_PER_DAY {
        return None;
    }
    let first = shift_of(index)?;
    let last = shift_of(index + span - 1)?;
    if first == last {
        Some(first)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_start_times() {
        assert_eq!(start_time(0), NaiveTime::from_hms_opt(7, 30, 0));
        assert_eq!(start_time(5), NaiveTime::from_hms_opt(11, 40, 0));
        assert_eq!(start_time(6), NaiveTime::from_hms_opt(13, 30, 0));
        assert_eq!(start_time(11), NaiveTime::from_hms_opt(17, 40, 0));
        assert_eq!(start_time(12), None);
    }

    #[test]
    fn shifts_split_at_lunch() {
        assert_eq!(shift_of(0), Some(Shift::Morning));
        assert_eq!(shift_of(5), Some(Shift::Morning));
        assert_eq!(shift_of(6), Some(Shift::Afternoon));
        assert_eq!(shift_of(11), Some(Shift::Afternoon));
        assert_eq!(shift_of(12), None);
        assert!(shift_range(Shift::Night).is_empty());
    }

    #[test]
    fn blocks_never_straddle_lunch() {
        assert_eq!(block_shift(4, 2), Some(Shift::Morning));
        assert_eq!(block_shift(5, 2), None);
        assert_eq!(block_shift(6, 2), Some(Shift::Afternoon));
        assert_eq!(block_shift(10, 2), Some(Shift::Afternoon));
        assert_eq!(block_shift(11, 2), None);
        assert_eq!(block_shift(0, 6), Some(Shift::Morning));
        assert_eq!(block_shift(1, 6), None);
        assert_eq!(block_shift(0, 0), None);
    }

    #[test]
    fn weekend_is_not_teachable() {
        assert!(is_teaching_day(DayOfWeek::Fri));
        assert!(!is_teaching_day(DayOfWeek::Sat));
        assert!(!is_teaching_day(DayOfWeek::Sun));
    }
}

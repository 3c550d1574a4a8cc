use crate::error::ApiError;
use axum::Json;
use calendar::HolidayCalendar;
use chrono::NaiveDate;
use serde::Deserialize;
use types::{CalendarEvent, Holiday, WeeklyClass};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpandIn {
    #[serde(default)]
    pub classes: Vec<WeeklyClass>,
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Custom holidays, merged with the built-in national table.
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}

#[utoipa::path(
    post,
    path = "/v1/calendar",
    request_body = ExpandIn,
    responses(
        (status = 200, description = "Dated class events for the semester", body = [CalendarEvent]),
        (status = 400, description = "Request failed validation")
    )
)]
pub async fn calendar_handler(
    Json(input): Json<ExpandIn>,
) -> Result<Json<Vec<CalendarEvent>>, ApiError> {
    let holidays = HolidayCalendar::brazil_2026().with_custom(input.holidays);
    let events = calendar::expand(&input.classes, input.start, input.end, &holidays)?;
    Ok(Json(events))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use types::{CourseId, DayOfWeek, Frequency, GroupId, HolidayKind};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn tuesday_class() -> WeeklyClass {
        WeeklyClass {
            course_id: CourseId("c1".into()),
            course_name: "Compilers".into(),
            day: DayOfWeek::Tue,
            start_time: NaiveTime::from_hms_opt(13, 30, 0).unwrap(),
            hours: 2,
            group: GroupId("P1".into()),
            frequency: Frequency::Weekly,
            week_offset: None,
            lessons: vec![],
        }
    }

    #[tokio::test]
    async fn national_holidays_suppress_events() {
        // 2026-04-21 (Tiradentes) is the first Tuesday in range
        let input = ExpandIn {
            classes: vec![tuesday_class()],
            start: date(2026, 4, 20),
            end: date(2026, 4, 28),
            holidays: vec![],
        };
        let Json(events) = calendar_handler(Json(input)).await.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].start.date(), date(2026, 4, 28));
    }

    #[tokio::test]
    async fn custom_holidays_extend_the_national_table() {
        let input = ExpandIn {
            classes: vec![tuesday_class()],
            start: date(2026, 4, 20),
            end: date(2026, 4, 28),
            holidays: vec![Holiday {
                date: date(2026, 4, 28),
                name: "Campus Day".into(),
                kind: HolidayKind::Custom,
            }],
        };
        let Json(events) = calendar_handler(Json(input)).await.unwrap();
        assert!(events.is_empty());
    }

    #[tokio::test]
    async fn reversed_ranges_are_rejected() {
        let input = ExpandIn {
            classes: vec![tuesday_class()],
            start: date(2026, 6, 30),
            end: date(2026, 2, 2),
            holidays: vec![],
        };
        assert!(calendar_handler(Json(input)).await.is_err());
    }
}

use crate::error::ApiError;
use axum::Json;
use types::{SolveOutcome, SolveRequest};

#[utoipa::path(
    post,
    path = "/v1/solve",
    request_body = SolveRequest,
    responses(
        (status = 200, description = "Resolved timetable with any conflicts", body = SolveOutcome),
        (status = 400, description = "Request failed validation")
    )
)]
pub async fn solve_handler(Json(req): Json<SolveRequest>) -> Result<Json<SolveOutcome>, ApiError> {
    let outcome = solver_greedy::solve(req)?;
    Ok(Json(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use types::{Course, CourseId, GroupId};

    fn course(id: &str, group: &str) -> Course {
        Course {
            id: CourseId(id.into()),
            code: String::new(),
            name: format!("Course {id}"),
            kind: Default::default(),
            workload: Default::default(),
            total_load: 0,
            room_kind: String::new(),
            group: Some(GroupId(group.into())),
            professors: vec![],
            lessons: vec![],
            allowed_shifts: None,
            assigned_slot: None,
            slots: None,
        }
    }

    #[tokio::test]
    async fn returns_a_resolved_timetable() {
        let req = SolveRequest {
            courses: vec![course("c1", "P1"), course("c2", "P1")],
            config: Default::default(),
        };
        let Json(outcome) = solve_handler(Json(req)).await.unwrap();
        let slots: Vec<Option<&str>> = outcome
            .courses
            .iter()
            .map(|c| c.assigned_slot.as_ref().map(|s| s.0.as_str()))
            .collect();
        assert_eq!(slots, vec![Some("mon.0"), Some("mon.2")]);
        assert!(outcome.conflicts.is_empty());
    }

    #[tokio::test]
    async fn invalid_requests_come_back_as_bad_request() {
        let mut bad = course("c1", "P1");
        bad.slots = Some(9);
        let req = SolveRequest {
            courses: vec![bad],
            config: Default::default(),
        };
        let err = solve_handler(Json(req)).await.unwrap_err();
        assert!(err.0.contains("invalid slots 9"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

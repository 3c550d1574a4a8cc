use axum::Json;
use serde::Serialize;
use timetable_core::{validate_solve, ValidationError};
use types::SolveRequest;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct ValidationReport {
    pub ok: bool,
    pub errors: Vec<String>,
}

#[utoipa::path(
    post,
    path = "/v1/validate",
    request_body = SolveRequest,
    responses((status = 200, description = "Validation result", body = ValidationReport))
)]
pub async fn validate_handler(Json(req): Json<SolveRequest>) -> Json<ValidationReport> {
    match validate_solve(&req) {
        Ok(()) => Json(ValidationReport {
            ok: true,
            errors: vec![],
        }),
        Err(ValidationError::Msg(msg)) => Json(ValidationReport {
            ok: false,
            errors: msg
                .split(';')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::{Course, CourseId};

    fn course(id: &str) -> Course {
        Course {
            id: CourseId(id.into()),
            code: String::new(),
            name: format!("Course {id}"),
            kind: Default::default(),
            workload: Default::default(),
            total_load: 0,
            room_kind: String::new(),
            group: None,
            professors: vec![],
            lessons: vec![],
            allowed_shifts: None,
            assigned_slot: None,
            slots: None,
        }
    }

    #[tokio::test]
    async fn reports_ok_for_valid_requests() {
        let req = SolveRequest {
            courses: vec![course("c1")],
            config: Default::default(),
        };
        let Json(report) = validate_handler(Json(req)).await;
        assert!(report.ok);
        assert!(report.errors.is_empty());
    }

    #[tokio::test]
    async fn splits_collected_errors_into_a_list() {
        let mut bad = course("c1");
        bad.slots = Some(0);
        let req = SolveRequest {
            courses: vec![bad, course("c1")],
            config: Default::default(),
        };
        let Json(report) = validate_handler(Json(req)).await;
        assert!(!report.ok);
        assert_eq!(report.errors.len(), 2);
        assert!(report.errors.iter().any(|e| e.contains("duplicate course id")));
        assert!(report.errors.iter().any(|e| e.contains("invalid slots 0")));

        let wire = serde_json::to_value(&report).unwrap();
        assert_eq!(wire["ok"], serde_json::json!(false));
        assert!(wire["errors"].is_array());
    }
}

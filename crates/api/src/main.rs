mod error;
mod telemetry;
pub mod routes {
    pub mod calendar;
    pub mod health;
    pub mod solve;
    pub mod validate;
}

use axum::{
    routing::{get, post},
    Router,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
        paths(
            routes::health::health,
            routes::validate::validate_handler,
            routes::solve::solve_handler,
            routes::calendar::calendar_handler,
        ),
        components(schemas(
            types::Course, types::Lesson, types::Professor, types::StudentGroup,
            types::SchedulerConfig, types::GroupPolicy, types::ShiftSet,
            types::SolveRequest, types::SolveOutcome,
            types::WeeklyClass, types::CalendarEvent, types::Holiday,
            types::DayOfWeek, types::Shift, types::CourseKind, types::WorkloadKind,
            types::Frequency, types::PriorityTier, types::EventKind, types::HolidayKind,
            types::SlotId, types::CourseId, types::LessonId, types::ProfessorId,
            types::GroupId,
            routes::validate::ValidationReport,
            routes::calendar::ExpandIn
        )),
        tags(
            (name = "aulas", description = "Timetabling and semester calendar API")
        )
    )]
struct ApiDoc;

fn app() -> Router {
    Router::new()
        .route("/v1/health", get(routes::health::health))
        .route("/v1/validate", post(routes::validate::validate_handler))
        .route("/v1/solve", post(routes::solve::solve_handler))
        .route("/v1/calendar", post(routes::calendar::calendar_handler))
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(telemetry::stack())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let port = std::env::var("AULAS__SERVER__PORT").unwrap_or_else(|_| "8080".into());
    let addr: std::net::SocketAddr = format!("0.0.0.0:{}", port)
        .parse()
        .expect("invalid listen addr");
    tracing::info!(%addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app()).await?;
    Ok(())
}

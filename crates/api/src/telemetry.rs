use std::time::Duration;

use tower::layer::util::{Identity, Stack};
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::HttpMakeClassifier;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

const BODY_LIMIT_BYTES: usize = 2 * 1024 * 1024;

/// Solve and expand are bounded batch computations; a request alive this
/// long is stuck.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub fn stack() -> ServiceBuilder<
    Stack<
        TimeoutLayer,
        Stack<
            CorsLayer,
            Stack<RequestBodyLimitLayer, Stack<TraceLayer<HttpMakeClassifier>, Identity>>,
        >,
    >,
> {
    ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
}

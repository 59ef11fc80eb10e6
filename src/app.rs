use crate::handlers::hello;
use axum::{routing::get, Router};
use tower_http::trace;

/// Build the application. The same router is served locally and under the
/// Lambda runtime.
pub fn router() -> Router {
    Router::new()
        // ROUTES
        .route("/", get(hello::handler))
        // layers only wrap routes registered above them
        .layer(trace::TraceLayer::new_for_http())
}

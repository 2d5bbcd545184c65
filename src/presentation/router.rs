use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{AttachmentSource, FileLoader, LlmClient};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    analyze_attachment_handler, analyze_handler, debug_attachment_handler, health_handler,
    test_download_handler,
};
use crate::presentation::middleware::access_gate_middleware;
use crate::presentation::state::AppState;

pub fn create_router<S, F, L>(state: AppState<S, F, L>) -> Router
where
    S: AttachmentSource + 'static,
    F: FileLoader + 'static,
    L: LlmClient + 'static,
{
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let access_gate = state.access_gate.clone();

    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/test-download/{attachment_id}",
            get(test_download_handler::<S, F, L>),
        )
        .route(
            "/debug-attachment/{sheet_id}/{attachment_id}",
            get(debug_attachment_handler::<S, F, L>),
        )
        .route("/analyze", post(analyze_handler::<S, F, L>))
        .route(
            "/analyze-attachment/{sheet_id}/{attachment_id}",
            get(analyze_attachment_handler::<S, F, L>),
        )
        .layer(middleware::from_fn_with_state(
            access_gate,
            access_gate_middleware,
        ))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .with_state(state)
}

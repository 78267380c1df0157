use axum::Router;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{AudioSource, NotesModel, TranscriptionEngine};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{health_handler, method_not_allowed_handler, notes_handler};
use crate::presentation::middleware::require_api_key;
use crate::presentation::state::AppState;

pub fn create_router<A, E, M>(state: AppState<A, E, M>) -> Router
where
    A: AudioSource + 'static,
    E: TranscriptionEngine + 'static,
    M: NotesModel + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let mut notes_routes = post(notes_handler::<A, E, M>);

    // The key gate wraps only the POST handler, so unsupported methods still
    // reach the 405 fallback.
    if let Some(expected_key) = state.settings.auth.api_key.clone() {
        notes_routes = notes_routes.route_layer(middleware::from_fn(
            move |request: Request, next: Next| require_api_key(expected_key.clone(), request, next),
        ));
    }

    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/v1/notes",
            notes_routes.fallback(method_not_allowed_handler),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}

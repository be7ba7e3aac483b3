use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, MethodRouter},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::errors::ApiError;
use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod bookings;
pub mod extract;
pub mod plots;

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

async fn not_found() -> ApiError {
    ApiError::NotFound("Not found".into())
}

/// Wrong verbs get a JSON 405 instead of axum's empty one.
fn strict(route: MethodRouter<ServerState>) -> MethodRouter<ServerState> {
    route.fallback(method_not_allowed)
}

/// Build the application router: plot and booking endpoints, health, the
/// OpenAPI document and, when enabled, the media directory.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let max_upload = state.config.server.max_upload_bytes;

    let plots = Router::new()
        .route("/get-plots/", strict(get(plots::get_plots)))
        .route("/add-plot/", strict(post(plots::add_plot)))
        .route("/remove-plot/", strict(post(plots::remove_plot)));

    let bookings = Router::new()
        .route("/book-plot/", strict(post(bookings::book_plot)))
        .route("/get-bookings/", strict(get(bookings::get_bookings)))
        .route("/remove-booking/", strict(post(bookings::remove_booking)));

    let mut app = Router::new()
        .route("/health", strict(get(health)))
        .route("/api-docs/openapi.json", strict(get(openapi_json)))
        .merge(plots)
        .merge(bookings);

    let media = &state.config.media;
    if media.serve {
        // url_prefix is normalized to "/name/"; nest without the trailing slash
        let mount = media.url_prefix.trim_end_matches('/').to_string();
        app = app.nest_service(&mount, ServeDir::new(&media.root));
    }

    app.fallback(not_found)
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

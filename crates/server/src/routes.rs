pub mod contacts;

use axum::{
    routing::{delete, get},
    Json, Router,
};
use common::types::Message;
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use crate::{openapi::ApiDoc, state::ServerState};

/// Static greeting; independent of the storage state.
#[utoipa::path(get, path = "/", tag = "root", responses((status = 200, description = "Greeting")))]
pub async fn root() -> Json<Message> {
    Json(Message { message: "Contact Applications!" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Routes under the `/contacts` prefix
pub fn contacts_router() -> Router<ServerState> {
    Router::new()
        .route("/contacts/", get(contacts::list).post(contacts::create))
        .route("/contacts/view/:id", get(contacts::view))
        .route("/contacts/view_html/:id", get(contacts::view_html))
        .route("/contacts/remove/:id", delete(contacts::remove))
}

/// Build the full application router: greeting, contacts API, static mount
/// and the OpenAPI document.
pub fn build_router(state: ServerState, cors: CorsLayer, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/openapi.json", get(openapi_json))
        .merge(contacts_router())
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx 以 ERROR 记录
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

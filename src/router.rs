use axum::{Router, body::Body, http::Request, routing::get};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::info_span;

use crate::{
    app_state::AppState,
    games::{get_game, search_games},
    health::{health_check, root},
    openapi::openapi_json,
};

/// Any origin, method and header, with credentials. Browsers refuse `*` when
/// credentials are allowed, so the request's own values are echoed back.
pub fn permissive_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub fn app(state: AppState) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default();
                info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id,
                )
            }),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(permissive_cors());

    Router::new()
        .route("/", get(root))
        .route("/healthz", get(health_check))
        .route("/openapi.json", get(openapi_json))
        .route("/game/{app_id}", get(get_game))
        .route("/search/{query}", get(search_games))
        .layer(middleware)
        .with_state(state)
}

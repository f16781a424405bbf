use axum::Json;
use utoipa::OpenApi;

use crate::{
    extractor::{GameDetails, SearchResult},
    games::dtos::ErrorResponse,
    health::{HealthResponse, WelcomeResponse},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Steam Scraper API",
        description = "API for scraping Steam game data",
        version = "1.0.0"
    ),
    paths(
        crate::health::root,
        crate::health::health_check,
        crate::games::handlers::get_game,
        crate::games::handlers::search_games,
    ),
    components(schemas(
        GameDetails,
        SearchResult,
        ErrorResponse,
        WelcomeResponse,
        HealthResponse
    )),
    tags(
        (name = "games", description = "Steam store lookups"),
        (name = "health", description = "Service status")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

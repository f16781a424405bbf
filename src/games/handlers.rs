use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::{
    app_state::AppState,
    extractor::{GameDetails, SearchResult},
    games::dtos::{ErrorResponse, SearchParams},
    store::StoreError,
};

/// Get detailed information about a Steam game using its App ID.
#[utoipa::path(
    get,
    path = "/game/{app_id}",
    tag = "games",
    params(("app_id" = String, Path, description = "Steam app id, e.g. 620")),
    responses(
        (status = 200, description = "Extracted store page fields", body = GameDetails),
        (status = 404, description = "Store page could not be fetched", body = ErrorResponse)
    )
)]
pub async fn get_game(
    State(state): State<AppState>,
    Path(app_id): Path<String>,
) -> Result<Json<GameDetails>, StoreError> {
    let details = state.store.game_details(&app_id).await?;
    Ok(Json(details))
}

/// Search for games on Steam using a query string.
#[utoipa::path(
    get,
    path = "/search/{query}",
    tag = "games",
    params(("query" = String, Path, description = "Free-text search term"), SearchParams),
    responses(
        (status = 200, description = "Matching games in store order", body = [SearchResult]),
        (status = 500, description = "Suggestions could not be fetched", body = ErrorResponse)
    )
)]
pub async fn search_games(
    State(state): State<AppState>,
    Path(query): Path<String>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<SearchResult>>, StoreError> {
    let results = state.store.search(&query, params.limit).await?;
    Ok(Json(results))
}

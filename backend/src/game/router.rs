use super::store::StoreError;
use crate::AppState;
use crate::errors::{LobbyError, LobbyResult};
use crate::extract::LobbyJson;
use crate::messages::{
    CreateGameRequest, CreateGameResponse, DeleteGameRequest, Game, SuccessResponse,
};
use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get},
};
use tracing::{debug, error, info, warn};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/game", get(list_games).post(create_game))
        .route("/game/:id", delete(delete_game))
}

async fn list_games(State(state): State<AppState>) -> LobbyResult<Json<Vec<Game>>> {
    let games = state.games.list().map_err(|e| {
        error!(error = %e, "Failed to list games");
        LobbyError::Internal("Failed to retrieve games")
    })?;

    info!(total = games.len(), "Fetching all games");
    for (index, game) in games.iter().enumerate() {
        debug!(index, ?game, "Game");
    }

    Ok(Json(games))
}

async fn create_game(
    State(state): State<AppState>,
    LobbyJson(body): LobbyJson<CreateGameRequest>,
) -> LobbyResult<Json<CreateGameResponse>> {
    info!(name = body.name, creator = body.creator, "Create game requested");

    let name = body.name.trim();
    let creator = body.creator.trim();
    if name.is_empty() || creator.is_empty() {
        warn!("Game creation failed: missing required fields");
        return Err(LobbyError::Validation("Game name and creator are required"));
    }

    let game = state.games.create(name, creator).map_err(|e| {
        error!(error = %e, "Failed to create game");
        LobbyError::Internal("Failed to create game")
    })?;

    info!(game_id = game.id, name = game.name, creator = game.creator, "Game created");

    Ok(Json(CreateGameResponse {
        success: true,
        game,
    }))
}

async fn delete_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<LobbyJson<DeleteGameRequest>>,
) -> LobbyResult<Json<SuccessResponse>> {
    // No body means no username, which can only fail the ownership check
    let body = body.map(|LobbyJson(body)| body).unwrap_or_default();
    let username = body.username.trim();
    info!(game_id = id, username, "Delete game requested");

    let internal = |e: StoreError| {
        error!(error = %e, game_id = id, "Failed to delete game");
        LobbyError::Internal("Failed to delete game")
    };

    let Some(game) = state.games.find(&id).map_err(internal)? else {
        warn!(game_id = id, "Game deletion failed: game not found");
        return Err(LobbyError::NotFound("Game not found"));
    };

    if !game.is_created_by(username) {
        warn!(
            game_id = id,
            username,
            "Game deletion failed: user is not the creator"
        );
        return Err(LobbyError::Forbidden("Only the creator can delete the game"));
    }

    let Some(deleted) = state.games.remove_by_id(&id).map_err(internal)? else {
        return Err(LobbyError::NotFound("Game not found"));
    };

    info!(game_id = deleted.id, name = deleted.name, "Game deleted");

    Ok(Json(SuccessResponse::ok()))
}

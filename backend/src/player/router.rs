use crate::AppState;
use crate::errors::LobbyResult;
use crate::extract::LobbyJson;
use crate::messages::{PlayerRequest, SuccessResponse};
use axum::{Json, Router, extract::State, routing::post};
use tracing::info;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/player/register", post(register))
        .route("/player/login", post(login))
        .route("/player/logout", post(logout))
}

async fn register(
    State(state): State<AppState>,
    LobbyJson(body): LobbyJson<PlayerRequest>,
) -> LobbyResult<Json<SuccessResponse>> {
    info!(username = body.username, "Register requested");
    let password = body.password.unwrap_or_default();
    state.players.register(&body.username, &password)?;
    Ok(Json(SuccessResponse::ok()))
}

async fn login(
    State(state): State<AppState>,
    LobbyJson(body): LobbyJson<PlayerRequest>,
) -> LobbyResult<Json<SuccessResponse>> {
    info!(username = body.username, "Login requested");
    let password = body.password.unwrap_or_default();
    state.players.login(&body.username, &password)?;
    Ok(Json(SuccessResponse::ok()))
}

async fn logout(
    State(state): State<AppState>,
    LobbyJson(body): LobbyJson<PlayerRequest>,
) -> LobbyResult<Json<SuccessResponse>> {
    info!(username = body.username, "Logout requested");
    state.players.logout(&body.username)?;
    Ok(Json(SuccessResponse::ok()))
}

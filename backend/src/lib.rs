mod errors;
mod extract;
pub mod game;
pub mod messages;
pub mod player;

pub use errors::{LobbyError, LobbyResult};

use axum::{Router, routing::get};
use game::{GameStore, MemoryGameStore};
use player::PlayerRegistry;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

async fn health() -> &'static str {
    "ok"
}

#[derive(Clone)]
pub struct AppState {
    pub games: Arc<dyn GameStore>,
    pub players: Arc<PlayerRegistry>,
}

pub fn app() -> Router {
    app_with_store(Arc::new(MemoryGameStore::new()))
}

pub fn app_with_store(games: Arc<dyn GameStore>) -> Router {
    let state = AppState {
        games,
        players: Arc::new(PlayerRegistry::new()),
    };

    Router::new()
        .route("/health", get(health))
        .merge(game::router::router())
        .merge(player::router::router())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

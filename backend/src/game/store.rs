use super::game_id::generate_unique_game_id;
use crate::messages::Game;
use std::sync::RwLock;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("game store lock poisoned")]
    Poisoned,
    #[error("game store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Ordered collection of lobby games.
///
/// The router only talks to this trait, so a persistent backend can replace
/// [`MemoryGameStore`] without touching the HTTP contract.
pub trait GameStore: Send + Sync + 'static {
    /// Every game in insertion order
    fn list(&self) -> StoreResult<Vec<Game>>;

    /// Add to the end. Duplicate ids are not rejected.
    fn append(&self, game: Game) -> StoreResult<()>;

    /// Pick an id no stored game uses and append the new game in one step,
    /// so concurrent creates never share an id.
    fn create(&self, name: &str, creator: &str) -> StoreResult<Game>;

    /// Remove the first game with this id, returning it. `None` means not found.
    fn remove_by_id(&self, id: &str) -> StoreResult<Option<Game>>;

    fn find(&self, id: &str) -> StoreResult<Option<Game>> {
        Ok(self.list()?.into_iter().find(|game| game.id == id))
    }
}

/// Process-lifetime store; everything is lost on restart
#[derive(Default)]
pub struct MemoryGameStore {
    games: RwLock<Vec<Game>>,
}

impl MemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameStore for MemoryGameStore {
    fn list(&self) -> StoreResult<Vec<Game>> {
        let games = self.games.read().map_err(|_| StoreError::Poisoned)?;
        Ok(games.clone())
    }

    fn append(&self, game: Game) -> StoreResult<()> {
        let mut games = self.games.write().map_err(|_| StoreError::Poisoned)?;
        games.push(game);
        Ok(())
    }

    fn create(&self, name: &str, creator: &str) -> StoreResult<Game> {
        let mut games = self.games.write().map_err(|_| StoreError::Poisoned)?;
        let id = generate_unique_game_id(|id| games.iter().any(|game| game.id == id));
        let game = Game::new(id, name, creator);
        games.push(game.clone());
        Ok(game)
    }

    fn remove_by_id(&self, id: &str) -> StoreResult<Option<Game>> {
        let mut games = self.games.write().map_err(|_| StoreError::Poisoned)?;
        let Some(index) = games.iter().position(|game| game.id == id) else {
            return Ok(None);
        };
        Ok(Some(games.remove(index)))
    }

    fn find(&self, id: &str) -> StoreResult<Option<Game>> {
        let games = self.games.read().map_err(|_| StoreError::Poisoned)?;
        Ok(games.iter().find(|game| game.id == id).cloned())
    }
}

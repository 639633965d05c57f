mod game_id;
pub mod router;
mod store;

pub use store::{GameStore, MemoryGameStore, StoreError, StoreResult};

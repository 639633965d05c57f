pub mod api;
pub mod banner;
pub mod command;
pub mod config;
pub mod memory;
pub mod polling;
pub mod session;
pub mod view;

pub use api::{ClientError, ClientResult, HttpLobbyApi, LobbyApi};
pub use polling::{Countdown, DEFAULT_POLL_INTERVAL, PollingClient};
pub use session::SessionClient;
pub use view::{LobbyView, Screen, TerminalView};

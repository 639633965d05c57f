use crate::polling::DEFAULT_POLL_INTERVAL;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "lobby-client", about = "Terminal client for the game lobby")]
pub struct ClientConfig {
    /// Base URL of the lobby server
    #[arg(long, env = "LOBBY_URL", default_value = "http://127.0.0.1:3000")]
    pub url: String,

    /// Seconds between automatic refreshes of the games list
    #[arg(
        long,
        env = "POLL_INTERVAL_SECS",
        default_value_t = DEFAULT_POLL_INTERVAL.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub poll_interval: u64,

    /// File used to remember the last username
    #[arg(long, env = "LOBBY_USER_FILE", default_value = ".lobby-user")]
    pub user_file: PathBuf,
}

impl ClientConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval)
    }
}

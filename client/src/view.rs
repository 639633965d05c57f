use lobby::messages::Game;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Register,
    Lobby,
    Game,
}

/// Where the session and polling clients draw their output
pub trait LobbyView: Send + Sync + 'static {
    fn show_screen(&self, screen: Screen);
    fn render_games(&self, games: &[Game], current_user: &str);
    fn show_countdown(&self, seconds: u64);
    fn show_error(&self, message: &str);
    fn hide_error(&self);
}

pub fn format_refresh(seconds: u64) -> String {
    let plural = if seconds == 1 { "" } else { "s" };
    format!("Next refresh in {} second{}", seconds, plural)
}

pub fn format_game(game: &Game, current_user: &str) -> String {
    let mut line = format!(
        "[{}] {} - created by {}, players: {}",
        game.id,
        game.name,
        game.creator,
        game.players.len()
    );
    if game.is_created_by(current_user) {
        line.push_str(" (yours: `delete ");
        line.push_str(&game.id);
        line.push_str("` to remove)");
    }
    line
}

/// Plain stdout rendering for the interactive client.
///
/// The list is only reprinted when it changes, and the countdown is kept
/// for the `status` command instead of being printed every second.
#[derive(Default)]
pub struct TerminalView {
    last_games: Mutex<Option<Vec<Game>>>,
    countdown: AtomicU64,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn countdown(&self) -> u64 {
        self.countdown.load(Ordering::Relaxed)
    }
}

impl LobbyView for TerminalView {
    fn show_screen(&self, screen: Screen) {
        let title = match screen {
            Screen::Login => "Login (`login <username> <password>`, `register` to sign up)",
            Screen::Register => "Register (`register <username> <password> <confirm>`)",
            Screen::Lobby => "Lobby (`create <name>`, `delete <id>`, `play`, `logout`)",
            Screen::Game => "Game (`lobby` to go back)",
        };
        // Force the next render after coming back to the lobby
        if let Ok(mut last) = self.last_games.lock() {
            *last = None;
        }
        println!("== {} ==", title);
    }

    fn render_games(&self, games: &[Game], current_user: &str) {
        let Ok(mut last) = self.last_games.lock() else {
            return;
        };
        if last.as_deref() == Some(games) {
            return;
        }
        *last = Some(games.to_vec());

        if games.is_empty() {
            println!("No games yet.");
            return;
        }
        println!("Games:");
        for game in games {
            println!("  {}", format_game(game, current_user));
        }
    }

    fn show_countdown(&self, seconds: u64) {
        self.countdown.store(seconds, Ordering::Relaxed);
    }

    fn show_error(&self, message: &str) {
        eprintln!("! {}", message);
    }

    fn hide_error(&self) {}
}

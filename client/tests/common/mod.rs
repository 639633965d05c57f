#![allow(dead_code)]

use lobby::messages::Game;
use lobby_client::{ClientError, ClientResult, LobbyApi, LobbyView, Screen};
use reqwest::StatusCode;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// In-process stand-in for the lobby server
#[derive(Default)]
pub struct FakeApi {
    games: Mutex<Vec<Game>>,
    users: Mutex<HashMap<String, String>>,
    online: Mutex<HashSet<String>>,
    next_id: AtomicU64,
    list_calls: AtomicUsize,
    fail_lists: AtomicBool,
    list_delay: Mutex<Option<Duration>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(self, username: &str, password: &str) -> Self {
        self.users
            .lock()
            .unwrap()
            .insert(username.to_string(), password.to_string());
        self
    }

    /// Forget a session, as a server restart would
    pub fn end_session(&self, username: &str) {
        self.online.lock().unwrap().remove(username);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn fail_lists(&self, fail: bool) {
        self.fail_lists.store(fail, Ordering::SeqCst);
    }

    pub fn delay_lists(&self, delay: Duration) {
        *self.list_delay.lock().unwrap() = Some(delay);
    }

    pub fn games(&self) -> Vec<Game> {
        self.games.lock().unwrap().clone()
    }

    pub fn insert_game(&self, name: &str, creator: &str) -> Game {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst).to_string();
        let game = Game::new(id, name, creator);
        self.games.lock().unwrap().push(game.clone());
        game
    }
}

fn rejected(status: StatusCode, message: &str) -> ClientError {
    ClientError::Rejected {
        status,
        message: message.to_string(),
    }
}

impl LobbyApi for FakeApi {
    async fn list_games(&self) -> ClientResult<Vec<Game>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let delay = *self.list_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_lists.load(Ordering::SeqCst) {
            return Err(rejected(StatusCode::INTERNAL_SERVER_ERROR, "Failed to retrieve games"));
        }
        Ok(self.games())
    }

    async fn create_game(&self, name: &str, creator: &str) -> ClientResult<Game> {
        if name.is_empty() || creator.is_empty() {
            return Err(rejected(
                StatusCode::BAD_REQUEST,
                "Game name and creator are required",
            ));
        }
        Ok(self.insert_game(name, creator))
    }

    async fn delete_game(&self, id: &str, username: &str) -> ClientResult<()> {
        let mut games = self.games.lock().unwrap();
        let Some(index) = games.iter().position(|g| g.id == id) else {
            return Err(rejected(StatusCode::NOT_FOUND, "Game not found"));
        };
        if games[index].creator != username {
            return Err(rejected(
                StatusCode::FORBIDDEN,
                "Only the creator can delete the game",
            ));
        }
        games.remove(index);
        Ok(())
    }

    async fn register(&self, username: &str, password: &str) -> ClientResult<()> {
        let mut users = self.users.lock().unwrap();
        if users.contains_key(username) {
            return Err(rejected(StatusCode::CONFLICT, "Username is already taken"));
        }
        users.insert(username.to_string(), password.to_string());
        Ok(())
    }

    async fn login(&self, username: &str, password: &str) -> ClientResult<()> {
        let users = self.users.lock().unwrap();
        match users.get(username) {
            Some(stored) if stored == password => {
                self.online.lock().unwrap().insert(username.to_string());
                Ok(())
            }
            _ => Err(rejected(
                StatusCode::UNAUTHORIZED,
                "Invalid username or password",
            )),
        }
    }

    async fn logout(&self, username: &str) -> ClientResult<()> {
        if !self.online.lock().unwrap().remove(username) {
            return Err(rejected(
                StatusCode::NOT_FOUND,
                "No active session for this user",
            ));
        }
        Ok(())
    }
}

/// View that records everything it is asked to show
#[derive(Default)]
pub struct RecordingView {
    screens: Mutex<Vec<Screen>>,
    renders: Mutex<Vec<Vec<Game>>>,
    render_users: Mutex<Vec<String>>,
    countdowns: Mutex<Vec<u64>>,
    errors: Mutex<Vec<String>>,
    error_visible: AtomicBool,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screens(&self) -> Vec<Screen> {
        self.screens.lock().unwrap().clone()
    }

    pub fn render_count(&self) -> usize {
        self.renders.lock().unwrap().len()
    }

    pub fn last_render(&self) -> Option<Vec<Game>> {
        self.renders.lock().unwrap().last().cloned()
    }

    /// Who each render was drawn for
    pub fn render_users(&self) -> Vec<String> {
        self.render_users.lock().unwrap().clone()
    }

    pub fn countdowns(&self) -> Vec<u64> {
        self.countdowns.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    pub fn error_visible(&self) -> bool {
        self.error_visible.load(Ordering::SeqCst)
    }
}

impl LobbyView for RecordingView {
    fn show_screen(&self, screen: Screen) {
        self.screens.lock().unwrap().push(screen);
    }

    fn render_games(&self, games: &[Game], current_user: &str) {
        self.renders.lock().unwrap().push(games.to_vec());
        self.render_users
            .lock()
            .unwrap()
            .push(current_user.to_string());
    }

    fn show_countdown(&self, seconds: u64) {
        self.countdowns.lock().unwrap().push(seconds);
    }

    fn show_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
        self.error_visible.store(true, Ordering::SeqCst);
    }

    fn hide_error(&self) {
        self.error_visible.store(false, Ordering::SeqCst);
    }
}

/// Let spawned timer tasks catch up with the (paused) clock
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(10)).await;
}

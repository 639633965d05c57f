use crate::api::{ClientError, ClientResult, LobbyApi};
use crate::banner::ErrorBanner;
use crate::memory::UsernameMemory;
use crate::polling::PollingClient;
use crate::view::{LobbyView, Screen};
use reqwest::StatusCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Gates the lobby and game screens behind a successful login.
///
/// Authentication state is just the remembered username; there is no
/// server-side token.
pub struct SessionClient<A, V, M> {
    api: Arc<A>,
    view: Arc<V>,
    memory: M,
    polling: PollingClient<A, V>,
    banner: ErrorBanner<V>,
    screen: Screen,
    current_user: Option<String>,
}

impl<A: LobbyApi, V: LobbyView, M: UsernameMemory> SessionClient<A, V, M> {
    pub fn new(api: Arc<A>, view: Arc<V>, memory: M, poll_interval: Duration) -> Self {
        let polling = PollingClient::new(api.clone(), view.clone(), poll_interval);
        let banner = ErrorBanner::new(view.clone());
        view.show_screen(Screen::Login);
        Self {
            api,
            view,
            memory,
            polling,
            banner,
            screen: Screen::Login,
            current_user: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn current_user(&self) -> Option<&str> {
        self.current_user.as_deref()
    }

    pub fn remembered_username(&self) -> Option<String> {
        self.memory.load()
    }

    pub fn polling(&self) -> &PollingClient<A, V> {
        &self.polling
    }

    pub fn show_register(&mut self) {
        if self.current_user.is_none() {
            self.transition(Screen::Register);
        }
    }

    pub fn show_login(&mut self) {
        if self.current_user.is_none() {
            self.transition(Screen::Login);
        }
    }

    pub async fn register(
        &mut self,
        username: &str,
        password: &str,
        confirm_password: &str,
    ) -> ClientResult<()> {
        let result = self.try_register(username.trim(), password, confirm_password).await;
        if result.is_ok() {
            info!(username = username.trim(), "Registered");
            self.transition(Screen::Login);
        }
        self.report("Registration", result)
    }

    async fn try_register(
        &self,
        username: &str,
        password: &str,
        confirm_password: &str,
    ) -> ClientResult<()> {
        if username.is_empty() || password.is_empty() {
            return Err(ClientError::Validation(
                "Please enter both username and password",
            ));
        }
        if password != confirm_password {
            return Err(ClientError::Validation("Passwords do not match"));
        }
        self.api.register(username, password).await
    }

    /// Only accepted while logged out; switching users goes through logout
    pub async fn login(&mut self, username: &str, password: &str) -> ClientResult<()> {
        let username = username.trim();
        let result = if self.current_user.is_some() {
            Err(ClientError::Validation("Please log out first"))
        } else if username.is_empty() || password.is_empty() {
            Err(ClientError::Validation(
                "Please enter both username and password",
            ))
        } else {
            self.api.login(username, password).await
        };

        if result.is_ok() {
            info!(username, "Logged in");
            self.current_user = Some(username.to_string());
            self.memory.save(username);
            self.transition(Screen::Lobby);
        }
        self.report("Login", result)
    }

    /// Logging out while not logged in does nothing. A server that no longer
    /// knows the session (404) counts as logged out.
    pub async fn logout(&mut self) -> ClientResult<()> {
        let Some(username) = self.current_user.clone() else {
            return Ok(());
        };

        let result = match self.api.logout(&username).await {
            Err(e) if e.status() == Some(StatusCode::NOT_FOUND) => {
                debug!(username, "Session already gone on the server");
                Ok(())
            }
            other => other,
        };
        if result.is_ok() {
            info!(username, "Logged out");
            self.current_user = None;
            self.transition(Screen::Login);
        }
        self.report("Logout", result)
    }

    pub async fn create_game(&mut self, name: &str) -> ClientResult<()> {
        let result = self.try_create_game(name.trim()).await;
        if result.is_ok() {
            self.polling.refresh_now().await;
        }
        self.report("Game creation", result)
    }

    async fn try_create_game(&self, name: &str) -> ClientResult<()> {
        let creator = self.require_user()?;
        if name.is_empty() {
            return Err(ClientError::Validation("Please enter a game name"));
        }
        let game = self.api.create_game(name, creator).await?;
        info!(game_id = game.id, name = game.name, "Game created");
        Ok(())
    }

    pub async fn delete_game(&mut self, game_id: &str) -> ClientResult<()> {
        let result = match self.require_user() {
            Ok(username) => self.api.delete_game(game_id.trim(), username).await,
            Err(e) => Err(e),
        };
        if result.is_ok() {
            info!(game_id, "Game deleted");
            self.polling.refresh_now().await;
        }
        self.report("Game deletion", result)
    }

    pub fn enter_game(&mut self) {
        if self.current_user.is_some() {
            self.transition(Screen::Game);
        }
    }

    pub fn back_to_lobby(&mut self) {
        if self.current_user.is_some() {
            self.transition(Screen::Lobby);
        }
    }

    /// Best-effort logout when the client is closing
    pub async fn shutdown(&mut self) {
        if self.current_user.is_some() {
            let _ = self.logout().await;
        }
        self.polling.stop();
    }

    fn require_user(&self) -> ClientResult<&str> {
        self.current_user
            .as_deref()
            .ok_or(ClientError::Validation("Please log in first"))
    }

    /// Switch screens. Polling only runs while the lobby is shown.
    fn transition(&mut self, screen: Screen) {
        let previous = self.screen;
        self.screen = screen;

        if previous == Screen::Lobby && screen != Screen::Lobby {
            self.polling.stop();
        }
        self.view.show_screen(screen);
        if screen == Screen::Lobby
            && previous != Screen::Lobby
            && let Some(username) = &self.current_user
        {
            self.polling.start(username);
        }
    }

    fn report<T>(&mut self, action: &str, result: ClientResult<T>) -> ClientResult<T> {
        if let Err(e) = &result {
            warn!(action, error = %e, "Action failed");
            let message = match e {
                ClientError::Validation(message) => message.to_string(),
                other => format!("{} failed: {}", action, other),
            };
            self.banner.show(&message);
        }
        result
    }
}

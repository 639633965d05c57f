use crate::errors::{LobbyError, LobbyResult};
use dashmap::mapref::entry::Entry;
use dashmap::{DashMap, DashSet};
use tracing::{debug, info};

/// Registered credentials and the set of logged-in usernames.
///
/// Passwords are kept verbatim; there is no hashing or token model.
#[derive(Default)]
pub struct PlayerRegistry {
    credentials: DashMap<String, String>,
    active: DashSet<String>,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, username: &str, password: &str) -> LobbyResult<()> {
        let username = required(username, "Username and password are required")?;
        required(password, "Username and password are required")?;

        match self.credentials.entry(username.to_string()) {
            Entry::Occupied(_) => {
                debug!(username, "Username already registered");
                Err(LobbyError::Conflict("Username is already taken"))
            }
            Entry::Vacant(entry) => {
                entry.insert(password.to_string());
                info!(username, "Player registered");
                Ok(())
            }
        }
    }

    pub fn login(&self, username: &str, password: &str) -> LobbyResult<()> {
        let username = required(username, "Username and password are required")?;
        required(password, "Username and password are required")?;

        let matches = self
            .credentials
            .get(username)
            .is_some_and(|stored| *stored == password);
        if !matches {
            debug!(username, "Login rejected");
            return Err(LobbyError::InvalidCredentials);
        }

        self.active.insert(username.to_string());
        info!(username, online = self.active.len(), "Player logged in");
        Ok(())
    }

    pub fn logout(&self, username: &str) -> LobbyResult<()> {
        let username = required(username, "Username is required")?;

        if self.active.remove(username).is_none() {
            debug!(username, "Logout without active session");
            return Err(LobbyError::NotFound("No active session for this user"));
        }

        info!(username, online = self.active.len(), "Player logged out");
        Ok(())
    }
}

fn required<'a>(value: &'a str, message: &'static str) -> LobbyResult<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(LobbyError::Validation(message));
    }
    Ok(value)
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named, creator-owned entry in the lobby list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Game {
    pub id: String,
    pub name: String,
    pub creator: String,
    pub players: Vec<String>,
    pub created: DateTime<Utc>,
}

impl Game {
    /// A fresh game whose only player is its creator
    pub fn new(id: impl Into<String>, name: impl Into<String>, creator: impl Into<String>) -> Self {
        let creator = creator.into();
        Self {
            id: id.into(),
            name: name.into(),
            players: vec![creator.clone()],
            creator,
            created: Utc::now(),
        }
    }

    pub fn is_created_by(&self, username: &str) -> bool {
        self.creator == username
    }
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct CreateGameRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub creator: String,
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct DeleteGameRequest {
    #[serde(default)]
    pub username: String,
}

/// Body of every `/player/*` request. Logout only sends the username.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct PlayerRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CreateGameResponse {
    pub success: bool,
    pub game: Game,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// JSON envelope for every failed request
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_starts_with_creator_as_only_player() {
        let game = Game::new("1", "Chess", "alice");
        assert_eq!(game.players, vec!["alice".to_string()]);
        assert!(game.is_created_by("alice"));
        assert!(!game.is_created_by("bob"));
    }

    #[test]
    fn deserialize_create_game_with_missing_fields() {
        let req: CreateGameRequest = serde_json::from_str(r#"{"name": "Chess"}"#).unwrap();
        assert_eq!(req.name, "Chess");
        assert_eq!(req.creator, "");
    }

    #[test]
    fn deserialize_logout_without_password() {
        let req: PlayerRequest = serde_json::from_str(r#"{"username": "alice"}"#).unwrap();
        assert_eq!(req.username, "alice");
        assert_eq!(req.password, None);
    }

    #[test]
    fn serialize_game_uses_rfc3339_timestamp() {
        let game = Game::new("1700000000000", "Chess", "alice");
        let json = serde_json::to_value(&game).unwrap();
        assert_eq!(json["id"], "1700000000000");
        assert_eq!(json["players"], serde_json::json!(["alice"]));
        let created = json["created"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(created).is_ok());
    }

    #[test]
    fn serialize_error_envelope() {
        let json = serde_json::to_string(&ErrorResponse::new("Game not found")).unwrap();
        assert_eq!(json, r#"{"success":false,"message":"Game not found"}"#);
    }

    #[test]
    fn serialize_success() {
        let json = serde_json::to_string(&SuccessResponse::ok()).unwrap();
        assert_eq!(json, r#"{"success":true}"#);
    }
}

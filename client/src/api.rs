use lobby::messages::{
    CreateGameRequest, CreateGameResponse, DeleteGameRequest, ErrorResponse, Game, PlayerRequest,
    SuccessResponse,
};
use reqwest::{Client, Response, StatusCode};
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum ClientError {
    /// Rejected locally before anything was sent
    #[error("{0}")]
    Validation(&'static str),
    /// The server answered with an error envelope
    #[error("{message} ({status})")]
    Rejected { status: StatusCode, message: String },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            Self::Transport(e) => e.status(),
            Self::Validation(_) => None,
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Everything the lobby screens need from the server
pub trait LobbyApi: Send + Sync + 'static {
    fn list_games(&self) -> impl Future<Output = ClientResult<Vec<Game>>> + Send;

    fn create_game(
        &self,
        name: &str,
        creator: &str,
    ) -> impl Future<Output = ClientResult<Game>> + Send;

    fn delete_game(&self, id: &str, username: &str)
    -> impl Future<Output = ClientResult<()>> + Send;

    fn register(&self, username: &str, password: &str)
    -> impl Future<Output = ClientResult<()>> + Send;

    fn login(&self, username: &str, password: &str)
    -> impl Future<Output = ClientResult<()>> + Send;

    fn logout(&self, username: &str) -> impl Future<Output = ClientResult<()>> + Send;
}

/// [`LobbyApi`] over HTTP/JSON
pub struct HttpLobbyApi {
    client: Client,
    base_url: String,
}

impl HttpLobbyApi {
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn player(&self, action: &str, body: &PlayerRequest) -> ClientResult<()> {
        let response = self
            .client
            .post(self.url(&format!("/player/{}", action)))
            .json(body)
            .send()
            .await?;
        let body: SuccessResponse = check(response).await?.json().await?;
        if !body.success {
            return Err(ClientError::Rejected {
                status: StatusCode::OK,
                message: format!("{} was not accepted", action),
            });
        }
        Ok(())
    }
}

/// Turn a non-2xx response into [`ClientError::Rejected`], keeping the
/// server's message when it sent an error envelope.
async fn check(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await?;
    let message = match serde_json::from_str::<ErrorResponse>(&text) {
        Ok(envelope) => envelope.message,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("Unexpected response")
            .to_string(),
    };
    debug!(%status, message, "Request rejected");
    Err(ClientError::Rejected { status, message })
}

impl LobbyApi for HttpLobbyApi {
    async fn list_games(&self) -> ClientResult<Vec<Game>> {
        let response = self.client.get(self.url("/game")).send().await?;
        Ok(check(response).await?.json().await?)
    }

    async fn create_game(&self, name: &str, creator: &str) -> ClientResult<Game> {
        let body = CreateGameRequest {
            name: name.to_string(),
            creator: creator.to_string(),
        };
        let response = self.client.post(self.url("/game")).json(&body).send().await?;
        let created: CreateGameResponse = check(response).await?.json().await?;
        Ok(created.game)
    }

    async fn delete_game(&self, id: &str, username: &str) -> ClientResult<()> {
        let body = DeleteGameRequest {
            username: username.to_string(),
        };
        let response = self
            .client
            .delete(self.url(&format!("/game/{}", id)))
            .json(&body)
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    async fn register(&self, username: &str, password: &str) -> ClientResult<()> {
        let body = PlayerRequest {
            username: username.to_string(),
            password: Some(password.to_string()),
        };
        self.player("register", &body).await
    }

    async fn login(&self, username: &str, password: &str) -> ClientResult<()> {
        let body = PlayerRequest {
            username: username.to_string(),
            password: Some(password.to_string()),
        };
        self.player("login", &body).await
    }

    async fn logout(&self, username: &str) -> ClientResult<()> {
        let body = PlayerRequest {
            username: username.to_string(),
            password: None,
        };
        self.player("logout", &body).await
    }
}

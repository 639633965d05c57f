use crate::errors::LobbyError;
use axum::{
    Json, async_trait,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use tracing::debug;

/// JSON body extractor that rejects with the lobby error envelope
/// instead of axum's plain-text rejection.
pub struct LobbyJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for LobbyJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = LobbyError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            debug!(%rejection, "Rejected request body");
            LobbyError::Validation("Request body must be valid JSON")
        })?;

        Ok(Self(body))
    }
}

//! Client for the favorites backend.
//!
//! ```text
//! GET    {base}/api/favorites        -> [Favorite]
//! POST   {base}/api/favorites        <- NewFavorite
//! DELETE {base}/api/favorites/{id}
//! ```
//!
//! Every call carries `Authorization: Bearer <token>`.

use crate::config::FavoritesConfig;
use crate::FavoritesError;
use async_trait::async_trait;
use std::rc::Rc;
use std::time::Duration;
use turbo_auth::BearerToken;
use turbo_commerce::favorites::{Favorite, NewFavorite};
use turbo_commerce::FavoriteId;
use turbo_data::{FetchClient, ReqwestTransport, Response};

const FAVORITES_PATH: &str = "/api/favorites";

/// Operations against the user's favorites list.
#[async_trait(?Send)]
pub trait FavoritesApi {
    /// The full favorites list of the token's user.
    async fn list(&self, token: &BearerToken) -> Result<Vec<Favorite>, FavoritesError>;

    /// Create a favorite. The response body is not inspected.
    async fn add(&self, token: &BearerToken, favorite: &NewFavorite) -> Result<(), FavoritesError>;

    /// Delete a favorite by its id.
    async fn remove(&self, token: &BearerToken, id: &FavoriteId) -> Result<(), FavoritesError>;
}

/// [`FavoritesApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpFavoritesApi {
    client: FetchClient,
}

impl HttpFavoritesApi {
    /// Use a preconfigured client; its base URL must point at the backend root.
    pub fn new(client: FetchClient) -> Self {
        Self { client }
    }

    /// Build a reqwest-backed client from config.
    pub fn from_config(config: &FavoritesConfig) -> Result<Self, FavoritesError> {
        let transport = ReqwestTransport::with_timeout(Duration::from_secs(config.timeout_secs))?;
        let client = FetchClient::with_transport(Rc::new(transport))
            .with_base_url(config.normalized_base_url());
        Ok(Self::new(client))
    }
}

#[async_trait(?Send)]
impl FavoritesApi for HttpFavoritesApi {
    async fn list(&self, token: &BearerToken) -> Result<Vec<Favorite>, FavoritesError> {
        let response = self
            .client
            .get(FAVORITES_PATH)
            .bearer_auth(token.expose())
            .send()
            .await?;
        let entries: Vec<serde_json::Value> = ensure_success(response)?.json()?;
        Ok(parse_favorites(entries))
    }

    async fn add(&self, token: &BearerToken, favorite: &NewFavorite) -> Result<(), FavoritesError> {
        let response = self
            .client
            .post(FAVORITES_PATH)
            .bearer_auth(token.expose())
            .json(favorite)?
            .send()
            .await?;
        ensure_success(response)?;
        Ok(())
    }

    async fn remove(&self, token: &BearerToken, id: &FavoriteId) -> Result<(), FavoritesError> {
        let path = format!(
            "{}/{}",
            FAVORITES_PATH,
            urlencoding::encode(&id.to_string())
        );
        let response = self
            .client
            .delete(path)
            .bearer_auth(token.expose())
            .send()
            .await?;
        ensure_success(response)?;
        Ok(())
    }
}

/// Entries that don't parse as a [`Favorite`] are skipped, so one bad row
/// never hides the rest of the list.
fn parse_favorites(entries: Vec<serde_json::Value>) -> Vec<Favorite> {
    entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value(entry) {
            Ok(favorite) => Some(favorite),
            Err(e) => {
                tracing::debug!(error = %e, "skipping malformed favorite");
                None
            }
        })
        .collect()
}

fn ensure_success(response: Response) -> Result<Response, FavoritesError> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(FavoritesError::Status(response.status))
    }
}

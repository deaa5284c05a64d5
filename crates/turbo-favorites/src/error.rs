//! Favorites error types.

use thiserror::Error;
use turbo_data::FetchError;

/// Errors from the favorites backend.
#[derive(Error, Debug)]
pub enum FavoritesError {
    /// The request never produced a usable response.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The backend answered with a non-2xx status.
    #[error("favorites backend returned HTTP {0}")]
    Status(u16),
}

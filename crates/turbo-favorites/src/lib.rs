//! Product detail modal with user favorites for TurboCommerce.
//!
//! The modal shows one catalog product and lets a signed-in user add it to
//! or remove it from their favorites on the backend.
//!
//! - [`FavoriteController`]: lookup and toggle against the favorites API
//! - [`OutsideClick`] / [`ListenerSlot`]: dismiss on a press outside the content
//! - [`FavoritesConfig`]: backend URL, token key, locale and currency
//! - `web::ProductModal`: the Leptos component (feature `web`)
//!
//! # Example
//!
//! ```rust,ignore
//! use turbo_favorites::prelude::*;
//!
//! let config = FavoritesConfig::from_env()?;
//! let controller = FavoriteController::from_config(&config, credentials, notifier)?;
//!
//! let state = controller.lookup(&product).await;
//! let outcome = controller.toggle(&product, &state).await;
//! ```

mod error;

pub mod api;
pub mod config;
pub mod controller;
pub mod dismiss;
pub mod notice;

#[cfg(feature = "web")]
pub mod web;

pub use api::{FavoritesApi, HttpFavoritesApi};
pub use config::{FavoritesConfig, Locale, DEFAULT_BASE_URL};
pub use controller::{FavoriteController, FavoriteState, ToggleOutcome};
pub use dismiss::{ContentRegion, ListenerHandle, ListenerSlot, OutsideClick};
pub use error::FavoritesError;
pub use notice::{Notice, Notifier, SilentNotifier};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        FavoriteController, FavoriteState, FavoritesApi, FavoritesConfig, FavoritesError,
        HttpFavoritesApi, Locale, Notice, Notifier, ToggleOutcome,
    };
    pub use turbo_commerce::catalog::{ProductDisplay, ProductRecord};

    #[cfg(feature = "web")]
    pub use crate::web::ProductModal;
}

//! Favorite state for the product shown in the modal.
//!
//! The controller is stateless: callers own the current [`FavoriteState`]
//! and replace it with whatever [`FavoriteController::lookup`] or
//! [`FavoriteController::toggle`] returns. Nothing here cancels or orders
//! in-flight calls; a slow lookup may land after a newer one.

use crate::api::{FavoritesApi, HttpFavoritesApi};
use crate::config::{FavoritesConfig, Locale};
use crate::notice::{Notice, Notifier};
use crate::FavoritesError;
use chrono::{NaiveDate, Utc};
use std::rc::Rc;
use turbo_auth::{BearerToken, CredentialProvider};
use turbo_commerce::catalog::ProductRecord;
use turbo_commerce::favorites::{find_favorite, NewFavorite};
use turbo_commerce::{Currency, FavoriteId};

/// Whether the shown product is in the user's favorites.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FavoriteState {
    #[default]
    NotFavorited,
    /// `id` is unknown right after an add whose follow-up lookup failed.
    Favorited { id: Option<FavoriteId> },
}

impl FavoriteState {
    pub fn is_favorite(&self) -> bool {
        matches!(self, FavoriteState::Favorited { .. })
    }

    pub fn favorite_id(&self) -> Option<&FavoriteId> {
        match self {
            FavoriteState::Favorited { id } => id.as_ref(),
            FavoriteState::NotFavorited => None,
        }
    }
}

/// Result of a toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub state: FavoriteState,
    pub notice: Notice,
    /// Set when a favorite was deleted; the modal should report it and close.
    pub removed: Option<FavoriteId>,
}

impl ToggleOutcome {
    fn unchanged(current: &FavoriteState, notice: Notice) -> Self {
        Self {
            state: current.clone(),
            notice,
            removed: None,
        }
    }

    pub fn close_requested(&self) -> bool {
        self.removed.is_some()
    }

    /// Hand the outcome to the view: store the new state, then on a removal
    /// report the id and close, in that order.
    pub fn apply(
        self,
        set_state: impl FnOnce(FavoriteState),
        on_removed: impl FnOnce(FavoriteId),
        on_close: impl FnOnce(),
    ) {
        set_state(self.state);
        if let Some(id) = self.removed {
            on_removed(id);
            on_close();
        }
    }
}

/// Looks up and toggles favorites on behalf of the modal.
#[derive(Clone)]
pub struct FavoriteController {
    api: Rc<dyn FavoritesApi>,
    credentials: Rc<dyn CredentialProvider>,
    notifier: Rc<dyn Notifier>,
    locale: Locale,
    currency: Currency,
    today: fn() -> NaiveDate,
}

impl FavoriteController {
    pub fn new(
        api: Rc<dyn FavoritesApi>,
        credentials: Rc<dyn CredentialProvider>,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        Self {
            api,
            credentials,
            notifier,
            locale: Locale::default(),
            currency: Currency::default(),
            today: utc_today,
        }
    }

    /// Controller talking HTTP to the configured backend.
    pub fn from_config(
        config: &FavoritesConfig,
        credentials: Rc<dyn CredentialProvider>,
        notifier: Rc<dyn Notifier>,
    ) -> Result<Self, FavoritesError> {
        let api = HttpFavoritesApi::from_config(config)?;
        Ok(Self::new(Rc::new(api), credentials, notifier)
            .with_locale(config.locale)
            .with_currency(config.currency))
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Currency used for numeric prices in the modal.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Override the date stamped on new favorites.
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Lookup for the modal: `None`, without a request, while it is hidden
    /// or has no product.
    pub async fn refresh(&self, show: bool, product: Option<&ProductRecord>) -> Option<FavoriteState> {
        match (show, product) {
            (true, Some(product)) => Some(self.lookup(product).await),
            _ => None,
        }
    }

    /// Current favorite state of `product`.
    ///
    /// Signed out means not favorited, without a request. Every failure
    /// also degrades to not favorited; nothing is shown to the user.
    pub async fn lookup(&self, product: &ProductRecord) -> FavoriteState {
        let Some(token) = self.credentials.bearer_token() else {
            tracing::debug!("no token, skipping favorites lookup");
            return FavoriteState::NotFavorited;
        };

        match self.find_id(&token, product).await {
            Ok(Some(id)) => FavoriteState::Favorited { id: Some(id) },
            Ok(None) => FavoriteState::NotFavorited,
            Err(e) => {
                tracing::warn!(error = %e, "favorites lookup failed");
                FavoriteState::NotFavorited
            }
        }
    }

    /// Add or remove `product` depending on `current`, and notify the user.
    ///
    /// The state only moves after the backend confirms; failures leave it
    /// as it was.
    pub async fn toggle(&self, product: &ProductRecord, current: &FavoriteState) -> ToggleOutcome {
        let outcome = match self.credentials.bearer_token() {
            None => ToggleOutcome::unchanged(current, Notice::LoginRequired),
            Some(token) => match current.favorite_id() {
                Some(id) => self.remove(&token, id, current).await,
                None => self.add(&token, product, current).await,
            },
        };

        self.notifier
            .notify(outcome.notice, outcome.notice.message(self.locale));
        outcome
    }

    async fn remove(
        &self,
        token: &BearerToken,
        id: &FavoriteId,
        current: &FavoriteState,
    ) -> ToggleOutcome {
        match self.api.remove(token, id).await {
            Ok(()) => {
                tracing::info!(favorite_id = %id, "favorite removed");
                ToggleOutcome {
                    state: FavoriteState::NotFavorited,
                    notice: Notice::Removed,
                    removed: Some(id.clone()),
                }
            }
            Err(e) => {
                tracing::warn!(favorite_id = %id, error = %e, "failed to remove favorite");
                ToggleOutcome::unchanged(current, Notice::RemoveFailed)
            }
        }
    }

    async fn add(
        &self,
        token: &BearerToken,
        product: &ProductRecord,
        current: &FavoriteState,
    ) -> ToggleOutcome {
        let favorite = NewFavorite {
            product_id: product.id.clone(),
            store_id: product.store_id.clone(),
            date_ad: (self.today)(),
        };

        if let Err(e) = self.api.add(token, &favorite).await {
            tracing::warn!(error = %e, "failed to add favorite");
            return ToggleOutcome::unchanged(current, Notice::AddFailed);
        }

        // The create response is not trusted to carry the id; list again.
        let id = match self.find_id(token, product).await {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!(error = %e, "favorite added but id lookup failed");
                None
            }
        };
        tracing::info!(favorite_id = ?id.as_ref().map(ToString::to_string), "favorite added");

        ToggleOutcome {
            state: FavoriteState::Favorited { id },
            notice: Notice::Added,
            removed: None,
        }
    }

    async fn find_id(
        &self,
        token: &BearerToken,
        product: &ProductRecord,
    ) -> Result<Option<FavoriteId>, FavoritesError> {
        let favorites = self.api.list(token).await?;
        Ok(find_favorite(&favorites, product.id.as_ref()).map(|f| f.id.clone()))
    }
}

fn utc_today() -> NaiveDate {
    Utc::now().date_naive()
}

//! Favorites configuration.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use turbo_auth::DEFAULT_TOKEN_KEY;
use turbo_commerce::catalog::DisplayLabels;
use turbo_commerce::Currency;

/// Backend the storefront ships against.
pub const DEFAULT_BASE_URL: &str = "https://glowing-engine-g47g9q94v665hpwq5-3001.app.github.dev";

/// UI language for labels and notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "en" => Some(Locale::En),
            "es" => Some(Locale::Es),
            _ => None,
        }
    }

    /// Fallback labels for product display.
    pub fn display_labels(&self) -> DisplayLabels {
        match self {
            Locale::En => DisplayLabels::english(),
            Locale::Es => DisplayLabels::spanish(),
        }
    }

    /// Tooltip of the favorite toggle button.
    pub fn toggle_title(&self, favorited: bool) -> &'static str {
        match (self, favorited) {
            (Locale::En, true) => "Remove from favorites",
            (Locale::En, false) => "Add to favorites",
            (Locale::Es, true) => "Quitar de favoritos",
            (Locale::Es, false) => "Agregar a favoritos",
        }
    }

    /// Caption in front of the store label.
    pub fn store_caption(&self) -> &'static str {
        match self {
            Locale::En => "Store",
            Locale::Es => "Tienda",
        }
    }
}

/// Favorites configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoritesConfig {
    /// Backend base URL; `/api/favorites` is appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Storage key the bearer token is read from.
    #[serde(default = "default_token_key")]
    pub token_key: String,

    /// Per-request timeout (native only; browsers ignore it).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub locale: Locale,

    /// Currency symbol for numeric prices.
    #[serde(default)]
    pub currency: Currency,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_token_key() -> String {
    DEFAULT_TOKEN_KEY.to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

impl Default for FavoritesConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token_key: default_token_key(),
            timeout_secs: default_timeout_secs(),
            locale: Locale::default(),
            currency: Currency::default(),
        }
    }
}

impl FavoritesConfig {
    /// Load config from a TOML or JSON file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config: Self = if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))?
        } else {
            Self::from_toml_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Defaults overridden by `FAVORITES_*` environment variables.
    pub fn from_env() -> Result<Self> {
        let config = Self::default().with_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply `FAVORITES_BASE_URL`, `FAVORITES_TOKEN_KEY`, `FAVORITES_TIMEOUT_SECS`,
    /// `FAVORITES_LOCALE` and `FAVORITES_CURRENCY` from `lookup`. Unparseable
    /// values are ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup("FAVORITES_BASE_URL") {
            self.base_url = url;
        }
        if let Some(key) = lookup("FAVORITES_TOKEN_KEY") {
            self.token_key = key;
        }
        if let Some(secs) = lookup("FAVORITES_TIMEOUT_SECS").and_then(|v| v.parse().ok()) {
            self.timeout_secs = secs;
        }
        if let Some(locale) = lookup("FAVORITES_LOCALE").and_then(|v| Locale::from_code(&v)) {
            self.locale = locale;
        }
        if let Some(currency) = lookup("FAVORITES_CURRENCY").and_then(|v| Currency::from_code(&v)) {
            self.currency = currency;
        }
        self
    }

    /// Reject configs that cannot produce working requests.
    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            bail!("base_url must be an http(s) URL, got {:?}", self.base_url);
        }
        if self.token_key.trim().is_empty() {
            bail!("token_key must not be empty");
        }
        if self.timeout_secs == 0 {
            bail!("timeout_secs must be positive");
        }
        Ok(())
    }

    /// Base URL without a trailing slash.
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

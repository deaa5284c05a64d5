//! E-commerce domain types and logic for TurboCommerce.
//!
//! - **Catalog**: loose product records from any source and their display normalization
//! - **Favorites**: backend favorite records and lookup
//! - **Ids / Money**: identifier newtypes and currency symbols
//!
//! # Example
//!
//! ```rust,ignore
//! use turbo_commerce::prelude::*;
//!
//! let record: ProductRecord = serde_json::from_str(json)?;
//! let display = record.display();
//! println!("{} - {}", display.title, display.price_text(Currency::USD));
//! ```

pub mod ids;
pub mod money;

pub mod catalog;
pub mod favorites;

pub use ids::*;
pub use money::Currency;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::money::Currency;

    pub use crate::catalog::{
        DisplayLabels, PriceDisplay, PriceValue, ProductDisplay, ProductRecord, ProductSource,
        RatingField,
    };

    pub use crate::favorites::{find_favorite, Favorite, NewFavorite};
}

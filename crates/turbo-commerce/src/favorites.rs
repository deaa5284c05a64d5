//! Favorite records.
//!
//! Favorites are owned by the backend; the storefront only reads them and
//! asks for additions and removals.

use crate::ids::{FavoriteId, ProductId, StoreId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A favorite as listed by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: FavoriteId,
    #[serde(default)]
    pub product_id: Option<ProductId>,
    #[serde(default)]
    pub store_id: Option<StoreId>,
    /// Date added, `YYYY-MM-DD` as stored by the backend.
    #[serde(default)]
    pub date_ad: Option<String>,
}

/// Request body for creating a favorite.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewFavorite {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_id: Option<StoreId>,
    #[serde(serialize_with = "serialize_date")]
    pub date_ad: NaiveDate,
}

fn serialize_date<S: serde::Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&date.format("%Y-%m-%d"))
}

/// First favorite pointing at `product_id`. A product without an id never matches.
pub fn find_favorite<'a>(
    favorites: &'a [Favorite],
    product_id: Option<&ProductId>,
) -> Option<&'a Favorite> {
    let product_id = product_id?;
    favorites
        .iter()
        .find(|favorite| favorite.product_id.as_ref() == Some(product_id))
}

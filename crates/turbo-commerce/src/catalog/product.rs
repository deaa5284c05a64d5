//! Loosely-typed product records.
//!
//! Products reach the storefront from several catalog sources (our own
//! stores, DummyJSON, FakeStore) with different field names for the same
//! thing. [`ProductRecord`] accepts the union of those shapes; every field
//! is optional and `null` is the same as missing. Rating numbers that
//! arrive with the wrong type are dropped field by field instead of
//! rejecting the record.

use crate::ids::{ProductId, StoreId};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A product as delivered by any catalog source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: Option<ProductId>,
    /// Our stores and DummyJSON.
    pub name: Option<String>,
    /// FakeStore.
    pub title: Option<String>,
    pub price: Option<PriceValue>,
    pub description: Option<String>,
    /// Gallery; the first entry is the primary image.
    pub images: Option<Vec<String>>,
    /// Single image (FakeStore).
    pub image: Option<String>,
    pub rating: Option<RatingField>,
    #[serde(default, deserialize_with = "lenient_score")]
    pub rate: Option<f64>,
    #[serde(rename = "ratingCount", default, deserialize_with = "lenient_count")]
    pub rating_count: Option<u64>,
    pub store_name: Option<String>,
    pub source: Option<String>,
    pub store_id: Option<StoreId>,
}

/// A price as sent by the source: usually a number, sometimes preformatted text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceValue {
    Amount(f64),
    Text(String),
    /// Anything else; shown as its JSON text.
    Other(serde_json::Value),
}

/// `rating` is either a bare score or FakeStore's `{ rate, count }` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RatingField {
    Score(f64),
    Summary {
        #[serde(default, deserialize_with = "lenient_score")]
        rate: Option<f64>,
        #[serde(default, deserialize_with = "lenient_count")]
        count: Option<u64>,
    },
    /// Unusable shape; ignored by display.
    Other(serde_json::Value),
}

/// Known catalog sources, identified by the record's `source` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductSource {
    DummyJson,
    FakeStore,
}

impl ProductSource {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "dummyjson" => Some(ProductSource::DummyJson),
            "fakestore" => Some(ProductSource::FakeStore),
            _ => None,
        }
    }

    /// Store label shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            ProductSource::DummyJson => "DummyJSON",
            ProductSource::FakeStore => "FakeStore",
        }
    }
}

impl ProductRecord {
    /// The record's `source` tag, if it names a known source.
    pub fn known_source(&self) -> Option<ProductSource> {
        self.source.as_deref().and_then(ProductSource::from_tag)
    }
}

/// A finite number, or a string holding one. Anything else is `None`.
fn lenient_score<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    let score = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(score.filter(|s| s.is_finite()))
}

/// A non-negative whole number, or a string holding one. Anything else is `None`.
fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    let count = match value {
        Some(Value::Number(n)) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        }),
        Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    Ok(count)
}

//! Product catalog module.
//!
//! Contains the loose product record shared by all catalog sources and the
//! normalizer that turns it into display values.

mod display;
mod product;

pub use display::{DisplayLabels, PriceDisplay, ProductDisplay, PLACEHOLDER_IMAGE_URL};
pub use product::{PriceValue, ProductRecord, ProductSource, RatingField};

//! Normalization of product records into display values.

use crate::catalog::{PriceValue, ProductRecord, RatingField};
use crate::money::Currency;

/// Image shown when a record carries none.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/300x300?text=Sin+Imagen";

/// Fallback copy used when a record is missing a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLabels {
    pub untitled: String,
    pub price_unavailable: String,
    pub no_description: String,
    pub unknown_store: String,
    /// Suffix for the vote count, e.g. "votes" in "(12 votes)".
    pub votes: String,
}

impl DisplayLabels {
    pub fn english() -> Self {
        Self {
            untitled: "Unnamed product".to_string(),
            price_unavailable: "N/A".to_string(),
            no_description: "No description".to_string(),
            unknown_store: "Unknown".to_string(),
            votes: "votes".to_string(),
        }
    }

    pub fn spanish() -> Self {
        Self {
            untitled: "Producto sin nombre".to_string(),
            price_unavailable: "N/A".to_string(),
            no_description: "Sin descripción".to_string(),
            unknown_store: "Desconocida".to_string(),
            votes: "votos".to_string(),
        }
    }
}

impl Default for DisplayLabels {
    fn default() -> Self {
        Self::english()
    }
}

/// Price ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum PriceDisplay {
    /// Numeric amount; rendered with a currency symbol.
    Amount(f64),
    /// Rendered verbatim, including the "not available" label.
    Text(String),
}

impl PriceDisplay {
    pub fn render(&self, currency: Currency) -> String {
        match self {
            PriceDisplay::Amount(amount) => currency.format(*amount),
            PriceDisplay::Text(text) => text.clone(),
        }
    }
}

/// Canonical, fully-populated view of a product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDisplay {
    pub title: String,
    pub price: PriceDisplay,
    pub description: String,
    pub image_url: String,
    pub rating: f64,
    /// Omitted from display when absent.
    pub rating_count: Option<u64>,
    /// Store label.
    pub store: String,
}

impl ProductDisplay {
    /// Normalize a record. Never fails: every field has a terminal default.
    pub fn from_record(record: &ProductRecord, labels: &DisplayLabels) -> Self {
        let title = present(&record.name)
            .or_else(|| present(&record.title))
            .unwrap_or(&labels.untitled)
            .to_string();

        let price = match &record.price {
            Some(PriceValue::Amount(amount)) => PriceDisplay::Amount(*amount),
            Some(PriceValue::Text(text)) => PriceDisplay::Text(text.clone()),
            Some(PriceValue::Other(value)) => PriceDisplay::Text(value.to_string()),
            None => PriceDisplay::Text(labels.price_unavailable.clone()),
        };

        let description = present(&record.description)
            .unwrap_or(&labels.no_description)
            .to_string();

        let image_url = record
            .images
            .as_ref()
            .and_then(|images| images.first())
            .filter(|url| !url.is_empty())
            .or_else(|| present(&record.image))
            .map(String::as_str)
            .unwrap_or(PLACEHOLDER_IMAGE_URL)
            .to_string();

        let (rating, summary_count) = match &record.rating {
            Some(RatingField::Summary { rate, count }) => (rate.unwrap_or(0.0), *count),
            Some(RatingField::Score(score)) => (*score, None),
            Some(RatingField::Other(_)) | None => (record.rate.unwrap_or(0.0), None),
        };

        let rating_count = summary_count
            .filter(|&count| count > 0)
            .or(record.rating_count);

        let store = match (present(&record.store_name), record.known_source()) {
            (Some(name), _) => name.clone(),
            (None, Some(source)) => source.label().to_string(),
            (None, None) => labels.unknown_store.clone(),
        };

        Self {
            title,
            price,
            description,
            image_url,
            rating,
            rating_count,
            store,
        }
    }

    /// Price text for the given currency.
    pub fn price_text(&self, currency: Currency) -> String {
        self.price.render(currency)
    }

    /// `⭐ 4.5/5 (12 votes)`; the count is left out when absent or zero.
    pub fn rating_line(&self, labels: &DisplayLabels) -> String {
        match self.rating_count.filter(|&count| count > 0) {
            Some(count) => format!("⭐ {}/5 ({} {})", self.rating, count, labels.votes),
            None => format!("⭐ {}/5", self.rating),
        }
    }
}

impl ProductRecord {
    /// Normalize with the default labels.
    pub fn display(&self) -> ProductDisplay {
        ProductDisplay::from_record(self, &DisplayLabels::default())
    }
}

/// Empty strings count as missing.
fn present(value: &Option<String>) -> Option<&String> {
    value.as_ref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> ProductRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_empty_record_uses_every_default() {
        let display = ProductRecord::default().display();

        assert_eq!(display.title, "Unnamed product");
        assert_eq!(display.price, PriceDisplay::Text("N/A".to_string()));
        assert_eq!(display.description, "No description");
        assert_eq!(display.image_url, PLACEHOLDER_IMAGE_URL);
        assert_eq!(display.rating, 0.0);
        assert_eq!(display.rating_count, None);
        assert_eq!(display.store, "Unknown");
    }

    #[test]
    fn test_rating_object_form() {
        let display = record(json!({"rating": {"rate": 4.5, "count": 12}})).display();
        assert_eq!(display.rating, 4.5);
        assert_eq!(display.rating_count, Some(12));
        assert_eq!(display.rating_line(&DisplayLabels::default()), "⭐ 4.5/5 (12 votes)");
    }

    #[test]
    fn test_rating_number_form() {
        let display = record(json!({"rating": 3})).display();
        assert_eq!(display.rating, 3.0);
        assert_eq!(display.rating_count, None);
        assert_eq!(display.rating_line(&DisplayLabels::default()), "⭐ 3/5");
    }

    #[test]
    fn test_rating_falls_back_to_rate_and_rating_count() {
        let display = record(json!({"rate": 2.5, "ratingCount": 4})).display();
        assert_eq!(display.rating, 2.5);
        assert_eq!(display.rating_count, Some(4));
    }

    #[test]
    fn test_zero_object_count_falls_back_to_rating_count() {
        let display = record(json!({"rating": {"rate": 1, "count": 0}, "ratingCount": 9})).display();
        assert_eq!(display.rating_count, Some(9));
    }

    #[test]
    fn test_object_without_rate_is_zero() {
        let display = record(json!({"rating": {"count": 3}})).display();
        assert_eq!(display.rating, 0.0);
        assert_eq!(display.rating_count, Some(3));
    }

    #[test]
    fn test_title_precedence_skips_empty_name() {
        assert_eq!(record(json!({"name": "A", "title": "B"})).display().title, "A");
        assert_eq!(record(json!({"name": "", "title": "B"})).display().title, "B");
    }

    #[test]
    fn test_image_precedence() {
        let both = record(json!({"images": ["first.png", "second.png"], "image": "single.png"}));
        assert_eq!(both.display().image_url, "first.png");

        let empty_gallery = record(json!({"images": [], "image": "single.png"}));
        assert_eq!(empty_gallery.display().image_url, "single.png");
    }

    #[test]
    fn test_price_rendering() {
        let numeric = record(json!({"price": 19.5})).display();
        assert_eq!(numeric.price_text(Currency::USD), "$19.5");

        let text = record(json!({"price": "Agotado"})).display();
        assert_eq!(text.price_text(Currency::USD), "Agotado");

        let zero = record(json!({"price": 0})).display();
        assert_eq!(zero.price_text(Currency::USD), "$0");
    }

    #[test]
    fn test_empty_price_renders_verbatim() {
        let display = record(json!({"price": ""})).display();
        assert_eq!(display.price, PriceDisplay::Text(String::new()));
        assert_eq!(display.price_text(Currency::USD), "");

        let null = record(json!({"price": null})).display();
        assert_eq!(null.price_text(Currency::USD), "N/A");
    }

    #[test]
    fn test_string_count_rating_displays() {
        let display = record(json!({"rating": {"rate": 4.5, "count": "12"}})).display();
        assert_eq!(display.rating, 4.5);
        assert_eq!(display.rating_line(&DisplayLabels::default()), "⭐ 4.5/5 (12 votes)");
    }

    #[test]
    fn test_store_label_precedence() {
        let named = record(json!({"store_name": "Tienda Sol", "source": "fakestore"}));
        assert_eq!(named.display().store, "Tienda Sol");

        assert_eq!(record(json!({"source": "dummyjson"})).display().store, "DummyJSON");
        assert_eq!(record(json!({"source": "fakestore"})).display().store, "FakeStore");
        assert_eq!(record(json!({"source": "other"})).display().store, "Unknown");
    }

    #[test]
    fn test_spanish_labels() {
        let labels = DisplayLabels::spanish();
        let display = ProductDisplay::from_record(
            &record(json!({"rating": {"rate": 5, "count": 2}})),
            &labels,
        );
        assert_eq!(display.title, "Producto sin nombre");
        assert_eq!(display.store, "Desconocida");
        assert_eq!(display.rating_line(&labels), "⭐ 5/5 (2 votos)");
    }
}

//! Newtype IDs for type-safe identifiers.
//!
//! Backends in front of the storefront disagree on id shapes: the favorites
//! service issues integers, some catalog sources use strings. [`RecordId`]
//! keeps whichever the wire carried, and the newtypes keep a `FavoriteId`
//! from being passed where a `ProductId` is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An integer or string identifier, as sent by the backend.
///
/// Equality is strict: `42` and `"42"` are different ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        RecordId::Int(n)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Text(s.to_string())
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        RecordId::Text(s)
    }
}

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A backend-issued identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(RecordId);

        impl $name {
            /// Create a new ID.
            pub fn new(id: impl Into<RecordId>) -> Self {
                Self(id.into())
            }

            /// The underlying record id.
            pub fn as_record(&self) -> &RecordId {
                &self.0
            }

            /// Consume and return the inner id.
            pub fn into_inner(self) -> RecordId {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(n: i64) -> Self {
                Self(RecordId::Int(n))
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(RecordId::from(s))
            }
        }
    };
}

define_id!(ProductId);
define_id!(StoreId);
define_id!(FavoriteId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_and_text_ids_deserialize() {
        let n: ProductId = serde_json::from_str("42").unwrap();
        let s: ProductId = serde_json::from_str("\"sku-42\"").unwrap();
        assert_eq!(n, ProductId::from(42));
        assert_eq!(s, ProductId::from("sku-42"));
    }

    #[test]
    fn test_strict_equality() {
        assert_ne!(ProductId::from(42), ProductId::from("42"));
    }

    #[test]
    fn test_id_display() {
        assert_eq!(FavoriteId::from(7).to_string(), "7");
        assert_eq!(FavoriteId::from("fav-7").to_string(), "fav-7");
    }

    #[test]
    fn test_id_serializes_transparently() {
        assert_eq!(serde_json::to_string(&StoreId::from(3)).unwrap(), "3");
    }
}

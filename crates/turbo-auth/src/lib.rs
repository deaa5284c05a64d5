//! Client-side credentials for TurboCommerce.
//!
//! Components that call authenticated backend endpoints take a
//! [`CredentialProvider`] instead of reaching into browser storage
//! themselves.

mod credentials;
mod token;

pub use credentials::{CredentialProvider, StaticCredentials, StoredCredentials, DEFAULT_TOKEN_KEY};
pub use token::BearerToken;

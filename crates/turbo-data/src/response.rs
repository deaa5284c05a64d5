//! HTTP response handling.

use crate::FetchError;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;

/// An HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The response headers.
    pub headers: BTreeMap<String, String>,
    /// The response body.
    pub body: Vec<u8>,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, headers: BTreeMap<String, String>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Response with a status and no headers.
    pub fn with_status(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self::new(status, BTreeMap::new(), body.into())
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        serde_json::from_slice(&self.body).map_err(|e| FetchError::ParseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_is_success() {
        assert!(Response::with_status(200, "").is_success());
        assert!(Response::with_status(204, "").is_success());
        assert!(!Response::with_status(199, "").is_success());
        assert!(!Response::with_status(401, "").is_success());
    }

    #[test]
    fn test_response_json() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Entry {
            id: i64,
        }

        let resp = Response::with_status(200, r#"[{"id": 7}]"#);
        let entries: Vec<Entry> = resp.json().unwrap();
        assert_eq!(entries, vec![Entry { id: 7 }]);
    }

    #[test]
    fn test_response_json_invalid() {
        let resp = Response::with_status(200, "<html>oops</html>");
        let result: Result<Vec<serde_json::Value>, _> = resp.json();
        assert!(matches!(result, Err(FetchError::ParseError(_))));
    }
}

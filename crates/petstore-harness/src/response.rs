//! Raw response as returned by a dispatcher.

use crate::HarnessError;
use crate::assertion::response_received;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, Default)]
pub struct ApiResponse {
    status: u16,
    headers: HeaderMap,
    body: String,
}

impl ApiResponse {
    /// A status of 0 is accepted here so callers can model a response the
    /// presence assertion must reject.
    pub fn new(status: u16, headers: HeaderMap, body: impl Into<String>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, HarnessError> {
        serde_json::from_str(&self.body).map_err(|e| {
            let context = format!("response body (HTTP {})", self.status);
            HarnessError::from_serialization_error(e, &context)
        })
    }

    /// Method form of [`response_received`].
    pub fn ensure_received(&self) -> Result<&Self, HarnessError> {
        response_received(Some(self))?;
        Ok(self)
    }
}

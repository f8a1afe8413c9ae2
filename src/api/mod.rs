//! Remote API Client
//!
//! HTTP bindings to the labeling backend, organized by domain.
//! On wasm32 `reqwest` runs on top of the browser `fetch`.

mod error;
mod feed;
mod dataset;

use std::sync::Arc;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;

pub use error::ApiError;

/// Characters left unescaped in a path segment (RFC 3986 unreserved)
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Arc<str>,
}

impl ApiClient {
    pub fn new(base: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: Arc::from(base.trim_end_matches('/')),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// `{base}/{route}` with an optional encoded trailing segment
    fn url(&self, route: &str, param: Option<&str>) -> String {
        let mut url = format!("{}/{}", self.base, route.trim_matches('/'));
        if let Some(param) = param {
            url.push('/');
            url.extend(utf8_percent_encode(param, PATH_SEGMENT));
        }
        url
    }
}

/// Fail on non-2xx, then decode the body as JSON
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }
    let body = response.text().await?;
    decode(&body)
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    Ok(serde_json::from_str(body)?)
}

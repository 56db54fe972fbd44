//! HTTP client for the REST API
//!
//! Requests are described as plain `ApiRequest` values before they are sent,
//! so the method and URL each repository call produces can be checked without
//! a network.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// `{base}/{collection}`
pub fn collection_url(base_url: &str, collection: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), collection.trim_matches('/'))
}

/// `{base}/{collection}/{id}` with the id escaped as one path segment
pub fn record_url(base_url: &str, collection: &str, id: &str) -> String {
    format!("{}/{}", collection_url(base_url, collection), utf8_percent_encode(id, PATH_SEGMENT))
}

/// A request ready to be sent
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self { method: Method::GET, url: url.into(), body: None }
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self { method: Method::DELETE, url: url.into(), body: None }
    }

    pub fn post<B: Serialize>(url: impl Into<String>, body: &B) -> ApiResult<Self> {
        Ok(Self { method: Method::POST, url: url.into(), body: Some(serde_json::to_value(body)?) })
    }

    pub fn put<B: Serialize>(url: impl Into<String>, body: &B) -> ApiResult<Self> {
        Ok(Self { method: Method::PUT, url: url.into(), body: Some(serde_json::to_value(body)?) })
    }
}

/// Map a non-success status to an error
pub fn status_error(status: StatusCode, body: String) -> ApiError {
    match status {
        StatusCode::NOT_FOUND => ApiError::NotFound(body),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Unauthorized,
        _ => ApiError::Status { status: status.as_u16(), body },
    }
}

/// Decode a response body, accepting either a bare value or a `{ "data": ... }` envelope
pub fn decode<T: DeserializeOwned>(value: Value) -> ApiResult<T> {
    match serde_json::from_value::<T>(value.clone()) {
        Ok(decoded) => Ok(decoded),
        Err(err) => match value {
            Value::Object(mut map) if map.contains_key("data") => {
                let inner = map.remove("data").unwrap_or(Value::Null);
                serde_json::from_value(inner).map_err(ApiError::from)
            }
            _ => Err(err.into()),
        },
    }
}

/// HTTP client bound to one API base URL
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(config: &ApiConfig) -> Self {
        let builder = reqwest::Client::builder();
        // fetch() has no client-side timeout
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_secs(config.timeout_secs));

        let client = builder.build().unwrap_or_else(|e| {
            log::warn!("Falling back to default HTTP client: {}", e);
            reqwest::Client::new()
        });

        Self { client, base_url: config.base_url.clone() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a request; `None` when the response has no body (e.g. 204 on DELETE)
    pub async fn execute(&self, request: ApiRequest) -> ApiResult<Option<Value>> {
        log::debug!("{} {}", request.method, request.url);

        let mut builder = self.client.request(request.method.clone(), &request.url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            log::error!("{} {} failed: {}", request.method, request.url, e);
            ApiError::from(e)
        })?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            log::warn!("{} {} returned {}", request.method, request.url, status);
            return Err(status_error(status, text));
        }
        if text.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&text)?))
    }

    /// Send a request and decode the JSON body
    pub async fn send_json<T: DeserializeOwned>(&self, request: ApiRequest) -> ApiResult<T> {
        let url = request.url.clone();
        match self.execute(request).await? {
            Some(value) => decode(value),
            None => Err(ApiError::Internal(format!("Empty response from {url}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let base = "https://indoor-api.onrender.com/api/";
        assert_eq!(collection_url(base, "clients"), "https://indoor-api.onrender.com/api/clients");
        assert_eq!(record_url(base, "clients", "42"), "https://indoor-api.onrender.com/api/clients/42");
        assert_eq!(record_url(base, "bikes", "BIKE 01/a"), "https://indoor-api.onrender.com/api/bikes/BIKE%2001%2Fa");
    }

    #[test]
    fn test_request_bodies() {
        let req = ApiRequest::put("http://x/api/clients/1", &serde_json::json!({"name": "Jane"})).unwrap();
        assert_eq!(req.method, Method::PUT);
        assert_eq!(req.body.unwrap()["name"], "Jane");
        assert!(ApiRequest::delete("http://x/api/clients/1").body.is_none());
    }

    #[test]
    fn test_status_mapping() {
        assert!(matches!(status_error(StatusCode::NOT_FOUND, String::new()), ApiError::NotFound(_)));
        assert!(matches!(status_error(StatusCode::FORBIDDEN, String::new()), ApiError::Unauthorized));
        assert!(matches!(
            status_error(StatusCode::INTERNAL_SERVER_ERROR, "boom".into()),
            ApiError::Status { status: 500, .. }
        ));
    }

    #[test]
    fn test_decode_bare_or_enveloped() {
        let bare: Vec<u32> = decode(serde_json::json!([1, 2])).unwrap();
        let wrapped: Vec<u32> = decode(serde_json::json!({"data": [3]})).unwrap();
        assert_eq!(bare, vec![1, 2]);
        assert_eq!(wrapped, vec![3]);
        assert!(decode::<Vec<u32>>(serde_json::json!({"items": []})).is_err());
    }
}

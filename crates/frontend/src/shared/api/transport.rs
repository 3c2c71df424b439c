//! The single seam between the application and the network.

use super::error::{ApiError, ApiResult};
use crate::config::AppConfig;
use crate::shared::api_utils::join_url;
use gloo_net::http::Request;
use std::fmt;
use std::future::Future;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transport-neutral request: path is relative to the API base path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub body: Option<String>,
}

impl HttpRequest {
    fn new(method: Method, path: impl Into<String>, body: Option<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: None,
            body,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path, None)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path, None)
    }

    pub fn post(path: impl Into<String>, body: String) -> Self {
        Self::new(Method::Post, path, Some(body))
    }

    pub fn put(path: impl Into<String>, body: String) -> Self {
        Self::new(Method::Put, path, Some(body))
    }

    /// Attach an already encoded query string; empty means none
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        let query = query.into();
        self.query = if query.is_empty() { None } else { Some(query) };
        self
    }

    pub fn url(&self, base: &str) -> String {
        let url = join_url(base, &self.path);
        match &self.query {
            Some(q) => format!("{}?{}", url, q),
            None => url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and hands back the raw response.
///
/// Non-2xx answers are responses, not errors; only failures to talk to the
/// server at all are `ApiError::Network`.
#[allow(async_fn_in_trait)]
pub trait Transport: Clone + Send + Sync + 'static {
    async fn send(&self, request: &HttpRequest) -> ApiResult<HttpResponse>;
}

/// Browser transport over `fetch` (gloo-net)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpTransport {
    base_path: String,
    read_retries: u32,
}

impl HttpTransport {
    pub fn new(base_path: impl Into<String>, read_retries: u32) -> Self {
        Self {
            base_path: base_path.into(),
            read_retries,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api.base_path.clone(), config.api.read_retries)
    }

    async fn send_once(&self, request: &HttpRequest) -> ApiResult<HttpResponse> {
        let url = request.url(&self.base_path);
        log::debug!("{} {}", request.method, url);

        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };

        let sent = match &request.body {
            Some(body) => {
                builder
                    .header("Content-Type", "application/json")
                    .body(body.clone())
                    .map_err(|e| ApiError::Encode(e.to_string()))?
                    .send()
                    .await
            }
            None => builder.send().await,
        };
        let response = sent.map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: &HttpRequest) -> ApiResult<HttpResponse> {
        retry_reads(request.method, self.read_retries, || self.send_once(request)).await
    }
}

/// Run `op`, repeating it up to `retries` more times when a GET fails at the
/// network level. Mutations are attempted once.
pub async fn retry_reads<F, Fut, T>(method: Method, retries: u32, mut op: F) -> ApiResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ApiResult<T>>,
{
    let attempts = if method == Method::Get { retries + 1 } else { 1 };
    let mut attempt = 1;
    loop {
        match op().await {
            Err(e) if e.is_network() && attempt < attempts => {
                log::warn!("read failed (attempt {}/{}): {}", attempt, attempts, e);
                attempt += 1;
            }
            other => return other,
        }
    }
}

//! Cucumber Studio API client.
//!
//! Low-level HTTP plumbing: authentication headers, the verb helpers and
//! JSON:API envelope unwrapping. The endpoint methods themselves live in
//! `crate::endpoints`, one file per resource family.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, REFERER, USER_AGENT};
use reqwest::{Client, Proxy, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::config::{ClientOptions, Credentials};
use crate::error::{Result, StudioError};
use crate::models::{Envelope, ResourceId};
use crate::user_agent;

/// Media type pinned to version 1 of the API.
pub const JSONAPI_ACCEPT: &str = "application/vnd.api+json; version=1";

/// Cucumber Studio API client.
///
/// Built once with credentials; every request carries the same default
/// headers (`User-Agent`, `Accept`, `access-token`, `client`, `uid`,
/// `Referer`). Building a client performs no network I/O.
///
/// Clones share the underlying connection pool. Each clone keeps its own
/// default project id.
///
/// # Example
///
/// ```no_run
/// use studioapi::{ClientOptions, Credentials, StudioClient};
///
/// # fn example() -> studioapi::Result<()> {
/// // From CUCUMBER_STUDIO_* environment variables
/// let client = StudioClient::from_env()?;
///
/// // Or configured explicitly
/// let client = StudioClient::new(
///     Credentials::new("token", "client", "me@example.com"),
///     ClientOptions::default().with_project_id(128_042u64),
/// )?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct StudioClient {
    http: Client,
    base_url: Arc<Url>,
    credentials: Arc<Credentials>,
    user_agent: &'static str,
    project_id: Option<ResourceId>,
}

impl std::fmt::Debug for StudioClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StudioClient")
            .field("base_url", &self.base_url.as_str())
            .field("uid", &self.credentials.uid)
            .field("project_id", &self.project_id)
            .finish_non_exhaustive()
    }
}

impl StudioClient {
    /// Create a client from `CUCUMBER_STUDIO_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a credential variable is missing or the
    /// configured proxy is invalid.
    pub fn from_env() -> Result<Self> {
        Self::new(Credentials::from_env()?, ClientOptions::from_env())
    }

    /// Create a client with explicit credentials and options.
    ///
    /// # Errors
    ///
    /// Returns [`StudioError::ConfigMissing`] for a blank credential,
    /// [`StudioError::InvalidConfig`] for an unusable proxy or header, and
    /// [`StudioError::UrlError`] for an invalid base URL.
    pub fn new(credentials: Credentials, options: ClientOptions) -> Result<Self> {
        credentials.validate()?;

        let referer = options.base_url.trim_end_matches('/').to_string();
        let base_url = Url::parse(&format!("{referer}/"))?;
        let user_agent = user_agent::from_seed(&credentials.access_token);

        let headers = Self::default_headers(&credentials, &options, user_agent, &referer)?;

        let mut builder = Client::builder()
            .default_headers(headers)
            .brotli(true)
            .gzip(true)
            .deflate(true);

        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(proxy) = &options.proxy {
            let proxy = Proxy::all(proxy)
                .map_err(|e| StudioError::InvalidConfig(format!("proxy '{proxy}': {e}")))?;
            builder = builder.proxy(proxy);
        }

        let http = builder.build().map_err(StudioError::HttpError)?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
            credentials: Arc::new(credentials),
            user_agent,
            project_id: options.project_id,
        })
    }

    fn default_headers(
        credentials: &Credentials,
        options: &ClientOptions,
        user_agent: &str,
        referer: &str,
    ) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        for (name, value) in &options.headers {
            headers.insert(header_name(name)?, header_value(name, value)?);
        }

        headers.insert(USER_AGENT, header_value("User-Agent", user_agent)?);
        headers.insert(ACCEPT, HeaderValue::from_static(JSONAPI_ACCEPT));
        headers.insert(
            HeaderName::from_static("access-token"),
            header_value("access-token", &credentials.access_token)?,
        );
        headers.insert(
            HeaderName::from_static("client"),
            header_value("client", &credentials.client)?,
        );
        headers.insert(
            HeaderName::from_static("uid"),
            header_value("uid", &credentials.uid)?,
        );
        headers.insert(REFERER, header_value("Referer", referer)?);

        Ok(headers)
    }

    /// Get the base URL (always ends with `/`).
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The user agent sent with every request.
    pub fn user_agent(&self) -> &'static str {
        self.user_agent
    }

    /// The `uid` this client authenticates as.
    pub fn uid(&self) -> &str {
        &self.credentials.uid
    }

    /// Default project used when a call does not name one.
    pub fn project_id(&self) -> Option<&ResourceId> {
        self.project_id.as_ref()
    }

    /// Replace the default project.
    ///
    /// Takes `&mut self`, so it cannot overlap with calls borrowing this
    /// client. Calls already holding a clone keep the old value.
    pub fn set_project_id<I: Into<ResourceId>>(&mut self, project_id: Option<I>) {
        self.project_id = project_id.map(Into::into);
    }

    /// Pick the explicit project id, else the default.
    pub(crate) fn resolve_project<'a>(
        &'a self,
        explicit: &'a Option<ResourceId>,
    ) -> Result<&'a ResourceId> {
        explicit.as_ref().or(self.project_id.as_ref()).ok_or_else(|| {
            StudioError::ConfigMissing(
                "no project id given and the client has no default project".to_string(),
            )
        })
    }

    /// Make a GET request.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = self.base_url.join(path)?;
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(StudioError::HttpError)?;

        Self::check_response(response).await
    }

    /// Make a POST request with JSON body.
    #[tracing::instrument(skip(self, body))]
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response> {
        let url = self.base_url.join(path)?;
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(StudioError::HttpError)?;

        Self::check_response(response).await
    }

    /// Make a PATCH request with JSON body.
    #[tracing::instrument(skip(self, body))]
    pub async fn patch<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response> {
        let url = self.base_url.join(path)?;
        let response = self
            .http
            .patch(url)
            .json(body)
            .send()
            .await
            .map_err(StudioError::HttpError)?;

        Self::check_response(response).await
    }

    /// Make a DELETE request.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, path: &str) -> Result<Response> {
        let url = self.base_url.join(path)?;
        let response = self
            .http
            .delete(url)
            .send()
            .await
            .map_err(StudioError::HttpError)?;

        Self::check_response(response).await
    }

    /// Decode a `{"data": ...}` body and return `data`.
    pub(crate) async fn unwrap_data<T: DeserializeOwned>(response: Response) -> Result<T> {
        let body = response.text().await.map_err(StudioError::HttpError)?;
        let envelope: Envelope<T> = serde_json::from_str(&body)?;
        Ok(envelope.data)
    }

    /// Decode a body as-is. An empty body reads as `{}`.
    pub(crate) async fn decode_body(response: Response) -> Result<Value> {
        let body = response.text().await.map_err(StudioError::HttpError)?;
        if body.trim().is_empty() {
            return Ok(Value::Object(Default::default()));
        }
        Ok(serde_json::from_str(&body)?)
    }

    /// Check response status and convert errors.
    async fn check_response(response: Response) -> Result<Response> {
        let status = response.status();
        tracing::debug!(status = status.as_u16(), url = %response.url(), "response received");

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.map_err(StudioError::HttpError)?;
        let message = extract_error_message(&body).unwrap_or_else(|| {
            if body.trim().is_empty() {
                format!("HTTP {status}")
            } else {
                body.clone()
            }
        });

        Err(StudioError::ApiError {
            status_code: status.as_u16(),
            message,
            body,
        })
    }
}

fn header_name(name: &str) -> Result<HeaderName> {
    HeaderName::from_bytes(name.as_bytes())
        .map_err(|e| StudioError::InvalidConfig(format!("header name '{name}': {e}")))
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| StudioError::InvalidConfig(format!("header '{name}': {e}")))
}

/// Pull a human-readable message out of an error body.
///
/// Handles JSON:API error objects (`{"errors": [{"title", "detail"}]}`),
/// plain string lists (`{"errors": ["..."]}`) and `message`/`error` fields.
fn extract_error_message(body: &str) -> Option<String> {
    let json: Value = serde_json::from_str(body).ok()?;

    if let Some(first) = json.get("errors").and_then(Value::as_array).and_then(|e| e.first()) {
        if let Some(text) = first.as_str() {
            return Some(text.to_string());
        }
        if let Some(text) = first
            .get("detail")
            .or_else(|| first.get("title"))
            .and_then(Value::as_str)
        {
            return Some(text.to_string());
        }
    }

    ["message", "error"]
        .iter()
        .find_map(|key| json.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}

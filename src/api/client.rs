//! HTTP client for the Pronto API
//!
//! Wraps reqwest::Client with base URL handling, bearer token injection and
//! uniform response checking. Every public operation issues exactly one POST.

use std::fmt;
use std::sync::Arc;

use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use super::observer::{RequestObserver, TracingObserver};
use crate::error::{ProntoError, Result};

/// Organization API host.
pub const DEFAULT_API_BASE: &str = "https://stanfordohs.pronto.io/";
/// Accounts host used for the email verification and code login steps.
pub const DEFAULT_ACCOUNTS_BASE: &str = "https://accounts.pronto.io/";

/// Which host an endpoint lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Host {
    Api,
    Accounts,
}

/// Client for the Pronto API, optionally bound to an access token.
#[derive(Clone)]
pub struct ProntoClient {
    http: reqwest::Client,
    api_base: Url,
    accounts_base: Url,
    access_token: Option<String>,
    observer: Arc<dyn RequestObserver>,
}

impl ProntoClient {
    /// Client against the default hosts, with no access token.
    pub fn new() -> Result<Self> {
        Self::with_base_urls(DEFAULT_API_BASE, DEFAULT_ACCOUNTS_BASE)
    }

    /// Client against custom hosts. A missing trailing `/` is added so that
    /// endpoint paths are appended rather than replacing the last segment.
    pub fn with_base_urls(api_base: &str, accounts_base: &str) -> Result<Self> {
        Ok(Self {
            http: reqwest::Client::new(),
            api_base: parse_base(api_base)?,
            accounts_base: parse_base(accounts_base)?,
            access_token: None,
            observer: Arc::new(TracingObserver),
        })
    }

    /// Bind an access token used for every authenticated call.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Replace the default tracing observer.
    pub fn with_observer(mut self, observer: Arc<dyn RequestObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Access token bound to this client, if any.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Organization API host, always ending in `/`.
    pub fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Accounts host, always ending in `/`.
    pub fn accounts_base(&self) -> &Url {
        &self.accounts_base
    }

    /// POST a JSON body without authorization.
    pub(crate) async fn public_post<B>(
        &self,
        host: Host,
        endpoint: &str,
        body: &B,
    ) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint_url(host, endpoint)?;
        let request = self.http.post(url.clone()).json(body);
        self.execute(request, endpoint, &url).await
    }

    /// POST a JSON body with the bound bearer token.
    pub(crate) async fn authed_post<B>(&self, endpoint: &str, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let token = self.bound_token(endpoint)?;
        let url = self.endpoint_url(Host::Api, endpoint)?;
        let request = self.http.post(url.clone()).bearer_auth(token).json(body);
        self.execute(request, endpoint, &url).await
    }

    /// POST with the bound bearer token and no body.
    pub(crate) async fn authed_post_empty(&self, endpoint: &str) -> Result<Value> {
        let token = self.bound_token(endpoint)?;
        let url = self.endpoint_url(Host::Api, endpoint)?;
        let request = self
            .http
            .post(url.clone())
            .bearer_auth(token)
            .header(CONTENT_TYPE, "application/json");
        self.execute(request, endpoint, &url).await
    }

    fn bound_token(&self, endpoint: &str) -> Result<&str> {
        self.access_token
            .as_deref()
            .ok_or_else(|| ProntoError::MissingToken {
                endpoint: endpoint.to_string(),
            })
    }

    fn endpoint_url(&self, host: Host, endpoint: &str) -> Result<Url> {
        let base = match host {
            Host::Api => &self.api_base,
            Host::Accounts => &self.accounts_base,
        };
        Ok(base.join(endpoint)?)
    }

    async fn execute(
        &self,
        request: reqwest::RequestBuilder,
        endpoint: &str,
        url: &Url,
    ) -> Result<Value> {
        self.observer.on_request(endpoint, url.as_str());
        let result = self.send_once(request, endpoint).await;
        if let Err(ref e) = result {
            self.observer.on_error(endpoint, e);
        }
        result
    }

    async fn send_once(&self, request: reqwest::RequestBuilder, endpoint: &str) -> Result<Value> {
        let resp = request
            .send()
            .await
            .map_err(|source| ProntoError::Transport {
                endpoint: endpoint.to_string(),
                source,
            })?;
        self.observer.on_response(endpoint, resp.status().as_u16());
        check_response(resp, endpoint).await
    }
}

impl fmt::Debug for ProntoClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProntoClient")
            .field("api_base", &self.api_base.as_str())
            .field("accounts_base", &self.accounts_base.as_str())
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}

fn parse_base(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Check HTTP status, then decode the body as JSON unchanged.
async fn check_response(resp: reqwest::Response, endpoint: &str) -> Result<Value> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ProntoError::Status {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
            body,
        });
    }
    let bytes = resp.bytes().await.map_err(|source| ProntoError::Transport {
        endpoint: endpoint.to_string(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| ProntoError::Decode {
        endpoint: endpoint.to_string(),
        source,
    })
}

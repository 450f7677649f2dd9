//! Request plumbing shared by every endpoint.

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use angebot_auth::Session;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// REST client for the offer backend.
///
/// Cheap to clone (shares the connection pool). The bearer token comes from
/// an explicitly supplied [`Session`]; without one, authenticated endpoints
/// fail with [`ClientError::NotLoggedIn`] before any request is sent.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("angebot/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;
        Ok(Self {
            http,
            config,
            token: None,
        })
    }

    /// A copy of this client that authenticates as `session`.
    pub fn with_session(&self, session: &Session) -> Self {
        Self {
            http: self.http.clone(),
            config: self.config.clone(),
            token: Some(session.token().to_string()),
        }
    }

    /// A copy of this client without credentials.
    pub fn anonymous(&self) -> Self {
        Self {
            http: self.http.clone(),
            config: self.config.clone(),
            token: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url(), path)
    }

    /// Request without credentials (login, register).
    pub(crate) fn public(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.url(path))
    }

    /// Request carrying the bearer token.
    pub(crate) fn authed(&self, method: Method, path: &str) -> ClientResult<RequestBuilder> {
        let token = self.token.as_deref().ok_or(ClientError::NotLoggedIn)?;
        Ok(self.http.request(method, self.url(path)).bearer_auth(token))
    }

    async fn dispatch(&self, method: &Method, path: &str, req: RequestBuilder) -> ClientResult<Response> {
        tracing::debug!(%method, path, "api request");

        let resp = req.send().await.map_err(|e| {
            tracing::warn!(%method, path, error = %e, "api request failed");
            ClientError::from(e)
        })?;

        let status = resp.status();
        if status.is_success() {
            tracing::debug!(%method, path, status = status.as_u16(), "api response");
            return Ok(resp);
        }

        let body = resp.text().await.unwrap_or_default();
        let err = ClientError::from_response(status, path, &body);
        tracing::warn!(%method, path, status = status.as_u16(), error = %err, "api error");
        Err(err)
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        req: RequestBuilder,
    ) -> ClientResult<T> {
        let resp = self.dispatch(&method, path, req).await?;
        let bytes = resp.bytes().await?;
        if bytes.is_empty() {
            return Err(ClientError::Decode(format!("{method} {path}: empty response body")));
        }
        serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(format!("{method} {path}: {e}")))
    }

    pub(crate) async fn send_empty(&self, method: Method, path: &str, req: RequestBuilder) -> ClientResult<()> {
        self.dispatch(&method, path, req).await?;
        Ok(())
    }

    pub(crate) async fn send_bytes(&self, method: Method, path: &str, req: RequestBuilder) -> ClientResult<Vec<u8>> {
        let resp = self.dispatch(&method, path, req).await?;
        let bytes = resp.bytes().await?;
        tracing::debug!(%method, path, size = bytes.len(), "api binary response");
        Ok(bytes.to_vec())
    }

    /// Authenticated GET returning JSON.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let req = self.authed(Method::GET, path)?;
        self.send_json(Method::GET, path, req).await
    }

    /// Authenticated request with a JSON body, returning JSON.
    pub(crate) async fn write_json<B, T>(&self, method: Method, path: &str, body: &B) -> ClientResult<T>
    where
        B: serde::Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.authed(method.clone(), path)?.json(body);
        self.send_json(method, path, req).await
    }

    pub(crate) async fn delete(&self, path: &str) -> ClientResult<()> {
        let req = self.authed(Method::DELETE, path)?;
        self.send_empty(Method::DELETE, path, req).await
    }
}

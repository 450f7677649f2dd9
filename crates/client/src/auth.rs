use chrono::Utc;
use reqwest::Method;
use serde::Deserialize;

use angebot_auth::{Credentials, Session};

use crate::error::ClientResult;
use crate::http::ApiClient;

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
}

impl ApiClient {
    /// `POST /auth/login`. The returned session is not stored anywhere; hand
    /// it to a `SessionManager`.
    pub async fn login(&self, credentials: &Credentials) -> ClientResult<Session> {
        let path = "/auth/login";
        let req = self.public(Method::POST, path).json(credentials);
        let resp: LoginResponse = self.send_json(Method::POST, path, req).await?;
        Ok(Session::new(resp.token, credentials.email(), Utc::now()))
    }

    /// `POST /auth/register`. Registration does not log in.
    pub async fn register(&self, credentials: &Credentials) -> ClientResult<()> {
        let path = "/auth/register";
        let req = self.public(Method::POST, path).json(credentials);
        self.send_empty(Method::POST, path, req).await?;
        tracing::info!(email = %credentials.email(), "account registered");
        Ok(())
    }
}

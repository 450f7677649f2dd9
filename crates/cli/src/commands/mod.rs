//! Command handlers. Each takes the prepared [`Context`].

pub mod account;
pub mod customers;
pub mod dashboard;
pub mod offers;
pub mod quote;
pub mod rate_card;
pub mod settings;

use std::time::Duration;

use anyhow::{Context as _, Result};

use angebot_auth::{FileSessionStore, SessionManager};
use angebot_client::{ApiClient, ClientConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT};

use crate::cli::Cli;

/// Everything a command needs: the session and a client bound to it.
pub struct Context {
    pub sessions: SessionManager<FileSessionStore>,
    client: ApiClient,
}

impl Context {
    /// Flags and their `ANGEBOT_*` env fallbacks override the built-in
    /// defaults. Restores any stored session.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let base_url = cli.api_url.as_deref().unwrap_or(DEFAULT_API_URL);
        let timeout = cli.timeout.map(Duration::from_secs).unwrap_or(DEFAULT_TIMEOUT);
        let config = ClientConfig::new(base_url, timeout)?;

        let store = match &cli.session_file {
            Some(path) => FileSessionStore::new(path),
            None => FileSessionStore::default_location()?,
        };
        let mut sessions = SessionManager::new(store);
        sessions.init().context("failed to restore session")?;

        let client = ApiClient::new(config)?;
        Ok(Self { sessions, client })
    }

    /// Client carrying the current session, if there is one.
    pub fn client(&self) -> ApiClient {
        match self.sessions.current() {
            Some(session) => self.client.with_session(session),
            None => self.client.anonymous(),
        }
    }
}

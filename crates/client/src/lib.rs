//! `angebot-client`: typed REST client for the offer backend.
//!
//! The backend owns persistence, PDF rendering and email delivery; this crate
//! only shapes requests and maps responses into domain types. Requests are
//! never retried: a failure is reported once and the caller keeps whatever it
//! fetched last.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod http;

mod auth;
mod customers;
mod documents;
mod offers;
mod rate_card;
mod settings;

pub use config::{ClientConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT};
pub use dashboard::Dashboard;
pub use error::{ClientError, ClientResult};
pub use http::ApiClient;

//! `angebot-auth`: credentials and the explicit session object.
//!
//! This crate is intentionally decoupled from HTTP. The session is passed to
//! whoever needs it; nothing here is process-global.

pub mod credentials;
pub mod manager;
pub mod session;
pub mod store;

pub use credentials::{Credentials, MIN_PASSWORD_LEN};
pub use manager::SessionManager;
pub use session::Session;
pub use store::{FileSessionStore, MemorySessionStore, SessionError, SessionStore};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An authenticated account: the bearer token issued at login and the email
/// it was issued for.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    token: String,
    email: String,
    established_at: DateTime<Utc>,
}

impl Session {
    pub fn new(token: impl Into<String>, email: impl Into<String>, established_at: DateTime<Utc>) -> Self {
        Self {
            token: token.into(),
            email: email.into(),
            established_at,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn established_at(&self) -> DateTime<Utc> {
        self.established_at
    }
}

impl core::fmt::Debug for Session {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Session")
            .field("email", &self.email)
            .field("token", &"<redacted>")
            .field("established_at", &self.established_at)
            .finish()
    }
}

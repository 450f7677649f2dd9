use serde::Serialize;

use angebot_core::{DomainError, DomainResult};

/// Shortest password accepted when registering.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Email + password pair sent to `/auth/login` and `/auth/register`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Both fields are required; the email must contain `@`.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> DomainResult<Self> {
        let email = email.into().trim().to_string();
        let password = password.into();

        DomainError::require("email", &email)?;
        if !email.contains('@') {
            return Err(DomainError::validation("email must contain '@'"));
        }
        if password.is_empty() {
            return Err(DomainError::validation("password is required"));
        }

        Ok(Self { email, password })
    }

    /// Credentials for a new account: the password needs at least
    /// [`MIN_PASSWORD_LEN`] characters and must match `confirmation`.
    pub fn for_registration(
        email: impl Into<String>,
        password: impl Into<String>,
        confirmation: &str,
    ) -> DomainResult<Self> {
        let creds = Self::new(email, password)?;
        if creds.password != confirmation {
            return Err(DomainError::validation("passwords do not match"));
        }
        if creds.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(DomainError::validation(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        Ok(creds)
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl core::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

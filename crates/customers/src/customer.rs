use serde::{Deserialize, Serialize};

use angebot_core::text::{looks_like_email, null_as_empty};
use angebot_core::{CustomerId, DomainError, DomainResult, Entity};

/// A postal address as shown on an offer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub house_nr: String,
    pub plz: String,
    pub ort: String,
}

impl Address {
    pub fn is_empty(&self) -> bool {
        [&self.street, &self.house_nr, &self.plz, &self.ort]
            .iter()
            .all(|s| s.trim().is_empty())
    }
}

impl core::fmt::Display for Address {
    /// `Musterstraße 12, 10115 Berlin`; blank parts are skipped.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let line1 = join_nonblank(&self.street, &self.house_nr);
        let line2 = join_nonblank(&self.plz, &self.ort);
        match (line1.is_empty(), line2.is_empty()) {
            (false, false) => write!(f, "{line1}, {line2}"),
            (false, true) => f.write_str(&line1),
            (true, false) => f.write_str(&line2),
            (true, true) => Ok(()),
        }
    }
}

fn join_nonblank(a: &str, b: &str) -> String {
    let (a, b) = (a.trim(), b.trim());
    match (a.is_empty(), b.is_empty()) {
        (false, false) => format!("{a} {b}"),
        (false, true) => a.to_string(),
        (true, false) => b.to_string(),
        (true, true) => String::new(),
    }
}

/// Customer record (wire shape of `/customers`).
///
/// Home and work addresses are flat on the wire; use [`Customer::home_address`]
/// and [`Customer::work_address`] for the structured view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CustomerId>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub last_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub home_street: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub home_house_nr: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub home_plz: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub home_ort: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub work_street: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub work_house_nr: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub work_plz: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub work_ort: String,
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> Option<CustomerId> {
        self.id
    }
}

impl Customer {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    pub fn full_name(&self) -> String {
        join_nonblank(&self.first_name, &self.last_name)
    }

    pub fn home_address(&self) -> Address {
        Address {
            street: self.home_street.clone(),
            house_nr: self.home_house_nr.clone(),
            plz: self.home_plz.clone(),
            ort: self.home_ort.clone(),
        }
    }

    pub fn work_address(&self) -> Address {
        Address {
            street: self.work_street.clone(),
            house_nr: self.work_house_nr.clone(),
            plz: self.work_plz.clone(),
            ort: self.work_ort.clone(),
        }
    }

    pub fn set_home_address(&mut self, address: Address) {
        self.home_street = address.street;
        self.home_house_nr = address.house_nr;
        self.home_plz = address.plz;
        self.home_ort = address.ort;
    }

    pub fn set_work_address(&mut self, address: Address) {
        self.work_street = address.street;
        self.work_house_nr = address.house_nr;
        self.work_plz = address.plz;
        self.work_ort = address.ort;
    }

    /// Required: first name, last name, email (well-formed).
    pub fn validate(&self) -> DomainResult<()> {
        DomainError::require("firstName", &self.first_name)?;
        DomainError::require("lastName", &self.last_name)?;
        DomainError::require("email", &self.email)?;
        if !looks_like_email(&self.email) {
            return Err(DomainError::validation(format!(
                "email is not a valid address: {}",
                self.email.trim()
            )));
        }
        Ok(())
    }

    /// One-line label used in pickers: `Anna Maler - anna@example.de`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.full_name(), self.email)
    }
}

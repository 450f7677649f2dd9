use serde::{Deserialize, Serialize};

use angebot_core::text::{looks_like_email, null_as_empty};
use angebot_core::{DomainError, DomainResult};

/// Company settings (wire shape of `/settings/me`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySettings {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub last_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub company_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tax_number: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub street: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub house_nr: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub plz: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub ort: String,
}

impl CompanySettings {
    /// Everything printed on the letterhead is required; only the tax number
    /// may be blank. The email must be well-formed.
    pub fn validate(&self) -> DomainResult<()> {
        DomainError::require("firstName", &self.first_name)?;
        DomainError::require("lastName", &self.last_name)?;
        DomainError::require("companyName", &self.company_name)?;
        DomainError::require("phone", &self.phone)?;
        DomainError::require("email", &self.email)?;
        DomainError::require("street", &self.street)?;
        DomainError::require("houseNr", &self.house_nr)?;
        DomainError::require("plz", &self.plz)?;
        DomainError::require("ort", &self.ort)?;
        if !looks_like_email(&self.email) {
            return Err(DomainError::validation(format!(
                "email is not a valid address: {}",
                self.email.trim()
            )));
        }
        Ok(())
    }

    /// Whether these settings carry real content.
    ///
    /// The backend may answer with an all-blank record for accounts that never
    /// saved settings; only a company name, first name or street counts.
    pub fn is_filled_in(&self) -> bool {
        [&self.company_name, &self.first_name, &self.street]
            .iter()
            .any(|s| !s.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CompanySettings {
        CompanySettings {
            first_name: "Max".into(),
            last_name: "Pinsel".into(),
            company_name: "Pinsel & Rolle GmbH".into(),
            phone: "0221 4711".into(),
            email: "office@pinsel.de".into(),
            street: "Farbweg".into(),
            house_nr: "3a".into(),
            plz: "50667".into(),
            ort: "Köln".into(),
            ..CompanySettings::default()
        }
    }

    #[test]
    fn validate_requires_company_name() {
        let mut s = filled();
        assert!(s.validate().is_ok());
        s.company_name.clear();
        assert_eq!(
            s.validate().unwrap_err(),
            DomainError::Validation("companyName is required".into())
        );
    }

    #[test]
    fn validate_requires_letterhead_address() {
        let mut s = filled();
        s.street = "  ".into();
        assert_eq!(
            s.validate().unwrap_err(),
            DomainError::Validation("street is required".into())
        );

        let mut s = filled();
        s.plz.clear();
        assert_eq!(
            s.validate().unwrap_err(),
            DomainError::Validation("plz is required".into())
        );
    }

    #[test]
    fn tax_number_is_optional() {
        let s = filled();
        assert!(s.tax_number.is_empty());
        assert!(s.validate().is_ok());
    }

    #[test]
    fn email_is_required_and_well_formed() {
        let mut s = filled();
        s.email.clear();
        assert!(matches!(s.validate(), Err(DomainError::Validation(m)) if m == "email is required"));
        s.email = "office".into();
        assert!(matches!(s.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn filled_in_checks_key_fields_only() {
        assert!(!CompanySettings::default().is_filled_in());
        let only_phone = CompanySettings {
            phone: "030 1234".into(),
            ..CompanySettings::default()
        };
        assert!(!only_phone.is_filled_in());
        let only_street = CompanySettings {
            street: "Farbweg".into(),
            ..CompanySettings::default()
        };
        assert!(only_street.is_filled_in());
    }

    #[test]
    fn wire_names_are_camel_case() {
        let value = serde_json::to_value(filled()).unwrap();
        assert_eq!(value["companyName"], "Pinsel & Rolle GmbH");
        assert!(value.get("taxNumber").is_some());
        assert!(value.get("houseNr").is_some());
    }
}

//! "Request a demo" form: validation and the mail link it submits through
//!
//! The site has no backend for leads. A valid request is turned into a
//! `mailto:` link addressed to the sales inbox, with one `label: value` line
//! per field in the visitor's language.

use thiserror::Error;

/// Choices offered for the number of locations
pub const LOCATION_OPTIONS: [&str; 5] = ["1", "2-5", "6-10", "11-50", "51+"];

pub const NAME_MAX_CHARS: usize = 50;
pub const EMAIL_MAX_CHARS: usize = 100;
pub const COMPANY_MAX_CHARS: usize = 100;

/// Subject line of the generated email
pub const MAIL_SUBJECT: &str = "Nova solicitação de demonstração - Loyaltify";

/// Form fields, in display order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DemoField {
    FirstName,
    LastName,
    Email,
    Company,
    Locations,
}

impl DemoField {
    pub const ALL: [DemoField; 5] = [
        DemoField::FirstName,
        DemoField::LastName,
        DemoField::Email,
        DemoField::Company,
        DemoField::Locations,
    ];

    /// Translation key of the field label
    pub fn label_key(&self) -> &'static str {
        match self {
            DemoField::FirstName => "demo.form.firstName",
            DemoField::LastName => "demo.form.lastName",
            DemoField::Email => "demo.form.workEmail",
            DemoField::Company => "demo.form.company",
            DemoField::Locations => "demo.form.locations",
        }
    }
}

/// A single field failing validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DemoFieldError {
    #[error("First name is required")]
    FirstNameRequired,

    #[error("First name must be at most 50 characters")]
    FirstNameTooLong,

    #[error("Last name is required")]
    LastNameRequired,

    #[error("Last name must be at most 50 characters")]
    LastNameTooLong,

    #[error("Work email is required")]
    EmailRequired,

    #[error("Invalid email address")]
    EmailInvalid,

    #[error("Email must be at most 100 characters")]
    EmailTooLong,

    #[error("Company name is required")]
    CompanyRequired,

    #[error("Company name must be at most 100 characters")]
    CompanyTooLong,

    #[error("Number of locations is required")]
    LocationsRequired,
}

impl DemoFieldError {
    pub fn field(&self) -> DemoField {
        match self {
            DemoFieldError::FirstNameRequired | DemoFieldError::FirstNameTooLong => {
                DemoField::FirstName
            }
            DemoFieldError::LastNameRequired | DemoFieldError::LastNameTooLong => {
                DemoField::LastName
            }
            DemoFieldError::EmailRequired
            | DemoFieldError::EmailInvalid
            | DemoFieldError::EmailTooLong => DemoField::Email,
            DemoFieldError::CompanyRequired | DemoFieldError::CompanyTooLong => DemoField::Company,
            DemoFieldError::LocationsRequired => DemoField::Locations,
        }
    }

    /// Translation key of the message shown under the field
    pub fn message_key(&self) -> &'static str {
        match self {
            DemoFieldError::FirstNameRequired => "demo.form.errors.firstNameRequired",
            DemoFieldError::FirstNameTooLong => "demo.form.errors.firstNameMax",
            DemoFieldError::LastNameRequired => "demo.form.errors.lastNameRequired",
            DemoFieldError::LastNameTooLong => "demo.form.errors.lastNameMax",
            DemoFieldError::EmailRequired => "demo.form.errors.emailRequired",
            DemoFieldError::EmailInvalid => "demo.form.errors.emailInvalid",
            DemoFieldError::EmailTooLong => "demo.form.errors.emailMax",
            DemoFieldError::CompanyRequired => "demo.form.errors.companyRequired",
            DemoFieldError::CompanyTooLong => "demo.form.errors.companyMax",
            DemoFieldError::LocationsRequired => "demo.form.errors.locationsRequired",
        }
    }
}

/// Every field error found in one validation pass (at most one per field)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("demo request has {} invalid field(s)", .0.len())]
pub struct DemoRequestErrors(pub Vec<DemoFieldError>);

impl DemoRequestErrors {
    pub fn for_field(&self, field: DemoField) -> Option<DemoFieldError> {
        self.0.iter().copied().find(|e| e.field() == field)
    }
}

/// Raw form input as typed by the visitor
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DemoRequestForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
    pub locations: String,
}

/// Validated, normalized request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
    pub locations: String,
}

/// Basic structure check: `local@domain.tld` with no empty parts
pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    if local.is_empty() || domain.is_empty() || email.contains(char::is_whitespace) {
        return false;
    }

    domain.contains('.') && domain.split('.').all(|p| !p.is_empty())
}

fn check_text(
    value: &str,
    max: usize,
    required: DemoFieldError,
    too_long: DemoFieldError,
) -> Result<String, DemoFieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(required)
    } else if trimmed.chars().count() > max {
        Err(too_long)
    } else {
        Ok(trimmed.to_string())
    }
}

fn check_email(value: &str) -> Result<String, DemoFieldError> {
    let email = value.trim().to_lowercase();
    if email.is_empty() {
        Err(DemoFieldError::EmailRequired)
    } else if !is_valid_email(&email) {
        Err(DemoFieldError::EmailInvalid)
    } else if email.chars().count() > EMAIL_MAX_CHARS {
        Err(DemoFieldError::EmailTooLong)
    } else {
        Ok(email)
    }
}

fn check_locations(value: &str) -> Result<String, DemoFieldError> {
    let value = value.trim();
    if LOCATION_OPTIONS.contains(&value) {
        Ok(value.to_string())
    } else {
        Err(DemoFieldError::LocationsRequired)
    }
}

impl DemoRequestForm {
    pub fn value(&self, field: DemoField) -> &str {
        match field {
            DemoField::FirstName => &self.first_name,
            DemoField::LastName => &self.last_name,
            DemoField::Email => &self.email,
            DemoField::Company => &self.company,
            DemoField::Locations => &self.locations,
        }
    }

    pub fn set(&mut self, field: DemoField, value: String) {
        match field {
            DemoField::FirstName => self.first_name = value,
            DemoField::LastName => self.last_name = value,
            DemoField::Email => self.email = value,
            DemoField::Company => self.company = value,
            DemoField::Locations => self.locations = value,
        }
    }

    /// Validate a single field, as done while the visitor types
    pub fn validate_field(&self, field: DemoField) -> Option<DemoFieldError> {
        let value = self.value(field);
        let result = match field {
            DemoField::FirstName => check_text(
                value,
                NAME_MAX_CHARS,
                DemoFieldError::FirstNameRequired,
                DemoFieldError::FirstNameTooLong,
            ),
            DemoField::LastName => check_text(
                value,
                NAME_MAX_CHARS,
                DemoFieldError::LastNameRequired,
                DemoFieldError::LastNameTooLong,
            ),
            DemoField::Email => check_email(value),
            DemoField::Company => check_text(
                value,
                COMPANY_MAX_CHARS,
                DemoFieldError::CompanyRequired,
                DemoFieldError::CompanyTooLong,
            ),
            DemoField::Locations => check_locations(value),
        };
        result.err()
    }

    /// Validate every field, trimming text and lower-casing the email
    pub fn validate(&self) -> Result<DemoRequest, DemoRequestErrors> {
        let errors: Vec<DemoFieldError> = DemoField::ALL
            .iter()
            .filter_map(|field| self.validate_field(*field))
            .collect();

        if !errors.is_empty() {
            return Err(DemoRequestErrors(errors));
        }

        Ok(DemoRequest {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            company: self.company.trim().to_string(),
            locations: self.locations.trim().to_string(),
        })
    }
}

impl DemoRequest {
    pub fn value(&self, field: DemoField) -> &str {
        match field {
            DemoField::FirstName => &self.first_name,
            DemoField::LastName => &self.last_name,
            DemoField::Email => &self.email,
            DemoField::Company => &self.company,
            DemoField::Locations => &self.locations,
        }
    }

    /// Plain-text body, one `label: value` line per field
    pub fn mail_body(&self, translate: impl Fn(&str) -> String) -> String {
        DemoField::ALL
            .iter()
            .map(|field| format!("{}: {}", translate(field.label_key()), self.value(*field)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// `mailto:` link carrying the request to `recipient`
    pub fn mailto_link(&self, recipient: &str, translate: impl Fn(&str) -> String) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            urlencoding::encode(MAIL_SUBJECT),
            urlencoding::encode(&self.mail_body(translate))
        )
    }
}

//! Customer DTOs

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use domain_customer::Customer;

/// Five ASCII digits, optionally followed by three or four more with an optional hyphen
static ZIP_CODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{5}(-?[0-9]{3,4})?$").expect("zip code pattern compiles"));

/// Body of `POST /api/v1/customers`
///
/// Fields are snake_case on the wire; the camelCase spellings are accepted
/// as aliases.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCustomerRequest {
    #[validate(
        length(min = 1, max = 255, message = "must be 1 to 255 characters"),
        custom(function = "not_blank")
    )]
    pub name: String,

    #[validate(
        length(min = 1, max = 32, message = "must be 1 to 32 characters"),
        custom(function = "not_blank")
    )]
    #[serde(alias = "taxId")]
    pub tax_id: String,

    #[serde(alias = "zipCode")]
    #[validate(regex(path = *ZIP_CODE_REGEX, message = "must be a 5 to 9 digit postal code"))]
    pub zip_code: String,
}

impl CreateCustomerRequest {
    /// Builds the domain customer; the address is resolved later from `zip_code`
    pub fn to_customer(&self) -> Customer {
        Customer::new(self.name.clone(), self.tax_id.clone())
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed("must not be blank")));
    }
    Ok(())
}

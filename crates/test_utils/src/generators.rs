//! Property-Based Test Generators
//!
//! Proptest strategies producing customer data that passes request
//! validation, plus strategies for malformed zip codes.

use domain_customer::{Address, Customer};
use proptest::prelude::*;

/// Strategy for customer names (non-blank)
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,15}( [A-Z][a-z]{1,15}){0,2}"
}

/// Strategy for tax identifiers
pub fn tax_id_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{11}",
        "[0-9]{3}-[0-9]{2}-[0-9]{4}",
        "[0-9]{3}\\.[0-9]{3}\\.[0-9]{3}-[0-9]{2}",
    ]
}

/// Strategy for zip codes accepted by request validation
pub fn zip_code_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{5}",
        "[0-9]{5}-[0-9]{4}",
        "[0-9]{5}-[0-9]{3}",
        "[0-9]{8}",
    ]
}

/// Strategy for zip codes rejected by request validation
pub fn invalid_zip_code_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[0-9]{1,4}",
        "[0-9]{10,12}",
        "[A-Za-z]{5}",
        "[0-9]{5}--[0-9]{3}",
        "[0-9]{3} [0-9]{2}",
        "[٠-٩]{5}",
        "[０-９]{5}(-[０-９]{3})?",
    ]
}

/// Strategy for addresses
pub fn address_strategy() -> impl Strategy<Value = Address> {
    (
        proptest::option::of("[A-Z][a-z]{2,12} (Street|Avenue|Drive)"),
        "[A-Z][a-z]{2,15}",
        "[A-Z]{2}",
        zip_code_strategy(),
    )
        .prop_map(|(street, city, region, zip)| {
            let address = Address::new(city, region, zip);
            match street {
                Some(street) => address.with_street(street),
                None => address,
            }
        })
}

/// Strategy for customers without an address
pub fn customer_strategy() -> impl Strategy<Value = Customer> {
    (name_strategy(), tax_id_strategy()).prop_map(|(name, tax_id)| Customer::new(name, tax_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn prop_generated_customers_have_no_address(customer in customer_strategy()) {
            prop_assert!(!customer.has_address());
            prop_assert!(!customer.name.trim().is_empty());
        }

        #[test]
        fn prop_generated_zip_codes_are_digit_groups(zip in zip_code_strategy()) {
            prop_assert!(zip.chars().all(|c| c.is_ascii_digit() || c == '-'));
            prop_assert!(zip.len() >= 5 && zip.len() <= 10);
        }
    }
}

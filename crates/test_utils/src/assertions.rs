//! Custom Assertion Helpers
//!
//! Assertions with messages that name the customer under test.

use domain_customer::{Address, Customer};

/// Asserts that a customer carries exactly the expected address
///
/// # Panics
///
/// Panics if the customer has no address or a different one
pub fn assert_customer_has_address(customer: &Customer, expected: &Address) {
    match customer.address() {
        Some(actual) => assert_eq!(
            actual, expected,
            "Customer '{}' has address {:?}, expected {:?}",
            customer.name, actual, expected
        ),
        None => panic!("Customer '{}' has no address, expected {:?}", customer.name, expected),
    }
}

/// Asserts that two customers have the same identity fields
pub fn assert_same_identity(actual: &Customer, expected: &Customer) {
    assert_eq!(
        (&actual.name, &actual.tax_id),
        (&expected.name, &expected.tax_id),
        "Customer identity mismatch"
    );
}

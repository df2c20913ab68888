use crate::CoreError;
use crate::models::email::validate_email;

use googletest::prelude::*;

#[test]
fn given_plain_address_when_validated_then_ok() {
    assert_that!(validate_email("email", "ann@x.com"), ok(anything()));
}

#[test]
fn given_invalid_addresses_when_validated_then_each_is_rejected() {
    for email in [
        "",
        "ann",
        "ann@",
        "@x.com",
        "ann@@x.com",
        "ann@x",
        "ann@.com",
        "ann@x.com.",
        "ann smith@x.com",
    ] {
        let result = validate_email("email", email);
        assert!(
            matches!(result, Err(CoreError::Validation { field: "email", .. })),
            "expected '{}' to be rejected",
            email
        );
    }
}

use crate::{CoreError, SignUpParams};

use googletest::prelude::*;

#[test]
fn given_complete_params_when_validated_then_ok() {
    let params = SignUpParams::new("u1", "Ann", "ann@x.com");

    assert_that!(params.validate(), ok(anything()));
}

#[test]
fn given_empty_uid_when_validated_then_uid_field_error() {
    let params = SignUpParams::new("", "Ann", "ann@x.com");

    let result = params.validate();

    assert!(matches!(result, Err(CoreError::Validation { field: "uid", .. })));
}

#[test]
fn given_oversized_uid_when_validated_then_error() {
    let params = SignUpParams::new("u".repeat(129), "Ann", "ann@x.com");

    assert_that!(params.validate(), err(anything()));
}

#[test]
fn given_blank_name_when_validated_then_name_field_error() {
    let params = SignUpParams::new("u1", "   ", "ann@x.com");

    let result = params.validate();

    assert!(matches!(result, Err(CoreError::Validation { field: "name", .. })));
}

#[test]
fn given_bad_email_when_validated_then_email_field_error() {
    let params = SignUpParams::new("u1", "Ann", "not-an-email");

    let result = params.validate();

    assert!(matches!(result, Err(CoreError::Validation { field: "email", .. })));
}

#[test]
fn given_padded_name_when_profile_built_then_name_is_trimmed() {
    let params = SignUpParams::new("u1", "  Ann  ", "ann@x.com");

    let profile = params.profile();

    assert_that!(profile.name, eq("Ann"));
    assert_that!(profile.email, eq("ann@x.com"));
}

use crate::{CoreError, SignInParams};

use googletest::prelude::*;

#[test]
fn given_id_token_json_field_when_deserialized_then_token_is_read() {
    let params: SignInParams =
        serde_json::from_str(r#"{"email":"ann@x.com","idToken":"abc"}"#).unwrap();

    assert_that!(params.email, eq("ann@x.com"));
    assert_that!(params.identity_token, eq("abc"));
}

#[test]
fn given_identity_token_alias_when_deserialized_then_token_is_read() {
    let params: SignInParams =
        serde_json::from_str(r#"{"email":"ann@x.com","identityToken":"abc"}"#).unwrap();

    assert_that!(params.identity_token, eq("abc"));
}

#[test]
fn given_empty_token_when_validated_then_error() {
    let params = SignInParams::new("ann@x.com", " ");

    let result = params.validate();

    assert!(matches!(
        result,
        Err(CoreError::Validation { field: "idToken", .. })
    ));
}

#[test]
fn given_params_when_debug_formatted_then_token_is_redacted() {
    let params = SignInParams::new("ann@x.com", "secret-token-value");

    let rendered = format!("{:?}", params);

    assert_that!(rendered, contains_substring("ann@x.com"));
    assert_that!(rendered, not(contains_substring("secret-token-value")));
}

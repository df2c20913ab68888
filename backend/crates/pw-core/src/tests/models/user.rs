use crate::{User, UserProfile};

#[test]
fn given_profile_when_user_built_then_id_comes_from_uid() {
    let profile = UserProfile::new("Ann", "ann@x.com");

    let user = User::from_profile("u1", profile);

    assert_eq!(user.id, "u1");
    assert_eq!(user.name, "Ann");
    assert_eq!(user.email, "ann@x.com");
}

#[test]
fn given_user_when_serialized_then_has_id_name_email() {
    let user = User::from_profile("u1", UserProfile::new("Ann", "ann@x.com"));

    let json = serde_json::to_value(&user).unwrap();

    assert_eq!(json["id"], "u1");
    assert_eq!(json["name"], "Ann");
    assert_eq!(json["email"], "ann@x.com");
}

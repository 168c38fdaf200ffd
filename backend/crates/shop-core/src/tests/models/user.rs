use crate::{CoreError, DEFAULT_DISPLAY_NAME, ExternalProfile, Role, User};

use googletest::prelude::*;

#[test]
fn given_full_profile_when_building_user_then_fields_are_normalized() {
    let profile = ExternalProfile::new("g-1", Some("  Ada@Example.COM "), Some("  Ada L. "));

    let user = User::from_profile(&profile);

    assert_eq!(user.external_id.as_deref(), Some("g-1"));
    assert_eq!(user.email.as_deref(), Some("ada@example.com"));
    assert_that!(user.display_name, eq("Ada L."));
    assert_that!(user.role, eq(Role::Unset));
    assert_that!(user.created_at, eq(user.updated_at));
}

#[test]
fn given_profile_without_name_when_building_user_then_placeholder_is_used() {
    let profile = ExternalProfile::new("g-2", None, Some("   "));

    let user = User::from_profile(&profile);

    assert_that!(user.email, none());
    assert_that!(user.display_name, eq(DEFAULT_DISPLAY_NAME));
}

#[test]
fn given_unset_user_when_assigning_merchant_then_role_is_set() {
    let mut user = User::new(None, None, "Shop".to_string());

    user.assign_role(Role::Merchant).unwrap();

    assert_that!(user.role, eq(Role::Merchant));
    assert!(user.has_role(Role::Merchant));
}

#[test]
fn given_user_with_role_when_assigning_again_then_error() {
    let mut user = User::new(None, None, "Shop".to_string());
    user.assign_role(Role::Client).unwrap();

    let result = user.assign_role(Role::Merchant);

    assert!(matches!(
        result,
        Err(CoreError::RoleAlreadyAssigned {
            current: Role::Client,
            ..
        })
    ));
    assert_that!(user.role, eq(Role::Client));
}

#[test]
fn given_unset_user_when_assigning_unset_then_validation_error() {
    let mut user = User::new(None, None, "Shop".to_string());

    let result = user.assign_role(Role::Unset);

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn given_unlinked_user_when_linking_then_external_id_is_set() {
    let mut user = User::new(None, Some("a@x.com".to_string()), "A".to_string());

    user.link_external_id("g1");

    assert_eq!(user.external_id.as_deref(), Some("g1"));
    assert_eq!(user.email.as_deref(), Some("a@x.com"));
}

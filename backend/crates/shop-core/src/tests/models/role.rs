use crate::Role;

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Merchant.as_str(), "merchant");
    assert_eq!(Role::Client.as_str(), "client");
    assert_eq!(Role::Unset.as_str(), "unset");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("merchant").unwrap(), Role::Merchant);
    assert_eq!(Role::from_str("client").unwrap(), Role::Client);
    assert_eq!(Role::from_str("unset").unwrap(), Role::Unset);
    assert!(Role::from_str("admin").is_err());
    assert!(Role::from_str("Merchant").is_err());
}

#[test]
fn test_role_default_is_unset() {
    assert_eq!(Role::default(), Role::Unset);
}

#[test]
fn test_role_transitions_only_from_unset() {
    assert!(Role::Unset.can_transition_to(Role::Merchant));
    assert!(Role::Unset.can_transition_to(Role::Client));
    assert!(!Role::Unset.can_transition_to(Role::Unset));
    assert!(!Role::Merchant.can_transition_to(Role::Client));
    assert!(!Role::Client.can_transition_to(Role::Merchant));
    assert!(!Role::Merchant.can_transition_to(Role::Unset));
}

#[test]
fn test_role_serde_uses_snake_case() {
    let json = serde_json::to_string(&Role::Merchant).unwrap();
    assert_eq!(json, "\"merchant\"");

    let role: Role = serde_json::from_str("\"client\"").unwrap();
    assert_eq!(role, Role::Client);
}

use crate::ExternalProfile;

#[test]
fn test_profile_deserializes_from_openid_userinfo() {
    let json = r#"{"sub":"1234","email":"A@X.com","name":"Ada","picture":"p.png"}"#;

    let profile: ExternalProfile = serde_json::from_str(json).unwrap();

    assert_eq!(profile.external_id, "1234");
    assert_eq!(profile.email.as_deref(), Some("A@X.com"));
    assert_eq!(profile.display_name.as_deref(), Some("Ada"));
}

#[test]
fn test_profile_deserializes_legacy_id_field() {
    let json = r#"{"id":"987","name":"Bob"}"#;

    let profile: ExternalProfile = serde_json::from_str(json).unwrap();

    assert_eq!(profile.external_id, "987");
    assert_eq!(profile.email, None);
}

#[test]
fn test_profile_normalized_email() {
    let profile = ExternalProfile::new("1", Some("A@X.com  "), None);
    assert_eq!(profile.normalized_email().as_deref(), Some("a@x.com"));
}

#[test]
fn test_profile_prefers_sub_when_both_identifiers_present() {
    let json = r#"{"sub":"openid-1","id":"legacy-1","email":"a@x.com"}"#;

    let profile: ExternalProfile = serde_json::from_str(json).unwrap();

    assert_eq!(profile.external_id, "openid-1");
}

#[test]
fn test_profile_without_identifier_is_rejected() {
    let json = r#"{"email":"a@x.com","name":"Ada"}"#;

    let result = serde_json::from_str::<ExternalProfile>(json);

    assert!(result.is_err());
}

use crate::{Session, UserProfile, Zone};

use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_nested_zone_when_deserialized_then_zone_id_from_zona() {
    // Given
    let raw = json!({
        "id": 3,
        "username": "mlopez",
        "nombre_completo": "María López",
        "zona": { "id": 7, "nombre": "Centro" },
        "idzona": 99
    });

    // When
    let user: UserProfile = serde_json::from_value(raw).unwrap();

    // Then
    assert_that!(user.zone_id(), some(eq(7)));
    assert_that!(user.zone_name(), some(eq("Centro")));
    assert_that!(user.display_name(), eq("María López"));
}

#[test]
fn given_legacy_idzona_only_when_deserialized_then_zone_id_falls_back() {
    // Given
    let raw = json!({ "id": "3", "idzona": "5" });

    // When
    let user: UserProfile = serde_json::from_value(raw).unwrap();

    // Then
    assert_that!(user.id, eq(3));
    assert_that!(user.zone_id(), some(eq(5)));
    assert_that!(user.zone_name(), none());
}

#[test]
fn given_no_zone_when_deserialized_then_zone_absent() {
    let user: UserProfile = serde_json::from_value(json!({ "id": 1 })).unwrap();

    assert_that!(user.zona, none());
    assert_that!(user.display_name(), eq("user #1"));
}

#[test]
fn given_normalized_profile_when_serialized_then_reloads_identically() {
    // Given
    let user: UserProfile =
        serde_json::from_value(json!({ "id": 3, "username": "mlopez", "idzona": 5 })).unwrap();

    // When
    let written = serde_json::to_value(&user).unwrap();
    let reloaded: UserProfile = serde_json::from_value(written.clone()).unwrap();

    // Then
    assert_that!(written.get("idzona"), none());
    assert_that!(written["zona"]["id"], eq(&json!(5)));
    assert_that!(written["username"], eq(&json!("mlopez")));
    assert_that!(reloaded, eq(&user));
}

#[test]
fn given_newer_profile_when_merged_then_newer_fields_win() {
    // Given
    let mut user = UserProfile::new(3, Some("Old".into()), Some(Zone { id: 1, nombre: None }));
    let newer: UserProfile = serde_json::from_value(
        json!({ "id": 3, "zona": { "id": 2, "nombre": "Norte" }, "rol": "admin" }),
    )
    .unwrap();

    // When
    user.merge(newer);

    // Then
    assert_that!(user.nombre_completo.as_deref(), some(eq("Old")));
    assert_that!(user.zone_id(), some(eq(2)));
    assert_that!(user.extra["rol"], eq(&json!("admin")));
}

#[test]
fn test_session_ids_come_from_user() {
    let session = Session::new(
        "tok",
        Some(UserProfile::new(4, None, Some(Zone { id: 9, nombre: None }))),
    );
    assert_eq!(session.user_id(), Some(4));
    assert_eq!(session.zone_id(), Some(9));

    let anonymous_profile = Session::new("tok", None);
    assert_eq!(anonymous_profile.user_id(), None);
    assert_eq!(anonymous_profile.zone_id(), None);
}

use crate::{EnrollmentType, ParticipationType, PaymentType, Sex};

use std::str::FromStr;

#[test]
fn test_sex_wire_values() {
    assert_eq!(Sex::Male.as_str(), "Masculino");
    assert_eq!(Sex::Female.as_str(), "Femenino");
    assert_eq!(serde_json::to_string(&Sex::Female).unwrap(), "\"Femenino\"");
}

#[test]
fn test_sex_from_str_accepts_wire_and_english() {
    assert_eq!(Sex::from_str("Masculino").unwrap(), Sex::Male);
    assert_eq!(Sex::from_str("female").unwrap(), Sex::Female);
    assert!(Sex::from_str("other").is_err());
}

#[test]
fn test_enrollment_type_general_is_normal_on_the_wire() {
    assert_eq!(EnrollmentType::General.as_str(), "normal");
    assert_eq!(
        serde_json::to_string(&EnrollmentType::Combo).unwrap(),
        "\"combo\""
    );
    assert_eq!(
        serde_json::from_str::<EnrollmentType>("\"normal\"").unwrap(),
        EnrollmentType::General
    );
    assert_eq!(EnrollmentType::from_str("general").unwrap(), EnrollmentType::General);
}

#[test]
fn test_enrollment_label_for_unknown_value_echoes_raw() {
    assert_eq!(EnrollmentType::label_for("combo"), "Combo");
    assert_eq!(EnrollmentType::label_for("vip"), "vip");
}

#[test]
fn test_payment_type_round_trips_wire_value() {
    for payment in PaymentType::ALL {
        assert_eq!(PaymentType::from_str(payment.as_str()).unwrap(), payment);
    }
    assert_eq!(PaymentType::default(), PaymentType::MobilePayment);
    assert_eq!(PaymentType::label_for("divisa"), "Foreign currency");
}

#[test]
fn test_participation_type_from_str() {
    assert_eq!(
        ParticipationType::from_str("Niño").unwrap(),
        ParticipationType::Child
    );
    assert_eq!(
        ParticipationType::from_str("assembly-member").unwrap(),
        ParticipationType::AssemblyMember
    );
    assert_eq!(
        ParticipationType::from_str("Invitado Especial").unwrap(),
        ParticipationType::SpecialGuest
    );
    assert!(ParticipationType::from_str("staff").is_err());
}

#[test]
fn test_invalid_value_error_names_the_value() {
    let err = PaymentType::from_str("cheque").unwrap_err();
    assert!(err.to_string().contains("cheque"));
}

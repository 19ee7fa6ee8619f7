use crate::{
    EnrollmentType, FormField, ParticipationType, PaymentType, RecordDraft, Sex,
};

fn valid_draft() -> RecordDraft {
    RecordDraft {
        nombre: "Ana".into(),
        apellido: "Diaz".into(),
        edad: "10".into(),
        sexo: "Femenino".into(),
        referencia_pago: "PM-0042".into(),
        monto: "100".into(),
        tipo_asamblea: "Niño".into(),
        ..RecordDraft::default()
    }
}

#[test]
fn test_default_draft_preselects_enrollment_and_payment() {
    let draft = RecordDraft::default();
    assert_eq!(draft.tipo_matricula, "normal");
    assert_eq!(draft.tipo_pago, "pago_movil");
    assert!(draft.nombre.is_empty());
    assert!(!draft.is_valid());
}

#[test]
fn test_valid_draft_builds_payload() {
    let record = valid_draft().validate().unwrap();

    assert_eq!(record.nombre, "Ana");
    assert_eq!(record.edad, Some(10));
    assert_eq!(record.sexo, Sex::Female);
    assert_eq!(record.tipo_matricula, EnrollmentType::General);
    assert_eq!(record.tipo_pago, PaymentType::MobilePayment);
    assert_eq!(record.monto, 100.0);
    assert_eq!(record.tipo_asamblea, ParticipationType::Child);
    assert_eq!(record.usuario_id, None);
    assert_eq!(record.zona_id, None);
}

#[test]
fn test_payload_serializes_wire_values() {
    let record = valid_draft().validate().unwrap();
    let value = serde_json::to_value(&record).unwrap();

    assert_eq!(value["sexo"], "Femenino");
    assert_eq!(value["tipo_matricula"], "normal");
    assert_eq!(value["tipo_asamblea"], "Niño");
    assert!(value.get("usuario_id").is_none());
    assert!(value.get("zona_id").is_none());
}

#[test]
fn test_negative_amount_rejected() {
    let draft = RecordDraft {
        monto: "-5".into(),
        ..valid_draft()
    };

    let errors = draft.validate().unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(FormField::Amount), Some("Amount cannot be negative"));
}

#[test]
fn test_amount_bounds_inclusive() {
    for ok in ["0", "1000000", "999999.99"] {
        let draft = RecordDraft {
            monto: ok.into(),
            ..valid_draft()
        };
        assert!(draft.is_valid(), "{ok} should be accepted");
    }

    let draft = RecordDraft {
        monto: "1000000.01".into(),
        ..valid_draft()
    };
    assert!(draft.validate().unwrap_err().contains(FormField::Amount));
}

#[test]
fn test_age_optional_but_bounded() {
    let without_age = RecordDraft {
        edad: "  ".into(),
        ..valid_draft()
    };
    assert_eq!(without_age.validate().unwrap().edad, None);

    for bad in ["0", "121", "12.5", "ten"] {
        let draft = RecordDraft {
            edad: bad.into(),
            ..valid_draft()
        };
        let errors = draft.validate().unwrap_err();
        assert!(errors.contains(FormField::Age), "{bad} should be rejected");
    }
}

#[test]
fn test_text_length_limit_counts_characters() {
    let fifty_accented = "é".repeat(50);
    let draft = RecordDraft {
        nombre: fifty_accented,
        ..valid_draft()
    };
    assert!(draft.is_valid());

    let draft = RecordDraft {
        referencia_pago: "x".repeat(51),
        ..valid_draft()
    };
    let errors = draft.validate().unwrap_err();
    assert_eq!(
        errors.get(FormField::PaymentReference),
        Some("At most 50 characters")
    );
}

#[test]
fn test_every_failing_field_is_reported() {
    let draft = RecordDraft {
        tipo_pago: String::new(),
        ..RecordDraft::default()
    };

    let errors = draft.validate().unwrap_err();
    let fields: Vec<FormField> = errors.iter().map(|(field, _)| field).collect();

    assert_eq!(
        fields,
        vec![
            FormField::Name,
            FormField::Surname,
            FormField::Sex,
            FormField::PaymentType,
            FormField::PaymentReference,
            FormField::Amount,
            FormField::ParticipationType,
        ]
    );
    assert_eq!(errors.get(FormField::Name), Some("Name is required"));
}

#[test]
fn test_unknown_choice_rejected() {
    let draft = RecordDraft {
        sexo: "other".into(),
        ..valid_draft()
    };

    let errors = draft.validate().unwrap_err();

    assert_eq!(errors.get(FormField::Sex), Some("Unknown sex: other"));
}

#[test]
fn test_field_errors_display_lists_labels() {
    let draft = RecordDraft {
        nombre: String::new(),
        monto: "-1".into(),
        ..valid_draft()
    };

    let message = draft.validate().unwrap_err().to_string();

    assert_eq!(message, "Name: Name is required; Amount: Amount cannot be negative");
}

use crate::Record;

use chrono::{TimeZone, Utc};
use serde_json::json;

#[test]
fn test_record_accepts_string_numbers() {
    let record: Record = serde_json::from_value(json!({
        "id": "12",
        "nombre": "Luis",
        "apellido": "Rojas",
        "edad": "9",
        "tipo_matricula": "combo",
        "tipo_pago": "divisa",
        "referencia_pago": "A1",
        "monto": "1500.50",
        "fecha_registro": "2025-04-02 08:30:00",
        "zona_id": "4"
    }))
    .unwrap();

    assert_eq!(record.id, 12);
    assert_eq!(record.edad, Some(9));
    assert_eq!(record.monto, 1500.5);
    assert_eq!(record.zona_id, Some(4));
    assert_eq!(
        record.fecha_registro,
        Some(Utc.with_ymd_and_hms(2025, 4, 2, 8, 30, 0).unwrap())
    );
}

#[test]
fn test_record_missing_optional_fields() {
    let record: Record = serde_json::from_value(json!({
        "id": 1,
        "nombre": "Ana",
        "apellido": "Diaz",
        "monto": 10
    }))
    .unwrap();

    assert_eq!(record.edad, None);
    assert_eq!(record.sexo, None);
    assert_eq!(record.tipo_asamblea, None);
    assert_eq!(record.fecha_registro, None);
    assert_eq!(record.referencia_pago, "");
}

#[test]
fn test_record_unparsable_age_reads_as_absent() {
    let record: Record = serde_json::from_value(json!({
        "id": 1,
        "nombre": "Ana",
        "apellido": "Diaz",
        "edad": "unknown",
        "monto": 0
    }))
    .unwrap();

    assert_eq!(record.edad, None);
}

#[test]
fn test_record_rfc3339_timestamp_with_offset() {
    let record: Record = serde_json::from_value(json!({
        "id": 1,
        "nombre": "Ana",
        "apellido": "Diaz",
        "monto": 0,
        "fecha_registro": "2025-04-02T08:30:00.000-04:00"
    }))
    .unwrap();

    assert_eq!(
        record.fecha_registro,
        Some(Utc.with_ymd_and_hms(2025, 4, 2, 12, 30, 0).unwrap())
    );
}

#[test]
fn test_record_bad_amount_is_an_error() {
    let result = serde_json::from_value::<Record>(json!({
        "id": 1,
        "nombre": "Ana",
        "apellido": "Diaz",
        "monto": "ten"
    }));

    assert!(result.is_err());
}

#[test]
fn test_record_null_text_columns_read_as_empty() {
    let record: Record = serde_json::from_value(json!({
        "id": 9,
        "nombre": "Luis",
        "apellido": null,
        "tipo_matricula": null,
        "tipo_pago": "divisa",
        "referencia_pago": null,
        "monto": 5
    }))
    .unwrap();

    assert_eq!(record.apellido, "");
    assert_eq!(record.tipo_matricula, "");
    assert_eq!(record.referencia_pago, "");
    assert_eq!(record.full_name(), "Luis ");
}

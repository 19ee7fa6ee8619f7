mod form;

use crate::Record;

use serde_json::json;

/// Build a record from the backend's JSON shape, overriding defaults with `fields`
pub(crate) fn record(id: i64, fields: serde_json::Value) -> Record {
    let mut base = json!({
        "id": id,
        "nombre": "Ana",
        "apellido": "Diaz",
        "edad": 30,
        "sexo": "Femenino",
        "tipo_matricula": "normal",
        "tipo_pago": "pago_movil",
        "referencia_pago": format!("REF-{id:04}"),
        "monto": "25.00",
        "tipo_asamblea": "Visitante",
        "fecha_registro": "2025-03-01T10:00:00Z",
        "zona_id": 7,
        "usuario_id": 3
    });
    if let (Some(base), Some(overrides)) = (base.as_object_mut(), fields.as_object()) {
        for (key, value) in overrides {
            base.insert(key.clone(), value.clone());
        }
    }
    serde_json::from_value(base).unwrap()
}

use crate::render::dashboard::render;
use crate::tests::{centro, user};

use conv_core::Statistics;
use serde_json::json;

fn sample() -> Statistics {
    serde_json::from_value(json!({
        "total": 40,
        "montoTotal": "1250.75",
        "porTipoMatricula": [
            { "tipo_matricula": "normal", "cantidad": 30 },
            { "tipo_matricula": "combo", "cantidad": 10 }
        ],
        "porTipoPago": [
            { "tipo_pago": "divisa", "cantidad": 10 },
            { "tipo_pago": "pago_movil", "cantidad": 30 }
        ]
    }))
    .unwrap()
}

#[test]
fn test_dashboard_totals_and_distribution() {
    let out = render(Some(&user(centro())), &sample());

    assert!(out.starts_with("Welcome, Maria Gonzalez\nZone: Zona Centro\n\n"));
    assert!(out.contains("Total registrations: 40\n"));
    assert!(out.contains("Total amount: $1.250,75\n"));
    assert!(out.contains("Normal enrollments: 30\n"));
    assert!(out.contains("Combo enrollments: 10\n"));
    assert!(out.contains("  Foreign currency payments: 10 (25.0% of total)\n"));
    assert!(out.contains("  Mobile payments: 30 (75.0% of total)\n"));
    assert!(out.contains("  Transfers: 0 (0.0% of total)\n"));
}

#[test]
fn test_dashboard_with_no_registrations() {
    let out = render(None, &Statistics::default());

    assert!(out.starts_with("Total registrations: 0\n"));
    assert!(out.contains("Total amount: $0,00\n"));
    assert!(out.contains("  Transfers: 0 (0.0% of total)\n"));
}

use crate::render::table::render;
use crate::tests::record;

use conv_core::{ListQuery, SortDirection, SortKey, apply_query};
use serde_json::json;

#[test]
fn test_short_page_is_padded_to_page_size() {
    let records = vec![record(1, json!({})), record(2, json!({ "nombre": "Luis" }))];
    let mut query = ListQuery::default();
    query.set_page_size(5).unwrap();

    let out = render(&apply_query(&records, &query), query.sort());
    let lines: Vec<&str> = out.lines().collect();

    // header, rule, 2 rows, 3 blank rows, footer
    assert_eq!(lines.len(), 8);
    assert!(lines[2].starts_with("Ana "));
    assert!(lines[3].starts_with("Luis"));
    assert!(lines[4..7].iter().all(|l| l.is_empty()));
    assert_eq!(lines[7], "1-2 of 2");
}

#[test]
fn test_row_uses_labels_and_formatted_values() {
    let records = vec![record(
        1,
        json!({ "monto": "1250.75", "tipo_matricula": "combo", "tipo_pago": "divisa" }),
    )];

    let out = render(&apply_query(&records, &ListQuery::default()), Default::default());
    let row = out.lines().nth(2).unwrap();

    assert!(row.contains("Combo"));
    assert!(row.contains("Foreign currency"));
    assert!(row.contains("REF-0001"));
    assert!(row.contains("1.250,75"));
    assert!(row.contains("01 Mar 2025 10:05"));
}

#[test]
fn test_unknown_backend_values_are_echoed() {
    let records = vec![record(1, json!({ "tipo_pago": "cheque", "edad": null }))];

    let out = render(&apply_query(&records, &ListQuery::default()), Default::default());
    let row = out.lines().nth(2).unwrap();

    assert!(row.contains("cheque"));
    assert!(row.contains(" - "));
}

#[test]
fn test_active_sort_column_is_marked() {
    let records = vec![record(1, json!({}))];
    let mut query = ListQuery::default();

    let out = render(&apply_query(&records, &query), query.sort());
    assert!(out.lines().next().unwrap().contains("Registered ^"));

    query.set_sort(SortKey::Amount, SortDirection::Desc);
    let out = render(&apply_query(&records, &query), query.sort());
    let header = out.lines().next().unwrap();
    assert!(header.contains("Amount v"));
    assert!(!header.contains("Registered ^"));
}

#[test]
fn test_empty_result_footer() {
    let out = render(&apply_query(&[], &ListQuery::default()), Default::default());

    assert!(out.ends_with("0-0 of 0\n"));
}

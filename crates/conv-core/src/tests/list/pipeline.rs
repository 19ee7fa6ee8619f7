use crate::list::pipeline::{filter, matches_category, paginate, sort};
use crate::tests::record;
use crate::{
    CategoryFilter, ListQuery, Record, Sex, SexFilter, SortDirection, SortKey, SortSpec,
    apply_query,
};

use serde_json::json;

fn ana_child() -> Record {
    record(
        1,
        json!({ "nombre": "Ana", "apellido": "Diaz", "edad": 10, "tipo_asamblea": "Niño" }),
    )
}

fn numbered(count: i64) -> Vec<Record> {
    (0..count)
        .map(|i| {
            record(
                i,
                json!({
                    "nombre": format!("Person{i:02}"),
                    "fecha_registro": format!("2025-01-01T00:{:02}:00Z", i)
                }),
            )
        })
        .collect()
}

// =========================================================================
// Filtering
// =========================================================================

#[test]
fn test_minors_filter_includes_ten_year_old() {
    let records = vec![ana_child()];
    let mut query = ListQuery::default();
    query.set_category(CategoryFilter::Minors);

    let page = apply_query(&records, &query);

    assert_eq!(page.total, 1);
    assert_eq!(page.rows[0].nombre, "Ana");
}

#[test]
fn test_assembly_filter_excludes_child() {
    let records = vec![ana_child()];
    let mut query = ListQuery::default();
    query.set_category(CategoryFilter::AssemblyMembers);

    let page = apply_query(&records, &query);

    assert_eq!(page.total, 0);
    assert!(page.is_empty());
}

#[test]
fn test_minors_boundary_is_strict() {
    let twelve = record(1, json!({ "edad": 12 }));
    let eleven = record(2, json!({ "edad": 11 }));
    let unknown = record(3, json!({ "edad": null }));

    assert!(!matches_category(&twelve, CategoryFilter::Minors));
    assert!(matches_category(&eleven, CategoryFilter::Minors));
    assert!(!matches_category(&unknown, CategoryFilter::Minors));
}

#[test]
fn test_assembly_members_match_exact_value() {
    let member = record(1, json!({ "tipo_asamblea": "Asambleista" }));
    let lowercase = record(2, json!({ "tipo_asamblea": "asambleista" }));

    assert!(matches_category(&member, CategoryFilter::AssemblyMembers));
    assert!(!matches_category(&lowercase, CategoryFilter::AssemblyMembers));
}

#[test]
fn test_search_is_case_insensitive_across_fields() {
    let records = vec![
        record(1, json!({ "nombre": "Carlos", "referencia_pago": "X-1" })),
        record(2, json!({ "apellido": "CARRASCO", "referencia_pago": "X-2" })),
        record(3, json!({ "referencia_pago": "car-77" })),
        record(4, json!({ "tipo_pago": "transferencia", "referencia_pago": "X-4" })),
    ];
    let mut query = ListQuery::default();

    query.set_search("car");
    let ids: Vec<i64> = filter(&records, &query).iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    query.set_search("TRANSFER");
    let ids: Vec<i64> = filter(&records, &query).iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![4]);
}

#[test]
fn test_empty_search_matches_everything() {
    let records = numbered(4);
    let query = ListQuery::default();

    assert_eq!(filter(&records, &query).len(), 4);
}

#[test]
fn test_search_with_no_match_yields_empty_page_and_zero_total() {
    let records = numbered(4);
    let mut query = ListQuery::default();
    query.set_search("zzz-nothing");

    let page = apply_query(&records, &query);

    assert_eq!(page.total, 0);
    assert!(page.rows.is_empty());
    assert_eq!(page.range(), (0, 0));
}

#[test]
fn test_sex_filter_exact_match() {
    let records = vec![
        record(1, json!({ "sexo": "Masculino" })),
        record(2, json!({ "sexo": "Femenino" })),
        record(3, json!({ "sexo": null })),
    ];
    let mut query = ListQuery::default();
    query.set_sex(SexFilter::Only(Sex::Male));

    let ids: Vec<i64> = filter(&records, &query).iter().map(|r| r.id).collect();

    assert_eq!(ids, vec![1]);
}

#[test]
fn test_filters_combine_with_and() {
    let records = vec![
        record(1, json!({ "nombre": "Ana", "edad": 8, "sexo": "Femenino" })),
        record(2, json!({ "nombre": "Ana", "edad": 8, "sexo": "Masculino" })),
        record(3, json!({ "nombre": "Ana", "edad": 40, "sexo": "Femenino" })),
        record(4, json!({ "nombre": "Eva", "edad": 8, "sexo": "Femenino" })),
    ];
    let mut query = ListQuery::default();
    query.set_search("ana");
    query.set_category(CategoryFilter::Minors);
    query.set_sex(SexFilter::Only(Sex::Female));

    let ids: Vec<i64> = filter(&records, &query).iter().map(|r| r.id).collect();

    assert_eq!(ids, vec![1]);
}

// =========================================================================
// Sorting
// =========================================================================

#[test]
fn test_default_sort_is_registration_ascending() {
    let records = vec![
        record(1, json!({ "fecha_registro": "2025-03-02T00:00:00Z" })),
        record(2, json!({ "fecha_registro": "2025-03-01T00:00:00Z" })),
        record(3, json!({ "fecha_registro": "2025-03-03T00:00:00Z" })),
    ];

    let page = apply_query(&records, &ListQuery::default());
    let ids: Vec<i64> = page.rows.iter().map(|r| r.id).collect();

    assert_eq!(ids, vec![2, 1, 3]);
}

#[test]
fn test_sort_by_amount_descending() {
    let records = vec![
        record(1, json!({ "monto": "20.5" })),
        record(2, json!({ "monto": 100 })),
        record(3, json!({ "monto": "3" })),
    ];
    let mut rows: Vec<&Record> = records.iter().collect();

    sort(&mut rows, SortSpec::new(SortKey::Amount, SortDirection::Desc));

    let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 1, 3]);
}

#[test]
fn test_sort_by_age_puts_missing_first_ascending() {
    let records = vec![
        record(1, json!({ "edad": 30 })),
        record(2, json!({ "edad": null })),
        record(3, json!({ "edad": 5 })),
    ];
    let mut rows: Vec<&Record> = records.iter().collect();

    sort(&mut rows, SortSpec::new(SortKey::Age, SortDirection::Asc));

    let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);
}

// =========================================================================
// Pagination
// =========================================================================

#[test]
fn test_third_page_of_twenty_five_shows_last_five() {
    let records = numbered(25);
    let mut query = ListQuery::default();
    query.set_page_size(10).unwrap();
    query.set_page(2);

    let page = apply_query(&records, &query);

    assert_eq!(page.total, 25);
    assert_eq!(page.rows.len(), 5);
    assert_eq!(page.rows[0].id, 20);
    assert_eq!(page.rows[4].id, 24);
    assert_eq!(page.padding_rows(), 5);
    assert_eq!(page.range(), (21, 25));
    assert_eq!(page.page_count(), 3);
}

#[test]
fn test_full_page_needs_no_padding() {
    let records = numbered(25);
    let page = apply_query(&records, &ListQuery::default());

    assert_eq!(page.rows.len(), 10);
    assert_eq!(page.padding_rows(), 0);
    assert_eq!(page.range(), (1, 10));
}

#[test]
fn test_page_past_the_end_is_empty() {
    let records = numbered(3);
    let rows: Vec<&Record> = records.iter().collect();

    assert!(paginate(&rows, 5, 10).is_empty());
}

#[test]
fn test_pages_are_taken_from_filtered_set() {
    let mut records = numbered(12);
    for r in records.iter_mut().filter(|r| r.id % 2 == 0) {
        r.sexo = Some("Masculino".into());
    }
    let mut query = ListQuery::default();
    query.set_sex(SexFilter::Only(Sex::Male));
    query.set_page_size(5).unwrap();
    query.set_page(1);

    let page = apply_query(&records, &query);
    let ids: Vec<i64> = page.rows.iter().map(|r| r.id).collect();

    assert_eq!(page.total, 6);
    assert_eq!(ids, vec![10]);
}

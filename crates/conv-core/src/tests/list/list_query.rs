use crate::{
    CategoryFilter, DEFAULT_PAGE_SIZE, ListQuery, Sex, SexFilter, SortDirection, SortKey,
};

use std::str::FromStr;

#[test]
fn test_default_query() {
    let query = ListQuery::default();
    assert_eq!(query.search(), "");
    assert_eq!(query.category(), CategoryFilter::All);
    assert_eq!(query.sex(), SexFilter::All);
    assert_eq!(query.sort().key, SortKey::RegisteredAt);
    assert_eq!(query.sort().direction, SortDirection::Asc);
    assert_eq!(query.page(), 0);
    assert_eq!(query.page_size(), DEFAULT_PAGE_SIZE);
}

#[test]
fn test_filter_changes_reset_page() {
    let mut query = ListQuery::default();

    query.set_page(3);
    query.set_search("ana");
    assert_eq!(query.page(), 0);

    query.set_page(3);
    query.set_category(CategoryFilter::Minors);
    assert_eq!(query.page(), 0);

    query.set_page(3);
    query.set_sex(SexFilter::Only(Sex::Female));
    assert_eq!(query.page(), 0);

    query.set_page(3);
    query.set_page_size(25).unwrap();
    assert_eq!(query.page(), 0);
    assert_eq!(query.page_size(), 25);
}

#[test]
fn test_sort_change_keeps_page() {
    let mut query = ListQuery::default();
    query.set_page(2);

    query.set_sort(SortKey::Name, SortDirection::Desc);

    assert_eq!(query.page(), 2);
}

#[test]
fn test_zero_page_size_rejected() {
    let mut query = ListQuery::default();
    query.set_page(1);

    assert!(query.set_page_size(0).is_err());
    assert_eq!(query.page_size(), DEFAULT_PAGE_SIZE);
    assert_eq!(query.page(), 1);
}

#[test]
fn test_toggle_sort_flips_active_key() {
    let mut query = ListQuery::default();

    query.toggle_sort(SortKey::RegisteredAt);
    assert_eq!(query.sort().direction, SortDirection::Desc);

    query.toggle_sort(SortKey::RegisteredAt);
    assert_eq!(query.sort().direction, SortDirection::Asc);

    query.toggle_sort(SortKey::Surname);
    assert_eq!(query.sort().key, SortKey::Surname);
    assert_eq!(query.sort().direction, SortDirection::Asc);
}

#[test]
fn test_sort_direction_flipped() {
    assert_eq!(SortDirection::Asc.flipped(), SortDirection::Desc);
    assert_eq!(SortDirection::Desc.flipped(), SortDirection::Asc);
}

#[test]
fn test_toggle_sort_from_descending_returns_to_ascending() {
    let mut query = ListQuery::default();
    query.set_sort(SortKey::Name, SortDirection::Desc);

    query.toggle_sort(SortKey::Name);

    assert_eq!(query.sort().key, SortKey::Name);
    assert_eq!(query.sort().direction, SortDirection::Asc);
}

#[test]
fn test_filter_values_parse_from_cli_words() {
    assert_eq!(
        CategoryFilter::from_str("assembly-members").unwrap(),
        CategoryFilter::AssemblyMembers
    );
    assert_eq!(CategoryFilter::from_str("menores").unwrap(), CategoryFilter::Minors);
    assert!(CategoryFilter::from_str("adults").is_err());

    assert_eq!(SexFilter::from_str("all").unwrap(), SexFilter::All);
    assert_eq!(
        SexFilter::from_str("male").unwrap(),
        SexFilter::Only(Sex::Male)
    );
    assert!(SexFilter::from_str("x").is_err());

    assert_eq!(SortKey::from_str("fecha_registro").unwrap(), SortKey::RegisteredAt);
    assert_eq!(SortKey::from_str("amount").unwrap(), SortKey::Amount);
    assert!(SortKey::from_str("zone").is_err());
}

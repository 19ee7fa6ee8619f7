//! Client-side filter, sort and paginate over the fetched collection.
//!
//! Order matters: sort and page indices are defined over the filtered set.

use crate::{
    CategoryFilter, ListQuery, MINOR_AGE_LIMIT, ParticipationType, Record, SexFilter, SortSpec,
};

use serde::Serialize;

/// One visible page of the filtered, sorted collection
#[derive(Debug, Clone, Serialize)]
pub struct ListPage<'a> {
    pub rows: Vec<&'a Record>,
    /// Size of the filtered set, not of the raw collection
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
}

impl ListPage<'_> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Blank rows a table adds so every page has the same height
    pub fn padding_rows(&self) -> usize {
        self.page_size.saturating_sub(self.rows.len())
    }

    /// 1-based `(first, last)` of the shown rows; `(0, 0)` when nothing is shown
    pub fn range(&self) -> (usize, usize) {
        if self.rows.is_empty() {
            return (0, 0);
        }
        let first = self.page * self.page_size + 1;
        (first, first + self.rows.len() - 1)
    }

    pub fn page_count(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(self.page_size)
    }
}

/// Case-insensitive match against name, surname, payment reference,
/// enrollment type and payment type. `needle` must already be lowercase.
pub fn matches_search(record: &Record, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [
        &record.nombre,
        &record.apellido,
        &record.referencia_pago,
        &record.tipo_matricula,
        &record.tipo_pago,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

pub fn matches_category(record: &Record, category: CategoryFilter) -> bool {
    match category {
        CategoryFilter::All => true,
        CategoryFilter::Minors => record.edad.is_some_and(|age| age < MINOR_AGE_LIMIT),
        CategoryFilter::AssemblyMembers => {
            record.tipo_asamblea.as_deref() == Some(ParticipationType::AssemblyMember.as_str())
        }
    }
}

pub fn matches_sex(record: &Record, sex: SexFilter) -> bool {
    match sex {
        SexFilter::All => true,
        SexFilter::Only(sex) => record.sexo.as_deref() == Some(sex.as_str()),
    }
}

/// Records satisfying every active filter, in input order
pub fn filter<'a>(records: &'a [Record], query: &ListQuery) -> Vec<&'a Record> {
    let needle = query.search().to_lowercase();
    records
        .iter()
        .filter(|r| matches_search(r, &needle))
        .filter(|r| matches_category(r, query.category()))
        .filter(|r| matches_sex(r, query.sex()))
        .collect()
}

pub fn sort(rows: &mut [&Record], spec: SortSpec) {
    rows.sort_by(|a, b| spec.compare(a, b));
}

/// Rows `page * page_size .. page * page_size + page_size`, clipped to the input
pub fn paginate<'a>(rows: &[&'a Record], page: usize, page_size: usize) -> Vec<&'a Record> {
    let start = page.saturating_mul(page_size).min(rows.len());
    let end = start.saturating_add(page_size).min(rows.len());
    rows[start..end].to_vec()
}

pub fn apply<'a>(records: &'a [Record], query: &ListQuery) -> ListPage<'a> {
    let mut filtered = filter(records, query);
    sort(&mut filtered, query.sort());
    let rows = paginate(&filtered, query.page(), query.page_size());

    ListPage {
        rows,
        total: filtered.len(),
        page: query.page(),
        page_size: query.page_size(),
    }
}

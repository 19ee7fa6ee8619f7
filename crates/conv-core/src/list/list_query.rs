use crate::{
    CategoryFilter, CoreError, DEFAULT_PAGE_SIZE, Result as CoreErrorResult, SexFilter,
    SortDirection, SortKey, SortSpec,
};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Serialize;

/// View-local state of a record list: filters, ordering and the current page.
///
/// Changing anything that alters the filtered set, or the page size, puts the
/// view back on the first page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListQuery {
    search: String,
    category: CategoryFilter,
    sex: SexFilter,
    sort: SortSpec,
    page: usize,
    page_size: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: CategoryFilter::All,
            sex: SexFilter::All,
            sort: SortSpec::default(),
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ListQuery {
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    pub fn sex(&self) -> SexFilter {
        self.sex
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    /// Zero-based page index
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 0;
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
        self.page = 0;
    }

    pub fn set_sex(&mut self, sex: SexFilter) {
        self.sex = sex;
        self.page = 0;
    }

    #[track_caller]
    pub fn set_page_size(&mut self, page_size: usize) -> CoreErrorResult<()> {
        if page_size == 0 {
            return Err(CoreError::Validation {
                message: "page size must be greater than 0".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        self.page_size = page_size;
        self.page = 0;
        Ok(())
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn set_sort(&mut self, key: SortKey, direction: SortDirection) {
        self.sort = SortSpec::new(key, direction);
    }

    /// Column-header behaviour: same key flips direction, a new key sorts ascending
    pub fn toggle_sort(&mut self, key: SortKey) {
        let direction = if self.sort.key == key {
            self.sort.direction.flipped()
        } else {
            SortDirection::Asc
        };
        self.sort = SortSpec::new(key, direction);
    }
}

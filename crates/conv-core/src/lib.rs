pub mod error;
pub mod form;
mod lenient;
pub mod list;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use form::field_errors::FieldErrors;
pub use form::form_field::FormField;
pub use form::record_draft::RecordDraft;
pub use list::category_filter::CategoryFilter;
pub use list::list_query::ListQuery;
pub use list::pipeline::{ListPage, apply as apply_query};
pub use list::sex_filter::SexFilter;
pub use list::sort::{SortDirection, SortKey, SortSpec};
pub use models::enrollment_type::EnrollmentType;
pub use models::new_record::NewRecord;
pub use models::participation_type::ParticipationType;
pub use models::payment_type::PaymentType;
pub use models::record::Record;
pub use models::session::Session;
pub use models::sex::Sex;
pub use models::statistics::{EnrollmentCount, PaymentCount, Statistics};
pub use models::user_profile::{UserProfile, Zone};

/// Registrants strictly younger than this count as minors
pub const MINOR_AGE_LIMIT: u32 = 12;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 25];

// Registration form limits
pub const MAX_TEXT_LENGTH: usize = 50;
pub const MIN_AGE: u32 = 1;
pub const MAX_AGE: u32 = 120;
pub const MIN_AMOUNT: f64 = 0.0;
pub const MAX_AMOUNT: f64 = 1_000_000.0;

pub mod field_errors;
pub mod form_field;
pub mod record_draft;

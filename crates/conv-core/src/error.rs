use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid sex: {value} {location}")]
    InvalidSex {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid enrollment type: {value} {location}")]
    InvalidEnrollmentType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid payment type: {value} {location}")]
    InvalidPaymentType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid participation type: {value} {location}")]
    InvalidParticipationType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid category filter: {value} {location}")]
    InvalidCategoryFilter {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid sort key: {value} {location}")]
    InvalidSortKey {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;

//! Request payloads accepted by the API and their conversion to domain values.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;

pub mod catalog;
pub mod wallets;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid currency id")]
    InvalidCurrencyId,

    #[error("invalid network id")]
    InvalidNetworkId,

    #[error("invalid network type id")]
    InvalidNetworkTypeId,

    #[error("invalid phone number")]
    InvalidPhoneNumber,

    #[error("invalid {field}: {source}")]
    InvalidValue {
        field: &'static str,
        source: TypeConstraintError,
    },
}

/// Trims the value and treats blank input as absent.
pub(crate) fn blank_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

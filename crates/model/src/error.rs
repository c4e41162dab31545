use crate::core::data_type::DataType;
use thiserror::Error;

/// Errors raised while mapping stored rows onto entities.
#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("missing field '{field}' in row for entity '{entity}'")]
    MissingField { entity: String, field: String },

    #[error("field '{field}' is NULL but the entity requires a value")]
    UnexpectedNull { field: String },

    #[error("field '{field}' has type {found}, expected {expected}")]
    TypeMismatch {
        field: String,
        expected: DataType,
        found: DataType,
    },
}

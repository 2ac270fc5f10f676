//! Error Types for AgriPredict Core

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("{field} must be a number")]
    InvalidField { field: &'static str },

    #[error("Unknown crop code: {0}")]
    UnknownCropCode(u8),

    #[error("Unknown soil code: {0}")]
    UnknownSoilCode(u8),
}

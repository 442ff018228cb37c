use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoanError {
    #[error("invalid input: {message}")]
    InvalidInput {
        message: String,
    },

    #[error("{field} out of range: {value} not within [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: Decimal,
        min: Decimal,
        max: Decimal,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LoanError>;

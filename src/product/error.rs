use thiserror::Error;

/// A product rejected before scoring.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("required field '{field}' is empty")]
    EmptyField { field: &'static str },

    #[error("invalid price {price}: must be a finite, non-negative number")]
    InvalidPrice { price: f64 },
}

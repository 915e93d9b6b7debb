//! Error types for the predictive value engine.

use thiserror::Error;

use crate::predictive::Quantity;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictiveError {
    /// Input outside its domain, non-finite, or missing.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Numerator and denominator of a predictive value both vanish.
    #[error(
        "{quantity} undefined (0/0) at sensitivity={sensitivity}%, specificity={specificity}%, prevalence={prevalence}%"
    )]
    UndefinedValue {
        quantity: Quantity,
        sensitivity: f64,
        specificity: f64,
        prevalence: f64,
    },
}

impl PredictiveError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::UndefinedValue { .. })
    }
}

pub type Result<T> = std::result::Result<T, PredictiveError>;

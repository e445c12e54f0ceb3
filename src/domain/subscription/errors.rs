//! Subscription plan errors.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised by [`SubscriptionPlan`](super::SubscriptionPlan).
///
/// All of these are caller or configuration mistakes; none are retryable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubscriptionError {
    #[error("Interval '{0}' is not one of DAY, WEEK, MONTH")]
    InvalidInterval(String),

    #[error("Interval count must be positive")]
    InvalidIntervalCount,

    #[error("Price is required")]
    MissingPrice,

    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Operation not supported: {0}")]
    UnsupportedOperation(&'static str),
}

impl SubscriptionError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            SubscriptionError::UnsupportedOperation(_) => ErrorCode::InvalidOperation,
            _ => ErrorCode::ValidationFailed,
        }
    }
}

impl From<SubscriptionError> for DomainError {
    fn from(err: SubscriptionError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_interval_names_the_token() {
        let err = SubscriptionError::InvalidInterval("YEAR".to_string());
        assert_eq!(err.to_string(), "Interval 'YEAR' is not one of DAY, WEEK, MONTH");
    }

    #[test]
    fn unsupported_operation_maps_to_invalid_operation() {
        let err = SubscriptionError::UnsupportedOperation("id");
        assert_eq!(err.code(), ErrorCode::InvalidOperation);
        let domain: DomainError = err.into();
        assert_eq!(domain.code, ErrorCode::InvalidOperation);
    }

    #[test]
    fn price_errors_are_validation_failures() {
        assert_eq!(SubscriptionError::MissingPrice.code(), ErrorCode::ValidationFailed);
        assert_eq!(
            SubscriptionError::InvalidPrice("-1".into()).code(),
            ErrorCode::ValidationFailed
        );
    }
}

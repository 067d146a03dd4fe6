//! Application-level errors

use domain::{DomainError, PackingListId};
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A packing list with this name already exists
    #[error("Packing list with name '{name}' already exists")]
    PackingListAlreadyExists { name: String },

    /// The weather service has no data for the localization
    #[error("Couldn't fetch weather data for localization '{localization}'")]
    MissingLocalizationWeather { localization: String },

    /// No packing list with this id
    #[error("Packing list with id '{id}' was not found")]
    PackingListNotFound { id: PackingListId },

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ApplicationError::RateLimited | ApplicationError::ExternalService(_)
        )
    }

    /// Check if the caller can fix this error by changing the request
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ApplicationError::Domain(_)
                | ApplicationError::PackingListAlreadyExists { .. }
                | ApplicationError::MissingLocalizationWeather { .. }
                | ApplicationError::PackingListNotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_errors() {
        assert!(ApplicationError::RateLimited.is_retryable());
        assert!(ApplicationError::ExternalService("down".into()).is_retryable());
        assert!(
            !ApplicationError::PackingListAlreadyExists {
                name: "MyList".into()
            }
            .is_retryable()
        );
        assert!(
            !ApplicationError::MissingLocalizationWeather {
                localization: "Warsaw, Poland".into()
            }
            .is_retryable()
        );
    }

    #[test]
    fn user_errors() {
        assert!(ApplicationError::Domain(DomainError::EmptyPackingListName).is_user_error());
        assert!(!ApplicationError::Internal("boom".into()).is_user_error());
    }

    #[test]
    fn messages() {
        let err = ApplicationError::PackingListAlreadyExists {
            name: "MyList".into(),
        };
        assert_eq!(
            err.to_string(),
            "Packing list with name 'MyList' already exists"
        );

        let err = ApplicationError::MissingLocalizationWeather {
            localization: "Warsaw, Poland".into(),
        };
        assert!(err.to_string().contains("Warsaw, Poland"));
    }

    #[test]
    fn domain_errors_are_transparent() {
        let err: ApplicationError = DomainError::InvalidTravelDays(0).into();
        assert_eq!(err.to_string(), "Invalid travel days: 0 (must be 1-100)");
    }
}

use axum::http::StatusCode;
use std::fmt;

use super::payload::PayloadShape;
use super::responses::{ResponseModel, ResponseModels};

/// Configuration record for one kind of API error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorKind {
    /// Stable name used in logs
    pub name: &'static str,
    /// Message used when the caller does not provide one
    pub message: &'static str,
    /// HTTP status of the response
    pub status: StatusCode,
    /// Body produced by errors of this kind
    pub shape: PayloadShape,
}

/// Generic error for custom API failures
pub const GENERIC: ErrorKind = ErrorKind {
    name: "generic",
    message: "Generic error",
    status: StatusCode::INTERNAL_SERVER_ERROR,
    shape: PayloadShape::Generic,
};

/// Error related with an entity that is uniquely identified
pub const IDENTIFIED: ErrorKind = ErrorKind {
    name: "identified",
    message: "Entity error",
    status: StatusCode::INTERNAL_SERVER_ERROR,
    shape: PayloadShape::Identified,
};

/// Raised because an entity does not exist
pub const NOT_FOUND: ErrorKind = ErrorKind {
    name: "not_found",
    message: "The entity does not exist",
    status: StatusCode::NOT_FOUND,
    shape: PayloadShape::NotFound,
};

/// Raised when a traffic log does not exist
pub const TRAFFIC_LOG_NOT_FOUND: ErrorKind = ErrorKind {
    name: "traffic_log_not_found",
    ..NOT_FOUND
};

impl ErrorKind {
    /// Documentation entry for this kind: `{status: {model: shape}}`
    pub fn response_model(&self) -> ResponseModels {
        ResponseModels::from([(self.status.as_u16(), ResponseModel { model: self.shape })])
    }

    /// Whether errors of this kind must be constructed with an identifier
    pub fn is_identified(&self) -> bool {
        !matches!(self.shape, PayloadShape::Generic)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_status_codes() {
        assert_eq!(GENERIC.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(IDENTIFIED.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(NOT_FOUND.status, StatusCode::NOT_FOUND);
        assert_eq!(TRAFFIC_LOG_NOT_FOUND.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_traffic_log_not_found_inherits_not_found() {
        assert_eq!(TRAFFIC_LOG_NOT_FOUND.message, NOT_FOUND.message);
        assert_eq!(TRAFFIC_LOG_NOT_FOUND.shape, PayloadShape::NotFound);
        assert_ne!(TRAFFIC_LOG_NOT_FOUND, NOT_FOUND);
        assert_eq!(TRAFFIC_LOG_NOT_FOUND.to_string(), "traffic_log_not_found");
    }

    #[test]
    fn test_response_model() {
        let entry = NOT_FOUND.response_model();
        assert_eq!(entry.len(), 1);
        assert_eq!(
            entry.get(&404),
            Some(&ResponseModel {
                model: PayloadShape::NotFound
            })
        );
    }

    #[test]
    fn test_is_identified() {
        assert!(!GENERIC.is_identified());
        assert!(IDENTIFIED.is_identified());
        assert!(TRAFFIC_LOG_NOT_FOUND.is_identified());
    }
}

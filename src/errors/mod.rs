//! Mapping of API errors to HTTP responses and documentation entries

pub mod exception;
pub mod kinds;
pub mod payload;
pub mod responses;

pub use exception::{ApiException, ValidationError};
pub use kinds::{ErrorKind, GENERIC, IDENTIFIED, NOT_FOUND, TRAFFIC_LOG_NOT_FOUND};
pub use payload::{BaseError, BaseIdentifiedError, ErrorPayload, NotFoundError, PayloadShape};
pub use responses::{get_exception_responses, openapi_responses, ResponseModel, ResponseModels};

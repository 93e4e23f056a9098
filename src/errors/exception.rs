use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{Map, Value};
use tracing::debug;

use super::kinds::{ErrorKind, GENERIC, TRAFFIC_LOG_NOT_FOUND};
use super::payload::ErrorPayload;

/// Error fields did not validate against the payload shape of their kind
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid {kind} error payload: {source}")]
    Payload {
        kind: &'static str,
        source: serde_json::Error,
    },

    #[error("{kind} errors must be constructed with an identifier")]
    IdentifierRequired { kind: &'static str },

    #[error("{kind} errors do not reference an entity")]
    NotIdentified { kind: &'static str },
}

/// An API error ready to be turned into an HTTP response
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiException {
    kind: ErrorKind,
    message: String,
    payload: ErrorPayload,
}

impl ApiException {
    /// Create an error of a generic-shaped `kind` with its default message.
    ///
    /// Identified kinds are rejected; use [`ApiException::identified`].
    pub fn new(kind: ErrorKind) -> Result<Self, ValidationError> {
        if kind.is_identified() {
            return Err(ValidationError::IdentifierRequired { kind: kind.name });
        }
        Ok(Self::build(kind, kind.message.to_string(), None))
    }

    /// Create an error of an identified `kind` referencing the entity
    /// `identifier`. `None` is kept and serialized as `null`.
    pub fn identified(
        kind: ErrorKind,
        identifier: Option<String>,
    ) -> Result<Self, ValidationError> {
        if !kind.is_identified() {
            return Err(ValidationError::NotIdentified { kind: kind.name });
        }
        Ok(Self::build(kind, kind.message.to_string(), identifier))
    }

    /// Generic 500 error with the default message
    pub fn generic() -> Self {
        Self::build(GENERIC, GENERIC.message.to_string(), None)
    }

    pub fn traffic_log_not_found(identifier: impl Into<String>) -> Self {
        Self::build(
            TRAFFIC_LOG_NOT_FOUND,
            TRAFFIC_LOG_NOT_FOUND.message.to_string(),
            Some(identifier.into()),
        )
    }

    /// Create an error from arbitrary named fields.
    ///
    /// `message` falls back to the kind's default when absent. Every field is
    /// validated against the kind's payload shape; unknown ones are ignored.
    pub fn from_fields(
        kind: ErrorKind,
        mut fields: Map<String, Value>,
    ) -> Result<Self, ValidationError> {
        fields
            .entry("message")
            .or_insert_with(|| Value::String(kind.message.to_string()));

        let payload = kind
            .shape
            .parse(Value::Object(fields))
            .map_err(|source| ValidationError::Payload {
                kind: kind.name,
                source,
            })?;

        Ok(Self {
            kind,
            message: payload.message().to_string(),
            payload,
        })
    }

    /// Replace the default message
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let identifier = self.payload.identifier().map(str::to_string);
        Self::build(self.kind, message.into(), identifier)
    }

    fn build(kind: ErrorKind, message: String, identifier: Option<String>) -> Self {
        let payload = kind.shape.build(message.clone(), identifier);
        Self {
            kind,
            message,
            payload,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn payload(&self) -> &ErrorPayload {
        &self.payload
    }

    /// Build the HTTP response: payload as JSON body, status from the kind
    pub fn response(&self) -> Response {
        (self.kind.status, Json(&self.payload)).into_response()
    }
}

impl IntoResponse for ApiException {
    fn into_response(self) -> Response {
        debug!(
            kind = %self.kind,
            status = %self.kind.status.as_u16(),
            identifier = ?self.payload.identifier(),
            "Returning API error: {}",
            self.message
        );
        self.response()
    }
}

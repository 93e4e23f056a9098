use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Generic error body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BaseError {
    /// Error message or description
    pub message: String,
}

/// Error body for entities referenced by a unique identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BaseIdentifiedError {
    /// Error message or description
    pub message: String,
    /// Unique identifier which this error references to
    #[serde(deserialize_with = "required_nullable")]
    #[schema(required = true)]
    pub identifier: Option<String>,
}

/// The entity does not exist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NotFoundError {
    /// Error message or description
    pub message: String,
    /// Unique identifier which this error references to
    #[serde(deserialize_with = "required_nullable")]
    #[schema(required = true)]
    pub identifier: Option<String>,
}

// serde treats a missing `Option` field as `None`; going through
// `deserialize_with` makes the key mandatory while still accepting `null`.
fn required_nullable<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
}

/// Shape of the body an error kind produces.
///
/// Serializes as the schema name so documentation entries read the same way
/// they do in the generated OpenAPI document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PayloadShape {
    #[serde(rename = "BaseError")]
    Generic,
    #[serde(rename = "BaseIdentifiedError")]
    Identified,
    #[serde(rename = "NotFoundError")]
    NotFound,
}

impl PayloadShape {
    /// Component name of the schema in the OpenAPI document
    pub fn schema_name(&self) -> &'static str {
        match self {
            Self::Generic => "BaseError",
            Self::Identified => "BaseIdentifiedError",
            Self::NotFound => "NotFoundError",
        }
    }

    /// Validate a set of named fields against this shape
    pub fn parse(&self, fields: Value) -> Result<ErrorPayload, serde_json::Error> {
        Ok(match self {
            Self::Generic => ErrorPayload::Generic(serde_json::from_value(fields)?),
            Self::Identified => ErrorPayload::Identified(serde_json::from_value(fields)?),
            Self::NotFound => ErrorPayload::NotFound(serde_json::from_value(fields)?),
        })
    }

    /// Build a payload from already typed values.
    ///
    /// The generic shape has no identifier, so one passed here is dropped.
    pub fn build(&self, message: String, identifier: Option<String>) -> ErrorPayload {
        match self {
            Self::Generic => ErrorPayload::Generic(BaseError { message }),
            Self::Identified => {
                ErrorPayload::Identified(BaseIdentifiedError { message, identifier })
            }
            Self::NotFound => ErrorPayload::NotFound(NotFoundError { message, identifier }),
        }
    }
}

/// A validated error body, serialized flat onto the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ErrorPayload {
    Generic(BaseError),
    Identified(BaseIdentifiedError),
    NotFound(NotFoundError),
}

impl ErrorPayload {
    pub fn message(&self) -> &str {
        match self {
            Self::Generic(p) => &p.message,
            Self::Identified(p) => &p.message,
            Self::NotFound(p) => &p.message,
        }
    }

    pub fn identifier(&self) -> Option<&str> {
        match self {
            Self::Generic(_) => None,
            Self::Identified(p) => p.identifier.as_deref(),
            Self::NotFound(p) => p.identifier.as_deref(),
        }
    }

    pub fn shape(&self) -> PayloadShape {
        match self {
            Self::Generic(_) => PayloadShape::Generic,
            Self::Identified(_) => PayloadShape::Identified,
            Self::NotFound(_) => PayloadShape::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_schema_names_match_components() {
        assert_eq!(PayloadShape::Generic.schema_name(), BaseError::schema().0);
        assert_eq!(
            PayloadShape::Identified.schema_name(),
            BaseIdentifiedError::schema().0
        );
        assert_eq!(PayloadShape::NotFound.schema_name(), NotFoundError::schema().0);
    }

    #[test]
    fn test_identifier_key_is_required() {
        let err = PayloadShape::NotFound
            .parse(json!({ "message": "gone" }))
            .unwrap_err();
        assert!(err.to_string().contains("identifier"));
    }

    #[test]
    fn test_identifier_accepts_null() {
        let payload = PayloadShape::Identified
            .parse(json!({ "message": "gone", "identifier": null }))
            .unwrap();
        assert_eq!(payload.identifier(), None);
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({ "message": "gone", "identifier": null })
        );
    }

    #[test]
    fn test_mistyped_message_is_rejected() {
        assert!(PayloadShape::Generic.parse(json!({ "message": 42 })).is_err());
        assert!(PayloadShape::Generic.parse(json!({})).is_err());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let payload = PayloadShape::Generic
            .parse(json!({ "message": "boom", "identifier": "abc" }))
            .unwrap();
        assert_eq!(serde_json::to_value(&payload).unwrap(), json!({ "message": "boom" }));
    }

    #[test]
    fn test_generic_shape_drops_identifier() {
        let payload = PayloadShape::Generic.build("boom".to_string(), Some("abc".to_string()));
        assert_eq!(payload.shape(), PayloadShape::Generic);
        assert_eq!(payload.identifier(), None);
    }
}

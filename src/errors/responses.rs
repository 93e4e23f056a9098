use axum::http::StatusCode;
use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::openapi::{
    ContentBuilder, Ref, ResponseBuilder, Responses, ResponsesBuilder,
};

use super::kinds::ErrorKind;
use super::payload::PayloadShape;

/// Schema descriptor advertised for one status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResponseModel {
    pub model: PayloadShape,
}

/// Documentation entries keyed by HTTP status code
pub type ResponseModels = BTreeMap<u16, ResponseModel>;

/// Merge the documentation entries of several error kinds.
///
/// Kinds sharing a status code collapse into one entry; the last one wins.
pub fn get_exception_responses(kinds: &[ErrorKind]) -> ResponseModels {
    let mut responses = ResponseModels::new();
    for kind in kinds {
        responses.extend(kind.response_model());
    }
    responses
}

/// Convert documentation entries into OpenAPI responses referencing the
/// payload schemas by name.
pub fn openapi_responses(models: &ResponseModels) -> Responses {
    models
        .iter()
        .fold(ResponsesBuilder::new(), |builder, (status, entry)| {
            let description = StatusCode::from_u16(*status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("Error");

            builder.response(
                status.to_string(),
                ResponseBuilder::new()
                    .description(description)
                    .content(
                        "application/json",
                        ContentBuilder::new()
                            .schema(Ref::from_schema_name(entry.model.schema_name()))
                            .build(),
                    )
                    .build(),
            )
        })
        .build()
}

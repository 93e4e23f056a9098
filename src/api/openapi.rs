use utoipa::{openapi, Modify, OpenApi};

use crate::api::handlers::GET_TRAFFIC_LOG_ERRORS;
use crate::errors::{
    get_exception_responses, openapi_responses, BaseError, BaseIdentifiedError, ErrorKind,
    NotFoundError,
};
use crate::models::TrafficLog;

/// Error kinds each documented path can return
const DOCUMENTED_ERRORS: &[(&str, &[ErrorKind])] =
    &[("/traffic-logs/{identifier}", GET_TRAFFIC_LOG_ERRORS)];

/// Adds the aggregated error responses to every operation of the paths listed
/// in `DOCUMENTED_ERRORS`.
pub struct ErrorResponses;

impl Modify for ErrorResponses {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        for (path, kinds) in DOCUMENTED_ERRORS {
            let responses = openapi_responses(&get_exception_responses(kinds));
            if let Some(item) = openapi.paths.paths.get_mut(*path) {
                for operation in item.operations.values_mut() {
                    operation
                        .responses
                        .responses
                        .extend(responses.responses.clone());
                }
            }
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Traffic Logs API",
        version = "0.1.0",
        description = "Lookup service for recorded HTTP traffic logs. Errors are returned as structured JSON bodies whose schema depends on the error kind.",
        contact(
            name = "Traffic Logs API",
        )
    ),
    paths(
        crate::api::handlers::health,
        crate::api::handlers::get_traffic_log,
    ),
    components(
        schemas(
            TrafficLog,
            BaseError,
            BaseIdentifiedError,
            NotFoundError,
        )
    ),
    modifiers(&ErrorResponses),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "traffic-logs", description = "Traffic log retrieval endpoints"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traffic_log_path_documents_errors() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let responses = &doc["paths"]["/traffic-logs/{identifier}"]["get"]["responses"];

        assert!(responses["200"].is_object());
        assert_eq!(
            responses["404"]["content"]["application/json"]["schema"]["$ref"],
            "#/components/schemas/NotFoundError"
        );
        assert_eq!(
            responses["500"]["content"]["application/json"]["schema"]["$ref"],
            "#/components/schemas/BaseError"
        );
    }

    #[test]
    fn test_error_schemas_registered() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let schemas = &doc["components"]["schemas"];

        assert!(schemas["BaseError"].is_object());
        assert!(schemas["BaseIdentifiedError"].is_object());
        assert!(schemas["NotFoundError"].is_object());

        let required = schemas["NotFoundError"]["required"].as_array().unwrap();
        assert!(required.iter().any(|field| field == "identifier"));
    }

    #[test]
    fn test_health_has_no_error_responses() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let responses = doc["paths"]["/health"]["get"]["responses"]
            .as_object()
            .unwrap();
        assert_eq!(responses.len(), 1);
    }
}

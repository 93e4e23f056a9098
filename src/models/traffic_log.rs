use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single HTTP exchange recorded by the traffic logger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TrafficLog {
    /// Unique identifier of the log entry
    pub identifier: String,
    /// When the request was received
    pub timestamp: DateTime<Utc>,
    /// HTTP method of the request
    pub method: String,
    /// Request path
    pub path: String,
    /// Status code returned to the client
    pub status_code: u16,
    /// Address of the client, when known
    #[serde(default)]
    pub client_ip: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_without_client_ip() {
        let log: TrafficLog = serde_json::from_value(json!({
            "identifier": "abc",
            "timestamp": "2024-03-01T12:00:00Z",
            "method": "GET",
            "path": "/status",
            "status_code": 200
        }))
        .unwrap();

        assert_eq!(log.identifier, "abc");
        assert_eq!(log.client_ip, None);
        assert_eq!(log.timestamp.to_rfc3339(), "2024-03-01T12:00:00+00:00");
    }
}

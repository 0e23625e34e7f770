use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub mod read;
pub mod update;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Value,
    pub body: String,
}

/// Accepts both raw invocation payloads and API Gateway proxy events. A
/// proxy event carries the request in a `body` field: string-encoded JSON,
/// an inline object, or null for an empty body.
pub(crate) fn normalize_apigw_event(event: Value) -> Result<Value, String> {
    let Some(object) = event.as_object() else {
        return Err("Request payload must be a JSON object".to_string());
    };

    let Some(body) = object.get("body") else {
        return Ok(event);
    };

    match body {
        Value::Null => Ok(json!({})),
        Value::Object(_) => Ok(body.clone()),
        Value::String(text) => {
            serde_json::from_str(text).map_err(|error| format!("Malformed JSON body: {error}"))
        }
        _ => Err("Request body must be a JSON object".to_string()),
    }
}

pub(crate) fn validation_error_response(message: &str) -> ApiGatewayResponse {
    error_response(
        400,
        json!({
            "error": "validation_error",
            "message": message,
        }),
    )
}

pub(crate) fn store_error_response(message: &str) -> ApiGatewayResponse {
    error_response(
        502,
        json!({
            "error": "store_error",
            "message": message,
        }),
    )
}

pub(crate) fn success_response(payload: impl Serialize) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code: 200,
        headers: json!({"Content-Type": "application/json"}),
        body: serde_json::to_string(&payload).expect("response payload should serialize"),
    }
}

pub(crate) fn error_response(status_code: u16, payload: Value) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code,
        headers: json!({"Content-Type": "application/json"}),
        body: payload.to_string(),
    }
}

/// One structured line per incoming request, before any processing.
pub(crate) fn log_request(component: &str, payload: &Value) {
    eprintln!(
        "{}",
        json!({
            "component": component,
            "event": "request_received",
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "request": payload,
        })
    );
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_raw_payload_through_unchanged() {
        let normalized =
            normalize_apigw_event(json!({"key": "alpha"})).expect("raw payload should pass");
        assert_eq!(normalized, json!({"key": "alpha"}));
    }

    #[test]
    fn parses_string_encoded_body() {
        let normalized = normalize_apigw_event(json!({"body": "{\"key\":\"alpha\"}"}))
            .expect("string body should parse");
        assert_eq!(normalized, json!({"key": "alpha"}));
    }

    #[test]
    fn accepts_inline_object_body() {
        let normalized = normalize_apigw_event(json!({"body": {"key": "alpha"}}))
            .expect("object body should pass");
        assert_eq!(normalized, json!({"key": "alpha"}));
    }

    #[test]
    fn treats_null_body_as_empty_object() {
        let normalized =
            normalize_apigw_event(json!({"body": null})).expect("null body should pass");
        assert_eq!(normalized, json!({}));
    }

    #[test]
    fn rejects_non_object_payload() {
        let error =
            normalize_apigw_event(json!("key=alpha")).expect_err("non-object should fail");
        assert_eq!(error, "Request payload must be a JSON object");
    }

    #[test]
    fn rejects_malformed_body_json() {
        let error = normalize_apigw_event(json!({"body": "{not json"}))
            .expect_err("malformed body should fail");
        assert!(error.starts_with("Malformed JSON body:"));
    }
}

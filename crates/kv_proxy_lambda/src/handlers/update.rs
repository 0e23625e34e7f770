use kv_proxy_core::contract::{validate_update_request, UpdateRequest, UpdateResponse};
use serde_json::Value;

use crate::adapters::table_store::KeyValueTable;
use crate::handlers::{
    log_request, normalize_apigw_event, store_error_response, success_response,
    validation_error_response, ApiGatewayResponse,
};

pub fn handle_update_event(event: Value, table: &dyn KeyValueTable) -> ApiGatewayResponse {
    log_request("update_handler", &event);

    let payload = match normalize_apigw_event(event) {
        Ok(value) => value,
        Err(message) => return validation_error_response(&message),
    };

    let request = match serde_json::from_value::<UpdateRequest>(payload) {
        Ok(value) => value,
        Err(error) => return validation_error_response(&format!("Malformed request: {error}")),
    };

    let request = match validate_update_request(request) {
        Ok(value) => value,
        Err(error) => return validation_error_response(error.message()),
    };

    match table.put_item(&request.key, &request.value) {
        Ok(()) => success_response(UpdateResponse { success: true }),
        Err(message) => store_error_response(&message),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::handlers::read::handle_read_event;
    use crate::handlers::testing::{FailingTable, InMemoryTable};

    use super::*;

    #[test]
    fn stores_value_and_acknowledges_success() {
        let table = InMemoryTable::new();

        let response = handle_update_event(json!({"key": "alpha", "value": "42"}), &table);

        assert_eq!(response.status_code, 200);
        let body: Value = serde_json::from_str(&response.body).expect("body should be json");
        assert_eq!(body, json!({"success": true}));
        assert_eq!(table.stored_value("alpha"), Some("42".to_string()));
    }

    #[test]
    fn written_value_is_visible_to_subsequent_read() {
        let table = InMemoryTable::new();

        let update = handle_update_event(json!({"key": "alpha", "value": "42"}), &table);
        assert_eq!(update.status_code, 200);

        let read = handle_read_event(json!({"key": "alpha"}), &table);
        let body: Value = serde_json::from_str(&read.body).expect("body should be json");
        assert_eq!(body, json!({"found": true, "value": "42"}));
    }

    #[test]
    fn repeated_identical_write_is_idempotent() {
        let table = InMemoryTable::new();
        let event = json!({"key": "alpha", "value": "42"});

        let first = handle_update_event(event.clone(), &table);
        let second = handle_update_event(event, &table);

        assert_eq!(first.status_code, 200);
        assert_eq!(second.status_code, 200);
        assert_eq!(table.stored_value("alpha"), Some("42".to_string()));
        assert_eq!(table.item_count(), 1);
    }

    #[test]
    fn overwrites_existing_value_last_write_wins() {
        let table = InMemoryTable::new();
        table.seed_item("alpha", "41");

        let response = handle_update_event(json!({"key": "alpha", "value": "42"}), &table);

        assert_eq!(response.status_code, 200);
        assert_eq!(table.stored_value("alpha"), Some("42".to_string()));
        assert_eq!(table.item_count(), 1);
    }

    #[test]
    fn rejects_missing_value_before_any_store_call() {
        let table = InMemoryTable::new();

        let response = handle_update_event(json!({"key": "alpha"}), &table);

        assert_eq!(response.status_code, 400);
        assert_eq!(table.call_count(), 0);
    }

    #[test]
    fn rejects_missing_key_before_any_store_call() {
        let table = InMemoryTable::new();

        let response = handle_update_event(json!({"value": "42"}), &table);

        assert_eq!(response.status_code, 400);
        assert_eq!(table.call_count(), 0);
    }

    #[test]
    fn accepts_empty_value() {
        let table = InMemoryTable::new();

        let response = handle_update_event(json!({"key": "alpha", "value": ""}), &table);

        assert_eq!(response.status_code, 200);
        assert_eq!(table.stored_value("alpha"), Some(String::new()));
    }

    #[test]
    fn surfaces_store_failure_as_bad_gateway() {
        let table = FailingTable::new("failed to write item to table: access denied");

        let response = handle_update_event(json!({"key": "alpha", "value": "42"}), &table);

        assert_eq!(response.status_code, 502);
        let body: Value = serde_json::from_str(&response.body).expect("body should be json");
        assert_eq!(body["error"], Value::from("store_error"));
    }
}

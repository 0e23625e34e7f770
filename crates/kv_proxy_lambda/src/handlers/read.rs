use kv_proxy_core::contract::{validate_read_request, ReadRequest, ReadResponse};
use serde_json::Value;

use crate::adapters::table_store::KeyValueTable;
use crate::handlers::{
    log_request, normalize_apigw_event, store_error_response, success_response,
    validation_error_response, ApiGatewayResponse,
};

pub fn handle_read_event(event: Value, table: &dyn KeyValueTable) -> ApiGatewayResponse {
    log_request("read_handler", &event);

    let payload = match normalize_apigw_event(event) {
        Ok(value) => value,
        Err(message) => return validation_error_response(&message),
    };

    let request = match serde_json::from_value::<ReadRequest>(payload) {
        Ok(value) => value,
        Err(error) => return validation_error_response(&format!("Malformed request: {error}")),
    };

    let request = match validate_read_request(request) {
        Ok(value) => value,
        Err(error) => return validation_error_response(error.message()),
    };

    match table.get_item(&request.key) {
        Ok(Some(item)) => success_response(ReadResponse::found(item.value)),
        Ok(None) => success_response(ReadResponse::not_found()),
        Err(message) => store_error_response(&message),
    }
}

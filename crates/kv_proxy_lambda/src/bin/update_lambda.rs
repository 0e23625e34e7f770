use kv_proxy_lambda::adapters::table_store::DynamoKeyValueTable;
use kv_proxy_lambda::config::HandlerConfig;
use kv_proxy_lambda::handlers::update::handle_update_event;
use kv_proxy_lambda::handlers::ApiGatewayResponse;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

async fn handle_request(event: LambdaEvent<Value>) -> Result<ApiGatewayResponse, Error> {
    let config = HandlerConfig::from_env().map_err(Error::from)?;

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let table = DynamoKeyValueTable::new(
        config.table_name,
        aws_sdk_dynamodb::Client::new(&aws_config),
    );

    Ok(handle_update_event(event.payload, &table))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::run(service_fn(handle_request)).await
}

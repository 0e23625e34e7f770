use aws_sdk_dynamodb::types::AttributeValue;
use kv_proxy_core::contract::{StoredItem, KEY_ATTRIBUTE, VALUE_ATTRIBUTE};

pub trait KeyValueTable {
    fn get_item(&self, key: &str) -> Result<Option<StoredItem>, String>;
    fn put_item(&self, key: &str, value: &str) -> Result<(), String>;
}

/// DynamoDB-backed table adapter. Issues exactly one point operation per
/// call; SDK failures propagate as formatted messages without retries.
#[derive(Debug, Clone)]
pub struct DynamoKeyValueTable {
    table_name: String,
    ddb_client: aws_sdk_dynamodb::Client,
}

impl DynamoKeyValueTable {
    pub fn new(table_name: impl Into<String>, ddb_client: aws_sdk_dynamodb::Client) -> Self {
        Self {
            table_name: table_name.into(),
            ddb_client,
        }
    }
}

impl KeyValueTable for DynamoKeyValueTable {
    fn get_item(&self, key: &str) -> Result<Option<StoredItem>, String> {
        let table_name = self.table_name.clone();
        let item_key = key.to_string();
        let client = self.ddb_client.clone();

        let output = tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .get_item()
                    .table_name(table_name)
                    .key(KEY_ATTRIBUTE, AttributeValue::S(item_key))
                    .send()
                    .await
                    .map_err(|error| format!("failed to read item from table: {error}"))
            })
        })?;

        let Some(attributes) = output.item else {
            return Ok(None);
        };

        let item = StoredItem {
            key: string_attribute(&attributes, KEY_ATTRIBUTE)?,
            value: string_attribute(&attributes, VALUE_ATTRIBUTE)?,
        };
        Ok(Some(item))
    }

    fn put_item(&self, key: &str, value: &str) -> Result<(), String> {
        let table_name = self.table_name.clone();
        let item_key = key.to_string();
        let item_value = value.to_string();
        let client = self.ddb_client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .put_item()
                    .table_name(table_name)
                    .item(KEY_ATTRIBUTE, AttributeValue::S(item_key))
                    .item(VALUE_ATTRIBUTE, AttributeValue::S(item_value))
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| format!("failed to write item to table: {error}"))
            })
        })
    }
}

fn string_attribute(
    attributes: &std::collections::HashMap<String, AttributeValue>,
    name: &str,
) -> Result<String, String> {
    attributes
        .get(name)
        .and_then(|attribute| attribute.as_s().ok())
        .cloned()
        .ok_or_else(|| format!("stored item is missing string attribute '{name}'"))
}

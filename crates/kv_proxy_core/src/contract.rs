use serde::{Deserialize, Serialize};

/// Attribute names used for items in the backing table.
pub const KEY_ATTRIBUTE: &str = "Key";
pub const VALUE_ATTRIBUTE: &str = "Value";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReadRequest {
    pub key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateRequest {
    pub key: String,
    pub value: String,
}

/// The logical record stored in the backing table: one string key, one
/// string value, both persisted as string-typed attributes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredItem {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReadResponse {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl ReadResponse {
    pub fn found(value: impl Into<String>) -> Self {
        Self {
            found: true,
            value: Some(value.into()),
        }
    }

    pub fn not_found() -> Self {
        Self {
            found: false,
            value: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateResponse {
    pub success: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// The backing table rejects empty partition keys, so a blank key can never
/// address an item; it is rejected before any external call is attempted.
pub fn validate_read_request(request: ReadRequest) -> Result<ReadRequest, ValidationError> {
    validate_key(&request.key)?;
    Ok(request)
}

/// Same key rule as reads. An empty `value` is allowed: non-key string
/// attributes may be empty.
pub fn validate_update_request(request: UpdateRequest) -> Result<UpdateRequest, ValidationError> {
    validate_key(&request.key)?;
    Ok(request)
}

fn validate_key(key: &str) -> Result<(), ValidationError> {
    if key.is_empty() {
        return Err(ValidationError::new("key cannot be empty"));
    }
    Ok(())
}

pub const TABLE_NAME_ENV_VAR: &str = "DDB_TABLE_NAME";

/// Table configuration resolved once per invocation, before any store call.
///
/// An unset or blank `DDB_TABLE_NAME` is a hard configuration error; there is
/// no sentinel fallback, so misconfiguration surfaces here instead of as a
/// downstream table-not-found failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerConfig {
    pub table_name: String,
}

impl HandlerConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_table_name(std::env::var(TABLE_NAME_ENV_VAR).ok())
    }

    pub fn from_table_name(table_name: Option<String>) -> Result<Self, String> {
        match table_name {
            Some(value) if !value.trim().is_empty() => Ok(Self { table_name: value }),
            _ => Err(format!("{TABLE_NAME_ENV_VAR} must be configured")),
        }
    }
}

//! Explicit per-request context handed to every action.

use sqlx::SqlitePool;
use std::collections::HashMap;

/// Everything an action may consult: the positional path params, the parsed
/// form fields (POST only), and the store handle scoped to this request.
pub struct RequestContext {
    pub params: Vec<String>,
    pub fields: HashMap<String, String>,
    pub pool: SqlitePool,
}

impl RequestContext {
    /// Positional path parameter by index.
    pub fn param(&self, index: usize) -> Option<&str> {
        self.params.get(index).map(String::as_str)
    }

    /// Form field by name. Empty values read as absent, so blank submissions
    /// trip the required-field checks.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}

use serde::{Deserialize, Serialize};

/// Raw list-endpoint query string (`?filter=&category_id=&is_remaining=&search=&sort=`).
///
/// Every field is kept as a string so that unknown or malformed values reach
/// the pipeline, where they degrade to no-ops instead of rejecting the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_remaining: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

impl ListParams {
    /// The `is_remaining` parameter as a boolean, if it is one.
    pub fn is_remaining_flag(&self) -> Option<bool> {
        self.is_remaining.as_deref().and_then(parse_flag)
    }
}

/// Parse a query-string boolean. Accepts `true`/`false` and `1`/`0`.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

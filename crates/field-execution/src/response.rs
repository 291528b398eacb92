use serde_json::{Map, Value};

use crate::GraphqlError;

/// Result of executing a selection set. `data` is `None` when a non-nullable field failed.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct Response {
    pub data: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<GraphqlError>,
}

impl Response {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

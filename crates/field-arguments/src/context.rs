use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Request-scoped key/value bag handed to every prepare hook and resolver.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecutionContext {
    values: HashMap<String, Value>,
}

impl ExecutionContext {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Deserializes the entry at `key`. Missing keys and mismatching shapes both give `None`.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.values
            .get(key)
            .and_then(|value| T::deserialize(value).ok())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ExecutionContext {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn typed_lookup() {
        let ctx = ExecutionContext::new().with("multiply_by", 3).with("user", json!({"id": "1"}));

        assert_eq!(ctx.get_as::<i64>("multiply_by"), Some(3));
        assert_eq!(ctx.get_as::<String>("multiply_by"), None);
        assert_eq!(ctx.get_as::<i64>("missing"), None);
        assert_eq!(ctx.get("user"), Some(&json!({"id": "1"})));
    }

    #[test]
    fn collects_from_pairs() {
        let ctx: ExecutionContext = [("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(ctx.get("b"), Some(&json!(2)));
    }
}

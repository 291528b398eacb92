mod code;
mod path;

use std::borrow::Cow;

pub use code::*;
use field_arguments::ArgumentError;
pub use path::*;
use serde::ser::SerializeMap;

pub type GraphqlResult<T> = Result<T, GraphqlError>;

#[derive(Debug, Clone, PartialEq)]
pub struct GraphqlError {
    pub message: Cow<'static, str>,
    pub code: ErrorCode,
    pub path: Option<ErrorPath>,
    // Serialized as a map, but kept as a Vec for efficiency.
    pub extensions: Vec<(Cow<'static, str>, serde_json::Value)>,
}

impl GraphqlError {
    pub fn new(message: impl Into<Cow<'static, str>>, code: ErrorCode) -> Self {
        GraphqlError {
            message: message.into(),
            code,
            path: None,
            extensions: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_path(mut self, path: impl Into<ErrorPath>) -> Self {
        self.path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_extension(mut self, key: impl Into<Cow<'static, str>>, value: impl Into<serde_json::Value>) -> Self {
        self.extensions.push((key.into(), value.into()));
        self
    }

    pub fn internal_server_error() -> Self {
        GraphqlError::new("Internal server error", ErrorCode::InternalServerError)
    }
}

impl std::fmt::Display for GraphqlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.message.fmt(f)
    }
}

impl From<ArgumentError> for GraphqlError {
    fn from(err: ArgumentError) -> Self {
        match err {
            ArgumentError::Coercion { .. } | ArgumentError::UnknownArgument { .. } => {
                GraphqlError::new(err.to_string(), ErrorCode::ArgumentCoercionError)
            }
            ArgumentError::UnknownPrepareMethod { .. } => {
                tracing::error!("{err}");
                GraphqlError::internal_server_error()
            }
            ArgumentError::Preparation(err) => GraphqlError {
                message: err.message,
                code: ErrorCode::ArgumentPreparationError,
                path: None,
                extensions: err.extensions,
            },
        }
    }
}

impl serde::Serialize for GraphqlError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("message", &self.message)?;
        if let Some(path) = &self.path {
            map.serialize_entry("path", path)?;
        }
        map.serialize_entry("extensions", &SerializableExtensions(self))?;
        map.end()
    }
}

struct SerializableExtensions<'a>(&'a GraphqlError);

impl serde::Serialize for SerializableExtensions<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.extensions.len() + 1))?;
        map.serialize_entry("code", &self.0.code)?;
        for (key, value) in &self.0.extensions {
            if key != "code" {
                map.serialize_entry(key, value)?;
            }
        }
        map.end()
    }
}

use std::borrow::Cow;

use crate::InputValueError;

/// Invalid argument declaration. Raised while building the schema, never while executing a query.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DefinitionError {
    #[error("Argument names cannot be empty")]
    EmptyName,
    #[error("Invalid type reference '{0}'")]
    InvalidTypeReference(String),
    #[error("Unknown type '{name}'")]
    UnknownType { name: String },
    #[error("A type named '{name}' is already registered")]
    TypeAlreadyRegistered { name: String },
    #[error("Argument '{argument}' on {field} uses the internal key '{key}' which is already taken by '{existing}'")]
    AliasCollision {
        field: String,
        argument: String,
        existing: String,
        key: String,
    },
    #[error("Required argument '{argument}' cannot be deprecated")]
    DeprecatedRequiredArgument { argument: String },
    #[error(transparent)]
    Duplicate(#[from] DuplicateArgumentError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Field {field} already has an argument named '{existing}', cannot add '{external_name}'")]
pub struct DuplicateArgumentError {
    pub field: String,
    pub existing: String,
    pub external_name: String,
}

/// Error raised by a prepare hook. The message is reported as-is to the client.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct PrepareError {
    pub message: Cow<'static, str>,
    pub extensions: Vec<(Cow<'static, str>, serde_json::Value)>,
}

impl PrepareError {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        PrepareError {
            message: message.into(),
            extensions: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_extension(mut self, key: impl Into<Cow<'static, str>>, value: impl Into<serde_json::Value>) -> Self {
        self.extensions.push((key.into(), value.into()));
        self
    }
}

impl From<&'static str> for PrepareError {
    fn from(message: &'static str) -> Self {
        PrepareError::new(message)
    }
}

impl From<String> for PrepareError {
    fn from(message: String) -> Self {
        PrepareError::new(message)
    }
}

pub type PrepareResult = Result<serde_json::Value, PrepareError>;

/// Failure to build the keyword arguments of a single field call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ArgumentError {
    #[error("Invalid value for argument {argument}: {err}")]
    Coercion { argument: String, err: InputValueError },
    #[error("{err}")]
    UnknownArgument { field: String, err: InputValueError },
    #[error("No prepare method named '{method}' on {owner} for argument {argument}")]
    UnknownPrepareMethod {
        argument: String,
        method: String,
        owner: String,
    },
    #[error(transparent)]
    Preparation(#[from] PrepareError),
}

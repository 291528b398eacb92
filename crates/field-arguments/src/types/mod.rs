mod coerce;
mod registry;

use std::{fmt, sync::Arc};

pub use coerce::*;
pub use registry::*;

use crate::DefinitionError;

/// A resolved input type: a registered named type wrapped in any combination of lists and
/// non-null markers.
#[derive(Debug, Clone, PartialEq)]
pub enum InputType {
    Named(Arc<NamedInputType>),
    List(Box<InputType>),
    NonNull(Box<InputType>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum NamedInputType {
    Scalar(ScalarType),
    Enum(EnumType),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalarType {
    Int,
    Float,
    String,
    Boolean,
    Id,
    /// Values are passed through without any check.
    Custom(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumType {
    pub name: String,
    pub values: Vec<String>,
}

impl NamedInputType {
    pub fn name(&self) -> &str {
        match self {
            NamedInputType::Scalar(scalar) => scalar.name(),
            NamedInputType::Enum(enum_type) => &enum_type.name,
        }
    }
}

impl ScalarType {
    pub fn name(&self) -> &str {
        match self {
            ScalarType::Int => "Int",
            ScalarType::Float => "Float",
            ScalarType::String => "String",
            ScalarType::Boolean => "Boolean",
            ScalarType::Id => "ID",
            ScalarType::Custom(name) => name,
        }
    }
}

impl InputType {
    pub fn is_non_null(&self) -> bool {
        matches!(self, InputType::NonNull(_))
    }

    pub fn named_type(&self) -> &NamedInputType {
        match self {
            InputType::Named(named) => named,
            InputType::List(inner) | InputType::NonNull(inner) => inner.named_type(),
        }
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputType::Named(named) => f.write_str(named.name()),
            InputType::List(inner) => write!(f, "[{inner}]"),
            InputType::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

/// Unresolved type reference in GraphQL notation, e.g. `[String!]!`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    Named(String),
    List(Box<TypeRef>),
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    pub fn parse(input: &str) -> Result<Self, DefinitionError> {
        let invalid = || DefinitionError::InvalidTypeReference(input.to_string());
        let trimmed = input.trim();

        if let Some(inner) = trimmed.strip_suffix('!') {
            let inner = TypeRef::parse(inner).map_err(|_| invalid())?;
            if matches!(inner, TypeRef::NonNull(_)) {
                return Err(invalid());
            }
            return Ok(TypeRef::NonNull(Box::new(inner)));
        }

        if let Some(inner) = trimmed.strip_prefix('[') {
            let inner = inner.strip_suffix(']').ok_or_else(invalid)?;
            let inner = TypeRef::parse(inner).map_err(|_| invalid())?;
            return Ok(TypeRef::List(Box::new(inner)));
        }

        if is_valid_name(trimmed) {
            Ok(TypeRef::Named(trimmed.to_string()))
        } else {
            Err(invalid())
        }
    }

    pub fn named_type(&self) -> &str {
        match self {
            TypeRef::Named(name) => name,
            TypeRef::List(inner) | TypeRef::NonNull(inner) => inner.named_type(),
        }
    }
}

impl std::str::FromStr for TypeRef {
    type Err = DefinitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeRef::parse(s)
    }
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => {
            chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        }
        _ => false,
    }
}

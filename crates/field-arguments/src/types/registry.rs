use std::sync::Arc;

use indexmap::IndexMap;

use super::{EnumType, InputType, NamedInputType, ScalarType, TypeRef};
use crate::{ArgumentsConfig, DefinitionError};

/// Named input types known at schema definition time, along with the naming rule applied while
/// building definitions.
#[derive(Debug, Clone)]
pub struct Registry {
    types: IndexMap<String, Arc<NamedInputType>>,
    camelize: bool,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(&ArgumentsConfig::default())
    }
}

impl Registry {
    /// Only the schema definition settings of `config` are kept. Execution settings are read by the
    /// executor from the same configuration.
    pub fn new(config: &ArgumentsConfig) -> Self {
        let types = [
            ScalarType::Int,
            ScalarType::Float,
            ScalarType::String,
            ScalarType::Boolean,
            ScalarType::Id,
        ]
        .into_iter()
        .map(|scalar| (scalar.name().to_string(), Arc::new(NamedInputType::Scalar(scalar))))
        .collect();

        Self {
            types,
            camelize: config.camelize,
        }
    }

    /// Whether external names are derived by camelizing declared names, unless an argument says otherwise.
    pub fn camelizes_arguments(&self) -> bool {
        self.camelize
    }

    pub fn register_scalar(&mut self, name: impl Into<String>) -> Result<(), DefinitionError> {
        let name = name.into();
        self.insert(NamedInputType::Scalar(ScalarType::Custom(name)))
    }

    pub fn register_enum<I>(&mut self, name: impl Into<String>, values: I) -> Result<(), DefinitionError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let enum_type = EnumType {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        };
        self.insert(NamedInputType::Enum(enum_type))
    }

    pub fn get(&self, name: &str) -> Option<&Arc<NamedInputType>> {
        self.types.get(name)
    }

    pub fn resolve(&self, reference: &TypeRef) -> Result<InputType, DefinitionError> {
        Ok(match reference {
            TypeRef::Named(name) => {
                let named = self
                    .types
                    .get(name)
                    .ok_or_else(|| DefinitionError::UnknownType { name: name.clone() })?;
                InputType::Named(Arc::clone(named))
            }
            TypeRef::List(inner) => InputType::List(Box::new(self.resolve(inner)?)),
            TypeRef::NonNull(inner) => InputType::NonNull(Box::new(self.resolve(inner)?)),
        })
    }

    fn insert(&mut self, ty: NamedInputType) -> Result<(), DefinitionError> {
        let name = ty.name().to_string();
        if self.types.contains_key(&name) {
            return Err(DefinitionError::TypeAlreadyRegistered { name });
        }
        self.types.insert(name, Arc::new(ty));
        Ok(())
    }
}

use std::{fmt, sync::Arc};

use indexmap::IndexMap;

use crate::{ArgumentDefinition, DefinitionError, DuplicateArgumentError};

/// `Type.field`, the field an argument belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldCoordinate {
    pub type_name: String,
    pub field_name: String,
}

impl fmt::Display for FieldCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.type_name, self.field_name)
    }
}

/// Arguments of one field, keyed by external name in declaration order.
#[derive(Debug, Clone)]
pub struct ArgumentSet {
    owner: Arc<FieldCoordinate>,
    arguments: IndexMap<String, ArgumentDefinition>,
}

impl ArgumentSet {
    pub fn new(type_name: impl Into<String>, field_name: impl Into<String>) -> Self {
        ArgumentSet {
            owner: Arc::new(FieldCoordinate {
                type_name: type_name.into(),
                field_name: field_name.into(),
            }),
            arguments: IndexMap::new(),
        }
    }

    pub fn owner(&self) -> &FieldCoordinate {
        &self.owner
    }

    /// Attaches `definition` to this field. Returns it so its description can still be adjusted.
    pub fn add(&mut self, mut definition: ArgumentDefinition) -> Result<&mut ArgumentDefinition, DefinitionError> {
        if let Some(existing) = self
            .arguments
            .keys()
            .find(|name| name.eq_ignore_ascii_case(definition.external_name()))
        {
            return Err(DuplicateArgumentError {
                field: self.owner.to_string(),
                existing: existing.clone(),
                external_name: definition.external_name().to_string(),
            }
            .into());
        }

        if let Some(existing) = self
            .arguments
            .values()
            .find(|existing| existing.internal_key() == definition.internal_key())
        {
            return Err(DefinitionError::AliasCollision {
                field: self.owner.to_string(),
                argument: definition.declared_name().to_string(),
                existing: existing.declared_name().to_string(),
                key: definition.internal_key().to_string(),
            });
        }

        definition.owner = Some(Arc::clone(&self.owner));
        let (index, _) = self
            .arguments
            .insert_full(definition.external_name().to_string(), definition);

        Ok(&mut self.arguments[index])
    }

    pub fn lookup(&self, external_name: &str) -> Option<&ArgumentDefinition> {
        self.arguments.get(external_name)
    }

    pub fn lookup_mut(&mut self, external_name: &str) -> Option<&mut ArgumentDefinition> {
        self.arguments.get_mut(external_name)
    }

    /// External names sorted alphabetically.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.arguments.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Definitions in declaration order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &ArgumentDefinition> + '_ {
        self.arguments.values()
    }

    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }
}

impl<'a> IntoIterator for &'a ArgumentSet {
    type Item = &'a ArgumentDefinition;
    type IntoIter = indexmap::map::Values<'a, String, ArgumentDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.arguments.values()
    }
}

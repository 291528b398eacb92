use field_arguments::{ArgumentDefinition, ArgumentSet, DefinitionError};
use indexmap::IndexMap;

/// An output object type and its fields.
#[derive(Debug, Clone)]
pub struct ObjectDefinition {
    name: String,
    fields: IndexMap<String, FieldDefinition>,
}

#[derive(Debug, Clone)]
pub struct FieldDefinition {
    name: String,
    arguments: ArgumentSet,
    nullable: bool,
}

impl ObjectDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        ObjectDefinition {
            name: name.into(),
            fields: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the field called `name`, adding a nullable field without arguments if it doesn't exist yet.
    pub fn field(&mut self, name: &str) -> &mut FieldDefinition {
        let type_name = &self.name;
        self.fields
            .entry(name.to_string())
            .or_insert_with(|| FieldDefinition::new(type_name, name))
    }

    pub fn get(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldDefinition> + '_ {
        self.fields.values()
    }
}

impl FieldDefinition {
    fn new(type_name: &str, name: &str) -> Self {
        FieldDefinition {
            name: name.to_string(),
            arguments: ArgumentSet::new(type_name, name),
            nullable: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn non_null(&mut self) -> &mut Self {
        self.nullable = false;
        self
    }

    pub fn arguments(&self) -> &ArgumentSet {
        &self.arguments
    }

    pub fn arguments_mut(&mut self) -> &mut ArgumentSet {
        &mut self.arguments
    }

    pub fn argument(&mut self, definition: ArgumentDefinition) -> Result<&mut ArgumentDefinition, DefinitionError> {
        self.arguments.add(definition)
    }
}

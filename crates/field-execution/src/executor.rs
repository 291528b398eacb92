use field_arguments::{ArgumentRuntime, ArgumentsConfig, ExecutionContext, FieldOwner, KeywordArguments};
use serde_json::{Map, Value};

use crate::{ErrorCode, FieldDefinition, GraphqlError, GraphqlResult, ObjectDefinition, Response};

/// Resolves the fields of an object. Also serves as the owner on which prepare hooks given by
/// method name are looked up.
pub trait ObjectResolver: FieldOwner {
    fn resolve_field(&self, field: &str, arguments: KeywordArguments, ctx: &ExecutionContext) -> GraphqlResult<Value>;
}

/// A field as selected in an operation, with its raw arguments keyed by external name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSelection {
    pub alias: Option<String>,
    pub name: String,
    pub arguments: Map<String, Value>,
}

impl FieldSelection {
    pub fn new(name: impl Into<String>) -> Self {
        FieldSelection {
            name: name.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    #[must_use]
    pub fn with_argument(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments.insert(name.into(), value.into());
        self
    }

    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

pub struct Executor<'a> {
    object: &'a ObjectDefinition,
    reject_unknown: bool,
}

impl<'a> Executor<'a> {
    /// Only the execution settings of `config` are kept. The naming settings were already applied
    /// by the `Registry` the schema was built with.
    pub fn new(object: &'a ObjectDefinition, config: &ArgumentsConfig) -> Self {
        Executor {
            object,
            reject_unknown: config.reject_unknown,
        }
    }

    /// Executes every selected field in order.
    ///
    /// A failing field gets a `null` value and one error at its response key, its siblings are
    /// still executed. If the failing field is non-nullable, `data` itself becomes `null`.
    pub fn execute<R: ObjectResolver>(
        &self,
        root: &R,
        selection_set: &[FieldSelection],
        ctx: &ExecutionContext,
    ) -> Response {
        let mut data = Map::new();
        let mut errors = Vec::new();
        let mut data_is_null = false;

        for selection in selection_set {
            let response_key = selection.response_key();
            let _span = tracing::debug_span!(
                "field",
                parent_type = self.object.name(),
                field = %selection.name,
                response_key
            )
            .entered();

            let Some(field) = self.object.get(&selection.name) else {
                errors.push(
                    GraphqlError::new(
                        format!(
                            "Could not find a field named {} on {}",
                            selection.name,
                            self.object.name()
                        ),
                        ErrorCode::OperationValidationError,
                    )
                    .with_path(response_key),
                );
                data.insert(response_key.to_string(), Value::Null);
                continue;
            };

            match self.execute_field(root, field, selection, ctx) {
                Ok(value) => {
                    data.insert(response_key.to_string(), value);
                }
                Err(error) => {
                    tracing::debug!(error = %error.message, code = %error.code, "field failed");
                    errors.push(error.with_path(response_key));
                    data.insert(response_key.to_string(), Value::Null);
                    if !field.is_nullable() {
                        data_is_null = true;
                    }
                }
            }
        }

        Response {
            data: if data_is_null { None } else { Some(data) },
            errors,
        }
    }

    fn execute_field<R: ObjectResolver>(
        &self,
        root: &R,
        field: &FieldDefinition,
        selection: &FieldSelection,
        ctx: &ExecutionContext,
    ) -> GraphqlResult<Value> {
        let arguments = ArgumentRuntime::new(field.arguments(), &selection.arguments, root, ctx)
            .reject_unknown_arguments(self.reject_unknown)
            .prepare()?;

        root.resolve_field(field.name(), arguments, ctx)
    }
}

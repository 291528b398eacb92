use std::sync::Arc;

use serde_json::Value;

use crate::{names, ArgumentError, DefinitionError, FieldCoordinate, InputType, ExecutionContext, FieldOwner, PrepareHook, Registry, TypeRef};

/// Metadata of one declared field argument.
///
/// Everything except the description is fixed once built. The owning field is assigned when the
/// definition is added to an [`ArgumentSet`](crate::ArgumentSet).
#[derive(Debug, Clone)]
pub struct ArgumentDefinition {
    declared_name: String,
    external_name: String,
    alias: Option<String>,
    ty: InputType,
    required: bool,
    description: Option<String>,
    deprecation_reason: Option<String>,
    prepare: Option<PrepareHook>,
    pub(crate) owner: Option<Arc<FieldCoordinate>>,
}

#[derive(Debug)]
pub struct ArgumentDefinitionBuilder {
    declared_name: String,
    ty: String,
    required: bool,
    description: Option<String>,
    alias: Option<String>,
    external_name: Option<String>,
    camelize: Option<bool>,
    deprecation_reason: Option<String>,
    prepare: Option<PrepareHook>,
}

impl ArgumentDefinition {
    /// Starts a definition for `declared_name` of type `ty`, written in GraphQL notation (`[Int!]`).
    pub fn builder(declared_name: impl Into<String>, ty: impl Into<String>) -> ArgumentDefinitionBuilder {
        ArgumentDefinitionBuilder {
            declared_name: declared_name.into(),
            ty: ty.into(),
            required: false,
            description: None,
            alias: None,
            external_name: None,
            camelize: None,
            deprecation_reason: None,
            prepare: None,
        }
    }

    pub fn declared_name(&self) -> &str {
        &self.declared_name
    }

    /// Name used by clients in queries.
    pub fn external_name(&self) -> &str {
        &self.external_name
    }

    /// Key under which the prepared value is handed to the resolver: the alias if any, the
    /// declared name otherwise.
    pub fn internal_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.declared_name)
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn ty(&self) -> &InputType {
        &self.ty
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Replaces the description. Same effect as [`Self::describe`].
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    /// Chainable form of [`Self::set_description`].
    pub fn describe(&mut self, description: impl Into<String>) -> &mut Self {
        self.set_description(description);
        self
    }

    pub fn deprecation_reason(&self) -> Option<&str> {
        self.deprecation_reason.as_deref()
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecation_reason.is_some()
    }

    pub fn prepare_hook(&self) -> Option<&PrepareHook> {
        self.prepare.as_ref()
    }

    /// Runs the prepare hook on an already coerced value. Without a hook the value is returned as is.
    pub fn prepare_value(
        &self,
        owner: &dyn FieldOwner,
        value: Value,
        ctx: &ExecutionContext,
    ) -> Result<Value, ArgumentError> {
        match &self.prepare {
            Some(hook) => hook.invoke(&self.path(), owner, value, ctx),
            None => Ok(value),
        }
    }

    pub fn owner(&self) -> Option<&FieldCoordinate> {
        self.owner.as_deref()
    }

    /// `Type.field.argument`, or only the argument name while the definition isn't attached to a field.
    pub fn path(&self) -> String {
        match &self.owner {
            Some(owner) => format!("{owner}.{}", self.external_name),
            None => self.external_name.clone(),
        }
    }
}

impl ArgumentDefinitionBuilder {
    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Delivers the value to the resolver under `alias` instead of the declared name.
    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Overrides the name clients use, skipping camelization.
    #[must_use]
    pub fn external_name(mut self, name: impl Into<String>) -> Self {
        self.external_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn camelize(mut self, camelize: bool) -> Self {
        self.camelize = Some(camelize);
        self
    }

    #[must_use]
    pub fn deprecation_reason(mut self, reason: impl Into<String>) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }

    #[must_use]
    pub fn prepare(mut self, hook: PrepareHook) -> Self {
        self.prepare = Some(hook);
        self
    }

    pub fn build(self, registry: &Registry) -> Result<ArgumentDefinition, DefinitionError> {
        let ArgumentDefinitionBuilder {
            declared_name,
            ty,
            required,
            description,
            alias,
            external_name,
            camelize,
            deprecation_reason,
            prepare,
        } = self;

        if declared_name.trim().is_empty()
            || alias.as_deref().is_some_and(|alias| alias.trim().is_empty())
            || external_name.as_deref().is_some_and(|name| name.trim().is_empty())
        {
            return Err(DefinitionError::EmptyName);
        }

        let mut ty = registry.resolve(&TypeRef::parse(&ty)?)?;
        if required && !ty.is_non_null() {
            ty = InputType::NonNull(Box::new(ty));
        }
        let required = ty.is_non_null();

        if required && deprecation_reason.is_some() {
            return Err(DefinitionError::DeprecatedRequiredArgument { argument: declared_name });
        }

        let external_name = match external_name {
            Some(name) => name,
            None if camelize.unwrap_or(registry.camelizes_arguments()) => names::to_external(&declared_name).into_owned(),
            None => declared_name.clone(),
        };

        Ok(ArgumentDefinition {
            declared_name,
            external_name,
            alias,
            ty,
            required,
            description,
            deprecation_reason,
            prepare,
            owner: None,
        })
    }
}

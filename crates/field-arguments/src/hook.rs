use std::{borrow::Cow, fmt, sync::Arc};

use serde_json::Value;

use crate::{ArgumentError, ExecutionContext, PrepareResult};

/// The object a field belongs to. Prepare hooks given by name are looked up on it.
pub trait FieldOwner {
    fn type_name(&self) -> &str;

    /// Runs the prepare method called `method`, or returns `None` if the owner has no such method.
    fn call_prepare_method(&self, _method: &str, _value: Value, _ctx: &ExecutionContext) -> Option<PrepareResult> {
        None
    }
}

/// An object with its own state used as a prepare hook.
pub trait PrepareCallable: Send + Sync {
    fn call(&self, value: Value, ctx: &ExecutionContext) -> PrepareResult;
}

type PrepareFn = dyn Fn(Value, &ExecutionContext) -> PrepareResult + Send + Sync;

/// How an argument's value gets transformed before it reaches the resolver.
#[derive(Clone)]
pub enum PrepareHook {
    /// Method of that name on the field owner.
    Method(Cow<'static, str>),
    Function(Arc<PrepareFn>),
    Callable(Arc<dyn PrepareCallable>),
}

impl PrepareHook {
    pub fn method(name: impl Into<Cow<'static, str>>) -> Self {
        PrepareHook::Method(name.into())
    }

    pub fn function<F>(f: F) -> Self
    where
        F: Fn(Value, &ExecutionContext) -> PrepareResult + Send + Sync + 'static,
    {
        PrepareHook::Function(Arc::new(f))
    }

    pub fn callable(callable: impl PrepareCallable + 'static) -> Self {
        PrepareHook::Callable(Arc::new(callable))
    }

    /// Applies the hook to a coerced value. `argument` is only used to describe failures.
    pub fn invoke(
        &self,
        argument: &str,
        owner: &dyn FieldOwner,
        value: Value,
        ctx: &ExecutionContext,
    ) -> Result<Value, ArgumentError> {
        match self {
            PrepareHook::Method(method) => {
                tracing::trace!(argument, method = %method, owner = owner.type_name(), "calling prepare method");
                match owner.call_prepare_method(method, value, ctx) {
                    Some(result) => Ok(result?),
                    None => Err(ArgumentError::UnknownPrepareMethod {
                        argument: argument.to_string(),
                        method: method.to_string(),
                        owner: owner.type_name().to_string(),
                    }),
                }
            }
            PrepareHook::Function(f) => Ok(f(value, ctx)?),
            PrepareHook::Callable(callable) => Ok(callable.call(value, ctx)?),
        }
    }
}

impl fmt::Debug for PrepareHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrepareHook::Method(name) => f.debug_tuple("Method").field(name).finish(),
            PrepareHook::Function(_) => f.write_str("Function(..)"),
            PrepareHook::Callable(_) => f.write_str("Callable(..)"),
        }
    }
}

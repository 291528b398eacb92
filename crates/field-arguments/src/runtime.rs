use serde_json::{Map, Value};

use crate::{
    coerce_input_value, ArgumentError, ArgumentSet, ExecutionContext, FieldOwner, InputValueError, KeywordArguments,
};

/// Builds the keyword arguments of a single field call.
///
/// Every argument present in the raw input is coerced, then passed through its prepare hook. The
/// first failure aborts the whole call: no partial keyword arguments are ever returned.
pub struct ArgumentRuntime<'a> {
    arguments: &'a ArgumentSet,
    raw: &'a Map<String, Value>,
    owner: &'a dyn FieldOwner,
    context: &'a ExecutionContext,
    reject_unknown: bool,
}

impl<'a> ArgumentRuntime<'a> {
    pub fn new(
        arguments: &'a ArgumentSet,
        raw: &'a Map<String, Value>,
        owner: &'a dyn FieldOwner,
        context: &'a ExecutionContext,
    ) -> Self {
        ArgumentRuntime {
            arguments,
            raw,
            owner,
            context,
            reject_unknown: false,
        }
    }

    #[must_use]
    pub fn reject_unknown_arguments(mut self, reject: bool) -> Self {
        self.reject_unknown = reject;
        self
    }

    pub fn prepare(&self) -> Result<KeywordArguments, ArgumentError> {
        if self.reject_unknown {
            if let Some(name) = self.raw.keys().find(|name| self.arguments.lookup(name).is_none()) {
                return Err(ArgumentError::UnknownArgument {
                    field: self.arguments.owner().to_string(),
                    err: InputValueError::UnknownArgument(name.clone()),
                });
            }
        }

        let mut prepared = KeywordArguments::default();

        for definition in self.arguments {
            let Some(raw_value) = self.raw.get(definition.external_name()) else {
                continue;
            };

            let value = coerce_input_value(definition.ty(), raw_value.clone()).map_err(|err| {
                ArgumentError::Coercion {
                    argument: definition.path(),
                    err,
                }
            })?;

            let value = definition.prepare_value(self.owner, value, self.context)?;

            tracing::debug!(
                argument = definition.external_name(),
                key = definition.internal_key(),
                "prepared argument"
            );
            prepared.insert(definition.internal_key(), value);
        }

        Ok(prepared)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use serde_json::json;

    use super::*;
    use crate::{ArgumentDefinition, PrepareCallable, PrepareError, PrepareHook, PrepareResult, Registry};

    struct Query;

    impl Query {
        fn multiply(&self, value: Value, ctx: &ExecutionContext) -> PrepareResult {
            let factor = ctx.get_as::<i64>("multiply_by").ok_or("multiply_by is missing")?;
            Ok(json!(value.as_i64().unwrap_or_default() * factor))
        }
    }

    impl FieldOwner for Query {
        fn type_name(&self) -> &str {
            "Query"
        }

        fn call_prepare_method(&self, method: &str, value: Value, ctx: &ExecutionContext) -> Option<PrepareResult> {
            match method {
                "multiply" => Some(self.multiply(value, ctx)),
                _ => None,
            }
        }
    }

    struct Multiply;

    impl PrepareCallable for Multiply {
        fn call(&self, value: Value, ctx: &ExecutionContext) -> PrepareResult {
            Query.multiply(value, ctx)
        }
    }

    fn raw(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    fn prepared_arg_set(hook: PrepareHook) -> ArgumentSet {
        let mut set = ArgumentSet::new("Query", "field");
        set.add(
            ArgumentDefinition::builder("prepared_arg", "Int")
                .prepare(hook)
                .build(&Registry::default())
                .unwrap(),
        )
        .unwrap();
        set
    }

    #[rstest::rstest]
    #[case::bound_method(PrepareHook::method("multiply"))]
    #[case::function(PrepareHook::function(|value, ctx| Query.multiply(value, ctx)))]
    #[case::callable(PrepareHook::callable(Multiply))]
    fn prepare_hook_kinds_agree(#[case] hook: PrepareHook) {
        let set = prepared_arg_set(hook);
        let input = raw(json!({"preparedArg": 5}));
        let ctx = ExecutionContext::new().with("multiply_by", 3);

        let args = ArgumentRuntime::new(&set, &input, &Query, &ctx).prepare().unwrap();
        assert_eq!(args.into_json(), json!({"prepared_arg": 15}));
    }

    #[test]
    fn alias_is_used_as_key() {
        let mut set = ArgumentSet::new("Query", "field");
        set.add(
            ArgumentDefinition::builder("aliased_arg", "String")
                .alias("renamed")
                .build(&Registry::default())
                .unwrap(),
        )
        .unwrap();
        let input = raw(json!({"aliasedArg": "x"}));
        let ctx = ExecutionContext::new();

        let args = ArgumentRuntime::new(&set, &input, &Query, &ctx).prepare().unwrap();
        assert_eq!(args.into_json(), json!({"renamed": "x"}));
    }

    #[test]
    fn absent_arguments_are_skipped() {
        let registry = Registry::default();
        let mut set = ArgumentSet::new("Query", "field");
        set.add(ArgumentDefinition::builder("first", "Int").build(&registry).unwrap())
            .unwrap();
        set.add(ArgumentDefinition::builder("after", "String").build(&registry).unwrap())
            .unwrap();
        let input = raw(json!({"first": 10, "unrelated": true}));
        let ctx = ExecutionContext::new();

        let args = ArgumentRuntime::new(&set, &input, &Query, &ctx).prepare().unwrap();
        assert_eq!(args.len(), 1);
        assert!(!args.contains_key("after"));
        assert_eq!(args.get("first"), Some(&json!(10)));
    }

    #[test]
    fn explicit_null_reaches_the_hook() {
        let set = prepared_arg_set(PrepareHook::function(|value, _| Ok(json!(value.is_null()))));
        let input = raw(json!({"preparedArg": null}));
        let ctx = ExecutionContext::new();

        let args = ArgumentRuntime::new(&set, &input, &Query, &ctx).prepare().unwrap();
        assert_eq!(args.into_json(), json!({"prepared_arg": true}));
    }

    #[test]
    fn coercion_errors_name_the_argument() {
        let set = prepared_arg_set(PrepareHook::method("multiply"));
        let input = raw(json!({"preparedArg": "five"}));
        let ctx = ExecutionContext::new().with("multiply_by", 3);

        let err = ArgumentRuntime::new(&set, &input, &Query, &ctx).prepare().unwrap_err();
        insta::assert_snapshot!(err, @"Invalid value for argument Query.field.preparedArg: Found a String value where we expected a Int scalar");
    }

    #[test]
    fn hook_errors_propagate_unchanged() {
        let set = prepared_arg_set(PrepareHook::function(|_, _| {
            Err(PrepareError::new("boom!").with_extension("reason", "test"))
        }));
        let input = raw(json!({"preparedArg": 1}));
        let ctx = ExecutionContext::new();

        let err = ArgumentRuntime::new(&set, &input, &Query, &ctx).prepare().unwrap_err();
        assert_eq!(
            err,
            ArgumentError::Preparation(PrepareError::new("boom!").with_extension("reason", "test"))
        );
    }

    #[test]
    fn first_failure_stops_remaining_arguments() {
        let calls = Arc::new(AtomicUsize::new(0));
        let registry = Registry::default();
        let mut set = ArgumentSet::new("Query", "field");
        for name in ["a", "b", "c"] {
            let calls = Arc::clone(&calls);
            let hook = PrepareHook::function(move |value, _| {
                calls.fetch_add(1, Ordering::SeqCst);
                if value == json!("bad") {
                    Err(PrepareError::new("bad value"))
                } else {
                    Ok(value)
                }
            });
            set.add(ArgumentDefinition::builder(name, "String").prepare(hook).build(&registry).unwrap())
                .unwrap();
        }
        let input = raw(json!({"a": "ok", "b": "bad", "c": "bad"}));
        let ctx = ExecutionContext::new();

        let err = ArgumentRuntime::new(&set, &input, &Query, &ctx).prepare().unwrap_err();
        assert_eq!(err.to_string(), "bad value");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn unknown_arguments_can_be_rejected() {
        let set = prepared_arg_set(PrepareHook::method("multiply"));
        let input = raw(json!({"preparedArg": 1, "typo": 2}));
        let ctx = ExecutionContext::new().with("multiply_by", 3);

        let args = ArgumentRuntime::new(&set, &input, &Query, &ctx).prepare().unwrap();
        assert_eq!(args.into_json(), json!({"prepared_arg": 3}));

        let err = ArgumentRuntime::new(&set, &input, &Query, &ctx)
            .reject_unknown_arguments(true)
            .prepare()
            .unwrap_err();
        assert_eq!(err.to_string(), "Unknown argument named 'typo'");
    }

    #[test]
    fn unknown_prepare_method_fails_the_call() {
        let set = prepared_arg_set(PrepareHook::method("divide"));
        let input = raw(json!({"preparedArg": 1}));
        let ctx = ExecutionContext::new();

        let err = ArgumentRuntime::new(&set, &input, &Query, &ctx).prepare().unwrap_err();
        assert!(matches!(err, ArgumentError::UnknownPrepareMethod { .. }), "{err:?}");
    }

    #[test]
    fn preparing_twice_is_deterministic() {
        let set = prepared_arg_set(PrepareHook::method("multiply"));
        let input = raw(json!({"preparedArg": 7}));
        let ctx = ExecutionContext::new().with("multiply_by", 2);

        let first = ArgumentRuntime::new(&set, &input, &Query, &ctx).prepare().unwrap();
        let second = ArgumentRuntime::new(&set, &input, &Query, &ctx).prepare().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.get("prepared_arg"), Some(&json!(14)));
    }

    #[test]
    fn keyword_arguments_deserialize_into_resolver_input() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Input {
            renamed: String,
            count: Option<i32>,
        }

        let registry = Registry::default();
        let mut set = ArgumentSet::new("Query", "field");
        set.add(
            ArgumentDefinition::builder("aliased_arg", "String")
                .alias("renamed")
                .build(&registry)
                .unwrap(),
        )
        .unwrap();
        set.add(ArgumentDefinition::builder("count", "Int").build(&registry).unwrap())
            .unwrap();
        let input = raw(json!({"aliasedArg": "x"}));
        let ctx = ExecutionContext::new();

        let args = ArgumentRuntime::new(&set, &input, &Query, &ctx).prepare().unwrap();
        assert_eq!(
            args.deserialize::<Input>().unwrap(),
            Input {
                renamed: "x".into(),
                count: None,
            }
        );
    }
}

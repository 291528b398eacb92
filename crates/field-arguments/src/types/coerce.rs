use serde_json::Value;

use super::{EnumType, InputType, NamedInputType, ScalarType};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputValueError {
    #[error("Found a null where we expected a {expected}{path}")]
    UnexpectedNull { expected: String, path: String },
    #[error("Found a {actual} value where we expected a {expected} scalar{path}")]
    IncorrectScalarType {
        actual: ValueKind,
        expected: String,
        path: String,
    },
    #[error("Found value {actual} which cannot be coerced into a {expected} scalar{path}")]
    IncorrectScalarValue {
        actual: String,
        expected: String,
        path: String,
    },
    #[error("Found a {actual} value where we expected a {enum_name} enum value{path}")]
    IncorrectEnumValueType {
        enum_name: String,
        actual: ValueKind,
        path: String,
    },
    #[error("Found an unknown enum value '{value}' for the enum {enum_name}{path}")]
    UnknownEnumValue {
        enum_name: String,
        value: String,
        path: String,
    },
    #[error("Unknown argument named '{0}'")]
    UnknownArgument(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum ValueKind {
    String,
    Integer,
    Float,
    Object,
    Boolean,
    List,
    Null,
}

impl From<&Value> for ValueKind {
    fn from(value: &Value) -> Self {
        match value {
            Value::String(_) => ValueKind::String,
            Value::Number(n) if n.is_i64() || n.is_u64() => ValueKind::Integer,
            Value::Number(_) => ValueKind::Float,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Null => ValueKind::Null,
            Value::Array(_) => ValueKind::List,
            Value::Object(_) => ValueKind::Object,
        }
    }
}

/// Coerces a raw query-supplied value into a value of `ty`.
pub fn coerce_input_value(ty: &InputType, value: Value) -> Result<Value, InputValueError> {
    let mut path = Vec::new();
    coerce_at(ty, value, &mut path)
}

fn coerce_at(ty: &InputType, value: Value, path: &mut Vec<usize>) -> Result<Value, InputValueError> {
    match ty {
        InputType::NonNull(inner) => {
            if value.is_null() {
                return Err(InputValueError::UnexpectedNull {
                    expected: ty.to_string(),
                    path: display_path(path),
                });
            }
            coerce_at(inner, value, path)
        }
        _ if value.is_null() => Ok(Value::Null),
        InputType::List(inner) => match value {
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| {
                    path.push(index);
                    let result = coerce_at(inner, item, path);
                    path.pop();
                    result
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
            // A single value is accepted where a list is expected.
            value => coerce_at(inner, value, path).map(|item| Value::Array(vec![item])),
        },
        InputType::Named(named) => match named.as_ref() {
            NamedInputType::Scalar(scalar) => coerce_scalar(scalar, value, path),
            NamedInputType::Enum(enum_type) => coerce_enum(enum_type, value, path),
        },
    }
}

fn coerce_scalar(scalar: &ScalarType, value: Value, path: &[usize]) -> Result<Value, InputValueError> {
    let incorrect_type = |value: &Value| InputValueError::IncorrectScalarType {
        actual: value.into(),
        expected: scalar.name().to_string(),
        path: display_path(path),
    };

    match (scalar, value) {
        (ScalarType::Int, Value::Number(number)) => {
            let int = match number.as_i64() {
                Some(int) => i32::try_from(int).ok(),
                None => number.as_f64().filter(|float| can_coerce_to_int(*float)).map(|float| float as i32),
            };
            int.map(Value::from).ok_or_else(|| InputValueError::IncorrectScalarValue {
                actual: number.to_string(),
                expected: scalar.name().to_string(),
                path: display_path(path),
            })
        }
        (ScalarType::Float, Value::Number(number)) => match number.as_f64() {
            Some(float) => Ok(Value::from(float)),
            None => Err(InputValueError::IncorrectScalarValue {
                actual: number.to_string(),
                expected: scalar.name().to_string(),
                path: display_path(path),
            }),
        },
        (ScalarType::String, value @ Value::String(_)) => Ok(value),
        (ScalarType::Boolean, value @ Value::Bool(_)) => Ok(value),
        (ScalarType::Id, value @ Value::String(_)) => Ok(value),
        (ScalarType::Id, Value::Number(number)) if number.is_i64() || number.is_u64() => {
            Ok(Value::String(number.to_string()))
        }
        (ScalarType::Custom(_), value) => Ok(value),
        (_, value) => Err(incorrect_type(&value)),
    }
}

fn coerce_enum(enum_type: &EnumType, value: Value, path: &[usize]) -> Result<Value, InputValueError> {
    match value {
        Value::String(name) if enum_type.values.iter().any(|value| *value == name) => Ok(Value::String(name)),
        Value::String(name) => Err(InputValueError::UnknownEnumValue {
            enum_name: enum_type.name.clone(),
            value: name,
            path: display_path(path),
        }),
        value => Err(InputValueError::IncorrectEnumValueType {
            enum_name: enum_type.name.clone(),
            actual: (&value).into(),
            path: display_path(path),
        }),
    }
}

fn can_coerce_to_int(float: f64) -> bool {
    float.floor() == float && float >= f64::from(i32::MIN) && float <= f64::from(i32::MAX)
}

fn display_path(path: &[usize]) -> String {
    if path.is_empty() {
        return String::new();
    }

    let mut out = String::from(" at path '");
    for index in path {
        out.push('.');
        out.push_str(&index.to_string());
    }
    out.push('\'');
    out
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{Registry, TypeRef};

    fn ty(reference: &str) -> InputType {
        let mut registry = Registry::default();
        registry.register_enum("Color", ["RED", "GREEN"]).unwrap();
        registry.register_scalar("JSON").unwrap();
        registry.resolve(&TypeRef::parse(reference).unwrap()).unwrap()
    }

    #[rstest::rstest]
    #[case::int("Int", json!(5), json!(5))]
    #[case::integral_float_as_int("Int", json!(5.0), json!(5))]
    #[case::int_as_float("Float", json!(2), json!(2.0))]
    #[case::string("String", json!("x"), json!("x"))]
    #[case::boolean("Boolean", json!(true), json!(true))]
    #[case::string_id("ID", json!("abc"), json!("abc"))]
    #[case::int_id("ID", json!(42), json!("42"))]
    #[case::enum_value("Color", json!("RED"), json!("RED"))]
    #[case::custom_scalar("JSON", json!({"a": [1, 2]}), json!({"a": [1, 2]}))]
    #[case::nullable_null("Int", json!(null), json!(null))]
    #[case::list("[Int!]", json!([1, 2]), json!([1, 2]))]
    #[case::single_value_into_list("[Int]", json!(3), json!([3]))]
    #[case::nested_single_value("[[Int]]", json!(3), json!([[3]]))]
    #[case::null_item("[Int]", json!([1, null]), json!([1, null]))]
    fn coerces(#[case] reference: &str, #[case] input: Value, #[case] expected: Value) {
        assert_eq!(coerce_input_value(&ty(reference), input).unwrap(), expected);
    }

    #[rstest::rstest]
    #[case::null_for_non_null("Int!", json!(null), "Found a null where we expected a Int!")]
    #[case::string_for_int(
        "Int",
        json!("5"),
        "Found a String value where we expected a Int scalar"
    )]
    #[case::fractional_int(
        "Int",
        json!(1.5),
        "Found value 1.5 which cannot be coerced into a Int scalar"
    )]
    #[case::int_out_of_range(
        "Int",
        json!(4_294_967_296_i64),
        "Found value 4294967296 which cannot be coerced into a Int scalar"
    )]
    #[case::float_id("ID", json!(1.5), "Found a Float value where we expected a ID scalar")]
    #[case::unknown_enum_value("Color", json!("BLUE"), "Found an unknown enum value 'BLUE' for the enum Color")]
    #[case::enum_type(
        "Color",
        json!(1),
        "Found a Integer value where we expected a Color enum value"
    )]
    #[case::list_item(
        "[Int!]",
        json!([1, null]),
        "Found a null where we expected a Int! at path '.1'"
    )]
    #[case::nested_list_item(
        "[[Boolean]]",
        json!([[true], [false, "no"]]),
        "Found a String value where we expected a Boolean scalar at path '.1.1'"
    )]
    fn rejects(#[case] reference: &str, #[case] input: Value, #[case] message: &str) {
        let err = coerce_input_value(&ty(reference), input).unwrap_err();
        assert_eq!(err.to_string(), message);
    }
}

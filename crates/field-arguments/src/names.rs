use std::borrow::Cow;

use heck::ToUpperCamelCase;

/// Converts a declared snake_case argument name into the camelCase name clients use in queries.
///
/// The name is split on underscores only. The first segment is lowercased, every following
/// segment is lowercased and gets an uppercase first letter. Names without any underscore are
/// returned untouched, so `fooBar` or `URL` keep their casing. Leading underscores are kept as-is:
/// `_internal_id` becomes `_internalId`.
pub fn to_external(declared_name: &str) -> Cow<'_, str> {
    if !declared_name.contains('_') {
        return Cow::Borrowed(declared_name);
    }

    let rest = declared_name.trim_start_matches('_');
    if rest.is_empty() {
        return Cow::Borrowed(declared_name);
    }

    let mut external = declared_name[..declared_name.len() - rest.len()].to_string();
    let mut segments = rest.split('_').filter(|segment| !segment.is_empty());
    if let Some(first) = segments.next() {
        external.push_str(&first.to_lowercase());
    }
    for segment in segments {
        external.push_str(&segment.to_lowercase().to_upper_camel_case());
    }

    Cow::Owned(external)
}

//! Helpers over the dynamic record value.
//!
//! Records are plain [`serde_json::Value`]s. The closed set of variants
//! (null, bool, number, string, array, object) is what the matcher and the
//! renderer dispatch on, so no separate value model is needed. This module
//! holds the small amount of policy attached to those variants: which values
//! count as "present" for matching, and how a value is turned into text.

use std::borrow::Cow;

use serde_json::{Map, Number, Value};

use crate::error::{Result, SieveError};

/// Returns `true` if the value takes part in matching.
///
/// `null`, `false`, `0` and the empty string are falsy and are never
/// searched, so a search for `"0"` cannot match a property holding `0`.
/// Arrays and objects are truthy even when empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Returns the text a value is tested against.
///
/// This is the compact JSON serialization of the value, for every variant.
/// Strings are therefore tested with their surrounding quotes and escapes.
/// Whole floats are written as integers (`5.0` is tested as `5`).
pub fn search_text(value: &Value) -> String {
    integral_numbers(value).to_string()
}

/// Returns the text shown for a record's title property.
///
/// Strings are used verbatim; anything else is shown as compact JSON.
pub fn title_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        other => Cow::Owned(search_text(other)),
    }
}

/// Largest integer an `f64` holds exactly (2^53 - 1).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Rewrites whole floats within the exact-integer range as integers.
///
/// `5.0` becomes `5` and `-0.0` becomes `0`; `5.5`, integers and floats
/// beyond 2^53 are kept. Returns the value borrowed when nothing changes.
pub(crate) fn integral_numbers(value: &Value) -> Cow<'_, Value> {
    if !has_whole_float(value) {
        return Cow::Borrowed(value);
    }
    Cow::Owned(rewrite_whole_floats(value))
}

fn whole_float(n: &Number) -> Option<i64> {
    if !n.is_f64() {
        return None;
    }
    let f = n.as_f64()?;
    (f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER).then_some(f as i64)
}

fn has_whole_float(value: &Value) -> bool {
    match value {
        Value::Number(n) => whole_float(n).is_some(),
        Value::Array(items) => items.iter().any(has_whole_float),
        Value::Object(map) => map.values().any(has_whole_float),
        _ => false,
    }
}

fn rewrite_whole_floats(value: &Value) -> Value {
    match value {
        Value::Number(n) => match whole_float(n) {
            Some(i) => Value::Number(i.into()),
            None => value.clone(),
        },
        Value::Array(items) => Value::Array(items.iter().map(rewrite_whole_floats).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, v)| (key.clone(), rewrite_whole_floats(v)))
                .collect::<Map<String, Value>>(),
        ),
        other => other.clone(),
    }
}

/// Returns a short, human-readable name for the value's variant.
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Unwraps a JSON array into a record collection.
pub fn records_from_value(value: Value) -> Result<Vec<Value>> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(SieveError::NotAnArray {
            found: kind_name(&other),
        }),
    }
}

/// Parses a JSON document holding an array of records.
pub fn records_from_json(input: &str) -> Result<Vec<Value>> {
    let value: Value = serde_json::from_str(input)?;
    records_from_value(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn falsy_values() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
    }

    #[test]
    fn truthy_values() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!(0.5)));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn search_text_quotes_strings() {
        assert_eq!(search_text(&json!("Banana")), "\"Banana\"");
        assert_eq!(search_text(&json!(42)), "42");
        assert_eq!(search_text(&json!({"a": [1, 2]})), r#"{"a":[1,2]}"#);
    }

    #[test]
    fn search_text_writes_whole_floats_as_integers() {
        assert_eq!(search_text(&json!(5.0)), "5");
        assert_eq!(search_text(&json!(-0.0)), "0");
        assert_eq!(search_text(&json!(5.5)), "5.5");
        assert_eq!(search_text(&json!(1e300)), json!(1e300).to_string());
        assert_eq!(
            search_text(&json!({"price": 5.0, "tags": [2.0, 2.5]})),
            r#"{"price":5,"tags":[2,2.5]}"#
        );
    }

    #[test]
    fn integral_numbers_borrows_when_unchanged() {
        let value = json!({"a": [1, 2.5, "x"]});
        assert!(matches!(integral_numbers(&value), Cow::Borrowed(_)));
        assert!(matches!(integral_numbers(&json!(3.0)), Cow::Owned(_)));
    }

    #[test]
    fn title_text_borrows_strings() {
        assert!(matches!(title_text(&json!("Apple")), Cow::Borrowed("Apple")));
        assert_eq!(title_text(&json!(7)), "7");
        assert_eq!(title_text(&json!(7.0)), "7");
        assert_eq!(title_text(&json!(null)), "null");
    }

    #[test]
    fn records_from_json_accepts_arrays() {
        let records = records_from_json(r#"[{"name": "a"}, {"name": "b"}]"#).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn records_from_json_rejects_objects() {
        let err = records_from_json(r#"{"name": "a"}"#).unwrap_err();
        assert!(matches!(err, SieveError::NotAnArray { found: "object" }));
    }

    #[test]
    fn records_from_json_reports_parse_errors() {
        let err = records_from_json("[{").unwrap_err();
        assert!(matches!(err, SieveError::Json(_)));
    }
}

//! Display rendering for property values.
//!
//! String values are displayed as they are. Every other value is shown as an
//! indented JSON fragment with HTML line breaks and non-breaking-space
//! indentation, so a partial structure can be shown inline without a separate
//! rendering engine.

use std::borrow::Cow;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

use crate::value::integral_numbers;

const INDENT: &[u8] = b"\t";
const NBSP_INDENT: &str = "&nbsp;&nbsp;&nbsp;&nbsp;";
const LINE_BREAK: &str = "<br/>";

/// Returns the display text for a property value.
///
/// Strings are returned unchanged (no quotes, no escaping). All other values
/// go through [`prettify`].
///
/// # Example
///
/// ```
/// use jsonsieve::render_value;
/// use serde_json::json;
///
/// assert_eq!(render_value(&json!("plain text")), "plain text");
/// assert_eq!(render_value(&json!(42)), "42");
/// ```
pub fn render_value(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        other => Cow::Owned(prettify(other)),
    }
}

/// Renders a value as HTML-friendly indented JSON.
///
/// The value is serialized with one tab per indentation level, then:
///
/// 1. each tab becomes four `&nbsp;` entities,
/// 2. each `",` gets a trailing `<br/>`,
/// 3. each `{` gets a trailing `<br/>`,
/// 4. each `}` gets a leading `<br/>`.
///
/// The replacements run over the whole serialized text, string contents
/// included. Object keys keep their insertion order, and whole floats are
/// written as integers.
pub fn prettify(value: &Value) -> String {
    pretty_json(value)
        .replace('\t', NBSP_INDENT)
        .replace("\",", &format!("\",{}", LINE_BREAK))
        .replace('{', &format!("{{{}", LINE_BREAK))
        .replace('}', &format!("{}}}", LINE_BREAK))
}

fn pretty_json(value: &Value) -> String {
    let value = integral_numbers(value);
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    if value.serialize(&mut serializer).is_err() {
        return value.to_string();
    }
    match String::from_utf8(buf) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}

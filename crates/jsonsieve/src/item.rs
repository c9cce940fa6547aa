//! The filtered projection of a matched record.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use crate::identity::ID_FIELD;

/// A matched record, reduced to what the result list displays.
///
/// Holds the source record's `_id` (copied verbatim) and, in order, the
/// matched searchable properties followed by the title property. Property
/// values are display strings with highlight markup, not the raw values;
/// use the `_id` to get back to the source record.
///
/// A `FilteredItem` only exists for a record that matched. "No match" is
/// represented by the absence of an item, never by an empty one.
///
/// Serializes to a flat JSON object:
///
/// ```
/// use jsonsieve::{PropertyMatcher, SearchPattern};
/// use serde_json::json;
///
/// let record = json!({"_id": "1", "name": "Banana", "color": "yellow"});
/// let matcher = PropertyMatcher::new(["name", "color"], "name");
/// let item = matcher
///     .match_record(&record, &SearchPattern::literal("yell").unwrap())
///     .unwrap();
///
/// assert_eq!(
///     serde_json::to_value(&item).unwrap(),
///     json!({
///         "_id": "1",
///         "color": "<span class=\"highlight\">yell</span>ow",
///         "name": "Banana"
///     })
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredItem {
    id: Option<Value>,
    fields: Vec<(String, String)>,
}

impl FilteredItem {
    pub(crate) fn new() -> Self {
        FilteredItem::default()
    }

    pub(crate) fn set_id(&mut self, id: Value) {
        self.id = Some(id);
    }

    pub(crate) fn push_field(&mut self, name: impl Into<String>, display: impl Into<String>) {
        self.fields.push((name.into(), display.into()));
    }

    /// Returns the source record's `_id`, if it had one.
    pub fn id(&self) -> Option<&Value> {
        self.id.as_ref()
    }

    /// Returns the display string of a property, if it is part of the item.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, display)| display.as_str())
    }

    /// Returns `true` if the property is part of the item.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterates over `(property, display)` pairs in display order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, display)| (name.as_str(), display.as_str()))
    }

    /// Returns the property names in display order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Returns the number of properties, not counting `_id`.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the item holds no properties besides `_id`.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Converts the item into a JSON object.
    pub fn to_json(&self) -> Value {
        let mut object = Map::with_capacity(self.fields.len() + 1);
        if let Some(id) = &self.id {
            object.insert(ID_FIELD.to_string(), id.clone());
        }
        for (name, display) in &self.fields {
            object.insert(name.clone(), Value::String(display.clone()));
        }
        Value::Object(object)
    }
}

impl Serialize for FilteredItem {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len = self.fields.len() + usize::from(self.id.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        if let Some(id) = &self.id {
            map.serialize_entry(ID_FIELD, id)?;
        }
        for (name, display) in &self.fields {
            map.serialize_entry(name, display)?;
        }
        map.end()
    }
}

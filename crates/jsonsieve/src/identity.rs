//! Record identity assignment.
//!
//! Every record in a collection carries an `_id` so a filtered projection can
//! be traced back to its source record. Ids are assigned once, in place, and
//! never reassigned.

use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

/// Name of the identity property stored on every record.
pub const ID_FIELD: &str = "_id";

/// Assigns a random UUID v4 `_id` to every object record that lacks one.
///
/// Records that already have an `_id` are left untouched, whatever its value.
/// Non-object records are skipped. Returns the number of ids assigned, so a
/// second call on the same collection returns `0`.
///
/// # Example
///
/// ```
/// use jsonsieve::{assign_ids, ID_FIELD};
/// use serde_json::json;
///
/// let mut records = vec![json!({"name": "Apple"}), json!({"_id": "b", "name": "Banana"})];
/// assert_eq!(assign_ids(&mut records), 1);
/// assert!(records[0].get(ID_FIELD).is_some());
/// assert_eq!(records[1][ID_FIELD], "b");
/// ```
pub fn assign_ids(records: &mut [Value]) -> usize {
    assign_ids_with(records, || Uuid::new_v4().to_string())
}

/// Like [`assign_ids`], with a caller-supplied id generator.
///
/// The generator is only called for records that need an id. It must
/// produce ids that are unique within the collection.
pub fn assign_ids_with<F>(records: &mut [Value], mut next_id: F) -> usize
where
    F: FnMut() -> String,
{
    let mut assigned = 0;
    for record in records.iter_mut() {
        let Some(object) = record.as_object_mut() else {
            continue;
        };
        if object.contains_key(ID_FIELD) {
            continue;
        }
        object.insert(ID_FIELD.to_string(), Value::String(next_id()));
        assigned += 1;
    }

    if assigned > 0 {
        debug!(assigned, total = records.len(), "assigned record ids");
    }
    assigned
}

/// Returns `true` if the record is an object carrying an `_id`.
pub fn has_id(record: &Value) -> bool {
    record_id(record).is_some()
}

/// Returns the record's `_id`, if it has one.
pub fn record_id(record: &Value) -> Option<&Value> {
    record.as_object()?.get(ID_FIELD)
}

//! Deep merge of JSON documents.

use serde_json::Value;

/// Merge `overlay` into `base` key by key.
///
/// Objects recurse. Arrays, scalars and `null` in the overlay replace the
/// base value wholesale. Keys only present in `base` are kept.
pub fn deep_merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                let recurse =
                    overlay_value.is_object() && base_map.get(&key).is_some_and(Value::is_object);
                if let Some(base_value) = base_map.get_mut(&key).filter(|_| recurse) {
                    deep_merge(base_value, overlay_value);
                } else {
                    base_map.insert(key, overlay_value);
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

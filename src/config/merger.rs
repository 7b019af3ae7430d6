//! Deep merge algorithm for YAML configuration values.
//!
//! A project's cairn.yml is overlaid on the built-in defaults before the
//! typed config is parsed, so a file only has to mention the keys it
//! changes. This module implements the merge semantics.
//!
//! # Merge Rules
//!
//! - Objects are merged recursively
//! - Arrays are replaced entirely (not merged)
//! - Null values in overlay delete the corresponding key from base
//! - Scalars in overlay replace scalars in base

use serde_yaml::Value;

/// Deep merge two YAML values.
///
/// The overlay wins at every point of conflict. Objects are merged
/// recursively, arrays are replaced entirely, and a null in the overlay
/// deletes the corresponding key from the base.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            let mut result = base_map.clone();

            for (key, overlay_value) in overlay_map {
                if overlay_value.is_null() {
                    result.remove(key);
                } else if let Some(base_value) = base_map.get(key) {
                    result.insert(key.clone(), deep_merge(base_value, overlay_value));
                } else {
                    result.insert(key.clone(), overlay_value.clone());
                }
            }

            Value::Mapping(result)
        }

        // Type mismatch or scalar: overlay wins
        (_, overlay) => overlay.clone(),
    }
}

//! Shared test utilities for the plateguard workspace.
//!
//! Lives in its own crate because `xtask` calls `normalize_nondeterministic` at runtime
//! as well as the CLI integration tests.

use serde_json::Value;

pub const TIMESTAMP_PLACEHOLDER: &str = "__TIMESTAMP__";
pub const VERSION_PLACEHOLDER: &str = "__VERSION__";

const TIMESTAMP_KEYS: [&str; 2] = ["started_at", "finished_at"];

/// Normalize report fields that change between runs, for golden-file comparison.
///
/// `tool.version` is replaced only on a root report envelope (an object with `schema`,
/// `tool`, `verdict`, and `findings`). Finding `data` payloads are free-form and may
/// carry their own `version` keys. Timestamp keys are replaced at any depth.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = ["schema", "tool", "verdict", "findings"]
            .iter()
            .all(|k| obj.contains_key(*k));
        if is_envelope
            && let Some(tool) = obj.get_mut("tool").and_then(Value::as_object_mut)
            && tool.contains_key("version")
        {
            tool.insert(
                "version".to_string(),
                Value::String(VERSION_PLACEHOLDER.to_string()),
            );
        }
    }
    replace_timestamps(&mut value);
    value
}

fn replace_timestamps(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in TIMESTAMP_KEYS {
                if let Some(slot) = map.get_mut(key) {
                    *slot = Value::String(TIMESTAMP_PLACEHOLDER.to_string());
                }
            }
            map.values_mut().for_each(replace_timestamps);
        }
        Value::Array(arr) => arr.iter_mut().for_each(replace_timestamps),
        _ => {}
    }
}

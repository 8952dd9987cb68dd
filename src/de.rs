//! Lenient deserialization helpers for hand-edited snapshot files

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

/// Treat an explicit `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Read a list field one element at a time.
///
/// `null` or a non-array value yields an empty list; elements that do not
/// parse are dropped with a warning and the rest are kept.
pub(crate) fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        Value::Null => return Ok(Vec::new()),
        other => {
            warn!(found = %other, "expected a list; using an empty one");
            return Ok(Vec::new());
        }
    };
    let total = items.len();
    let kept: Vec<T> = items
        .into_iter()
        .filter_map(|item| match T::deserialize(&item) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                warn!(element = %item, error = %e, "dropping malformed list element");
                None
            }
        })
        .collect();
    if kept.len() < total {
        warn!(kept = kept.len(), total, "list had malformed elements");
    }
    Ok(kept)
}

/// Keep a field that was present in the input, `null` included.
///
/// Pair with `#[serde(default)]` so an absent field stays `None`.
pub(crate) fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

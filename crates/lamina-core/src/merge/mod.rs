//! Ordered merge with overwrite-on-duplicate semantics.
//!
//! "Last source wins" for the flat key table and "last named-config wins" for
//! the scope map are the same abstract operation: a fold over an ordered
//! sequence of entries where a later duplicate key replaces the earlier value.
//! It is implemented once here and reused everywhere precedence applies.

use indexmap::IndexMap;
use std::hash::Hash;

/// Folds an ordered sequence of entries into a map, later duplicates
/// replacing earlier values.
///
/// The first occurrence of a key determines its position in the resulting
/// map; a replacement only changes the value. Callers therefore get both
/// deterministic iteration and last-wins precedence from one pass.
///
/// # Example
///
/// ```
/// use lamina_core::merge::ordered_merge;
///
/// let merged = ordered_merge([("host", "A"), ("port", "5"), ("host", "B")]);
/// assert_eq!(merged.get("host"), Some(&"B"));
/// assert_eq!(merged.get("port"), Some(&"5"));
/// ```
pub fn ordered_merge<K, V, I>(entries: I) -> IndexMap<K, V>
where
    K: Eq + Hash,
    I: IntoIterator<Item = (K, V)>,
{
    let mut out = IndexMap::new();
    for (key, value) in entries {
        out.insert(key, value);
    }
    out
}

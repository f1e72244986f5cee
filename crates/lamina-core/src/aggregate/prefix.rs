//! Dotted-namespace prefix extraction and index accumulation.

use crate::props::PropertyMap;
use crate::types::SourceId;
use indexmap::IndexMap;

/// Returns the parent prefix of a dotted key, obtained by stripping the
/// trailing `.segment`. A key with no `.` has no parent; the empty prefix is
/// never produced.
pub fn parent_prefix(key: &str) -> Option<&str> {
    match key.rfind('.') {
        Some(idx) if idx > 0 => Some(&key[..idx]),
        _ => None,
    }
}

/// Iterates every proper ancestor prefix of a key, nearest first
/// (`a.b.c` → `a.b`, `a`).
pub fn ancestor_prefixes(key: &str) -> impl Iterator<Item = &str> {
    std::iter::successors(parent_prefix(key), |prefix| parent_prefix(prefix))
}

/// Accumulates the prefix index over sources in fold order.
///
/// Every key contributes its pair to the table of each of its ancestor
/// prefixes. Precedence is per individual key: a later source replaces only
/// the keys it defines under a prefix, never the whole prefix table.
pub(crate) fn build_prefix_index(
    order: &[SourceId],
    by_source: &IndexMap<SourceId, PropertyMap>,
) -> IndexMap<String, PropertyMap> {
    let mut out: IndexMap<String, PropertyMap> = IndexMap::new();

    for id in order {
        let Some(table) = by_source.get(id) else {
            continue;
        };
        for (key, value) in table.iter() {
            for prefix in ancestor_prefixes(key) {
                out.entry(prefix.to_string()).or_default().insert(key, value);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_prefix_strips_trailing_segment() {
        assert_eq!(parent_prefix("a.b.c"), Some("a.b"));
        assert_eq!(parent_prefix("a.b"), Some("a"));
        assert_eq!(parent_prefix("a"), None);
    }

    #[test]
    fn test_parent_prefix_never_yields_empty() {
        assert_eq!(parent_prefix(".hidden"), None);
        assert_eq!(parent_prefix("."), None);
    }

    #[test]
    fn test_ancestor_prefixes_nearest_first() {
        let prefixes: Vec<&str> = ancestor_prefixes("db.pool.max.size").collect();
        assert_eq!(prefixes, vec!["db.pool.max", "db.pool", "db"]);

        assert_eq!(ancestor_prefixes("flat").count(), 0);
    }

    #[test]
    fn test_index_groups_keys_under_every_ancestor() {
        let mut table = PropertyMap::new();
        table.insert("db.pool.size", "10");
        table.insert("db.host", "localhost");
        table.insert("flat", "x");

        let id = SourceId::from("base.properties");
        let by_source = IndexMap::from([(id.clone(), table)]);
        let index = build_prefix_index(&[id], &by_source);

        let db = index.get("db").unwrap();
        assert_eq!(db.get("db.pool.size"), Some("10"));
        assert_eq!(db.get("db.host"), Some("localhost"));

        let db_pool = index.get("db.pool").unwrap();
        assert_eq!(db_pool.len(), 1);
        assert_eq!(db_pool.get("db.pool.size"), Some("10"));

        // Dot-free keys contribute no prefix entries.
        assert!(!index.contains_key("flat"));
        assert!(!index.contains_key(""));
    }

    #[test]
    fn test_later_source_wins_per_key() {
        let mut base = PropertyMap::new();
        base.insert("db.host", "A");
        base.insert("db.port", "5");
        let mut overlay = PropertyMap::new();
        overlay.insert("db.host", "B");

        let base_id = SourceId::from("base.properties");
        let overlay_id = SourceId::from("override.properties");
        let by_source = IndexMap::from([(base_id.clone(), base), (overlay_id.clone(), overlay)]);
        let index = build_prefix_index(&[base_id, overlay_id], &by_source);

        let db = index.get("db").unwrap();
        assert_eq!(db.get("db.host"), Some("B"));
        assert_eq!(db.get("db.port"), Some("5"));
    }
}

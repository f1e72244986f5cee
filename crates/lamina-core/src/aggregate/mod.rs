//! Multi-source property aggregation.
//!
//! A [`PropertyAggregator`] folds an ordered list of property sources into a
//! single keyed lookup plus a prefix index over the dotted key namespace.
//! The caller-supplied source order IS the override precedence: a later
//! source replaces earlier values for the keys it defines. Built once, then
//! read-only; refreshing configuration means building a new aggregator and
//! swapping it in at the caller.

pub mod prefix;

pub use prefix::{ancestor_prefixes, parent_prefix};

use crate::log::ConfigLog;
use crate::merge::ordered_merge;
use crate::props::{PropertyMap, PropertySource, ResourceLoader};
use crate::types::SourceId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An ordered set of property sources merged into one queryable model.
///
/// # Example
///
/// ```
/// use lamina_core::{PropertyAggregator, PropertyMap, PropertySource};
///
/// let mut base = PropertyMap::new();
/// base.insert("db.host", "A");
/// base.insert("db.port", "5");
/// let mut overlay = PropertyMap::new();
/// overlay.insert("db.host", "B");
///
/// let agg = PropertyAggregator::from_sources(vec![
///     PropertySource::new("base.properties", base),
///     PropertySource::new("override.properties", overlay),
/// ]);
///
/// assert_eq!(agg.get("db.host"), Some("B"));
/// assert_eq!(agg.get("db.port"), Some("5"));
/// let db = agg.properties_for_prefix("db").unwrap();
/// assert_eq!(db.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyAggregator {
    source_order: Vec<SourceId>,
    by_source: IndexMap<SourceId, PropertyMap>,
    by_key: PropertyMap,
    by_prefix: IndexMap<String, PropertyMap>,
}

impl PropertyAggregator {
    /// Loads the given identifiers in order and builds the aggregator.
    ///
    /// Never fails as a whole: an identifier that resolves to no resource is
    /// dropped after a debug-level report, and one whose resource cannot be
    /// read or parsed is dropped after a warning. The reserved identifier
    /// `"/"` bypasses the loader and snapshots the ambient process
    /// environment.
    pub fn load(ids: &[SourceId], loader: &dyn ResourceLoader, log: &dyn ConfigLog) -> Self {
        let mut sources = Vec::new();

        for id in ids {
            if id.is_system() {
                sources.push(PropertySource::new(id.clone(), ambient_properties(log)));
                continue;
            }
            match loader.load(id) {
                Ok(Some(properties)) => sources.push(PropertySource::new(id.clone(), properties)),
                Ok(None) => log.debug(&format!("configuration properties not found at '{id}'")),
                Err(e) => log.warn(&format!(
                    "failed to load configuration properties from '{id}': {e}"
                )),
            }
        }

        Self::from_sources(sources)
    }

    /// Builds the aggregator from already-loaded sources, in the given order.
    pub fn from_sources(sources: Vec<PropertySource>) -> Self {
        let mut source_order = Vec::with_capacity(sources.len());
        let mut by_source: IndexMap<SourceId, PropertyMap> = IndexMap::new();

        for source in sources {
            source_order.push(source.id.clone());
            by_source.insert(source.id, source.properties);
        }

        let by_key: PropertyMap = ordered_merge(
            source_order
                .iter()
                .filter_map(|id| by_source.get(id))
                .flat_map(|table| {
                    table
                        .iter()
                        .map(|(key, value)| (key.to_string(), value.to_string()))
                }),
        )
        .into();

        let by_prefix = prefix::build_prefix_index(&source_order, &by_source);

        Self {
            source_order,
            by_source,
            by_key,
            by_prefix,
        }
    }

    /// Returns the merged value for a key, last source winning.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.by_key.get(key)
    }

    /// Returns the table loaded from one source (not merged).
    pub fn properties_for_source(&self, id: &SourceId) -> Option<&PropertyMap> {
        self.by_source.get(id)
    }

    /// Returns every key/value pair falling under a dotted-namespace prefix,
    /// across all sources, last source winning per key.
    pub fn properties_for_prefix(&self, prefix: &str) -> Option<&PropertyMap> {
        self.by_prefix.get(prefix)
    }

    /// Returns the identifiers that loaded successfully, in the
    /// caller-supplied order.
    pub fn source_ids(&self) -> &[SourceId] {
        &self.source_order
    }

    /// Returns the fully merged key/value table.
    pub fn merged(&self) -> &PropertyMap {
        &self.by_key
    }
}

/// Snapshots the ambient process environment as a property table.
///
/// Entries that are not valid Unicode cannot be represented and are skipped
/// with a single warning; this is a recoverable condition, never a build
/// failure. Entries are sorted by key so iteration is deterministic.
fn ambient_properties(log: &dyn ConfigLog) -> PropertyMap {
    let mut skipped = 0usize;
    let mut entries: Vec<(String, String)> = std::env::vars_os()
        .filter_map(|(key, value)| match (key.into_string(), value.into_string()) {
            (Ok(key), Ok(value)) => Some((key, value)),
            _ => {
                skipped += 1;
                None
            }
        })
        .collect();
    entries.sort();

    if skipped > 0 {
        log.warn(&format!(
            "skipped {skipped} ambient environment entr{} that were not valid Unicode",
            if skipped == 1 { "y" } else { "ies" }
        ));
    }

    entries.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::NullLog;

    fn table(pairs: &[(&str, &str)]) -> PropertyMap {
        let mut out = PropertyMap::new();
        for (key, value) in pairs {
            out.insert(*key, *value);
        }
        out
    }

    #[test]
    fn test_last_source_wins() {
        let agg = PropertyAggregator::from_sources(vec![
            PropertySource::new("base.properties", table(&[("db.host", "A"), ("db.port", "5")])),
            PropertySource::new("override.properties", table(&[("db.host", "B")])),
        ]);

        // Última fuente gana
        assert_eq!(agg.get("db.host"), Some("B"));
        assert_eq!(agg.get("db.port"), Some("5"));
        assert_eq!(agg.get("db.name"), None);
    }

    #[test]
    fn test_per_source_tables_are_not_merged() {
        let agg = PropertyAggregator::from_sources(vec![
            PropertySource::new("base.properties", table(&[("db.host", "A")])),
            PropertySource::new("override.properties", table(&[("db.host", "B")])),
        ]);

        let base = agg
            .properties_for_source(&SourceId::from("base.properties"))
            .unwrap();
        assert_eq!(base.get("db.host"), Some("A"));
        assert!(
            agg.properties_for_source(&SourceId::from("missing.properties"))
                .is_none()
        );
    }

    #[test]
    fn test_prefix_query_spans_sources() {
        let agg = PropertyAggregator::from_sources(vec![
            PropertySource::new("base.properties", table(&[("db.host", "A"), ("db.port", "5")])),
            PropertySource::new("override.properties", table(&[("db.host", "B")])),
        ]);

        let db = agg.properties_for_prefix("db").unwrap();
        assert_eq!(db.get("db.host"), Some("B"));
        assert_eq!(db.get("db.port"), Some("5"));
        assert_eq!(db.len(), 2);

        assert!(agg.properties_for_prefix("db.host").is_none());
        assert!(agg.properties_for_prefix("").is_none());
    }

    #[test]
    fn test_key_and_prefix_namespaces_are_independent() {
        let agg = PropertyAggregator::from_sources(vec![PropertySource::new(
            "base.properties",
            table(&[("a.b", "leaf"), ("a.b.c", "deep")]),
        )]);

        // a.b is a key in its own right AND a prefix because of a.b.c.
        assert_eq!(agg.get("a.b"), Some("leaf"));
        let under_ab = agg.properties_for_prefix("a.b").unwrap();
        assert_eq!(under_ab.len(), 1);
        assert_eq!(under_ab.get("a.b.c"), Some("deep"));
    }

    #[test]
    fn test_empty_aggregator() {
        let agg = PropertyAggregator::from_sources(Vec::new());

        assert!(agg.source_ids().is_empty());
        assert!(agg.merged().is_empty());
        assert_eq!(agg.get("anything"), None);
    }

    #[test]
    fn test_ambient_properties_is_sorted() {
        let ambient = ambient_properties(&NullLog);
        let keys: Vec<&str> = ambient.iter().map(|(key, _)| key).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }
}

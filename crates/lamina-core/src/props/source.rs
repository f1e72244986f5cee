use crate::error::Result;
use crate::props::map::PropertyMap;
use crate::types::SourceId;
use serde::{Deserialize, Serialize};

/// A named source of configuration properties.
///
/// A property source acts as a container for the flat key/value table loaded
/// from one identifier. It usually corresponds to a `.properties` file or to
/// the ambient process environment. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySource {
    /// The identifier this source was loaded from.
    pub id: SourceId,

    /// The properties loaded from it.
    pub properties: PropertyMap,
}

impl PropertySource {
    /// Creates a new PropertySource.
    pub fn new(id: impl Into<SourceId>, properties: PropertyMap) -> Self {
        Self {
            id: id.into(),
            properties,
        }
    }
}

/// A loader of property tables from source identifiers.
///
/// This trait abstracts over the resource-access mechanism (filesystem,
/// archive, remote store) so the aggregator can be built without knowing
/// where property tables come from. The `lamina-sources` crate provides a
/// filesystem implementation.
///
/// # Contract
///
/// - `Ok(Some(table))`: the identifier resolved to a resource and its
///   properties were read.
/// - `Ok(None)`: the identifier resolves to no resource at all. This is an
///   expected, benign outcome; the aggregator drops the identifier after a
///   debug-level report.
/// - `Err(_)`: the resource was found but could not be read or parsed. The
///   aggregator drops the identifier after a warning.
///
/// The reserved ambient-environment identifier never reaches a loader; the
/// aggregator handles it directly.
pub trait ResourceLoader: Send + Sync {
    /// Loads the property table for the given identifier.
    fn load(&self, id: &SourceId) -> Result<Option<PropertyMap>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LaminaError;

    struct FixedLoader;

    impl ResourceLoader for FixedLoader {
        fn load(&self, id: &SourceId) -> Result<Option<PropertyMap>> {
            match id.as_str() {
                "present.properties" => {
                    let mut table = PropertyMap::new();
                    table.insert("a", "1");
                    Ok(Some(table))
                }
                "broken.properties" => {
                    Err(LaminaError::parse_error(id.as_str(), "malformed line"))
                }
                _ => Ok(None),
            }
        }
    }

    #[test]
    fn test_loader_contract() {
        let loader = FixedLoader;

        let loaded = loader.load(&SourceId::from("present.properties")).unwrap();
        assert_eq!(loaded.unwrap().get("a"), Some("1"));

        assert!(loader.load(&SourceId::from("missing.properties")).unwrap().is_none());
        assert!(loader.load(&SourceId::from("broken.properties")).is_err());
    }

    #[test]
    fn test_property_source_new() {
        let mut table = PropertyMap::new();
        table.insert("k", "v");
        let source = PropertySource::new("app.properties", table);

        assert_eq!(source.id.as_str(), "app.properties");
        assert_eq!(source.properties.get("k"), Some("v"));
    }
}

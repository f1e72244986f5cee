//! Scoped override model: a default scope, named scopes, per-user overrides.

pub mod extract;

pub use extract::{extract_config, ROOT_TAG};

use crate::props::PropertyMap;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One scope of the override tree: its own flat properties plus per-user
/// override tables.
///
/// A scope with no properties and no overrides is valid; `Default` produces
/// one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct NamedScope {
    properties: PropertyMap,
    overrides_by_user: IndexMap<String, PropertyMap>,
}

impl NamedScope {
    /// Creates a scope from its properties and per-user overrides.
    pub fn new(properties: PropertyMap, overrides_by_user: IndexMap<String, PropertyMap>) -> Self {
        Self {
            properties,
            overrides_by_user,
        }
    }

    /// This scope's own flat properties.
    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    /// Looks up one of this scope's own properties.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key)
    }

    /// The per-user override tables keyed by user name.
    pub fn overrides_by_user(&self) -> &IndexMap<String, PropertyMap> {
        &self.overrides_by_user
    }

    /// The override table for one user, if any.
    pub fn user_overrides(&self, user: &str) -> Option<&PropertyMap> {
        self.overrides_by_user.get(user)
    }

    /// Looks up one user's override for a key.
    ///
    /// Precedence between a scope's own properties and a user's overrides is
    /// the caller's concern; this is a plain lookup.
    pub fn user_override(&self, user: &str, key: &str) -> Option<&str> {
        self.overrides_by_user.get(user)?.get(key)
    }

    /// Returns true if the scope holds no properties and no overrides.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty() && self.overrides_by_user.is_empty()
    }
}

/// The resolved override tree: one default scope plus named scopes.
///
/// Constructed once by [`extract_config`] and read-only thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    default_scope: NamedScope,
    scopes_by_name: IndexMap<String, NamedScope>,
}

impl Config {
    /// Creates a config from its default scope and named scopes.
    pub fn new(default_scope: NamedScope, scopes_by_name: IndexMap<String, NamedScope>) -> Self {
        Self {
            default_scope,
            scopes_by_name,
        }
    }

    /// The default scope.
    pub fn default_scope(&self) -> &NamedScope {
        &self.default_scope
    }

    /// The named scope for `name`, if any.
    pub fn scope(&self, name: &str) -> Option<&NamedScope> {
        self.scopes_by_name.get(name)
    }

    /// The scope names, in document order.
    pub fn scope_names(&self) -> impl Iterator<Item = &str> {
        self.scopes_by_name.keys().map(String::as_str)
    }

    /// All named scopes keyed by name.
    pub fn scopes_by_name(&self) -> &IndexMap<String, NamedScope> {
        &self.scopes_by_name
    }
}

#![allow(dead_code)]
use std::sync::Mutex;

use indexmap::IndexMap;
use lamina_core::{ConfigLog, Element, LaminaError, PropertyMap, ResourceLoader, SourceId};

/// A [`ConfigLog`] that records every message for later assertions.
#[derive(Debug, Default)]
pub struct RecordingLog {
    debugs: Mutex<Vec<String>>,
    warns: Mutex<Vec<String>>,
}

impl RecordingLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn debugs(&self) -> Vec<String> {
        self.debugs.lock().unwrap().clone()
    }

    pub fn warns(&self) -> Vec<String> {
        self.warns.lock().unwrap().clone()
    }
}

impl ConfigLog for RecordingLog {
    fn debug(&self, message: &str) {
        self.debugs.lock().unwrap().push(message.to_string());
    }

    fn warn(&self, message: &str) {
        self.warns.lock().unwrap().push(message.to_string());
    }
}

/// An in-memory [`ResourceLoader`] over fixed tables.
///
/// Identifiers listed in `failing` report an I/O error; identifiers with no
/// table report not-found.
#[derive(Debug, Default)]
pub struct StaticLoader {
    tables: IndexMap<String, PropertyMap>,
    failing: Vec<String>,
}

impl StaticLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, id: &str, pairs: &[(&str, &str)]) -> Self {
        self.tables.insert(id.to_string(), table(pairs));
        self
    }

    pub fn with_failure(mut self, id: &str) -> Self {
        self.failing.push(id.to_string());
        self
    }
}

impl ResourceLoader for StaticLoader {
    fn load(&self, id: &SourceId) -> Result<Option<PropertyMap>, LaminaError> {
        if self.failing.iter().any(|f| f == id.as_str()) {
            return Err(LaminaError::Io(std::io::Error::other(
                "simulated read failure",
            )));
        }
        Ok(self.tables.get(id.as_str()).cloned())
    }
}

/// Helper to build a PropertyMap from pairs.
pub fn table(pairs: &[(&str, &str)]) -> PropertyMap {
    let mut out = PropertyMap::new();
    for (key, value) in pairs {
        out.insert(*key, *value);
    }
    out
}

/// Helper to build a `property` document element.
pub fn property(name: &str, value: &str) -> Element {
    Element::new("property")
        .with_attribute("name", name)
        .with_text(value)
}

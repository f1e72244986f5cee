//! Extraction of the scope tree from a configuration document.
//!
//! The traversal is permissive: a malformed element (a missing required
//! attribute, a failed text read) is reported through the logging capability
//! and skipped, and extraction keeps whatever was collected so far. The only
//! fatal condition is a root element with the wrong tag. Each call is a pure
//! traversal of the input tree; no state is kept between calls.

use crate::document::TreeElement;
use crate::error::{LaminaError, Result};
use crate::log::ConfigLog;
use crate::merge::ordered_merge;
use crate::props::PropertyMap;
use crate::scopes::{Config, NamedScope};

/// Tag required on the root element of a configuration document.
pub const ROOT_TAG: &str = "lamina-config";

const DEFAULT_CONFIG_TAG: &str = "default-config";
const NAMED_CONFIG_TAG: &str = "named-config";
const USER_OVERRIDES_TAG: &str = "user-overrides";
const PROPERTY_TAG: &str = "property";

const NAME_ATTR: &str = "name";
const USER_ATTR: &str = "user";

/// Extracts the scope tree from a pre-parsed configuration document.
///
/// # Errors
///
/// Fails with [`LaminaError::Schema`] if the root element's tag is not
/// [`ROOT_TAG`]; the error names the tag actually encountered. Every other
/// malformed entry is reported via `log` and skipped.
pub fn extract_config<E: TreeElement>(root: &E, log: &dyn ConfigLog) -> Result<Config> {
    if root.tag() != ROOT_TAG {
        return Err(LaminaError::schema(ROOT_TAG, root.tag()));
    }

    let default_elems = root.children_by_tag(DEFAULT_CONFIG_TAG);
    if default_elems.len() > 1 {
        log.warn(&format!(
            "configuration document contained {} '{DEFAULT_CONFIG_TAG}' elements; using the first",
            default_elems.len()
        ));
    }
    let default_scope = match default_elems.first() {
        Some(elem) => extract_scope(*elem, log),
        None => NamedScope::default(),
    };

    let mut named = Vec::new();
    for elem in root.children_by_tag(NAMED_CONFIG_TAG) {
        match elem.attribute(NAME_ATTR) {
            Some(name) if !name.is_empty() => {
                named.push((name.to_string(), extract_scope(elem, log)));
            }
            _ => log.warn(&format!(
                "configuration document contained {NAMED_CONFIG_TAG} element without \
                 {NAME_ATTR} attribute: {}",
                elem.describe()
            )),
        }
    }

    Ok(Config::new(default_scope, ordered_merge(named)))
}

/// Extracts one scope from a `default-config` or `named-config` element.
fn extract_scope<E: TreeElement>(elem: &E, log: &dyn ConfigLog) -> NamedScope {
    let properties = extract_properties(elem, log);

    let mut overrides = Vec::new();
    for user_elem in elem.children_by_tag(USER_OVERRIDES_TAG) {
        match user_elem.attribute(USER_ATTR) {
            Some(user) if !user.is_empty() => {
                overrides.push((user.to_string(), extract_properties(user_elem, log)));
            }
            _ => log.warn(&format!(
                "configuration document contained {USER_OVERRIDES_TAG} element without \
                 {USER_ATTR} attribute: {}",
                user_elem.describe()
            )),
        }
    }

    NamedScope::new(properties, ordered_merge(overrides))
}

/// Collects the immediate `property` children of one container into a flat
/// table, later same-named properties overriding earlier ones.
///
/// A failed text read aborts only the remainder of this container; the
/// properties collected before it are kept.
fn extract_properties<E: TreeElement>(elem: &E, log: &dyn ConfigLog) -> PropertyMap {
    let mut pairs = Vec::new();

    for prop_elem in elem.children_by_tag(PROPERTY_TAG) {
        match prop_elem.attribute(NAME_ATTR) {
            Some(name) if !name.is_empty() => match prop_elem.text() {
                Ok(value) => pairs.push((name.to_string(), value)),
                Err(e) => {
                    log.warn(&format!(
                        "an error occurred while reading a {PROPERTY_TAG} element ({e}); \
                         some configuration information has probably been ignored"
                    ));
                    break;
                }
            },
            _ => log.warn(&format!(
                "configuration document contained {PROPERTY_TAG} element without \
                 {NAME_ATTR} attribute: {}",
                prop_elem.describe()
            )),
        }
    }

    ordered_merge(pairs).into()
}
